//! Persistence contracts and implementations.
//!
//! # Responsibility
//! - Model browser-style key-value storage as a small trait.
//! - Encode/decode the portfolio document as one JSON blob under one key.
//!
//! # Invariants
//! - Every save replaces the whole blob; there are no delta writes.
//! - Load and save never surface errors to callers; failures are logged
//!   and degrade to the seed document or a skipped write.

pub mod kv_store;
pub mod portfolio_repo;
