//! Core use-case services.
//!
//! # Responsibility
//! - Own the portfolio document and expose its mutation entry points.
//! - Turn form submissions into store mutations.
//! - Derive page projections from the current document snapshot.
//!
//! # Invariants
//! - Every document mutation goes through `PortfolioStore`.

pub mod admin_console;
pub mod contact_service;
pub mod portfolio_store;
pub mod showcase;
