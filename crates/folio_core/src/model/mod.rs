//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the single portfolio document and the records it aggregates.
//! - Keep the persisted JSON shape in one place (camelCase field names).
//!
//! # Invariants
//! - Project and lead ids are unique within their sequences.
//! - New projects and leads are prepended (most recent first).
//! - `Lead::read` only ever moves from `false` to `true`.

pub mod document;
pub mod ids;
pub mod lead;
pub mod project;
pub mod seed;
pub mod settings;
pub mod testimonial;
pub mod validation;
