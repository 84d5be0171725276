//! Fragment-based page routing.
//!
//! # Responsibility
//! - Map a location fragment to the page that should render.
//! - Track the current path and notify observers on navigation.
//!
//! # Invariants
//! - Page selection is a fixed-priority rule list over the lower-cased
//!   path: root, about, portfolio, contact, admin, then home fallback.
//! - Navigation highlighting is derived from page selection.

pub mod page;
pub mod router;
