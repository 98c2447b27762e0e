//! Query/filter core over loaded archive collections.
//!
//! # Responsibility
//! - Identifier lookup, free-text search and categorical filters.
//! - AND-combination of independent filters.
//! - Relationship-edge hydration and grouping for profile display.
//!
//! # Invariants
//! - Every operation is pure: inputs are borrowed immutably, outputs are
//!   freshly allocated and borrow from the inputs.
//! - Result order always follows collection order.
//! - Lookups that find nothing return empty/absent values, never errors.

pub mod facet;
pub mod filter;
pub mod relationships;
