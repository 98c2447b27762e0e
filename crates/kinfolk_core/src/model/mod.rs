//! Family archive domain model.
//!
//! # Responsibility
//! - Define canonical records for people, places and stories.
//! - Own the closed taxonomies (branch, relationship type, place type,
//!   story category) and their display tables.
//!
//! # Invariants
//! - Every record is identified by a stable slug `RecordId`.
//! - Records are read-only after loading; no mutation APIs exist here.
//! - Wire names use camelCase keys and kebab-case enum values.

pub mod branch;
pub mod person;
pub mod place;
pub mod story;

/// Stable identifier shared by every record collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = String;

/// Common identity accessor for archive records.
pub trait Record {
    /// Returns the stable record identifier.
    fn id(&self) -> &str;
}
