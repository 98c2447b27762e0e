//! Person and relationship-edge model.
//!
//! # Responsibility
//! - Define the canonical family member record.
//! - Define typed, directional relationship edges and their inverses.
//!
//! # Invariants
//! - `id` is a stable slug, unique within the people collection.
//! - `generation` is positive; zero is rejected at deserialization.
//! - Edge order is preserved exactly as stored.
//! - An edge `(A, kind, B)` expects `(B, kind.inverse(), A)` on B, but the
//!   model does not enforce it (see `dataset::integrity`).

use crate::model::branch::Branch;
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::num::NonZeroU32;

/// Kind of a directed relationship edge, read as "the target is my ...".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipType {
    Spouse,
    Partner,
    Child,
    Parent,
    Sibling,
    /// The owner raised the target.
    Raised,
    /// The owner was raised by the target.
    RaisedBy,
    StepParent,
    StepChild,
    Adopted,
    AdoptedBy,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 11] = [
        RelationshipType::Spouse,
        RelationshipType::Partner,
        RelationshipType::Child,
        RelationshipType::Parent,
        RelationshipType::Sibling,
        RelationshipType::Raised,
        RelationshipType::RaisedBy,
        RelationshipType::StepParent,
        RelationshipType::StepChild,
        RelationshipType::Adopted,
        RelationshipType::AdoptedBy,
    ];

    /// Stable wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spouse => "spouse",
            Self::Partner => "partner",
            Self::Child => "child",
            Self::Parent => "parent",
            Self::Sibling => "sibling",
            Self::Raised => "raised",
            Self::RaisedBy => "raised-by",
            Self::StepParent => "step-parent",
            Self::StepChild => "step-child",
            Self::Adopted => "adopted",
            Self::AdoptedBy => "adopted-by",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == normalized)
    }

    /// Edge kind expected on the target record pointing back at the owner.
    ///
    /// `inverse` is an involution: `kind.inverse().inverse() == kind`.
    pub fn inverse(self) -> Self {
        match self {
            Self::Spouse => Self::Spouse,
            Self::Partner => Self::Partner,
            Self::Sibling => Self::Sibling,
            Self::Child => Self::Parent,
            Self::Parent => Self::Child,
            Self::Raised => Self::RaisedBy,
            Self::RaisedBy => Self::Raised,
            Self::StepParent => Self::StepChild,
            Self::StepChild => Self::StepParent,
            Self::Adopted => Self::AdoptedBy,
            Self::AdoptedBy => Self::Adopted,
        }
    }

    /// User-facing label for one edge of this kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::Spouse => "Spouse",
            Self::Partner => "Partner",
            Self::Child => "Child",
            Self::Parent => "Parent",
            Self::Sibling => "Sibling",
            Self::Raised => "Raised",
            Self::RaisedBy => "Raised by",
            Self::StepParent => "Step-parent",
            Self::StepChild => "Step-child",
            Self::Adopted => "Adopted",
            Self::AdoptedBy => "Adopted by",
        }
    }
}

impl Display for RelationshipType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed, typed edge from the owning person to another person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(rename = "type")]
    pub kind: RelationshipType,
    /// Target person id; may be dangling in incomplete data.
    pub person_id: RecordId,
    /// Free-text years active, e.g. `1972-1990`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<String>,
}

impl Relationship {
    pub fn new(kind: RelationshipType, person_id: impl Into<RecordId>) -> Self {
        Self {
            kind,
            person_id: person_id.into(),
            years: None,
        }
    }
}

/// Canonical family member record.
///
/// Dates are free text (`circa 1950`, `December 13`) and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    pub branch: Branch,
    /// Depth from the earliest documented ancestor in the branch.
    pub generation: NonZeroU32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Photo reference (path or URL), rendered as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Person {
    /// Creates a person with no optional fields and no edges.
    pub fn new(
        id: impl Into<RecordId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        branch: Branch,
        generation: NonZeroU32,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: None,
            maiden_name: None,
            nickname: None,
            birth_date: None,
            death_date: None,
            branch,
            generation,
            location: None,
            bio: None,
            photo: None,
            relationships: Vec::new(),
        }
    }

    /// Appends one edge, keeping stored order.
    pub fn with_relationship(mut self, kind: RelationshipType, person_id: &str) -> Self {
        self.relationships.push(Relationship::new(kind, person_id));
        self
    }

    /// `First Last`, as rendered on cards and profile headers.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns whether this person stores an edge of `kind` to `target`.
    pub fn has_edge(&self, kind: RelationshipType, target: &str) -> bool {
        self.relationships
            .iter()
            .any(|edge| edge.kind == kind && edge.person_id == target)
    }
}

impl Record for Person {
    fn id(&self) -> &str {
        &self.id
    }
}
