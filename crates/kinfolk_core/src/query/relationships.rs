//! Relationship-edge hydration and grouping.
//!
//! # Responsibility
//! - Resolve a person's stored edges into full related-person records.
//! - Partition resolved edges into the profile display groups.
//!
//! # Invariants
//! - Edges whose target id is unknown are dropped, never reported here.
//! - Resolution keeps stored edge order.
//! - Groups are disjoint; their union is exactly the resolved edges whose
//!   kind is in [`DISPLAYED_RELATIONSHIP_TYPES`].

use crate::model::person::{Person, Relationship, RelationshipType};
use crate::query::filter::find_by_id;
use std::collections::BTreeMap;

/// Relationship kinds rendered as profile groups, in display order.
pub const DISPLAYED_RELATIONSHIP_TYPES: [RelationshipType; 4] = [
    RelationshipType::Parent,
    RelationshipType::Sibling,
    RelationshipType::Spouse,
    RelationshipType::Child,
];

/// One stored edge plus the record it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRelationship<'a> {
    pub relationship: &'a Relationship,
    pub person: &'a Person,
}

impl ResolvedRelationship<'_> {
    pub fn kind(&self) -> RelationshipType {
        self.relationship.kind
    }
}

/// Person lookup plus hydrated edges; see [`relationships_for_person`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRelationships<'a> {
    pub person: Option<&'a Person>,
    pub relationships: Vec<ResolvedRelationship<'a>>,
}

/// Resolves each edge of `person` against `all_people`.
pub fn resolve_relationships<'a>(
    person: &'a Person,
    all_people: &'a [Person],
) -> Vec<ResolvedRelationship<'a>> {
    person
        .relationships
        .iter()
        .filter_map(|relationship| {
            find_by_id(all_people, &relationship.person_id).map(|related| ResolvedRelationship {
                relationship,
                person: related,
            })
        })
        .collect()
}

/// Partitions resolved edges by kind, keeping only displayed kinds.
///
/// Kinds with no edges have no entry.
pub fn group_by_type<'a>(
    relationships: &[ResolvedRelationship<'a>],
) -> BTreeMap<RelationshipType, Vec<ResolvedRelationship<'a>>> {
    let mut groups: BTreeMap<RelationshipType, Vec<ResolvedRelationship<'a>>> = BTreeMap::new();
    for resolved in relationships {
        if DISPLAYED_RELATIONSHIP_TYPES.contains(&resolved.kind()) {
            groups.entry(resolved.kind()).or_default().push(*resolved);
        }
    }
    groups
}

/// Looks up `person_id` and resolves its edges in one call.
///
/// An unknown id yields `person: None` and no relationships.
pub fn relationships_for_person<'a>(
    person_id: &str,
    all_people: &'a [Person],
) -> PersonRelationships<'a> {
    match find_by_id(all_people, person_id) {
        Some(person) => PersonRelationships {
            person: Some(person),
            relationships: resolve_relationships(person, all_people),
        },
        None => PersonRelationships {
            person: None,
            relationships: Vec::new(),
        },
    }
}

/// Plural group heading for a displayed relationship kind.
pub fn group_title(kind: RelationshipType) -> &'static str {
    match kind {
        RelationshipType::Parent => "Parents",
        RelationshipType::Sibling => "Siblings",
        RelationshipType::Spouse => "Spouses",
        RelationshipType::Child => "Children",
        other => other.label(),
    }
}
