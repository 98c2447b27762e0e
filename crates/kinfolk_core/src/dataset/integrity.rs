//! Read-only integrity check over a loaded dataset.
//!
//! # Responsibility
//! - Report id collisions, malformed ids and questionable relationship
//!   edges so data authors can fix the source documents.
//!
//! # Invariants
//! - The check never mutates or filters the dataset.
//! - Issues are reported in collection order, people first.
//! - Dangling and self-referencing edges are never also reported as
//!   missing an inverse.

use crate::dataset::Dataset;
use crate::model::person::{Person, RelationshipType};
use crate::model::{Record, RecordId};
use crate::query::filter::find_by_id;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

static RECORD_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid record id regex"));

/// Collection an issue was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    People,
    Places,
    Stories,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Places => "places",
            Self::Stories => "stories",
        }
    }
}

/// One integrity finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    DuplicateId {
        collection: Collection,
        id: RecordId,
    },
    /// Id is not a lowercase kebab-case slug.
    MalformedId {
        collection: Collection,
        id: RecordId,
    },
    DanglingReference {
        person_id: RecordId,
        kind: RelationshipType,
        target_id: RecordId,
    },
    SelfReference {
        person_id: RecordId,
        kind: RelationshipType,
    },
    MissingInverse {
        person_id: RecordId,
        kind: RelationshipType,
        target_id: RecordId,
        expected: RelationshipType,
    },
}

impl Display for DatasetIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id `{id}` in {}", collection.as_str())
            }
            Self::MalformedId { collection, id } => {
                write!(f, "malformed id `{id}` in {}", collection.as_str())
            }
            Self::DanglingReference {
                person_id,
                kind,
                target_id,
            } => write!(
                f,
                "`{person_id}` has {kind} edge to unknown person `{target_id}`"
            ),
            Self::SelfReference { person_id, kind } => {
                write!(f, "`{person_id}` has {kind} edge to itself")
            }
            Self::MissingInverse {
                person_id,
                kind,
                target_id,
                expected,
            } => write!(
                f,
                "`{person_id}` has {kind} edge to `{target_id}` but `{target_id}` has no {expected} edge back"
            ),
        }
    }
}

/// Findings of [`check_dataset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub issues: Vec<DatasetIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks ids in every collection and relationship edges between people.
pub fn check_dataset(dataset: &Dataset) -> IntegrityReport {
    let mut issues = Vec::new();
    check_ids(Collection::People, &dataset.people, &mut issues);
    check_ids(Collection::Places, &dataset.places, &mut issues);
    check_ids(Collection::Stories, &dataset.stories, &mut issues);
    check_edges(&dataset.people, &mut issues);
    IntegrityReport { issues }
}

/// Returns whether `id` is a lowercase kebab-case slug.
pub fn is_well_formed_id(id: &str) -> bool {
    RECORD_ID_RE.is_match(id)
}

fn check_ids<T: Record>(collection: Collection, items: &[T], issues: &mut Vec<DatasetIssue>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for item in items {
        let id = item.id();
        if !is_well_formed_id(id) {
            issues.push(DatasetIssue::MalformedId {
                collection,
                id: id.to_string(),
            });
        }
        if !seen.insert(id) && reported.insert(id) {
            issues.push(DatasetIssue::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
}

fn check_edges(people: &[Person], issues: &mut Vec<DatasetIssue>) {
    for person in people {
        for edge in &person.relationships {
            if edge.person_id == person.id {
                issues.push(DatasetIssue::SelfReference {
                    person_id: person.id.clone(),
                    kind: edge.kind,
                });
                continue;
            }
            let Some(target) = find_by_id(people, &edge.person_id) else {
                issues.push(DatasetIssue::DanglingReference {
                    person_id: person.id.clone(),
                    kind: edge.kind,
                    target_id: edge.person_id.clone(),
                });
                continue;
            };
            let expected = edge.kind.inverse();
            if !target.has_edge(expected, &person.id) {
                issues.push(DatasetIssue::MissingInverse {
                    person_id: person.id.clone(),
                    kind: edge.kind,
                    target_id: edge.person_id.clone(),
                    expected,
                });
            }
        }
    }
}
