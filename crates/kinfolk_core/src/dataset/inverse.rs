//! Opt-in completion of missing inverse relationship edges.
//!
//! # Invariants
//! - Input is never mutated; a completed copy is returned.
//! - Only edges between two distinct, existing people are mirrored.
//! - Existing edges and their order are kept; mirrored edges are appended
//!   and never duplicated.

use crate::model::person::{Person, Relationship};
use std::collections::HashMap;

/// Returns a copy of `people` where every `(A, kind, B)` edge has a
/// matching `(B, kind.inverse(), A)` edge.
///
/// Mirrored edges copy the source edge's `years`.
pub fn with_inverse_edges(people: &[Person]) -> Vec<Person> {
    // First record wins, matching `find_by_id`.
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(people.len());
    for (position, person) in people.iter().enumerate() {
        index.entry(person.id.as_str()).or_insert(position);
    }

    let mut completed = people.to_vec();
    for person in people {
        for edge in &person.relationships {
            if edge.person_id == person.id {
                continue;
            }
            let Some(&target_position) = index.get(edge.person_id.as_str()) else {
                continue;
            };
            let expected = edge.kind.inverse();
            let target = &mut completed[target_position];
            if target.has_edge(expected, &person.id) {
                continue;
            }
            target.relationships.push(Relationship {
                kind: expected,
                person_id: person.id.clone(),
                years: edge.years.clone(),
            });
        }
    }
    completed
}

/// Counts edges that [`with_inverse_edges`] would add.
pub fn missing_inverse_count(people: &[Person]) -> usize {
    let original: usize = people.iter().map(|person| person.relationships.len()).sum();
    let completed: usize = with_inverse_edges(people)
        .iter()
        .map(|person| person.relationships.len())
        .sum();
    completed - original
}
