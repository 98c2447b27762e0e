use kinfolk_core::dataset::integrity::Collection;
use kinfolk_core::dataset::inverse::missing_inverse_count;
use kinfolk_core::{
    check_dataset, with_inverse_edges, Branch, Dataset, DatasetIssue, Person, Place, PlaceType,
    RelationshipType,
};
use std::num::NonZeroU32;

fn generation(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap()
}

fn person(id: &str) -> Person {
    Person::new(id, "First", "Last", Branch::Core, generation(1))
}

#[test]
fn builtin_archive_is_consistent() {
    let report = check_dataset(&Dataset::builtin());
    assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
}

#[test]
fn duplicate_and_malformed_ids_are_reported() {
    let dataset = Dataset {
        people: vec![person("jeff-kerr"), person("jeff-kerr"), person("jeff-kerr")],
        places: vec![Place::new(
            "Grand Rapids",
            "Grand Rapids",
            "Michigan",
            PlaceType::Community,
            Branch::Core,
        )],
        stories: Vec::new(),
    };

    let report = check_dataset(&dataset);
    assert_eq!(
        report.issues,
        vec![
            DatasetIssue::DuplicateId {
                collection: Collection::People,
                id: "jeff-kerr".to_string(),
            },
            DatasetIssue::MalformedId {
                collection: Collection::Places,
                id: "Grand Rapids".to_string(),
            },
        ]
    );
}

#[test]
fn questionable_edges_are_reported_once_each() {
    let dataset = Dataset {
        people: vec![
            person("jeff-kerr")
                .with_relationship(RelationshipType::Parent, "don-kerr")
                .with_relationship(RelationshipType::Sibling, "ghost-kerr")
                .with_relationship(RelationshipType::Spouse, "jeff-kerr"),
            person("don-kerr"),
        ],
        ..Dataset::default()
    };

    let report = check_dataset(&dataset);
    assert_eq!(
        report.issues,
        vec![
            DatasetIssue::MissingInverse {
                person_id: "jeff-kerr".to_string(),
                kind: RelationshipType::Parent,
                target_id: "don-kerr".to_string(),
                expected: RelationshipType::Child,
            },
            DatasetIssue::DanglingReference {
                person_id: "jeff-kerr".to_string(),
                kind: RelationshipType::Sibling,
                target_id: "ghost-kerr".to_string(),
            },
            DatasetIssue::SelfReference {
                person_id: "jeff-kerr".to_string(),
                kind: RelationshipType::Spouse,
            },
        ]
    );
    assert!(report.issues[0].to_string().contains("no child edge back"));
}

#[test]
fn inverse_completion_mirrors_missing_edges() {
    let mut raised = person("norman-bud-lowe");
    raised.relationships.push(kinfolk_core::Relationship {
        kind: RelationshipType::Raised,
        person_id: "debby-kerr".to_string(),
        years: Some("1955-1966".to_string()),
    });
    let people = vec![
        raised,
        person("debby-kerr").with_relationship(RelationshipType::Spouse, "don-kerr"),
        person("don-kerr").with_relationship(RelationshipType::Spouse, "debby-kerr"),
    ];

    assert_eq!(missing_inverse_count(&people), 1);
    let completed = with_inverse_edges(&people);

    let debby = &completed[1];
    assert_eq!(debby.relationships.len(), 2);
    assert_eq!(debby.relationships[0].kind, RelationshipType::Spouse);
    assert_eq!(debby.relationships[1].kind, RelationshipType::RaisedBy);
    assert_eq!(debby.relationships[1].person_id, "norman-bud-lowe");
    assert_eq!(debby.relationships[1].years.as_deref(), Some("1955-1966"));
    assert_eq!(completed[2].relationships.len(), 1);

    assert_eq!(people[1].relationships.len(), 1);
    let report = check_dataset(&Dataset {
        people: completed,
        ..Dataset::default()
    });
    assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
}

#[test]
fn inverse_completion_targets_the_record_lookups_resolve() {
    let people = vec![
        person("don-kerr"),
        person("don-kerr"),
        person("jeff-kerr").with_relationship(RelationshipType::Parent, "don-kerr"),
    ];

    let completed = with_inverse_edges(&people);
    assert!(completed[0].has_edge(RelationshipType::Child, "jeff-kerr"));
    assert!(completed[1].relationships.is_empty());

    let resolved = kinfolk_core::find_by_id(&completed, "don-kerr").unwrap();
    assert_eq!(resolved.relationships.len(), 1);
}

#[test]
fn inverse_completion_skips_dangling_and_self_edges() {
    let people = vec![person("jeff-kerr")
        .with_relationship(RelationshipType::Child, "ghost-kerr")
        .with_relationship(RelationshipType::Sibling, "jeff-kerr")];

    let completed = with_inverse_edges(&people);
    assert_eq!(completed, people);
    assert_eq!(missing_inverse_count(&people), 0);
}

#[test]
fn builtin_archive_needs_no_inverse_completion() {
    let dataset = Dataset::builtin();
    assert_eq!(missing_inverse_count(&dataset.people), 0);
}
