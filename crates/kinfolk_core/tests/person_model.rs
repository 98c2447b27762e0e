use kinfolk_core::{Branch, Person, Place, PlaceType, RelationshipType, Story, StoryCategory};
use std::num::NonZeroU32;

#[test]
fn person_deserializes_camel_case_wire_fields() {
    let value = serde_json::json!({
        "id": "debby-kerr",
        "firstName": "Debby",
        "lastName": "Kerr",
        "maidenName": "Mowry",
        "birthDate": "February 3, circa 1948",
        "branch": "maternal",
        "generation": 2,
        "relationships": [
            { "type": "raised-by", "personId": "norman-bud-lowe" },
            { "type": "spouse", "personId": "don-kerr", "years": "1972-" }
        ]
    });

    let person: Person = serde_json::from_value(value).unwrap();
    assert_eq!(person.id, "debby-kerr");
    assert_eq!(person.maiden_name.as_deref(), Some("Mowry"));
    assert_eq!(person.death_date, None);
    assert_eq!(person.branch, Branch::Maternal);
    assert_eq!(person.generation.get(), 2);
    assert_eq!(person.relationships.len(), 2);
    assert_eq!(person.relationships[0].kind, RelationshipType::RaisedBy);
    assert_eq!(person.relationships[1].years.as_deref(), Some("1972-"));
}

#[test]
fn person_without_relationships_defaults_to_empty_edges() {
    let value = serde_json::json!({
        "id": "vanessa-kerr-otsuka",
        "firstName": "Vanessa",
        "lastName": "Kerr Otsuka",
        "branch": "california",
        "generation": 2
    });

    let person: Person = serde_json::from_value(value).unwrap();
    assert!(person.relationships.is_empty());
}

#[test]
fn person_serialization_skips_unset_optional_fields() {
    let person = Person::new(
        "jude-kerr",
        "Jude",
        "Kerr",
        Branch::Core,
        NonZeroU32::new(4).unwrap(),
    )
    .with_relationship(RelationshipType::Parent, "jeff-kerr");

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["firstName"], "Jude");
    assert_eq!(json["branch"], "core");
    assert_eq!(json["generation"], 4);
    assert_eq!(json["relationships"][0]["type"], "parent");
    assert_eq!(json["relationships"][0]["personId"], "jeff-kerr");
    assert!(json.get("maidenName").is_none());
    assert!(json["relationships"][0].get("years").is_none());

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn zero_generation_is_rejected() {
    let value = serde_json::json!({
        "id": "nobody",
        "firstName": "No",
        "lastName": "Body",
        "branch": "core",
        "generation": 0
    });

    assert!(serde_json::from_value::<Person>(value).is_err());
}

#[test]
fn unknown_branch_and_relationship_type_are_rejected() {
    let bad_branch = serde_json::json!({
        "id": "x",
        "firstName": "X",
        "lastName": "Y",
        "branch": "texas",
        "generation": 1
    });
    assert!(serde_json::from_value::<Person>(bad_branch).is_err());

    let bad_edge = serde_json::json!({
        "id": "x",
        "firstName": "X",
        "lastName": "Y",
        "branch": "core",
        "generation": 1,
        "relationships": [{ "type": "cousin", "personId": "z" }]
    });
    assert!(serde_json::from_value::<Person>(bad_edge).is_err());
}

#[test]
fn place_and_story_use_renamed_wire_fields() {
    let place: Place = serde_json::from_value(serde_json::json!({
        "id": "kerr-creek-road",
        "name": "Kerr Creek Road",
        "location": "Three Rivers/Sturgis area, Michigan",
        "type": "geographic",
        "significance": "Named after the Kerr family",
        "branch": "paternal"
    }))
    .unwrap();
    assert_eq!(place.kind, PlaceType::Geographic);
    assert_eq!(place.image, None);

    let story: Story = serde_json::from_value(serde_json::json!({
        "id": "steve-kerr-family",
        "title": "Brothers Across America",
        "excerpt": "Half-siblings across distances.",
        "category": "family-formation",
        "relatedBranches": ["paternal", "louisiana"],
        "date": "March 8, 2025"
    }))
    .unwrap();
    assert_eq!(story.category, StoryCategory::FamilyFormation);
    assert_eq!(story.display_date, "March 8, 2025");
    assert!(story.relates_to(Branch::Louisiana));
    assert!(!story.relates_to(Branch::Maternal));
}

#[test]
fn display_name_joins_first_and_last_name() {
    let person = Person::new(
        "george-richard-mowry",
        "George Richard",
        "Mowry",
        Branch::Maternal,
        NonZeroU32::new(1).unwrap(),
    );
    assert_eq!(person.display_name(), "George Richard Mowry");
}
