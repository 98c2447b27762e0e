use kinfolk_core::{
    combine_filters, extended_family, filter_by_category, filter_by_search, find_by_id,
    people_by_branch, people_by_generation, Branch, CategoryFilter, Dataset, FacetParseError,
    Faceted, Person, PersonFacet, PersonField, Place, PlaceFacet, PlaceType, RecordQuery,
    Searchable, Story, StoryCategory, StoryFacet,
};
use std::num::NonZeroU32;

fn generation(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap()
}

fn two_people() -> Vec<Person> {
    let mut debby = Person::new("debby-kerr", "Debby", "Kerr", Branch::Maternal, generation(2));
    debby.maiden_name = Some("Mowry".to_string());
    vec![
        Person::new("jeff-kerr", "Jeff", "Kerr", Branch::Core, generation(3)),
        Person::new("don-kerr", "Don", "Kerr", Branch::Paternal, generation(2)),
        debby,
        Person::new("donna-mowry", "Donna", "Mowry", Branch::Maternal, generation(1)),
    ]
}

fn ids<T: kinfolk_core::Record>(records: &[&T]) -> Vec<String> {
    records.iter().map(|record| record.id().to_string()).collect()
}

#[test]
fn find_by_id_returns_every_present_record() {
    let people = two_people();
    for person in &people {
        assert_eq!(find_by_id(&people, &person.id), Some(person));
    }
    assert_eq!(find_by_id(&people, "steve-kerr"), None);
    assert_eq!(find_by_id(&people, "Jeff-Kerr"), None);
}

#[test]
fn empty_search_is_identity() {
    let people = two_people();
    let all: Vec<&Person> = people.iter().collect();
    assert_eq!(filter_by_search(&people, "", Person::DEFAULT_FIELDS), all);
    assert_eq!(filter_by_search(&people, "   ", Person::DEFAULT_FIELDS), all);
}

#[test]
fn search_is_case_insensitive_substring_match() {
    let people = vec![
        Person::new("jeff-kerr", "Jeff", "Kerr", Branch::Core, generation(3)),
        Person::new("donna-mowry", "Donna", "Mowry", Branch::Maternal, generation(1)),
    ];

    let hits = filter_by_search(&people, "kerr", Person::DEFAULT_FIELDS);
    assert_eq!(ids(&hits), vec!["jeff-kerr"]);

    let hits = filter_by_search(&people, "ONN", Person::DEFAULT_FIELDS);
    assert_eq!(ids(&hits), vec!["donna-mowry"]);
}

#[test]
fn search_covers_maiden_name_by_default() {
    let people = two_people();
    let hits = filter_by_search(&people, "mowry", Person::DEFAULT_FIELDS);
    assert_eq!(ids(&hits), vec!["debby-kerr", "donna-mowry"]);
}

#[test]
fn search_only_inspects_requested_fields() {
    let people = two_people();
    let hits = filter_by_search(&people, "mowry", &[PersonField::FirstName]);
    assert!(hits.is_empty());

    let hits = filter_by_search(&people, "mowry", &[PersonField::LastName]);
    assert_eq!(ids(&hits), vec!["donna-mowry"]);
}

#[test]
fn branch_filter_returns_exact_matches() {
    let people = vec![
        Person::new("jeff-kerr", "Jeff", "Kerr", Branch::Core, generation(3)),
        Person::new("don-kerr", "Don", "Kerr", Branch::Paternal, generation(2)),
    ];

    let hits = filter_by_category(
        &people,
        CategoryFilter::Only(PersonFacet::Branch(Branch::Paternal)),
    );
    assert_eq!(ids(&hits), vec!["don-kerr"]);
    assert_eq!(ids(&people_by_branch(&people, Branch::Paternal)), vec!["don-kerr"]);
}

#[test]
fn all_sentinel_disables_category_filter() {
    let people = two_people();
    let filter = Person::parse_facet("branch", "all").unwrap();
    assert_eq!(filter, CategoryFilter::All);
    assert_eq!(filter_by_category(&people, filter).len(), people.len());
}

#[test]
fn facet_parsing_rejects_unknown_fields_and_values() {
    assert_eq!(
        Person::parse_facet("generation", "2").unwrap(),
        CategoryFilter::Only(PersonFacet::Generation(generation(2)))
    );
    assert_eq!(
        Place::parse_facet("type", "Residence").unwrap(),
        CategoryFilter::Only(PlaceFacet::Kind(PlaceType::Residence))
    );
    assert_eq!(
        Story::parse_facet("category", "place-history").unwrap(),
        CategoryFilter::Only(StoryFacet::Category(StoryCategory::PlaceHistory))
    );

    assert!(matches!(
        Person::parse_facet("generation", "0"),
        Err(FacetParseError::UnknownValue { .. })
    ));
    assert!(matches!(
        Person::parse_facet("branch", "texas"),
        Err(FacetParseError::UnknownValue { .. })
    ));
    assert!(matches!(
        Story::parse_facet("author", "all"),
        Err(FacetParseError::UnknownField { .. })
    ));
}

#[test]
fn generation_selectors_match_exact_generation() {
    let people = two_people();
    assert_eq!(
        ids(&people_by_generation(&people, 2)),
        vec!["don-kerr", "debby-kerr"]
    );
    assert!(people_by_generation(&people, 0).is_empty());
    assert!(people_by_generation(&people, 9).is_empty());
}

#[test]
fn extended_family_selects_extended_branch_only() {
    let mut people = two_people();
    people.push(Person::new(
        "ryan-kerr",
        "Ryan",
        "Kerr",
        Branch::Extended,
        generation(3),
    ));
    assert_eq!(ids(&extended_family(&people)), vec!["ryan-kerr"]);
}

#[test]
fn combined_filters_are_and_combined() {
    let people = two_people();
    let query = RecordQuery::<Person>::new()
        .with_text("kerr")
        .with_filter(CategoryFilter::Only(PersonFacet::Generation(generation(2))))
        .with_filter(CategoryFilter::Only(PersonFacet::Branch(Branch::Maternal)));

    assert_eq!(query.active_filter_count(), 2);
    assert_eq!(ids(&query.apply(&people)), vec!["debby-kerr"]);
    assert!(query.matches(&people[2]));
    assert!(!query.matches(&people[1]));
}

#[test]
fn combined_filters_are_commutative() {
    let dataset = Dataset::builtin();
    let branch = CategoryFilter::Only(PersonFacet::Branch(Branch::Paternal));
    let gen = CategoryFilter::Only(PersonFacet::Generation(generation(2)));

    let forward = RecordQuery::<Person>::new()
        .with_text("e")
        .with_filter(branch)
        .with_filter(gen);
    let backward = RecordQuery::<Person>::new()
        .with_filter(gen)
        .with_filter(branch)
        .with_text("e");
    assert_eq!(forward.apply(&dataset.people), backward.apply(&dataset.people));

    let mut predicates = forward.predicates();
    let in_order = combine_filters(&dataset.people, &predicates);
    predicates.reverse();
    let reversed = combine_filters(&dataset.people, &predicates);
    assert_eq!(in_order, reversed);
    assert_eq!(ids(&in_order), vec!["don-kerr", "steve-kerr", "sharron-kerr"]);
}

#[test]
fn empty_predicate_list_keeps_everything() {
    let people = two_people();
    assert_eq!(combine_filters(&people, &[]).len(), people.len());
}

#[test]
fn builtin_places_and_stories_filter_like_the_site() {
    let dataset = Dataset::builtin();

    let michigan = RecordQuery::<Place>::new().with_text("michigan");
    assert_eq!(michigan.apply(&dataset.places).len(), 6);

    let maternal_residences = RecordQuery::<Place>::new()
        .with_filter(CategoryFilter::Only(PlaceFacet::Kind(PlaceType::Residence)))
        .with_filter(CategoryFilter::Only(PlaceFacet::Branch(Branch::Maternal)));
    assert_eq!(
        ids(&maternal_residences.apply(&dataset.places)),
        vec!["jefferson-road"]
    );

    let louisiana = filter_by_category(
        &dataset.stories,
        CategoryFilter::Only(StoryFacet::Branch(Branch::Louisiana)),
    );
    assert_eq!(ids(&louisiana), vec!["michigan-to-coasts", "steve-kerr-family"]);
}

#[test]
fn builtin_search_for_surname_skips_other_families() {
    let dataset = Dataset::builtin();
    let hits = filter_by_search(&dataset.people, "kerr", Person::DEFAULT_FIELDS);
    assert_eq!(hits.len(), 12);
    assert!(hits.iter().all(|person| person.id != "donna-mowry"));
}
