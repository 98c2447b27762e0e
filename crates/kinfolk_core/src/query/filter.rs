//! Lookup, search and combined filtering.
//!
//! # Responsibility
//! - Exact id lookup over any record collection.
//! - Case-insensitive substring search over a chosen set of text fields.
//! - Exact categorical filtering and AND-combination of filters.
//!
//! # Invariants
//! - An empty (or whitespace-only) search query matches every record.
//! - Combined filters are commutative: predicate order never changes the
//!   result set or its order.
//! - Results preserve collection order.

use crate::model::branch::Branch;
use crate::model::person::Person;
use crate::model::place::Place;
use crate::model::story::Story;
use crate::model::Record;
use crate::query::facet::{CategoryFilter, Faceted, PersonFacet};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Debug;
use std::num::NonZeroU32;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Boxed record predicate accepted by [`combine_filters`].
pub type Predicate<'p, T> = Box<dyn Fn(&T) -> bool + 'p>;

/// Records exposing named text fields to free-text search.
pub trait Searchable {
    type Field: Copy + Eq + Debug + 'static;

    /// Fields searched when the caller does not choose any.
    const DEFAULT_FIELDS: &'static [Self::Field];

    /// Returns the field text, or `None` when the field is unset.
    fn field_text(&self, field: Self::Field) -> Option<&str>;
}

/// Searchable person fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    FirstName,
    LastName,
    MiddleName,
    MaidenName,
    Nickname,
    Location,
    Bio,
}

/// Searchable place fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceField {
    Name,
    Location,
    Significance,
}

/// Searchable story fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryField {
    Title,
    Excerpt,
}

impl Searchable for Person {
    type Field = PersonField;

    const DEFAULT_FIELDS: &'static [PersonField] = &[
        PersonField::FirstName,
        PersonField::LastName,
        PersonField::MaidenName,
    ];

    fn field_text(&self, field: PersonField) -> Option<&str> {
        match field {
            PersonField::FirstName => Some(self.first_name.as_str()),
            PersonField::LastName => Some(self.last_name.as_str()),
            PersonField::MiddleName => self.middle_name.as_deref(),
            PersonField::MaidenName => self.maiden_name.as_deref(),
            PersonField::Nickname => self.nickname.as_deref(),
            PersonField::Location => self.location.as_deref(),
            PersonField::Bio => self.bio.as_deref(),
        }
    }
}

impl Searchable for Place {
    type Field = PlaceField;

    const DEFAULT_FIELDS: &'static [PlaceField] = &[
        PlaceField::Name,
        PlaceField::Location,
        PlaceField::Significance,
    ];

    fn field_text(&self, field: PlaceField) -> Option<&str> {
        match field {
            PlaceField::Name => Some(self.name.as_str()),
            PlaceField::Location => Some(self.location.as_str()),
            PlaceField::Significance => Some(self.significance.as_str()),
        }
    }
}

impl Searchable for Story {
    type Field = StoryField;

    const DEFAULT_FIELDS: &'static [StoryField] = &[StoryField::Title, StoryField::Excerpt];

    fn field_text(&self, field: StoryField) -> Option<&str> {
        match field {
            StoryField::Title => Some(self.title.as_str()),
            StoryField::Excerpt => Some(self.excerpt.as_str()),
        }
    }
}

/// Finds one record by exact identifier.
pub fn find_by_id<'a, T: Record>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Filters by case-insensitive substring match across `fields`.
///
/// Returns every record for a blank query.
pub fn filter_by_search<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    fields: &[T::Field],
) -> Vec<&'a T> {
    let needle = normalize_search_text(query);
    items
        .iter()
        .filter(|item| matches_search(*item, &needle, fields))
        .collect()
}

/// Filters by one exact facet; `CategoryFilter::All` returns everything.
pub fn filter_by_category<'a, T: Faceted>(
    items: &'a [T],
    filter: CategoryFilter<T::Facet>,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_category(*item, filter))
        .collect()
}

/// Keeps records satisfying every predicate (logical AND).
///
/// An empty predicate list keeps everything.
pub fn combine_filters<'a, T>(items: &'a [T], predicates: &[Predicate<'_, T>]) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| predicates.iter().all(|predicate| predicate(*item)))
        .collect()
}

/// Search text plus categorical filters for one collection.
///
/// All parts are AND-combined; inactive filters are dropped on insertion.
#[derive(Debug, Clone)]
pub struct RecordQuery<T: Searchable + Faceted> {
    text: String,
    fields: Vec<T::Field>,
    facets: Vec<T::Facet>,
}

impl<T: Searchable + Faceted> Default for RecordQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Searchable + Faceted> RecordQuery<T> {
    /// Creates a match-all query over the default search fields.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            fields: T::DEFAULT_FIELDS.to_vec(),
            facets: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Replaces the searched field set.
    pub fn with_fields(mut self, fields: &[T::Field]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    /// Adds one categorical filter; `All` is a no-op.
    pub fn with_filter(mut self, filter: CategoryFilter<T::Facet>) -> Self {
        if let Some(facet) = filter.facet() {
            self.facets.push(facet);
        }
        self
    }

    /// Number of active categorical filters.
    pub fn active_filter_count(&self) -> usize {
        self.facets.len()
    }

    pub fn matches(&self, record: &T) -> bool {
        let needle = normalize_search_text(&self.text);
        matches_search(record, &needle, &self.fields)
            && self
                .facets
                .iter()
                .all(|facet| record.matches_facet(*facet))
    }

    /// Splits this query into independent predicates for [`combine_filters`].
    pub fn predicates(&self) -> Vec<Predicate<'_, T>> {
        let needle = normalize_search_text(&self.text);
        let mut predicates: Vec<Predicate<'_, T>> = Vec::with_capacity(self.facets.len() + 1);
        if !needle.is_empty() {
            predicates.push(Box::new(move |record: &T| {
                matches_search(record, &needle, &self.fields)
            }));
        }
        for facet in self.facets.iter().copied() {
            predicates.push(Box::new(move |record: &T| record.matches_facet(facet)));
        }
        predicates
    }

    pub fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        combine_filters(items, &self.predicates())
    }
}

/// People whose branch equals `branch`.
pub fn people_by_branch(people: &[Person], branch: Branch) -> Vec<&Person> {
    filter_by_category(people, CategoryFilter::Only(PersonFacet::Branch(branch)))
}

/// People of one generation; generation zero matches nobody.
pub fn people_by_generation(people: &[Person], generation: u32) -> Vec<&Person> {
    match NonZeroU32::new(generation) {
        Some(generation) => filter_by_category(
            people,
            CategoryFilter::Only(PersonFacet::Generation(generation)),
        ),
        None => Vec::new(),
    }
}

/// People tagged with the `extended` branch.
pub fn extended_family(people: &[Person]) -> Vec<&Person> {
    people_by_branch(people, Branch::Extended)
}

/// Trims, lowercases and collapses inner whitespace of a search query.
pub fn normalize_search_text(query: &str) -> String {
    WHITESPACE_RE
        .replace_all(query.trim(), " ")
        .to_lowercase()
}

fn matches_search<T: Searchable>(record: &T, needle: &str, fields: &[T::Field]) -> bool {
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| {
        record
            .field_text(*field)
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

fn matches_category<T: Faceted>(record: &T, filter: CategoryFilter<T::Facet>) -> bool {
    match filter.facet() {
        Some(facet) => record.matches_facet(facet),
        None => true,
    }
}
