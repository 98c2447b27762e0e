//! Page-level browse use cases.
//!
//! # Responsibility
//! - Answer people/place/story listing requests with display-ready cards.
//! - Resolve one person profile with grouped relationships.
//!
//! # Invariants
//! - The service only borrows the dataset; it never copies or mutates it.
//! - Listing results keep collection order.
//! - An unknown profile id is a `NotFound` outcome, never an error.

use crate::dataset::Dataset;
use crate::model::branch::Branch;
use crate::model::person::{Person, RelationshipType};
use crate::model::place::{Place, PlaceType};
use crate::model::story::{Story, StoryCategory};
use crate::query::facet::{
    parse_generation, parse_value, CategoryFilter, FacetResult, PersonFacet, PlaceFacet,
    StoryFacet,
};
use crate::query::filter::{find_by_id, RecordQuery};
use crate::query::relationships::{
    group_by_type, group_title, resolve_relationships, ResolvedRelationship,
    DISPLAYED_RELATIONSHIP_TYPES,
};
use crate::service::cards::{
    person_card, place_card, story_card, PersonCard, PlaceCard, StoryCard,
};
use log::debug;
use std::num::NonZeroU32;

/// Message shown when no profile exists for the requested id.
pub const PROFILE_NOT_FOUND_MESSAGE: &str =
    "Person not found. The requested profile does not exist.";

/// People page request: search text plus branch and generation filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleRequest {
    pub search: String,
    pub branch: CategoryFilter<Branch>,
    pub generation: CategoryFilter<NonZeroU32>,
}

impl PeopleRequest {
    /// Builds a request from raw page parameters; `all` disables a filter.
    pub fn from_params(search: &str, branch: &str, generation: &str) -> FacetResult<Self> {
        Ok(Self {
            search: search.to_string(),
            branch: parse_value("branch", branch, Branch::parse)?,
            generation: parse_value("generation", generation, parse_generation)?,
        })
    }
}

/// Places page request: search text plus type and branch filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacesRequest {
    pub search: String,
    pub kind: CategoryFilter<PlaceType>,
    pub branch: CategoryFilter<Branch>,
}

impl PlacesRequest {
    pub fn from_params(search: &str, kind: &str, branch: &str) -> FacetResult<Self> {
        Ok(Self {
            search: search.to_string(),
            kind: parse_value("type", kind, PlaceType::parse)?,
            branch: parse_value("branch", branch, Branch::parse)?,
        })
    }
}

/// Stories page request: search text plus category and branch filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesRequest {
    pub search: String,
    pub category: CategoryFilter<StoryCategory>,
    pub branch: CategoryFilter<Branch>,
}

impl StoriesRequest {
    pub fn from_params(search: &str, category: &str, branch: &str) -> FacetResult<Self> {
        Ok(Self {
            search: search.to_string(),
            category: parse_value("category", category, StoryCategory::parse)?,
            branch: parse_value("branch", branch, Branch::parse)?,
        })
    }
}

/// Listing response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseResult<T> {
    pub items: Vec<T>,
    /// Size of the unfiltered collection.
    pub total: usize,
    /// Human-readable summary for the page.
    pub message: String,
}

/// One rendered relationship group on a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipGroupView {
    pub kind: RelationshipType,
    pub title: &'static str,
    pub members: Vec<PersonCard>,
}

/// Hydrated person profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonProfile<'a> {
    pub person: &'a Person,
    pub card: PersonCard,
    /// Every resolvable edge, in stored order.
    pub relationships: Vec<ResolvedRelationship<'a>>,
    /// Non-empty display groups, in display order.
    pub groups: Vec<RelationshipGroupView>,
}

/// Outcome of a profile lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLookup<'a> {
    Found(Box<PersonProfile<'a>>),
    NotFound { id: String, message: &'static str },
}

impl<'a> ProfileLookup<'a> {
    pub fn found(self) -> Option<PersonProfile<'a>> {
        match self {
            Self::Found(profile) => Some(*profile),
            Self::NotFound { .. } => None,
        }
    }
}

/// Browse facade over a borrowed dataset.
pub struct BrowseService<'a> {
    dataset: &'a Dataset,
}

impl<'a> BrowseService<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Lists people matching search text and every active filter.
    pub fn people(&self, request: &PeopleRequest) -> BrowseResult<PersonCard> {
        let query = RecordQuery::<Person>::new()
            .with_text(request.search.as_str())
            .with_filter(request.branch.map(PersonFacet::Branch))
            .with_filter(request.generation.map(PersonFacet::Generation));
        let items = query
            .apply(&self.dataset.people)
            .into_iter()
            .map(person_card)
            .collect::<Vec<_>>();
        debug!(
            "event=browse module=service status=ok page=people filters={} results={}",
            query.active_filter_count(),
            items.len()
        );
        envelope(items, self.dataset.people.len(), "people")
    }

    /// Lists places matching search text and every active filter.
    pub fn places(&self, request: &PlacesRequest) -> BrowseResult<PlaceCard> {
        let query = RecordQuery::<Place>::new()
            .with_text(request.search.as_str())
            .with_filter(request.kind.map(PlaceFacet::Kind))
            .with_filter(request.branch.map(PlaceFacet::Branch));
        let items = query
            .apply(&self.dataset.places)
            .into_iter()
            .map(place_card)
            .collect::<Vec<_>>();
        debug!(
            "event=browse module=service status=ok page=places filters={} results={}",
            query.active_filter_count(),
            items.len()
        );
        envelope(items, self.dataset.places.len(), "places")
    }

    /// Lists stories matching search text and every active filter.
    pub fn stories(&self, request: &StoriesRequest) -> BrowseResult<StoryCard> {
        let query = RecordQuery::<Story>::new()
            .with_text(request.search.as_str())
            .with_filter(request.category.map(StoryFacet::Category))
            .with_filter(request.branch.map(StoryFacet::Branch));
        let items = query
            .apply(&self.dataset.stories)
            .into_iter()
            .map(story_card)
            .collect::<Vec<_>>();
        debug!(
            "event=browse module=service status=ok page=stories filters={} results={}",
            query.active_filter_count(),
            items.len()
        );
        envelope(items, self.dataset.stories.len(), "stories")
    }

    /// Resolves one profile by id.
    pub fn profile(&self, id: &str) -> ProfileLookup<'a> {
        let people: &'a [Person] = &self.dataset.people;
        let Some(person) = find_by_id(people, id.trim()) else {
            debug!("event=profile_lookup module=service status=not_found");
            return ProfileLookup::NotFound {
                id: id.to_string(),
                message: PROFILE_NOT_FOUND_MESSAGE,
            };
        };

        let relationships = resolve_relationships(person, people);
        let grouped = group_by_type(&relationships);
        let groups = DISPLAYED_RELATIONSHIP_TYPES
            .iter()
            .filter_map(|kind| {
                grouped.get(kind).map(|members| RelationshipGroupView {
                    kind: *kind,
                    title: group_title(*kind),
                    members: members
                        .iter()
                        .map(|resolved| person_card(resolved.person))
                        .collect(),
                })
            })
            .collect::<Vec<_>>();
        debug!(
            "event=profile_lookup module=service status=ok edges={} resolved={}",
            person.relationships.len(),
            relationships.len()
        );

        ProfileLookup::Found(Box::new(PersonProfile {
            person,
            card: person_card(person),
            relationships,
            groups,
        }))
    }
}

fn envelope<T>(items: Vec<T>, total: usize, noun: &str) -> BrowseResult<T> {
    let message = if items.is_empty() {
        format!("No {noun} match your filters")
    } else {
        format!("Showing {} of {} {noun}", items.len(), total)
    };
    BrowseResult {
        items,
        total,
        message,
    }
}
