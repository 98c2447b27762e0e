//! Query core for the Kinfolk family archive.
//! This crate is the single source of truth for archive records and the
//! search/filter/relationship rules page renderers rely on.

pub mod config;
pub mod dataset;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;

pub use config::{dataset_config, DatasetConfig};
pub use dataset::integrity::{check_dataset, DatasetIssue, IntegrityReport};
pub use dataset::inverse::with_inverse_edges;
pub use dataset::loader::{
    load_people, load_places, load_stories, try_load_people, try_load_places, try_load_stories,
    LoadError, LoadResult,
};
pub use dataset::{shared_dataset, Dataset, DatasetSource};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::branch::{Branch, BranchStyle};
pub use model::person::{Person, Relationship, RelationshipType};
pub use model::place::{Place, PlaceType};
pub use model::story::{Story, StoryCategory};
pub use model::{Record, RecordId};
pub use query::facet::{
    CategoryFilter, FacetParseError, Faceted, PersonFacet, PlaceFacet, StoryFacet,
};
pub use query::filter::{
    combine_filters, extended_family, filter_by_category, filter_by_search, find_by_id,
    people_by_branch, people_by_generation, PersonField, PlaceField, RecordQuery, Searchable,
    StoryField,
};
pub use query::relationships::{
    group_by_type, relationships_for_person, resolve_relationships, PersonRelationships,
    ResolvedRelationship,
};
pub use service::browse_service::{
    BrowseResult, BrowseService, PeopleRequest, PersonProfile, PlacesRequest, ProfileLookup,
    StoriesRequest,
};
pub use service::cards::{PersonCard, PlaceCard, StoryCard};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
