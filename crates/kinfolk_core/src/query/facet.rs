//! Typed categorical facets and the `all` sentinel.
//!
//! # Responsibility
//! - Pair each filterable field with its value type (`PersonFacet`, ...).
//! - Parse `(field, value)` strings from the presentation layer.
//!
//! # Invariants
//! - `all` (case-insensitive) always parses to `CategoryFilter::All`.
//! - Unknown fields and values are parse errors, never match-all.

use crate::model::branch::Branch;
use crate::model::person::Person;
use crate::model::place::{Place, PlaceType};
use crate::model::story::{Story, StoryCategory};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::num::NonZeroU32;

/// Sentinel value that disables a categorical filter.
pub const ALL_SENTINEL: &str = "all";

pub type FacetResult<T> = Result<T, FacetParseError>;

/// Categorical filter: either disabled or one exact facet value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<F> {
    All,
    Only(F),
}

impl<F> Default for CategoryFilter<F> {
    fn default() -> Self {
        Self::All
    }
}

impl<F: Copy> CategoryFilter<F> {
    /// Returns the active facet, or `None` when disabled.
    pub fn facet(&self) -> Option<F> {
        match self {
            Self::All => None,
            Self::Only(facet) => Some(*facet),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Only(_))
    }

    /// Converts the active value, keeping `All` as is.
    pub fn map<G>(self, convert: impl FnOnce(F) -> G) -> CategoryFilter<G> {
        match self {
            Self::All => CategoryFilter::All,
            Self::Only(value) => CategoryFilter::Only(convert(value)),
        }
    }
}

/// Records that can be narrowed by exact categorical facets.
pub trait Faceted {
    type Facet: Copy + PartialEq + Debug;

    /// Returns whether this record carries `facet`.
    fn matches_facet(&self, facet: Self::Facet) -> bool;

    /// Parses one `(field, value)` pair into a filter.
    fn parse_facet(field: &str, value: &str) -> FacetResult<CategoryFilter<Self::Facet>>;
}

/// Facet parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetParseError {
    UnknownField {
        record: &'static str,
        field: String,
    },
    UnknownValue {
        field: &'static str,
        value: String,
    },
}

impl Display for FacetParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField { record, field } => {
                write!(f, "unknown {record} filter field `{field}`")
            }
            Self::UnknownValue { field, value } => {
                write!(f, "unknown value `{value}` for filter `{field}`")
            }
        }
    }
}

impl Error for FacetParseError {}

/// Filterable person fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonFacet {
    Branch(Branch),
    Generation(NonZeroU32),
}

/// Filterable place fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceFacet {
    Kind(PlaceType),
    Branch(Branch),
}

/// Filterable story fields. `Branch` matches any related branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryFacet {
    Category(StoryCategory),
    Branch(Branch),
}

impl Faceted for Person {
    type Facet = PersonFacet;

    fn matches_facet(&self, facet: PersonFacet) -> bool {
        match facet {
            PersonFacet::Branch(branch) => self.branch == branch,
            PersonFacet::Generation(generation) => self.generation == generation,
        }
    }

    fn parse_facet(field: &str, value: &str) -> FacetResult<CategoryFilter<PersonFacet>> {
        match normalize_field(field).as_str() {
            "branch" => parse_value("branch", value, |raw| {
                Branch::parse(raw).map(PersonFacet::Branch)
            }),
            "generation" => parse_value("generation", value, |raw| {
                parse_generation(raw).map(PersonFacet::Generation)
            }),
            _ => Err(unknown_field("person", field)),
        }
    }
}

impl Faceted for Place {
    type Facet = PlaceFacet;

    fn matches_facet(&self, facet: PlaceFacet) -> bool {
        match facet {
            PlaceFacet::Kind(kind) => self.kind == kind,
            PlaceFacet::Branch(branch) => self.branch == branch,
        }
    }

    fn parse_facet(field: &str, value: &str) -> FacetResult<CategoryFilter<PlaceFacet>> {
        match normalize_field(field).as_str() {
            "type" | "kind" => parse_value("type", value, |raw| {
                PlaceType::parse(raw).map(PlaceFacet::Kind)
            }),
            "branch" => parse_value("branch", value, |raw| {
                Branch::parse(raw).map(PlaceFacet::Branch)
            }),
            _ => Err(unknown_field("place", field)),
        }
    }
}

impl Faceted for Story {
    type Facet = StoryFacet;

    fn matches_facet(&self, facet: StoryFacet) -> bool {
        match facet {
            StoryFacet::Category(category) => self.category == category,
            StoryFacet::Branch(branch) => self.relates_to(branch),
        }
    }

    fn parse_facet(field: &str, value: &str) -> FacetResult<CategoryFilter<StoryFacet>> {
        match normalize_field(field).as_str() {
            "category" => parse_value("category", value, |raw| {
                StoryCategory::parse(raw).map(StoryFacet::Category)
            }),
            "branch" => parse_value("branch", value, |raw| {
                Branch::parse(raw).map(StoryFacet::Branch)
            }),
            _ => Err(unknown_field("story", field)),
        }
    }
}

/// Returns whether `value` is the filter-disabling sentinel.
pub fn is_all_sentinel(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(ALL_SENTINEL)
}

/// Parses a positive generation number.
pub(crate) fn parse_generation(raw: &str) -> Option<NonZeroU32> {
    raw.parse::<u32>().ok().and_then(NonZeroU32::new)
}

fn normalize_field(field: &str) -> String {
    field.trim().to_ascii_lowercase()
}

/// Parses one filter value; `all` disables the filter.
pub(crate) fn parse_value<F>(
    field: &'static str,
    value: &str,
    parse: impl FnOnce(&str) -> Option<F>,
) -> FacetResult<CategoryFilter<F>> {
    if is_all_sentinel(value) {
        return Ok(CategoryFilter::All);
    }
    parse(value.trim())
        .map(CategoryFilter::Only)
        .ok_or_else(|| FacetParseError::UnknownValue {
            field,
            value: value.to_string(),
        })
}

fn unknown_field(record: &'static str, field: &str) -> FacetParseError {
    FacetParseError::UnknownField {
        record,
        field: field.to_string(),
    }
}
