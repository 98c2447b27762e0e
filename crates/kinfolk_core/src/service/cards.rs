//! Display-ready card projections for page renderers.
//!
//! # Responsibility
//! - Turn archive records into pre-formatted card values.
//! - Read every label and style class from the model's display tables.
//!
//! # Invariants
//! - Card builders are pure and never fail.
//! - Missing optional text is rendered with the fixed fallbacks below,
//!   never as empty strings.

use crate::model::branch::Branch;
use crate::model::person::Person;
use crate::model::place::Place;
use crate::model::story::Story;

/// Date span fallback when neither birth nor death date is known.
pub const DATES_UNKNOWN: &str = "Dates unknown";

const STORY_CATEGORY_BADGE_CLASS: &str = "bg-primary/10 text-primary";
const GENERATION_BADGE_CLASS: &str = "bg-gray-100 text-gray-800";

/// Pill label plus its style classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: &'static str,
}

impl Badge {
    fn branch(branch: Branch) -> Self {
        let style = branch.style();
        Self {
            label: style.label.to_string(),
            class: style.badge_class,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonCard {
    pub id: String,
    /// `First Last`.
    pub display_name: String,
    /// `(née Maiden)` when a maiden name is known.
    pub maiden_note: Option<String>,
    pub date_span: String,
    /// Placeholder avatar text when no photo exists.
    pub initials: String,
    pub photo: Option<String>,
    pub branch: Branch,
    pub branch_badge: Badge,
    pub border_class: &'static str,
    pub generation_badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceCard {
    pub id: String,
    pub name: String,
    pub location: String,
    pub significance: String,
    pub kind_badge: Badge,
    pub branch_badge: Badge,
    pub border_class: &'static str,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryCard {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub display_date: String,
    pub category_badge: Badge,
    pub branch_badges: Vec<Badge>,
    pub featured_image: Option<String>,
}

pub fn person_card(person: &Person) -> PersonCard {
    PersonCard {
        id: person.id.clone(),
        display_name: person.display_name(),
        maiden_note: person
            .maiden_name
            .as_ref()
            .map(|maiden| format!("(née {maiden})")),
        date_span: date_span(person.birth_date.as_deref(), person.death_date.as_deref()),
        initials: initials(&person.first_name, &person.last_name),
        photo: person.photo.clone(),
        branch: person.branch,
        branch_badge: Badge::branch(person.branch),
        border_class: person.branch.style().border_class,
        generation_badge: Badge {
            label: format!("Generation {}", person.generation),
            class: GENERATION_BADGE_CLASS,
        },
    }
}

pub fn place_card(place: &Place) -> PlaceCard {
    PlaceCard {
        id: place.id.clone(),
        name: place.name.clone(),
        location: place.location.clone(),
        significance: place.significance.clone(),
        kind_badge: Badge {
            label: place.kind.label().to_string(),
            class: place.kind.badge_class(),
        },
        branch_badge: Badge::branch(place.branch),
        border_class: place.branch.style().border_class,
        image: place.image.clone(),
    }
}

pub fn story_card(story: &Story) -> StoryCard {
    StoryCard {
        id: story.id.clone(),
        title: story.title.clone(),
        excerpt: story.excerpt.clone(),
        display_date: story.display_date.clone(),
        category_badge: Badge {
            label: story.category.display_name().to_string(),
            class: STORY_CATEGORY_BADGE_CLASS,
        },
        branch_badges: story
            .related_branches
            .iter()
            .copied()
            .map(Badge::branch)
            .collect(),
        featured_image: story.featured_image.clone(),
    }
}

/// `birth - death`, whichever side exists, or [`DATES_UNKNOWN`].
pub fn date_span(birth: Option<&str>, death: Option<&str>) -> String {
    let birth = birth.map(str::trim).filter(|value| !value.is_empty());
    let death = death.map(str::trim).filter(|value| !value.is_empty());
    match (birth, death) {
        (Some(birth), Some(death)) => format!("{birth} - {death}"),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => DATES_UNKNOWN.to_string(),
    }
}

fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .take(1)
        .chain(last_name.chars().take(1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{date_span, initials, DATES_UNKNOWN};

    #[test]
    fn date_span_joins_known_dates() {
        assert_eq!(
            date_span(Some("January 25, 1927"), Some("October 8, 1955")),
            "January 25, 1927 - October 8, 1955"
        );
        assert_eq!(date_span(None, Some("circa 1984")), "circa 1984");
        assert_eq!(date_span(Some("December 13"), None), "December 13");
    }

    #[test]
    fn date_span_falls_back_for_blank_dates() {
        assert_eq!(date_span(None, None), DATES_UNKNOWN);
        assert_eq!(date_span(Some("  "), None), DATES_UNKNOWN);
    }

    #[test]
    fn initials_use_first_characters() {
        assert_eq!(initials("George Richard", "Mowry"), "GM");
        assert_eq!(initials("Élodie", ""), "É");
    }
}
