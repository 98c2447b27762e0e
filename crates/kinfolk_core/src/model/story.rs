//! Story model.

use crate::model::branch::Branch;
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Editorial category of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoryCategory {
    Migration,
    FamilyFormation,
    Biography,
    PlaceHistory,
    Military,
    Ancestry,
}

impl StoryCategory {
    pub const ALL: [StoryCategory; 6] = [
        StoryCategory::Migration,
        StoryCategory::FamilyFormation,
        StoryCategory::Biography,
        StoryCategory::PlaceHistory,
        StoryCategory::Military,
        StoryCategory::Ancestry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Migration => "migration",
            Self::FamilyFormation => "family-formation",
            Self::Biography => "biography",
            Self::PlaceHistory => "place-history",
            Self::Military => "military",
            Self::Ancestry => "ancestry",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
    }

    /// Badge label shown on story cards.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Migration => "Migration Story",
            Self::FamilyFormation => "Family Formation",
            Self::Biography => "Biography",
            Self::PlaceHistory => "Place History",
            Self::Military => "Military Service",
            Self::Ancestry => "Ancestry Research",
        }
    }
}

impl Display for StoryCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Published family story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: RecordId,
    pub title: String,
    pub excerpt: String,
    pub category: StoryCategory,
    #[serde(default)]
    pub related_branches: Vec<Branch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    /// Free-text publication date, e.g. `January 15, 2025`.
    #[serde(rename = "date")]
    pub display_date: String,
}

impl Story {
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        category: StoryCategory,
        related_branches: Vec<Branch>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: String::new(),
            category,
            related_branches,
            featured_image: None,
            display_date: String::new(),
        }
    }

    pub fn relates_to(&self, branch: Branch) -> bool {
        self.related_branches.contains(&branch)
    }
}

impl Record for Story {
    fn id(&self) -> &str {
        &self.id
    }
}
