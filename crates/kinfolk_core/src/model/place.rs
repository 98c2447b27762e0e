//! Place model.

use crate::model::branch::Branch;
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kind of a documented place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceType {
    Residence,
    Community,
    /// Named natural or man-made feature (roads, creeks).
    Geographic,
}

impl PlaceType {
    pub const ALL: [PlaceType; 3] = [
        PlaceType::Residence,
        PlaceType::Community,
        PlaceType::Geographic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residence => "residence",
            Self::Community => "community",
            Self::Geographic => "geographic",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == normalized)
    }

    /// Badge label shown on place cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Residence => "Residence",
            Self::Community => "Community",
            Self::Geographic => "Geographic",
        }
    }

    /// Plural filter option label.
    pub fn filter_label(self) -> &'static str {
        match self {
            Self::Residence => "Residences",
            Self::Community => "Communities",
            Self::Geographic => "Geographic Features",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Residence => "bg-blue-100 text-blue-800",
            Self::Community => "bg-purple-100 text-purple-800",
            Self::Geographic => "bg-green-100 text-green-800",
        }
    }
}

impl Display for PlaceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Place of significance to one branch of the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: RecordId,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: PlaceType,
    pub significance: String,
    pub branch: Branch,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Place {
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        location: impl Into<String>,
        kind: PlaceType,
        branch: Branch,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            kind,
            significance: String::new(),
            branch,
            image: None,
        }
    }
}

impl Record for Place {
    fn id(&self) -> &str {
        &self.id
    }
}
