//! Branch taxonomy and its single display table.
//!
//! # Responsibility
//! - Define the closed set of lineage/geographic branches.
//! - Map each branch to its labels and badge/border classes in one place.
//!
//! # Invariants
//! - `Branch::ALL` lists every variant exactly once, in display order.
//! - Every variant has exactly one `BranchStyle` row.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Lineage or geographic offshoot a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Branch {
    /// The documenting household and its descendants.
    Core,
    Paternal,
    Maternal,
    California,
    Louisiana,
    Extended,
    /// Shared by more than one branch (places only in practice).
    Mixed,
}

/// Display metadata consulted by page renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchStyle {
    /// Short badge label, e.g. `Paternal`.
    pub label: &'static str,
    /// Filter option label, e.g. `Paternal Line`.
    pub filter_label: &'static str,
    pub badge_class: &'static str,
    pub border_class: &'static str,
}

const CORE_STYLE: BranchStyle = BranchStyle {
    label: "Core",
    filter_label: "Core Family",
    badge_class: "bg-purple-100 text-purple-800",
    border_class: "border-purple-600",
};
const PATERNAL_STYLE: BranchStyle = BranchStyle {
    label: "Paternal",
    filter_label: "Paternal Line",
    badge_class: "bg-primary/10 text-primary",
    border_class: "border-primary",
};
const MATERNAL_STYLE: BranchStyle = BranchStyle {
    label: "Maternal",
    filter_label: "Maternal Line",
    badge_class: "bg-secondary/10 text-secondary",
    border_class: "border-secondary",
};
const CALIFORNIA_STYLE: BranchStyle = BranchStyle {
    label: "California",
    filter_label: "California Branch",
    badge_class: "bg-green-100 text-green-800",
    border_class: "border-green-600",
};
const LOUISIANA_STYLE: BranchStyle = BranchStyle {
    label: "Louisiana",
    filter_label: "Louisiana Connection",
    badge_class: "bg-yellow-100 text-yellow-800",
    border_class: "border-yellow-600",
};
const EXTENDED_STYLE: BranchStyle = BranchStyle {
    label: "Extended",
    filter_label: "Extended Family",
    badge_class: "bg-gray-100 text-gray-800",
    border_class: "border-gray-500",
};
const MIXED_STYLE: BranchStyle = BranchStyle {
    label: "Mixed",
    filter_label: "Mixed/Multiple",
    badge_class: "bg-gray-100 text-gray-800",
    border_class: "border-gray-500",
};

impl Branch {
    /// Every branch in display order.
    pub const ALL: [Branch; 7] = [
        Branch::Core,
        Branch::Paternal,
        Branch::Maternal,
        Branch::California,
        Branch::Louisiana,
        Branch::Extended,
        Branch::Mixed,
    ];

    /// Stable wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Paternal => "paternal",
            Self::Maternal => "maternal",
            Self::California => "california",
            Self::Louisiana => "louisiana",
            Self::Extended => "extended",
            Self::Mixed => "mixed",
        }
    }

    /// Parses a wire name; surrounding whitespace and case are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|branch| branch.as_str() == normalized)
    }

    /// Returns the display row for this branch.
    pub fn style(self) -> &'static BranchStyle {
        match self {
            Self::Core => &CORE_STYLE,
            Self::Paternal => &PATERNAL_STYLE,
            Self::Maternal => &MATERNAL_STYLE,
            Self::California => &CALIFORNIA_STYLE,
            Self::Louisiana => &LOUISIANA_STYLE,
            Self::Extended => &EXTENDED_STYLE,
            Self::Mixed => &MIXED_STYLE,
        }
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
