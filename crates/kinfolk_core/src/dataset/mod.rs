//! Shared in-memory archive dataset.
//!
//! # Responsibility
//! - Own the people/place/story collections loaded once per process.
//! - Hand out read-only borrows to every page-level caller.
//!
//! # Invariants
//! - Loading never fails; unusable documents yield empty collections.
//! - The shared dataset is initialized at most once and never mutated.
//! - Integrity findings are logged at load, never enforced.

pub mod integrity;
pub mod inverse;
pub mod loader;

use crate::config::{dataset_config, DatasetConfig};
use crate::dataset::integrity::IntegrityReport;
use crate::model::person::Person;
use crate::model::place::Place;
use crate::model::story::Story;
use log::{info, warn};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

static SHARED_DATASET: OnceCell<Dataset> = OnceCell::new();

/// Where archive documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Documents embedded in the crate at build time.
    Builtin,
    /// Directory holding `family.json`, `places.json` and `stories.json`.
    Directory(PathBuf),
}

/// The full archive: every collection the query core reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub people: Vec<Person>,
    pub places: Vec<Place>,
    pub stories: Vec<Story>,
}

impl Dataset {
    /// Loads all three collections from `source` and logs integrity findings.
    pub fn load(source: &DatasetSource) -> Self {
        let dataset = Self::read(source);
        dataset.log_integrity();
        dataset
    }

    /// Loads the embedded archive.
    pub fn builtin() -> Self {
        Self::load(&DatasetSource::Builtin)
    }

    /// Loads according to `config`, completing inverse edges when asked.
    ///
    /// Integrity findings are logged once, after completion.
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::assemble(config).0
    }

    /// Returns a copy whose people carry every missing inverse edge.
    pub fn with_inverse_edges(self) -> Self {
        let added = inverse::missing_inverse_count(&self.people);
        info!(
            "event=inverse_edges module=dataset status=ok added={}",
            added
        );
        Self {
            people: inverse::with_inverse_edges(&self.people),
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.places.is_empty() && self.stories.is_empty()
    }

    fn read(source: &DatasetSource) -> Self {
        Self {
            people: loader::load_people(source),
            places: loader::load_places(source),
            stories: loader::load_stories(source),
        }
    }

    fn assemble(config: &DatasetConfig) -> (Self, IntegrityReport) {
        let mut dataset = Self::read(&config.source);
        if config.synthesize_inverse_edges {
            dataset = dataset.with_inverse_edges();
        }
        let report = dataset.log_integrity();
        (dataset, report)
    }

    fn log_integrity(&self) -> IntegrityReport {
        let report = integrity::check_dataset(self);
        for issue in &report.issues {
            warn!(
                "event=dataset_integrity module=dataset status=warn issue=\"{}\"",
                issue
            );
        }
        info!(
            "event=dataset_ready module=dataset status=ok people={} places={} stories={} issues={}",
            self.people.len(),
            self.places.len(),
            self.stories.len(),
            report.issues.len()
        );
        report
    }
}

/// Returns the process-wide dataset, loading it on first use from
/// [`dataset_config`].
pub fn shared_dataset() -> &'static Dataset {
    SHARED_DATASET.get_or_init(|| Dataset::from_config(dataset_config()))
}
