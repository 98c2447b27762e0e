//! Dataset source configuration.
//!
//! # Responsibility
//! - Resolve where archive documents are read from.
//! - Cache the resolved configuration once per process.
//!
//! # Invariants
//! - A blank or unset `KINFOLK_DATA_DIR` selects the built-in archive.
//! - Resolution never fails; unrecognized flag values read as `false`.

use crate::dataset::DatasetSource;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

/// Directory holding `family.json`, `places.json` and `stories.json`.
pub const DATA_DIR_ENV: &str = "KINFOLK_DATA_DIR";
/// When truthy, missing inverse relationship edges are added at load.
pub const SYNTHESIZE_INVERSES_ENV: &str = "KINFOLK_SYNTHESIZE_INVERSES";

static DATASET_CONFIG: OnceCell<DatasetConfig> = OnceCell::new();

/// Resolved dataset loading options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub source: DatasetSource,
    /// Add missing inverse edges after load (see `dataset::inverse`).
    pub synthesize_inverse_edges: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: DatasetSource::Builtin,
            synthesize_inverse_edges: false,
        }
    }
}

impl DatasetConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let source = match lookup(DATA_DIR_ENV) {
            Some(raw) if !raw.trim().is_empty() => {
                DatasetSource::Directory(PathBuf::from(raw.trim()))
            }
            _ => DatasetSource::Builtin,
        };
        let synthesize_inverse_edges = lookup(SYNTHESIZE_INVERSES_ENV)
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);

        Self {
            source,
            synthesize_inverse_edges,
        }
    }
}

/// Returns the process-wide configuration, resolving it from the
/// environment on first use.
pub fn dataset_config() -> &'static DatasetConfig {
    DATASET_CONFIG.get_or_init(DatasetConfig::from_env)
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::{DatasetConfig, DATA_DIR_ENV, SYNTHESIZE_INVERSES_ENV};
    use crate::dataset::DatasetSource;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_environment_selects_builtin_archive() {
        let config = DatasetConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, DatasetConfig::default());
    }

    #[test]
    fn blank_data_dir_selects_builtin_archive() {
        let config = DatasetConfig::from_lookup(lookup_from(&[(DATA_DIR_ENV, "   ")]));
        assert_eq!(config.source, DatasetSource::Builtin);
    }

    #[test]
    fn data_dir_and_flag_are_read() {
        let config = DatasetConfig::from_lookup(lookup_from(&[
            (DATA_DIR_ENV, " /srv/kinfolk "),
            (SYNTHESIZE_INVERSES_ENV, "TRUE"),
        ]));
        assert_eq!(
            config.source,
            DatasetSource::Directory(PathBuf::from("/srv/kinfolk"))
        );
        assert!(config.synthesize_inverse_edges);
    }

    #[test]
    fn unknown_flag_value_reads_false() {
        let config =
            DatasetConfig::from_lookup(lookup_from(&[(SYNTHESIZE_INVERSES_ENV, "maybe")]));
        assert!(!config.synthesize_inverse_edges);
    }
}
