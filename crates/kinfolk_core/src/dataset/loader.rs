//! JSON document loading for archive collections.
//!
//! # Responsibility
//! - Read `family.json`, `places.json` and `stories.json` from a source.
//! - Degrade unreadable or malformed documents to empty collections.
//!
//! # Invariants
//! - `load_*` never return errors and never panic; failures are logged.
//! - `try_load_*` report the failing document path and cause.
//! - A document is accepted whole or not at all; one bad record rejects
//!   its document.

use crate::dataset::DatasetSource;
use crate::model::person::Person;
use crate::model::place::Place;
use crate::model::story::Story;
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Document holding the top-level `people` array.
pub const PEOPLE_DOCUMENT: &str = "family.json";
/// Document holding the top-level `places` array.
pub const PLACES_DOCUMENT: &str = "places.json";
/// Document holding the top-level `stories` array.
pub const STORIES_DOCUMENT: &str = "stories.json";

const BUILTIN_PEOPLE: &str = include_str!("../../data/family.json");
const BUILTIN_PLACES: &str = include_str!("../../data/places.json");
const BUILTIN_STORIES: &str = include_str!("../../data/stories.json");

pub type LoadResult<T> = Result<T, LoadError>;

/// Document read or decode failure.
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        document: String,
        source: serde_json::Error,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse { document, source } => {
                write!(f, "malformed document `{document}`: {source}")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

#[derive(Deserialize)]
struct PeopleDocument {
    people: Vec<Person>,
}

#[derive(Deserialize)]
struct PlacesDocument {
    places: Vec<Place>,
}

#[derive(Deserialize)]
struct StoriesDocument {
    stories: Vec<Story>,
}

/// Loads people, or an empty list when the document is unusable.
pub fn load_people(source: &DatasetSource) -> Vec<Person> {
    degrade(PEOPLE_DOCUMENT, try_load_people(source))
}

/// Loads places, or an empty list when the document is unusable.
pub fn load_places(source: &DatasetSource) -> Vec<Place> {
    degrade(PLACES_DOCUMENT, try_load_places(source))
}

/// Loads stories, or an empty list when the document is unusable.
pub fn load_stories(source: &DatasetSource) -> Vec<Story> {
    degrade(STORIES_DOCUMENT, try_load_stories(source))
}

pub fn try_load_people(source: &DatasetSource) -> LoadResult<Vec<Person>> {
    let document: PeopleDocument = read_document(source, PEOPLE_DOCUMENT)?;
    Ok(document.people)
}

pub fn try_load_places(source: &DatasetSource) -> LoadResult<Vec<Place>> {
    let document: PlacesDocument = read_document(source, PLACES_DOCUMENT)?;
    Ok(document.places)
}

pub fn try_load_stories(source: &DatasetSource) -> LoadResult<Vec<Story>> {
    let document: StoriesDocument = read_document(source, STORIES_DOCUMENT)?;
    Ok(document.stories)
}

fn read_document<T: DeserializeOwned>(source: &DatasetSource, name: &str) -> LoadResult<T> {
    let (label, text) = read_document_text(source, name)?;
    serde_json::from_str(&text).map_err(|err| LoadError::Parse {
        document: label,
        source: err,
    })
}

fn read_document_text(
    source: &DatasetSource,
    name: &str,
) -> LoadResult<(String, Cow<'static, str>)> {
    match source {
        DatasetSource::Builtin => {
            let text = match name {
                PEOPLE_DOCUMENT => BUILTIN_PEOPLE,
                PLACES_DOCUMENT => BUILTIN_PLACES,
                _ => BUILTIN_STORIES,
            };
            Ok((format!("builtin:{name}"), Cow::Borrowed(text)))
        }
        DatasetSource::Directory(dir) => {
            let path = dir.join(name);
            let text = std::fs::read_to_string(&path).map_err(|err| LoadError::Io {
                path: path.clone(),
                source: err,
            })?;
            Ok((path.display().to_string(), Cow::Owned(text)))
        }
    }
}

fn degrade<T>(document: &str, result: LoadResult<Vec<T>>) -> Vec<T> {
    match result {
        Ok(records) => {
            info!(
                "event=dataset_load module=dataset status=ok document={} records={}",
                document,
                records.len()
            );
            records
        }
        Err(err) => {
            error!(
                "event=dataset_load module=dataset status=error document={} error={}",
                document, err
            );
            Vec::new()
        }
    }
}
