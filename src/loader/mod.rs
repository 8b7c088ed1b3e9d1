//! Loaders supply the raw movie list a catalog is built from.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::movie::NewMovie;

/// Produces the initial, ordered list of raw movies.
pub trait Loader {
    fn load(&self) -> Result<Vec<NewMovie>, LoadError>;
}

/// Reads a JSON array of movie objects from a file.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Loader for JsonFileLoader {
    fn load(&self) -> Result<Vec<NewMovie>, LoadError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let movies: Vec<NewMovie> = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), count = movies.len(), "loaded movie source");
        Ok(movies)
    }
}

/// Serves a list that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    movies: Vec<NewMovie>,
}

impl InMemoryLoader {
    pub fn new(movies: Vec<NewMovie>) -> Self {
        Self { movies }
    }

    /// Parse a JSON array of movie objects.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl Loader for InMemoryLoader {
    fn load(&self) -> Result<Vec<NewMovie>, LoadError> {
        Ok(self.movies.clone())
    }
}
