use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Rating;

pub type MovieId = u64;

/// Keys the catalog owns. Caller-supplied values for them are dropped.
const RESERVED_KEYS: [&str; 2] = ["id", "rating"];

/// A raw movie as supplied by a loader or passed to `Catalog::add`.
///
/// Fields the catalog does not interpret are kept in `extra` and written back
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewMovie {
    pub fn new(title: impl Into<String>, genre: impl Into<String>) -> Self {
        NewMovie {
            title: title.into(),
            genre: genre.into(),
            thumb: None,
            subtitle: None,
            extra: Map::new(),
        }
    }

    pub fn with_thumb(mut self, thumb: impl Into<String>) -> Self {
        self.thumb = Some(thumb.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A movie held by the catalog.
///
/// `id` and `rating` are assigned on admission and never change afterwards.
/// The title can only be changed through `Catalog::rename_by_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    id: MovieId,
    title: String,
    genre: String,
    rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl MovieRecord {
    pub(crate) fn admit(movie: NewMovie, id: MovieId, rating: Rating) -> Self {
        let NewMovie {
            title,
            genre,
            thumb,
            subtitle,
            mut extra,
        } = movie;
        for key in RESERVED_KEYS {
            extra.remove(key);
        }

        MovieRecord {
            id,
            title,
            genre,
            rating,
            thumb,
            subtitle,
            extra,
        }
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn thumb(&self) -> Option<&str> {
        self.thumb.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Passthrough fields such as `description` and `sources`.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn is_genre(&self, genre: &str) -> bool {
        self.genre.to_lowercase() == genre.to_lowercase()
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }
}

/// A movie without its display-only `thumb` and `subtitle` fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredMovie {
    id: MovieId,
    title: String,
    genre: String,
    rating: Rating,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl FilteredMovie {
    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl From<&MovieRecord> for FilteredMovie {
    fn from(record: &MovieRecord) -> Self {
        FilteredMovie {
            id: record.id,
            title: record.title.clone(),
            genre: record.genre.clone(),
            rating: record.rating,
            extra: record.extra.clone(),
        }
    }
}
