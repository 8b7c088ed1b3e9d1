use serde::{Deserialize, Serialize};

/// How `Catalog::add` picks the id of a new movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// The id is the current collection length. After a removal this can
    /// repeat an id that is still in use.
    #[default]
    CollectionLength,
    /// A counter seeded with the initial collection length that only grows.
    /// Ids are never reused.
    Monotonic,
}

/// Catalog settings. Embeddable in a caller's own serde configuration; missing
/// keys fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub id_policy: IdPolicy,
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }
}
