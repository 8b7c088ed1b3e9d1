//! The catalog: a single in-memory collection of movies with query, view and
//! mutation operations.
//!
//! ## Example
//!
//! ```ignore
//! use movie_catalog::{Catalog, JsonFileLoader, LogReporter, SortOrder};
//!
//! let mut catalog = Catalog::from_loader(&JsonFileLoader::new("movies.json"))?;
//!
//! let romance = catalog.by_genre("romance");
//! let by_title = catalog.sorted_by_title();
//! let worst_first = catalog.sorted_by_rating(SortOrder::Ascending);
//!
//! catalog.print_top(3, &mut LogReporter::new())?;
//! catalog.rename_by_id(0, "Heat (1995)");
//! ```

#[allow(clippy::module_inception)]
mod catalog;
mod collation;
mod config;

pub use catalog::{BestAndWorst, Catalog, SortOrder};
pub use collation::compare_titles;
pub use config::{CatalogConfig, IdPolicy};
