mod catalog;
mod error;
mod loader;
mod movie;
mod random;
mod report;

pub use catalog::{compare_titles, BestAndWorst, Catalog, CatalogConfig, IdPolicy, SortOrder};
pub use error::{CatalogError, LoadError, ReportError};
pub use loader::{InMemoryLoader, JsonFileLoader, Loader};
pub use movie::{FilteredMovie, MovieId, MovieRecord, NewMovie, Rating, RatingOutOfRange};
pub use random::{FixedRandomSource, RandomSource, ThreadRngSource};
pub use report::{LogReporter, Reporter, TracingReporter};
