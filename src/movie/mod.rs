//! Movie records and the values they carry.

mod rating;
mod record;

pub use rating::{Rating, RatingOutOfRange};
pub use record::{FilteredMovie, MovieId, MovieRecord, NewMovie};
