use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rating outside the accepted `1..=5` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating {0} is outside {min}..={max}", min = Rating::MIN, max = Rating::MAX)]
pub struct RatingOutOfRange(pub u8);

/// A movie rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` when `value` is out of range.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Rating(value))
    }

    /// Saturates `value` into range.
    pub fn clamped(value: u8) -> Self {
        Rating(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or(RatingOutOfRange(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
