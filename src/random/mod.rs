//! Random number sources used to assign ratings.
//!
//! The catalog draws ratings through [`RandomSource`] so tests can replay a
//! known sequence instead of depending on `rand::thread_rng()`.
//!
//! ```ignore
//! use movie_catalog::{Catalog, CatalogConfig, FixedRandomSource};
//!
//! let catalog = Catalog::with_source(movies, CatalogConfig::default(), FixedRandomSource::new(vec![5, 1]));
//! ```

use rand::Rng;

/// Source of integers in an inclusive range.
pub trait RandomSource {
    /// Draw a value in `min..=max`.
    fn gen_range(&mut self, min: u8, max: u8) -> u8;
}

/// Uniform draws from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn gen_range(&mut self, min: u8, max: u8) -> u8 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Replays a fixed sequence, cycling when exhausted.
///
/// Values are clamped to the requested range. An empty sequence always yields
/// `min`.
#[derive(Debug, Clone, Default)]
pub struct FixedRandomSource {
    values: Vec<u8>,
    index: usize,
}

impl FixedRandomSource {
    pub fn new(values: Vec<u8>) -> Self {
        Self { values, index: 0 }
    }

    pub fn constant(value: u8) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedRandomSource {
    fn gen_range(&mut self, min: u8, max: u8) -> u8 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.index % self.values.len()];
        self.index = self.index.wrapping_add(1);
        value.clamp(min, max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn gen_range(&mut self, min: u8, max: u8) -> u8 {
        (**self).gen_range(min, max)
    }
}
