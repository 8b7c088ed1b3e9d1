use std::cmp::Ordering;

use serde::Serialize;

use super::collation::compare_titles;
use super::{CatalogConfig, IdPolicy};
use crate::error::{CatalogError, LoadError};
use crate::loader::Loader;
use crate::movie::{FilteredMovie, MovieId, MovieRecord, NewMovie, Rating};
use crate::random::{RandomSource, ThreadRngSource};
use crate::report::Reporter;

/// Direction of a rating sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// The two highest and two lowest rated movies.
///
/// `worst` holds the second-to-last and the last entry of the descending
/// rating order, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestAndWorst {
    pub best: [MovieRecord; 2],
    pub worst: [MovieRecord; 2],
}

impl BestAndWorst {
    pub const REQUIRED: usize = 4;

    /// `[rank 1, rank 2, rank n-1, rank n]`.
    pub fn to_vec(&self) -> Vec<MovieRecord> {
        self.best.iter().chain(self.worst.iter()).cloned().collect()
    }
}

/// An in-memory movie collection.
///
/// Records keep their insertion order. Every sorted or filtered view is an
/// owned copy, so nothing a caller does with a view reaches the live records.
#[derive(Debug)]
pub struct Catalog<R: RandomSource = ThreadRngSource> {
    movies: Vec<MovieRecord>,
    config: CatalogConfig,
    source: R,
    next_id: MovieId,
}

impl Catalog<ThreadRngSource> {
    pub fn new(movies: Vec<NewMovie>) -> Self {
        Self::with_source(movies, CatalogConfig::default(), ThreadRngSource)
    }

    pub fn from_loader<L: Loader + ?Sized>(loader: &L) -> Result<Self, LoadError> {
        Ok(Self::new(loader.load()?))
    }
}

impl<R: RandomSource> Catalog<R> {
    /// Admit `movies` in order: ids start at 0, ratings come from `source`.
    pub fn with_source(movies: Vec<NewMovie>, config: CatalogConfig, source: R) -> Self {
        let mut catalog = Catalog {
            movies: Vec::with_capacity(movies.len()),
            config,
            source,
            next_id: 0,
        };

        for (index, movie) in movies.into_iter().enumerate() {
            let rating = catalog.draw_rating();
            catalog
                .movies
                .push(MovieRecord::admit(movie, index as MovieId, rating));
        }
        catalog.next_id = catalog.movies.len() as MovieId;

        tracing::debug!(
            count = catalog.movies.len(),
            id_policy = ?catalog.config.id_policy,
            "catalog loaded"
        );
        catalog
    }

    pub fn from_loader_with<L: Loader + ?Sized>(
        loader: &L,
        config: CatalogConfig,
        source: R,
    ) -> Result<Self, LoadError> {
        Ok(Self::with_source(loader.load()?, config, source))
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.movies.iter()
    }

    /// The live collection, not a copy.
    pub fn fetch_all(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Movies whose genre matches `genre` ignoring case, in collection order.
    pub fn by_genre(&self, genre: &str) -> Vec<&MovieRecord> {
        self.movies
            .iter()
            .filter(|movie| movie.is_genre(genre))
            .collect()
    }

    pub fn by_id(&self, id: MovieId) -> Option<&MovieRecord> {
        self.movies.iter().find(|movie| movie.id() == id)
    }

    /// Removes the first movie with `id`. Returns `false` if there is none.
    pub fn remove_by_id(&mut self, id: MovieId) -> bool {
        match self.movies.iter().position(|movie| movie.id() == id) {
            Some(index) => {
                let removed = self.movies.remove(index);
                tracing::debug!(
                    id,
                    title = removed.title(),
                    remaining = self.movies.len(),
                    "movie removed"
                );
                true
            }
            None => false,
        }
    }

    /// Copies of every movie without `thumb` and `subtitle`.
    pub fn filtered_view(&self) -> Vec<FilteredMovie> {
        self.movies.iter().map(FilteredMovie::from).collect()
    }

    /// A copy of the collection ordered by title, ascending.
    pub fn sorted_by_title(&self) -> Vec<MovieRecord> {
        let mut sorted = self.movies.clone();
        sorted.sort_by(|a, b| compare_titles(a.title(), b.title()));
        sorted
    }

    /// A copy of the collection ordered by rating.
    ///
    /// The sort is stable: movies with equal ratings keep their collection
    /// order in both directions.
    pub fn sorted_by_rating(&self, order: SortOrder) -> Vec<MovieRecord> {
        let mut sorted = self.movies.clone();
        sorted.sort_by(|a, b| order.apply(a.rating().cmp(&b.rating())));
        sorted
    }

    /// The two best and two worst rated movies.
    pub fn best_and_worst(&self) -> Result<BestAndWorst, CatalogError> {
        match self.sorted_by_rating(SortOrder::Descending).as_slice() {
            [first, second, .., second_last, last] => Ok(BestAndWorst {
                best: [first.clone(), second.clone()],
                worst: [second_last.clone(), last.clone()],
            }),
            _ => Err(CatalogError::NotEnoughRecords {
                required: BestAndWorst::REQUIRED,
                actual: self.movies.len(),
            }),
        }
    }

    /// Hands the `count` best rated movies to `reporter`, best first.
    ///
    /// Reports every movie when `count` exceeds the collection size. Returns
    /// the number of movies reported.
    pub fn print_top<P: Reporter + ?Sized>(
        &self,
        count: usize,
        reporter: &mut P,
    ) -> Result<usize, P::Error> {
        let sorted = self.sorted_by_rating(SortOrder::Descending);
        let mut reported = 0;
        for (index, movie) in sorted.iter().take(count).enumerate() {
            reporter.report(index + 1, movie)?;
            reported += 1;
        }
        Ok(reported)
    }

    /// Appends a movie with a fresh id and rating and returns it.
    pub fn add(&mut self, movie: NewMovie) -> &MovieRecord {
        let id = self.allocate_id();
        let rating = self.draw_rating();
        let index = self.movies.len();
        self.movies.push(MovieRecord::admit(movie, id, rating));

        let added = &self.movies[index];
        tracing::debug!(id, title = added.title(), rating = rating.value(), "movie added");
        added
    }

    /// Changes the title of the movie with `id` and returns it.
    pub fn rename_by_id(&mut self, id: MovieId, title: impl Into<String>) -> Option<&MovieRecord> {
        let movie = self.movies.iter_mut().find(|movie| movie.id() == id)?;
        movie.set_title(title.into());
        tracing::debug!(id, title = movie.title(), "movie renamed");
        Some(&*movie)
    }

    fn allocate_id(&mut self) -> MovieId {
        match self.config.id_policy {
            IdPolicy::CollectionLength => {
                let id = self.movies.len() as MovieId;
                if self.by_id(id).is_some() {
                    tracing::warn!(id, "new movie reuses an id that is still in use");
                }
                id
            }
            IdPolicy::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        }
    }

    fn draw_rating(&mut self) -> Rating {
        let value = self.source.gen_range(Rating::MIN, Rating::MAX);
        Rating::new(value).unwrap_or_else(|| {
            tracing::warn!(value, "random source returned an out-of-range rating; clamping");
            Rating::clamped(value)
        })
    }
}
