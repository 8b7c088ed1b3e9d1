//! Reporters render query results for a human reader.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::error::ReportError;
use crate::movie::MovieRecord;

/// Consumes records one at a time, in the order the catalog hands them over.
pub trait Reporter {
    type Error: fmt::Display;

    /// `position` is 1-based.
    fn report(&mut self, position: usize, movie: &MovieRecord) -> Result<(), Self::Error>;
}

/// Writes one line per movie to stdout or to a shared buffer.
///
/// Lines look like `#1 {"id":3,"title":"Heat",...}`.
#[derive(Debug, Default)]
pub struct LogReporter {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl LogReporter {
    pub fn new() -> Self {
        LogReporter { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogReporter {
            buffer: Some(buffer),
        }
    }
}

impl Reporter for LogReporter {
    type Error = ReportError;

    fn report(&mut self, position: usize, movie: &MovieRecord) -> Result<(), Self::Error> {
        let line = format!("#{} {}", position, serde_json::to_string(movie)?);
        if let Some(buffer) = &self.buffer {
            let mut buffer = buffer.lock().map_err(|_| ReportError::BufferPoisoned)?;
            buffer.push(line);
        } else {
            println!("{}", line);
        }
        Ok(())
    }
}

/// Emits each movie as a `tracing` event at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    type Error = std::convert::Infallible;

    fn report(&mut self, position: usize, movie: &MovieRecord) -> Result<(), Self::Error> {
        tracing::info!(
            position,
            id = movie.id(),
            title = movie.title(),
            genre = movie.genre(),
            rating = movie.rating().value(),
            "movie"
        );
        Ok(())
    }
}
