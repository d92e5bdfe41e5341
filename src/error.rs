//! Error types for the sort engine and its render surfaces.

use std::io;
use thiserror::Error;

/// Errors raised by a [`SortEngine`](crate::engine::SortEngine) or the data it owns.
#[derive(Debug, Error)]
pub enum SortError {
    /// The engine was constructed with unusable inputs (empty dataset or empty legend).
    #[error("invalid configuration: {0}")]
    Configuration(&'static str),

    /// An index fell outside `[0, len)`. Always a defect in the algorithm that produced it.
    #[error("index {index} out of bounds for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The render surface rejected a frame. The engine does not retry.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

/// Failure reported by a [`RenderSurface`](crate::surface::RenderSurface).
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("terminal i/o: {0}")]
    Io(#[from] io::Error),

    #[error("surface closed")]
    Closed,
}

/// Why a [`Player`](crate::driver::Player) stopped early.
#[derive(Debug, Error)]
pub enum PlayError {
    #[error(transparent)]
    Sort(#[from] SortError),

    #[error("reading terminal events: {0}")]
    Events(#[from] io::Error),
}
