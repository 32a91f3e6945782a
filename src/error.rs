//! Error types for plotdeck.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for plotdeck operations.
pub type Result<T> = std::result::Result<T, PlotDeckError>;

/// Errors that can occur in plotdeck.
#[derive(Debug, Error)]
pub enum PlotDeckError {
    /// Explicit frame switch outside the sequence.
    #[error("Frame index {index} out of range ({len} frames available)")]
    FrameIndex {
        /// Requested frame.
        index: usize,
        /// Frames in the sequence.
        len: usize,
    },

    /// x and y coordinates of a line series differ in length.
    #[error("x and y must have the same length (got {x_len} and {y_len})")]
    SeriesLength {
        /// Number of x values.
        x_len: usize,
        /// Number of y values.
        y_len: usize,
    },

    /// Grid cells of a simple grid are fixed at creation.
    #[error("Cannot add slots to {shape:?} grid created with subplots; use an advanced grid")]
    SimpleGridSlot {
        /// Rows and columns of the grid.
        shape: (usize, usize),
    },

    /// Requested grid span is empty or outside the grid.
    #[error("Invalid grid slot rows {rows:?}, cols {cols:?} for {shape:?} grid")]
    GridSlot {
        /// Requested rows.
        rows: std::ops::Range<usize>,
        /// Requested columns.
        cols: std::ops::Range<usize>,
        /// Rows and columns of the grid.
        shape: (usize, usize),
    },
}

impl PlotDeckError {
    /// Create a FrameIndex error.
    pub fn frame_index(index: usize, len: usize) -> Self {
        Self::FrameIndex { index, len }
    }
}
