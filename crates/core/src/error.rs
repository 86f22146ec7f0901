//! Error types for geodstat

use thiserror::Error;

/// Main error type for geodstat operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Linear index {index} out of range for grid of {len} cells")]
    LinearIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid point set: {0}")]
    InvalidPoints(String),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for geodstat operations
pub type Result<T> = std::result::Result<T, Error>;
