//! Column-major linear indexing
//!
//! A cell at `(row, col)` of a grid with `rows` rows has linear index
//! `row + col * rows`. Cells are numbered down the first column, then
//! down the second, and so on. Both helpers reject positions outside
//! the grid instead of producing a sentinel.

use crate::error::{Error, Result};

/// Convert a `(row, col)` position to its column-major linear index.
pub fn sub2ind(shape: (usize, usize), row: usize, col: usize) -> Result<usize> {
    let (rows, cols) = shape;
    if row >= rows || col >= cols {
        return Err(Error::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(row + col * rows)
}

/// Convert a column-major linear index back to `(row, col)`.
pub fn ind2sub(shape: (usize, usize), index: usize) -> Result<(usize, usize)> {
    let (rows, cols) = shape;
    let len = rows * cols;
    if index >= len {
        return Err(Error::LinearIndexOutOfRange { index, len });
    }
    Ok((index % rows, index / rows))
}
