//! Station point sets
//!
//! A `PointSet` is a matrix with one row per station. Columns 0 and 1
//! hold planar X/Y coordinates; any further columns (displacements,
//! uncertainties, ids) travel with the row and never enter distance
//! computations.

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1, Axis};

/// An ordered set of stations with X/Y coordinates and attached attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    data: Array2<f64>,
}

impl PointSet {
    /// Wrap an `N x M` matrix, `M >= 2`, whose first two columns are X and Y.
    ///
    /// An empty matrix (zero rows) is accepted as an empty point set.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        if data.nrows() > 0 && data.ncols() < 2 {
            return Err(Error::InvalidPoints(format!(
                "expected at least 2 columns (X, Y), got {}",
                data.ncols()
            )));
        }

        for (i, row) in data.outer_iter().enumerate() {
            let (x, y) = (row[0], row[1]);
            if !x.is_finite() || !y.is_finite() {
                return Err(Error::InvalidPoints(format!(
                    "station {} has non-finite coordinates ({}, {})",
                    i, x, y
                )));
            }
        }

        Ok(Self { data })
    }

    /// Build from row vectors; all rows must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let ncols = rows.first().map_or(2, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(Error::InvalidPoints(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                ncols
            )));
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let data = Array2::from_shape_vec((rows.len(), ncols), flat)
            .map_err(|e| Error::Other(e.to_string()))?;
        Self::from_array(data)
    }

    /// Build from bare `(x, y)` coordinates
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        let flat: Vec<f64> = coords.iter().flat_map(|&(x, y)| [x, y]).collect();
        let data = Array2::from_shape_vec((coords.len(), 2), flat)
            .map_err(|e| Error::Other(e.to_string()))?;
        Self::from_array(data)
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// Whether the set holds no station
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Number of columns, coordinates included
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// X coordinates of all stations
    pub fn xs(&self) -> ArrayView1<'_, f64> {
        self.data.column(0)
    }

    /// Y coordinates of all stations
    pub fn ys(&self) -> ArrayView1<'_, f64> {
        self.data.column(1)
    }

    /// Full row of station `index`, attributes included
    pub fn row(&self, index: usize) -> Result<ArrayView1<'_, f64>> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                row: index,
                col: 0,
                rows: self.len(),
                cols: self.ncols(),
            });
        }
        Ok(self.data.row(index))
    }

    /// Copy of this set with station `index` removed
    pub fn without_row(&self, index: usize) -> Result<Self> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                row: index,
                col: 0,
                rows: self.len(),
                cols: self.ncols(),
            });
        }
        let keep: Vec<usize> = (0..self.len()).filter(|&i| i != index).collect();
        Ok(Self {
            data: self.data.select(Axis(0), &keep),
        })
    }

    /// Get a reference to the underlying matrix
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consume the set and return the underlying matrix
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }
}
