//! Nearest-neighbor fill of missing cells
//!
//! Every missing cell takes the mean of the valid cells inside the square
//! search window of half-width `radius` around it, clipped to the grid.
//!
//! With distance weighting the window is split into the nested
//! sub-windows of half-width `1..=radius` and the values of all of them
//! are pooled, so a cell on ring `d` (Chebyshev distance) is counted
//! `radius - d + 1` times. Nearer rings therefore weigh more.
//!
//! Neighbors are always read from the input: filled values never feed
//! the fill of another cell. Cells without any valid neighbor stay missing.

use crate::maybe_rayon::*;
use geodstat_core::grid::{Grid, Window};
use geodstat_core::{Algorithm, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How valid neighbors are averaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum FillWeighting {
    /// Plain mean over the whole search window (mode 0)
    #[default]
    Uniform,
    /// Pooled mean over nested sub-windows, nearer rings counted more often (mode 1)
    Distance,
}

impl FillWeighting {
    /// Decode the numeric weighting mode: 0 = uniform, 1 = distance
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Self::Uniform),
            1 => Ok(Self::Distance),
            other => Err(Error::InvalidParameter {
                name: "weighting",
                value: other.to_string(),
                reason: "expected 0 (uniform) or 1 (distance)".into(),
            }),
        }
    }

    /// Numeric weighting mode
    pub fn code(self) -> i64 {
        match self {
            Self::Uniform => 0,
            Self::Distance => 1,
        }
    }

    /// Multiplicity of a cell on ring `ring` of a window of half-width `radius`
    fn weight(self, ring: usize, radius: usize) -> usize {
        match self {
            Self::Uniform => 1,
            Self::Distance if ring == 0 || ring > radius => 0,
            Self::Distance => radius - ring + 1,
        }
    }
}

impl TryFrom<i64> for FillWeighting {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        Self::from_code(code)
    }
}

impl From<FillWeighting> for i64 {
    fn from(weighting: FillWeighting) -> Self {
        weighting.code()
    }
}

/// Parameters for nearest-neighbor fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillParams {
    /// Half-width of the search window in cells
    pub radius: usize,
    /// Neighbor weighting
    pub weighting: FillWeighting,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            radius: 1,
            weighting: FillWeighting::Uniform,
        }
    }
}

impl FillParams {
    /// Build parameters from a radius and a numeric weighting mode
    pub fn new(radius: usize, weight_mode: i64) -> Result<Self> {
        Ok(Self {
            radius,
            weighting: FillWeighting::from_code(weight_mode)?,
        })
    }
}

/// Nearest-neighbor fill algorithm
#[derive(Debug, Clone, Default)]
pub struct NearestNeighborFill;

impl Algorithm for NearestNeighborFill {
    type Input = Grid<f64>;
    type Output = Grid<f64>;
    type Params = FillParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Nearest Neighbor Fill"
    }

    fn description(&self) -> &'static str {
        "Fill missing cells with the mean of valid cells in a square search window"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        nearest_neighbor_fill(&input, params)
    }
}

/// Fill missing cells from valid neighbors.
///
/// # Arguments
/// * `field` - Gridded field, NaN marks missing cells
/// * `params` - Search radius and weighting
///
/// # Returns
/// A new grid of the same shape; valid cells are copied unchanged
pub fn nearest_neighbor_fill(field: &Grid<f64>, params: FillParams) -> Result<Grid<f64>> {
    let (rows, cols) = field.shape();
    let FillParams { radius, weighting } = params;

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = Vec::with_capacity(cols);
            for col in 0..cols {
                let v = unsafe { field.get_unchecked(row, col) };
                if v.is_nan() {
                    row_data.push(fill_value(field, row, col, radius, weighting));
                } else {
                    row_data.push(v);
                }
            }
            row_data
        })
        .collect();

    let output = Grid::from_vec(data, rows, cols)?;

    let before = field.missing_count();
    let after = output.missing_count();
    debug!(
        radius,
        weighting = weighting.code(),
        filled = before - after,
        unfilled = after,
        "nearest-neighbor fill"
    );

    Ok(output)
}

fn fill_value(field: &Grid<f64>, row: usize, col: usize, radius: usize, weighting: FillWeighting) -> f64 {
    let window = Window::clipped(field.shape(), row, col, radius);

    let mut sum = 0.0;
    let mut total = 0usize;
    for (r, c, v) in window.values(field) {
        if v.is_nan() {
            continue;
        }
        let ring = r.abs_diff(row).max(c.abs_diff(col));
        let w = weighting.weight(ring, radius);
        sum += w as f64 * v;
        total += w;
    }

    if total == 0 {
        f64::NAN
    } else {
        sum / total as f64
    }
}
