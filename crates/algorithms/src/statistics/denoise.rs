//! Sliding-window outlier removal on gridded fields
//!
//! Each cell is compared with the valid cells of its `ws x ws` window
//! through the mean absolute difference (the cell itself included, so a
//! full window averages `ws²` terms). The distribution of that statistic
//! over interior cells, whose windows are not clipped, gives the
//! tolerance: the right edge of the histogram bin whose cumulative
//! fraction is closest to the 95th percentile. Every cell above the
//! tolerance is then set to missing.
//!
//! Boundary windows are truncated to the grid, never padded or wrapped.
//! Both passes read the input field, so flagging one cell does not
//! change the statistic of its neighbors.

use crate::maybe_rayon::*;
use geodstat_core::grid::{sub2ind, Grid, Window};
use geodstat_core::{Algorithm, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::histogram::Histogram;

/// Parameters for outlier removal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenoiseParams {
    /// Side length of the square comparison window, must be odd
    pub window_size: usize,
    /// Cumulative fraction of the local-difference distribution used as tolerance
    pub quantile: f64,
}

impl Default for DenoiseParams {
    fn default() -> Self {
        Self {
            window_size: 3,
            quantile: 0.95,
        }
    }
}

impl DenoiseParams {
    fn validate(&self) -> Result<()> {
        if self.window_size % 2 == 0 {
            return Err(Error::InvalidParameter {
                name: "window_size",
                value: self.window_size.to_string(),
                reason: "must be an odd number of cells".into(),
            });
        }
        if !(self.quantile > 0.0 && self.quantile <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "quantile",
                value: self.quantile.to_string(),
                reason: "must be in (0, 1]".into(),
            });
        }
        Ok(())
    }

    /// Half-width of the window
    pub fn edge(&self) -> usize {
        self.window_size / 2
    }
}

/// Result of outlier removal
#[derive(Debug, Clone)]
pub struct DenoiseResult {
    /// Copy of the input with outliers set to NaN
    pub field: Grid<f64>,
    /// Column-major linear indices (`row + col * rows`) of the flagged cells, ascending
    pub flagged: Vec<usize>,
    /// Tolerance applied, `None` when no interior cell yielded a sample
    pub tolerance: Option<f64>,
}

/// Outlier removal algorithm
#[derive(Debug, Clone, Default)]
pub struct Denoise;

impl Algorithm for Denoise {
    type Input = Grid<f64>;
    type Output = DenoiseResult;
    type Params = DenoiseParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Denoise"
    }

    fn description(&self) -> &'static str {
        "Remove cells that deviate from their neighborhood beyond an adaptive 95th-percentile tolerance"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        denoise(&input, params)
    }
}

/// Flag and null out cells that are outliers with respect to their window.
///
/// # Arguments
/// * `field` - Gridded field, NaN marks missing cells
/// * `params` - Window size and tolerance quantile
///
/// # Returns
/// The filtered copy, the flagged linear indices and the tolerance used
pub fn denoise(field: &Grid<f64>, params: DenoiseParams) -> Result<DenoiseResult> {
    params.validate()?;

    let (rows, cols) = field.shape();
    let edge = params.edge();

    let samples = interior_samples(field, edge);
    let Some(histogram) = Histogram::auto(&samples) else {
        warn!(
            rows,
            cols,
            window_size = params.window_size,
            "no interior cell with a valid window, nothing flagged"
        );
        return Ok(DenoiseResult {
            field: field.clone(),
            flagged: Vec::new(),
            tolerance: None,
        });
    };
    let tolerance = histogram.quantile_edge(params.quantile);

    let exceeds: Vec<bool> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            (0..cols)
                .map(|col| local_difference(field, row, col, edge).is_some_and(|d| d > tolerance))
                .collect::<Vec<_>>()
        })
        .collect();

    let mut output = field.clone();
    let mut flagged = Vec::new();
    for col in 0..cols {
        for row in 0..rows {
            if exceeds[row * cols + col] {
                output.set(row, col, f64::NAN)?;
                flagged.push(sub2ind((rows, cols), row, col)?);
            }
        }
    }

    debug!(
        samples = samples.len(),
        bins = histogram.counts().len(),
        tolerance,
        flagged = flagged.len(),
        "denoise finished"
    );

    Ok(DenoiseResult {
        field: output,
        flagged,
        tolerance: Some(tolerance),
    })
}

/// Local differences of all interior cells, non-finite values dropped
fn interior_samples(field: &Grid<f64>, edge: usize) -> Vec<f64> {
    let (rows, cols) = field.shape();
    if rows <= 2 * edge || cols <= 2 * edge {
        return Vec::new();
    }

    (edge..rows - edge)
        .into_par_iter()
        .flat_map(|row| {
            (edge..cols - edge)
                .filter_map(|col| local_difference(field, row, col, edge))
                .filter(|d| d.is_finite())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Mean absolute difference between a cell and the valid cells of its
/// clipped window. `None` when the cell itself is missing.
fn local_difference(field: &Grid<f64>, row: usize, col: usize, edge: usize) -> Option<f64> {
    let center = field.get(row, col).ok()?;
    if center.is_nan() {
        return None;
    }

    let window = Window::clipped(field.shape(), row, col, edge);
    let (sum, count) = window
        .values(field)
        .filter(|&(_, _, v)| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), (_, _, v)| {
            (sum + (v - center).abs(), count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
