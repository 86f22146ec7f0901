//! # Geodstat Core
//!
//! Core types and traits for the geodstat spatial-statistics library.
//!
//! This crate provides:
//! - `Grid<T>`: gridded field with NaN as the missing-value marker
//! - `Window`: square neighborhood around a cell, clipped at the grid edges
//! - `sub2ind` / `ind2sub`: column-major linear indexing
//! - `PointSet`: station coordinates plus the attribute columns that travel with them
//! - Algorithm traits for consistent API

pub mod error;
pub mod grid;
pub mod points;

pub use error::{Error, Result};
pub use grid::{Grid, GridElement, Window};
pub use points::PointSet;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{ind2sub, sub2ind, Grid, GridElement, Window};
    pub use crate::points::PointSet;
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in geodstat.
///
/// Algorithms are pure functions: the input is borrowed or consumed, the
/// output is always freshly allocated.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
