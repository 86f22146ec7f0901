//! # Geodstat Algorithms
//!
//! Spatial-statistics routines for post-processing geodetic data such as
//! GNSS station networks and gridded displacement fields.
//!
//! ## Available Algorithm Categories
//!
//! - **network**: Pairwise station distances, density-aware downsampling
//! - **statistics**: Automatic histogram binning, sliding-window outlier removal
//! - **interpolation**: Nearest-neighbor fill of missing cells
//!
//! All routines are pure: inputs are borrowed and every result is a fresh
//! copy. Enable the `parallel` feature to spread the grid row loops over
//! rayon's thread pool.

mod maybe_rayon;

pub mod interpolation;
pub mod network;
pub mod statistics;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::interpolation::{
        nearest_neighbor_fill, FillParams, FillWeighting, NearestNeighborFill,
    };
    pub use crate::network::{
        distance_matrix, downsample, downsample_step, DistanceMatrix, DownsampleResult,
        DownsampleStep,
    };
    pub use crate::statistics::{
        denoise, Denoise, DenoiseParams, DenoiseResult, Histogram,
    };
    pub use geodstat_core::prelude::*;
}
