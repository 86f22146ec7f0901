//! Statistical analysis of gridded fields
//!
//! - **histogram**: Automatic bin selection and cumulative distributions
//! - **denoise**: Sliding-window outlier removal with an adaptive tolerance

pub mod histogram;
pub mod denoise;

pub use histogram::{nice_bin_width, scott_bin_width, Histogram};
pub use denoise::{denoise, Denoise, DenoiseParams, DenoiseResult};
