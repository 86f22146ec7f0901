//! Station network analysis
//!
//! - Distance matrix: all pairwise planar distances between stations
//! - Downsampling: greedy removal of the most crowded station, one per step

mod distance;
mod downsample;

pub use distance::{distance_matrix, DistanceMatrix};
pub use downsample::{downsample, downsample_step, DownsampleResult, DownsampleStep};
