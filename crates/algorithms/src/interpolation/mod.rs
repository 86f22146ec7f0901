//! Missing-value interpolation on gridded fields
//!
//! - Nearest-neighbor fill: mean of the valid cells inside a square search window

mod fill;

pub use fill::{nearest_neighbor_fill, FillParams, FillWeighting, NearestNeighborFill};
