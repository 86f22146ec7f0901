//! Gridded fields and neighborhood windows

mod element;
mod field;
mod index;
mod window;

pub use element::GridElement;
pub use field::{Grid, GridStatistics};
pub use index::{ind2sub, sub2ind};
pub use window::{Window, WindowValues};
