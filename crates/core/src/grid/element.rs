//! Grid element trait for cell values

use num_traits::Float;
use std::fmt::Debug;

/// Trait for types that can be stored in a grid cell.
///
/// Missing cells are encoded as NaN, so only floating point types
/// qualify. There is no separate no-data value to configure.
pub trait GridElement: Float + Debug + Send + Sync + 'static {
    /// The missing-value marker
    fn missing() -> Self {
        Self::nan()
    }

    /// Check if this value marks a missing cell
    fn is_missing(self) -> bool {
        self.is_nan()
    }

    /// Widen to f64
    fn as_f64(self) -> f64;
}

macro_rules! impl_grid_element {
    ($t:ty) => {
        impl GridElement for $t {
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_grid_element!(f32);
impl_grid_element!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_marker() {
        assert!(<f64 as GridElement>::missing().is_missing());
        assert!(<f32 as GridElement>::missing().is_missing());
        assert!(!GridElement::is_missing(0.0_f64));
        assert!(!GridElement::is_missing(f64::INFINITY));
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(GridElement::as_f64(1.5_f32), 1.5);
    }
}
