//! Pairwise distance matrix for station networks

use geodstat_core::{Algorithm, Error, PointSet, Result};
use ndarray::Array2;

/// Distance matrix algorithm
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrix;

impl Algorithm for DistanceMatrix {
    type Input = PointSet;
    type Output = Array2<f64>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Distance Matrix"
    }

    fn description(&self) -> &'static str {
        "Pairwise Euclidean distances between stations (X/Y columns only)"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        Ok(distance_matrix(&input))
    }
}

/// Compute the `N x N` Euclidean distance matrix of a point set.
///
/// Only the X/Y columns take part. Each pair is computed once and
/// mirrored, so `D[i][j] == D[j][i]` holds bit for bit and the diagonal
/// is exactly zero. An empty point set yields a `0 x 0` matrix.
pub fn distance_matrix(points: &PointSet) -> Array2<f64> {
    let n = points.len();
    let xs = points.xs();
    let ys = points.ys();

    let mut dist = Array2::zeros((n, n));
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = xs[i] - xs[j];
            let dy = ys[i] - ys[j];
            let d = (dx * dx + dy * dy).sqrt();
            dist[[i, j]] = d;
            dist[[j, i]] = d;
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn network() -> PointSet {
        PointSet::from_rows(&[
            vec![0.0, 0.0, 0.1],
            vec![3.0, 4.0, 0.2],
            vec![-2.0, 7.5, 0.3],
            vec![10.0, -1.0, 0.4],
        ])
        .unwrap()
    }

    #[test]
    fn test_known_distance() {
        let d = distance_matrix(&network());
        assert_relative_eq!(d[[0, 1]], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric_zero_diagonal() {
        let pts = network();
        let d = distance_matrix(&pts);
        assert_eq!(d.dim(), (4, 4));
        for i in 0..4 {
            assert_eq!(d[[i, i]], 0.0);
            for j in 0..4 {
                assert_eq!(d[[i, j]], d[[j, i]]);
                let dx = pts.xs()[i] - pts.xs()[j];
                let dy = pts.ys()[i] - pts.ys()[j];
                assert_relative_eq!(d[[i, j]], dx.hypot(dy), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_attribute_columns_ignored() {
        let with_attrs = network();
        let bare = PointSet::from_array(with_attrs.data().slice(ndarray::s![.., 0..2]).to_owned()).unwrap();
        assert_eq!(distance_matrix(&with_attrs), distance_matrix(&bare));
    }

    #[test]
    fn test_empty_and_single() {
        let empty = PointSet::from_coords(&[]).unwrap();
        assert_eq!(distance_matrix(&empty).dim(), (0, 0));

        let single = PointSet::from_coords(&[(4.0, 2.0)]).unwrap();
        let d = distance_matrix(&single);
        assert_eq!(d.dim(), (1, 1));
        assert_eq!(d[[0, 0]], 0.0);
    }

    #[test]
    fn test_algorithm_trait() {
        let algo = DistanceMatrix;
        assert_eq!(algo.name(), "Distance Matrix");
        let d = algo.execute_default(network()).unwrap();
        assert_eq!(d.dim(), (4, 4));
    }
}
