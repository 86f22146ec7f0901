//! Density-aware downsampling of station networks
//!
//! A station's crowding is the number of other stations strictly closer
//! than the distance threshold. Each step removes the single most crowded
//! station; among equally crowded stations the one whose in-threshold
//! neighbors are closest on average goes first. Repeating the step until
//! no station has a neighbor inside the threshold thins dense clusters and
//! leaves isolated stations alone.

use geodstat_core::{Error, PointSet, Result};
use tracing::{debug, info};

use super::distance_matrix;

/// Outcome of a single downsampling step
#[derive(Debug, Clone)]
pub struct DownsampleStep {
    /// Remaining stations; a fresh copy even when nothing was removed
    pub points: PointSet,
    /// Row of the removed station in the input, `None` when no station
    /// had a neighbor inside the threshold
    pub removed: Option<usize>,
    /// Highest neighbor count found. Zero means the network has converged.
    pub max_neighbors: usize,
}

/// Outcome of downsampling until convergence
#[derive(Debug, Clone)]
pub struct DownsampleResult {
    /// Stations left once no pair is closer than the threshold
    pub points: PointSet,
    /// Input rows of the kept stations, in order
    pub kept: Vec<usize>,
    /// Input rows of the removed stations, in removal order
    pub removed: Vec<usize>,
}

fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "threshold",
            value: threshold.to_string(),
            reason: "must be a finite distance greater than 0".into(),
        });
    }
    Ok(())
}

/// Remove the most crowded station, if any station has a neighbor
/// strictly closer than `threshold`.
///
/// Ties on the neighbor count are broken by the smallest average
/// in-threshold neighbor distance; exact ties keep the first station.
///
/// # Arguments
/// * `points` - Station network (X/Y in the first two columns)
/// * `threshold` - Distance below which two stations count as neighbors
pub fn downsample_step(points: &PointSet, threshold: f64) -> Result<DownsampleStep> {
    validate_threshold(threshold)?;

    let dist = distance_matrix(points);

    // The zero self-distance is always inside a positive threshold
    let near: Vec<usize> = dist
        .outer_iter()
        .map(|row| row.iter().filter(|&&d| d < threshold).count().saturating_sub(1))
        .collect();

    let max_neighbors = near.iter().copied().max().unwrap_or(0);
    if max_neighbors == 0 {
        return Ok(DownsampleStep {
            points: points.clone(),
            removed: None,
            max_neighbors,
        });
    }

    let tied: Vec<usize> = near
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == max_neighbors)
        .map(|(i, _)| i)
        .collect();

    let mut chosen = tied[0];
    if tied.len() > 1 {
        let mut best_avg = f64::INFINITY;
        for &i in &tied {
            let avg = dist
                .row(i)
                .iter()
                .filter(|&&d| d < threshold)
                .sum::<f64>()
                / max_neighbors as f64;
            if avg < best_avg {
                best_avg = avg;
                chosen = i;
            }
        }
    }

    debug!(
        station = chosen,
        neighbors = max_neighbors,
        tied = tied.len(),
        "removing crowded station"
    );

    Ok(DownsampleStep {
        points: points.without_row(chosen)?,
        removed: Some(chosen),
        max_neighbors,
    })
}

/// Apply [`downsample_step`] until no two stations are closer than
/// `threshold`.
pub fn downsample(points: &PointSet, threshold: f64) -> Result<DownsampleResult> {
    validate_threshold(threshold)?;

    let mut current = points.clone();
    let mut kept: Vec<usize> = (0..points.len()).collect();
    let mut removed = Vec::new();

    loop {
        let step = downsample_step(&current, threshold)?;
        let Some(row) = step.removed else {
            break;
        };
        removed.push(kept.remove(row));
        current = step.points;
    }

    info!(
        kept = kept.len(),
        removed = removed.len(),
        threshold,
        "station downsampling converged"
    );

    Ok(DownsampleResult {
        points: current,
        kept,
        removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_cluster_centre() {
        let pts = PointSet::from_coords(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (10.0, 10.0)]).unwrap();
        let step = downsample_step(&pts, 1.5).unwrap();

        assert_eq!(step.max_neighbors, 2);
        assert_eq!(step.removed, Some(1));
        assert_eq!(step.points.len(), 3);
        assert_eq!(step.points.ys().to_vec(), vec![0.0, 2.0, 10.0]);
    }

    #[test]
    fn test_tie_goes_to_tightest_pair() {
        // Every station has exactly one neighbor; the pair at 0.5 apart is tighter
        let pts = PointSet::from_coords(&[(0.0, 0.0), (0.0, 1.0), (5.0, 0.0), (5.0, 0.5)]).unwrap();
        let step = downsample_step(&pts, 1.5).unwrap();

        assert_eq!(step.max_neighbors, 1);
        assert_eq!(step.removed, Some(2));
    }

    #[test]
    fn test_exact_tie_keeps_first_occurrence() {
        let pts = PointSet::from_coords(&[(0.0, 0.0), (0.0, 1.0)]).unwrap();
        let step = downsample_step(&pts, 1.5).unwrap();
        assert_eq!(step.removed, Some(0));
    }

    #[test]
    fn test_no_removal_below_min_distance() {
        let coords: Vec<(f64, f64)> = (0..5)
            .flat_map(|i| (0..5).map(move |j| (i as f64 * 10.0, j as f64 * 10.0)))
            .collect();
        let pts = PointSet::from_coords(&coords).unwrap();
        let step = downsample_step(&pts, 9.9).unwrap();

        assert_eq!(step.removed, None);
        assert_eq!(step.max_neighbors, 0);
        assert_eq!(step.points, pts);
    }

    #[test]
    fn test_single_station() {
        let pts = PointSet::from_coords(&[(1.0, 1.0)]).unwrap();
        let step = downsample_step(&pts, 100.0).unwrap();
        assert_eq!(step.removed, None);
        assert_eq!(step.points.len(), 1);
    }

    #[test]
    fn test_empty_network() {
        let pts = PointSet::from_coords(&[]).unwrap();
        let step = downsample_step(&pts, 1.0).unwrap();
        assert_eq!(step.removed, None);
        assert!(step.points.is_empty());
    }

    #[test]
    fn test_attributes_travel_with_rows() {
        let pts = PointSet::from_rows(&[
            vec![0.0, 0.0, 7.0],
            vec![0.0, 1.0, 8.0],
            vec![0.0, 2.0, 9.0],
        ])
        .unwrap();
        let step = downsample_step(&pts, 1.5).unwrap();
        assert_eq!(step.removed, Some(1));
        assert_eq!(step.points.data().column(2).to_vec(), vec![7.0, 9.0]);
    }

    #[test]
    fn test_invalid_threshold() {
        let pts = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0)]).unwrap();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                downsample_step(&pts, bad),
                Err(Error::InvalidParameter { name: "threshold", .. })
            ));
        }
    }

    #[test]
    fn test_downsample_until_converged() {
        let pts = PointSet::from_coords(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (10.0, 10.0)]).unwrap();
        let result = downsample(&pts, 1.5).unwrap();

        assert_eq!(result.removed, vec![1]);
        assert_eq!(result.kept, vec![0, 2, 3]);
        assert_eq!(result.points.len(), 3);
    }

    #[test]
    fn test_downsample_dense_line() {
        // Stations every 1.0 along a line, threshold 2.5 leaves every third station or so
        let coords: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 0.0)).collect();
        let pts = PointSet::from_coords(&coords).unwrap();
        let result = downsample(&pts, 2.5).unwrap();

        assert_eq!(result.kept.len() + result.removed.len(), 10);
        let xs = result.points.xs().to_vec();
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0]).abs() >= 2.5);
        }
        let mut all: Vec<usize> = result.kept.iter().chain(&result.removed).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }
}
