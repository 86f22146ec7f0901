//! Automatic histogram binning
//!
//! The bin width follows Scott's normal-reference rule,
//! `3.5 * sigma / n^(1/3)`, snapped to 1, 2, 3, 5 or 10 times a power of
//! ten. Edges are aligned to whole multiples of the width and cover the
//! sample range; the last bin is closed on the right.

/// Histogram of finite samples over uniformly spaced edges
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin `samples` with an automatically chosen width.
    ///
    /// Non-finite samples are ignored. Returns `None` when no finite
    /// sample is left. A set of identical samples `v` gets the single bin
    /// `[v - 0.5, v + 0.5]`.
    pub fn auto(samples: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }

        let (min, max) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        let edges = if max > min {
            aligned_edges(min, max, nice_bin_width(scott_bin_width(&finite)))
        } else {
            vec![min - 0.5, min + 0.5]
        };

        Some(Self::from_edges(&finite, edges))
    }

    fn from_edges(samples: &[f64], edges: Vec<f64>) -> Self {
        let nbins = edges.len() - 1;
        let mut counts = vec![0usize; nbins];
        for &v in samples {
            // Values sitting on (or rounding past) the last edge belong to the last bin
            let bin = edges.partition_point(|&e| e <= v).saturating_sub(1).min(nbins - 1);
            counts[bin] += 1;
        }
        Self { edges, counts }
    }

    /// Bin edges, one more than the number of bins
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Sample count per bin
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of binned samples
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Cumulative fraction of samples up to and including each bin
    pub fn cdf(&self) -> Vec<f64> {
        let total = self.total() as f64;
        let mut running = 0usize;
        self.counts
            .iter()
            .map(|&c| {
                running += c;
                running as f64 / total
            })
            .collect()
    }

    /// Right edge of the bin whose cumulative fraction is closest to `q`.
    ///
    /// The first such bin wins when several are equally close.
    pub fn quantile_edge(&self, q: f64) -> f64 {
        let mut best = 0;
        let mut best_gap = f64::INFINITY;
        for (i, c) in self.cdf().into_iter().enumerate() {
            let gap = (c - q).abs();
            if gap < best_gap {
                best_gap = gap;
                best = i;
            }
        }
        self.edges[best + 1]
    }
}

/// Scott's rule bin width, `3.5 * std / n^(1/3)`.
///
/// Uses the sample standard deviation (`n - 1`); fewer than two samples
/// give a width of zero.
pub fn scott_bin_width(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1) as f64;
    3.5 * var.sqrt() / (n as f64).cbrt()
}

/// Snap a raw bin width to 1, 2, 3, 5 or 10 times a power of ten.
///
/// Non-positive or non-finite widths snap to 1.
pub fn nice_bin_width(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }

    let power = 10f64.powf(raw.log10().floor());
    let relative = raw / power;
    let multiple = if relative < 1.5 {
        1.0
    } else if relative < 2.5 {
        2.0
    } else if relative < 4.0 {
        3.0
    } else if relative < 7.5 {
        5.0
    } else {
        10.0
    };
    multiple * power
}

fn aligned_edges(min: f64, max: f64, width: f64) -> Vec<f64> {
    let left = width * (min / width).floor();
    let nbins = (((max - left) / width).ceil() as usize).max(1);
    (0..=nbins).map(|k| left + k as f64 * width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nice_bin_width() {
        assert_relative_eq!(nice_bin_width(9.99), 10.0, epsilon = 1e-12);
        assert_relative_eq!(nice_bin_width(10.4), 10.0, epsilon = 1e-12);
        assert_relative_eq!(nice_bin_width(0.23), 0.2, epsilon = 1e-12);
        assert_relative_eq!(nice_bin_width(3.3), 3.0, epsilon = 1e-12);
        assert_relative_eq!(nice_bin_width(0.06), 0.05, epsilon = 1e-12);
        assert_relative_eq!(nice_bin_width(170.0), 200.0, epsilon = 1e-9);
        assert_eq!(nice_bin_width(0.0), 1.0);
        assert_eq!(nice_bin_width(f64::NAN), 1.0);
    }

    #[test]
    fn test_scott_bin_width() {
        // std of [1, 2, 3, 4, 5, 6, 7, 8] is sqrt(6)
        let samples: Vec<f64> = (1..=8).map(|v| v as f64).collect();
        assert_relative_eq!(scott_bin_width(&samples), 3.5 * 6f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_eq!(scott_bin_width(&[4.0]), 0.0);
    }

    #[test]
    fn test_auto_covers_range() {
        let samples = [0.3, 1.1, 1.9, 2.2, 2.8, 3.7, 4.4, 9.6];
        let h = Histogram::auto(&samples).unwrap();
        let edges = h.edges();
        assert!(edges[0] <= 0.3);
        assert!(*edges.last().unwrap() >= 9.6);
        assert_eq!(h.total(), samples.len());
        assert_eq!(h.counts().len(), edges.len() - 1);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let h = Histogram::from_edges(&[0.0, 0.4, 3.0], vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(h.counts(), &[2, 0, 1]);

        // std 10 over 4 samples snaps to a single bin of width 20
        let h = Histogram::auto(&[0.0, 0.0, 0.0, 20.0]).unwrap();
        assert_eq!(h.edges(), &[0.0, 20.0]);
        assert_eq!(h.counts(), &[4]);
    }

    #[test]
    fn test_constant_samples() {
        let h = Histogram::auto(&[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(h.edges(), &[1.5, 2.5]);
        assert_eq!(h.counts(), &[3]);
        assert_eq!(h.quantile_edge(0.95), 2.5);
    }

    #[test]
    fn test_non_finite_dropped() {
        let h = Histogram::auto(&[1.0, f64::NAN, f64::INFINITY, 1.0]).unwrap();
        assert_eq!(h.total(), 2);
        assert!(Histogram::auto(&[f64::NAN]).is_none());
        assert!(Histogram::auto(&[]).is_none());
    }

    #[test]
    fn test_cdf_and_quantile_edge() {
        let h = Histogram::from_edges(&[0.5, 0.5, 0.5, 1.5, 2.5], vec![0.0, 1.0, 2.0, 3.0]);
        let cdf = h.cdf();
        assert_relative_eq!(cdf[0], 0.6);
        assert_relative_eq!(cdf[1], 0.8);
        assert_relative_eq!(cdf[2], 1.0);
        // 1.0 is 0.05 away from 0.95, 0.8 is 0.15 away
        assert_eq!(h.quantile_edge(0.95), 3.0);
        assert_eq!(h.quantile_edge(0.7), 1.0);
    }
}
