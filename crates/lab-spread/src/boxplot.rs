//! Box-plot statistics
//!
//! Quartiles use the linear (type 7) definition. Fences sit at
//! `Q1 - 1.5 * IQR` and `Q3 + 1.5 * IQR`; each whisker
//! ends at the most extreme observation still inside its fence, and every
//! observation beyond a whisker is a flier.

use crate::iqr::Iqr;
use lab_core::{math, Result};
use lab_quantile::{LinearQuantile, QuantileEstimator};
use std::fmt;

/// Whisker reach in units of IQR
pub const WHISKER: f64 = 1.5;

/// Summary statistics drawn by a box plot
#[derive(Debug, Clone, PartialEq)]
pub struct BoxplotStats {
    pub mean: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    /// Lowest observation at or above the lower fence
    pub whisker_low: f64,
    /// Highest observation at or below the upper fence
    pub whisker_high: f64,
    /// Observations beyond the whiskers, in ascending order
    pub fliers: Vec<f64>,
}

impl BoxplotStats {
    /// Number of fliers
    pub fn outlier_count(&self) -> usize {
        self.fliers.len()
    }
}

impl fmt::Display for BoxplotStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "whiskers=[{:.3}, {:.3}], box=[{:.3}, {:.3}], median={:.3}, fliers={}",
            self.whisker_low,
            self.whisker_high,
            self.q1,
            self.q3,
            self.median,
            self.fliers.len()
        )
    }
}

/// Computes [`BoxplotStats`] for a sample
#[derive(Debug, Clone)]
pub struct BoxplotBuilder<Q = LinearQuantile> {
    quantile: Q,
}

impl Default for BoxplotBuilder<LinearQuantile> {
    fn default() -> Self {
        Self::new(LinearQuantile)
    }
}

impl<Q: QuantileEstimator> BoxplotBuilder<Q> {
    pub fn new(quantile: Q) -> Self {
        Self { quantile }
    }

    /// Compute statistics for an unsorted sample
    pub fn compute(&self, data: &[f64]) -> Result<BoxplotStats> {
        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.compute_sorted(&sorted)
    }

    /// Compute statistics for a sorted sample
    pub fn compute_sorted(&self, sorted: &[f64]) -> Result<BoxplotStats> {
        math::check_finite(sorted, "box-plot sample")?;
        let mean = math::mean(sorted)?;
        let median = self.quantile.quantile_sorted(sorted, 0.5)?;
        let (q1, q3) = Iqr::new(self.quantile.clone()).quartiles_sorted(sorted)?;
        let iqr = q3 - q1;

        let low_fence = q1 - WHISKER * iqr;
        let high_fence = q3 + WHISKER * iqr;

        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&x| x >= low_fence)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&x| x <= high_fence)
            .unwrap_or(q3);

        let fliers = sorted
            .iter()
            .copied()
            .filter(|&x| x < whisker_low || x > whisker_high)
            .collect();

        Ok(BoxplotStats {
            mean,
            median,
            q1,
            q3,
            iqr,
            whisker_low,
            whisker_high,
            fliers,
        })
    }
}

/// Box-plot statistics with the default 1.5×IQR whiskers
pub fn boxplot_stats(data: &[f64]) -> Result<BoxplotStats> {
    BoxplotBuilder::default().compute(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_fliers_in_uniform_grid() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let stats = boxplot_stats(&data).unwrap();

        assert_relative_eq!(stats.q1, 3.25);
        assert_relative_eq!(stats.q3, 7.75);
        assert_relative_eq!(stats.median, 5.5);
        assert_relative_eq!(stats.mean, 5.5);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 10.0);
        assert_eq!(stats.outlier_count(), 0);
    }

    #[test]
    fn test_single_high_flier() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let stats = boxplot_stats(&data).unwrap();

        // Q1 = 3.25, Q3 = 7.75, fence = 7.75 + 1.5 * 4.5 = 14.5
        assert_eq!(stats.whisker_high, 9.0);
        assert_eq!(stats.fliers, vec![100.0]);
    }

    #[test]
    fn test_fliers_on_both_sides() {
        let data = vec![-50.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 60.0];
        let stats = boxplot_stats(&data).unwrap();
        assert_eq!(stats.fliers, vec![-50.0, 60.0]);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 8.0);
    }

    #[test]
    fn test_constant_sample() {
        let stats = boxplot_stats(&[2.0; 5]).unwrap();
        assert_eq!(stats.iqr, 0.0);
        assert_eq!(stats.outlier_count(), 0);
    }

    #[test]
    fn test_empty_sample() {
        assert!(boxplot_stats(&[]).is_err());
    }
}
