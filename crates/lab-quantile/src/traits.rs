//! Core traits for quantile estimation

use crate::Result;

/// Main trait for quantile estimation
pub trait QuantileEstimator: Send + Sync + Clone {
    /// Estimate a single quantile
    ///
    /// # Warning
    /// This method will sort the data in place! If you need to preserve the original
    /// order, use `quantile_sorted()` with pre-sorted data or make a copy first.
    fn quantile(&self, data: &mut [f64], p: f64) -> Result<f64> {
        data.sort_by(f64::total_cmp);
        self.quantile_sorted(data, p)
    }

    /// Estimate a single quantile from pre-sorted data
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate multiple quantiles, sorting the data in place once
    fn quantiles(&self, data: &mut [f64], ps: &[f64]) -> Result<Vec<f64>> {
        data.sort_by(f64::total_cmp);
        self.quantiles_sorted(data, ps)
    }

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter().map(|&p| self.quantile_sorted(sorted_data, p)).collect()
    }
}
