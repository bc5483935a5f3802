//! Location estimators derived from quantiles

use crate::QuantileEstimator;
use lab_core::{CentralTendencyEstimator, Result};

/// Sample median, `Q(0.5)` under the wrapped quantile definition
#[derive(Debug, Clone, Default)]
pub struct Median<Q> {
    quantile: Q,
}

impl<Q: QuantileEstimator> Median<Q> {
    pub fn new(quantile: Q) -> Self {
        Self { quantile }
    }
}

impl<Q: QuantileEstimator> CentralTendencyEstimator for Median<Q> {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        Ok(self.quantile.quantile_sorted(sorted_data, 0.5)?)
    }
}

/// Quartile midpoint `z_q = (Q(0.25) + Q(0.75)) / 2`
///
/// Robust to a quarter of the sample on either side, and for symmetric
/// distributions converges to the centre even when the mean does not exist.
#[derive(Debug, Clone, Default)]
pub struct QuartileMidpoint<Q> {
    quantile: Q,
}

impl<Q: QuantileEstimator> QuartileMidpoint<Q> {
    pub fn new(quantile: Q) -> Self {
        Self { quantile }
    }
}

impl<Q: QuantileEstimator> CentralTendencyEstimator for QuartileMidpoint<Q> {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        let quartiles = self.quantile.quantiles_sorted(sorted_data, &[0.25, 0.75])?;
        Ok((quartiles[0] + quartiles[1]) / 2.0)
    }
}
