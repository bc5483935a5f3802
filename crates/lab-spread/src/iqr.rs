//! Interquartile range

use lab_core::Result;
use lab_quantile::QuantileEstimator;

/// `Q(0.25)` and `Q(0.75)` under the wrapped quantile definition
#[derive(Debug, Clone, Default)]
pub struct Iqr<Q> {
    quantile: Q,
}

impl<Q: QuantileEstimator> Iqr<Q> {
    pub fn new(quantile: Q) -> Self {
        Self { quantile }
    }

    /// First and third quartiles of sorted data
    pub fn quartiles_sorted(&self, sorted_data: &[f64]) -> Result<(f64, f64)> {
        let qs = self.quantile.quantiles_sorted(sorted_data, &[0.25, 0.75])?;
        Ok((qs[0], qs[1]))
    }
}
