//! Estimator traits
//!
//! Location estimators share one interface so the Monte-Carlo stage can
//! treat the mean, the median and the quartile midpoint uniformly.

use crate::{math, Result};

/// Trait for estimators of central tendency (location)
///
/// # Example
///
/// ```rust
/// use lab_core::{CentralTendencyEstimator, Result};
///
/// #[derive(Clone)]
/// struct Minimum;
///
/// impl CentralTendencyEstimator for Minimum {
///     fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
///         sorted_data
///             .first()
///             .copied()
///             .ok_or_else(lab_core::Error::empty_input)
///     }
/// }
/// ```
pub trait CentralTendencyEstimator: Send + Sync + Clone {
    /// Estimate the central tendency from a sample
    ///
    /// # Warning
    /// This method may sort the data in place! If you need to preserve the original
    /// order, use `estimate_sorted()` with pre-sorted data or make a copy first.
    fn estimate(&self, data: &mut [f64]) -> Result<f64> {
        data.sort_by(f64::total_cmp);
        self.estimate_sorted(data)
    }

    /// Estimate the central tendency from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64>;
}

/// Arithmetic mean
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl CentralTendencyEstimator for Mean {
    // Order does not matter for the mean, skip the sort
    fn estimate(&self, data: &mut [f64]) -> Result<f64> {
        math::mean(data)
    }

    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        math::mean(sorted_data)
    }
}
