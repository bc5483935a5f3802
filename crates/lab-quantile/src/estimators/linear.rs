//! Linear-interpolation sample quantile (Hyndman-Fan type 7)
//!
//! For sorted data `x[0..n]` and probability `p`, the estimate sits at the
//! fractional position `h = (n - 1) p`:
//!
//! ```text
//! Q(p) = x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])
//! ```
//!
//! This is the default definition used by most numeric environments, so
//! quartiles and box-plot fences agree with what a reader would compute by
//! hand.

use crate::{Error, QuantileEstimator, Result};

/// Type 7 quantile estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearQuantile;

/// Convenience constructor
pub fn linear() -> LinearQuantile {
    LinearQuantile
}

impl QuantileEstimator for LinearQuantile {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        Error::check_non_empty(sorted_data)?;
        Error::check_probability(p)?;

        let n = sorted_data.len();
        if n == 1 {
            return Ok(sorted_data[0]);
        }

        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        if lo >= n - 1 {
            return Ok(sorted_data[n - 1]);
        }
        let frac = h - lo as f64;
        let (a, b) = (sorted_data[lo], sorted_data[lo + 1]);
        Ok(a + frac * (b - a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_known_values() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let q = LinearQuantile;
        assert_relative_eq!(q.quantile_sorted(&data, 0.25).unwrap(), 3.25);
        assert_relative_eq!(q.quantile_sorted(&data, 0.5).unwrap(), 5.5);
        assert_relative_eq!(q.quantile_sorted(&data, 0.75).unwrap(), 7.75);
        assert_relative_eq!(q.quantile_sorted(&data, 0.0).unwrap(), 1.0);
        assert_relative_eq!(q.quantile_sorted(&data, 1.0).unwrap(), 10.0);
    }

    #[test]
    fn test_linear_odd_length_median() {
        let mut data = vec![5.0, 1.0, 3.0];
        assert_relative_eq!(LinearQuantile.quantile(&mut data, 0.5).unwrap(), 3.0);
        assert_eq!(data, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(LinearQuantile.quantile_sorted(&[42.0], 0.3).unwrap(), 42.0);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            LinearQuantile.quantile_sorted(&[], 0.5),
            Err(Error::EmptyData)
        ));
        assert!(matches!(
            LinearQuantile.quantile_sorted(&[1.0, 2.0], -0.1),
            Err(Error::InvalidProbability { .. })
        ));
    }

    #[test]
    fn test_batch_quantiles() {
        let mut data = vec![4.0, 1.0, 3.0, 2.0];
        let qs = LinearQuantile.quantiles(&mut data, &[0.25, 0.5, 0.75]).unwrap();
        assert_relative_eq!(qs[0], 1.75);
        assert_relative_eq!(qs[1], 2.5);
        assert_relative_eq!(qs[2], 3.25);
    }
}
