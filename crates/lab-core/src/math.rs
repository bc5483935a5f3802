//! Summary primitives over plain `f64` slices
//!
//! The Monte-Carlo stages only ever need first and second moments of a
//! stream of estimates, so [`MomentAccumulator`] keeps running sums instead
//! of collecting every value.

use crate::{Error, Result};

/// Arithmetic mean of a sample
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population variance (divides by `n`)
pub fn variance(data: &[f64]) -> Result<f64> {
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok(ss / data.len() as f64)
}

/// Reject samples containing NaN or infinities
pub fn check_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Running first and second raw moments of a stream of values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MomentAccumulator {
    count: usize,
    sum: f64,
    sum_of_squares: f64,
}

impl MomentAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_of_squares += value * value;
    }

    /// Number of observations seen
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the observations, `None` when empty
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Mean of the squared observations, `None` when empty
    pub fn mean_of_squares(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum_of_squares / self.count as f64)
    }

    /// Mean of squares minus square of mean
    pub fn dispersion(&self) -> Option<f64> {
        let m = self.mean()?;
        Some(self.mean_of_squares()? - m * m)
    }
}

impl FromIterator<f64> for MomentAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl Extend<f64> for MomentAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
