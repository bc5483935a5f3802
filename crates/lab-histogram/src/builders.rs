//! Histogram building strategies
//!
//! [`AutoRule`] only decides a bin count; the counting itself is done by
//! [`FixedWidthBuilder`].

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use lab_core::Result;
use lab_quantile::{LinearQuantile, QuantileEstimator};
use tracing::trace;

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// the sample range. A sample whose values are all equal is widened to
/// `[x - 0.5, x + 0.5]` so the single bin still has a finite density.
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        if sorted_sample.is_empty() {
            return Ok(Histogram::empty());
        }
        lab_core::math::check_finite(sorted_sample, "histogram sample")?;

        let n = sorted_sample.len();
        let mut min = sorted_sample[0];
        let mut max = sorted_sample[n - 1];
        if max - min < 1e-10 {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / self.num_bins as f64;
        let mut bins: Vec<HistogramBin> = (0..self.num_bins)
            .map(|i| {
                let left = min + i as f64 * width;
                let right = if i == self.num_bins - 1 {
                    max // Ensure last bin includes max
                } else {
                    min + (i + 1) as f64 * width
                };
                HistogramBin::new(left, right, 0, n)
            })
            .collect();

        // Single pass through sorted data
        let mut current_bin = 0;
        for &value in sorted_sample {
            while current_bin < self.num_bins - 1 && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        for bin in &mut bins {
            bin.density = bin.count as f64 / (n as f64 * bin.width());
        }

        Ok(Histogram::new(bins, n, min, max))
    }
}

/// Number of bins of the given width needed to cover `range`
fn bins_for_width(range: f64, width: f64) -> usize {
    if width > 1e-10 && range > 0.0 {
        ((range / width).ceil() as usize).max(1)
    } else {
        1
    }
}

fn sturges_width(sorted_sample: &[f64]) -> f64 {
    range_of(sorted_sample) / ((sorted_sample.len() as f64).log2() + 1.0)
}

fn freedman_diaconis_width(sorted_sample: &[f64]) -> Result<f64> {
    let quartiles = LinearQuantile.quantiles_sorted(sorted_sample, &[0.25, 0.75])?;
    let iqr = quartiles[1] - quartiles[0];
    Ok(2.0 * iqr * (sorted_sample.len() as f64).powf(-1.0 / 3.0))
}

fn range_of(sorted_sample: &[f64]) -> f64 {
    sorted_sample[sorted_sample.len() - 1] - sorted_sample[0]
}

/// Automatic bin selection
///
/// Takes the smaller of the Sturges and Freedman-Diaconis widths, falling
/// back to Sturges when the interquartile range is zero. Sturges dominates
/// for small samples, Freedman-Diaconis for large or heavy-tailed ones.
pub struct AutoRule;

impl AutoRule {
    /// Bin count the rule would choose for a sorted, non-empty sample
    pub fn bin_count(&self, sorted_sample: &[f64]) -> Result<usize> {
        let sturges = sturges_width(sorted_sample);
        let fd = freedman_diaconis_width(sorted_sample)?;
        let width = if fd > 0.0 { fd.min(sturges) } else { sturges };
        let num_bins = bins_for_width(range_of(sorted_sample), width);
        trace!(sturges, fd, num_bins, "auto bin selection");
        Ok(num_bins)
    }
}

impl HistogramBuilder for AutoRule {
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        if sorted_sample.is_empty() {
            return Ok(Histogram::empty());
        }
        let num_bins = self.bin_count(sorted_sample)?;
        FixedWidthBuilder::new(num_bins).build_sorted(sorted_sample)
    }
}
