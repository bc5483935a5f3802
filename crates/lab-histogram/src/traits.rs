//! Core traits for histogram building

use crate::types::Histogram;
use lab_core::Result;

/// Trait for building histograms from sample data
pub trait HistogramBuilder {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.build_sorted(&sorted)
    }

    /// Build a histogram from pre-sorted data
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram>;
}
