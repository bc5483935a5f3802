//! Density-normalized histograms for sample exploration
//!
//! Histograms here always report a density per bin,
//! `count / (total_count * bin_width)`, so they can be drawn on the same
//! axes as a theoretical probability density.
//!
//! # Bin count rules
//!
//! - [`FixedWidthBuilder`]: a fixed number of equal-width bins
//! - [`AutoRule`]: the narrower of the Sturges width `range / (log2(n) + 1)`
//!   and the Freedman-Diaconis width `2 IQR n^(-1/3)`
//!
//! # Example
//!
//! ```rust
//! use lab_histogram::{auto_histogram, FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = FixedWidthBuilder::new(5).build(&data).unwrap();
//! assert_eq!(histogram.len(), 5);
//!
//! let auto = auto_histogram(&data).unwrap();
//! assert!((auto.total_mass() - 1.0).abs() < 1e-9);
//! ```

pub mod builders;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{AutoRule, FixedWidthBuilder};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use lab_core::Result;

/// Create a histogram with the automatic bin rule
pub fn auto_histogram(data: &[f64]) -> Result<Histogram> {
    AutoRule.build(data)
}
