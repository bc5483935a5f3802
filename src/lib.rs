//! Sampling experiments over four canonical distributions
//!
//! This crate re-exports the workspace crates behind the two lab programs:
//!
//! - `characteristics`: histograms of one sample per size with the
//!   theoretical density, then Monte-Carlo moments of the mean, median and
//!   quartile midpoint
//! - `outliers`: box plots of one sample per size and a table of flier counts
//!
//! # Example
//!
//! ```rust
//! use distribution_lab::prelude::*;
//!
//! let config = LabConfig::outliers().with_seed(3);
//! let sets = draw_samples(&config, 3).unwrap();
//! visualize_boxplots(&NullVisualizer, &sets).unwrap();
//! let counts = count_outliers(&sets).unwrap();
//! let table = outlier_table(&counts, &config.sample_sizes).unwrap();
//! assert_eq!(table.shape(), (4, 4));
//! ```

pub use lab_core as core;
pub use lab_distributions as distributions;
pub use lab_experiments as experiments;
pub use lab_histogram as histogram;
pub use lab_quantile as quantile;
pub use lab_spread as spread;
pub use lab_viz as viz;

/// Prelude for convenient imports
pub mod prelude {
    pub use lab_distributions::{Distribution, DistributionKind};
    pub use lab_experiments::prelude::*;
    pub use lab_viz::PlottersVisualizer;
}
