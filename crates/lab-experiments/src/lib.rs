//! Experiments of the distribution lab
//!
//! Both programs are built from the same pieces:
//!
//! - [`LabConfig`] presets describe the grid of distributions and sample sizes
//! - [`scenario::enumerate`] flattens the grid into [`Scenario`]s, each with
//!   its own random stream
//! - [`run_characteristics`] estimates the moments of the mean, median and
//!   quartile midpoint by Monte-Carlo repetition
//! - [`draw_samples`] and [`count_outliers`] produce the box-plot census
//! - [`SampleVisualizer`] receives the display samples for rendering
//!
//! # Example
//!
//! ```rust
//! use lab_experiments::{format_characteristics, run_characteristics, LabConfig};
//!
//! let config = LabConfig::characteristics()
//!     .with_sample_sizes(vec![10])
//!     .with_repeats(20)
//!     .with_seed(42);
//! let records = run_characteristics(&config).unwrap();
//! assert_eq!(records.len(), 4);
//! assert!(format_characteristics(&records).starts_with("Distribution: Cauchy"));
//! ```

pub mod characteristics;
pub mod config;
pub mod error;
pub mod outliers;
pub mod report;
pub mod scenario;
pub mod visualization;

pub use characteristics::{evaluate_characteristics, run_characteristics, StatisticsRecord};
pub use config::LabConfig;
pub use error::{Error, Result};
pub use outliers::{count_outliers, draw_samples, OutlierCount, SampleSet};
pub use report::{format_characteristics, outlier_table};
pub use scenario::{resolve_seed, Scenario, Stage};
pub use visualization::{
    visualize_boxplots, visualize_histograms, NullVisualizer, Panel, SampleVisualizer,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        count_outliers, draw_samples, format_characteristics, outlier_table, resolve_seed,
        run_characteristics, visualize_boxplots, visualize_histograms, Error, LabConfig,
        NullVisualizer, Result, SampleVisualizer,
    };
}
