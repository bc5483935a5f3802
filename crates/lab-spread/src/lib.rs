//! Spread measurements and box-plot statistics
//!
//! - [`Iqr`]: interquartile range over any quantile definition
//! - [`BoxplotBuilder`]: quartiles, 1.5×IQR whiskers and fliers
//!
//! # Example
//!
//! ```rust
//! use lab_spread::boxplot_stats;
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
//! let stats = boxplot_stats(&sample).unwrap();
//! assert_eq!(stats.fliers, vec![100.0]);
//! ```

pub mod boxplot;
pub mod iqr;

pub use boxplot::{boxplot_stats, BoxplotBuilder, BoxplotStats, WHISKER};
pub use iqr::Iqr;

pub use lab_core::Result;
