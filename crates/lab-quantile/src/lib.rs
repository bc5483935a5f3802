//! Quantile estimation for the distribution lab
//!
//! Provides the linear-interpolation (type 7) sample quantile and two
//! location estimators built from it: the median and the quartile
//! midpoint.
//!
//! # Example
//!
//! ```rust
//! use lab_quantile::{estimators::linear, QuantileEstimator, QuartileMidpoint};
//! use lab_core::CentralTendencyEstimator;
//!
//! let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let q1 = linear().quantile(&mut data, 0.25).unwrap();
//! assert_eq!(q1, 2.0);
//!
//! let zq = QuartileMidpoint::new(linear());
//! assert_eq!(zq.estimate(&mut data).unwrap(), 3.0);
//! ```

pub mod error;
pub mod estimators;
pub mod traits;

pub use error::{Error, Result};
pub use estimators::{LinearQuantile, Median, QuartileMidpoint};
pub use traits::QuantileEstimator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Error, LinearQuantile, Median, QuantileEstimator, QuartileMidpoint, Result};
}
