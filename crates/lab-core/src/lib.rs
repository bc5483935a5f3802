//! Core types shared by the distribution-lab crates
//!
//! This crate holds the pieces every stage of the lab depends on:
//!
//! - a unified [`Error`] type and [`Result`] alias
//! - summary primitives over `&[f64]` ([`math::mean`], [`MomentAccumulator`])
//! - the [`CentralTendencyEstimator`] trait implemented by the mean,
//!   median and quartile-midpoint estimators
//!
//! # Example
//!
//! ```rust
//! use lab_core::{CentralTendencyEstimator, Mean, MomentAccumulator};
//!
//! let mut data = vec![1.0, 2.0, 3.0, 4.0];
//! let mean = Mean.estimate(&mut data).unwrap();
//! assert_eq!(mean, 2.5);
//!
//! let moments: MomentAccumulator = [1.0, 3.0].into_iter().collect();
//! assert_eq!(moments.mean(), Some(2.0));
//! assert_eq!(moments.mean_of_squares(), Some(5.0));
//! ```

pub mod error;
pub mod math;
pub mod traits;

pub use error::{Error, Result};
pub use math::MomentAccumulator;
pub use traits::{CentralTendencyEstimator, Mean};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{CentralTendencyEstimator, Mean, MomentAccumulator, Result};
}
