//! Quantile estimators and the location estimators built on top of them

mod linear;
mod location;

pub use linear::{linear, LinearQuantile};
pub use location::{Median, QuartileMidpoint};
