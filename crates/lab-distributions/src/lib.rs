//! Sampling distributions for the distribution lab
//!
//! [`Distribution`] is a closed set of four families, each carrying its own
//! parameters, with uniform operations for drawing samples
//! ([`Distribution::sample`]), evaluating the theoretical density
//! ([`Distribution::density`]) and choosing a plotting range
//! ([`Distribution::plot_range`]). Sampling is delegated to `rand_distr`,
//! densities to `statrs`.
//!
//! Every sampler call takes the random number generator explicitly, so a
//! seeded generator makes a whole experiment reproducible.
//!
//! # Example
//!
//! ```rust
//! use lab_distributions::{Distribution, DistributionKind};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let normal = DistributionKind::Normal.canonical();
//! let sample = normal.sample(50, &mut rng).unwrap();
//! assert_eq!(sample.len(), 50);
//!
//! let peak = normal.density(0.0).unwrap();
//! assert!((peak - 0.3989).abs() < 1e-4);
//! ```

pub mod distribution;
pub mod range;
pub mod registry;

pub use distribution::Distribution;
pub use range::PlotRange;
pub use registry::{canonical, DistributionKind, CANONICAL_POISSON_RATE, UNIT_UNIFORM_HALF_WIDTH};
