//! The closed set of distributions the lab samples from

use crate::range::PlotRange;
use lab_core::{Error, Result};
use rand::Rng;
use rand_distr::Distribution as _;
use statrs::distribution::{Continuous, Discrete};
use std::fmt;

/// A parameterised probability distribution
///
/// Every variant can draw samples, evaluate its theoretical density and
/// suggest an x-axis range for plotting that density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Cauchy with location `x0` and scale `γ`; no finite mean or variance
    Cauchy { location: f64, scale: f64 },
    /// Normal with mean `μ` and standard deviation `σ`
    Normal { mean: f64, std_dev: f64 },
    /// Poisson with rate `λ`; supported on the non-negative integers
    Poisson { rate: f64 },
    /// Continuous uniform on `[low, high]`
    Uniform { low: f64, high: f64 },
}

impl Distribution {
    /// Cauchy distribution, rejecting a non-positive scale
    pub fn cauchy(location: f64, scale: f64) -> Result<Self> {
        Self::Cauchy { location, scale }.validated()
    }

    /// Normal distribution, rejecting a non-positive standard deviation
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self> {
        Self::Normal { mean, std_dev }.validated()
    }

    /// Poisson distribution, rejecting a non-positive rate
    pub fn poisson(rate: f64) -> Result<Self> {
        Self::Poisson { rate }.validated()
    }

    /// Uniform distribution, rejecting `low >= high`
    pub fn uniform(low: f64, high: f64) -> Result<Self> {
        Self::Uniform { low, high }.validated()
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Check the parameters are finite and in range
    pub fn validate(&self) -> Result<()> {
        let ok = match *self {
            Self::Cauchy { location, scale } => location.is_finite() && scale.is_finite() && scale > 0.0,
            Self::Normal { mean, std_dev } => mean.is_finite() && std_dev.is_finite() && std_dev > 0.0,
            Self::Poisson { rate } => rate.is_finite() && rate > 0.0,
            Self::Uniform { low, high } => low.is_finite() && high.is_finite() && low < high,
        };
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidParameter(format!("invalid parameters for {self:?}")))
        }
    }

    /// Display name of the distribution family
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cauchy { .. } => "Cauchy",
            Self::Normal { .. } => "Normal",
            Self::Poisson { .. } => "Poisson",
            Self::Uniform { .. } => "Uniform",
        }
    }

    /// Draw `n` independent observations
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>> {
        self.validate()?;
        let param_err = |e: &dyn fmt::Display| Error::InvalidParameter(format!("{}: {e}", self.name()));
        let sample: Vec<f64> = match *self {
            Self::Cauchy { location, scale } => rand_distr::Cauchy::new(location, scale)
                .map_err(|e| param_err(&e))?
                .sample_iter(&mut *rng)
                .take(n)
                .collect(),
            Self::Normal { mean, std_dev } => rand_distr::Normal::new(mean, std_dev)
                .map_err(|e| param_err(&e))?
                .sample_iter(&mut *rng)
                .take(n)
                .collect(),
            Self::Poisson { rate } => rand_distr::Poisson::new(rate)
                .map_err(|e| param_err(&e))?
                .sample_iter(&mut *rng)
                .take(n)
                .collect(),
            Self::Uniform { low, high } => rand_distr::Uniform::new_inclusive(low, high)
                .sample_iter(&mut *rng)
                .take(n)
                .collect(),
        };
        Ok(sample)
    }

    /// Theoretical density at `x`
    ///
    /// For Poisson this is the probability mass at `x` when `x` is a
    /// non-negative integer and zero elsewhere.
    pub fn density(&self, x: f64) -> Result<f64> {
        let stats_err = |e: statrs::StatsError| Error::InvalidParameter(format!("{}: {e}", self.name()));
        let value = match *self {
            Self::Cauchy { location, scale } => statrs::distribution::Cauchy::new(location, scale)
                .map_err(stats_err)?
                .pdf(x),
            Self::Normal { mean, std_dev } => statrs::distribution::Normal::new(mean, std_dev)
                .map_err(stats_err)?
                .pdf(x),
            Self::Poisson { rate } => {
                let poisson = statrs::distribution::Poisson::new(rate).map_err(stats_err)?;
                if x >= 0.0 && x.fract() == 0.0 && x.is_finite() {
                    poisson.pmf(x as u64)
                } else {
                    0.0
                }
            }
            Self::Uniform { low, high } => statrs::distribution::Uniform::new(low, high)
                .map_err(stats_err)?
                .pdf(x),
        };
        Ok(value)
    }

    /// Density evaluated over the points of a plot range
    pub fn density_curve(&self, range: &PlotRange) -> Result<Vec<(f64, f64)>> {
        range
            .points()
            .into_iter()
            .map(|x| Ok((x, self.density(x)?)))
            .collect()
    }

    /// Default x-axis range for plotting the density
    pub fn plot_range(&self) -> PlotRange {
        match *self {
            Self::Cauchy { location, scale } => {
                PlotRange::linspace(location - 10.0 * scale, location + 10.0 * scale, 1000)
            }
            Self::Normal { mean, std_dev } => {
                PlotRange::linspace(mean - 5.0 * std_dev, mean + 5.0 * std_dev, 1000)
            }
            Self::Poisson { rate } => PlotRange::arange(0, rate.round() as i64),
            Self::Uniform { low, high } => {
                let pad = (high - low) * (2.0 - 3f64.sqrt()) / (2.0 * 3f64.sqrt());
                PlotRange::linspace(low - pad, high + pad, 1000)
            }
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Cauchy { location, scale } => write!(f, "Cauchy(x0={location}, γ={scale})"),
            Self::Normal { mean, std_dev } => write!(f, "Normal(μ={mean}, σ={std_dev})"),
            Self::Poisson { rate } => write!(f, "Poisson(λ={rate})"),
            Self::Uniform { low, high } => write!(f, "Uniform[{low:.4}, {high:.4}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_constructors_validate() {
        assert!(Distribution::cauchy(0.0, 0.0).is_err());
        assert!(Distribution::normal(0.0, -1.0).is_err());
        assert!(Distribution::poisson(0.0).is_err());
        assert!(Distribution::uniform(1.0, 1.0).is_err());
        assert!(Distribution::normal(f64::NAN, 1.0).is_err());
        assert!(Distribution::uniform(-1.0, 1.0).is_ok());
    }

    #[test]
    fn test_sample_rejects_invalid_variant() {
        let bad = Distribution::Normal { mean: 0.0, std_dev: -1.0 };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(bad.sample(3, &mut rng), Err(Error::InvalidParameter(_))));

        let bad = Distribution::Cauchy { location: 0.0, scale: -2.0 };
        assert!(matches!(bad.sample(3, &mut rng), Err(Error::InvalidParameter(_))));

        let bad = Distribution::Poisson { rate: f64::INFINITY };
        assert!(matches!(bad.sample(3, &mut rng), Err(Error::InvalidParameter(_))));

        let bad = Distribution::Uniform { low: 2.0, high: 1.0 };
        assert!(matches!(bad.sample(3, &mut rng), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_densities() {
        let normal = Distribution::normal(0.0, 1.0).unwrap();
        assert_relative_eq!(normal.density(0.0).unwrap(), 0.398_942_280_4, epsilon = 1e-9);

        let cauchy = Distribution::cauchy(0.0, 1.0).unwrap();
        assert_relative_eq!(cauchy.density(0.0).unwrap(), 1.0 / std::f64::consts::PI, epsilon = 1e-12);

        let uniform = Distribution::uniform(-2.0, 2.0).unwrap();
        assert_relative_eq!(uniform.density(0.5).unwrap(), 0.25);
        assert_eq!(uniform.density(3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_poisson_mass_only_on_integers() {
        let poisson = Distribution::poisson(10.0).unwrap();
        // P(X = 10) for λ = 10
        assert_relative_eq!(poisson.density(10.0).unwrap(), 0.125_110_035_9, epsilon = 1e-9);
        assert_eq!(poisson.density(9.5).unwrap(), 0.0);
        assert_eq!(poisson.density(-1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_poisson_samples_are_integers() {
        let mut rng = StdRng::seed_from_u64(9);
        let sample = Distribution::poisson(10.0).unwrap().sample(200, &mut rng).unwrap();
        assert!(sample.iter().all(|x| x.fract() == 0.0 && *x >= 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Distribution::poisson(10.0).unwrap().to_string(), "Poisson(λ=10)");
        assert_eq!(Distribution::normal(0.0, 1.0).unwrap().name(), "Normal");
    }
}
