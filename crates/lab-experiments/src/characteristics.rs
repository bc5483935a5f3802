//! Monte-Carlo characteristics of three location estimators
//!
//! For every scenario the sample mean, the median and the quartile midpoint
//! `z_q = (Q(0.25) + Q(0.75)) / 2` are computed over `repeats` independent
//! samples. The first and second moments of each estimator are averaged
//! across repetitions; the dispersion of the mean is
//! `E[mean²] − E[mean]²`.

use crate::scenario::{self, Scenario, Stage};
use crate::{Error, LabConfig, Result};
use lab_core::{CentralTendencyEstimator, Mean, MomentAccumulator};
use lab_quantile::{LinearQuantile, Median, QuartileMidpoint};
use rand::Rng;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Averaged estimator moments of one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsRecord {
    pub distribution_name: &'static str,
    pub sample_size: usize,
    pub mean_of_means: f64,
    pub mean_of_medians: f64,
    pub mean_of_quartile_midpoint: f64,
    pub mean_of_squared_means: f64,
    pub mean_of_squared_medians: f64,
    pub mean_of_squared_quartile_midpoint: f64,
    /// Variance of the sample mean across repetitions
    pub dispersion: f64,
}

/// Running moments of the three estimators
#[derive(Debug, Default)]
struct EstimatorMoments {
    mean: MomentAccumulator,
    median: MomentAccumulator,
    quartile_midpoint: MomentAccumulator,
}

/// Evaluate one scenario over `repeats` fresh samples drawn from `rng`
///
/// Pure apart from the generator: two calls with identically seeded
/// generators return identical records.
pub fn evaluate_characteristics<R: Rng + ?Sized>(
    scenario: &Scenario,
    repeats: usize,
    rng: &mut R,
) -> Result<StatisticsRecord> {
    if repeats == 0 {
        return Err(Error::InvalidConfig("repeats must be at least 1".into()));
    }

    let median = Median::new(LinearQuantile);
    let quartile_midpoint = QuartileMidpoint::new(LinearQuantile);
    let mut moments = EstimatorMoments::default();

    for _ in 0..repeats {
        let mut sample = scenario.distribution.sample(scenario.sample_size, rng)?;
        sample.sort_unstable_by(f64::total_cmp);

        moments.mean.push(Mean.estimate_sorted(&sample)?);
        moments.median.push(median.estimate_sorted(&sample)?);
        moments
            .quartile_midpoint
            .push(quartile_midpoint.estimate_sorted(&sample)?);
    }

    let first = |acc: &MomentAccumulator| acc.mean().ok_or_else(no_repetitions);
    let second = |acc: &MomentAccumulator| acc.mean_of_squares().ok_or_else(no_repetitions);

    Ok(StatisticsRecord {
        distribution_name: scenario.distribution.name(),
        sample_size: scenario.sample_size,
        mean_of_means: first(&moments.mean)?,
        mean_of_medians: first(&moments.median)?,
        mean_of_quartile_midpoint: first(&moments.quartile_midpoint)?,
        mean_of_squared_means: second(&moments.mean)?,
        mean_of_squared_medians: second(&moments.median)?,
        mean_of_squared_quartile_midpoint: second(&moments.quartile_midpoint)?,
        dispersion: moments.mean.dispersion().ok_or_else(no_repetitions)?,
    })
}

fn no_repetitions() -> Error {
    lab_core::Error::InsufficientData {
        expected: 1,
        actual: 0,
    }
    .into()
}

/// Evaluate every configured scenario, in enumeration order
#[instrument(skip(config), fields(repeats = config.repeats))]
pub fn run_characteristics(config: &LabConfig) -> Result<Vec<StatisticsRecord>> {
    config.validate()?;
    let seed = scenario::resolve_seed(config);
    let scenarios = scenario::enumerate(config);

    let evaluate = |scenario: &Scenario| -> Result<StatisticsRecord> {
        let mut rng = scenario.rng(seed, Stage::Characteristics);
        let record = evaluate_characteristics(scenario, config.repeats, &mut rng)?;
        debug!(
            distribution = record.distribution_name,
            n = record.sample_size,
            dispersion = record.dispersion,
            "scenario evaluated"
        );
        Ok(record)
    };

    #[cfg(feature = "parallel")]
    let records = scenarios.par_iter().map(evaluate).collect();
    #[cfg(not(feature = "parallel"))]
    let records = scenarios.iter().map(evaluate).collect();

    records
}
