//! Display samples and the box-plot outlier census
//!
//! One sample is drawn per scenario. The same samples feed the figures and
//! the flier counts, so a count always matches the dots of its box plot.

use crate::scenario::{self, Scenario, Stage};
use crate::{LabConfig, Result};
use lab_spread::BoxplotBuilder;
use tracing::{debug, instrument};

/// A scenario together with the one sample drawn for it
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub scenario: Scenario,
    pub sample: Vec<f64>,
}

/// Number of box-plot fliers in one scenario's sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlierCount {
    pub distribution_name: &'static str,
    pub sample_size: usize,
    pub count: usize,
}

/// Draw one sample per configured scenario, in enumeration order
pub fn draw_samples(config: &LabConfig, seed: u64) -> Result<Vec<SampleSet>> {
    config.validate()?;
    scenario::enumerate(config)
        .into_iter()
        .map(|scenario| -> Result<SampleSet> {
            let mut rng = scenario.rng(seed, Stage::Display);
            let sample = scenario.distribution.sample(scenario.sample_size, &mut rng)?;
            Ok(SampleSet { scenario, sample })
        })
        .collect()
}

/// Group sample sets by distribution, keeping enumeration order
pub fn by_distribution(sets: &[SampleSet]) -> Vec<&[SampleSet]> {
    sets.chunk_by(|a, b| a.scenario.distribution == b.scenario.distribution)
        .collect()
}

/// Count the fliers of every sample with 1.5×IQR whiskers
#[instrument(skip_all, fields(scenarios = sets.len()))]
pub fn count_outliers(sets: &[SampleSet]) -> Result<Vec<OutlierCount>> {
    let builder = BoxplotBuilder::default();
    sets.iter()
        .map(|set| -> Result<OutlierCount> {
            let stats = builder.compute(&set.sample)?;
            let count = OutlierCount {
                distribution_name: set.scenario.distribution.name(),
                sample_size: set.scenario.sample_size,
                count: stats.outlier_count(),
            };
            debug!(
                distribution = count.distribution_name,
                n = count.sample_size,
                fliers = count.count,
                "outliers counted"
            );
            Ok(count)
        })
        .collect()
}
