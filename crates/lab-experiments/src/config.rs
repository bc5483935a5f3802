//! Configuration for a lab run
//!
//! Both programs run from fixed presets; the builder-style setters exist so
//! tests can shrink a run or pin its seed.

use crate::{Error, Result};
use lab_distributions::{Distribution, DistributionKind};
use std::path::{Path, PathBuf};

/// Sample sizes of the estimator-characteristics experiment
pub const CHARACTERISTICS_SAMPLE_SIZES: [usize; 3] = [10, 50, 1000];

/// Sample sizes of the outlier experiment
pub const OUTLIER_SAMPLE_SIZES: [usize; 3] = [20, 100, 1000];

/// Monte-Carlo repetitions per scenario
pub const DEFAULT_REPEATS: usize = 1000;

/// Where figures are written unless told otherwise
pub const DEFAULT_OUTPUT_DIR: &str = "target/plots";

/// Parameters of one run
#[derive(Debug, Clone, PartialEq)]
pub struct LabConfig {
    /// Sample sizes, in report order
    pub sample_sizes: Vec<usize>,
    /// Monte-Carlo repetitions per scenario
    pub repeats: usize,
    /// Distributions, in report order
    pub distributions: Vec<Distribution>,
    /// Base seed; drawn from the thread RNG when `None`
    pub seed: Option<u64>,
    /// Directory receiving the rendered figures
    pub output_dir: PathBuf,
    /// Pixel size of a histogram figure (all panels together)
    pub histogram_figure_size: (u32, u32),
    /// Pixel size of a box-plot figure
    pub boxplot_figure_size: (u32, u32),
}

impl LabConfig {
    /// Preset of the estimator-characteristics program
    pub fn characteristics() -> Self {
        Self {
            sample_sizes: CHARACTERISTICS_SAMPLE_SIZES.to_vec(),
            repeats: DEFAULT_REPEATS,
            distributions: DistributionKind::ALL.iter().map(|k| k.canonical()).collect(),
            seed: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            histogram_figure_size: (1800, 500),
            boxplot_figure_size: (1000, 600),
        }
    }

    /// Preset of the outlier program
    pub fn outliers() -> Self {
        use DistributionKind::*;
        Self {
            sample_sizes: OUTLIER_SAMPLE_SIZES.to_vec(),
            distributions: [Normal, Cauchy, Poisson, Uniform]
                .iter()
                .map(|k| k.canonical())
                .collect(),
            ..Self::characteristics()
        }
    }

    pub fn with_sample_sizes(mut self, sample_sizes: Vec<usize>) -> Self {
        self.sample_sizes = sample_sizes;
        self
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_distributions(mut self, distributions: Vec<Distribution>) -> Self {
        self.distributions = distributions;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Reject configurations that cannot produce a result
    pub fn validate(&self) -> Result<()> {
        if self.sample_sizes.is_empty() {
            return Err(Error::InvalidConfig("at least one sample size is required".into()));
        }
        if let Some(&size) = self.sample_sizes.iter().find(|&&n| n == 0) {
            return Err(Error::InvalidConfig(format!("sample size {size} must be at least 1")));
        }
        if self.repeats == 0 {
            return Err(Error::InvalidConfig("repeats must be at least 1".into()));
        }
        if self.distributions.is_empty() {
            return Err(Error::InvalidConfig("at least one distribution is required".into()));
        }
        for dist in &self.distributions {
            dist.validate()?;
        }
        Ok(())
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self::characteristics()
    }
}
