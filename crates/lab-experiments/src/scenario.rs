//! Explicit enumeration of (distribution, sample size) scenarios
//!
//! Each scenario gets its own ChaCha stream derived from the run seed, the
//! stage and its position in the enumeration. Scenarios therefore never
//! share generator state and can be evaluated in any order.

use crate::LabConfig;
use lab_distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Independent random streams per stage of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Samples drawn once for figures and the outlier census
    Display = 0,
    /// Repeated samples of the Monte-Carlo characteristics
    Characteristics = 1,
}

/// One point of the distributions × sample sizes grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub distribution: Distribution,
    pub sample_size: usize,
    /// Position in the enumeration
    pub index: usize,
}

impl Scenario {
    /// Generator owned by this scenario for the given stage
    pub fn rng(&self, seed: u64, stage: Stage) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(((stage as u64) << 32) | self.index as u64);
        rng
    }
}

/// Distributions-major enumeration of the configured grid
pub fn enumerate(config: &LabConfig) -> Vec<Scenario> {
    config
        .distributions
        .iter()
        .flat_map(|&distribution| {
            config
                .sample_sizes
                .iter()
                .map(move |&sample_size| (distribution, sample_size))
        })
        .enumerate()
        .map(|(index, (distribution, sample_size))| Scenario {
            distribution,
            sample_size,
            index,
        })
        .collect()
}

/// The configured seed, or a fresh one that is logged for reproduction
pub fn resolve_seed(config: &LabConfig) -> u64 {
    match config.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::thread_rng().gen();
            info!(seed, "no seed configured, drew one");
            seed
        }
    }
}
