//! Canonical parameterisations used by the experiments
//!
//! | Kind    | Parameters             | Plot range             |
//! |---------|------------------------|------------------------|
//! | Cauchy  | x0 = 0, γ = 1          | 1000 points on [-10, 10] |
//! | Normal  | μ = 0, σ = 1           | 1000 points on [-5, 5] |
//! | Poisson | λ = 10                 | integers 0..10         |
//! | Uniform | [-√3, √3] (unit variance) | 1000 points on [-2, 2] |

use crate::distribution::Distribution;
use lab_core::Error;
use std::fmt;
use std::str::FromStr;

/// Half-width of the unit-variance uniform distribution
pub const UNIT_UNIFORM_HALF_WIDTH: f64 = 1.732_050_807_568_877_2;

/// Rate of the canonical Poisson distribution
pub const CANONICAL_POISSON_RATE: f64 = 10.0;

/// Distribution family, without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DistributionKind {
    Cauchy,
    Normal,
    Poisson,
    Uniform,
}

impl DistributionKind {
    /// All kinds in registry order
    pub const ALL: [DistributionKind; 4] = [Self::Cauchy, Self::Normal, Self::Poisson, Self::Uniform];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cauchy => "Cauchy",
            Self::Normal => "Normal",
            Self::Poisson => "Poisson",
            Self::Uniform => "Uniform",
        }
    }

    /// The canonical member of this family
    pub fn canonical(&self) -> Distribution {
        match self {
            Self::Cauchy => Distribution::Cauchy { location: 0.0, scale: 1.0 },
            Self::Normal => Distribution::Normal { mean: 0.0, std_dev: 1.0 },
            Self::Poisson => Distribution::Poisson { rate: CANONICAL_POISSON_RATE },
            Self::Uniform => Distribution::Uniform {
                low: -UNIT_UNIFORM_HALF_WIDTH,
                high: UNIT_UNIFORM_HALF_WIDTH,
            },
        }
    }
}

impl Distribution {
    pub fn kind(&self) -> DistributionKind {
        match self {
            Self::Cauchy { .. } => DistributionKind::Cauchy,
            Self::Normal { .. } => DistributionKind::Normal,
            Self::Poisson { .. } => DistributionKind::Poisson,
            Self::Uniform { .. } => DistributionKind::Uniform,
        }
    }

    /// Resolve a case-insensitive family name to its canonical member
    pub fn from_name(name: &str) -> lab_core::Result<Self> {
        Ok(name.parse::<DistributionKind>()?.canonical())
    }
}

impl FromStr for DistributionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidParameter(format!("unknown distribution '{s}'")))
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four canonical distributions in registry order
pub fn canonical() -> [Distribution; 4] {
    DistributionKind::ALL.map(|kind| kind.canonical())
}
