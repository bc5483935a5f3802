//! Error type shared by every lab crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A distribution, quantile level or builder setting is out of its domain
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Sample values the computation cannot use (NaN, infinities)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A figure could not be drawn or written
    #[error("Render error: {0}")]
    Render(String),

    /// A result table could not be assembled
    #[error("Report error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// An estimator or summary was handed no observations
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("quantile level {p} must be in [0, 1]"))
    }

    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Wrap a drawing backend failure
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}
