//! Error types for lab-experiments

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Lab core error: {0}")]
    Core(#[from] lab_core::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<lab_quantile::Error> for Error {
    fn from(err: lab_quantile::Error) -> Self {
        Self::Core(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
