use std::result;

use chrono::OutOfRangeError;
use datasets_gen::error::DatasetsGenError;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("DatasetsGen: {0:?}")]
    DatasetsGen(#[from] DatasetsGenError),
    #[error("BadRequest: {0:?}")]
    BadRequest(String),
    #[error("FileNotFound: {0:?}")]
    FileNotFound(String),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("ConfigError: {0:?}")]
    ConfigError(#[from] config::ConfigError),
    #[error("TimeDurationOutOfRange: {0:?}")]
    TimeDurationOutOfRange(#[from] OutOfRangeError),
    #[error("ParseDuration: {0:?}")]
    ParseDuration(#[from] parse_duration::parse::Error),
    #[error("SetGlobalDefaultError: {0:?}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
    #[error("other: {0:?}")]
    Other(#[from] anyhow::Error),
}
