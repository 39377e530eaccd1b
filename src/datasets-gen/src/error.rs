use std::io;
use std::result;

use rand::distributions::WeightedError;
use thiserror::Error;
pub type Result<T> = result::Result<T, DatasetsGenError>;

#[derive(Error, Debug)]
pub enum DatasetsGenError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("General {0:?}")]
    General(String),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] io::Error),
    #[error("DecimalError: {0:?}")]
    DecimalError(#[from] rust_decimal::Error),
    #[error("WeightedError: {0:?}")]
    WeightedError(#[from] WeightedError),
}
