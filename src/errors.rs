use std::result::Result as StdResult;

use penny_config::ConfigError;
use penny_core::CoreError;
use penny_domain::date_range::ParsePresetError;
use thiserror::Error;

/// Unified error type for the engine, configuration, and input parsing.
#[derive(Error, Debug)]
pub enum PennyError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, PennyError>;

impl From<ParsePresetError> for PennyError {
    fn from(err: ParsePresetError) -> Self {
        PennyError::InvalidInput(err.to_string())
    }
}
