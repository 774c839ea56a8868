use std::result::Result as StdResult;

use rink_config::ConfigError;
use rink_core::CoreError;
use thiserror::Error;

/// Unified error type for the projection facade.
#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

pub type Result<T> = StdResult<T, ProjectionError>;

impl From<ConfigError> for ProjectionError {
    fn from(err: ConfigError) -> Self {
        ProjectionError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ProjectionError {
    fn from(err: serde_json::Error) -> Self {
        ProjectionError::Snapshot(err.to_string())
    }
}

impl From<rink_domain::ValidationError> for ProjectionError {
    fn from(err: rink_domain::ValidationError) -> Self {
        ProjectionError::Core(CoreError::from(err))
    }
}
