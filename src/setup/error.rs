use crate::storage::StorageError;
use thiserror::Error;

pub type SetupResult<T> = Result<T, SetupError>;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Config paths initialization failed: {0}")]
    ConfigPaths(String),
    #[error("Config loading failed: {0}")]
    Config(String),
    #[error("Config validation failed: {0}")]
    Validation(String),
    #[error("Preference storage initialization failed: {0}")]
    Storage(#[from] StorageError),
    #[error("Log system initialization failed: {0}")]
    Logging(String),
}
