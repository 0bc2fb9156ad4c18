use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
