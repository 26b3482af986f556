use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("unknown provider or strategy: '{0}'")]
    UnknownProvider(String),
    #[error("provider '{0}' is already registered")]
    DuplicateProvider(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("carrier rate lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
