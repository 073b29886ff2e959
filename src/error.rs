//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    /// Timestamp field whose integer part is not numeric. Record is dropped, run continues.
    #[error("unparsable timestamp: {0:?}")]
    Parse(String),

    /// A field a feature depends on is empty or absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// Fatal: aborts the run before any output is produced.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeatureError>;
