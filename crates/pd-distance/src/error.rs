//! Distance-table error type.

use thiserror::Error;

/// Errors produced by `pd-distance`.
#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("address {0:?} is not in the distance table")]
    UnknownAddress(String),

    #[error("malformed distance table: {0}")]
    MalformedTable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}

pub type DistanceResult<T> = Result<T, DistanceError>;
