//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced while parsing clock values and other core inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid snapshot time {0:?}: expected HH:MM, HH:MM:SS or EOD")]
    InvalidSnapshotTime(String),

    #[error("invalid deadline {0:?}: expected H:MM AM/PM, HH:MM or EOD")]
    InvalidDeadline(String),
}

/// Shorthand result type for `pd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
