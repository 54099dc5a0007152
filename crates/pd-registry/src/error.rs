use pd_core::{CoreError, PackageId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("package {0} not found")]
    UnknownPackage(PackageId),

    #[error("package {0} appears more than once")]
    DuplicatePackage(PackageId),

    #[error("package table row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
