use pd_core::{CoreError, PackageId, TruckId};
use pd_distance::DistanceError;
use pd_fleet::FleetError;
use pd_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("day plan error: {0}")]
    Config(String),

    #[error("truck {truck}: package {package} goes to {street:?}, which is not in the distance table")]
    UnknownAddress {
        truck:   TruckId,
        package: PackageId,
        street:  String,
    },

    #[error(transparent)]
    Distance(#[from] DistanceError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("day plan file: {0}")]
    PlanFile(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
