use pd_core::{PackageId, TruckId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("truck {truck} is full ({capacity} packages); cannot load package {package}")]
    CapacityExceeded {
        truck:    TruckId,
        package:  PackageId,
        capacity: usize,
    },

    #[error("package {package} is already on truck {truck}")]
    AlreadyOnboard { truck: TruckId, package: PackageId },
}

pub type FleetResult<T> = Result<T, FleetError>;
