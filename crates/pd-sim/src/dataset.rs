//! The two input tables, loaded once and shared by every query.

use std::path::Path;

use pd_distance::{DistanceTable, load_distance_csv};
use pd_registry::{PackageRegistry, load_packages_csv};
use tracing::info;

use crate::SimResult;

/// Pristine package records plus the distance table.
///
/// Queries clone `packages` and leave this copy unchanged.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub packages:  PackageRegistry,
    pub distances: DistanceTable,
}

impl Dataset {
    pub fn new(packages: PackageRegistry, distances: DistanceTable) -> Self {
        Self { packages, distances }
    }

    /// Read the package and distance CSV files.
    pub fn load(packages: &Path, distances: &Path) -> SimResult<Self> {
        let packages = load_packages_csv(packages)?;
        let distances = load_distance_csv(distances)?;
        info!(packages = packages.len(), addresses = distances.len(), "dataset loaded");
        Ok(Self { packages, distances })
    }
}
