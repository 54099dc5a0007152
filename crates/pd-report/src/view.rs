//! Plain data views of packages and trucks at a snapshot.

use std::collections::BTreeMap;

use pd_core::{Deadline, PackageId, PackageStatus, SimTime, TruckId};
use pd_fleet::{TruckPhase, TruckState};
use pd_registry::{Package, PackageRegistry};

/// One package as seen at the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageView {
    pub id:            PackageId,
    pub street:        String,
    pub city:          String,
    pub state:         String,
    pub zip:           String,
    pub deadline:      Deadline,
    pub weight:        u32,
    pub truck:         Option<TruckId>,
    pub status:        PackageStatus,
    pub delivery_time: Option<SimTime>,
    /// Delivered after its deadline.
    pub late:          bool,
}

impl PackageView {
    pub fn from_package(p: &Package) -> Self {
        Self {
            id:            p.id,
            street:        p.address.street.clone(),
            city:          p.address.city.clone(),
            state:         p.address.state.clone(),
            zip:           p.address.zip.clone(),
            deadline:      p.deadline,
            weight:        p.weight,
            truck:         p.truck,
            status:        p.status,
            delivery_time: p.delivery_time,
            late:          p.is_late(),
        }
    }

    /// Status text for display; loaded packages name their truck.
    pub fn status_label(&self) -> String {
        match (self.status, self.truck) {
            (PackageStatus::Loaded, Some(truck)) => format!("Loaded on Truck {truck}"),
            (status, _) => status.as_str().to_owned(),
        }
    }
}

/// One truck as seen at the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TruckView {
    pub id:           TruckId,
    pub phase:        TruckPhase,
    pub location:     String,
    pub miles:        f64,
    pub remaining:    usize,
    pub departure:    Option<SimTime>,
    pub completed_at: Option<SimTime>,
}

impl TruckView {
    pub fn from_truck(t: &TruckState) -> Self {
        Self {
            id:           t.id,
            phase:        t.phase,
            location:     t.location.clone(),
            miles:        t.miles,
            remaining:    t.onboard().len(),
            departure:    t.departure,
            completed_at: t.completed_at,
        }
    }
}

/// Everything a caller can ask about the day at `snapshot`.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotReport {
    pub snapshot: SimTime,
    /// Keyed by id so iteration is in ascending package order.
    pub packages: BTreeMap<PackageId, PackageView>,
    /// In the order the trucks were simulated.
    pub trucks:   Vec<TruckView>,
}

impl SnapshotReport {
    /// Read the final state of a run.  Does not mutate anything.
    pub fn build(registry: &PackageRegistry, trucks: &[TruckState], snapshot: SimTime) -> Self {
        Self {
            snapshot,
            packages: registry
                .iter()
                .map(|p| (p.id, PackageView::from_package(p)))
                .collect(),
            trucks: trucks.iter().map(TruckView::from_truck).collect(),
        }
    }

    pub fn package(&self, id: PackageId) -> Option<&PackageView> {
        self.packages.get(&id)
    }

    pub fn truck(&self, id: TruckId) -> Option<&TruckView> {
        self.trucks.iter().find(|t| t.id == id)
    }

    /// Fleet odometer total.
    pub fn total_miles(&self) -> f64 {
        self.trucks.iter().map(|t| t.miles).sum()
    }

    pub fn count_with_status(&self, status: PackageStatus) -> usize {
        self.packages.values().filter(|p| p.status == status).count()
    }

    /// Ids of packages delivered after their deadline.
    pub fn late_packages(&self) -> Vec<PackageId> {
        self.packages.values().filter(|p| p.late).map(|p| p.id).collect()
    }
}
