//! The `Package` record.

use pd_core::{Deadline, PackageId, PackageStatus, SimTime, TruckId};

use crate::Address;

/// One package and everything the simulator learns about it during a run.
///
/// Records are created in [`PackageStatus::AtHub`] by the loader and
/// mutated in place by the dispatcher and routing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub id:       PackageId,
    pub address:  Address,
    pub deadline: Deadline,
    /// Kilograms, as listed in the package table.
    pub weight:   u32,
    /// Free-form special notes column, if the table has one.
    pub notes:    Option<String>,

    pub status: PackageStatus,
    /// Truck the package was assigned to, once loaded.
    pub truck:  Option<TruckId>,
    /// When the package left the hub on its truck.
    pub load_time:     Option<SimTime>,
    /// Set once, when the truck completes the leg to `address`.
    pub delivery_time: Option<SimTime>,
}

impl Package {
    pub fn new(id: PackageId, address: Address, deadline: Deadline, weight: u32) -> Self {
        Self {
            id,
            address,
            deadline,
            weight,
            notes:         None,
            status:        PackageStatus::AtHub,
            truck:         None,
            load_time:     None,
            delivery_time: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = (!notes.trim().is_empty()).then_some(notes);
        self
    }

    /// Force the package into `Delayed`.
    pub fn mark_delayed(&mut self) {
        self.status = PackageStatus::Delayed;
    }

    /// Record the truck assignment.  A `Delayed` package keeps its status;
    /// anything else becomes `Loaded`.
    pub fn mark_loaded(&mut self, truck: TruckId) {
        self.truck = Some(truck);
        if self.status != PackageStatus::Delayed {
            self.status = PackageStatus::Loaded;
        }
    }

    /// The package leaves the hub with its truck at `at`.  Status is left
    /// alone: a `Delayed` package only changes once it is en route or
    /// delivered.
    pub fn mark_departed(&mut self, at: SimTime) {
        self.load_time.get_or_insert(at);
    }

    /// The snapshot caught the truck driving toward this package.
    /// `load_time` is only filled in if it was never set.
    pub fn mark_en_route(&mut self, load_time: SimTime) {
        self.status = PackageStatus::EnRoute;
        self.load_time.get_or_insert(load_time);
    }

    /// The package was dropped off at `at`.  The first delivery time sticks.
    pub fn mark_delivered(&mut self, at: SimTime) {
        self.status = PackageStatus::Delivered;
        self.delivery_time.get_or_insert(at);
    }

    /// `true` if delivered after the deadline.  Undelivered packages are
    /// never late by this measure.
    pub fn is_late(&self) -> bool {
        self.delivery_time
            .is_some_and(|at| self.deadline.is_missed_by(at))
    }
}
