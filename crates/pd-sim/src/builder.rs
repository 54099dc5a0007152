//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use pd_core::{PackageId, SimTime, TruckId};
use pd_distance::DistanceTable;
use pd_registry::PackageRegistry;

use crate::plan::Departure;
use crate::{DayPlan, Sim, SimError, SimResult};

fn config<T>(msg: String) -> SimResult<T> {
    Err(SimError::Config(msg))
}

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`DayPlan`]: trucks, loads, departure rules and special cases
/// - [`DistanceTable`]: shared, read-only
/// - [`PackageRegistry`]: a fresh copy; the run mutates it
///
/// # Optional inputs
///
/// | Method           | Default                  |
/// |------------------|--------------------------|
/// | `.snapshot(t)`   | `SimTime::END_OF_DAY`    |
///
/// # Example
///
/// ```rust,ignore
/// let outcome = SimBuilder::new(&plan, &distances, packages.clone())
///     .snapshot(parse_snapshot("10:25")?)
///     .build()?
///     .run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'a> {
    plan:      &'a DayPlan,
    distances: &'a DistanceTable,
    packages:  PackageRegistry,
    snapshot:  SimTime,
}

impl<'a> SimBuilder<'a> {
    pub fn new(plan: &'a DayPlan, distances: &'a DistanceTable, packages: PackageRegistry) -> Self {
        Self { plan, distances, packages, snapshot: SimTime::END_OF_DAY }
    }

    /// The instant the caller wants to see.
    pub fn snapshot(mut self, snapshot: SimTime) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Check the plan against the loaded tables and return a ready-to-run
    /// [`Sim`].
    ///
    /// Capacity is not checked here; an overfull truck fails at load time
    /// with [`pd_fleet::FleetError::CapacityExceeded`].
    pub fn build(self) -> SimResult<Sim<'a>> {
        let plan = self.plan;

        if !(plan.speed_mph.is_finite() && plan.speed_mph > 0.0) {
            return config(format!("truck speed must be positive, got {}", plan.speed_mph));
        }
        if plan.capacity == 0 {
            return config("truck capacity must be at least 1".to_owned());
        }
        if !self.distances.contains(&plan.hub) {
            return config(format!("hub {:?} is not in the distance table", plan.hub));
        }

        // ── Trucks: unique ids, donors declared first ─────────────────────
        let mut declared: HashSet<TruckId> = HashSet::new();
        let mut assigned: HashSet<PackageId> = HashSet::new();
        for truck in &plan.trucks {
            if let Departure::AfterTruck { donor, .. } = truck.departure {
                if !declared.contains(&donor) {
                    return config(format!(
                        "truck {} waits on truck {donor}, which is not declared before it",
                        truck.id
                    ));
                }
            }
            if !declared.insert(truck.id) {
                return config(format!("truck {} is declared twice", truck.id));
            }
            for &id in &truck.packages {
                if !self.packages.contains(id) {
                    return config(format!("truck {} lists unknown package {id}", truck.id));
                }
                if !assigned.insert(id) {
                    return config(format!("package {id} is assigned to more than one truck"));
                }
            }
        }

        // ── Special cases must name real packages ─────────────────────────
        for &id in &plan.delayed {
            if !self.packages.contains(id) {
                return config(format!("delayed list names unknown package {id}"));
            }
        }
        for fix in &plan.corrections {
            if !self.packages.contains(fix.package) {
                return config(format!("address correction names unknown package {}", fix.package));
            }
        }

        Ok(Sim::new(plan, self.distances, self.packages, self.snapshot))
    }
}
