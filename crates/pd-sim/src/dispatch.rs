//! One simulated day, run up to a snapshot.

use std::collections::HashMap;

use pd_core::{SimTime, TruckId};
use pd_distance::DistanceTable;
use pd_fleet::{TruckPhase, TruckState};
use pd_registry::PackageRegistry;
use pd_report::SnapshotReport;
use tracing::info;

use crate::plan::{Departure, TruckPlan};
use crate::{DayPlan, RouteEngine, SimObserver, SimResult};

/// Final state of a run.
#[derive(Debug, Clone)]
pub struct SimOutcome {
    pub snapshot: SimTime,
    pub registry: PackageRegistry,
    /// In plan order.
    pub trucks:   Vec<TruckState>,
}

impl SimOutcome {
    pub fn report(&self) -> SnapshotReport {
        SnapshotReport::build(&self.registry, &self.trucks, self.snapshot)
    }

    pub fn truck(&self, id: TruckId) -> Option<&TruckState> {
        self.trucks.iter().find(|t| t.id == id)
    }
}

/// A validated, ready-to-run day.  Built by [`SimBuilder`][crate::SimBuilder].
///
/// Running consumes the `Sim`: every query starts again from the loaded
/// tables.
pub struct Sim<'a> {
    plan:      &'a DayPlan,
    distances: &'a DistanceTable,
    registry:  PackageRegistry,
    snapshot:  SimTime,
}

impl<'a> Sim<'a> {
    pub(crate) fn new(
        plan: &'a DayPlan,
        distances: &'a DistanceTable,
        registry: PackageRegistry,
        snapshot: SimTime,
    ) -> Self {
        Self { plan, distances, registry, snapshot }
    }

    pub fn snapshot(&self) -> SimTime {
        self.snapshot
    }

    /// Apply the special cases, load every truck, and drive the trucks in
    /// plan order up to the snapshot.
    pub fn run(mut self, observer: &mut dyn SimObserver) -> SimResult<SimOutcome> {
        let plan = self.plan;
        let snapshot = self.snapshot;
        self.apply_special_cases()?;

        let mut trucks = plan
            .trucks
            .iter()
            .map(|tp| self.load_truck(tp))
            .collect::<SimResult<Vec<_>>>()?;

        let engine = RouteEngine::new(self.distances, &plan.hub);
        let mut completions: HashMap<TruckId, SimTime> = HashMap::new();

        for (tp, truck) in plan.trucks.iter().zip(trucks.iter_mut()) {
            let departure = match tp.departure {
                Departure::At { time } => Some(time),
                Departure::AfterTruck { donor, earliest } => {
                    completions.get(&donor).map(|&done| done.max(earliest))
                }
            };

            match departure {
                Some(at) if at <= snapshot => {
                    truck.depart(at);
                    for &id in truck.onboard() {
                        self.registry.require_mut(id)?.mark_departed(at);
                    }
                    info!(truck = %truck.id, at = %at, packages = truck.onboard().len(), "departed");
                    observer.on_depart(truck.id, at);

                    engine.run_truck(truck, &mut self.registry, snapshot, observer)?;

                    if let (TruckPhase::Complete, Some(done)) = (truck.phase, truck.completed_at) {
                        info!(truck = %truck.id, at = %done, miles = truck.miles, "completed");
                        completions.insert(truck.id, done);
                    }
                }
                Some(at) => {
                    truck.schedule(at);
                    info!(truck = %truck.id, departure = %at, "held until after snapshot");
                    observer.on_held(truck.id, Some(at));
                }
                None => {
                    info!(truck = %truck.id, "held: donor truck has not returned");
                    observer.on_held(truck.id, None);
                }
            }
            observer.on_truck_end(truck);
        }

        observer.on_sim_end(snapshot);
        Ok(SimOutcome { snapshot, registry: self.registry, trucks })
    }

    /// Delayed packages and address corrections, before any loading.
    fn apply_special_cases(&mut self) -> SimResult<()> {
        let (plan, snapshot) = (self.plan, self.snapshot);
        for &id in &plan.delayed {
            self.registry.require_mut(id)?.mark_delayed();
        }
        for fix in plan.corrections.iter().filter(|f| f.applies_at(snapshot)) {
            let address = &mut self.registry.require_mut(fix.package)?.address;
            address.street.clone_from(&fix.street);
            if let Some(city) = &fix.city {
                address.city.clone_from(city);
            }
            if let Some(state) = &fix.state {
                address.state.clone_from(state);
            }
            if let Some(zip) = &fix.zip {
                address.zip.clone_from(zip);
            }
        }
        Ok(())
    }

    fn load_truck(&mut self, tp: &TruckPlan) -> SimResult<TruckState> {
        let mut truck = TruckState::new(tp.id, &self.plan.hub, self.plan.speed_mph, self.plan.capacity);
        for &id in &tp.packages {
            truck.load(id)?;
            self.registry.require_mut(id)?.mark_loaded(tp.id);
        }
        Ok(truck)
    }
}
