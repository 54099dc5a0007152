//! Simulation observer trait for progress reporting and leg collection.

use pd_core::{SimTime, TruckId};
use pd_fleet::{Leg, TruckState};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as trucks move.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: odometer printer
///
/// ```rust,ignore
/// struct Odometer;
///
/// impl SimObserver for Odometer {
///     fn on_truck_end(&mut self, truck: &TruckState) {
///         println!("truck {}: {:.1} miles", truck.id, truck.miles);
///     }
/// }
/// ```
pub trait SimObserver {
    /// The truck left the hub at `at`.
    fn on_depart(&mut self, _truck: TruckId, _at: SimTime) {}

    /// The truck stays at the hub for this run.  `departure` is `None` when
    /// it waits on a donor truck that has not finished.
    fn on_held(&mut self, _truck: TruckId, _departure: Option<SimTime>) {}

    /// A delivery leg or a leg cut short by the snapshot.
    fn on_leg(&mut self, _leg: &Leg) {}

    /// The drive back to the hub after the last delivery.
    fn on_return(&mut self, _leg: &Leg) {}

    /// The truck is done for this run, whatever its phase.
    fn on_truck_end(&mut self, _truck: &TruckState) {}

    /// Called once after the last truck.
    fn on_sim_end(&mut self, _snapshot: SimTime) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Records every leg, return legs included, in the order they were driven.
#[derive(Debug, Default)]
pub struct LegLog {
    pub legs: Vec<Leg>,
}

impl LegLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legs driven by one truck.
    pub fn for_truck(&self, truck: TruckId) -> impl Iterator<Item = &Leg> {
        self.legs.iter().filter(move |l| l.truck == truck)
    }
}

impl SimObserver for LegLog {
    fn on_leg(&mut self, leg: &Leg) {
        self.legs.push(leg.clone());
    }

    fn on_return(&mut self, leg: &Leg) {
        self.legs.push(leg.clone());
    }
}
