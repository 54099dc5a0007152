//! Per-truck state.

use pd_core::{PackageId, SimSpan, SimTime, TruckId};

use crate::leg::travel_time;
use crate::{FleetError, FleetResult};

/// Where a truck is in its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruckPhase {
    /// At the hub, waiting for its departure time.
    #[default]
    Held,
    /// Departed with packages still aboard.
    EnRoute,
    /// Delivered everything and drove back to the hub.
    Complete,
}

impl TruckPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            TruckPhase::Held     => "Held",
            TruckPhase::EnRoute  => "En Route",
            TruckPhase::Complete => "Complete",
        }
    }
}

impl std::fmt::Display for TruckPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One truck's movement state for a single simulation run.
///
/// The onboard set holds package *ids* in load order; the records
/// themselves stay in the registry.
#[derive(Debug, Clone)]
pub struct TruckState {
    pub id:        TruckId,
    pub phase:     TruckPhase,
    /// Street of the address the truck is at (or last left, mid-leg).
    pub location:  String,
    /// The truck's own clock.  Equals the departure time while held.
    pub clock:     SimTime,
    /// Odometer for this run.
    pub miles:     f64,
    pub speed_mph: f64,
    pub capacity:  usize,
    /// Resolved departure time; `None` while it depends on a truck that has
    /// not finished yet.
    pub departure: Option<SimTime>,
    /// Clock after the return-to-hub leg.
    pub completed_at: Option<SimTime>,
    onboard: Vec<PackageId>,
}

impl TruckState {
    /// A held, empty truck parked at `hub`.
    pub fn new(id: TruckId, hub: impl Into<String>, speed_mph: f64, capacity: usize) -> Self {
        Self {
            id,
            phase:        TruckPhase::Held,
            location:     hub.into(),
            clock:        SimTime::MIDNIGHT,
            miles:        0.0,
            speed_mph,
            capacity,
            departure:    None,
            completed_at: None,
            onboard:      Vec::new(),
        }
    }

    /// Put `package` on the truck.
    ///
    /// # Errors
    ///
    /// [`FleetError::CapacityExceeded`] when the truck already holds
    /// `capacity` packages, [`FleetError::AlreadyOnboard`] on a repeat load.
    pub fn load(&mut self, package: PackageId) -> FleetResult<()> {
        if self.onboard.contains(&package) {
            return Err(FleetError::AlreadyOnboard { truck: self.id, package });
        }
        if self.onboard.len() >= self.capacity {
            return Err(FleetError::CapacityExceeded {
                truck:    self.id,
                package,
                capacity: self.capacity,
            });
        }
        self.onboard.push(package);
        Ok(())
    }

    /// Remove `package` from the onboard set.  Returns `false` if absent.
    pub fn unload(&mut self, package: PackageId) -> bool {
        match self.onboard.iter().position(|&p| p == package) {
            Some(i) => {
                self.onboard.remove(i);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn onboard(&self) -> &[PackageId] {
        &self.onboard
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.onboard.is_empty()
    }

    /// Fix the departure time without leaving (the truck stays held).
    pub fn schedule(&mut self, at: SimTime) {
        self.departure = Some(at);
        self.clock = at;
    }

    /// Leave the hub at `at`.
    pub fn depart(&mut self, at: SimTime) {
        self.schedule(at);
        self.phase = TruckPhase::EnRoute;
    }

    /// Time this truck needs to cover `miles`.
    #[inline]
    pub fn travel_time(&self, miles: f64) -> SimSpan {
        travel_time(miles, self.speed_mph)
    }

    /// Complete a leg to `to`, arriving at `arrival`.
    pub fn arrive(&mut self, to: &str, miles: f64, arrival: SimTime) {
        self.miles += miles;
        self.clock = arrival;
        to.clone_into(&mut self.location);
    }

    /// Credit part of a leg and stop the clock at `at`.  The location is
    /// unchanged: the truck is somewhere between it and the destination.
    pub fn advance_partial(&mut self, miles: f64, at: SimTime) {
        self.miles += miles;
        self.clock = at;
    }

    /// Drive back to `hub` and finish the day.
    pub fn return_to(&mut self, hub: &str, miles: f64, arrival: SimTime) {
        self.arrive(hub, miles, arrival);
        self.phase = TruckPhase::Complete;
        self.completed_at = Some(arrival);
    }
}
