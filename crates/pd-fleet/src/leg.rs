//! A single truck movement between two addresses.

use pd_core::{PackageId, SimSpan, SimTime, TruckId};

/// Time to drive `miles` at `speed_mph`, rounded to the millisecond.
#[inline]
pub fn travel_time(miles: f64, speed_mph: f64) -> SimSpan {
    SimSpan::from_hours(miles / speed_mph)
}

/// How a leg ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegKind {
    /// Arrived and dropped off `Leg::package`.
    Delivery,
    /// Cut short by the snapshot; `fraction` of the distance was covered.
    Partial { fraction: f64 },
    /// Drove back to the hub after the last delivery.
    Return,
}

/// Record of one leg, handed to simulation observers.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub truck:   TruckId,
    pub kind:    LegKind,
    pub from:    String,
    pub to:      String,
    /// Package being delivered; `None` for return legs.
    pub package: Option<PackageId>,
    pub depart:  SimTime,
    /// Arrival, or the snapshot for a partial leg.
    pub end:     SimTime,
    /// Full distance between `from` and `to`.
    pub distance: f64,
    /// Miles actually credited to the odometer for this leg.
    pub miles:   f64,
}

impl Leg {
    #[inline]
    pub fn is_return(&self) -> bool {
        matches!(self.kind, LegKind::Return)
    }
}
