//! Unit tests for pd-fleet.

use pd_core::{PackageId, SimTime, TruckId};

use crate::TruckState;

fn truck(capacity: usize) -> TruckState {
    TruckState::new(TruckId(1), "HUB", 18.0, capacity)
}

fn at(h: u32, m: u32) -> SimTime {
    SimTime::from_hms(h, m, 0)
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use super::*;
    use crate::FleetError;

    #[test]
    fn loads_up_to_capacity() {
        let mut t = truck(2);
        t.load(PackageId(1)).unwrap();
        t.load(PackageId(2)).unwrap();
        assert_eq!(t.onboard(), &[PackageId(1), PackageId(2)]);

        match t.load(PackageId(3)) {
            Err(FleetError::CapacityExceeded { truck, package, capacity }) => {
                assert_eq!(truck, TruckId(1));
                assert_eq!(package, PackageId(3));
                assert_eq!(capacity, 2);
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
        assert_eq!(t.onboard().len(), 2, "rejected load must not change cargo");
    }

    #[test]
    fn duplicate_load_rejected() {
        let mut t = truck(16);
        t.load(PackageId(4)).unwrap();
        assert!(matches!(t.load(PackageId(4)), Err(FleetError::AlreadyOnboard { .. })));
    }

    #[test]
    fn unload_removes_only_that_package() {
        let mut t = truck(16);
        for id in [1, 2, 3] {
            t.load(PackageId(id)).unwrap();
        }
        assert!(t.unload(PackageId(2)));
        assert!(!t.unload(PackageId(2)));
        assert_eq!(t.onboard(), &[PackageId(1), PackageId(3)]);
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use pd_core::SimSpan;

    use super::*;
    use crate::{TruckPhase, travel_time};

    #[test]
    fn new_truck_is_held_at_hub() {
        let t = truck(16);
        assert_eq!(t.phase, TruckPhase::Held);
        assert_eq!(t.location, "HUB");
        assert_eq!(t.miles, 0.0);
        assert!(t.departure.is_none());
    }

    #[test]
    fn schedule_keeps_truck_held() {
        let mut t = truck(16);
        t.schedule(at(9, 5));
        assert_eq!(t.phase, TruckPhase::Held);
        assert_eq!(t.clock, at(9, 5));
        assert_eq!(t.departure, Some(at(9, 5)));
    }

    #[test]
    fn travel_time_at_eighteen_mph() {
        assert_eq!(travel_time(9.0, 18.0), SimSpan::from_minutes(30));
        assert_eq!(truck(16).travel_time(0.0), SimSpan::ZERO);
    }

    #[test]
    fn full_leg_moves_clock_odometer_and_location() {
        let mut t = truck(16);
        t.depart(at(8, 0));
        t.arrive("A", 3.0, at(8, 10));
        assert_eq!(t.phase, TruckPhase::EnRoute);
        assert_eq!(t.location, "A");
        assert_eq!(t.clock, at(8, 10));
        assert_eq!(t.miles, 3.0);
    }

    #[test]
    fn partial_leg_keeps_location() {
        let mut t = truck(16);
        t.depart(at(8, 0));
        t.advance_partial(1.5, at(8, 5));
        assert_eq!(t.location, "HUB");
        assert_eq!(t.clock, at(8, 5));
        assert_eq!(t.miles, 1.5);
    }

    #[test]
    fn return_completes_the_day() {
        let mut t = truck(16);
        t.depart(at(8, 0));
        t.arrive("A", 3.0, at(8, 10));
        t.return_to("HUB", 3.0, at(8, 20));
        assert_eq!(t.phase, TruckPhase::Complete);
        assert_eq!(t.completed_at, Some(at(8, 20)));
        assert_eq!(t.location, "HUB");
        assert_eq!(t.miles, 6.0);
    }
}
