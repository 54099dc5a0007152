//! Unit tests for pd-registry.

use pd_core::{Deadline, PackageId, SimTime};

use crate::{Address, Package};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pkg(id: u32, street: &str) -> Package {
    Package::new(
        PackageId(id),
        Address::new(street, "Salt Lake City", "UT", "84115"),
        Deadline::EndOfDay,
        5,
    )
}

fn at(h: u32, m: u32) -> SimTime {
    SimTime::from_hms(h, m, 0)
}

// ── Package transitions ───────────────────────────────────────────────────────

#[cfg(test)]
mod package {
    use pd_core::{Deadline, PackageStatus, TruckId};

    use super::*;

    #[test]
    fn new_package_is_at_hub() {
        let p = pkg(1, "A");
        assert_eq!(p.status, PackageStatus::AtHub);
        assert!(p.truck.is_none());
        assert!(p.delivery_time.is_none());
    }

    #[test]
    fn loading_sets_truck_and_status() {
        let mut p = pkg(1, "A");
        p.mark_loaded(TruckId(2));
        assert_eq!(p.status, PackageStatus::Loaded);
        assert_eq!(p.truck, Some(TruckId(2)));
    }

    #[test]
    fn delayed_package_stays_delayed_after_departure() {
        let mut p = pkg(6, "A");
        p.mark_delayed();
        p.mark_loaded(TruckId(2));
        assert_eq!(p.status, PackageStatus::Delayed);
        p.mark_departed(at(9, 5));
        assert_eq!(p.status, PackageStatus::Delayed);
        assert_eq!(p.load_time, Some(at(9, 5)));

        p.mark_en_route(at(9, 5));
        assert_eq!(p.status, PackageStatus::EnRoute);
        p.mark_delivered(at(9, 40));
        assert_eq!(p.status, PackageStatus::Delivered);
    }

    #[test]
    fn en_route_keeps_existing_load_time() {
        let mut p = pkg(1, "A");
        p.mark_departed(at(8, 0));
        p.mark_en_route(at(8, 40));
        assert_eq!(p.status, PackageStatus::EnRoute);
        assert_eq!(p.load_time, Some(at(8, 0)));

        let mut q = pkg(2, "B");
        q.mark_en_route(at(8, 40));
        assert_eq!(q.load_time, Some(at(8, 40)));
    }

    #[test]
    fn delivery_time_is_set_once() {
        let mut p = pkg(1, "A");
        p.mark_delivered(at(9, 0));
        p.mark_delivered(at(11, 0));
        assert_eq!(p.status, PackageStatus::Delivered);
        assert_eq!(p.delivery_time, Some(at(9, 0)));
    }

    #[test]
    fn lateness_uses_deadline() {
        let mut p = pkg(1, "A");
        p.deadline = Deadline::By(at(10, 30));
        assert!(!p.is_late());
        p.mark_delivered(at(10, 31));
        assert!(p.is_late());
    }

    #[test]
    fn blank_notes_are_dropped() {
        assert_eq!(pkg(1, "A").with_notes("  ").notes, None);
        assert_eq!(pkg(1, "A").with_notes("Can only be on truck 2").notes.as_deref(), Some("Can only be on truck 2"));
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;
    use crate::{PackageRegistry, RegistryError};

    #[test]
    fn insert_and_lookup() {
        let mut r = PackageRegistry::new();
        r.insert(pkg(3, "C")).unwrap();
        r.insert(pkg(1, "A")).unwrap();
        assert_eq!(r.len(), 2);
        assert_eq!(r.get(PackageId(3)).unwrap().address.street, "C");
        assert!(r.get(PackageId(2)).is_none());
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut r = PackageRegistry::new();
        r.insert(pkg(1, "A")).unwrap();
        assert!(matches!(r.insert(pkg(1, "B")), Err(RegistryError::DuplicatePackage(PackageId(1)))));
    }

    #[test]
    fn require_reports_missing_id() {
        let r = PackageRegistry::new();
        assert!(matches!(r.require(PackageId(9)), Err(RegistryError::UnknownPackage(PackageId(9)))));
    }

    #[test]
    fn sorted_and_ids_ascend() {
        let mut r = PackageRegistry::new();
        for id in [5, 2, 9, 1] {
            r.insert(pkg(id, "X")).unwrap();
        }
        let ids: Vec<u32> = r.ids().into_iter().map(|id| id.0).collect();
        assert_eq!(ids, [1, 2, 5, 9]);
        let sorted: Vec<u32> = r.sorted().iter().map(|p| p.id.0).collect();
        assert_eq!(sorted, [1, 2, 5, 9]);
    }

    #[test]
    fn clone_is_independent() {
        let mut r = PackageRegistry::new();
        r.insert(pkg(1, "A")).unwrap();
        let mut copy = r.clone();
        copy.get_mut(PackageId(1)).unwrap().mark_delivered(at(9, 0));
        assert!(r.get(PackageId(1)).unwrap().delivery_time.is_none());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use pd_core::{CoreError, Deadline, PackageStatus};

    use super::*;
    use crate::{RegistryError, load_packages_reader};

    const PACKAGES_CSV: &str = "\
1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21\n\
2,2530 S 500 E,Salt Lake City,UT,84106,EOD,44\n\
6,3060 Lester St,West Valley City,UT,84119,10:30 AM,88,Delayed on flight\n\
";

    #[test]
    fn loads_every_row() {
        let r = load_packages_reader(Cursor::new(PACKAGES_CSV)).unwrap();
        assert_eq!(r.len(), 3);

        let p1 = r.get(PackageId(1)).unwrap();
        assert_eq!(p1.address.street, "195 W Oakland Ave");
        assert_eq!(p1.address.zip, "84115");
        assert_eq!(p1.deadline, Deadline::By(at(10, 30)));
        assert_eq!(p1.weight, 21);
        assert_eq!(p1.status, PackageStatus::AtHub);
        assert!(p1.notes.is_none());

        assert_eq!(r.get(PackageId(2)).unwrap().deadline, Deadline::EndOfDay);
        assert_eq!(r.get(PackageId(6)).unwrap().notes.as_deref(), Some("Delayed on flight"));
    }

    #[test]
    fn header_row_is_skipped() {
        let csv = format!("Package ID,Address,City,State,Zip,Deadline,Weight,Notes\n{PACKAGES_CSV}");
        let r = load_packages_reader(Cursor::new(csv)).unwrap();
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn bad_weight_reports_row() {
        let csv = "1,A,City,UT,84115,EOD,heavy\n";
        match load_packages_reader(Cursor::new(csv)) {
            Err(RegistryError::Parse { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn bad_deadline_is_core_error() {
        let csv = "1,A,City,UT,84115,whenever,3\n";
        assert!(matches!(
            load_packages_reader(Cursor::new(csv)),
            Err(RegistryError::Core(CoreError::InvalidDeadline(_)))
        ));
    }

    #[test]
    fn short_row_rejected() {
        let csv = "1,A,City,UT\n";
        assert!(matches!(load_packages_reader(Cursor::new(csv)), Err(RegistryError::Parse { .. })));
    }

    #[test]
    fn duplicate_rows_rejected() {
        let csv = "1,A,City,UT,84115,EOD,3\n1,B,City,UT,84115,EOD,3\n";
        assert!(matches!(
            load_packages_reader(Cursor::new(csv)),
            Err(RegistryError::DuplicatePackage(PackageId(1)))
        ));
    }
}
