//! Tests for pd-report.

use pd_core::{Deadline, PackageId, SimTime, TruckId};
use pd_fleet::TruckState;
use pd_registry::{Address, Package, PackageRegistry};

use crate::SnapshotReport;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(h: u32, m: u32) -> SimTime {
    SimTime::from_hms(h, m, 0)
}

/// Three packages: 1 delivered late, 2 loaded on truck 1, 3 still at the hub.
fn sample_state() -> (PackageRegistry, Vec<TruckState>) {
    let mut registry = PackageRegistry::new();
    let addr = |street: &str| Address::new(street, "Salt Lake City", "UT", "84115");

    let mut p1 = Package::new(PackageId(1), addr("195 W Oakland Ave"), Deadline::By(at(9, 0)), 21);
    p1.mark_loaded(TruckId(1));
    p1.mark_departed(at(8, 0));
    p1.mark_delivered(at(9, 30));
    registry.insert(p1).unwrap();

    let mut p2 = Package::new(PackageId(2), addr("2530 S 500 E"), Deadline::EndOfDay, 44);
    p2.mark_loaded(TruckId(1));
    registry.insert(p2).unwrap();

    registry
        .insert(Package::new(PackageId(3), addr("233 Canyon Rd"), Deadline::EndOfDay, 2))
        .unwrap();

    let mut truck = TruckState::new(TruckId(1), "HUB", 18.0, 16);
    truck.load(PackageId(2)).unwrap();
    truck.depart(at(8, 0));
    truck.arrive("195 W Oakland Ave", 4.5, at(9, 30));

    (registry, vec![truck])
}

fn sample_report() -> SnapshotReport {
    let (registry, trucks) = sample_state();
    SnapshotReport::build(&registry, &trucks, at(9, 45))
}

// ── Views ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod views {
    use pd_core::PackageStatus;

    use super::*;

    #[test]
    fn packages_keyed_in_id_order() {
        let report = sample_report();
        let ids: Vec<u32> = report.packages.keys().map(|id| id.0).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn package_view_copies_record() {
        let report = sample_report();
        let p1 = report.package(PackageId(1)).unwrap();
        assert_eq!(p1.status, PackageStatus::Delivered);
        assert_eq!(p1.delivery_time, Some(at(9, 30)));
        assert!(p1.late);
        assert_eq!(p1.truck, Some(TruckId(1)));
    }

    #[test]
    fn loaded_label_names_truck() {
        let report = sample_report();
        assert_eq!(report.package(PackageId(2)).unwrap().status_label(), "Loaded on Truck 1");
        assert_eq!(report.package(PackageId(3)).unwrap().status_label(), "At Hub");
    }

    #[test]
    fn truck_view_and_totals() {
        let report = sample_report();
        let t = report.truck(TruckId(1)).unwrap();
        assert_eq!(t.location, "195 W Oakland Ave");
        assert_eq!(t.remaining, 1);
        assert_eq!(t.departure, Some(at(8, 0)));
        assert_eq!(report.total_miles(), 4.5);
        assert_eq!(report.count_with_status(PackageStatus::Delivered), 1);
        assert_eq!(report.late_packages(), vec![PackageId(1)]);
    }

    #[test]
    fn building_does_not_mutate_state() {
        let (registry, trucks) = sample_state();
        let before = registry.clone();
        let _ = SnapshotReport::build(&registry, &trucks, at(9, 45));
        assert_eq!(before.sorted(), registry.sorted());
    }
}

// ── Text writer ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::{ReportWriter, TextWriter, package_line};

    fn render(report: &SnapshotReport) -> String {
        let mut w = TextWriter::new(Vec::new());
        w.write_report(report).unwrap();
        w.finish().unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn package_line_fields() {
        let report = sample_report();
        let line = package_line(report.package(PackageId(1)).unwrap());
        assert!(line.starts_with("ID: 1 "), "{line}");
        assert!(line.contains("195 W Oakland Ave"));
        assert!(line.contains("Deadline: 9:00 AM"));
        assert!(line.contains("Delivery Time: 09:30:00 (late)"));

        let pending = package_line(report.package(PackageId(3)).unwrap());
        assert!(pending.contains("Delivery Time: N/A"));
        assert!(pending.contains("Truck: - "));
    }

    #[test]
    fn report_has_every_package_and_truck() {
        let text = render(&sample_report());
        assert!(text.starts_with("Snapshot: 09:45:00"));
        assert_eq!(text.lines().filter(|l| l.starts_with("ID: ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("Truck ")).count(), 1);
        assert!(text.contains("Mileage: 4.50 miles | Number of Packages Left: 1"));
        assert!(text.trim_end().ends_with("Total Mileage: 4.50"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(&sample_report()), render(&sample_report()));
    }
}

// ── CSV writer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{CsvWriter, ReportWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("packages.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers[..3], ["snapshot", "package_id", "street"]);

        assert!(dir.path().join("trucks.csv").exists());
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_report(&sample_report()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // idempotent

        let mut rdr = csv::Reader::from_path(dir.path().join("packages.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "09:45:00");
        assert_eq!(&rows[0][1], "1");
        assert_eq!(&rows[0][9], "Delivered");
        assert_eq!(&rows[0][10], "09:30:00");
        assert_eq!(&rows[0][11], "1");
        assert_eq!(&rows[2][8], ""); // package 3 has no truck

        let mut trucks = csv::Reader::from_path(dir.path().join("trucks.csv")).unwrap();
        let rows: Vec<_> = trucks.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][4], "4.500");
        assert_eq!(&rows[0][5], "1");
    }
}
