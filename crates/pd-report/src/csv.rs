//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `packages.csv`
//! - `trucks.csv`
//!
//! Every written report appends its rows; the `snapshot` column tells
//! successive snapshots apart.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{ReportResult, SnapshotReport};

/// Writes snapshot reports to two CSV files.
pub struct CsvWriter {
    packages: Writer<File>,
    trucks:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut packages = Writer::from_path(dir.join("packages.csv"))?;
        packages.write_record([
            "snapshot", "package_id", "street", "city", "state", "zip", "deadline", "weight",
            "truck", "status", "delivery_time", "late",
        ])?;

        let mut trucks = Writer::from_path(dir.join("trucks.csv"))?;
        trucks.write_record([
            "snapshot", "truck_id", "phase", "location", "miles", "packages_left",
            "departure", "completed_at",
        ])?;

        Ok(Self { packages, trucks, finished: false })
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl ReportWriter for CsvWriter {
    fn write_report(&mut self, report: &SnapshotReport) -> ReportResult<()> {
        let snapshot = report.snapshot.to_string();
        for p in report.packages.values() {
            self.packages.write_record(&[
                snapshot.clone(),
                p.id.to_string(),
                p.street.clone(),
                p.city.clone(),
                p.state.clone(),
                p.zip.clone(),
                p.deadline.to_string(),
                p.weight.to_string(),
                opt(p.truck),
                p.status.to_string(),
                opt(p.delivery_time),
                (p.late as u8).to_string(),
            ])?;
        }
        for t in &report.trucks {
            self.trucks.write_record(&[
                snapshot.clone(),
                t.id.to_string(),
                t.phase.to_string(),
                t.location.clone(),
                format!("{:.3}", t.miles),
                t.remaining.to_string(),
                opt(t.departure),
                opt(t.completed_at),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.packages.flush()?;
        self.trucks.flush()?;
        Ok(())
    }
}
