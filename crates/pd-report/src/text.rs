//! Fixed-width console output.

use std::io::Write;

use crate::writer::ReportWriter;
use crate::{PackageView, ReportResult, SnapshotReport, TruckView};

/// One console line for a package.
pub fn package_line(p: &PackageView) -> String {
    let truck = p.truck.map(|t| t.to_string()).unwrap_or_else(|| "-".to_owned());
    let delivered = p
        .delivery_time
        .map(|t| t.to_string())
        .unwrap_or_else(|| "N/A".to_owned());
    let late = if p.late { " (late)" } else { "" };
    format!(
        "ID: {:<2} | Address: {:<40} | City: {:<16} | Zip Code: {:<5} | Weight: {:<2} Kg \
         | Deadline: {:<10} | Truck: {:<2} | Status: {:<18} | Delivery Time: {delivered}{late}",
        p.id,
        p.street,
        p.city,
        p.zip,
        p.weight,
        p.deadline.to_string(),
        truck,
        p.status_label(),
    )
}

/// One console line for a truck.
pub fn truck_line(t: &TruckView) -> String {
    format!(
        "Truck {} | {:<8} | Current Location: {} | Mileage: {:.2} miles | Number of Packages Left: {}",
        t.id,
        t.phase.as_str(),
        t.location,
        t.miles,
        t.remaining,
    )
}

/// Writes reports as console text to any `io::Write`.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write only the line for one package.
    pub fn write_package(&mut self, p: &PackageView) -> ReportResult<()> {
        writeln!(self.out, "{}", package_line(p))?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_report(&mut self, report: &SnapshotReport) -> ReportResult<()> {
        writeln!(self.out, "Snapshot: {}", report.snapshot)?;
        writeln!(self.out)?;
        for p in report.packages.values() {
            self.write_package(p)?;
        }
        writeln!(self.out)?;
        for t in &report.trucks {
            writeln!(self.out, "{}", truck_line(t))?;
        }
        writeln!(self.out, "Total Mileage: {:.2}", report.total_miles())?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
