//! The `ReportWriter` trait implemented by all report backends.

use crate::{ReportResult, SnapshotReport};

/// Trait implemented by the text and CSV writers.
pub trait ReportWriter {
    /// Write one complete snapshot (packages, trucks, fleet total).
    fn write_report(&mut self, report: &SnapshotReport) -> ReportResult<()>;

    /// Flush underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> ReportResult<()>;
}
