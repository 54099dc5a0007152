//! `pd-report`: read-only snapshot views and their writers.
//!
//! | Writer       | Output                                                   |
//! |--------------|----------------------------------------------------------|
//! | `TextWriter` | Fixed-width console lines (any `io::Write`)              |
//! | `CsvWriter`  | `packages.csv`, `trucks.csv` in an output directory      |
//!
//! Both implement [`ReportWriter`].  A [`SnapshotReport`] is built from the
//! registry and truck states a simulation run leaves behind and never
//! mutates them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pd_report::{SnapshotReport, TextWriter, ReportWriter};
//!
//! let report = SnapshotReport::build(&registry, &trucks, snapshot);
//! let mut out = TextWriter::new(std::io::stdout());
//! out.write_report(&report)?;
//! ```

pub mod csv;
pub mod error;
pub mod text;
pub mod view;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{ReportError, ReportResult};
pub use text::{TextWriter, package_line, truck_line};
pub use view::{PackageView, SnapshotReport, TruckView};
pub use writer::ReportWriter;
