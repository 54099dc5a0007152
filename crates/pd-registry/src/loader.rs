//! CSV package-table loader.
//!
//! # CSV format
//!
//! No header record (a leading row whose first cell reads `id` or
//! `Package ID` is tolerated and skipped).  One row per package:
//!
//! ```csv
//! 1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21
//! 6,3060 Lester St,West Valley City,UT,84119,10:30 AM,88,Delayed on flight
//! ```
//!
//! | Column | Meaning                                        |
//! |--------|------------------------------------------------|
//! | 1      | Package id (unique integer)                    |
//! | 2–5    | Street, city, state, zip                       |
//! | 6      | Deadline: `H:MM AM`, `HH:MM`, or `EOD`         |
//! | 7      | Weight in kilograms                            |
//! | 8      | Special notes (optional)                       |
//!
//! Blank rows are skipped.  Every field is trimmed.

use std::io::Read;
use std::path::Path;

use pd_core::{Deadline, PackageId};

use crate::{Address, Package, PackageRegistry, RegistryError, RegistryResult};

const REQUIRED_COLUMNS: usize = 7;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`PackageRegistry`] from a CSV file.
pub fn load_packages_csv(path: &Path) -> RegistryResult<PackageRegistry> {
    let file = std::fs::File::open(path).map_err(RegistryError::Io)?;
    load_packages_reader(file)
}

/// Like [`load_packages_csv`] but accepts any `Read` source.
pub fn load_packages_reader<R: Read>(reader: R) -> RegistryResult<PackageRegistry> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut registry = PackageRegistry::new();
    for (i, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row = i + 1;

        let first = record.get(0).unwrap_or("").trim();
        if first.is_empty() {
            continue;
        }
        if row == 1 && is_header(first) {
            continue;
        }

        let field = |n: usize| record.get(n).unwrap_or("").trim();
        if record.len() < REQUIRED_COLUMNS {
            return Err(RegistryError::Parse {
                row,
                message: format!("expected at least {REQUIRED_COLUMNS} columns, found {}", record.len()),
            });
        }

        let id: u32 = first.parse().map_err(|_| RegistryError::Parse {
            row,
            message: format!("package id {first:?} is not an integer"),
        })?;
        let weight: u32 = field(6).parse().map_err(|_| RegistryError::Parse {
            row,
            message: format!("weight {:?} is not an integer", field(6)),
        })?;
        let deadline = Deadline::parse(field(5))?;

        let address = Address::new(field(1), field(2), field(3), field(4));
        let package = Package::new(PackageId(id), address, deadline, weight).with_notes(field(7));
        registry.insert(package)?;
    }

    Ok(registry)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn is_header(first_cell: &str) -> bool {
    let lower = first_cell.to_ascii_lowercase();
    lower == "id" || lower.starts_with("package id")
}
