//! CSV distance-table loader.
//!
//! # CSV format
//!
//! No header record.  Title rows, header rows and blank rows are skipped:
//! any row whose first cell is empty or contains `DISTANCE`.  Every other row
//! is a data row:
//!
//! ```csv
//! Western Governors University,"HUB",0.0
//! International Peace Gardens,"1060 Dalton Ave S (84104)",7.2,0.0
//! Sugar House Park,"1330 2100 S (84106)",3.8,7.1,0.0
//! ```
//!
//! | Column | Meaning                                                      |
//! |--------|--------------------------------------------------------------|
//! | 1      | Location label (display only, ignored)                       |
//! | 2      | Street address; quotes and `(NNNNN)` postal codes stripped   |
//! | 3..    | Miles to the address in row 1, 2, …; empty = unknown         |
//!
//! Empty cells are filled from their mirror by [`DistanceTable::from_rows`].

use std::io::Read;
use std::path::Path;

use crate::table::{DistanceRow, DistanceTable};
use crate::{DistanceError, DistanceResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`DistanceTable`] from a CSV file.
pub fn load_distance_csv(path: &Path) -> DistanceResult<DistanceTable> {
    let file = std::fs::File::open(path).map_err(DistanceError::Io)?;
    load_distance_reader(file)
}

/// Like [`load_distance_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_distance_reader<R: Read>(reader: R) -> DistanceResult<DistanceTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;

        let label = record.get(0).unwrap_or("").trim();
        if label.is_empty() || label.contains("DISTANCE") {
            continue;
        }

        let raw_address = record.get(1).unwrap_or("").replace('"', "");
        let address = strip_postal_codes(&raw_address).trim().to_owned();
        if address.is_empty() {
            continue;
        }

        let cells = record
            .iter()
            .skip(2)
            .enumerate()
            .map(|(col, cell)| parse_cell(&address, col, cell))
            .collect::<DistanceResult<Vec<_>>>()?;

        rows.push(DistanceRow::new(address, cells));
    }

    DistanceTable::from_rows(rows)
}

/// Remove every parenthesised five-digit postal code, e.g.
/// `"1060 Dalton Ave S\n(84104)"` → `"1060 Dalton Ave S\n"`.
pub fn strip_postal_codes(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    let mut copied_to = 0;
    while i < bytes.len() {
        let is_code = bytes[i] == b'('
            && i + 6 < bytes.len()
            && bytes[i + 1..i + 6].iter().all(u8::is_ascii_digit)
            && bytes[i + 6] == b')';
        if is_code {
            out.push_str(&s[copied_to..i]);
            i += 7;
            copied_to = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&s[copied_to..]);
    out
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_cell(address: &str, col: usize, cell: &str) -> DistanceResult<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(|_| {
        DistanceError::MalformedTable(format!(
            "row {address:?} column {}: {cell:?} is not a number",
            col + 1
        ))
    })
}
