//! Dense, symmetric address distance table.

use std::collections::HashMap;

use pd_core::LocationId;

use crate::{DistanceError, DistanceResult};

/// One parsed source row: the address and its (possibly partial) distances
/// to the addresses in row order.  `None` marks an empty cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRow {
    pub address: String,
    pub cells:   Vec<Option<f64>>,
}

impl DistanceRow {
    pub fn new(address: impl Into<String>, cells: Vec<Option<f64>>) -> Self {
        Self { address: address.into(), cells }
    }
}

/// Address index plus an N×N matrix of miles stored in row-major order.
///
/// Addresses are matched by exact street string.  Two packages going to the
/// same building must spell the street identically or they will resolve to
/// different (or no) rows.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    addresses: Vec<String>,
    index:     HashMap<String, LocationId>,
    miles:     Vec<f64>,
}

impl DistanceTable {
    /// Build the table from rows in file order, mirroring the sparse
    /// triangle into the empty one.
    ///
    /// # Errors
    ///
    /// [`DistanceError::MalformedTable`] if an address repeats, a row has a
    /// populated cell past the last address, a cell is negative or not
    /// finite, or an off-diagonal pair is empty on both sides.  An empty
    /// diagonal cell reads as 0.
    pub fn from_rows(rows: Vec<DistanceRow>) -> DistanceResult<Self> {
        let n = rows.len();

        // ── Index, in row order ───────────────────────────────────────────
        let mut index = HashMap::with_capacity(n);
        let mut addresses = Vec::with_capacity(n);
        for (i, row) in rows.iter().enumerate() {
            let id = LocationId::try_from(i)
                .map_err(|_| DistanceError::MalformedTable(format!("too many rows ({n})")))?;
            if index.insert(row.address.clone(), id).is_some() {
                return Err(DistanceError::MalformedTable(format!(
                    "address {:?} appears more than once",
                    row.address
                )));
            }
            addresses.push(row.address.clone());
        }

        // ── Raw grid ──────────────────────────────────────────────────────
        let mut grid: Vec<Option<f64>> = vec![None; n * n];
        for (i, row) in rows.iter().enumerate() {
            for (j, cell) in row.cells.iter().enumerate() {
                let Some(miles) = *cell else { continue };
                if j >= n {
                    return Err(DistanceError::MalformedTable(format!(
                        "row {:?} has a distance in column {} but there are only {n} addresses",
                        row.address,
                        j + 1
                    )));
                }
                if !miles.is_finite() || miles < 0.0 {
                    return Err(DistanceError::MalformedTable(format!(
                        "row {:?} column {}: distance {miles} is not a non-negative number",
                        row.address,
                        j + 1
                    )));
                }
                grid[i * n + j] = Some(miles);
            }
        }

        // ── Mirror into the empty triangle ────────────────────────────────
        for i in 0..n {
            for j in 0..n {
                if grid[i * n + j].is_none() {
                    grid[i * n + j] = grid[j * n + i];
                }
            }
        }

        // ── Resolve: every off-diagonal cell must now be known ────────────
        let mut miles = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                match grid[i * n + j] {
                    Some(d) => miles.push(d),
                    None if i == j => miles.push(0.0),
                    None => {
                        return Err(DistanceError::MalformedTable(format!(
                            "no distance between {:?} and {:?} in either direction",
                            addresses[i], addresses[j]
                        )));
                    }
                }
            }
        }

        Ok(Self { addresses, index, miles })
    }

    /// Miles between two street addresses.
    ///
    /// # Errors
    ///
    /// [`DistanceError::UnknownAddress`] naming the first argument that is
    /// not in the index.
    pub fn distance(&self, from: &str, to: &str) -> DistanceResult<f64> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        Ok(self.distance_between(a, b))
    }

    /// Miles between two indexed locations.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of bounds.
    #[inline]
    pub fn distance_between(&self, from: LocationId, to: LocationId) -> f64 {
        self.miles[from.index() * self.len() + to.index()]
    }

    /// Row index of `street`, if present.
    #[inline]
    pub fn index_of(&self, street: &str) -> Option<LocationId> {
        self.index.get(street).copied()
    }

    /// Like [`index_of`][Self::index_of] but an absent street is an error.
    pub fn require(&self, street: &str) -> DistanceResult<LocationId> {
        self.index_of(street)
            .ok_or_else(|| DistanceError::UnknownAddress(street.to_owned()))
    }

    #[inline]
    pub fn contains(&self, street: &str) -> bool {
        self.index.contains_key(street)
    }

    /// Street string for a row.
    pub fn address(&self, id: LocationId) -> Option<&str> {
        self.addresses.get(id.index()).map(String::as_str)
    }

    /// Street strings in row order.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.addresses.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// `true` if every pair matches its mirror within `tol` miles.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.len();
        (0..n).all(|i| {
            ((i + 1)..n).all(|j| (self.miles[i * n + j] - self.miles[j * n + i]).abs() <= tol)
        })
    }
}
