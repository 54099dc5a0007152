//! `pd-distance`: the address distance table used by the routing engine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`table`]  | `DistanceTable` (address index + dense symmetric matrix)     |
//! | [`loader`] | `load_distance_csv`, `load_distance_reader`                  |
//! | [`error`]  | `DistanceError`, `DistanceResult<T>`                         |
//!
//! # Symmetry
//!
//! Source tables are usually triangular: row *i* lists distances to rows
//! `0..=i` only.  [`DistanceTable::from_rows`] mirrors every present cell into
//! its empty twin, so after construction `distance(a, b) == distance(b, a)`
//! for every pair of known addresses.

pub mod error;
pub mod loader;
pub mod table;


pub use error::{DistanceError, DistanceResult};
pub use loader::{load_distance_csv, load_distance_reader, strip_postal_codes};
pub use table::{DistanceRow, DistanceTable};
