//! `pd-registry`: package records and the id-keyed registry that owns them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`address`]  | `Address` (street / city / state / zip)                   |
//! | [`package`]  | `Package` record and its status transitions               |
//! | [`registry`] | `PackageRegistry` (`PackageId → Package`)                 |
//! | [`loader`]   | `load_packages_csv`, `load_packages_reader`               |
//! | [`error`]    | `RegistryError`, `RegistryResult<T>`                      |
//!
//! The registry is the single owner of package records for a run.  Trucks
//! hold `PackageId`s, never references, so a package removed from a truck is
//! still in the registry for final reporting.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | Back the registry with `rustc_hash::FxHashMap`.           |

pub mod address;
pub mod error;
pub mod loader;
pub mod package;
pub mod registry;

#[cfg(test)]
mod tests;

pub use address::Address;
pub use error::{RegistryError, RegistryResult};
pub use loader::{load_packages_csv, load_packages_reader};
pub use package::Package;
pub use registry::PackageRegistry;
