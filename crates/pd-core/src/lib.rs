//! `pd-core`: foundational types for the parcel-day delivery simulator.
//!
//! This crate is a dependency of every other `pd-*` crate.  It has no `pd-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `PackageId`, `TruckId`, `LocationId`                  |
//! | [`time`]      | `SimTime`, `SimSpan`, `Deadline`, `parse_snapshot`    |
//! | [`status`]    | `PackageStatus` enum                                  |
//! | [`error`]     | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `SimTime`.       |

pub mod error;
pub mod ids;
pub mod status;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{LocationId, PackageId, TruckId};
pub use status::PackageStatus;
pub use time::{Deadline, SimSpan, SimTime, parse_snapshot};
