//! `pd-fleet`: truck state, loading, and leg bookkeeping.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                       |
//! |-----------|----------------------------------------------------------------|
//! | [`truck`] | `TruckState`, `TruckPhase`: per-truck clock, odometer and cargo |
//! | [`leg`]   | `Leg`, `LegKind`, `travel_time`                                |
//! | [`error`] | `FleetError`, `FleetResult<T>`                                 |
//!
//! # Movement model
//!
//! A truck moves in whole legs between addresses.  Each leg advances the
//! truck's own clock by `miles / speed` and its odometer by `miles`.  When a
//! snapshot interrupts a leg the truck is credited with the proportional
//! share of the miles and its clock stops at the snapshot; it never arrives.
//! There is no shared world clock: every truck keeps its own.

pub mod error;
pub mod leg;
pub mod truck;

#[cfg(test)]
mod tests;

pub use error::{FleetError, FleetResult};
pub use leg::{Leg, LegKind, travel_time};
pub use truck::{TruckPhase, TruckState};
