//! `pd-sim`: runs one delivery day up to a snapshot time.
//!
//! # Day loop
//!
//! ```text
//! ① Special cases:  mark the plan's delayed packages; apply the address
//!                    corrections already known at the snapshot.
//! ② Load:           every truck takes its listed packages (capacity-checked).
//! ③ Trucks, in plan order:
//!      resolve departure (fixed, or max(earliest, donor's return))
//!      departure ≤ snapshot → depart and route nearest-neighbor until the
//!                             truck is empty or its clock reaches the snapshot
//!      otherwise            → stay held at the hub
//! ```
//!
//! An emptied truck always drives back to the hub, even past the snapshot;
//! its arrival there is the completion time a dependent truck waits on.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pd_core::parse_snapshot;
//! use pd_sim::{Dataset, DayPlan, run_simulation};
//!
//! let data = Dataset::load("data/packages.csv".as_ref(), "data/distances.csv".as_ref())?;
//! let report = run_simulation(&data, &DayPlan::standard(), parse_snapshot("10:25")?)?;
//! ```

pub mod builder;
pub mod dataset;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod observer;
pub mod plan;
pub mod query;


pub use builder::SimBuilder;
pub use dataset::Dataset;
pub use dispatch::{Sim, SimOutcome};
pub use engine::RouteEngine;
pub use error::{SimError, SimResult};
pub use observer::{LegLog, NoopObserver, SimObserver};
pub use plan::{AddressCorrection, DayPlan, Departure, TruckPlan};
pub use query::{lookup_package, run_simulation, run_simulation_with};
