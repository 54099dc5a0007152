//! The day plan: fleet constants, truck loads, departure rules, and the
//! package special cases applied before any truck leaves.

use std::path::Path;

use pd_core::{PackageId, SimTime, TruckId};
use serde::{Deserialize, Serialize};

use crate::SimResult;

const fn hm(hours: u32, minutes: u32) -> SimTime {
    SimTime::from_hms(hours, minutes, 0)
}

/// When a truck leaves the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Departure {
    /// Fixed clock time.
    At { time: SimTime },
    /// `max(earliest, completion of donor)`.  The donor must be declared
    /// earlier in the plan.
    AfterTruck { donor: TruckId, earliest: SimTime },
}

/// One truck's load and departure rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckPlan {
    pub id:        TruckId,
    pub departure: Departure,
    /// Package ids in load order.
    pub packages:  Vec<PackageId>,
}

/// A destination rewrite.  Fields left `None` keep their loaded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCorrection {
    pub package: PackageId,
    /// Applied only when the snapshot is at or after this time; always
    /// applied when absent.
    #[serde(default)]
    pub effective_from: Option<SimTime>,
    pub street: String,
    #[serde(default)]
    pub city:   Option<String>,
    #[serde(default)]
    pub state:  Option<String>,
    #[serde(default)]
    pub zip:    Option<String>,
}

impl AddressCorrection {
    /// Whether this correction is known at `snapshot`.
    #[inline]
    pub fn applies_at(&self, snapshot: SimTime) -> bool {
        self.effective_from.is_none_or(|from| snapshot >= from)
    }
}

fn default_speed() -> f64 {
    18.0
}

fn default_capacity() -> usize {
    16
}

fn default_hub() -> String {
    "HUB".to_owned()
}

/// Everything about one simulated day except the input tables.
///
/// Trucks are simulated in the order they appear in `trucks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Miles per hour, shared by all trucks.
    #[serde(default = "default_speed")]
    pub speed_mph: f64,
    /// Packages per truck.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Street label of the depot row in the distance table.
    #[serde(default = "default_hub")]
    pub hub: String,
    /// Packages forced to `Delayed` at the start of the day.
    #[serde(default)]
    pub delayed: Vec<PackageId>,
    #[serde(default)]
    pub corrections: Vec<AddressCorrection>,
    pub trucks: Vec<TruckPlan>,
}

impl DayPlan {
    /// The built-in plan for the bundled 40-package day.
    pub fn standard() -> Self {
        let ids = |list: &[u32]| list.iter().copied().map(PackageId).collect::<Vec<_>>();
        Self {
            speed_mph: default_speed(),
            capacity:  default_capacity(),
            hub:       default_hub(),
            delayed:   ids(&[6, 25, 28, 32]),
            corrections: vec![
                AddressCorrection {
                    package:        PackageId(9),
                    effective_from: Some(hm(10, 20)),
                    street:         "410 S State St".to_owned(),
                    city:           Some("Salt Lake City".to_owned()),
                    state:          Some("UT".to_owned()),
                    zip:            Some("84111".to_owned()),
                },
                AddressCorrection {
                    package:        PackageId(25),
                    effective_from: None,
                    street:         "5383 S 900 East #104".to_owned(),
                    city:           None,
                    state:          None,
                    zip:            None,
                },
                AddressCorrection {
                    package:        PackageId(26),
                    effective_from: None,
                    street:         "5383 S 900 East #104".to_owned(),
                    city:           None,
                    state:          None,
                    zip:            None,
                },
            ],
            trucks: vec![
                TruckPlan {
                    id:        TruckId(1),
                    departure: Departure::At { time: hm(8, 0) },
                    packages:  ids(&[1, 13, 14, 15, 16, 20, 29, 30, 31, 34, 37, 40, 27, 33, 19]),
                },
                TruckPlan {
                    id:        TruckId(2),
                    departure: Departure::At { time: hm(9, 5) },
                    packages:  ids(&[3, 18, 36, 38, 6, 25, 28, 32, 35, 39]),
                },
                TruckPlan {
                    id:        TruckId(3),
                    departure: Departure::AfterTruck { donor: TruckId(1), earliest: hm(10, 20) },
                    packages:  ids(&[2, 4, 5, 7, 8, 9, 10, 11, 12, 17, 21, 22, 23, 24, 26]),
                },
            ],
        }
    }

    pub fn from_json_str(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn truck(&self, id: TruckId) -> Option<&TruckPlan> {
        self.trucks.iter().find(|t| t.id == id)
    }
}

impl Default for DayPlan {
    fn default() -> Self {
        Self::standard()
    }
}
