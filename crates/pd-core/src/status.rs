//! Package lifecycle status shared by the registry, engine, and reporter.

/// Where a package is in its delivery lifecycle.
///
/// ```text
/// AtHub ──load──▶ Loaded ──leg completes──▶ Delivered
///   │               └──snapshot mid-leg──▶ EnRoute
///   └──delayed at time zero──▶ Delayed ──truck departs──▶ Loaded
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackageStatus {
    /// Sitting at the hub, not yet assigned to a truck.
    #[default]
    AtHub,
    /// On a truck's onboard set.
    Loaded,
    /// The truck is driving toward this package's address at the snapshot.
    EnRoute,
    /// Not available for departure (late flight, wrong address, …).
    Delayed,
    /// Dropped off; `delivery_time` is set.
    Delivered,
}

impl PackageStatus {
    #[inline]
    pub fn is_delivered(self) -> bool {
        matches!(self, PackageStatus::Delivered)
    }

    /// Human-readable label for console and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            PackageStatus::AtHub     => "At Hub",
            PackageStatus::Loaded    => "Loaded",
            PackageStatus::EnRoute   => "En Route",
            PackageStatus::Delayed   => "Delayed",
            PackageStatus::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
