//! Nearest-neighbor routing for a single truck.

use pd_core::{LocationId, PackageId, SimTime};
use pd_distance::DistanceTable;
use pd_fleet::{Leg, LegKind, TruckPhase, TruckState};
use pd_registry::PackageRegistry;
use tracing::{debug, warn};

use crate::{SimError, SimObserver, SimResult};

/// Drives one departed truck until it runs out of packages or reaches the
/// snapshot.
pub struct RouteEngine<'a> {
    distances: &'a DistanceTable,
    hub:       &'a str,
}

impl<'a> RouteEngine<'a> {
    pub fn new(distances: &'a DistanceTable, hub: &'a str) -> Self {
        Self { distances, hub }
    }

    /// The onboard package closest to `from`, ties going to the lowest id.
    /// Packages whose street is not in the table are skipped.
    ///
    /// Returns `None` only when no onboard package is routable.
    pub fn nearest(
        &self,
        truck: &TruckState,
        registry: &PackageRegistry,
        from: LocationId,
    ) -> SimResult<Option<(PackageId, LocationId, f64)>> {
        let mut best: Option<(PackageId, LocationId, f64)> = None;
        for &id in truck.onboard() {
            let package = registry.require(id)?;
            let Some(dest) = self.distances.index_of(&package.address.street) else {
                continue;
            };
            let miles = self.distances.distance_between(from, dest);
            let closer = match best {
                None => true,
                Some((best_id, _, best_miles)) => {
                    miles.total_cmp(&best_miles).then(id.cmp(&best_id)).is_lt()
                }
            };
            if closer {
                best = Some((id, dest, miles));
            }
        }
        Ok(best)
    }

    /// Run `truck` forward from its current clock.
    ///
    /// The truck must already have departed.  On return it is either
    /// `Complete` (back at the hub) or `EnRoute` with its clock at
    /// `snapshot`.
    ///
    /// # Errors
    ///
    /// [`SimError::UnknownAddress`] when every package left aboard goes to a
    /// street the distance table does not know.
    pub fn run_truck(
        &self,
        truck: &mut TruckState,
        registry: &mut PackageRegistry,
        snapshot: SimTime,
        observer: &mut dyn SimObserver,
    ) -> SimResult<()> {
        let departed_at = truck.clock;
        let mut here = self.distances.require(&truck.location)?;

        while !truck.is_empty() {
            if truck.clock >= snapshot {
                return Ok(());
            }

            let Some((package, dest, distance)) = self.nearest(truck, registry, here)? else {
                let Some(&package) = truck.onboard().first() else {
                    break;
                };
                let street = registry.require(package)?.address.street.clone();
                warn!(truck = %truck.id, package = %package, street = %street, "unroutable package");
                return Err(SimError::UnknownAddress { truck: truck.id, package, street });
            };

            let depart = truck.clock;
            let duration = truck.travel_time(distance);
            let arrival = depart + duration;
            let from = truck.location.clone();
            let to = self.distances.address(dest).unwrap_or_default().to_owned();

            if arrival <= snapshot {
                truck.arrive(&to, distance, arrival);
                truck.unload(package);
                registry.require_mut(package)?.mark_delivered(arrival);
                here = dest;
                debug!(truck = %truck.id, package = %package, miles = distance, at = %arrival, "delivered");
                observer.on_leg(&Leg {
                    truck: truck.id,
                    kind: LegKind::Delivery,
                    from,
                    to,
                    package: Some(package),
                    depart,
                    end: arrival,
                    distance,
                    miles: distance,
                });
            } else {
                let fraction = snapshot.since(depart).fraction_of(duration);
                let miles = fraction * distance;
                truck.advance_partial(miles, snapshot);
                registry.require_mut(package)?.mark_en_route(departed_at);
                debug!(truck = %truck.id, package = %package, fraction, "stopped mid-leg");
                observer.on_leg(&Leg {
                    truck: truck.id,
                    kind: LegKind::Partial { fraction },
                    from,
                    to,
                    package: Some(package),
                    depart,
                    end: snapshot,
                    distance,
                    miles,
                });
                return Ok(());
            }
        }

        self.return_to_hub(truck, here, observer)
    }

    /// The closing leg.  Driven in full regardless of the snapshot.
    fn return_to_hub(
        &self,
        truck: &mut TruckState,
        here: LocationId,
        observer: &mut dyn SimObserver,
    ) -> SimResult<()> {
        let hub = self.distances.require(self.hub)?;
        let distance = self.distances.distance_between(here, hub);
        let depart = truck.clock;
        let arrival = depart + truck.travel_time(distance);
        let from = truck.location.clone();

        truck.return_to(self.hub, distance, arrival);
        debug_assert_eq!(truck.phase, TruckPhase::Complete);
        debug!(truck = %truck.id, miles = distance, at = %arrival, "returned to hub");
        observer.on_return(&Leg {
            truck: truck.id,
            kind: LegKind::Return,
            from,
            to: self.hub.to_owned(),
            package: None,
            depart,
            end: arrival,
            distance,
            miles: distance,
        });
        Ok(())
    }
}
