//! Snapshot queries.  Each call re-runs the whole day from the loaded data.

use pd_core::{PackageId, SimTime};
use pd_report::{PackageView, SnapshotReport};

use crate::{Dataset, DayPlan, NoopObserver, SimBuilder, SimObserver, SimResult};

/// State of every package and truck at `snapshot`.
pub fn run_simulation(dataset: &Dataset, plan: &DayPlan, snapshot: SimTime) -> SimResult<SnapshotReport> {
    run_simulation_with(dataset, plan, snapshot, &mut NoopObserver)
}

/// [`run_simulation`] with an observer attached.
pub fn run_simulation_with(
    dataset: &Dataset,
    plan: &DayPlan,
    snapshot: SimTime,
    observer: &mut dyn SimObserver,
) -> SimResult<SnapshotReport> {
    let outcome = SimBuilder::new(plan, &dataset.distances, dataset.packages.clone())
        .snapshot(snapshot)
        .build()?
        .run(observer)?;
    Ok(outcome.report())
}

/// One package at `snapshot`, or `None` if the id is not in the dataset.
pub fn lookup_package(
    dataset: &Dataset,
    plan: &DayPlan,
    snapshot: SimTime,
    id: PackageId,
) -> SimResult<Option<PackageView>> {
    let mut report = run_simulation(dataset, plan, snapshot)?;
    Ok(report.packages.remove(&id))
}
