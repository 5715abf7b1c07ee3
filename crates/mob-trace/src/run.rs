//! End-to-end trace generation for one scenario.

use tracing::info;

use mob_core::{SimRng, WalkerId};
use mob_process::{EventMerger, RandomProcess};
use mob_topo::Scenario;
use mob_walk::PathGenerator;

use crate::{TraceError, TraceEvent, TraceResult, walk_events};

/// Generate a complete trace of `num_walkers` walker lifetimes.
///
/// `creations` supplies one inter-arrival process per entry point: stream
/// `i` times the creations at `scenario.entries[i]`.  Each creation event
/// spawns a walker (ids assigned sequentially in creation order) whose path
/// is walked to absorption and timed with speeds drawn from `speeds`.
///
/// The routing table is validated against the topology before anything is
/// generated, so malformed scenarios fail here rather than mid-walk.  The
/// returned events are stably sorted by time: walkers created at the same
/// instant keep creation order, and one walker's events stay ordered.
pub fn generate_trace(
    scenario: &Scenario,
    creations: Vec<Box<dyn RandomProcess>>,
    num_walkers: usize,
    speeds: &mut dyn RandomProcess,
    rng: SimRng,
) -> TraceResult<Vec<TraceEvent>> {
    if scenario.entries.is_empty() {
        return Err(TraceError::NoEntries);
    }
    if creations.len() != scenario.entries.len() {
        return Err(TraceError::EntryCountMismatch {
            entries: scenario.entries.len(),
            streams: creations.len(),
        });
    }
    scenario.routing.validate(&scenario.topology)?;

    let merger = EventMerger::new(creations)?;
    let mut walker_gen = PathGenerator::new(&scenario.routing, rng);

    let mut events = Vec::new();
    for (i, (time, stream)) in merger.events(num_walkers).enumerate() {
        let entry = scenario.entries[stream];
        let path = walker_gen.random_path(entry)?;
        let walker = WalkerId(i as u32);
        events.extend(walk_events(&scenario.topology, &path, walker, time, speeds)?);
    }

    // Stable sort: simultaneous events keep walker-creation order.
    events.sort_by(|a, b| a.time().total_cmp(&b.time()));

    info!(walkers = num_walkers, events = events.len(), "trace generated");
    Ok(events)
}
