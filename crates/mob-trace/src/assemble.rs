//! Waypoint assembly: one walk path + timing → ordered trace events.

use mob_core::{NodeId, Position, WalkerId};
use mob_process::RandomProcess;
use mob_topo::Topology;

use crate::{TraceError, TraceEvent, TraceResult};

/// Turn a walk path into the walker's create/waypoint/destroy events.
///
/// The walker is created at `create_time` on the path's first node.  Each
/// subsequent node becomes a waypoint: a speed is drawn from `speeds` (must
/// be positive, else fatal) and the arrival time advances by street length
/// divided by speed.  The destroy event fires at the final arrival — which
/// is `create_time` itself for a single-node path.
///
/// Consecutive path nodes must be connected in `topo`; a validated routing
/// table guarantees that, so a missing street here is fatal.
pub fn walk_events(
    topo: &Topology,
    path: &[NodeId],
    walker: WalkerId,
    create_time: f64,
    speeds: &mut dyn RandomProcess,
) -> TraceResult<Vec<TraceEvent>> {
    let Some(&entry) = path.first() else {
        return Ok(Vec::new());
    };

    let mut events = Vec::with_capacity(path.len() + 1);
    events.push(TraceEvent::Create {
        walker,
        time: create_time,
        pos: position(topo, entry)?,
    });

    let mut time = create_time;
    for hop in path.windows(2) {
        let (a, b) = (hop[0], hop[1]);
        let street = topo
            .street_between(a, b)
            .ok_or(TraceError::MissingStreet { a, b })?;
        let speed = speeds.generate();
        if !speed.is_finite() || speed <= 0.0 {
            return Err(TraceError::InvalidSpeed { walker, speed });
        }
        time += street.length() / speed;
        events.push(TraceEvent::Waypoint {
            walker,
            time,
            pos: position(topo, b)?,
            speed,
        });
    }

    events.push(TraceEvent::Destroy { walker, time });
    Ok(events)
}

fn position(topo: &Topology, node: NodeId) -> TraceResult<Position> {
    topo.position(node).ok_or(TraceError::UnknownPathNode(node))
}
