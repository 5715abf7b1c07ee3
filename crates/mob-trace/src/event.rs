//! The trace event model.
//!
//! Three event kinds describe a walker's lifetime: it is created at an
//! entry point, moves through a sequence of waypoints, and is destroyed on
//! absorption.  Times are absolute simulation seconds.

use mob_core::{Position, WalkerId};

/// One event in a mobility trace.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// A walker appears at `pos`.
    Create { walker: WalkerId, time: f64, pos: Position },

    /// A walker starts moving towards `pos` so as to arrive at `time`,
    /// travelling at `speed`.
    Waypoint { walker: WalkerId, time: f64, pos: Position, speed: f64 },

    /// A walker is absorbed and leaves the simulation.
    Destroy { walker: WalkerId, time: f64 },
}

impl TraceEvent {
    pub fn walker(&self) -> WalkerId {
        match *self {
            TraceEvent::Create { walker, .. }
            | TraceEvent::Waypoint { walker, .. }
            | TraceEvent::Destroy { walker, .. } => walker,
        }
    }

    pub fn time(&self) -> f64 {
        match *self {
            TraceEvent::Create { time, .. }
            | TraceEvent::Waypoint { time, .. }
            | TraceEvent::Destroy { time, .. } => time,
        }
    }
}
