//! Time-ordered merging of parallel event streams.
//!
//! Several independent [`RandomProcess`] instances (heterogeneous variants
//! allowed) are merged into one globally ordered event sequence: each stream
//! keeps one scheduled-time slot, the minimum slot fires next, and the fired
//! stream's slot advances by a fresh inter-arrival draw from that stream.
//!
//! Time starts at 0, so each stream's first inter-arrival *is* its first
//! absolute event time.  Ties are broken by the lowest stream index;
//! downstream traces are sensitive to this, so the tie-break is part of the
//! contract.

use crate::RandomProcess;
use crate::{ProcessError, ProcessResult};

/// Merges an ordered list of event streams.
///
/// Consumed by [`events`](Self::events), which yields the merged sequence
/// lazily.  The sequence is finite and non-restartable: stream state advances
/// as it is consumed.
pub struct EventMerger {
    streams: Vec<Box<dyn RandomProcess>>,
}

impl EventMerger {
    /// Fails if `streams` is empty.
    pub fn new(streams: Vec<Box<dyn RandomProcess>>) -> ProcessResult<Self> {
        if streams.is_empty() {
            return Err(ProcessError::NoStreams);
        }
        Ok(Self { streams })
    }

    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Consume the merger and yield `num_events` merged events as
    /// `(absolute_time, stream_index)` pairs in non-decreasing time order.
    ///
    /// Each stream's slot is seeded with one `generate()` call here; the
    /// rest of the work happens lazily in the iterator.
    pub fn events(mut self, num_events: usize) -> MergedEvents {
        let slots: Vec<f64> = self.streams.iter_mut().map(|s| s.generate()).collect();
        MergedEvents { streams: self.streams, slots, remaining: num_events }
    }
}

/// Lazy iterator over a merged event sequence.  See [`EventMerger::events`].
pub struct MergedEvents {
    streams: Vec<Box<dyn RandomProcess>>,
    /// Next scheduled absolute time per stream.
    slots: Vec<f64>,
    remaining: usize,
}

impl Iterator for MergedEvents {
    type Item = (f64, usize);

    fn next(&mut self) -> Option<(f64, usize)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Strict `<` keeps the first index on ties.
        let mut winner = 0;
        for i in 1..self.slots.len() {
            if self.slots[i] < self.slots[winner] {
                winner = i;
            }
        }
        let time = self.slots[winner];
        self.slots[winner] += self.streams[winner].generate();
        Some((time, winner))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MergedEvents {}
