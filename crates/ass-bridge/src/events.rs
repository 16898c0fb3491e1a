//! Retiring expired events from an engine track

use crate::engine::TimedEvent;

/// Remove every leading event that ended before `watermark`.
///
/// The expired run is counted against the array as it was on entry, then
/// removed in a single compaction that keeps the survivors at the front in
/// their original order. Each removed event is dropped here, releasing its
/// engine payload exactly once before its slot is reused. Returns how many
/// events were removed.
///
/// Tracks keep their events ordered by start time, so only a leading run
/// can expire; a later event that already ended is kept until everything
/// before it expires too. An event ending exactly at `watermark` is kept.
pub fn prune_expired<E: TimedEvent>(events: &mut Vec<E>, watermark: i64) -> usize {
    let expired = events
        .iter()
        .take_while(|event| event.end() < watermark)
        .count();
    if expired > 0 {
        events.drain(..expired);
    }
    expired
}
