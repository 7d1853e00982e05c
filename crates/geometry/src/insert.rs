//! Insertion-point search: where can a clip of a given duration land?

use cl_common::TrackId;
use cl_engine::TimelineState;

use crate::collision::has_collision;
use crate::gap::sorted_track_clips;

/// Alternative placements for a clip that cannot take its preferred start,
/// in priority order:
///
/// 1. Immediately after the track's last clip.
/// 2. The first gap (left to right) large enough to fit.
/// 3. The track start, if there is room before the first clip.
///
/// Duplicates are dropped. Advisory only: callers pick or ignore freely.
pub fn insertion_alternatives(
    state: &TimelineState,
    track_id: &TrackId,
    duration_ms: i64,
) -> Vec<i64> {
    let clips = sorted_track_clips(state, track_id);
    let mut proposals = Vec::new();

    if let Some(last) = clips.last() {
        proposals.push(last.timeline_end_ms);
    }

    for pair in clips.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let gap = next.timeline_start_ms - prev.timeline_end_ms;
        if gap >= duration_ms {
            proposals.push(prev.timeline_end_ms);
            break;
        }
    }

    if let Some(first) = clips.first() {
        if first.timeline_start_ms >= duration_ms {
            proposals.push(0);
        }
    }

    proposals.dedup();
    proposals
}

/// The preferred start if it is collision-free, otherwise the first
/// alternative placement, or `None` when the track offers nowhere to fit
/// (only possible on an empty proposal list, i.e. an empty track never
/// rejects).
pub fn find_insertion_point(
    state: &TimelineState,
    track_id: &TrackId,
    preferred_start_ms: i64,
    duration_ms: i64,
) -> Option<i64> {
    if !has_collision(
        state,
        track_id,
        preferred_start_ms,
        preferred_start_ms + duration_ms,
        None,
    ) {
        return Some(preferred_start_ms);
    }
    insertion_alternatives(state, track_id, duration_ms)
        .into_iter()
        .next()
}
