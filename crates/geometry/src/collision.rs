//! Per-track collision queries over half-open `[start, end)` intervals.
//!
//! Collision checks are advisory: the engine permits temporary overlap
//! during interactive dragging, and resolving it before committing is the
//! caller's responsibility.

use cl_common::{ClipId, TrackId};
use cl_engine::{Clip, TimelineState};

/// Half-open interval overlap: a clip ending exactly where another begins
/// does not collide.
pub fn intervals_overlap(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether two clips occupy overlapping time on the same track.
pub fn clips_collide(a: &Clip, b: &Clip) -> bool {
    a.track_id == b.track_id
        && intervals_overlap(
            a.timeline_start_ms,
            a.timeline_end_ms,
            b.timeline_start_ms,
            b.timeline_end_ms,
        )
}

/// All clips on `track_id` overlapping `[start_ms, end_ms)`, excluding the
/// clip named by `exclude` (the one being dragged).
pub fn find_collisions<'a>(
    state: &'a TimelineState,
    track_id: &TrackId,
    start_ms: i64,
    end_ms: i64,
    exclude: Option<&ClipId>,
) -> Vec<&'a Clip> {
    state
        .clips_on_track(track_id)
        .filter(|c| exclude != Some(&c.id))
        .filter(|c| intervals_overlap(start_ms, end_ms, c.timeline_start_ms, c.timeline_end_ms))
        .collect()
}

/// Whether any clip on `track_id` overlaps `[start_ms, end_ms)`.
pub fn has_collision(
    state: &TimelineState,
    track_id: &TrackId,
    start_ms: i64,
    end_ms: i64,
    exclude: Option<&ClipId>,
) -> bool {
    !find_collisions(state, track_id, start_ms, end_ms, exclude).is_empty()
}
