//! Gap detection and gap closure.

use cl_common::TrackId;
use cl_engine::{Clip, Command, TimelineState};

/// An empty interval between two consecutive clips on a track.
#[derive(Clone, Debug, PartialEq)]
pub struct Gap {
    pub track_id: TrackId,
    pub start_ms: i64,
    pub end_ms: i64,
}

impl Gap {
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }
}

/// Clips on the given track, sorted ascending by timeline start.
pub(crate) fn sorted_track_clips<'a>(state: &'a TimelineState, track_id: &TrackId) -> Vec<&'a Clip> {
    let mut clips: Vec<&Clip> = state.clips_on_track(track_id).collect();
    clips.sort_by_key(|c| c.timeline_start_ms);
    clips
}

/// All gaps between consecutive clips on a track, left to right.
///
/// A gap exists between consecutive clips when `next.start > prev.end`.
/// Leading space before the first clip is not reported as a gap.
pub fn detect_gaps(state: &TimelineState, track_id: &TrackId) -> Vec<Gap> {
    let clips = sorted_track_clips(state, track_id);
    let mut gaps = Vec::new();
    for pair in clips.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next.timeline_start_ms > prev.timeline_end_ms {
            gaps.push(Gap {
                track_id: track_id.clone(),
                start_ms: prev.timeline_end_ms,
                end_ms: next.timeline_start_ms,
            });
        }
    }
    gaps
}

/// Commands closing the hole a deleted clip leaves behind.
///
/// Every clip on the deleted clip's track whose start is at or after the
/// deleted clip's end shifts left by the deleted duration — but never below
/// zero; a clip that would cross zero shifts only as far as zero, keeping
/// its duration.
pub fn close_gap_commands(state: &TimelineState, deleted: &Clip) -> Vec<Command> {
    let shift = deleted.duration_ms();
    state
        .clips_on_track(&deleted.track_id)
        .filter(|c| c.id != deleted.id && c.timeline_start_ms >= deleted.timeline_end_ms)
        .map(|c| {
            let new_start = (c.timeline_start_ms - shift).max(0);
            let moved_by = c.timeline_start_ms - new_start;
            let mut after = c.clone();
            after.timeline_start_ms = new_start;
            after.timeline_end_ms = c.timeline_end_ms - moved_by;
            Command::UpdateClip {
                before: c.clone(),
                after,
            }
        })
        .collect()
}
