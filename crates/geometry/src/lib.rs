//! `cl-geometry` — Interval geometry for the Cutline timeline engine.
//!
//! Pure query functions over read-only [`TimelineState`](cl_engine::TimelineState)
//! snapshots supporting interactive clip manipulation:
//!
//! - **Collision detection**: half-open `[start, end)` overlap per track
//! - **Gap detection & closure**: find holes, pull later clips left
//! - **Ripple edit**: propagate a clip's shift to its track siblings
//! - **Magnetic snapping**: grid / clip-edge / playhead candidates in pixel space
//! - **Insertion search**: where a clip of a given duration can land
//!
//! Nothing here mutates state. Functions that effect changes return
//! [`Command`](cl_engine::Command)s for the caller to dispatch, so every
//! geometric operation stays a single undoable step.

pub mod collision;
pub mod gap;
pub mod insert;
pub mod ripple;
pub mod snap;

// Re-export primary API
pub use collision::{clips_collide, find_collisions, has_collision, intervals_overlap};
pub use gap::{close_gap_commands, detect_gaps, Gap};
pub use insert::{find_insertion_point, insertion_alternatives};
pub use ripple::{ripple_edit, RippleMode};
pub use snap::{collect_candidates, resolve, snap_position, SnapCandidate, SnapSource};

#[cfg(test)]
pub(crate) mod test_support {
    use cl_common::{AssetId, ClipId, TrackId, TrackKind};
    use cl_engine::{Clip, TimelineState, Track};

    pub fn make_clip(id: &str, track_id: &str, start_ms: i64, end_ms: i64) -> Clip {
        Clip {
            id: ClipId::new(id),
            track_id: TrackId::new(track_id),
            asset_id: AssetId::new("asset_1"),
            kind: TrackKind::Video,
            source_start_ms: 0,
            source_end_ms: end_ms - start_ms,
            timeline_start_ms: start_ms,
            timeline_end_ms: end_ms,
            asset_duration_ms: 120_000,
            volume: 1.0,
            speed: 1.0,
            properties: serde_json::Value::Null,
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    /// State holding the given clips plus one track per distinct track id.
    pub fn state_with_clips(clips: Vec<Clip>) -> TimelineState {
        let mut track_ids: Vec<TrackId> = Vec::new();
        for clip in &clips {
            if !track_ids.contains(&clip.track_id) {
                track_ids.push(clip.track_id.clone());
            }
        }
        let tracks = track_ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| Track {
                id,
                project_id: "proj_1".to_string(),
                index: i as u32,
                kind: TrackKind::Video,
                created_at: "2026-01-01T00:00:00Z".to_string(),
            })
            .collect();
        TimelineState { tracks, clips }
    }
}
