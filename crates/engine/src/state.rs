//! Timeline entity model: tracks, clips, and the snapshot collection.
//!
//! The engine holds these as transient in-memory collections owned by the
//! project-level timeline document. It never owns persistence; callers pass
//! snapshots in and read snapshots out.

use cl_common::{AssetId, ClipId, TrackId, TrackKind};
use serde::{Deserialize, Serialize};

/// An ordered lane holding clips of one media category.
///
/// Within a project, track indices form a contiguous set `{0..n-1}` after
/// any structural mutation. `apply` maintains this; callers may pass any
/// index as a sort key and must not rely on it surviving verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier.
    pub id: TrackId,
    /// Owning project.
    pub project_id: String,
    /// Position in the track stack (0 = top band slot after renormalization).
    pub index: u32,
    /// Media category of the clips this track holds.
    pub kind: TrackKind,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// A placed interval of a source asset on a track.
///
/// `timeline_end_ms > timeline_start_ms` is a caller precondition: the
/// engine does not reject violations, but downstream consumers require it.
/// Callers normalize durations before constructing an `AddClip` command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Unique clip identifier.
    pub id: ClipId,
    /// Track this clip sits on. May momentarily dangle while commands are
    /// replayed against stale snapshots; the engine tolerates that.
    pub track_id: TrackId,
    /// Source asset backing this clip.
    pub asset_id: AssetId,
    /// Media category (matches the owning track's kind).
    pub kind: TrackKind,
    /// Source in-point in milliseconds.
    pub source_start_ms: i64,
    /// Source out-point in milliseconds.
    pub source_end_ms: i64,
    /// Start position on the timeline in milliseconds (inclusive).
    pub timeline_start_ms: i64,
    /// End position on the timeline in milliseconds (exclusive).
    pub timeline_end_ms: i64,
    /// Full duration of the backing asset in milliseconds.
    pub asset_duration_ms: i64,
    /// Audio volume (1.0 = unity).
    pub volume: f64,
    /// Playback speed factor (1.0 = realtime).
    pub speed: f64,
    /// Opaque per-kind payload (text styling, sticker metadata, ...).
    /// The engine carries it untouched.
    pub properties: serde_json::Value,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

impl Clip {
    /// Duration of this clip on the timeline in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        self.timeline_end_ms - self.timeline_start_ms
    }

    /// Duration of the source range used by this clip in milliseconds.
    pub fn source_duration_ms(&self) -> i64 {
        self.source_end_ms - self.source_start_ms
    }
}

/// Flat snapshot of the editable timeline: all tracks and all clips.
///
/// Clips reference tracks by id rather than nesting inside them, keeping
/// lookups cheap and avoiding ownership cycles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineState {
    pub tracks: Vec<Track>,
    pub clips: Vec<Clip>,
}

impl TimelineState {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a track by id.
    pub fn find_track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Find a clip by id.
    pub fn find_clip(&self, id: &ClipId) -> Option<&Clip> {
        self.clips.iter().find(|c| &c.id == id)
    }

    /// All clips on the given track, in collection order.
    ///
    /// The id is cloned into the iterator so callers can pass a short-lived
    /// borrow and still hold the results as long as `self`.
    pub fn clips_on_track<'a>(&'a self, track_id: &TrackId) -> impl Iterator<Item = &'a Clip> + 'a {
        let track_id = track_id.clone();
        self.clips.iter().filter(move |c| c.track_id == track_id)
    }

    /// Total number of clips across all tracks.
    pub fn total_clips(&self) -> usize {
        self.clips.len()
    }

    /// Latest clip end time across the whole timeline, in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        self.clips
            .iter()
            .map(|c| c.timeline_end_ms)
            .max()
            .unwrap_or(0)
    }
}
