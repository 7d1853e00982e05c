//! Timeline document types — web-client compatible JSON format.
//!
//! These shapes match the JSON the web editor stores, enabling cross-format
//! compatibility between the native engine and the browser app. Field
//! mapping is 1:1 with the engine's entity model; only the casing differs.

use cl_common::{AssetId, ClipId, TrackId, TrackKind};
use cl_engine::{Clip, TimelineState, Track};
use serde::{Deserialize, Serialize};

/// Current document format version.
pub const DOC_VERSION: u32 = 1;

/// Top-level timeline document as exchanged with the persistence layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDoc {
    /// Document format version (stored as `1`).
    pub version: u32,
    /// Owning project identifier.
    pub project_id: String,
    /// Human-readable project name.
    pub name: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-modified timestamp.
    pub updated_at: String,
    /// All tracks in the timeline.
    pub tracks: Vec<TrackRecord>,
    /// All clips, keyed to tracks by `trackId`.
    pub clips: Vec<ClipRecord>,
}

impl TimelineDoc {
    /// Create a new empty document.
    pub fn new(project_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = current_iso_timestamp();
        Self {
            version: DOC_VERSION,
            project_id: project_id.into(),
            name: name.into(),
            created_at: now.clone(),
            updated_at: now,
            tracks: Vec::new(),
            clips: Vec::new(),
        }
    }

    /// Capture the engine's current collection into a document.
    pub fn from_state(
        project_id: impl Into<String>,
        name: impl Into<String>,
        state: &TimelineState,
    ) -> Self {
        let mut doc = Self::new(project_id, name);
        doc.tracks = state.tracks.iter().map(TrackRecord::from_entity).collect();
        doc.clips = state.clips.iter().map(ClipRecord::from_entity).collect();
        doc
    }

    /// Convert into the engine's collection shape, typically fed to
    /// `History::reset` after load.
    pub fn into_state(self) -> TimelineState {
        TimelineState {
            tracks: self.tracks.into_iter().map(TrackRecord::into_entity).collect(),
            clips: self.clips.into_iter().map(ClipRecord::into_entity).collect(),
        }
    }
}

/// A stored track row.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub id: String,
    pub project_id: String,
    pub index: u32,
    #[serde(rename = "type")]
    pub kind: TrackKind,
    pub created_at: String,
}

impl TrackRecord {
    fn from_entity(track: &Track) -> Self {
        Self {
            id: track.id.0.clone(),
            project_id: track.project_id.clone(),
            index: track.index,
            kind: track.kind,
            created_at: track.created_at.clone(),
        }
    }

    fn into_entity(self) -> Track {
        Track {
            id: TrackId::new(self.id),
            project_id: self.project_id,
            index: self.index,
            kind: self.kind,
            created_at: self.created_at,
        }
    }
}

/// A stored clip row.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRecord {
    pub id: String,
    pub track_id: String,
    pub asset_id: String,
    #[serde(rename = "type")]
    pub kind: TrackKind,
    pub source_start_ms: i64,
    pub source_end_ms: i64,
    pub timeline_start_ms: i64,
    pub timeline_end_ms: i64,
    pub asset_duration_ms: i64,
    pub volume: f64,
    pub speed: f64,
    /// Opaque per-kind payload, preserved verbatim.
    #[serde(default)]
    pub properties: serde_json::Value,
    pub created_at: String,
}

impl ClipRecord {
    fn from_entity(clip: &Clip) -> Self {
        Self {
            id: clip.id.0.clone(),
            track_id: clip.track_id.0.clone(),
            asset_id: clip.asset_id.0.clone(),
            kind: clip.kind,
            source_start_ms: clip.source_start_ms,
            source_end_ms: clip.source_end_ms,
            timeline_start_ms: clip.timeline_start_ms,
            timeline_end_ms: clip.timeline_end_ms,
            asset_duration_ms: clip.asset_duration_ms,
            volume: clip.volume,
            speed: clip.speed,
            properties: clip.properties.clone(),
            created_at: clip.created_at.clone(),
        }
    }

    fn into_entity(self) -> Clip {
        Clip {
            id: ClipId::new(self.id),
            track_id: TrackId::new(self.track_id),
            asset_id: AssetId::new(self.asset_id),
            kind: self.kind,
            source_start_ms: self.source_start_ms,
            source_end_ms: self.source_end_ms,
            timeline_start_ms: self.timeline_start_ms,
            timeline_end_ms: self.timeline_end_ms,
            asset_duration_ms: self.asset_duration_ms,
            volume: self.volume,
            speed: self.speed,
            properties: self.properties,
            created_at: self.created_at,
        }
    }
}

/// Update the `updated_at` field to the current timestamp.
pub fn touch_modified(doc: &mut TimelineDoc) {
    doc.updated_at = current_iso_timestamp();
}

/// Generate a current ISO 8601 timestamp string.
///
/// UTC-only format without an external time crate; accurate for dates from
/// 1970 to ~2099.
pub(crate) fn current_iso_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let epoch = dur.as_secs();

    let sec = epoch % 60;
    let min = (epoch / 60) % 60;
    let hour = (epoch / 3600) % 24;
    let mut days = epoch / 86400;

    let mut year = 1970u64;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if days < days_in_year {
            break;
        }
        days -= days_in_year;
        year += 1;
    }

    let month_lengths: [u64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };
    let mut month = 1u64;
    for len in month_lengths {
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }
    let day = days + 1;

    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{min:02}:{sec:02}Z")
}

fn is_leap_year(y: u64) -> bool {
    (y % 4 == 0 && y % 100 != 0) || y % 400 == 0
}
