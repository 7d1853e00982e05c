//! Loading and validating timeline documents.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ProjectError, ProjectResult};
use crate::types::{TimelineDoc, DOC_VERSION};

/// Parse a timeline document from a JSON string.
///
/// Rejects documents with an unknown `version` before looking at anything
/// else, then validates and normalizes the parsed document.
pub fn from_json_string(json: &str) -> ProjectResult<TimelineDoc> {
    let probe: serde_json::Value = serde_json::from_str(json)?;
    let version = probe
        .get("version")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| ProjectError::InvalidDocument {
            reason: "missing version field".to_string(),
        })?;
    if version as u32 != DOC_VERSION {
        return Err(ProjectError::UnsupportedVersion {
            version: version as u32,
        });
    }

    let mut doc: TimelineDoc = serde_json::from_value(probe)?;
    validate_doc(&doc)?;
    normalize_doc(&mut doc);
    Ok(doc)
}

/// Load a timeline document from disk.
pub fn load_project(path: impl AsRef<Path>) -> ProjectResult<TimelineDoc> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ProjectError::NotFound {
            path: path.display().to_string(),
        });
    }
    let json = std::fs::read_to_string(path)?;
    let doc = from_json_string(&json)?;
    debug!(
        path = %path.display(),
        tracks = doc.tracks.len(),
        clips = doc.clips.len(),
        "loaded timeline document"
    );
    Ok(doc)
}

/// Structural checks beyond what serde enforces.
fn validate_doc(doc: &TimelineDoc) -> ProjectResult<()> {
    if doc.project_id.is_empty() {
        return Err(ProjectError::InvalidDocument {
            reason: "empty project id".to_string(),
        });
    }
    for clip in &doc.clips {
        if !doc.tracks.iter().any(|t| t.id == clip.track_id) {
            return Err(ProjectError::InvalidDocument {
                reason: format!("clip {} references unknown track {}", clip.id, clip.track_id),
            });
        }
    }
    Ok(())
}

/// Repair rows that older clients wrote with degenerate geometry.
///
/// A clip whose timeline interval is empty or inverted gets its end pushed
/// out to the minimum duration for its kind. The row is kept rather than
/// dropped so no user content is lost on load.
fn normalize_doc(doc: &mut TimelineDoc) {
    for clip in &mut doc.clips {
        if clip.timeline_end_ms <= clip.timeline_start_ms {
            let fixed_end = clip.timeline_start_ms + clip.kind.min_clip_duration_ms();
            warn!(
                clip_id = %clip.id,
                start_ms = clip.timeline_start_ms,
                end_ms = clip.timeline_end_ms,
                fixed_end_ms = fixed_end,
                "backfilled degenerate clip duration"
            );
            clip.timeline_end_ms = fixed_end;
        }
    }
}
