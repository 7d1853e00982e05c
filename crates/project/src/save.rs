//! Serializing and writing timeline documents.

use std::path::Path;

use tracing::debug;

use crate::error::ProjectResult;
use crate::types::{touch_modified, TimelineDoc};

/// Serialize a document to compact JSON.
pub fn to_json_string(doc: &TimelineDoc) -> ProjectResult<String> {
    Ok(serde_json::to_string(doc)?)
}

/// Serialize a document to pretty-printed JSON.
pub fn to_json_string_pretty(doc: &TimelineDoc) -> ProjectResult<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Write a document to disk, stamping `updated_at` first.
pub fn save_project(path: impl AsRef<Path>, doc: &mut TimelineDoc) -> ProjectResult<()> {
    let path = path.as_ref();
    touch_modified(doc);
    let json = to_json_string_pretty(doc)?;
    std::fs::write(path, json)?;
    debug!(
        path = %path.display(),
        tracks = doc.tracks.len(),
        clips = doc.clips.len(),
        "saved timeline document"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::load_project;

    #[test]
    fn save_stamps_updated_at() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.json");
        let mut doc = TimelineDoc::new("proj_1", "Test");
        doc.updated_at = "2020-01-01T00:00:00Z".into();
        save_project(&path, &mut doc).unwrap();
        assert_ne!(doc.updated_at, "2020-01-01T00:00:00Z");

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.updated_at, doc.updated_at);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.json");
        let mut doc = TimelineDoc::new("proj_1", "Round trip");
        save_project(&path, &mut doc).unwrap();
        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.project_id, doc.project_id);
        assert_eq!(loaded.name, doc.name);
    }
}
