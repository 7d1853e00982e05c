//! Configuration structs for history, debouncing, and snapping.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level engine configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub history: HistoryConfig,
    pub debounce: DebounceConfig,
    pub snap: SnapConfig,
}

/// Undo/redo history settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of commands kept on the undo stack before the oldest
    /// entry is evicted.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: 100 }
    }
}

/// Debounced command executor settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DebounceConfig {
    /// Quiet period after the last buffered command before a flush is due.
    /// Roughly one frame at 60 fps.
    #[serde(with = "duration_millis")]
    pub interval: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(16),
        }
    }
}

/// Magnetic snapping settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Maximum pointer distance, in pixels, at which a candidate attracts.
    pub threshold_px: f32,
    /// Spacing of the uniform time-grid candidates, in milliseconds.
    pub grid_interval_ms: i64,
    /// Candidate weight for grid lines.
    pub grid_weight: f32,
    /// Candidate weight for other clips' start/end edges.
    pub clip_edge_weight: f32,
    /// Candidate weight for the playhead position.
    pub playhead_weight: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            threshold_px: 8.0,
            grid_interval_ms: 1000,
            grid_weight: 0.3,
            clip_edge_weight: 0.8,
            playhead_weight: 0.6,
        }
    }
}

/// Serialize a `Duration` as integer milliseconds, matching the JSON the
/// web client exchanges.
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let ms = u64::deserialize(d)?;
        Ok(Duration::from_millis(ms))
    }
}
