//! Core identifier and category types with newtype pattern for type safety.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a track. Opaque string key into the track collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a clip.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipId(pub String);

impl ClipId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a source asset referenced by a clip.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Media category of a track. Every track holds clips of exactly one kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Video,
    Audio,
    Text,
    Caption,
    Stickers,
}

impl TrackKind {
    /// All kinds, in band-table order (ascending index bands).
    pub const ALL: [TrackKind; 5] = [
        TrackKind::Text,
        TrackKind::Stickers,
        TrackKind::Video,
        TrackKind::Caption,
        TrackKind::Audio,
    ];

    /// Minimum clip duration for this kind, in milliseconds.
    ///
    /// The persistence layer backfills rows whose stored duration is zero or
    /// negative to this minimum before they re-enter the engine.
    pub fn min_clip_duration_ms(self) -> i64 {
        match self {
            TrackKind::Video | TrackKind::Audio => 1000,
            TrackKind::Text | TrackKind::Caption | TrackKind::Stickers => 2000,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrackKind::Video => "video",
            TrackKind::Audio => "audio",
            TrackKind::Text => "text",
            TrackKind::Caption => "caption",
            TrackKind::Stickers => "stickers",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display() {
        assert_eq!(TrackId::new("t1").to_string(), "t1");
        assert_eq!(ClipId::new("c1").to_string(), "c1");
        assert_eq!(AssetId::new("a1").to_string(), "a1");
    }

    #[test]
    fn track_kind_serde_lowercase() {
        let json = serde_json::to_string(&TrackKind::Stickers).unwrap();
        assert_eq!(json, "\"stickers\"");
        let kind: TrackKind = serde_json::from_str("\"caption\"").unwrap();
        assert_eq!(kind, TrackKind::Caption);
    }

    #[test]
    fn min_clip_durations_positive() {
        for kind in TrackKind::ALL {
            assert!(kind.min_clip_duration_ms() > 0);
        }
    }
}
