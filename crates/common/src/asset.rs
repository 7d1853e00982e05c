//! Asset descriptors supplied by the media library and the AI clip generator.
//!
//! The engine never validates asset content; these shapes only carry the
//! information needed to build clip-insertion commands.

use serde::{Deserialize, Serialize};

use crate::types::AssetId;

/// Default timeline duration given to still images, in milliseconds.
pub const DEFAULT_IMAGE_DURATION_MS: i64 = 5000;

/// Broad media category of an asset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Image,
}

/// A locally known asset: id, mime category, and probed duration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub id: AssetId,
    pub kind: MediaKind,
    /// Probed media duration in milliseconds (0 for images).
    pub duration_ms: i64,
}

impl AssetDescriptor {
    /// Duration this asset occupies when first dropped on the timeline.
    ///
    /// Images have no intrinsic duration and receive a fixed default.
    pub fn timeline_duration_ms(&self) -> i64 {
        match self.kind {
            MediaKind::Image => DEFAULT_IMAGE_DURATION_MS,
            MediaKind::Video | MediaKind::Audio => self.duration_ms,
        }
    }
}

/// An external asset known only by URL; duration is inferred by kind until
/// the media is actually probed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalAsset {
    pub url: String,
    pub kind: MediaKind,
}

impl ExternalAsset {
    /// Inferred timeline duration for an unprobed external asset.
    pub fn inferred_duration_ms(&self) -> i64 {
        match self.kind {
            MediaKind::Image => DEFAULT_IMAGE_DURATION_MS,
            // Unprobed video/audio get a placeholder the caller refines later.
            MediaKind::Video | MediaKind::Audio => 10_000,
        }
    }
}
