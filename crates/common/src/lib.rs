//! `cl-common` — Shared types and configuration for the Cutline timeline engine.
//!
//! This crate is the foundation that all other engine crates depend on.
//! It defines the core abstractions:
//!
//! - **Types**: `TrackId`, `ClipId`, `AssetId`, `TrackKind` (newtypes for safety)
//! - **Assets**: `AssetDescriptor`, `ExternalAsset`, `MediaKind` (boundary shapes)
//! - **Config**: `EngineConfig`, `HistoryConfig`, `DebounceConfig`, `SnapConfig`

pub mod asset;
pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use asset::{AssetDescriptor, ExternalAsset, MediaKind, DEFAULT_IMAGE_DURATION_MS};
pub use config::{DebounceConfig, EngineConfig, HistoryConfig, SnapConfig};
pub use types::{AssetId, ClipId, TrackId, TrackKind};
