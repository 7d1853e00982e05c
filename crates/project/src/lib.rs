//! `cl-project` — Persistence boundary for Cutline timeline documents.
//!
//! JSON document types compatible with the web client's storage format,
//! plus load/save with version gating, structural validation, and repair
//! of degenerate clip rows written by older clients.

pub mod error;
pub mod load;
pub mod save;
pub mod types;

pub use error::{ProjectError, ProjectResult};
pub use load::{from_json_string, load_project};
pub use save::{save_project, to_json_string, to_json_string_pretty};
pub use types::{touch_modified, ClipRecord, TimelineDoc, TrackRecord, DOC_VERSION};
