//! `cl-engine` — Deterministic command engine for the Cutline timeline.
//!
//! This crate provides:
//!
//! - **`TimelineState`**: flat track/clip collections passed as snapshots.
//! - **`Command` / `apply` / `inverse`**: the pure, total command algebra.
//! - **`History`**: past/present/future undo/redo stacks with `dispatch`.
//! - **Ordering**: per-kind index-band allocation and track shifting.
//! - **`DebouncedExecutor`**: coalesces high-frequency commands into batches.
//!
//! # Architecture
//!
//! ```text
//! TimelineState (snapshot)
//! ├── tracks: Vec<Track>     (contiguous indices {0..n-1})
//! └── clips: Vec<Clip>       (flat, track_id keyed)
//!
//! History
//! ├── past: VecDeque<Command>     (undo stack)
//! ├── present: TimelineState
//! └── future: VecDeque<Command>   (redo stack)
//! ```
//!
//! The engine is single-threaded and fully synchronous. Callers in a
//! multi-threaded host must serialize access externally; the engine
//! provides no internal locking.

pub mod command;
pub mod executor;
pub mod history;
pub mod ordering;
pub mod state;

// Re-export primary types at crate root for convenience.
pub use command::{apply, Command};
pub use executor::DebouncedExecutor;
pub use history::{History, HistoryAction, DEFAULT_MAX_HISTORY};
pub use ordering::{band, next_available_index, shift_tracks_for_new_track};
pub use state::{Clip, TimelineState, Track};
