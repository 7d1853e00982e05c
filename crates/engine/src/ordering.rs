//! Track ordering allocator: per-kind index bands.
//!
//! The index space is partitioned into disjoint contiguous bands, one per
//! track kind, sized to the kind's expected maximum track count. New tracks
//! take the first free slot within their kind's band; a full band degrades
//! gracefully by reusing the band's last slot instead of failing.

use std::collections::BTreeSet;
use std::ops::Range;

use tracing::warn;

use crate::command::Command;
use crate::state::Track;
use cl_common::TrackKind;

/// Index band reserved for the given kind. Bands are ascending and disjoint.
pub fn band(kind: TrackKind) -> Range<u32> {
    match kind {
        TrackKind::Text => 0..8,
        TrackKind::Stickers => 8..16,
        TrackKind::Video => 16..32,
        TrackKind::Caption => 32..40,
        TrackKind::Audio => 40..56,
    }
}

/// Lowest unused index within the kind's band.
///
/// When every slot in the band is occupied, returns the band's last slot,
/// deliberately accepting the index collision as a fallback rather than an
/// error. `apply(AddTrack)` renormalizes afterwards, so the collision only
/// affects relative placement, never the contiguity invariant.
pub fn next_available_index(tracks: &[Track], kind: TrackKind) -> u32 {
    let used: BTreeSet<u32> = tracks.iter().map(|t| t.index).collect();
    let range = band(kind);
    for candidate in range.clone() {
        if !used.contains(&candidate) {
            return candidate;
        }
    }
    let fallback = range.end - 1;
    warn!(kind = %kind, index = fallback, "Index band exhausted, reusing last slot");
    fallback
}

/// Shift every track with `index >= new_index` up by one, making room for a
/// track to be inserted at `new_index`.
///
/// Emitted as a single `Batch` of `UpdateTrack`s so the whole shift is one
/// undoable step.
pub fn shift_tracks_for_new_track(tracks: &[Track], new_index: u32) -> Command {
    let updates: Vec<Command> = tracks
        .iter()
        .filter(|t| t.index >= new_index)
        .map(|t| {
            let mut after = t.clone();
            after.index = t.index + 1;
            Command::UpdateTrack {
                before: t.clone(),
                after,
            }
        })
        .collect();
    Command::Batch(updates)
}
