//! Magnetic snapping: candidate collection and pointer resolution.
//!
//! Candidates live in pixel space (`time_ms × time_scale`) because the
//! attraction threshold is perceptual: 8 px feels the same at every zoom
//! level, while a fixed time threshold would not.

use cl_common::{ClipId, SnapConfig};
use cl_engine::TimelineState;
use tracing::debug;

/// Where a snap candidate came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SnapSource {
    /// Uniform time grid line.
    Grid,
    /// Start or end edge of another clip.
    ClipEdge,
    /// The playhead position.
    Playhead,
}

/// A single attraction point for the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapCandidate {
    /// Position in pixel space.
    pub position_px: f32,
    /// Relative strength of this candidate source. Currently informational:
    /// resolution is distance-only (see [`resolve`]).
    pub weight: f32,
    pub source: SnapSource,
}

/// Build the sorted candidate list for a drag of `exclude_clip`.
///
/// Three sources contribute: the uniform time grid, every other clip's
/// start/end edges, and the playhead. The list is sorted ascending by
/// position, which [`resolve`] relies on for its tie-break.
pub fn collect_candidates(
    state: &TimelineState,
    exclude_clip: Option<&ClipId>,
    playhead_ms: i64,
    time_scale: f32,
    cfg: &SnapConfig,
) -> Vec<SnapCandidate> {
    let mut candidates = Vec::new();

    // Grid lines cover the timeline plus one trailing interval, so the
    // region just past the last clip still snaps. A non-positive interval
    // would never advance the tick, so it contributes no grid candidates.
    if cfg.grid_interval_ms > 0 {
        let horizon_ms = state.duration_ms().max(playhead_ms) + cfg.grid_interval_ms;
        let mut tick_ms = 0;
        while tick_ms <= horizon_ms {
            candidates.push(SnapCandidate {
                position_px: tick_ms as f32 * time_scale,
                weight: cfg.grid_weight,
                source: SnapSource::Grid,
            });
            tick_ms += cfg.grid_interval_ms;
        }
    } else {
        debug!(
            grid_interval_ms = cfg.grid_interval_ms,
            "Non-positive grid interval, skipping grid candidates"
        );
    }

    for clip in &state.clips {
        if exclude_clip == Some(&clip.id) {
            continue;
        }
        for edge_ms in [clip.timeline_start_ms, clip.timeline_end_ms] {
            candidates.push(SnapCandidate {
                position_px: edge_ms as f32 * time_scale,
                weight: cfg.clip_edge_weight,
                source: SnapSource::ClipEdge,
            });
        }
    }

    candidates.push(SnapCandidate {
        position_px: playhead_ms as f32 * time_scale,
        weight: cfg.playhead_weight,
        source: SnapSource::Playhead,
    });

    candidates.sort_by(|a, b| a.position_px.total_cmp(&b.position_px));
    candidates
}

/// Pick the candidate nearest to `pointer_px` within `threshold_px`.
///
/// Ties resolve to the first candidate in position-ascending order,
/// regardless of weight. `None` when nothing is within the threshold.
pub fn resolve<'a>(
    candidates: &'a [SnapCandidate],
    pointer_px: f32,
    threshold_px: f32,
) -> Option<&'a SnapCandidate> {
    let mut best: Option<(&SnapCandidate, f32)> = None;
    for candidate in candidates {
        let distance = (candidate.position_px - pointer_px).abs();
        if distance > threshold_px {
            continue;
        }
        match best {
            // Strict improvement only: equal distance keeps the earlier
            // (position-ascending) candidate.
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Convenience: collect and resolve in one call, returning the snapped
/// pixel position or `None` when the pointer is free.
pub fn snap_position(
    state: &TimelineState,
    exclude_clip: Option<&ClipId>,
    playhead_ms: i64,
    pointer_px: f32,
    time_scale: f32,
    cfg: &SnapConfig,
) -> Option<f32> {
    let candidates = collect_candidates(state, exclude_clip, playhead_ms, time_scale, cfg);
    resolve(&candidates, pointer_px, cfg.threshold_px).map(|c| c.position_px)
}
