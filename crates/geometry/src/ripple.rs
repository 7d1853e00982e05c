//! Ripple edit: propagating a clip's time shift to its track siblings.

use cl_common::ClipId;
use cl_engine::{Command, TimelineState};
use tracing::debug;

/// Which siblings follow a moved clip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RippleMode {
    /// Every other clip on the track shifts.
    All,
    /// Only clips whose original start is at or after the moved clip's
    /// original start shift.
    Right,
    /// Nothing else shifts.
    None,
}

/// Commands moving `clip_id` by `delta_ms` and rippling its track siblings
/// per `mode`.
///
/// Selection uses the clips' *original* positions, so the result is
/// independent of application order. A clip whose shifted start would go
/// negative is excluded from the ripple rather than clamped, to avoid
/// corrupting earlier content. Unknown `clip_id` yields no commands.
pub fn ripple_edit(
    state: &TimelineState,
    clip_id: &ClipId,
    delta_ms: i64,
    mode: RippleMode,
) -> Vec<Command> {
    let Some(moved) = state.find_clip(clip_id) else {
        debug!(clip_id = %clip_id, "Ripple target missing, no-op");
        return Vec::new();
    };
    let origin_ms = moved.timeline_start_ms;

    let mut commands = Vec::new();
    for clip in state.clips_on_track(&moved.track_id) {
        let affected = if clip.id == moved.id {
            true
        } else {
            match mode {
                RippleMode::All => true,
                RippleMode::Right => clip.timeline_start_ms >= origin_ms,
                RippleMode::None => false,
            }
        };
        if !affected {
            continue;
        }
        let new_start = clip.timeline_start_ms + delta_ms;
        if new_start < 0 {
            debug!(clip_id = %clip.id, new_start, "Excluded from ripple: would go negative");
            continue;
        }
        let mut after = clip.clone();
        after.timeline_start_ms = new_start;
        after.timeline_end_ms = clip.timeline_end_ms + delta_ms;
        commands.push(Command::UpdateClip {
            before: clip.clone(),
            after,
        });
    }
    commands
}
