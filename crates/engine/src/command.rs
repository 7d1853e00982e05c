//! Command algebra: invertible mutations over the timeline collection.
//!
//! `apply` is total and never fails. Commands referencing unknown ids are
//! silent no-ops because commands may be replayed against stale snapshots
//! that concurrent edits have already advanced past. `inverse` produces the
//! command that undoes this one; only `Reset` (a wholesale checkpoint) has
//! no inverse.

use tracing::debug;

use crate::state::{Clip, TimelineState, Track};

/// A discrete, invertible mutation to the track/clip collection.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Apply the sub-commands in order as one undoable step.
    Batch(Vec<Command>),
    /// Insert a track; the collection re-sorts by index and renormalizes.
    AddTrack { track: Track },
    /// Drop a track and cascade-delete its clips. `affected_clips` carries
    /// the clips that were on the track when the command was built, so the
    /// inverse can restore them.
    RemoveTrack {
        track: Track,
        affected_clips: Vec<Clip>,
    },
    /// Replace the track matching `before.id` with `after`.
    UpdateTrack { before: Track, after: Track },
    /// Append a clip.
    AddClip { clip: Clip },
    /// Remove a clip by id.
    RemoveClip { clip: Clip },
    /// Replace the clip matching `before.id` with `after`.
    UpdateClip { before: Clip, after: Clip },
    /// Replace the entire collection wholesale. Non-invertible checkpoint.
    Reset { tracks: Vec<Track>, clips: Vec<Clip> },
}

impl Command {
    /// Build a `RemoveTrack` that captures the track's clips from the given
    /// snapshot, so that undo restores the cascade-deleted clips.
    ///
    /// Returns `None` if the track is unknown in `state`.
    pub fn remove_track_cascading(state: &TimelineState, track_id: &cl_common::TrackId) -> Option<Command> {
        let track = state.find_track(track_id)?.clone();
        let affected_clips: Vec<Clip> = state.clips_on_track(track_id).cloned().collect();
        Some(Command::RemoveTrack {
            track,
            affected_clips,
        })
    }

    /// The command that undoes this one, or `None` for non-invertible
    /// commands (`Reset`, and any `Batch` containing one).
    ///
    /// `Batch` inverts by reversing order and inverting each sub-command,
    /// so the most-recently-applied effect undoes first. `RemoveTrack`
    /// inverts to a batch that re-adds the track and then replays its
    /// cascade-deleted clips.
    pub fn inverse(&self) -> Option<Command> {
        match self {
            Command::Batch(commands) => {
                let mut inverted = Vec::with_capacity(commands.len());
                for cmd in commands.iter().rev() {
                    inverted.push(cmd.inverse()?);
                }
                Some(Command::Batch(inverted))
            }
            Command::AddTrack { track } => Some(Command::RemoveTrack {
                track: track.clone(),
                affected_clips: Vec::new(),
            }),
            Command::RemoveTrack {
                track,
                affected_clips,
            } => {
                if affected_clips.is_empty() {
                    return Some(Command::AddTrack {
                        track: track.clone(),
                    });
                }
                let mut commands = Vec::with_capacity(affected_clips.len() + 1);
                commands.push(Command::AddTrack {
                    track: track.clone(),
                });
                for clip in affected_clips {
                    commands.push(Command::AddClip { clip: clip.clone() });
                }
                Some(Command::Batch(commands))
            }
            Command::UpdateTrack { before, after } => Some(Command::UpdateTrack {
                before: after.clone(),
                after: before.clone(),
            }),
            Command::AddClip { clip } => Some(Command::RemoveClip { clip: clip.clone() }),
            Command::RemoveClip { clip } => Some(Command::AddClip { clip: clip.clone() }),
            Command::UpdateClip { before, after } => Some(Command::UpdateClip {
                before: after.clone(),
                after: before.clone(),
            }),
            Command::Reset { .. } => None,
        }
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Batch(_) => "batch",
            Command::AddTrack { .. } => "add_track",
            Command::RemoveTrack { .. } => "remove_track",
            Command::UpdateTrack { .. } => "update_track",
            Command::AddClip { .. } => "add_clip",
            Command::RemoveClip { .. } => "remove_clip",
            Command::UpdateClip { .. } => "update_clip",
            Command::Reset { .. } => "reset",
        }
    }
}

/// Apply a command to a snapshot, producing the next snapshot.
///
/// Total: malformed references are silent no-ops, never errors.
pub fn apply(mut state: TimelineState, cmd: &Command) -> TimelineState {
    match cmd {
        Command::Batch(commands) => {
            for sub in commands {
                state = apply(state, sub);
            }
            state
        }
        Command::AddTrack { track } => {
            state.tracks.push(track.clone());
            renormalize_track_indices(&mut state.tracks);
            debug!(track_id = %track.id, kind = %track.kind, "Added track");
            state
        }
        Command::RemoveTrack { track, .. } => {
            let before = state.tracks.len();
            state.tracks.retain(|t| t.id != track.id);
            state.clips.retain(|c| c.track_id != track.id);
            if state.tracks.len() != before {
                renormalize_track_indices(&mut state.tracks);
                debug!(track_id = %track.id, "Removed track and its clips");
            }
            state
        }
        Command::UpdateTrack { before, after } => {
            if let Some(slot) = state.tracks.iter_mut().find(|t| t.id == before.id) {
                *slot = after.clone();
            } else {
                debug!(track_id = %before.id, "UpdateTrack target missing, no-op");
            }
            state
        }
        Command::AddClip { clip } => {
            state.clips.push(clip.clone());
            debug!(clip_id = %clip.id, track_id = %clip.track_id, "Added clip");
            state
        }
        Command::RemoveClip { clip } => {
            state.clips.retain(|c| c.id != clip.id);
            state
        }
        Command::UpdateClip { before, after } => {
            if let Some(slot) = state.clips.iter_mut().find(|c| c.id == before.id) {
                *slot = after.clone();
            } else {
                debug!(clip_id = %before.id, "UpdateClip target missing, no-op");
            }
            state
        }
        Command::Reset { tracks, clips } => {
            debug!(
                tracks = tracks.len(),
                clips = clips.len(),
                "Reset timeline collection"
            );
            TimelineState {
                tracks: tracks.clone(),
                clips: clips.clone(),
            }
        }
    }
}

/// Sort tracks ascending by index (stable, so equal indices keep their
/// relative order) and rewrite every index to its sorted position, restoring
/// the contiguous `{0..n-1}` invariant. The caller-supplied index is only a
/// sort key, not a guaranteed final value.
fn renormalize_track_indices(tracks: &mut [Track]) {
    tracks.sort_by_key(|t| t.index);
    for (position, track) in tracks.iter_mut().enumerate() {
        track.index = position as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{make_clip, make_track};
    use cl_common::{ClipId, TrackId, TrackKind};

    fn state_with(tracks: Vec<Track>, clips: Vec<Clip>) -> TimelineState {
        TimelineState { tracks, clips }
    }

    #[test]
    fn add_track_renormalizes_indices() {
        let state = state_with(
            vec![
                make_track("t1", 0, TrackKind::Video),
                make_track("t2", 1, TrackKind::Video),
            ],
            vec![],
        );
        // Caller asks for index 5; it is only a sort key.
        let state = apply(
            state,
            &Command::AddTrack {
                track: make_track("t3", 5, TrackKind::Audio),
            },
        );
        let indices: Vec<u32> = state.tracks.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(state.tracks[2].id, TrackId::new("t3"));
    }

    #[test]
    fn add_track_sorts_by_caller_index() {
        let state = state_with(vec![make_track("t1", 0, TrackKind::Video)], vec![]);
        // Index 0 ties with the existing track; the existing one stays first.
        let state = apply(
            state,
            &Command::AddTrack {
                track: make_track("t2", 0, TrackKind::Video),
            },
        );
        assert_eq!(state.tracks[0].id, TrackId::new("t1"));
        assert_eq!(state.tracks[1].id, TrackId::new("t2"));
        assert_eq!(state.tracks[1].index, 1);
    }

    #[test]
    fn remove_track_cascades_clips_and_renormalizes() {
        let state = state_with(
            vec![
                make_track("t1", 0, TrackKind::Video),
                make_track("t2", 1, TrackKind::Video),
                make_track("t3", 2, TrackKind::Audio),
            ],
            vec![
                make_clip("c1", "t2", 0, 5000),
                make_clip("c2", "t2", 5000, 9000),
                make_clip("c3", "t1", 0, 3000),
            ],
        );
        let cmd = Command::remove_track_cascading(&state, &TrackId::new("t2")).unwrap();
        let state = apply(state, &cmd);

        assert_eq!(state.tracks.len(), 2);
        assert!(state.find_track(&TrackId::new("t2")).is_none());
        let indices: Vec<u32> = state.tracks.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(state.clips.len(), 1);
        assert_eq!(state.clips[0].id, ClipId::new("c3"));
    }

    #[test]
    fn update_track_replaces_by_id() {
        let before = make_track("t1", 0, TrackKind::Video);
        let mut after = before.clone();
        after.index = 3;
        let state = state_with(vec![before.clone()], vec![]);
        let state = apply(
            state,
            &Command::UpdateTrack {
                before,
                after: after.clone(),
            },
        );
        assert_eq!(state.tracks[0].index, 3);
    }

    #[test]
    fn update_with_unknown_id_is_noop() {
        let state = state_with(vec![make_track("t1", 0, TrackKind::Video)], vec![]);
        let ghost_before = make_track("ghost", 0, TrackKind::Video);
        let ghost_after = make_track("ghost", 7, TrackKind::Video);
        let next = apply(
            state.clone(),
            &Command::UpdateTrack {
                before: ghost_before,
                after: ghost_after,
            },
        );
        assert_eq!(next, state);

        let ghost_clip = make_clip("ghost", "t1", 0, 1000);
        let mut moved = ghost_clip.clone();
        moved.timeline_start_ms = 500;
        let next = apply(
            state.clone(),
            &Command::UpdateClip {
                before: ghost_clip,
                after: moved,
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn remove_unknown_clip_is_noop() {
        let state = state_with(
            vec![make_track("t1", 0, TrackKind::Video)],
            vec![make_clip("c1", "t1", 0, 1000)],
        );
        let next = apply(
            state.clone(),
            &Command::RemoveClip {
                clip: make_clip("c9", "t1", 0, 1000),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn batch_applies_left_to_right() {
        let state = TimelineState::new();
        let cmd = Command::Batch(vec![
            Command::AddTrack {
                track: make_track("t1", 0, TrackKind::Video),
            },
            Command::AddClip {
                clip: make_clip("c1", "t1", 0, 5000),
            },
        ]);
        let state = apply(state, &cmd);
        assert_eq!(state.tracks.len(), 1);
        assert_eq!(state.clips.len(), 1);
    }

    #[test]
    fn reset_replaces_wholesale() {
        let state = state_with(
            vec![make_track("t1", 0, TrackKind::Video)],
            vec![make_clip("c1", "t1", 0, 5000)],
        );
        let state = apply(
            state,
            &Command::Reset {
                tracks: vec![make_track("t9", 0, TrackKind::Audio)],
                clips: vec![],
            },
        );
        assert_eq!(state.tracks.len(), 1);
        assert_eq!(state.tracks[0].id, TrackId::new("t9"));
        assert!(state.clips.is_empty());
    }

    #[test]
    fn inverse_pairs() {
        let track = make_track("t1", 0, TrackKind::Video);
        let clip = make_clip("c1", "t1", 0, 5000);

        let inv = Command::AddTrack {
            track: track.clone(),
        }
        .inverse()
        .unwrap();
        assert!(matches!(inv, Command::RemoveTrack { track: ref t, .. } if t.id == track.id));

        let inv = Command::AddClip { clip: clip.clone() }.inverse().unwrap();
        assert_eq!(
            inv,
            Command::RemoveClip { clip: clip.clone() }
        );

        let mut moved = clip.clone();
        moved.timeline_start_ms = 1000;
        let inv = Command::UpdateClip {
            before: clip.clone(),
            after: moved.clone(),
        }
        .inverse()
        .unwrap();
        assert_eq!(
            inv,
            Command::UpdateClip {
                before: moved,
                after: clip,
            }
        );
    }

    #[test]
    fn batch_inverse_reverses_order() {
        let c1 = Command::AddClip {
            clip: make_clip("c1", "t1", 0, 1000),
        };
        let c2 = Command::AddClip {
            clip: make_clip("c2", "t1", 1000, 2000),
        };
        let inv = Command::Batch(vec![c1.clone(), c2.clone()]).inverse().unwrap();
        assert_eq!(
            inv,
            Command::Batch(vec![c2.inverse().unwrap(), c1.inverse().unwrap()])
        );
    }

    #[test]
    fn reset_has_no_inverse() {
        let cmd = Command::Reset {
            tracks: vec![],
            clips: vec![],
        };
        assert!(cmd.inverse().is_none());

        let batch = Command::Batch(vec![cmd]);
        assert!(batch.inverse().is_none());
    }

    #[test]
    fn remove_track_inverse_restores_clips() {
        let state = state_with(
            vec![make_track("t1", 0, TrackKind::Video)],
            vec![
                make_clip("c1", "t1", 0, 5000),
                make_clip("c2", "t1", 5000, 9000),
            ],
        );
        let cmd = Command::remove_track_cascading(&state, &TrackId::new("t1")).unwrap();

        let removed = apply(state.clone(), &cmd);
        assert!(removed.tracks.is_empty());
        assert!(removed.clips.is_empty());

        let restored = apply(removed, &cmd.inverse().unwrap());
        assert_eq!(restored.tracks.len(), 1);
        assert_eq!(restored.clips.len(), 2);
        assert_eq!(restored, state);
    }

    #[test]
    fn undo_symmetry_for_non_track_removal() {
        let base = state_with(
            vec![
                make_track("t1", 0, TrackKind::Video),
                make_track("t2", 1, TrackKind::Audio),
            ],
            vec![make_clip("c1", "t1", 0, 5000)],
        );
        let mut moved = base.clips[0].clone();
        moved.timeline_start_ms = 2000;
        moved.timeline_end_ms = 7000;

        let commands = vec![
            Command::AddClip {
                clip: make_clip("c2", "t2", 0, 3000),
            },
            Command::RemoveClip {
                clip: base.clips[0].clone(),
            },
            Command::UpdateClip {
                before: base.clips[0].clone(),
                after: moved,
            },
            Command::Batch(vec![
                Command::AddClip {
                    clip: make_clip("c3", "t1", 5000, 6000),
                },
                Command::AddClip {
                    clip: make_clip("c4", "t1", 6000, 7000),
                },
            ]),
        ];
        for cmd in commands {
            let round_tripped = apply(apply(base.clone(), &cmd), &cmd.inverse().unwrap());
            assert_eq!(round_tripped, base, "failed for {}", cmd.label());
        }
    }

    #[test]
    fn contiguity_after_structural_mutations() {
        let mut state = TimelineState::new();
        for (i, id) in ["t1", "t2", "t3", "t4"].iter().enumerate() {
            state = apply(
                state,
                &Command::AddTrack {
                    track: make_track(id, i as u32, TrackKind::Video),
                },
            );
        }
        let cmd = Command::remove_track_cascading(&state, &TrackId::new("t2")).unwrap();
        state = apply(state, &cmd);
        state = apply(
            state,
            &Command::AddTrack {
                track: make_track("t5", 99, TrackKind::Audio),
            },
        );

        let mut indices: Vec<u32> = state.tracks.iter().map(|t| t.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..state.tracks.len() as u32).collect::<Vec<_>>());
    }
}
