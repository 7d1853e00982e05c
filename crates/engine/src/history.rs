//! Command-based undo/redo history.
//!
//! Unlike a snapshot store, the history keeps the commands themselves and
//! undoes by applying their inverses:
//!
//! - `past` holds executed commands (most recent at the back)
//! - `present` is the current timeline snapshot
//! - `future` holds undone commands (next redo at the front)
//!
//! Executing a new command always clears `future`; there is no branching
//! undo tree. `Reset` is a non-invertible checkpoint: it installs a new
//! present and clears both stacks.

use std::collections::VecDeque;

use tracing::debug;

use crate::command::{apply, Command};
use crate::state::{Clip, TimelineState, Track};

/// Default maximum number of commands kept on the undo stack.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Action accepted by [`History::dispatch`].
#[derive(Clone, Debug)]
pub enum HistoryAction {
    /// Apply a command and record it for undo.
    Execute(Command),
    /// Undo the most recent command, if any.
    Undo,
    /// Redo the most recently undone command, if any.
    Redo,
    /// Install a new present wholesale and clear all history. Used for bulk
    /// load; intentionally not undoable.
    Reset { tracks: Vec<Track>, clips: Vec<Clip> },
}

/// Past/present/future stacks built atop the command algebra.
#[derive(Clone, Debug)]
pub struct History {
    past: VecDeque<Command>,
    present: TimelineState,
    future: VecDeque<Command>,
    max_entries: usize,
}

impl History {
    /// Create an empty history with the default depth.
    pub fn new(present: TimelineState) -> Self {
        Self::with_max_entries(present, DEFAULT_MAX_HISTORY)
    }

    /// Create an empty history with a custom undo depth.
    pub fn with_max_entries(present: TimelineState, max_entries: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
            max_entries,
        }
    }

    /// The current timeline snapshot. Read-only for callers; all mutation
    /// goes through `dispatch`.
    pub fn present(&self) -> &TimelineState {
        &self.present
    }

    /// Route an action to the matching operation.
    pub fn dispatch(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::Execute(cmd) => self.execute(cmd),
            HistoryAction::Undo => self.undo(),
            HistoryAction::Redo => self.redo(),
            HistoryAction::Reset { tracks, clips } => self.reset(tracks, clips),
        }
    }

    /// Apply a command to the present and push it onto the undo stack.
    /// Discards any redo history.
    ///
    /// A non-invertible command (a `Reset`, bare or inside a batch) still
    /// applies, but acts as a checkpoint: both stacks are cleared because
    /// there is nothing to return to.
    pub fn execute(&mut self, cmd: Command) {
        self.present = apply(std::mem::take(&mut self.present), &cmd);
        self.future.clear();

        if cmd.inverse().is_some() {
            debug!(command = cmd.label(), undo_depth = self.past.len() + 1, "Executed command");
            self.past.push_back(cmd);
            while self.past.len() > self.max_entries {
                self.past.pop_front();
            }
        } else {
            debug!(command = cmd.label(), "Executed non-invertible command, history cleared");
            self.past.clear();
        }
    }

    /// Undo the most recent command. No-op when `past` is empty.
    pub fn undo(&mut self) {
        let Some(cmd) = self.past.pop_back() else {
            return;
        };
        // Invertibility was checked at execute time.
        if let Some(inv) = cmd.inverse() {
            self.present = apply(std::mem::take(&mut self.present), &inv);
            debug!(command = cmd.label(), undo_remaining = self.past.len(), "Undo");
            self.future.push_front(cmd);
        }
    }

    /// Redo the most recently undone command. No-op when `future` is empty.
    pub fn redo(&mut self) {
        let Some(cmd) = self.future.pop_front() else {
            return;
        };
        self.present = apply(std::mem::take(&mut self.present), &cmd);
        debug!(command = cmd.label(), redo_remaining = self.future.len(), "Redo");
        self.past.push_back(cmd);
    }

    /// Install a new present and clear both stacks.
    pub fn reset(&mut self, tracks: Vec<Track>, clips: Vec<Clip>) {
        debug!(
            tracks = tracks.len(),
            clips = clips.len(),
            "History reset"
        );
        self.present = TimelineState { tracks, clips };
        self.past.clear();
        self.future.clear();
    }

    /// Whether an undo is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of commands on the undo stack.
    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    /// Number of commands on the redo stack.
    pub fn redo_count(&self) -> usize {
        self.future.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(TimelineState::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{make_clip, make_track};
    use cl_common::TrackKind;

    #[test]
    fn new_history_is_empty() {
        let h = History::default();
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert_eq!(h.undo_count(), 0);
        assert_eq!(h.redo_count(), 0);
    }

    #[test]
    fn execute_applies_and_records() {
        let mut h = History::default();
        h.execute(Command::AddTrack {
            track: make_track("t1", 0, TrackKind::Video),
        });
        assert_eq!(h.present().tracks.len(), 1);
        assert!(h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn execute_clears_redo() {
        let mut h = History::default();
        h.execute(Command::AddTrack {
            track: make_track("t1", 0, TrackKind::Video),
        });
        h.undo();
        assert!(h.can_redo());

        h.execute(Command::AddTrack {
            track: make_track("t2", 0, TrackKind::Audio),
        });
        assert!(!h.can_redo());
        assert_eq!(h.redo_count(), 0);
    }

    #[test]
    fn undo_noop_on_empty_past() {
        let mut h = History::default();
        let before = h.present().clone();
        h.undo();
        assert_eq!(h.present(), &before);
    }

    #[test]
    fn redo_noop_on_empty_future() {
        let mut h = History::default();
        h.execute(Command::AddTrack {
            track: make_track("t1", 0, TrackKind::Video),
        });
        let before = h.present().clone();
        h.redo();
        assert_eq!(h.present(), &before);
    }

    #[test]
    fn undo_redo_cycle() {
        let mut h = History::default();
        h.execute(Command::AddTrack {
            track: make_track("t1", 0, TrackKind::Video),
        });
        h.execute(Command::AddClip {
            clip: make_clip("c1", "t1", 0, 5000),
        });

        h.undo();
        assert!(h.present().clips.is_empty());
        h.undo();
        assert!(h.present().tracks.is_empty());

        h.redo();
        assert_eq!(h.present().tracks.len(), 1);
        h.redo();
        assert_eq!(h.present().clips.len(), 1);
        assert!(!h.can_redo());
    }

    #[test]
    fn two_adds_then_two_undos_leave_nothing() {
        // Two undo steps must empty the timeline, so the two clip adds are
        // deliberately batched into one step. Executing them bare would make
        // three steps and leave the track behind after two undos.
        let mut h = History::default();
        h.execute(Command::AddTrack {
            track: make_track("t1", 0, TrackKind::Video),
        });
        h.execute(Command::Batch(vec![
            Command::AddClip {
                clip: make_clip("a", "t1", 0, 5000),
            },
            Command::AddClip {
                clip: make_clip("b", "t1", 5000, 9000),
            },
        ]));
        assert_eq!(h.present().clips.len(), 2);

        h.undo();
        h.undo();
        assert_eq!(h.present().clips.len(), 0);
        assert_eq!(h.present().tracks.len(), 0);
    }

    #[test]
    fn reset_clears_history_and_installs_present() {
        let mut h = History::default();
        h.execute(Command::AddTrack {
            track: make_track("t1", 0, TrackKind::Video),
        });
        h.undo();

        h.dispatch(HistoryAction::Reset {
            tracks: vec![make_track("t9", 0, TrackKind::Audio)],
            clips: vec![make_clip("c9", "t9", 0, 2000)],
        });
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert_eq!(h.present().tracks.len(), 1);
        assert_eq!(h.present().clips.len(), 1);

        // Reset is not undoable.
        h.undo();
        assert_eq!(h.present().tracks.len(), 1);
    }

    #[test]
    fn executed_reset_command_acts_as_checkpoint() {
        let mut h = History::default();
        h.execute(Command::AddTrack {
            track: make_track("t1", 0, TrackKind::Video),
        });
        h.execute(Command::Reset {
            tracks: vec![],
            clips: vec![],
        });
        assert!(h.present().tracks.is_empty());
        assert!(!h.can_undo());
    }

    #[test]
    fn history_depth_evicts_oldest() {
        let mut h = History::with_max_entries(TimelineState::new(), 3);
        for i in 0..5 {
            h.execute(Command::AddTrack {
                track: make_track(&format!("t{i}"), i, TrackKind::Video),
            });
        }
        assert_eq!(h.undo_count(), 3);
        assert_eq!(h.present().tracks.len(), 5);
    }

    #[test]
    fn dispatch_routes_actions() {
        let mut h = History::default();
        h.dispatch(HistoryAction::Execute(Command::AddTrack {
            track: make_track("t1", 0, TrackKind::Video),
        }));
        assert_eq!(h.present().tracks.len(), 1);
        h.dispatch(HistoryAction::Undo);
        assert!(h.present().tracks.is_empty());
        h.dispatch(HistoryAction::Redo);
        assert_eq!(h.present().tracks.len(), 1);
    }
}
