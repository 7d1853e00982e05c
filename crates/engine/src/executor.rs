//! Debounced command executor — coalesces high-frequency commands.
//!
//! `DebouncedExecutor` does NOT own a thread or async task. It is a stateful
//! timer the caller polls (e.g., once per frame): every `push` buffers the
//! command and resets the deadline, and once the quiet interval elapses the
//! buffer flushes into the history as a single step. This bounds undo-stack
//! growth and downstream persistence writes during drags and resizes, while
//! the flushed result always reflects the most recent input.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::command::Command;
use crate::history::{History, HistoryAction};

/// Buffers commands from high-frequency sources and flushes them as one
/// undoable step after a quiet interval.
#[derive(Debug)]
pub struct DebouncedExecutor {
    buffer: Vec<Command>,
    /// When the current buffer becomes due. `None` while the buffer is empty.
    deadline: Option<Instant>,
    interval: Duration,
}

impl DebouncedExecutor {
    /// Create an executor with the given quiet interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            buffer: Vec::new(),
            deadline: None,
            interval,
        }
    }

    /// Buffer a command and reset the flush deadline. A new command always
    /// wins the race against a pending deadline, so the eventual flush
    /// reflects the latest buffered state.
    pub fn push(&mut self, cmd: Command) {
        self.buffer.push(cmd);
        self.deadline = Some(Instant::now() + self.interval);
    }

    /// Whether the buffer is due to flush.
    pub fn should_flush(&self) -> bool {
        match self.deadline {
            Some(deadline) => !self.buffer.is_empty() && Instant::now() >= deadline,
            None => false,
        }
    }

    /// Flush when due. Returns `true` if a flush happened.
    pub fn poll(&mut self, history: &mut History) -> bool {
        if self.should_flush() {
            self.flush_into(history);
            true
        } else {
            false
        }
    }

    /// Flush the buffer into the history immediately, regardless of the
    /// deadline. One buffered command executes bare; several are wrapped in
    /// a single `Batch` in arrival order.
    pub fn flush_into(&mut self, history: &mut History) {
        self.deadline = None;
        if self.buffer.is_empty() {
            return;
        }
        let mut drained = std::mem::take(&mut self.buffer);
        let cmd = if drained.len() == 1 {
            drained.remove(0)
        } else {
            Command::Batch(drained)
        };
        debug!(command = cmd.label(), "Debounced flush");
        history.dispatch(HistoryAction::Execute(cmd));
    }

    /// Discard the buffer and deadline without flushing. Immediate and
    /// total; partial flushes do not occur.
    pub fn cancel(&mut self) {
        if !self.buffer.is_empty() {
            debug!(dropped = self.buffer.len(), "Debounce cancelled");
        }
        self.buffer.clear();
        self.deadline = None;
    }

    /// Number of commands currently buffered.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for DebouncedExecutor {
    fn default() -> Self {
        Self::new(cl_common::DebounceConfig::default().interval)
    }
}
