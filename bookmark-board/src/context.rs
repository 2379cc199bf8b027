//! BoardContext - the state container handed to every command
//!
//! The context owns the board state, a revision counter and the activity log.
//! No business logic lives here: commands do all the work and go through
//! [`BoardContext::mutate`] so the revision advances exactly when the state
//! changes.

use crate::state::BoardState;
use crate::types::BoardSnapshot;
use bookmark_operations::LogEntry;

/// Context passed to every command - provides access, not logic
#[derive(Debug, Default)]
pub struct BoardContext {
    state: BoardState,
    /// Number of state changes applied so far
    revision: u64,
    /// Applied operations, oldest first
    activity: Vec<LogEntry>,
}

impl BoardContext {
    /// Create a context around an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context around an existing board
    pub fn with_state(state: BoardState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    // =========================================================================
    // State access
    // =========================================================================

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Apply a transition. The revision advances when the closure reports a
    /// change.
    pub fn mutate<F>(&mut self, transition: F) -> bool
    where
        F: FnOnce(&mut BoardState) -> bool,
    {
        let changed = transition(&mut self.state);
        if changed {
            self.revision += 1;
        }
        changed
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.snapshot()
    }

    // =========================================================================
    // Activity logging
    // =========================================================================

    /// Append a log entry, stamped with the current revision
    pub fn append_activity(&mut self, entry: LogEntry) {
        self.activity.push(entry.at_revision(self.revision));
    }

    /// Read activity log entries, newest first
    pub fn read_activity(&self, limit: Option<usize>) -> Vec<LogEntry> {
        let entries = self.activity.iter().rev().cloned();
        match limit {
            Some(limit) => entries.take(limit).collect(),
            None => entries.collect(),
        }
    }
}
