//! Append-only board history.
//!
//! Entry 0 is always the empty board. Each later entry is the previous board
//! with one more mark. Branching from an earlier step discards everything
//! after it; there is only ever one timeline.

use super::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The move that produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Snapshot of the board at one move number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    pub(crate) board: Board,
    /// Move that produced this entry, `None` for the game start.
    pub(crate) placement: Option<Placement>,
}

impl HistoryEntry {
    fn start() -> Self {
        Self {
            board: Board::new(),
            placement: None,
        }
    }
}

/// Ordered board snapshots indexed by move number.
///
/// Serialize only: a deserialized value could skip the starting board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) entries: Vec<HistoryEntry>,
}

impl History {
    /// History holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
        }
    }

    /// Number of entries, including the starting board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at move number `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Index of the last entry.
    pub fn last_step(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Entries in move order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Records a move made while viewing `step`.
    ///
    /// Entries after `step` are dropped before the new one is appended.
    /// Returns the history unchanged if `step` does not exist.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn branch(mut self, step: usize, placement: Placement) -> Self {
        let Some(from) = self.entries.get(step).copied() else {
            return self;
        };

        let discarded = self.entries.len() - (step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future history");
        }
        self.entries.truncate(step + 1);
        self.entries.push(HistoryEntry {
            board: from.board.with_mark(placement.position, placement.mark),
            placement: Some(placement),
        });
        self
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
