//! Game state and its reducer.

use super::action::Action;
use super::history::{History, Placement};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules::detect_winner;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Order in which the move list is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Latest move first.
    #[display("descending")]
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// True for [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// Complete game state.
///
/// Values are immutable: [`GameState::reduce`] consumes a state and returns
/// the next one. Winner and status are never stored; see [`crate::view`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_step: usize,
    pub(crate) next_mark: Mark,
    pub(crate) sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game with the move list in ascending order.
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::Ascending)
    }

    /// Creates a new game with the given move-list order.
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            next_mark: Mark::X,
            sort_order,
        }
    }

    /// Recorded board snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move number currently on display.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Mark that the next move will place.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Board at the current step.
    pub fn current_board(&self) -> Board {
        self.history
            .get(self.current_step)
            .map(|entry| *entry.board())
            .unwrap_or_default()
    }

    /// Applies an action and returns the resulting state.
    ///
    /// Moves on an occupied square or a decided board, and jumps to a step
    /// that was never recorded, return the state unchanged.
    #[instrument(skip(self), fields(step = self.current_step, len = self.history.len()))]
    pub fn reduce(self, action: Action) -> Self {
        let next = match action {
            Action::Move(pos) => self.play(pos),
            Action::JumpTo(step) => self.jump_to(step),
            Action::ToggleSort => Self {
                sort_order: self.sort_order.toggle(),
                ..self
            },
        };

        debug_assert!(
            TimelineInvariants::check_all(&next).is_ok(),
            "invariants violated after {action}"
        );

        next
    }

    fn play(self, pos: Position) -> Self {
        let board = self.current_board();

        if let Some(win) = detect_winner(&board) {
            debug!(winner = %win.mark, "Ignoring move on decided board");
            return self;
        }
        if !board.is_empty(pos) {
            debug!(position = %pos, "Ignoring move on occupied square");
            return self;
        }

        let placement = Placement {
            mark: self.next_mark,
            position: pos,
        };
        let history = self.history.branch(self.current_step, placement);
        let current_step = history.last_step();
        debug!(%placement, current_step, "Move recorded");

        Self {
            history,
            current_step,
            next_mark: self.next_mark.opponent(),
            sort_order: self.sort_order,
        }
    }

    fn jump_to(self, step: usize) -> Self {
        if step >= self.history.len() {
            warn!(step, len = self.history.len(), "Ignoring jump outside history");
            return self;
        }

        debug!(step, "Jumping to step");
        Self {
            current_step: step,
            next_mark: Mark::for_step(step),
            ..self
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.current_step(), 0);
        assert_eq!(state.next_mark(), Mark::X);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.sort_order(), SortOrder::Ascending);
        assert_eq!(state.current_board(), Board::new());
    }

    #[test]
    fn test_toggle_sort_leaves_game_alone() {
        let state = GameState::new().reduce(Action::Move(Position::Center));
        let toggled = state.clone().reduce(Action::ToggleSort);
        assert_eq!(toggled.sort_order(), SortOrder::Descending);
        assert_eq!(toggled.history(), state.history());
        assert_eq!(toggled.current_step(), state.current_step());
        assert_eq!(toggled.next_mark(), state.next_mark());
        assert_eq!(
            toggled.reduce(Action::ToggleSort).sort_order(),
            SortOrder::Ascending
        );
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let state = GameState::new().reduce(Action::Move(Position::Center));
        let after = state.clone().reduce(Action::JumpTo(2));
        assert_eq!(after, state);
    }
}
