//! Values derived from a [`GameState`] for rendering.
//!
//! Everything here is recomputed from the state on each call. Nothing is
//! cached, so a view can never disagree with the state it was built from.

use super::history::Placement;
use super::rules::{Win, detect_winner};
use super::{Board, GameState, Mark};
use tracing::instrument;

/// Step at which all nine squares are filled.
pub const FINAL_STEP: usize = 9;

/// What the status line reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The viewed board has a completed line.
    Winner(Mark),
    /// All squares filled without a line.
    Draw,
    /// Game continues with this mark to move.
    NextTurn(Mark),
}

/// Label of a move-list entry, before localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveLabel {
    /// Entry 0.
    GameStart,
    /// Entry `n`, n >= 1.
    Move(usize),
}

impl MoveLabel {
    /// Label for the entry at `step`.
    pub fn for_step(step: usize) -> Self {
        if step == 0 {
            Self::GameStart
        } else {
            Self::Move(step)
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveListItem {
    /// Absolute move number; the target of a jump.
    pub step: usize,
    /// What the entry says.
    pub label: MoveLabel,
    /// Snapshot shown next to the label.
    pub board: Board,
    /// Move that produced the snapshot.
    pub placement: Option<Placement>,
    /// Whether this is the step on display.
    pub is_current: bool,
}

/// Winning line on the viewed board.
#[instrument(skip(state), fields(step = state.current_step()))]
pub fn winner(state: &GameState) -> Option<Win> {
    detect_winner(&state.current_board())
}

/// Status line for the viewed board.
#[instrument(skip(state), fields(step = state.current_step()))]
pub fn status(state: &GameState) -> Status {
    if let Some(win) = winner(state) {
        Status::Winner(win.mark)
    } else if state.current_step() == FINAL_STEP {
        Status::Draw
    } else {
        Status::NextTurn(state.next_mark())
    }
}

/// Move list in the state's sort order.
///
/// Emphasis follows the absolute step, so the same entry stays emphasised
/// when the order flips.
#[instrument(skip(state), fields(order = %state.sort_order()))]
pub fn move_list(state: &GameState) -> Vec<MoveListItem> {
    let items = state
        .history()
        .entries()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveListItem {
            step,
            label: MoveLabel::for_step(step),
            board: *entry.board(),
            placement: *entry.placement(),
            is_current: step == state.current_step(),
        });

    if state.sort_order().is_ascending() {
        items.collect()
    } else {
        items.rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Position};

    #[test]
    fn test_status_next_turn_on_new_game() {
        assert_eq!(status(&GameState::new()), Status::NextTurn(Mark::X));
        assert_eq!(winner(&GameState::new()), None);
    }

    #[test]
    fn test_move_label_for_step() {
        assert_eq!(MoveLabel::for_step(0), MoveLabel::GameStart);
        assert_eq!(MoveLabel::for_step(4), MoveLabel::Move(4));
    }

    #[test]
    fn test_move_list_descending_keeps_absolute_emphasis() {
        let state = GameState::new()
            .reduce(Action::Move(Position::Center))
            .reduce(Action::Move(Position::TopLeft))
            .reduce(Action::JumpTo(1))
            .reduce(Action::ToggleSort);

        let items = move_list(&state);
        let steps: Vec<usize> = items.iter().map(|i| i.step).collect();
        assert_eq!(steps, vec![2, 1, 0]);

        let current: Vec<usize> = items.iter().filter(|i| i.is_current).map(|i| i.step).collect();
        assert_eq!(current, vec![1]);
        assert_eq!(items[2].label, MoveLabel::GameStart);
        assert_eq!(items[2].placement, None);
    }
}
