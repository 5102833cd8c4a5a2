//! Step-in-range invariant: the viewed step exists and history is rooted.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: `current_step` indexes an existing entry and entry 0 is the
/// empty board with no placement.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(root) = state.history().get(0) else {
            return false;
        };

        *root.board() == Board::new()
            && root.placement().is_none()
            && state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step exists and history starts from the empty board"
    }
}
