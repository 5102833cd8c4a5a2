//! Alternating turn invariant: X and O take turns starting with X.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the next mark follows the parity of the viewed step, and
/// entry `k` holds `ceil(k / 2)` X marks and `floor(k / 2)` O marks.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let counts_alternate = state
            .history()
            .entries()
            .iter()
            .enumerate()
            .all(|(step, entry)| {
                entry.board().count(Mark::X) == step.div_ceil(2)
                    && entry.board().count(Mark::O) == step / 2
            });

        counts_alternate && state.next_mark() == Mark::for_step(state.current_step())
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Position};

    #[test]
    fn test_holds_after_jump() {
        let state = GameState::new()
            .reduce(Action::Move(Position::TopLeft))
            .reduce(Action::Move(Position::Center))
            .reduce(Action::JumpTo(1));
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_next_mark_violates() {
        let mut state = GameState::new().reduce(Action::Move(Position::TopLeft));
        state.next_mark = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
