//! First-class action types for the game.
//!
//! Actions are the user's intent. The reducer decides whether they change
//! anything; an action that does not apply is simply ignored.

use super::Position;
use serde::{Deserialize, Serialize};

/// Input to [`GameState::reduce`](crate::GameState::reduce).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Place the next mark on the viewed board.
    #[display("move {}", _0)]
    Move(Position),
    /// View the board as it was after move `n`.
    #[display("jump to {}", _0)]
    JumpTo(usize),
    /// Flip the move list between ascending and descending order.
    #[display("toggle sort")]
    ToggleSort,
}
