//! Tic-tac-toe with a time-travel move history.
//!
//! This crate holds the pure game logic: board types, win detection, the
//! append-only history and the reducer that drives it. Nothing in here knows
//! about terminals; a front end owns one [`GameState`], feeds it [`Action`]s
//! and renders the values derived by the [`view`] functions.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Action, GameState, Mark, Position, Status};
//!
//! let state = GameState::new()
//!     .reduce(Action::Move(Position::TopLeft))
//!     .reduce(Action::Move(Position::Center))
//!     .reduce(Action::JumpTo(1));
//!
//! assert_eq!(state.current_step(), 1);
//! assert_eq!(state.history().len(), 3);
//! assert_eq!(tictactoe_timeline::view::status(&state), Status::NextTurn(Mark::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod history;
mod locale;
mod position;
mod state;
mod types;

// Public modules
pub mod invariants;
pub mod rules;
pub mod view;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Mark, Square};

// Crate-level exports - Game state
pub use action::Action;
pub use history::{History, HistoryEntry, Placement};
pub use state::{GameState, SortOrder};

// Crate-level exports - Derived values
pub use locale::Language;
pub use rules::Win;
pub use view::{MoveLabel, MoveListItem, Status};
