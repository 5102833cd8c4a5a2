//! Application state and input handling.
//!
//! [`App`] is the only owner of the [`GameState`]. Key and mouse events are
//! turned into [`Action`]s and run through the reducer; nothing else
//! changes the game.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use derive_getters::Getters;
use tictactoe_timeline::{Action, GameState, Language, Position, SortOrder};
use tracing::{debug, instrument, trace};

use crate::input::{digit_position, move_cursor};
use crate::ui::{AppLayout, Target};

/// Pane that receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move through the move list.
    Moves,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Redraw and wait for the next event.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    state: GameState,
    language: Language,
    cursor: Position,
    focus: Focus,
    #[getter(skip)]
    selected_row: usize,
    #[getter(skip)]
    layout: Option<AppLayout>,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(language: Language, sort_order: SortOrder) -> Self {
        Self {
            state: GameState::with_sort_order(sort_order),
            language,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_row: 0,
            layout: None,
        }
    }

    /// Row of the move list that should be visible and, while the list has
    /// focus, highlighted.
    pub fn focus_row(&self) -> usize {
        match self.focus {
            Focus::Moves => self.selected_row.min(self.state.history().last_step()),
            Focus::Board => self.row_of(self.state.current_step()),
        }
    }

    /// Records the layout of the frame just drawn, for mouse hit-testing.
    pub fn set_layout(&mut self, layout: AppLayout) {
        self.layout = Some(layout);
    }

    /// Runs an action through the reducer.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn dispatch(&mut self, action: Action) {
        let selected_step = self.step_at(self.selected_row);
        self.state = std::mem::take(&mut self.state).reduce(action);

        // Keep the list cursor on the same entry when the order flips or
        // the history grows or shrinks. Dropped steps clamp to the last row.
        self.selected_row = self.row_of(selected_step);
        debug!(
            %action,
            current_step = self.state.current_step(),
            history_len = self.state.history().len(),
            "Action dispatched"
        );
    }

    /// Handles any terminal event.
    pub fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => Control::Continue,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.dispatch(Action::ToggleSort),
            KeyCode::Tab | KeyCode::BackTab => self.switch_focus(),
            code => {
                if let Some(pos) = digit_position(code) {
                    self.cursor = pos;
                    self.dispatch(Action::Move(pos));
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::Moves => self.handle_moves_key(code),
                    }
                }
            }
        }

        Control::Continue
    }

    /// Handles a mouse event; only left clicks do anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Control {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Control::Continue;
        }

        let target = self
            .layout
            .as_ref()
            .and_then(|layout| layout.hit(mouse.column, mouse.row));
        trace!(?target, "Mouse click");

        match target {
            Some(Target::Square(pos)) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.dispatch(Action::Move(pos));
            }
            Some(Target::MoveEntry(step)) => {
                self.focus = Focus::Moves;
                self.selected_row = self.row_of(step);
                self.dispatch(Action::JumpTo(step));
            }
            Some(Target::SortToggle) => self.dispatch(Action::ToggleSort),
            None => {}
        }

        Control::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Action::Move(self.cursor)),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let last_row = self.state.history().last_step();
        match code {
            KeyCode::Up => self.selected_row = self.selected_row.saturating_sub(1),
            KeyCode::Down => self.selected_row = (self.selected_row + 1).min(last_row),
            KeyCode::Home => self.selected_row = 0,
            KeyCode::End => self.selected_row = last_row,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Action::JumpTo(self.step_at(self.selected_row)));
            }
            _ => {}
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected_row = self.row_of(self.state.current_step());
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus switched");
    }

    /// Display row of an absolute step under the current sort order.
    fn row_of(&self, step: usize) -> usize {
        let last = self.state.history().last_step();
        let step = step.min(last);
        match self.state.sort_order() {
            SortOrder::Ascending => step,
            SortOrder::Descending => last - step,
        }
    }

    /// Absolute step shown at a display row.
    fn step_at(&self, row: usize) -> usize {
        // The mapping is its own inverse.
        self.row_of(row)
    }
}
