//! UI rendering using ratatui.
//!
//! Drawing is a pure projection of [`App`]: every frame recomputes the
//! winner, status and move list from the game state.

mod board;
mod history;
pub mod layout;

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_timeline::view;

pub use board::{SquareProps, WINNER_COLOR, render_board};
pub use history::render_move_list;
pub use layout::{AppLayout, Target};

/// Draws the whole screen and returns the layout it used.
pub fn draw(frame: &mut Frame, app: &App) -> AppLayout {
    let state = app.state();
    let language = *app.language();
    let items = view::move_list(state);
    let steps: Vec<usize> = items.iter().map(|i| i.step).collect();
    let layout = AppLayout::compute(frame.area(), &steps, app.focus_row());

    let board_focused = *app.focus() == Focus::Board;
    let board_block = Block::default()
        .title(language.title())
        .borders(Borders::ALL)
        .border_style(focus_style(board_focused));
    frame.render_widget(board_block, layout.board_pane);
    render_board(
        frame,
        &layout.squares,
        &state.current_board(),
        view::winner(state),
        board_focused.then_some(*app.cursor()),
    );

    frame.render_widget(
        Block::default().borders(Borders::ALL),
        layout.status_pane,
    );
    let status = Paragraph::new(language.status(view::status(state)))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(status, layout.status);
    let toggle = Paragraph::new(language.sort_indicator(state.sort_order()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(toggle, layout.sort_toggle);

    let moves_block = Block::default()
        .title(language.moves_title())
        .borders(Borders::ALL)
        .border_style(focus_style(!board_focused));
    frame.render_widget(moves_block, layout.moves_pane);
    let selected = (!board_focused).then(|| steps.get(app.focus_row()).copied()).flatten();
    render_move_list(frame, &layout.entries, &items, language, selected);

    let help = Paragraph::new(language.help())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
