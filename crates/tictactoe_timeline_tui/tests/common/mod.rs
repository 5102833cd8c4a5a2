//! Shared helpers for TUI tests.

#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tictactoe_timeline::{Action, Position};
use tictactoe_timeline_tui::ui::{self, AppLayout};
use tictactoe_timeline_tui::App;

/// Draws `app` on an 80x24 test terminal and stores the layout on it.
pub fn draw(app: &mut App) -> (Buffer, AppLayout) {
    draw_sized(app, 80, 24)
}

/// Draws `app` on a `width` x `height` test terminal and stores the layout.
pub fn draw_sized(app: &mut App, width: u16, height: u16) -> (Buffer, AppLayout) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    let mut drawn = None;
    terminal
        .draw(|f| drawn = Some(ui::draw(f, app)))
        .expect("draw");
    let layout = drawn.expect("layout");
    app.set_layout(layout.clone());
    (terminal.backend().buffer().clone(), layout)
}

/// Plays the given board indices in order.
pub fn play(app: &mut App, indices: &[usize]) {
    for &i in indices {
        app.dispatch(Action::Move(Position::from_index(i).expect("valid index")));
    }
}

/// Top-left cell of the first occurrence of `needle`.
pub fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let width = usize::from(buffer.area.width);
    let needle: Vec<String> = needle.chars().map(|c| c.to_string()).collect();
    buffer
        .content
        .chunks(width)
        .enumerate()
        .find_map(|(y, row)| {
            let symbols: Vec<&str> = row.iter().map(|c| c.symbol()).collect();
            symbols
                .windows(needle.len())
                .position(|w| w.iter().zip(&needle).all(|(a, b)| *a == b.as_str()))
                .map(|x| (x as u16, y as u16))
        })
}
