//! Board and square rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use derive_new::new;
use tictactoe_timeline::{Board, Mark, Position, Square, Win};

/// Colour of the squares on a winning line.
pub const WINNER_COLOR: Color = Color::Green;

/// What a single square needs to draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SquareProps {
    /// Contents of the square.
    pub square: Square,
    /// Part of the winning line.
    pub is_winner: bool,
    /// Under the keyboard cursor.
    pub has_cursor: bool,
}

/// Renders the nine squares of `board` into `cells`.
pub fn render_board(
    frame: &mut Frame,
    cells: &[Rect; 9],
    board: &Board,
    win: Option<Win>,
    cursor: Option<Position>,
) {
    for pos in Position::ALL {
        let props = SquareProps::new(
            board.get(pos),
            win.is_some_and(|w| w.contains(pos)),
            cursor == Some(pos),
        );
        render_square(frame, cells[pos.to_index()], props);
    }
}

fn render_square(frame: &mut Frame, area: Rect, props: SquareProps) {
    let (symbol, mut style) = match props.square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };
    let mut border = Style::default().fg(Color::DarkGray);

    if props.is_winner {
        style = style.fg(WINNER_COLOR);
        border = border.fg(WINNER_COLOR);
    }
    if props.has_cursor {
        style = style.add_modifier(Modifier::REVERSED);
        border = border.fg(Color::Yellow);
    }

    let paragraph = Paragraph::new(symbol)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}
