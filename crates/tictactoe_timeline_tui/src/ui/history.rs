//! Move list rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictactoe_timeline::{Board, Language, MoveListItem, Position, Square};

use super::layout::MINI_BOARD_WIDTH;

/// Renders each visible entry into its area from the layout.
///
/// `selected` is the step under the list cursor, shown only while the list
/// has focus. The entry for the step on display is always bold.
pub fn render_move_list(
    frame: &mut Frame,
    entries: &[(Rect, usize)],
    items: &[MoveListItem],
    language: Language,
    selected: Option<usize>,
) {
    for (area, step) in entries {
        let Some(item) = items.iter().find(|i| i.step == *step) else {
            continue;
        };
        render_entry(frame, *area, item, language, selected == Some(*step));
    }
}

fn render_entry(
    frame: &mut Frame,
    area: Rect,
    item: &MoveListItem,
    language: Language,
    is_selected: bool,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(MINI_BOARD_WIDTH)])
        .split(area);

    let mut label_style = Style::default();
    if item.is_current {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    if is_selected {
        label_style = label_style.fg(Color::Black).bg(Color::Yellow);
    }

    let marker = if is_selected { "▸ " } else { "  " };
    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled(language.move_label(item.label), label_style),
    ])];
    if let Some(placement) = item.placement {
        lines.push(Line::from(Span::styled(
            format!("  {placement}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), cols[0]);

    frame.render_widget(Paragraph::new(mini_board(&item.board)), cols[1]);
}

fn mini_board(board: &Board) -> Vec<Line<'static>> {
    Position::ROWS
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|pos| match board.get(*pos) {
                    Square::Empty => "·".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                })
                .collect();
            Line::from(Span::styled(cells.join(" "), Style::default().fg(Color::Gray)))
        })
        .collect()
}
