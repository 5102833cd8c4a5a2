//! Screen layout and mouse hit-testing.
//!
//! The same [`AppLayout`] drives drawing and click handling, so a click
//! always lands on what was drawn in the last frame.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tictactoe_timeline::Position;

/// Width of one square, borders included.
pub const SQUARE_WIDTH: u16 = 7;
/// Height of one square, borders included.
pub const SQUARE_HEIGHT: u16 = 3;
/// Rows taken by one move-list entry.
pub const ITEM_HEIGHT: u16 = 3;
/// Columns taken by the mini-board of a move-list entry.
pub const MINI_BOARD_WIDTH: u16 = 5;

const BOARD_WIDTH: u16 = SQUARE_WIDTH * 3;
const BOARD_HEIGHT: u16 = SQUARE_HEIGHT * 3;
const BOARD_PANE_WIDTH: u16 = BOARD_WIDTH + 4;
const SORT_TOGGLE_WIDTH: u16 = 3;

/// Something on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board square.
    Square(Position),
    /// The move-list sort toggle.
    SortToggle,
    /// The move-list entry for this absolute step.
    MoveEntry(usize),
}

/// Areas of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    /// Bordered pane around the board.
    pub board_pane: Rect,
    /// One rect per square, row-major.
    pub squares: [Rect; 9],
    /// Bordered pane around the status line.
    pub status_pane: Rect,
    /// Status text inside the status pane.
    pub status: Rect,
    /// Sort toggle inside the status pane.
    pub sort_toggle: Rect,
    /// Bordered pane around the move list.
    pub moves_pane: Rect,
    /// Visible move-list entries as (area, absolute step), top to bottom.
    pub entries: Vec<(Rect, usize)>,
    /// Key help line.
    pub help: Rect,
}

impl AppLayout {
    /// Splits `area` for a move list whose rows show `steps` in display
    /// order, scrolled so that row `focus_row` is visible.
    pub fn compute(area: Rect, steps: &[usize], focus_row: usize) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_PANE_WIDTH), Constraint::Min(0)])
            .split(outer[0]);

        let board_pane = main[0];
        let squares = square_rects(center_rect(inner(board_pane), BOARD_WIDTH, BOARD_HEIGHT));

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(main[1]);

        let status_pane = info[0];
        let status_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(SORT_TOGGLE_WIDTH)])
            .split(inner(status_pane));

        let moves_pane = info[1];
        let entries = entry_rects(inner(moves_pane), steps, focus_row);

        Self {
            board_pane,
            squares,
            status_pane,
            status: status_row[0],
            sort_toggle: status_row[1],
            moves_pane,
            entries,
            help: outer[1],
        }
    }

    /// What sits under the terminal cell at (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        let point = ratatui::layout::Position::new(column, row);

        if let Some(index) = self.squares.iter().position(|r| r.contains(point)) {
            return Position::from_index(index).map(Target::Square);
        }
        if self.sort_toggle.contains(point) {
            return Some(Target::SortToggle);
        }
        self.entries
            .iter()
            .find(|(r, _)| r.contains(point))
            .map(|(_, step)| Target::MoveEntry(*step))
    }
}

fn square_rects(board: Rect) -> [Rect; 9] {
    let mut rects = [Rect::default(); 9];
    for pos in Position::ALL {
        let x = board.x + SQUARE_WIDTH * pos.col() as u16;
        let y = board.y + SQUARE_HEIGHT * pos.row() as u16;
        rects[pos.to_index()] = Rect::new(x, y, SQUARE_WIDTH, SQUARE_HEIGHT).intersection(board);
    }
    rects
}

fn entry_rects(list: Rect, steps: &[usize], focus_row: usize) -> Vec<(Rect, usize)> {
    let visible = usize::from(list.height / ITEM_HEIGHT);
    if visible == 0 {
        return Vec::new();
    }
    let focus_row = focus_row.min(steps.len().saturating_sub(1));
    let offset = (focus_row + 1).saturating_sub(visible);

    steps
        .iter()
        .skip(offset)
        .take(visible)
        .enumerate()
        .map(|(i, step)| {
            let y = list.y + ITEM_HEIGHT * i as u16;
            (Rect::new(list.x, y, list.width, ITEM_HEIGHT), *step)
        })
        .collect()
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(steps: &[usize], focus_row: usize) -> AppLayout {
        AppLayout::compute(Rect::new(0, 0, 80, 24), steps, focus_row)
    }

    #[test]
    fn test_squares_are_hit() {
        let layout = layout(&[0], 0);
        for pos in Position::ALL {
            let r = layout.squares[pos.to_index()];
            assert_eq!(r.width, SQUARE_WIDTH);
            assert_eq!(layout.hit(r.x + 3, r.y + 1), Some(Target::Square(pos)));
        }
    }

    #[test]
    fn test_sort_toggle_is_hit() {
        let layout = layout(&[0], 0);
        let r = layout.sort_toggle;
        assert_eq!(layout.hit(r.x, r.y), Some(Target::SortToggle));
    }

    #[test]
    fn test_entries_follow_display_order() {
        let layout = layout(&[2, 1, 0], 0);
        let steps: Vec<usize> = layout.entries.iter().map(|(_, s)| *s).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        let (r, _) = layout.entries[1];
        assert_eq!(layout.hit(r.x + 1, r.y + 2), Some(Target::MoveEntry(1)));
    }

    #[test]
    fn test_entries_scroll_to_focus_row() {
        let steps: Vec<usize> = (0..=9).collect();
        // 24 rows - help - status pane - moves borders = 18 rows, 6 entries.
        let layout = layout(&steps, 9);
        assert_eq!(layout.entries.len(), 6);
        assert_eq!(layout.entries.first().map(|(_, s)| *s), Some(4));
        assert_eq!(layout.entries.last().map(|(_, s)| *s), Some(9));
    }

    #[test]
    fn test_miss_returns_none() {
        let layout = layout(&[0], 0);
        assert_eq!(layout.hit(0, 23), None);
    }
}
