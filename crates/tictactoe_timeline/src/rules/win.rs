//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// The 8 winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line of three identical marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The three positions forming the line.
    pub line: [Position; 3],
    /// The mark that fills the line.
    pub mark: Mark,
}

impl Win {
    /// Whether `pos` is one of the three winning squares.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first complete one wins,
/// so a board with two complete lines reports the earlier one.
#[instrument(level = "trace")]
pub fn detect_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            trace!(?line, %mark, "Line complete");
            return Some(Win { line, mark });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(line: [Position; 3], mark: Mark) -> Board {
        line.iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_for_both_marks() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let win = detect_winner(&fill(line, mark)).expect("line should win");
                assert_eq!(win.line, line);
                assert_eq!(win.mark, mark);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::X);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::O)
            .with_mark(Position::TopRight, Mark::X);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete for X.
        let board = fill(LINES[0], Mark::X)
            .with_mark(Position::MiddleLeft, Mark::X)
            .with_mark(Position::BottomLeft, Mark::X);
        let win = detect_winner(&board).expect("winner");
        assert_eq!(win.line, LINES[0]);
        assert!(win.contains(Position::TopRight));
        assert!(!win.contains(Position::BottomLeft));
    }
}
