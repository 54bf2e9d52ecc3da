//! Win detection.

use super::super::{Board, Cell, Mark, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
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

/// A decided board: who won and along which line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct WinResult {
    /// The winning mark.
    winner: Mark,
    /// The three cells forming the winning line.
    winning_cells: [Position; 3],
}

impl WinResult {
    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.winning_cells.contains(&pos)
    }
}

/// Evaluates a board for a winner.
///
/// Returns the first line, in [`LINES`] order, holding three identical
/// marks. A full board with no such line yields `None`; telling a draw
/// apart from an unfinished game is left to the caller.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(WinResult::new(mark, [a, b, c]))
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: &[(Position, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, mark)| board.with_mark(pos, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_of(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        let win = evaluate(&board).expect("top row wins");
        assert_eq!(*win.winner(), Mark::X);
        assert_eq!(
            *win.winning_cells(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
        assert!(win.contains(Position::TopCenter));
        assert!(!win.contains(Position::Center));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_of(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        let win = evaluate(&board).expect("diagonal wins");
        assert_eq!(*win.winner(), Mark::O);
        assert_eq!(
            *win.winning_cells(),
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // X holds both the top row and the left column.
        let board = board_of(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
        ]);
        let win = evaluate(&board).expect("winner");
        assert_eq!(
            *win.winning_cells(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_of(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for line in LINES {
                let board = board_of(&line.map(|pos| (pos, mark)));
                let win = evaluate(&board).expect("line wins");
                assert_eq!(*win.winner(), mark);
                assert_eq!(*win.winning_cells(), line);
            }
        }
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        // X O X / X O O / O X X
        let board = Board::from_cells([
            Cell::Occupied(Mark::X),
            Cell::Occupied(Mark::O),
            Cell::Occupied(Mark::X),
            Cell::Occupied(Mark::X),
            Cell::Occupied(Mark::O),
            Cell::Occupied(Mark::O),
            Cell::Occupied(Mark::O),
            Cell::Occupied(Mark::X),
            Cell::Occupied(Mark::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }
}
