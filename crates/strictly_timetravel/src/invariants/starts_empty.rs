//! Start invariant: the first entry is the empty board.

use super::super::{Cell, GameHistory};
use super::Invariant;

/// Invariant: history is non-empty and begins with an empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .first()
            .is_some_and(|start| start.cells().iter().all(|c| *c == Cell::Empty))
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(StartsEmptyInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_empty_entries_violate() {
        let history = GameHistory::from_parts_unchecked(Vec::new(), 0, true);
        assert!(!StartsEmptyInvariant::holds(&history));
    }

    #[test]
    fn test_marked_start_violates() {
        let start = Board::new().with_mark(Position::Center, Mark::X);
        let history = GameHistory::from_parts_unchecked(vec![start], 0, true);
        assert!(!StartsEmptyInvariant::holds(&history));
    }
}
