//! Cursor invariant: the cursor points at an existing entry.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `cursor < entries.len()`.
pub struct CursorInRangeInvariant;

impl Invariant<GameHistory> for CursorInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.cursor() < history.entries().len()
    }

    fn description() -> &'static str {
        "The cursor indexes an existing entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_cursor_past_end_violates() {
        let history = GameHistory::from_parts_unchecked(vec![Board::new()], 1, true);
        assert!(!CursorInRangeInvariant::holds(&history));
    }
}
