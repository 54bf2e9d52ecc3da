//! Finality invariant: nothing is played after a win.

use super::super::{GameHistory, rules};
use super::Invariant;

/// Invariant: an entry with a winner is the last entry of the history.
///
/// Draws need no check; a full board cannot take another single-step move.
pub struct DecidedIsFinalInvariant;

impl Invariant<GameHistory> for DecidedIsFinalInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .windows(2)
            .all(|pair| rules::evaluate(&pair[0]).is_none())
    }

    fn description() -> &'static str {
        "No move follows a won board"
    }
}
