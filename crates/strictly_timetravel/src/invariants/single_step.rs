//! Single-step invariant: each entry adds exactly one mark.

use super::super::{Cell, GameHistory, Mark, Position};
use super::Invariant;

/// Invariant: consecutive entries differ in exactly one cell.
///
/// That cell goes from empty to the mark whose turn it was: X on odd
/// move numbers, O on even ones.
pub struct SingleStepInvariant;

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .windows(2)
            .enumerate()
            .all(|(idx, pair)| {
                let expected = Mark::for_move(idx + 1);
                let mut changed = Position::ALL
                    .iter()
                    .filter(|pos| pair[0].get(**pos) != pair[1].get(**pos));

                match (changed.next(), changed.next()) {
                    (Some(&pos), None) => {
                        pair[0].get(pos) == Cell::Empty
                            && pair[1].get(pos) == Cell::Occupied(expected)
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each move adds exactly one mark, alternating X and O"
    }
}
