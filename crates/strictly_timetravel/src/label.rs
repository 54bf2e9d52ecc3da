//! Move labels derived from consecutive board snapshots.

use super::error::HistoryError;
use super::{Board, Position};
use tracing::{instrument, warn};

/// Label for the starting board.
pub const GAME_START_LABEL: &str = "Go to game start";

/// Finds the single cell that differs between two consecutive snapshots.
///
/// # Errors
///
/// Returns [`HistoryError::InvariantViolation`] when no cell or more
/// than one cell differs.
#[instrument(level = "debug", skip(prev, next))]
pub fn changed_cell(prev: &Board, next: &Board) -> Result<Position, HistoryError> {
    let mut changed = Position::ALL
        .iter()
        .copied()
        .filter(|pos| prev.get(*pos) != next.get(*pos));

    match (changed.next(), changed.next()) {
        (Some(pos), None) => Ok(pos),
        (None, _) => {
            warn!("Consecutive boards are identical");
            Err(HistoryError::InvariantViolation(
                "consecutive boards do not differ".to_string(),
            ))
        }
        (Some(_), Some(_)) => {
            let count = 2 + changed.count();
            warn!(count, "Consecutive boards differ in several cells");
            Err(HistoryError::InvariantViolation(format!(
                "consecutive boards differ in {count} cells"
            )))
        }
    }
}

/// Formats the label for move `move_number` reached from `prev` to `next`.
///
/// Produces `"Go to move #N (row, col)"` with 1-based coordinates.
pub fn describe_move(
    move_number: usize,
    prev: &Board,
    next: &Board,
) -> Result<String, HistoryError> {
    let pos = changed_cell(prev, next)?;
    Ok(format!(
        "Go to move #{move_number} ({}, {})",
        pos.row(),
        pos.col()
    ))
}
