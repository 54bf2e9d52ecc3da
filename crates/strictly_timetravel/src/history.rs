//! Move history with time travel.
//!
//! [`GameHistory`] owns every board snapshot of a game and a cursor
//! into them. Playing from an earlier cursor discards the later
//! snapshots (branch discard); jumping only moves the cursor. The sort
//! toggle changes the presented order of the history list and nothing
//! else: move numbers always refer to storage indices.

use super::error::HistoryError;
use super::invariants::{self, HistoryInvariants, InvariantSet};
use super::label::{GAME_START_LABEL, describe_move};
use super::rules::{self, WinResult};
use super::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Derived status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// A line of three was completed.
    Winner(Mark),
    /// Board full, no line.
    Draw,
    /// Game continues; holds the mark to play.
    InProgress(Mark),
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Winner(mark) => write!(f, "Winner: {mark}"),
            GameStatus::Draw => write!(f, "It's a draw!"),
            GameStatus::InProgress(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

/// Why a play was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The cell already holds a mark.
    Occupied,
    /// The displayed board already has a winner.
    Decided,
}

/// Result of [`GameHistory::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// A new entry was appended.
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// Move number of the new entry.
        move_number: usize,
    },
    /// State unchanged.
    Ignored(IgnoreReason),
}

/// One row of the presented history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct HistoryItem {
    /// Storage index of the entry.
    move_number: usize,
    /// Button label, e.g. `"Go to move #3 (1, 2)"`.
    label: String,
    /// Whether this entry is the one displayed.
    is_current: bool,
}

/// Serialized form of a [`GameHistory`].
///
/// Deserializing a `GameHistory` goes through [`GameHistory::restore`],
/// so a corrupted snapshot is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Board snapshots; index is the move number.
    pub entries: Vec<Board>,
    /// Displayed entry.
    pub cursor: usize,
    /// Presentation order of the history list.
    pub display_ascending: bool,
}

/// Board snapshots of one game session plus the displayed cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistorySnapshot", into = "HistorySnapshot")]
pub struct GameHistory {
    entries: Vec<Board>,
    cursor: usize,
    display_ascending: bool,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![Board::new()],
            cursor: 0,
            display_ascending: true,
        }
    }

    /// Rebuilds a history from its parts, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvariantViolation`] naming each violated
    /// invariant.
    #[instrument(skip(entries), fields(len = entries.len()))]
    pub fn restore(
        entries: Vec<Board>,
        cursor: usize,
        display_ascending: bool,
    ) -> Result<Self, HistoryError> {
        let history = Self {
            entries,
            cursor,
            display_ascending,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let description = invariants::describe(&violations);
            warn!(%description, "Rejected history snapshot");
            HistoryError::InvariantViolation(description)
        })?;
        Ok(history)
    }

    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(
        entries: Vec<Board>,
        cursor: usize,
        display_ascending: bool,
    ) -> Self {
        Self {
            entries,
            cursor,
            display_ascending,
        }
    }

    /// All board snapshots in storage order.
    pub fn entries(&self) -> &[Board] {
        &self.entries
    }

    /// Index of the displayed entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move number of the last stored entry.
    pub fn last_move(&self) -> usize {
        self.entries.len() - 1
    }

    /// Whether the history list is presented oldest first.
    pub fn display_ascending(&self) -> bool {
        self.display_ascending
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.entries[self.cursor]
    }

    /// Mark that plays next from the displayed board.
    pub fn next_mark(&self) -> Mark {
        Mark::to_play_at(self.cursor)
    }

    /// Winner of the displayed board, if any.
    pub fn win(&self) -> Option<WinResult> {
        rules::evaluate(self.current_board())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(win) = rules::evaluate(board) {
            GameStatus::Winner(*win.winner())
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_mark())
        }
    }

    /// Places the next mark at `position` on the displayed board.
    ///
    /// Ignored when the cell is occupied or the board is already won.
    /// Otherwise every entry after the cursor is dropped, the new board
    /// is appended and the cursor moves to it.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.entries.len()))]
    pub fn play(&mut self, position: Position) -> PlayOutcome {
        let board = *self.current_board();

        if !board.is_empty(position) {
            debug!(%position, "Cell already occupied, ignoring play");
            return PlayOutcome::Ignored(IgnoreReason::Occupied);
        }
        if rules::evaluate(&board).is_some() {
            debug!(%position, "Game already decided, ignoring play");
            return PlayOutcome::Ignored(IgnoreReason::Decided);
        }

        let mark = self.next_mark();
        let discarded = self.last_move() - self.cursor;
        self.entries.truncate(self.cursor + 1);
        self.entries.push(board.with_mark(position, mark));
        self.cursor = self.last_move();

        info!(%mark, %position, move_number = self.cursor, discarded, "Mark placed");
        self.debug_check();

        PlayOutcome::Placed {
            mark,
            position,
            move_number: self.cursor,
        }
    }

    /// [`play`](Self::play) with a raw cell index.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::CellOutOfRange`] if `index` is not 0-8.
    pub fn play_index(&mut self, index: usize) -> Result<PlayOutcome, HistoryError> {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Cell index out of range");
            HistoryError::CellOutOfRange(index)
        })?;
        Ok(self.play(position))
    }

    /// Moves the cursor to `move_number` without dropping any entries.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if there is no such entry.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), HistoryError> {
        self.check_move(move_number)?;
        self.cursor = move_number;
        info!(move_number, "Jumped to move");
        Ok(())
    }

    /// Flips the presented order of the history list.
    #[instrument(skip(self), fields(ascending = self.display_ascending))]
    pub fn toggle_sort_order(&mut self) {
        self.display_ascending = !self.display_ascending;
        debug!(ascending = self.display_ascending, "Toggled sort order");
    }

    /// Move numbers in presented order.
    pub fn display_order(&self) -> Vec<usize> {
        let moves = 0..self.entries.len();
        if self.display_ascending {
            moves.collect()
        } else {
            moves.rev().collect()
        }
    }

    /// Label of the history button for `move_number`.
    ///
    /// # Errors
    ///
    /// [`HistoryError::OutOfRange`] for an unknown move number and
    /// [`HistoryError::InvariantViolation`] if the entry does not differ
    /// from its predecessor in exactly one cell.
    pub fn move_label(&self, move_number: usize) -> Result<String, HistoryError> {
        self.check_move(move_number)?;
        if move_number == 0 {
            return Ok(GAME_START_LABEL.to_string());
        }
        describe_move(
            move_number,
            &self.entries[move_number - 1],
            &self.entries[move_number],
        )
    }

    /// The history list in presented order.
    pub fn history_items(&self) -> Result<Vec<HistoryItem>, HistoryError> {
        self.display_order()
            .into_iter()
            .map(|move_number| {
                Ok(HistoryItem {
                    move_number,
                    label: self.move_label(move_number)?,
                    is_current: move_number == self.cursor,
                })
            })
            .collect()
    }

    /// `"You are at move #N"` for the cursor.
    pub fn cursor_label(&self) -> String {
        format!("You are at move #{}", self.cursor)
    }

    /// Caption of the sort toggle button.
    pub fn sort_toggle_label(&self) -> &'static str {
        if self.display_ascending {
            "Sort Descending"
        } else {
            "Sort Ascending"
        }
    }

    fn check_move(&self, move_number: usize) -> Result<(), HistoryError> {
        if move_number < self.entries.len() {
            Ok(())
        } else {
            warn!(move_number, len = self.entries.len(), "Move out of range");
            Err(HistoryError::OutOfRange {
                requested: move_number,
                len: self.entries.len(),
            })
        }
    }

    fn debug_check(&self) {
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated"
        );
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<HistorySnapshot> for GameHistory {
    type Error = HistoryError;

    fn try_from(snapshot: HistorySnapshot) -> Result<Self, Self::Error> {
        Self::restore(
            snapshot.entries,
            snapshot.cursor,
            snapshot.display_ascending,
        )
    }
}

impl From<GameHistory> for HistorySnapshot {
    fn from(history: GameHistory) -> Self {
        Self {
            entries: history.entries,
            cursor: history.cursor,
            display_ascending: history.display_ascending,
        }
    }
}
