//! Game session: one history plus the observers that re-render it.

use super::action::Action;
use super::error::HistoryError;
use super::history::{GameHistory, GameStatus, HistoryItem, IgnoreReason, PlayOutcome};
use super::rules::WinResult;
use super::{Board, Mark, Position};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// State change reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Change {
    /// A mark was placed and appended as a new entry.
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// Move number of the new entry.
        move_number: usize,
    },
    /// The cursor moved.
    Jumped {
        /// Move number now displayed.
        move_number: usize,
    },
    /// The history list order flipped.
    Reordered {
        /// New presentation order.
        ascending: bool,
    },
}

/// What an applied action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionOutcome {
    /// State changed; observers were notified.
    Changed(Change),
    /// State unchanged; observers were not notified.
    Ignored(IgnoreReason),
}

/// Receives a notification after every state change of a session.
///
/// Observers re-read whatever derived state they need from the history.
pub trait SessionObserver {
    /// Called once per state change, after the change is committed.
    fn on_change(&mut self, history: &GameHistory, change: &Change);
}

impl<F> SessionObserver for F
where
    F: FnMut(&GameHistory, &Change),
{
    fn on_change(&mut self, history: &GameHistory, change: &Change) {
        self(history, change)
    }
}

/// Everything a presentation surface reads after a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Board snapshots in storage order.
    pub entries: Vec<Board>,
    /// Displayed entry.
    pub cursor: usize,
    /// The displayed board.
    pub board: Board,
    /// Derived status.
    pub status: GameStatus,
    /// Status line, e.g. `"Next player: O"`.
    pub status_text: String,
    /// Winning line of the displayed board, if any.
    pub win: Option<WinResult>,
    /// History list in presented order.
    pub history: Vec<HistoryItem>,
    /// Presentation order of the history list.
    pub display_ascending: bool,
    /// `"You are at move #N"`.
    pub cursor_label: String,
    /// Caption of the sort toggle.
    pub sort_toggle_label: String,
}

impl GameView {
    /// Collects the derived state of `history`.
    ///
    /// # Errors
    ///
    /// Propagates [`HistoryError::InvariantViolation`] from move labels.
    pub fn of(history: &GameHistory) -> Result<Self, HistoryError> {
        let status = history.status();
        Ok(Self {
            entries: history.entries().to_vec(),
            cursor: history.cursor(),
            board: *history.current_board(),
            status,
            status_text: status.to_string(),
            win: history.win(),
            history: history.history_items()?,
            display_ascending: history.display_ascending(),
            cursor_label: history.cursor_label(),
            sort_toggle_label: history.sort_toggle_label().to_string(),
        })
    }
}

/// A single game session.
///
/// Owns the [`GameHistory`] and forwards actions to it. The history
/// itself knows nothing about observers.
pub struct GameSession {
    id: String,
    history: GameHistory,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameSession {
    /// Creates a session with a fresh history.
    #[instrument(skip(id))]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            history: GameHistory::new(),
            observers: Vec::new(),
        }
    }

    /// Creates a session around an existing history.
    pub fn with_history(id: impl Into<String>, history: GameHistory) -> Self {
        Self {
            id: id.into(),
            history,
            observers: Vec::new(),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The session's history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
        debug!(session_id = %self.id, observers = self.observers.len(), "Observer subscribed");
    }

    /// Applies one action and notifies observers if state changed.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] for a jump to an unknown move.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome, HistoryError> {
        let change = match action {
            Action::Play(position) => match self.history.play(position) {
                PlayOutcome::Placed {
                    mark,
                    position,
                    move_number,
                } => Change::Placed {
                    mark,
                    position,
                    move_number,
                },
                PlayOutcome::Ignored(reason) => {
                    debug!(?reason, "Play ignored");
                    return Ok(ActionOutcome::Ignored(reason));
                }
            },
            Action::JumpTo(move_number) => {
                self.history.jump_to(move_number).inspect_err(|e| {
                    warn!(error = %e, "Jump rejected");
                })?;
                Change::Jumped { move_number }
            }
            Action::ToggleSort => {
                self.history.toggle_sort_order();
                Change::Reordered {
                    ascending: self.history.display_ascending(),
                }
            }
        };

        self.notify(&change);
        Ok(ActionOutcome::Changed(change))
    }

    /// Current derived state for rendering.
    pub fn view(&self) -> Result<GameView, HistoryError> {
        GameView::of(&self.history)
    }

    fn notify(&mut self, change: &Change) {
        for observer in &mut self.observers {
            observer.on_change(&self.history, change);
        }
    }
}
