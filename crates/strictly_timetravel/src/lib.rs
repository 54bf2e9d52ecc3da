//! Strictly Timetravel - tic-tac-toe with a time-travelling move history
//!
//! The model behind a single-page 3x3 game widget. A presentation
//! surface forwards user actions into a [`GameSession`] and re-reads the
//! derived state after every change.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over one board snapshot
//! - **History**: board snapshots, cursor, branch discard and sort order
//! - **Invariants**: composable checks every history must satisfy
//! - **Session**: applies actions and notifies observers
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameHistory, GameStatus, Mark, Position};
//!
//! let mut history = GameHistory::new();
//! history.play(Position::Center);
//! assert_eq!(history.move_label(1).unwrap(), "Go to move #1 (2, 2)");
//! assert_eq!(history.status(), GameStatus::InProgress(Mark::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod error;
mod history;
mod label;
mod position;
mod session;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Cell, Mark};

// Crate-level exports - History
pub use error::HistoryError;
pub use history::{
    GameHistory, GameStatus, HistoryItem, HistorySnapshot, IgnoreReason, PlayOutcome,
};
pub use label::{GAME_START_LABEL, changed_cell, describe_move};
pub use rules::WinResult;

// Crate-level exports - Session management
pub use action::{Action, parse_script};
pub use session::{ActionOutcome, Change, GameSession, GameView, SessionObserver};
