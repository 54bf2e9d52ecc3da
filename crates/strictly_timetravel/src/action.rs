//! First-class user actions.
//!
//! Actions are the inbound calls a presentation surface forwards to the
//! model. They can be parsed from text, serialized for replay and
//! logged.

use super::Position;
use super::error::HistoryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user action against a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum Action {
    /// Click on a board cell.
    Play(Position),
    /// Click on a history entry.
    JumpTo(usize),
    /// Click on the sort toggle.
    ToggleSort,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(pos) => write!(f, "play {}", pos.to_index()),
            Action::JumpTo(move_number) => write!(f, "jump {move_number}"),
            Action::ToggleSort => write!(f, "sort"),
        }
    }
}

impl FromStr for Action {
    type Err = HistoryError;

    /// Parses `play <cell>`, `jump <move>` or `sort`.
    ///
    /// `<cell>` is an index (0-8) or a position label such as
    /// `center` or `top-left`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = match s.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (s, ""),
        };

        match (verb.to_lowercase().as_str(), arg) {
            ("play", arg) if !arg.is_empty() => {
                if let Ok(index) = arg.parse::<usize>() {
                    return Position::from_index(index)
                        .map(Action::Play)
                        .ok_or(HistoryError::CellOutOfRange(index));
                }
                Position::from_label_or_number(arg)
                    .map(Action::Play)
                    .ok_or_else(|| HistoryError::Parse(format!("unknown cell '{arg}'")))
            }
            ("jump", arg) if !arg.is_empty() => arg
                .parse::<usize>()
                .map(Action::JumpTo)
                .map_err(|_| HistoryError::Parse(format!("invalid move number '{arg}'"))),
            ("sort", "") => Ok(Action::ToggleSort),
            _ => Err(HistoryError::Parse(format!(
                "expected 'play <cell>', 'jump <move>' or 'sort', got '{s}'"
            ))),
        }
    }
}

/// Parses a `;`- or newline-separated action script, skipping blanks.
pub fn parse_script(script: &str) -> Result<Vec<Action>, HistoryError> {
    script
        .split([';', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::parse::<Action>)
        .collect()
}
