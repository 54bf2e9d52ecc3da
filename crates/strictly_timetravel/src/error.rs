//! Error types for history operations.

/// Error returned by history and session operations.
///
/// Playing on an occupied cell or a decided board is not an error;
/// see [`PlayOutcome::Ignored`](crate::PlayOutcome::Ignored).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// Requested move number is not in the history.
    #[display("Move #{requested} is out of range (history has {len} entries)")]
    OutOfRange {
        /// The move number asked for.
        requested: usize,
        /// Number of entries in the history.
        len: usize,
    },

    /// Raw cell index outside 0-8.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    CellOutOfRange(usize),

    /// The entries sequence is corrupted.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),

    /// An action could not be parsed.
    #[display("Could not parse action: {_0}")]
    Parse(String),
}

impl HistoryError {
    /// Whether the error means the session can no longer be trusted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HistoryError::InvariantViolation(_))
    }
}

impl std::error::Error for HistoryError {}
