//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold for every
//! [`GameHistory`](crate::GameHistory). They are checked after each
//! transition in debug builds and always when a history is restored
//! from a snapshot.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every
    /// violation found.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [(fn(&S) -> bool, fn() -> &'static str); 4] = [
            (I1::holds, I1::description),
            (I2::holds, I2::description),
            (I3::holds, I3::description),
            (I4::holds, I4::description),
        ];

        let violations: Vec<_> = checks
            .iter()
            .filter(|(holds, _)| !holds(state))
            .map(|(_, description)| InvariantViolation::new(description()))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod cursor_in_range;
pub mod decided_is_final;
pub mod single_step;
pub mod starts_empty;

pub use cursor_in_range::CursorInRangeInvariant;
pub use decided_is_final::DecidedIsFinalInvariant;
pub use single_step::SingleStepInvariant;
pub use starts_empty::StartsEmptyInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    StartsEmptyInvariant,
    SingleStepInvariant,
    CursorInRangeInvariant,
    DecidedIsFinalInvariant,
);

/// Joins violations into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
