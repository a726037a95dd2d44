//! First-class board invariants for tic-tac-toe.
//!
//! Invariants are logical properties every board reachable by alternating
//! play satisfies. The search rejects boards that break them before it
//! starts.

use crate::{Board, GameError};
use tracing::instrument;

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
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod balanced_counts;
pub mod single_winner;

pub use balanced_counts::BalancedCountsInvariant;
pub use single_winner::SingleWinnerInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedCountsInvariant, SingleWinnerInvariant);

/// Rejects boards that cannot arise from alternating play starting with X.
#[instrument(skip(board), fields(board = %board))]
pub fn validate(board: &Board) -> Result<(), GameError> {
    BoardInvariants::check_all(board).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        GameError::MalformedBoard(descriptions)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
        assert!(validate(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_mid_game() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert!(validate(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Five X against one O, and both players own a row.
        let board: Board = "XXX/OOO/XX.".parse().unwrap();
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_validate_maps_to_malformed_board() {
        let board: Board = "OO./.../...".parse().unwrap();
        match validate(&board) {
            Err(GameError::MalformedBoard(msg)) => assert!(msg.contains("alternate")),
            other => panic!("expected malformed board, got {:?}", other),
        }
    }
}
