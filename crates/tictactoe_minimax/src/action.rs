//! First-class action types for tic-tac-toe.
//!
//! An action only names a cell. The mark placed there is always derived
//! from the board it is applied to.

use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: the `(row, col)` of the cell to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Creates a new action. Bounds are checked when the action is applied.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row of this action.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this action.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when applying a move or choosing one.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The action points outside the 3x3 board.
    #[display("Action ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell at the action is already occupied.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(Action),

    /// Move selection was asked for on a finished or full board.
    #[display("No move available: the game is over")]
    NoMoveAvailable,

    /// The board cannot arise from alternating play.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(String),

    /// A transition postcondition failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// Board text could not be parsed.
    #[display("Could not parse board: {}", _0)]
    Parse(String),
}

impl GameError {
    /// True for errors caused by an illegal action (bad coordinates or an occupied cell).
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, GameError::OutOfBounds { .. } | GameError::SquareOccupied(_))
    }
}

impl std::error::Error for GameError {}
