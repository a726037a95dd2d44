//! Contract-based validation for board transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::rules::player;
use crate::types::SIZE;
use crate::{Action, Board, Cell, GameError};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Action Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the action must address a cell of the 3x3 board.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates outside `0..3`.
    pub fn check(action: &Action) -> Result<(), GameError> {
        if action.row() >= SIZE || action.col() >= SIZE {
            Err(GameError::OutOfBounds {
                row: action.row(),
                col: action.col(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell at the action must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects actions on occupied cells.
    pub fn check(action: &Action, board: &Board) -> Result<(), GameError> {
        if !board.is_empty_at(action.row(), action.col()) {
            Err(GameError::SquareOccupied(*action))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: an action is legal if it is in bounds and the cell is empty.
pub struct LegalAction;

impl LegalAction {
    /// Validates all preconditions for an action.
    pub fn check(action: &Action, board: &Board) -> Result<(), GameError> {
        InBounds::check(action)?;
        CellIsEmpty::check(action, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`crate::result`].
///
/// Preconditions:
/// - Action is in bounds
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one cell changed
/// - That cell went from empty to the mark of the player who was to move
pub struct TransitionContract;

impl Contract<Board, Action> for TransitionContract {
    fn pre(board: &Board, action: &Action) -> Result<(), GameError> {
        LegalAction::check(action, board)
    }

    #[instrument(level = "trace", skip_all)]
    fn post(before: &Board, after: &Board) -> Result<(), GameError> {
        let mover = Cell::Occupied(player(before));
        let changed: Vec<(Cell, Cell)> = before
            .cells()
            .zip(after.cells())
            .filter(|(b, a)| b != a)
            .collect();

        match changed.as_slice() {
            [(Cell::Empty, placed)] if *placed == mover => Ok(()),
            _ => {
                warn!(%before, %after, changed = changed.len(), "Transition postcondition failed");
                Err(GameError::InvariantViolation(format!(
                    "expected one empty cell to become {}, {} cells changed",
                    mover.symbol(),
                    changed.len()
                )))
            }
        }
    }
}
