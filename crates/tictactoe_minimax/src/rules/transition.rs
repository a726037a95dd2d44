//! State transition: applying an action to a board.

use super::turn::player;
use crate::contracts::{Contract, TransitionContract};
use crate::{Action, Board, Cell, GameError};
use tracing::instrument;

/// Returns the board that results from the player to move filling `action`.
///
/// The input board is not modified.
///
/// Contract enforcement:
/// - Preconditions checked always (in bounds, cell empty)
/// - Postconditions checked in debug builds only
#[instrument(level = "trace", skip(board), fields(board = %board, %action))]
pub fn result(board: &Board, action: Action) -> Result<Board, GameError> {
    TransitionContract::pre(board, &action)?;

    let after = apply(board, action);

    #[cfg(debug_assertions)]
    TransitionContract::post(board, &after)?;

    Ok(after)
}

/// Applies an action already known to be legal on `board`.
///
/// Used by the search, whose actions always come from [`super::actions`]
/// on the same board.
pub(crate) fn apply(board: &Board, action: Action) -> Board {
    board.with_cell(action, Cell::Occupied(player(board)))
}
