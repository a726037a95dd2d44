//! Entry points for driving a game from the empty board.

use crate::rules::{result, terminal};
use crate::{Action, Board, GameError};
use tracing::instrument;

/// Returns the starting board: every cell empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Replays `moves` from the initial state, X first.
///
/// Stops with the first illegal action's error, or with
/// [`GameError::NoMoveAvailable`] if a move follows the end of the game.
#[instrument]
pub fn replay(moves: &[Action]) -> Result<Board, GameError> {
    moves.iter().try_fold(initial_state(), |board, action| {
        if terminal(&board) {
            return Err(GameError::NoMoveAvailable);
        }
        result(&board, *action)
    })
}
