//! Turn inference from mark counts.

use crate::{Board, Player};
use tracing::instrument;

/// Returns the player who moves next on `board`.
///
/// X moves first and players alternate, so O is to move exactly when X
/// has more marks. Over-played boards are not rejected here.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}
