//! Terminal payoff from X's point of view.

use super::win::winner;
use crate::{Board, Player};
use tracing::instrument;

/// Returns `1` if X has won, `-1` if O has won, `0` otherwise.
///
/// Only meaningful on terminal boards; an unfinished board scores `0`.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
