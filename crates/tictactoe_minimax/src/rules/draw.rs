//! Draw and terminal detection for tic-tac-toe.

use super::win::winner;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|c| c != Cell::Empty)
}

/// Checks if the game is over: someone has won or no empty cell remains.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}
