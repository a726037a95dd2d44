//! Legal move enumeration.

use crate::types::SIZE;
use crate::{Action, Board};
use tracing::instrument;

/// Returns every empty cell on `board` in row-major order.
///
/// Each empty cell appears exactly once. A full board yields no actions.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn actions(board: &Board) -> Vec<Action> {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| Action::new(row, col)))
        .filter(|a| board.is_empty_at(a.row(), a.col()))
        .collect()
}
