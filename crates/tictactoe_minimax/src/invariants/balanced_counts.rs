//! Balanced counts invariant: X has the same number of marks as O, or one more.

use super::Invariant;
use crate::{Board, Player};
use tracing::warn;

/// Invariant: marks alternate starting with X.
///
/// `count(X) - count(O)` is 0 or 1 on every reachable board.
pub struct BalancedCountsInvariant;

impl Invariant<Board> for BalancedCountsInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate starting with X (X count equals O count or exceeds it by one)"
    }
}
