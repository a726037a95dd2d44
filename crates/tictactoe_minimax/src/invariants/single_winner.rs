//! Single winner invariant: at most one player owns a completed line.

use super::Invariant;
use crate::rules::completed_lines;
use crate::{Board, Player};

/// Invariant: X and O never both have three in a row.
///
/// Play stops at the first completed line, so a reachable board can
/// contain lines of only one player (two lines are possible when a single
/// move completes both).
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let mut owners = completed_lines(board);
        match owners.next() {
            Some(first) => owners.all(|p: Player| p == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lines_holds() {
        assert!(SingleWinnerInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_double_line_same_player_holds() {
        // X's last move at the corner completed a row and a column.
        let board: Board = "XXX/OOX/OOX".parse().unwrap();
        assert!(SingleWinnerInvariant::holds(&board));
    }

    #[test]
    fn test_both_players_violates() {
        let board: Board = "XXX/OOO/X..".parse().unwrap();
        assert!(!SingleWinnerInvariant::holds(&board));
    }
}
