//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then the two diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the owner of every completed line, in [`LINES`] order.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = Player> + '_ {
    LINES.iter().filter_map(move |[a, b, c]| {
        let cell = board.get(a.0, a.1)?;
        match cell {
            Cell::Occupied(player)
                if board.get(b.0, b.1) == Some(cell) && board.get(c.0, c.1) == Some(cell) =>
            {
                Some(player)
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line, `None` otherwise.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn winner(board: &Board) -> Option<Player> {
    completed_lines(board).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.O.".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X/.OX/X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "O.X/OX./X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.../...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // Malformed: both players own a line; the row is found first.
        let board: Board = "OOO/XXX/X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
        assert_eq!(completed_lines(&board).count(), 2);
    }
}
