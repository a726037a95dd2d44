//! Core domain types for tic-tac-toe.

use crate::action::{Action, GameError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Character used for this cell in the board text form.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '-' | '_' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Occupied(Player::X)),
            'O' | 'o' => Some(Cell::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// Side length of the board.
pub const SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition produces a new board and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks if the cell at `(row, col)` is empty.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|c| *c == Cell::Occupied(player))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|c| *c != Cell::Empty).count()
    }

    /// Returns a copy with the cell at `action` replaced.
    ///
    /// Callers guarantee `action` is in bounds.
    pub(crate) fn with_cell(mut self, action: Action, cell: Cell) -> Self {
        self.cells[action.row()][action.col()] = cell;
        self
    }

    /// Formats the board as a human-readable grid.
    pub fn grid(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses `"XX./OO./..."`. Rows may be separated by `/`, `|` or newlines.
    ///
    /// Spaces are empty cells, so rows are not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '|', '\n'])
            .map(|r| r.trim_end_matches('\r'))
            .filter(|r| !r.is_empty())
            .collect();

        if rows.len() != SIZE {
            return Err(GameError::Parse(format!(
                "expected {} rows, found {}",
                SIZE,
                rows.len()
            )));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().collect();
            if symbols.len() != SIZE {
                return Err(GameError::Parse(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    symbols.len(),
                    SIZE
                )));
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                cells[r][c] = Cell::from_symbol(symbol).ok_or_else(|| {
                    GameError::Parse(format!("invalid cell {:?} at ({}, {})", symbol, r, c))
                })?;
            }
        }

        Ok(Self { cells })
    }
}
