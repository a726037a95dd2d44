//! Tic-tac-toe minimax - exact adversarial search on the 3x3 board
//!
//! Every position of tic-tac-toe can be searched to the end, so the solver
//! computes the true game value instead of estimating it.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`] and [`Action`] values
//! - **Rules**: turn inference, move enumeration, transitions, win/draw detection, utility
//! - **Invariants**: rejection of boards that alternating play cannot produce
//! - **Search**: [`max_value`] / [`min_value`] recursion and [`best_move`] selection
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{best_move, result, utility, Action, Board};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! let action = best_move(&board)?;
//! assert_eq!(action, Action::new(0, 2));
//! assert_eq!(utility(&result(&board, action)?), 1);
//! # Ok::<(), tictactoe_minimax::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod contracts;
mod game;
mod invariants;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use action::{Action, GameError};
pub use types::{Board, Cell, Player};

// Crate-level exports - Rules
pub use game::{initial_state, replay};
pub use rules::{actions, completed_lines, is_full, player, result, terminal, utility, winner};

// Crate-level exports - Validation
pub use contracts::{Contract, TransitionContract};
pub use invariants::{
    BalancedCountsInvariant, BoardInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleWinnerInvariant, validate,
};

// Crate-level exports - Search
pub use search::{
    OptimalMoves, Playout, Solver, best_move, best_move_with_rng, max_value, min_value,
    minimax_value, optimal_actions,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, SolverConfig, TieBreak};
