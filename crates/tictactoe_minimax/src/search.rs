//! Exact minimax search over the full tic-tac-toe game tree.
//!
//! [`max_value`] and [`min_value`] call each other on successor boards
//! until a terminal board is reached. Both are deterministic; randomness
//! only enters when [`Solver`] picks among equally good moves.

use crate::config::{SolverConfig, TieBreak};
use crate::invariants::validate;
use crate::rules::transition::apply;
use crate::rules::{actions, player, terminal, utility};
use crate::{Action, Board, GameError, Player};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Lower than any utility.
const BELOW_MIN: i8 = -2;
/// Higher than any utility.
const ABOVE_MAX: i8 = 2;

/// Value of `board` when X, the maximizing player, is to move.
pub fn max_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }
    actions(board)
        .into_iter()
        .map(|action| min_value(&apply(board, action)))
        .fold(BELOW_MIN, i8::max)
}

/// Value of `board` when O, the minimizing player, is to move.
pub fn min_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }
    actions(board)
        .into_iter()
        .map(|action| max_value(&apply(board, action)))
        .fold(ABOVE_MAX, i8::min)
}

/// Game-theoretic value of `board` for the player whose turn it is.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax_value(board: &Board) -> i8 {
    match player(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Every action that reaches the optimal value, with that value.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct OptimalMoves {
    /// Player to move.
    player: Player,
    /// Value every listed action achieves.
    value: i8,
    /// Optimal actions in row-major order. Never empty.
    actions: Vec<Action>,
}

/// Scores every child of `board` and keeps the actions with the best score.
///
/// Each child is evaluated by the opponent's value function, so a move that
/// ends the game is scored by the utility of the board it produces.
///
/// # Errors
///
/// - [`GameError::MalformedBoard`] if the board breaks alternating play
/// - [`GameError::NoMoveAvailable`] if the board is terminal
#[instrument(skip(board), fields(board = %board))]
pub fn optimal_actions(board: &Board) -> Result<OptimalMoves, GameError> {
    validate(board)?;
    if terminal(board) {
        return Err(GameError::NoMoveAvailable);
    }

    let mover = player(board);
    let scored: Vec<(Action, i8)> = actions(board)
        .into_iter()
        .map(|action| {
            let child = apply(board, action);
            let value = match mover {
                Player::X => min_value(&child),
                Player::O => max_value(&child),
            };
            (action, value)
        })
        .collect();

    let values = scored.iter().map(|(_, v)| *v);
    let value = match mover {
        Player::X => values.max(),
        Player::O => values.min(),
    }
    .ok_or(GameError::NoMoveAvailable)?;

    let actions: Vec<Action> = scored
        .into_iter()
        .filter(|(_, v)| *v == value)
        .map(|(a, _)| a)
        .collect();

    debug!(player = %mover, value, optimal = actions.len(), "Scored candidate moves");
    Ok(OptimalMoves {
        player: mover,
        value,
        actions,
    })
}

/// Picks one of the optimal actions according to `tie_break`.
fn select<R: Rng>(
    optimal: &OptimalMoves,
    tie_break: TieBreak,
    rng: &mut R,
) -> Result<Action, GameError> {
    let choice = match tie_break {
        TieBreak::First => optimal.actions.first(),
        TieBreak::Random => optimal
            .actions
            .get(rng.random_range(0..optimal.actions.len().max(1))),
    };
    choice.copied().ok_or(GameError::NoMoveAvailable)
}

/// Returns an optimal action, breaking ties with `rng`.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn best_move_with_rng<R: Rng>(board: &Board, rng: &mut R) -> Result<Action, GameError> {
    let optimal = optimal_actions(board)?;
    select(&optimal, TieBreak::Random, rng)
}

/// Returns an optimal action for the player to move on `board`.
///
/// Among equally good actions one is picked at random.
///
/// # Errors
///
/// - [`GameError::MalformedBoard`] if the board breaks alternating play
/// - [`GameError::NoMoveAvailable`] if the board is terminal
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board) -> Result<Action, GameError> {
    best_move_with_rng(board, &mut rand::rng())
}

/// A finished self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Playout {
    /// Board play started from.
    start: Board,
    /// Actions played, in order.
    moves: Vec<Action>,
    /// Terminal board.
    finish: Board,
}

impl Playout {
    /// Utility of the final board.
    pub fn utility(&self) -> i8 {
        utility(&self.finish)
    }
}

/// Minimax player with a configurable tie-break and its own random source.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    rng: StdRng,
}

impl Solver {
    /// Creates a solver. A configured seed makes random tie-breaks reproducible.
    #[instrument]
    pub fn new(config: SolverConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates a solver using the given random source.
    pub fn with_rng(config: SolverConfig, rng: StdRng) -> Self {
        Self { config, rng }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns an optimal action for the player to move on `board`.
    #[instrument(skip(self, board), fields(board = %board, tie_break = %self.config.tie_break()))]
    pub fn best_move(&mut self, board: &Board) -> Result<Action, GameError> {
        let optimal = optimal_actions(board)?;
        self.select(&optimal)
    }

    /// Picks one action from an already scored position using the configured tie-break.
    pub fn select(&mut self, optimal: &OptimalMoves) -> Result<Action, GameError> {
        let action = select(optimal, *self.config.tie_break(), &mut self.rng)?;
        debug!(%action, value = optimal.value, "Selected move");
        Ok(action)
    }

    /// Plays optimal moves for both sides from `board` until the game ends.
    ///
    /// A board that is already terminal yields a playout with no moves.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn play_out(&mut self, board: &Board) -> Result<Playout, GameError> {
        validate(board)?;
        let mut current = *board;
        let mut moves = Vec::new();

        while !terminal(&current) {
            let action = self.best_move(&current)?;
            current = crate::rules::result(&current, action)?;
            moves.push(action);
        }

        info!(moves = moves.len(), finish = %current, utility = utility(&current), "Playout finished");
        Ok(Playout {
            start: *board,
            moves,
            finish: current,
        })
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
