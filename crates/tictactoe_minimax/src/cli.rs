//! Command-line interface for tictactoe-minimax.

use clap::{Parser, Subcommand};
use tictactoe_minimax::TieBreak;

/// Tic-tac-toe minimax - exact optimal play on the 3x3 board
#[derive(Parser, Debug)]
#[command(name = "tictactoe-minimax")]
#[command(about = "Exact minimax solver for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML solver config
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Seed for random tie-breaks (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Tie-break policy: random or first (overrides the config file)
    #[arg(long, global = true)]
    pub tie_break: Option<TieBreak>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print an optimal move for the player to move
    Solve {
        /// Board as three rows of X, O or '.', separated by '/' (e.g. "XX./OO./...")
        #[arg(short, long)]
        board: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the game value of a position
    Value {
        /// Board as three rows of X, O or '.', separated by '/'
        #[arg(short, long)]
        board: String,
    },

    /// Let the solver play both sides until the game ends
    Play {
        /// Starting board (defaults to the empty board)
        #[arg(short, long)]
        board: Option<String>,
    },
}
