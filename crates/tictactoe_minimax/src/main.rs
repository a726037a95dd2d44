//! Tic-tac-toe minimax - CLI driver
//!
//! Thin wrapper over the library: parse a board, ask the solver, print.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde_json::json;
use tictactoe_minimax::{
    Board, Solver, SolverConfig, initial_state, minimax_value, optimal_actions, player, result,
    utility, winner,
};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    debug!(?config, "Solver configuration");

    match cli.command {
        Command::Solve { board, json } => run_solve(config, &board, json),
        Command::Value { board } => run_value(&board),
        Command::Play { board } => run_play(config, board.as_deref()),
    }
}

/// Merges the optional config file with command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<SolverConfig> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_file(path)?,
        None => SolverConfig::default(),
    };
    if cli.seed.is_some() {
        config = config.with_seed(cli.seed);
    }
    if let Some(tie_break) = cli.tie_break {
        config = config.with_tie_break(tie_break);
    }
    Ok(config)
}

fn parse_board(text: &str) -> Result<Board> {
    text.parse::<Board>()
        .with_context(|| format!("invalid board {:?}", text))
}

/// Print one optimal move
fn run_solve(config: SolverConfig, text: &str, as_json: bool) -> Result<()> {
    let board = parse_board(text)?;
    let optimal = optimal_actions(&board)?;
    let action = Solver::new(config).select(&optimal)?;

    if as_json {
        let out = json!({
            "board": board.to_string(),
            "player": optimal.player().to_string(),
            "value": optimal.value(),
            "action": action,
            "optimal": optimal.actions(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} to move, value {}", optimal.player(), optimal.value());
        println!("best move: {}", action);
        println!("{}", result(&board, action)?.grid());
    }
    Ok(())
}

/// Print the minimax value
fn run_value(text: &str) -> Result<()> {
    let board = parse_board(text)?;
    tictactoe_minimax::validate(&board)?;
    println!("{} to move, value {}", player(&board), minimax_value(&board));
    Ok(())
}

/// Self-play from a starting board
fn run_play(config: SolverConfig, text: Option<&str>) -> Result<()> {
    let start = match text {
        Some(text) => parse_board(text)?,
        None => initial_state(),
    };
    let playout = Solver::new(config).play_out(&start)?;

    let mut board = start;
    println!("{}\n", board.grid());
    for action in playout.moves() {
        let mover = player(&board);
        board = result(&board, *action)?;
        println!("{} plays {}\n{}\n", mover, action, board.grid());
    }

    match winner(playout.finish()) {
        Some(p) => println!("{} wins (utility {})", p, utility(playout.finish())),
        None => println!("Draw"),
    }
    Ok(())
}
