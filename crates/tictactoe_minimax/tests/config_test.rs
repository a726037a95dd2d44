//! Tests for loading solver configuration from disk.

use std::io::Write;
use tictactoe_minimax::{Action, Board, Solver, SolverConfig, TieBreak};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tie_break = \"first\"").unwrap();
    writeln!(file, "seed = 3").unwrap();

    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.tie_break(), TieBreak::First);
    assert_eq!(*config.seed(), Some(3));

    let mut solver = Solver::new(config);
    assert_eq!(solver.best_move(&Board::new()).unwrap(), Action::new(0, 0));
}

#[test]
fn test_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tie_break = \"sideways\"").unwrap();

    let err = SolverConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
