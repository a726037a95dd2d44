//! Concrete positions with known optimal play.

use std::collections::HashSet;
use tictactoe_minimax::{
    Action, Board, GameError, Player, Solver, SolverConfig, TieBreak, actions, best_move,
    initial_state, minimax_value, optimal_actions, player, result, terminal, utility, winner,
};

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

/// Follows every optimal move from `board`, asserting each line ends in `expected`.
fn assert_all_optimal_lines_end_in(board: Board, expected: i8, seen: &mut HashSet<Board>) {
    if !seen.insert(board) {
        return;
    }
    if terminal(&board) {
        assert_eq!(utility(&board), expected, "optimal line ended at {}", board);
        return;
    }
    let optimal = optimal_actions(&board).unwrap();
    assert_eq!(*optimal.value(), expected, "value drifted at {}", board);
    for action in optimal.actions() {
        let next = result(&board, *action).unwrap();
        assert_all_optimal_lines_end_in(next, expected, seen);
    }
}

#[test]
fn test_optimal_play_from_empty_board_always_draws() {
    let mut seen = HashSet::new();
    assert_all_optimal_lines_end_in(initial_state(), 0, &mut seen);
    assert!(seen.len() > 9);
}

#[test]
fn test_random_tie_breaks_still_draw() {
    for seed in 0..5 {
        let config = SolverConfig::default().with_seed(Some(seed));
        let playout = Solver::new(config).play_out(&initial_state()).unwrap();
        assert_eq!(playout.utility(), 0, "seed {} lost a game", seed);
        assert_eq!(playout.moves().len(), 9);
    }
}

#[test]
fn test_first_tie_break_plays_the_same_game_every_time() {
    let config = SolverConfig::default().with_tie_break(TieBreak::First);
    let a = Solver::new(config.clone()).play_out(&initial_state()).unwrap();
    let b = Solver::new(config).play_out(&initial_state()).unwrap();
    assert_eq!(a.moves(), b.moves());
    assert_eq!(a.moves()[0], Action::new(0, 0));
}

#[test]
fn test_x_takes_immediate_row_win() {
    let b = board("XX./OO./...");
    assert_eq!(player(&b), Player::X);
    let action = best_move(&b).unwrap();
    assert_eq!(action, Action::new(0, 2));
    assert_eq!(utility(&result(&b, action).unwrap()), 1);
}

#[test]
fn test_no_winner_with_empty_row() {
    let b = board("XOX/XOO/...");
    assert_eq!(winner(&b), None);
    assert!(!terminal(&b));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let b = board("XOX/XOO/OXX");
    assert_eq!(winner(&b), None);
    assert!(terminal(&b));
    assert_eq!(utility(&b), 0);
    assert!(actions(&b).is_empty());
    assert_eq!(best_move(&b), Err(GameError::NoMoveAvailable));
}

#[test]
fn test_two_x_on_diagonal_with_o_in_corner_is_o_to_move() {
    // Three marks on the board: X has one more, so O moves.
    let b = board("X../.X./..O");
    assert_eq!(player(&b), Player::O);
    let action = best_move(&b).unwrap();
    let after = result(&b, action).unwrap();
    assert_eq!(minimax_value(&after), minimax_value(&b));
}

#[test]
fn test_x_completes_anti_diagonal() {
    // O threatens column 0; (2,0) both blocks it and completes X's diagonal.
    let b = board("O.X/OX./...");
    assert_eq!(player(&b), Player::X);
    assert_eq!(best_move(&b).unwrap(), Action::new(2, 0));
    assert_eq!(winner(&result(&b, Action::new(2, 0)).unwrap()), Some(Player::X));
}

#[test]
fn test_x_completes_main_diagonal_to_block() {
    let b = board("X../.X./OO.");
    assert_eq!(player(&b), Player::X);
    let optimal = optimal_actions(&b).unwrap();
    assert_eq!(optimal.actions(), &vec![Action::new(2, 2)]);
    assert_eq!(*optimal.value(), 1);
}

#[test]
fn test_o_avoids_corner_fork() {
    // After X takes opposite corners, O must answer on an edge.
    let b = board("X../.O./..X");
    let optimal = optimal_actions(&b).unwrap();
    assert_eq!(*optimal.value(), 0);
    for action in optimal.actions() {
        assert!(
            (action.row() + action.col()) % 2 == 1,
            "{} is a corner",
            action
        );
    }
}
