//! Time Budget
//!
//! The search must answer within its move time plus a small overhead, whatever
//! the position, and still return a legal move.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use othello_engine::search::search;
use othello_engine::*;

const OVERHEAD: Duration = Duration::from_millis(250);

/// Midgame boards reached by random play, with a side that has a legal move.
fn midgames(seed: u64, count: usize) -> Vec<(Board, Side)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut boards = Vec::new();

    while boards.len() < count {
        let mut board = Board::start_position();
        let mut side = Side::Black;
        for _ in 0..20 {
            if let Some(&move_) = movegen::legal_moves(&board, side).choose(&mut rng) {
                movegen::apply(&mut board, move_, side);
            }
            side = !side;
        }
        if movegen::has_legal_move(&board, side) {
            boards.push((board, side));
        }
    }
    boards
}

#[test]
fn start_position_within_budget() {
    let mut board = Board::start_position();
    let budget = Duration::from_millis(50);

    let instant = Instant::now();
    let best_move = find_best_move(&mut board, Side::Black, 50);
    let elapsed = instant.elapsed();

    assert!(elapsed < budget + OVERHEAD, "elapsed {elapsed:?}");
    assert!(movegen::is_legal(&board, best_move.unwrap(), Side::Black));
}

#[test]
fn midgame_within_budget() {
    let budget = Duration::from_millis(100);

    for (mut board, side) in midgames(11, 5) {
        let original = board;
        let instant = Instant::now();
        let result = search(&mut board, side, Mode::movetime(budget, None), false);
        let elapsed = instant.elapsed();

        assert!(elapsed < budget + OVERHEAD, "elapsed {elapsed:?}");
        assert!(movegen::is_legal(&board, result.best_move.unwrap(), side));
        assert_eq!(board, original);
    }
}

#[test]
fn zero_budget_still_moves() {
    for (mut board, side) in midgames(5, 3) {
        let mode = Mode::movetime(Duration::ZERO, None);
        let result = search(&mut board, side, mode, false);

        assert!(result.stopped);
        assert!(movegen::is_legal(&board, result.best_move.unwrap(), side));
    }
}

#[test]
fn depth_mode_with_time_box_stops_early() {
    let mut board = Board::start_position();
    let budget = Duration::from_millis(30);

    let instant = Instant::now();
    let mode = Mode::depth(30, Some(budget));
    let result = search(&mut board, Side::Black, mode, false);

    assert!(instant.elapsed() < budget + OVERHEAD);
    assert!(result.stopped);
    assert!(result.depth < 30);
    assert!(result.best_move.is_some());
}

#[test]
fn interrupted_depth_keeps_last_completed_depth() {
    let mut checked = 0;

    for (mut board, side) in midgames(23, 10) {
        for budget_ms in [3, 8, 20, 50] {
            let mode = Mode::movetime(Duration::from_millis(budget_ms), None);
            let result = search(&mut board, side, mode, false);
            if !result.stopped || result.depth < 2 {
                continue;
            }

            // The cut off depth is discarded, so the answer is exactly the fixed depth one.
            let complete = search(&mut board, side, Mode::depth(result.depth, None), false);
            assert_eq!(result.best_move, complete.best_move);
            assert_eq!(result.score, complete.score);
            assert!(!complete.stopped);
            checked += 1;
        }
    }

    assert!(checked > 0);
}
