//! Simple Tactics
//!
//! Tests to ensure engine passes basic strength tests.
//! They should find the best move with a small depth.

use othello_engine::search::search;
use othello_engine::*;

fn corner_board() -> Board {
    "
    --------
    -O------
    --O-----
    ---XO---
    ---OX---
    --------
    --------
    --------
    "
    .parse()
    .unwrap()
}

#[test]
fn take_the_only_corner() {
    let mut board = corner_board();
    let original = board;
    let result = search(&mut board, Side::Black, Mode::depth(4, None), false);

    assert_eq!(result.best_move, Some(Square::new(0, 0)));
    assert_eq!(result.depth, 4);
    assert_eq!(result.leading(), Some(Side::Black));
    assert_eq!(board, original);
}

#[test]
fn take_the_only_corner_as_white() {
    // Same board with colors swapped.
    let notation: String = corner_board()
        .to_notation()
        .chars()
        .map(|ch| match ch {
            'X' => 'O',
            'O' => 'X',
            other => other,
        })
        .collect();
    let mut board: Board = notation.parse().unwrap();
    let result = search(&mut board, Side::White, Mode::depth(4, None), false);

    assert_eq!(result.best_move, Some(Square::new(0, 0)));
    assert_eq!(result.leading(), Some(Side::White));
}

#[test]
fn deeper_search_keeps_the_corner() {
    let mut board = corner_board();
    for ply in 4..=6 {
        let result = search(&mut board, Side::Black, Mode::depth(ply, None), false);
        assert_eq!(result.best_move, Some(Square::new(0, 0)), "depth {ply}");
    }
}

#[test]
fn avoid_square_next_to_empty_corner() {
    // b2 flips as many discs as d3 but sits next to an empty corner.
    let mut board: Board = "
    --------
    --------
    --O-----
    ---OO---
    ---XXX--
    ----O---
    --------
    --------
    "
    .parse()
    .unwrap();
    let x_square = Square::new(1, 1);
    assert!(movegen::is_legal(&board, x_square, Side::Black));

    let result = search(&mut board, Side::Black, Mode::depth(4, None), false);
    assert_eq!(result.best_move, Some(Square::new(2, 3)));
    assert_eq!(result.leading(), Some(Side::White));
}
