//! Evaluation functions that return a Score.
//!
//! All scores are relative to the side passed in: positive is good for that
//! side and negative is good for its opponent.

use crate::board::Board;
use crate::coretypes::{Score, ScoreKind, Side, Square, NUM_COLS, NUM_ROWS};
use crate::movegen;

// Evaluation Constants

/// Positional weight of owning each square. Corners are durable and rated highest,
/// squares touching a corner are dangerous because they can give the corner away.
#[rustfmt::skip]
pub const WEIGHTS: [[ScoreKind; NUM_COLS]; NUM_ROWS] = [
    [100, -25, 10, 5, 5, 10, -25, 100],
    [-25, -25,  1, 1, 1,  1, -25, -25],
    [ 10,   1,  3, 2, 2,  3,   1,  10],
    [  5,   1,  2, 1, 1,  2,   1,   5],
    [  5,   1,  2, 1, 1,  2,   1,   5],
    [ 10,   1,  3, 2, 2,  3,   1,  10],
    [-25, -25,  1, 1, 1,  1, -25, -25],
    [100, -25, 10, 5, 5, 10, -25, 100],
];

const MOBILITY_SCALAR: ScoreKind = 10;
const DISC_SCALAR: ScoreKind = 2;

/// Positional weight of a single square.
pub const fn weight(square: Square) -> Score {
    Score(WEIGHTS[square.row() as usize][square.col() as usize])
}

// Evaluation Functions

/// Primary evaluate function for engine.
pub fn static_evaluate(board: &Board, side: Side) -> Score {
    positional(board, side) + mobility(board, side) + disc_count(board, side)
}

/// Sum of positional weights of `side` discs minus those of the opponent.
pub fn positional(board: &Board, side: Side) -> Score {
    board
        .iter()
        .filter_map(|(square, cell)| cell.side().map(|owner| (square, owner)))
        .fold(Score::default(), |acc, (square, owner)| {
            if owner == side {
                acc + weight(square)
            } else {
                acc - weight(square)
            }
        })
}

/// Difference in legal move counts. Skipped when neither side can move.
pub fn mobility(board: &Board, side: Side) -> Score {
    let own_moves = movegen::legal_moves(board, side).len() as ScoreKind;
    let opp_moves = movegen::legal_moves(board, !side).len() as ScoreKind;

    if own_moves + opp_moves > 0 {
        Score(own_moves - opp_moves) * MOBILITY_SCALAR
    } else {
        Score(0)
    }
}

/// Light material term. Raw disc count predicts little before the endgame.
pub fn disc_count(board: &Board, side: Side) -> Score {
    let own_discs = board.count(side) as ScoreKind;
    let opp_discs = board.count(!side) as ScoreKind;
    Score(own_discs - opp_discs) * DISC_SCALAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Side::*;

    #[test]
    fn weights_are_symmetric() {
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                let w = WEIGHTS[row][col];
                assert_eq!(w, WEIGHTS[col][row]);
                assert_eq!(w, WEIGHTS[NUM_ROWS - 1 - row][col]);
                assert_eq!(w, WEIGHTS[row][NUM_COLS - 1 - col]);
            }
        }
    }

    #[test]
    fn start_position_is_balanced() {
        let board = Board::start_position();
        assert_eq!(positional(&board, Black), Score(0));
        assert_eq!(mobility(&board, Black), Score(0));
        assert_eq!(disc_count(&board, Black), Score(0));
        assert_eq!(static_evaluate(&board, Black), Score(0));
    }

    #[test]
    fn after_first_move() {
        let mut board = Board::start_position();
        movegen::apply(&mut board, Square::new(2, 3), Black).unwrap();

        // Black owns (2,3),(3,3),(3,4),(4,3) -> 2 + 1 + 1 + 1, White owns (4,4) -> 1.
        assert_eq!(positional(&board, Black), Score(4));
        // Black 4 discs, White 1.
        assert_eq!(disc_count(&board, Black), Score(6));
        let black_moves = movegen::legal_moves(&board, Black).len() as ScoreKind;
        let white_moves = movegen::legal_moves(&board, White).len() as ScoreKind;
        assert_eq!(
            mobility(&board, Black),
            Score((black_moves - white_moves) * MOBILITY_SCALAR)
        );
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut board = Board::start_position();
        for (square, side) in [
            (Square::new(2, 3), Black),
            (Square::new(2, 2), White),
            (Square::new(3, 2), Black),
        ] {
            movegen::apply(&mut board, square, side).unwrap();
            assert_eq!(
                static_evaluate(&board, Black),
                -static_evaluate(&board, White)
            );
        }
    }

    #[test]
    fn no_mobility_term_when_nobody_moves() {
        let board = Board::empty();
        assert_eq!(mobility(&board, Black), Score(0));
        assert_eq!(static_evaluate(&board, White), Score(0));
    }
}
