//! Minimax implementation.
//!
//! Plain minimax without pruning, ordering or time control. It uses the same leaf,
//! pass and double-pass rules as alpha-beta, so it serves as a reference oracle
//! for verifying the pruned search on small trees.

use std::cmp;

use crate::board::Board;
use crate::coretypes::{Move, PlyKind, Score, Side};
use crate::evaluation::static_evaluate;
use crate::movegen;

/// Base minimax call for `root_side` to move.
/// It returns the best move and score for the board, or None if `root_side` must pass.
/// Ties keep the first move in generated order.
pub fn minimax(board: &mut Board, root_side: Side, ply: PlyKind) -> Option<(Move, Score)> {
    assert_ne!(ply, 0);

    let mut best: Option<(Move, Score)> = None;
    for legal_move in movegen::legal_moves(board, root_side) {
        let flips = match movegen::apply(board, legal_move, root_side) {
            Some(flips) => flips,
            None => continue,
        };
        let move_score = minimax_value(board, !root_side, root_side, ply - 1);
        movegen::undo(board, legal_move, root_side, &flips);

        if best.map_or(true, |(_, best_score)| move_score > best_score) {
            best = Some((legal_move, move_score));
        }
    }
    best
}

/// Minimax value of a node from `root_side`'s perspective.
pub fn minimax_value(
    board: &mut Board,
    side_to_move: Side,
    root_side: Side,
    ply: PlyKind,
) -> Score {
    let legal_moves = movegen::legal_moves(board, side_to_move);

    // Stop at last depth, or when neither side can move.
    if ply == 0 || (legal_moves.is_empty() && !movegen::has_legal_move(board, !side_to_move)) {
        return static_evaluate(board, root_side);
    }

    if legal_moves.is_empty() {
        return minimax_value(board, !side_to_move, root_side, ply - 1);
    }

    let maxing = side_to_move == root_side;
    let mut best_score = if maxing { Score::MIN } else { Score::MAX };

    for legal_move in legal_moves {
        let flips = match movegen::apply(board, legal_move, side_to_move) {
            Some(flips) => flips,
            None => continue,
        };
        let move_score = minimax_value(board, !side_to_move, root_side, ply - 1);
        movegen::undo(board, legal_move, side_to_move, &flips);

        best_score = if maxing {
            cmp::max(best_score, move_score)
        } else {
            cmp::min(best_score, move_score)
        };
    }

    best_score
}
