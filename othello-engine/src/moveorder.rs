//! Move Ordering
//!
//! Functions used for ordering a list of moves from best to worst.
//!
//! Move ordering is important for alpha-beta pruning performance.
//! If the best or good moves are searched early on in an alpha-beta search,
//! pruning occurs more frequently.
//!
//! The ordering key is a cheap proxy for move strength that avoids a full
//! evaluation: positional weight of the target square plus the number of
//! discs the move flips.

use std::cmp::Reverse;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::coretypes::{Move, Score, ScoreKind, Side, MAX_MOVES};
use crate::evaluation::weight;
use crate::movegen::count_flips;
use crate::movelist::MoveList;

/// Direction to sort moves by their ordering key.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Order {
    /// Strongest moves first. Used by the maximizing side.
    Descending,
    /// Weakest moves first. Used by the minimizing side.
    Ascending,
}

/// Returns the ordering key of a move for `side`: square weight + flip count.
pub fn order_key(board: &Board, move_: Move, side: Side) -> Score {
    weight(move_) + Score(count_flips(board, move_, side) as ScoreKind)
}

/// Order all moves in a container completely by `order_key`.
/// The sort is stable, so moves with equal keys keep their generated order.
///
/// # Arguments
///
/// * `board`: Board the moves are legal on.
/// * `legal_moves`: Legal moves of `side` on `board`.
/// * `side`: Side making the moves.
/// * `order`: Whether the strongest moves come first or last.
pub fn order_all_moves(board: &Board, legal_moves: MoveList, side: Side, order: Order) -> MoveList {
    let mut ordering_vec: ArrayVec<(Move, Score), MAX_MOVES> = legal_moves
        .into_iter()
        .map(|move_| (move_, order_key(board, move_, side)))
        .collect();

    match order {
        Order::Descending => ordering_vec.sort_by_key(|pair| Reverse(pair.1)),
        Order::Ascending => ordering_vec.sort_by_key(|pair| pair.1),
    }

    ordering_vec.into_iter().map(|pair| pair.0).collect()
}
