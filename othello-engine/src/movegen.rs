//! Functions used to generate, apply and undo moves for a board.
//!
//! A move is legal when, along at least one of the 8 rays from the placed disc,
//! one or more opposing discs are immediately followed by a disc of the mover.
//! Every disc in such a bracketed run is flipped.

use crate::board::Board;
use crate::coretypes::{Cell, Side, Square};
use crate::movelist::{FlipSet, MoveList};

/// The 8 ray directions as (row, col) steps: the 4 diagonals and 4 orthogonals.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Number of opposing discs `side` would flip along one ray from `origin`.
/// Zero when the run is empty, leaves the board, or ends on an empty cell.
#[inline(always)]
fn ray_flips(board: &Board, origin: Square, side: Side, (d_row, d_col): (i8, i8)) -> u32 {
    let own = Cell::from(side);
    let opponent = Cell::from(!side);

    let mut run = 0;
    let mut maybe_square = origin.offset(d_row, d_col);
    while let Some(square) = maybe_square {
        match board[square] {
            cell if cell == opponent => run += 1,
            cell if cell == own => return run,
            _ => return 0,
        }
        maybe_square = square.offset(d_row, d_col);
    }
    0
}

/// Returns true if `side` may place a disc on `square`.
pub fn is_legal(board: &Board, square: Square, side: Side) -> bool {
    board[square].is_empty()
        && DIRECTIONS
            .iter()
            .any(|&direction| ray_flips(board, square, side, direction) > 0)
}

/// Returns how many discs placing `side` on `square` would flip, or 0 if illegal.
pub fn count_flips(board: &Board, square: Square, side: Side) -> u32 {
    if !board[square].is_empty() {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&direction| ray_flips(board, square, side, direction))
        .sum()
}

/// Generate all legal moves for `side`, in row-major order.
/// An empty list means `side` must pass.
pub fn legal_moves(board: &Board, side: Side) -> MoveList {
    Square::iter()
        .filter(|&square| is_legal(board, square, side))
        .collect()
}

/// Returns true if `side` has at least one legal move.
/// Stops at the first legal move found, unlike `legal_moves`.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    Square::iter().any(|square| is_legal(board, square, side))
}

/// Place a disc for `side` on `square` and flip every captured disc.
///
/// Returns the flipped squares, which `undo` needs to restore the board.
/// If the square is occupied or flips nothing, the board is left untouched
/// and None is returned.
pub fn apply(board: &mut Board, square: Square, side: Side) -> Option<FlipSet> {
    if !board[square].is_empty() {
        return None;
    }

    let mut flips = FlipSet::new();
    for (d_row, d_col) in DIRECTIONS {
        let run = ray_flips(board, square, side, (d_row, d_col));
        let mut flipped = square;
        for _ in 0..run {
            // A bracketed run only contains on-board squares.
            if let Some(next) = flipped.offset(d_row, d_col) {
                flipped = next;
                flips.push(flipped);
            }
        }
    }

    if flips.is_empty() {
        return None;
    }

    let own = Cell::from(side);
    board[square] = own;
    for &flipped in &flips {
        board[flipped] = own;
    }
    Some(flips)
}

/// Exact inverse of `apply`. Must be called in LIFO order with the FlipSet
/// that `apply` returned for the same square and side.
pub fn undo(board: &mut Board, square: Square, side: Side, flips: &FlipSet) {
    let opponent = Cell::from(!side);
    board[square] = Cell::Empty;
    for &flipped in flips {
        board[flipped] = opponent;
    }
}
