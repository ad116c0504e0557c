//! MoveList types used in the Othello engine.
//!
//! The underlying type of MoveList may change at any time during
//! pre-1.0 development, so a MoveList type alias makes changes easy.

use arrayvec::ArrayVec;

use crate::coretypes::{Move, Square, MAX_FLIPS, MAX_MOVES};

/// MoveList is a container that can hold at most `MAX_MOVES`, more than any position can have.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;
/// FlipSet holds the opponent squares captured by a single move, in scan order.
/// Retained so the move can be undone exactly.
pub type FlipSet = ArrayVec<Square, MAX_FLIPS>;

/// Returns a space separated string of moves in square notation.
pub fn display(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|move_| move_.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
