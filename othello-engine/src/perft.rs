//! Performance Test
//!
//! A simple debugging and testing function used to count
//! the number of nodes at a specific depth.
//!
//! A forced pass counts as a single move. A finished game counts as one leaf
//! wherever it is reached, since the tree cannot continue below it.

use std::ops::{Add, AddAssign};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::board::Board;
use crate::coretypes::{PlyKind, Side};
use crate::movegen;
use crate::movelist::MoveList;

/// Debugging information about results of perft test.
/// nodes: Number of nodes at lowest depth of perft.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PerftInfo {
    pub nodes: u64,
}

impl PerftInfo {
    fn new(nodes: u64) -> Self {
        PerftInfo { nodes }
    }
}

impl Add for PerftInfo {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        PerftInfo {
            nodes: self.nodes + rhs.nodes,
        }
    }
}

impl AddAssign for PerftInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
    }
}

// Count the number of nodes at a certain depth.
// In other words, it counts the number of paths to the given depth.
pub fn perft(mut board: Board, side: Side, ply: PlyKind, threads: usize) -> PerftInfo {
    // Guard easy to calculate inputs.
    if ply == 0 {
        // Ever only 1 board at 0 ply.
        return PerftInfo::new(1);
    } else if ply <= 2 || threads <= 1 {
        // Simple enough to not require threads, or single threaded.
        return perft_recurse(&mut board, side, ply);
    }
    debug_assert!(ply > 2);
    debug_assert!(threads > 1);

    let legal_moves = movegen::legal_moves(&board, side);
    // Passes and finished games are cheap, no need to split them.
    if legal_moves.is_empty() {
        return perft_recurse(&mut board, side, ply);
    }

    let legal_moves = Arc::new(Mutex::new(legal_moves));
    let total_perft_info = Arc::new(Mutex::new(PerftInfo::new(0)));
    let mut handles = Vec::new();

    // Create threads to process partitioned moves.
    for _ in 0..threads {
        let legal_moves = Arc::clone(&legal_moves);
        let total_perft_info = Arc::clone(&total_perft_info);

        let handle = thread::spawn(move || {
            perft_executor(board, side, ply, legal_moves, total_perft_info);
        });

        handles.push(handle);
    }

    // Wait for all handles to finish.
    for handle in handles {
        handle.join().unwrap();
    }

    let total = *total_perft_info.lock().unwrap();
    total
}

/// perft_executor works by stealing one move at a time from given moves list and running perft on that move.
/// When there are no moves left to steal, this function stores the data it has collected so far and returns.
/// params:
/// board - board to evaluate moves on, a private copy for this thread.
/// side - side to move on the board.
/// ply - ply of provided board. Must be greater than 1.
/// moves - synchronous access to list of moves to steal from. Moves must be legal for given board.
/// perft_info - place to store information post execution.
#[inline(always)]
fn perft_executor(
    mut board: Board,
    side: Side,
    ply: PlyKind,
    moves: Arc<Mutex<MoveList>>,
    total_perft_info: Arc<Mutex<PerftInfo>>,
) {
    debug_assert!(ply > 1);
    let mut perft_info = PerftInfo::new(0);
    let mut maybe_move = { moves.lock().unwrap().pop() };

    while let Some(move_) = maybe_move {
        if let Some(flips) = movegen::apply(&mut board, move_, side) {
            perft_info += perft_recurse(&mut board, !side, ply - 1);
            movegen::undo(&mut board, move_, side, &flips);
        }
        maybe_move = moves.lock().unwrap().pop();
    }

    *total_perft_info.lock().unwrap() += perft_info;
}

/// Ply must be non-zero.
fn perft_recurse(board: &mut Board, side: Side, ply: PlyKind) -> PerftInfo {
    debug_assert_ne!(ply, 0);
    let legal_moves = movegen::legal_moves(board, side);

    if legal_moves.is_empty() {
        return if !movegen::has_legal_move(board, !side) {
            // Game over, the path ends here.
            PerftInfo::new(1)
        } else if ply == 1 {
            // The pass itself is the single move at this depth.
            PerftInfo::new(1)
        } else {
            perft_recurse(board, !side, ply - 1)
        };
    }

    if ply == 1 {
        // If we reach the depth before the end,
        // return the count of legal moves.
        return PerftInfo::new(legal_moves.len() as u64);
    }

    let mut perft_info = PerftInfo::new(0);
    for legal_move in legal_moves {
        if let Some(flips) = movegen::apply(board, legal_move, side) {
            perft_info += perft_recurse(board, !side, ply - 1);
            movegen::undo(board, legal_move, side, &flips);
        }
    }
    perft_info
}
