//! Minimax with Alpha-Beta pruning implementation.
//!
//! Boards are never copied during search. Each child move is applied in place
//! and undone with its FlipSet after the recursive call returns.

use std::cmp;

use crate::board::Board;
use crate::coretypes::{Move, PlyKind, Score, Side};
use crate::evaluation::static_evaluate;
use crate::movegen;
use crate::moveorder::{order_all_moves, Order};
use crate::timeman::Deadline;

/// Outcome of searching a node.
///
/// A TimedOut score is the static evaluation of whatever node noticed the deadline,
/// not a backed up minimax value. It must never be adopted as a result.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Completed(Score),
    TimedOut(Score),
}

impl Outcome {
    pub fn is_timed_out(&self) -> bool {
        matches!(self, Outcome::TimedOut(_))
    }

    /// Returns the score only if the node was fully searched.
    pub fn completed(&self) -> Option<Score> {
        match self {
            Outcome::Completed(score) => Some(*score),
            Outcome::TimedOut(_) => None,
        }
    }
}

/// Result of one scan over all root moves at a fixed depth.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RootScan {
    /// Best root move and its score among those fully searched.
    pub best: Option<(Move, Score)>,
    /// True if the scan was abandoned at the deadline.
    pub timed_out: bool,
}

/// Properties of Alpha-Beta pruning.
/// * The maxing player can only update alpha from its children.
/// * The minning player can only update beta from its children.
/// * Alpha and Beta can only be inherited from their ancestors,
///   and are otherwise Alpha=-Inf, Beta=Inf.
/// * Alpha is usually less than Beta. When they are equal or cross, a cut off occurs.
///
/// alpha_beta_root scans `root_moves` in the given order at depth `ply`.
/// The window starts at (-Inf, +Inf) and the root, always the maxing player, raises
/// alpha as better moves are found. Ties keep the earlier move.
///
/// If any child times out, the scan stops and reports the best move among the
/// root moves completed so far.
pub fn alpha_beta_root(
    board: &mut Board,
    root_side: Side,
    ply: PlyKind,
    root_moves: &[Move],
    deadline: &Deadline,
    nodes: &mut u64,
) -> RootScan {
    debug_assert_ne!(ply, 0);
    *nodes += 1;

    let mut alpha = Score::MIN;
    let beta = Score::MAX;
    let mut scan = RootScan {
        best: None,
        timed_out: false,
    };

    for &root_move in root_moves {
        let flips = match movegen::apply(board, root_move, root_side) {
            Some(flips) => flips,
            None => continue,
        };
        let outcome = alpha_beta(
            board,
            !root_side,
            ply - 1,
            alpha,
            beta,
            root_side,
            deadline,
            nodes,
        );
        movegen::undo(board, root_move, root_side, &flips);

        let move_score = match outcome {
            Outcome::Completed(score) => score,
            Outcome::TimedOut(_) => {
                scan.timed_out = true;
                break;
            }
        };

        let improved = match scan.best {
            Some((_, best_score)) => move_score > best_score,
            None => true,
        };
        if improved {
            scan.best = Some((root_move, move_score));
            alpha = cmp::max(alpha, move_score);
        }
    }

    scan
}

/// Alpha-Beta search of a non-root node.
///
/// Scores are always from `root_side`'s perspective: nodes where `side_to_move`
/// is the root side maximize, the others minimize.
///
/// Parameters:
///
/// board: current board to search, restored before returning.
/// side_to_move: side whose turn it is at this node.
/// ply: remaining depth to search to.
/// alpha: Best (greatest) guaranteed value for the root side.
/// beta: Best (lowest) guaranteed value for the opposite side.
/// root_side: side the whole search is run for.
/// deadline: search cutoff, checked before expanding any node.
/// nodes: Counter for number of nodes visited in search.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta(
    board: &mut Board,
    side_to_move: Side,
    ply: PlyKind,
    mut alpha: Score,
    mut beta: Score,
    root_side: Side,
    deadline: &Deadline,
    nodes: &mut u64,
) -> Outcome {
    if deadline.expired() {
        return Outcome::TimedOut(static_evaluate(board, root_side));
    }
    *nodes += 1;

    let legal_moves = movegen::legal_moves(board, side_to_move);

    // Stop at last depth, or when neither side can move.
    if ply == 0 || (legal_moves.is_empty() && !movegen::has_legal_move(board, !side_to_move)) {
        return Outcome::Completed(static_evaluate(board, root_side));
    }

    // Forced pass. The opponent moves on the same board, one ply deeper.
    if legal_moves.is_empty() {
        return alpha_beta(
            board,
            !side_to_move,
            ply - 1,
            alpha,
            beta,
            root_side,
            deadline,
            nodes,
        );
    }

    if side_to_move == root_side {
        let mut best_score = Score::MIN;

        for legal_move in order_all_moves(board, legal_moves, side_to_move, Order::Descending) {
            let flips = match movegen::apply(board, legal_move, side_to_move) {
                Some(flips) => flips,
                None => continue,
            };
            let outcome = alpha_beta(
                board,
                !side_to_move,
                ply - 1,
                alpha,
                beta,
                root_side,
                deadline,
                nodes,
            );
            movegen::undo(board, legal_move, side_to_move, &flips);

            let move_score = match outcome {
                Outcome::Completed(score) => score,
                timed_out => return timed_out,
            };
            best_score = cmp::max(best_score, move_score);
            alpha = cmp::max(alpha, best_score);
            if beta <= alpha {
                // Beta cutoff
                break;
            }
        }
        Outcome::Completed(best_score)
    } else {
        let mut best_score = Score::MAX;

        for legal_move in order_all_moves(board, legal_moves, side_to_move, Order::Ascending) {
            let flips = match movegen::apply(board, legal_move, side_to_move) {
                Some(flips) => flips,
                None => continue,
            };
            let outcome = alpha_beta(
                board,
                !side_to_move,
                ply - 1,
                alpha,
                beta,
                root_side,
                deadline,
                nodes,
            );
            movegen::undo(board, legal_move, side_to_move, &flips);

            let move_score = match outcome {
                Outcome::Completed(score) => score,
                timed_out => return timed_out,
            };
            best_score = cmp::min(best_score, move_score);
            beta = cmp::min(beta, best_score);
            if beta <= alpha {
                // Alpha cutoff
                break;
            }
        }
        Outcome::Completed(best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Side::*;
    use crate::search::minimax_value;
    use crate::timeman::Mode;
    use std::time::{Duration, Instant};

    fn no_deadline() -> Deadline {
        Mode::depth(1, None).deadline(Instant::now())
    }

    #[test]
    fn agrees_with_minimax_from_start() {
        let mut board = Board::start_position();
        let deadline = no_deadline();

        for ply in 1..=4 {
            let mut nodes = 0;
            let outcome = alpha_beta(
                &mut board,
                Black,
                ply,
                Score::MIN,
                Score::MAX,
                Black,
                &deadline,
                &mut nodes,
            );
            let expected = minimax_value(&mut board, Black, Black, ply);
            assert_eq!(outcome, Outcome::Completed(expected), "ply {ply}");
        }
        assert_eq!(board, Board::start_position());
    }

    #[test]
    fn expired_deadline_times_out_immediately() {
        let mut board = Board::start_position();
        let deadline = Mode::movetime(Duration::ZERO, None)
            .deadline(Instant::now() - Duration::from_millis(10));
        let mut nodes = 0;

        let outcome = alpha_beta(
            &mut board,
            White,
            3,
            Score::MIN,
            Score::MAX,
            Black,
            &deadline,
            &mut nodes,
        );
        assert_eq!(outcome, Outcome::TimedOut(static_evaluate(&board, Black)));
        assert!(outcome.is_timed_out());
        assert_eq!(outcome.completed(), None);
        assert_eq!(nodes, 0);

        let moves = movegen::legal_moves(&board, Black);
        let scan = alpha_beta_root(&mut board, Black, 2, &moves, &deadline, &mut nodes);
        assert!(scan.timed_out);
        assert_eq!(scan.best, None);
        assert_eq!(board, Board::start_position());
    }

    #[test]
    fn root_scan_keeps_first_of_equal_moves() {
        // All four opening moves are symmetric and score the same.
        let mut board = Board::start_position();
        let moves = movegen::legal_moves(&board, Black);
        let mut nodes = 0;

        let scan = alpha_beta_root(&mut board, Black, 1, &moves, &no_deadline(), &mut nodes);
        assert!(!scan.timed_out);
        assert_eq!(scan.best.map(|best| best.0), Some(moves[0]));
    }
}
