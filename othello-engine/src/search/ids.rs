//! Iterative Deepening Search.

use std::time::Instant;

use crate::board::Board;
use crate::coretypes::Side;
use crate::evaluation::static_evaluate;
use crate::movegen;
use crate::moveorder::{order_all_moves, Order};
use crate::search::{alpha_beta_root, SearchResult};
use crate::timeman::{Mode, MIN_DEPTH};

/// Searches the game tree with iterative deepening, from `MIN_DEPTH` up to the
/// depth ceiling of `mode`, or until the deadline passes.
///
/// Only fully completed iterations update the result. An iteration interrupted
/// by the deadline is discarded. If the very first iteration is interrupted, the
/// best root move it fully searched is used, or failing that the first root move
/// in search order, since any legal move is better than passing.
pub fn ids(
    board: &mut Board,
    root_side: Side,
    mode: Mode,
    start_time: Instant,
    debug: bool,
) -> SearchResult {
    let deadline = mode.deadline(start_time);
    let mut search_result = SearchResult::new(root_side);

    let legal_moves = movegen::legal_moves(board, root_side);
    if legal_moves.is_empty() {
        search_result.elapsed = start_time.elapsed();
        return search_result;
    }

    // Root order is fixed across iterations.
    let root_moves = order_all_moves(board, legal_moves, root_side, Order::Descending);
    let max_depth = mode.max_depth(board);
    let mut nodes = 0;

    for ids_ply in MIN_DEPTH.min(max_depth)..=max_depth {
        let scan = alpha_beta_root(
            board,
            root_side,
            ids_ply,
            &root_moves,
            &deadline,
            &mut nodes,
        );

        if scan.timed_out {
            search_result.stopped = true;
            if search_result.best_move.is_none() {
                let (best_move, score) = scan
                    .best
                    .unwrap_or_else(|| (root_moves[0], static_evaluate(board, root_side)));
                search_result.best_move = Some(best_move);
                search_result.score = score;
            }
            if debug {
                println!(
                    "info timeout depth {} time {}",
                    ids_ply,
                    start_time.elapsed().as_millis()
                );
            }
            break;
        }

        if let Some((best_move, score)) = scan.best {
            search_result.best_move = Some(best_move);
            search_result.score = score;
            search_result.depth = ids_ply;
        }

        if debug {
            if let Some(best_move) = search_result.best_move {
                println!(
                    "info depth {} score {} nodes {} time {} bestmove {}",
                    ids_ply,
                    search_result.score,
                    nodes,
                    start_time.elapsed().as_millis(),
                    best_move,
                );
            }
        }

        if deadline.expired() {
            break;
        }
    }

    search_result.nodes = nodes;
    search_result.elapsed = start_time.elapsed();
    search_result
}
