//! Search functions.

mod alpha_beta;
mod ids;
mod minimax;

pub use alpha_beta::*;
pub use ids::*;
pub use minimax::*;

use std::fmt::{self, Display};
use std::time::{Duration, Instant};

use crate::board::Board;
use crate::coretypes::{Move, PlyKind, Score, Side};
use crate::timeman::Mode;

/// The results found from running a search on some root board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchResult {
    /// The best move found, or None if the player to move has no legal move and must pass.
    pub best_move: Option<Move>,
    /// Score of the best move, relative to `player`.
    pub score: Score,
    /// The player to move for the root board that was searched.
    pub player: Side,
    /// Deepest iteration that was fully searched. Zero if not even the first
    /// iteration completed, in which case `best_move` comes from a partial scan.
    pub depth: PlyKind,
    /// Total number of nodes visited over all iterations.
    pub nodes: u64,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
    /// Flag that indicates an iteration was cut off by the deadline and discarded.
    pub stopped: bool,
}

impl SearchResult {
    /// Empty result for `player`, as if no search happened yet.
    pub fn new(player: Side) -> Self {
        Self {
            best_move: None,
            score: Score(0),
            player,
            depth: 0,
            nodes: 0,
            elapsed: Duration::ZERO,
            stopped: false,
        }
    }

    /// Get average nodes per second of search.
    pub fn nps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.nodes as f64 / secs).round()
        } else {
            0.0
        }
    }

    /// Returns the side who is leading according to the search score, or None if even.
    pub fn leading(&self) -> Option<Side> {
        match self.score.signum() {
            1 => Some(self.player),
            -1 => Some(!self.player),
            _ => None,
        }
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let best_move = match self.best_move {
            Some(move_) => move_.to_string(),
            None => "pass".to_string(),
        };

        let mut displayed = String::new();
        displayed.push_str("SearchResult {\n");
        displayed.push_str(&format!("    best_move: {best_move}\n"));
        displayed.push_str(&format!("    score    : {}\n", self.score));
        displayed.push_str(&format!("    player   : {}\n", self.player));
        displayed.push_str(&format!("    depth    : {}\n", self.depth));
        displayed.push_str(&format!("    nodes    : {}\n", self.nodes));
        displayed.push_str(&format!("    nps      : {}\n", self.nps()));
        displayed.push_str(&format!(
            "    elapsed  : {}.{:03}s\n",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        ));
        displayed.push_str(&format!("    stopped  : {}\n", self.stopped));
        displayed.push_str("}\n");

        write!(f, "{displayed}")
    }
}

/// Othello Engine primary search function.
///
/// Searches `board` for `player` using iterative deepening alpha-beta, bounded by `mode`.
/// The board is borrowed mutably for move application during search but is
/// identical to its input when this returns. The chosen move is not applied.
/// When `debug` is set, one info line is printed per iteration.
pub fn search(board: &mut Board, player: Side, mode: Mode, debug: bool) -> SearchResult {
    ids(board, player, mode, Instant::now(), debug)
}

/// Returns the best legal move for `player` found within `time_budget_ms`,
/// or None if `player` has no legal move and must pass.
pub fn find_best_move(board: &mut Board, player: Side, time_budget_ms: u64) -> Option<Move> {
    let mode = Mode::movetime(Duration::from_millis(time_budget_ms), None);
    search(board, player, mode, false).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Cell, Side::*, Square};
    use crate::movegen;

    #[test]
    fn start_position_returns_opening_move() {
        let mut board = Board::start_position();
        let original = board;

        let best_move = find_best_move(&mut board, Black, 200).unwrap();
        assert!(movegen::legal_moves(&original, Black).contains(&best_move));
        assert_eq!(board, original);
    }

    #[test]
    fn no_legal_moves_returns_none() {
        let mut board = Board::empty();
        board[Square::new(0, 0)] = Cell::White;
        board[Square::new(7, 7)] = Cell::Black;

        assert_eq!(find_best_move(&mut board, Black, 50), None);
        let result = search(&mut board, White, Mode::depth(4, None), false);
        assert_eq!(result.best_move, None);
        assert_eq!(result.depth, 0);
    }

    #[test]
    fn fixed_depth_completes_every_iteration() {
        let mut board = Board::start_position();
        let result = search(&mut board, Black, Mode::depth(4, None), false);

        assert!(result.best_move.is_some());
        assert_eq!(result.depth, 4);
        assert!(!result.stopped);
        assert!(result.nodes > 0);
        assert_eq!(board, Board::start_position());
    }

    #[test]
    fn leading_follows_score_sign() {
        let mut result = SearchResult::new(White);
        assert_eq!(result.leading(), None);
        result.score = Score(12);
        assert_eq!(result.leading(), Some(White));
        result.score = Score(-3);
        assert_eq!(result.leading(), Some(Black));
    }

    #[test]
    fn display_names_pass() {
        let displayed = SearchResult::new(Black).to_string();
        assert!(displayed.contains("best_move: pass"));
    }
}
