//! Time Management

use std::time::{Duration, Instant};

use crate::board::Board;
use crate::coretypes::PlyKind;

/// Iterative deepening starts from this depth.
pub const MIN_DEPTH: PlyKind = 2;

/// Depth ceiling chosen from the number of empty cells.
/// Fewer empties means a smaller branching factor, so the endgame is searched
/// close to exhaustively.
pub const fn max_depth_for_empties(empties: u32) -> PlyKind {
    if empties <= 12 {
        14
    } else if empties <= 20 {
        8
    } else {
        6
    }
}

// Returns true if the duration since the start of search is greater than the time to move.
fn is_out_of_time(start_time: Instant, move_time: Duration) -> bool {
    start_time.elapsed() > move_time
}

/// There are 2 supported search modes, Depth and MoveTime.
/// Depth mode: search to a given depth, optionally bounded by a time budget.
/// MoveTime mode: search for a specified time per move, up to the depth ceiling
/// for the board's empty count, optionally capped lower.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mode {
    Depth(Depth),       // Search to a given depth.
    MoveTime(MoveTime), // Search for a specified amount of time.
}

impl Mode {
    /// Returns a new Depth Mode.
    pub fn depth(ply: PlyKind, movetime: Option<Duration>) -> Self {
        Self::Depth(Depth {
            depth: ply,
            movetime,
        })
    }

    /// Returns a new MoveTime mode.
    pub fn movetime(movetime: Duration, ply: Option<PlyKind>) -> Self {
        Self::MoveTime(MoveTime {
            movetime,
            depth: ply,
        })
    }

    /// Returns the deepest iteration to search on this board. Never zero.
    pub fn max_depth(&self, board: &Board) -> PlyKind {
        let max_depth = match self {
            Mode::Depth(depth_mode) => depth_mode.depth,
            Mode::MoveTime(movetime_mode) => movetime_mode.max_depth(board),
        };
        max_depth.max(1)
    }

    /// Returns the time budget for the search, if any.
    pub fn movetime_limit(&self) -> Option<Duration> {
        match self {
            Mode::Depth(depth_mode) => depth_mode.movetime,
            Mode::MoveTime(movetime_mode) => Some(movetime_mode.movetime),
        }
    }

    /// Returns a deadline for a search started at `start_time`.
    pub fn deadline(&self, start_time: Instant) -> Deadline {
        Deadline {
            start_time,
            movetime: self.movetime_limit(),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Depth {
    pub depth: PlyKind,
    movetime: Option<Duration>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MoveTime {
    movetime: Duration,
    depth: Option<PlyKind>,
}

impl MoveTime {
    /// Adaptive ceiling from the board, lowered by the optional depth cap.
    fn max_depth(&self, board: &Board) -> PlyKind {
        let adaptive = max_depth_for_empties(board.empties());
        match self.depth {
            Some(depth) => depth.min(adaptive),
            None => adaptive,
        }
    }
}

/// Wall clock cutoff shared by every node of one search.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Deadline {
    start_time: Instant,
    movetime: Option<Duration>,
}

impl Deadline {
    /// Returns true once elapsed time exceeds the budget. Never true without a budget.
    #[inline]
    pub fn expired(&self) -> bool {
        match self.movetime {
            Some(movetime) => is_out_of_time(self.start_time, movetime),
            None => false,
        }
    }
}
