//! CPU difficulty levels.
//!
//! Easy and Hard are cheap one-ply policies. Best runs the full time-boxed search.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::coretypes::{Move, Side};
use crate::error::{self, ErrorKind};
use crate::movegen;
use crate::movelist::MoveList;
use crate::search;
use crate::timeman::Mode;

/// Move time the Best level searches for when not configured otherwise.
pub const DEFAULT_MOVETIME: Duration = Duration::from_millis(1200);

/// Represents a CPU difficulty level.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Level {
    /// Uniformly random legal move.
    Easy,
    /// Move flipping the most discs, ties broken at random.
    Hard,
    /// Iterative deepening alpha-beta search.
    #[default]
    Best,
}

impl Level {
    /// Choose a move for `side` on `board`, or None if `side` must pass.
    ///
    /// The board is only borrowed mutably for the search and is unchanged on return.
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        side: Side,
        movetime: Duration,
        rng: &mut R,
        debug: bool,
    ) -> Option<Move> {
        match self {
            Level::Easy => random_move(board, side, rng),
            Level::Hard => greedy_move(board, side, rng),
            Level::Best => {
                let result = search::search(board, side, Mode::movetime(movetime, None), debug);
                if debug {
                    print!("{result}");
                }
                result.best_move.or_else(|| random_move(board, side, rng))
            }
        }
    }
}

/// Uniformly random legal move.
pub fn random_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Move> {
    movegen::legal_moves(board, side).choose(rng).copied()
}

/// Legal move with the greatest flip count. Equal counts are chosen between at random.
pub fn greedy_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Move> {
    let mut best = MoveList::new();
    let mut best_count = 0;

    for legal_move in movegen::legal_moves(board, side) {
        let count = movegen::count_flips(board, legal_move, side);
        if count > best_count {
            best_count = count;
            best.clear();
            best.push(legal_move);
        } else if count == best_count {
            best.push(legal_move);
        }
    }

    best.choose(rng).copied()
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Level::Easy => "easy",
            Level::Hard => "hard",
            Level::Best => "best",
        })
    }
}

impl FromStr for Level {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "hard" => Ok(Level::Hard),
            "best" => Ok(Level::Best),
            _ => Err((ErrorKind::ParseLevelMalformed, s).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Side::*, Square};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_level_moves_legally() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::start_position();
        let legal = movegen::legal_moves(&board, Black);

        for level in [Level::Easy, Level::Hard, Level::Best] {
            let move_ = level
                .choose_move(
                    &mut board,
                    Black,
                    Duration::from_millis(50),
                    &mut rng,
                    false,
                )
                .unwrap();
            assert!(legal.contains(&move_), "{level}");
            assert_eq!(board, Board::start_position());
        }
    }

    #[test]
    fn greedy_takes_most_flips() {
        let board: Board = "
            --------
            -OOOX---
            -O------
            -X------
            --------
            --------
            --------
            --------
        "
        .parse()
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        // b1 flips 2 down column b, a2 flips 3 along row 2.
        assert_eq!(movegen::legal_moves(&board, Black).len(), 2);
        for _ in 0..10 {
            assert_eq!(
                greedy_move(&board, Black, &mut rng),
                Some(Square::new(1, 0))
            );
        }
    }

    #[test]
    fn pass_returns_none() {
        let mut board = Board::empty();
        let mut rng = StdRng::seed_from_u64(3);
        for level in [Level::Easy, Level::Hard, Level::Best] {
            let move_ = level.choose_move(
                &mut board,
                White,
                Duration::from_millis(10),
                &mut rng,
                false,
            );
            assert_eq!(move_, None);
        }
    }

    #[test]
    fn parse_level() {
        assert_eq!("Easy".parse::<Level>().unwrap(), Level::Easy);
        assert_eq!("best".parse::<Level>().unwrap(), Level::Best);
        assert_eq!(
            "expert".parse::<Level>().unwrap_err().kind(),
            ErrorKind::ParseLevelMalformed
        );
        assert_eq!(Level::default(), Level::Best);
    }
}
