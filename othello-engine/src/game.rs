//! Game structure.

use crate::board::Board;
use crate::coretypes::{Move, Side};
use crate::error::{self, ErrorKind};
use crate::movegen;
use crate::movelist::{FlipSet, MoveList};

/// One entry of game history: a placed disc with its flips, or a pass.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Played {
    Move {
        side: Side,
        move_: Move,
        flips: FlipSet,
    },
    Pass {
        side: Side,
    },
}

impl Played {
    /// Side that made this play.
    pub fn side(&self) -> Side {
        match self {
            Played::Move { side, .. } | Played::Pass { side } => *side,
        }
    }
}

/// What the side to move can do next.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Status {
    /// The side has at least one legal move.
    ToMove(Side),
    /// The side has no legal move but its opponent does, so it must pass.
    MustPass(Side),
    /// Neither side can move. Holds the winner, or None for a draw.
    Over(Option<Side>),
}

/// Game contains information for an in progress game:
/// The board the game started from, the sequence of plays made,
/// the current board and the side to move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    pub base_board: Board,
    pub history: Vec<Played>,
    pub board: Board,
    pub side_to_move: Side,
}

impl Game {
    /// Create a new game from a board and the side to move on it.
    pub fn new(board: Board, side_to_move: Side) -> Self {
        Self {
            base_board: board,
            history: Vec::new(),
            board,
            side_to_move,
        }
    }

    /// Create a new game in the standard start position. Black moves first.
    pub fn start_position() -> Self {
        Self::new(Board::start_position(), Side::Black)
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> MoveList {
        movegen::legal_moves(&self.board, self.side_to_move)
    }

    /// Returns the current game status.
    pub fn status(&self) -> Status {
        if movegen::has_legal_move(&self.board, self.side_to_move) {
            Status::ToMove(self.side_to_move)
        } else if movegen::has_legal_move(&self.board, !self.side_to_move) {
            Status::MustPass(self.side_to_move)
        } else {
            Status::Over(self.winner())
        }
    }

    /// Returns true if neither side can move.
    pub fn is_over(&self) -> bool {
        matches!(self.status(), Status::Over(_))
    }

    /// Disc counts as (black, white).
    pub fn score(&self) -> (u32, u32) {
        (self.board.count(Side::Black), self.board.count(Side::White))
    }

    /// Side with more discs, or None if counts are equal.
    /// Meaningful as a final result once the game is over.
    pub fn winner(&self) -> Option<Side> {
        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Play a move for the side to move, then hand the turn to the opponent.
    /// Returns the flipped squares. If the move is illegal, Err is returned
    /// and the game is unchanged.
    pub fn play(&mut self, move_: Move) -> error::Result<FlipSet> {
        if self.is_over() {
            return Err(ErrorKind::GameOver.into());
        }

        let side = self.side_to_move;
        let flips = movegen::apply(&mut self.board, move_, side)
            .ok_or_else(|| error::Error::from((ErrorKind::GameIllegalMove, move_)))?;

        self.history.push(Played::Move {
            side,
            move_,
            flips: flips.clone(),
        });
        self.side_to_move = !side;
        Ok(flips)
    }

    /// Pass the turn. Only allowed when the side to move has no legal move
    /// and the game is not over.
    pub fn pass(&mut self) -> error::Result<()> {
        match self.status() {
            Status::MustPass(side) => {
                self.history.push(Played::Pass { side });
                self.side_to_move = !side;
                Ok(())
            }
            Status::ToMove(side) => Err((ErrorKind::GameIllegalPass, side).into()),
            Status::Over(_) => Err(ErrorKind::GameOver.into()),
        }
    }

    /// Take back the last move or pass. Returns it, or None at the start of the game.
    pub fn undo(&mut self) -> Option<Played> {
        let played = self.history.pop()?;
        if let Played::Move { side, move_, flips } = &played {
            movegen::undo(&mut self.board, *move_, *side, flips);
        }
        self.side_to_move = played.side();
        Some(played)
    }
}

/// Convert a board to a Game with no past moves and Black to move.
impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self::new(board, Side::Black)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::start_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Cell, Side::*, Square};

    #[test]
    fn play_alternates_turns() {
        let mut game = Game::start_position();
        assert_eq!(game.status(), Status::ToMove(Black));

        let flips = game.play(Square::new(2, 3)).unwrap();
        assert_eq!(flips.len(), 1);
        assert_eq!(game.side_to_move, White);
        assert_eq!(game.score(), (4, 1));

        game.play(Square::new(2, 2)).unwrap();
        assert_eq!(game.side_to_move, Black);
        assert_eq!(game.history.len(), 2);
    }

    #[test]
    fn illegal_move_is_rejected() {
        let mut game = Game::start_position();
        let err = game.play(Square::new(0, 0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GameIllegalMove);
        assert_eq!(game, Game::start_position());
    }

    #[test]
    fn pass_only_when_forced() {
        let mut game = Game::start_position();
        assert_eq!(game.pass().unwrap_err().kind(), ErrorKind::GameIllegalPass);

        // White cannot capture the corner disc, Black can capture b1 from c1.
        let board: Board = "
            XO------
            --------
            --------
            --------
            --------
            --------
            --------
            --------
        "
        .parse()
        .unwrap();
        let mut game = Game::new(board, White);
        assert_eq!(game.status(), Status::MustPass(White));
        game.pass().unwrap();
        assert_eq!(game.side_to_move, Black);
        game.play(Square::new(0, 2)).unwrap();
        assert_eq!(game.score(), (3, 0));
        assert!(game.is_over());
        assert_eq!(game.status(), Status::Over(Some(Black)));
        assert_eq!(game.pass().unwrap_err().kind(), ErrorKind::GameOver);
        assert_eq!(
            game.play(Square::new(0, 3)).unwrap_err().kind(),
            ErrorKind::GameOver
        );
    }

    #[test]
    fn undo_restores_moves_and_passes() {
        let board: Board = "
            XO------
            --------
            --------
            --------
            --------
            --------
            --------
            --------
        "
        .parse()
        .unwrap();
        let mut game = Game::new(board, White);
        game.pass().unwrap();
        game.play(Square::new(0, 2)).unwrap();

        assert!(matches!(
            game.undo(),
            Some(Played::Move { side: Black, .. })
        ));
        assert_eq!(game.board, board);
        assert_eq!(game.side_to_move, Black);
        assert_eq!(game.undo(), Some(Played::Pass { side: White }));
        assert_eq!(game.side_to_move, White);
        assert_eq!(game.undo(), None);
    }

    #[test]
    fn draw_has_no_winner() {
        let mut board = Board::empty();
        board[Square::new(0, 0)] = Cell::Black;
        board[Square::new(7, 7)] = Cell::White;
        let game = Game::from(board);
        assert_eq!(game.status(), Status::Over(None));
        assert_eq!(game.winner(), None);
    }
}
