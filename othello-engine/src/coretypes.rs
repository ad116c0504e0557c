//! The fundamental and simple types of `othello_engine`.

use std::fmt::{self, Display, Write};
use std::ops::{Add, Mul, Neg, Not, Sub};
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_ROWS: usize = 8; // 1, 2, 3, 4, 5, 6, 7, 8
pub const NUM_COLS: usize = 8; // a, b, c, d, e, f, g, h
pub const NUM_SQUARES: usize = NUM_ROWS * NUM_COLS;

// Every legal move is an empty square, so this bounds any move list.
pub const MAX_MOVES: usize = NUM_SQUARES;

// Each of the four lines through a square can flip at most 6 discs.
pub const MAX_FLIPS: usize = 24;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Type alias for max ply/depth.
pub type PlyKind = u8;

// Type alias to make changing Score inner type easy if needed.
pub type ScoreKind = i32;

/// Evaluation score of a position. Higher is better for whichever side the
/// score was computed for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Score(pub ScoreKind);

/// Side can represent the color of a disc, or a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Black,
    White,
}

/// Contents of a single board square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

/// A square on the board, addressed by zero-based row and column.
/// Row 0 is the top row ("1"), column 0 is the left column ("a").
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

/// An Othello move is fully described by the square a disc is placed on.
pub type Move = Square;

///////////
// Score //
///////////

impl Score {
    // One above ScoreKind::MIN so that negating either bound never overflows.
    pub const MIN: Score = Self(ScoreKind::MIN + 1);
    pub const MAX: Score = Self(ScoreKind::MAX);

    pub const fn new(value: ScoreKind) -> Self {
        Self(value)
    }

    pub const fn signum(&self) -> ScoreKind {
        self.0.signum()
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl Sub for Score {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl Mul<ScoreKind> for Score {
    type Output = Self;
    fn mul(self, rhs: ScoreKind) -> Self::Output {
        Self(self.0 * rhs)
    }
}
impl Neg for Score {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Score::MAX => f.write_str("+inf"),
            Score::MIN => f.write_str("-inf"),
            Score(value) => write!(f, "{value}"),
        }
    }
}

//////////
// Side //
//////////

impl Side {
    /// Returns the other side.
    pub const fn opponent(&self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub const fn iter() -> SideIterator {
        SideIterator::new()
    }
}

impl Not for Side {
    type Output = Self;
    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl Not for &Side {
    type Output = Side;
    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl From<Side> for char {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Side::Black => "black",
            Side::White => "white",
        })
    }
}

impl FromStr for Side {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Side::Black),
            "white" | "w" | "o" => Ok(Side::White),
            _ => Err((ErrorKind::ParseSideMalformed, s).into()),
        }
    }
}

pub struct SideIterator {
    maybe_side: Option<Side>,
}

impl SideIterator {
    pub const fn new() -> Self {
        Self {
            maybe_side: Some(Side::Black),
        }
    }
}

impl Default for SideIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SideIterator {
    type Item = Side;
    fn next(&mut self) -> Option<Self::Item> {
        let side = self.maybe_side;
        self.maybe_side = match side {
            Some(Side::Black) => Some(Side::White),
            _ => None,
        };
        side
    }
}

//////////
// Cell //
//////////

impl Cell {
    /// Returns the side owning the disc on this cell, or None if empty.
    pub const fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Parse a single board notation character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' | 'B' | 'b' => Some(Cell::Black),
            'O' | 'o' | 'W' | 'w' => Some(Cell::White),
            '-' | '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> Self {
        match cell.side() {
            Some(side) => char::from(side),
            None => '-',
        }
    }
}

////////////
// Square //
////////////

impl Square {
    /// Create a square from zero-based row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more. Use `try_new` for unchecked input.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < NUM_ROWS && (col as usize) < NUM_COLS);
        Self { row, col }
    }

    /// Create a square from possibly off-board coordinates.
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && (row as usize) < NUM_ROWS && col >= 0 && (col as usize) < NUM_COLS {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from a row-major index in `0..64`.
    pub const fn from_idx(idx: usize) -> Self {
        debug_assert!(idx < NUM_SQUARES);
        Self {
            row: (idx / NUM_COLS) as u8,
            col: (idx % NUM_COLS) as u8,
        }
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Row-major index, (0,0) = 0, (0,7) = 7, (7,7) = 63.
    pub const fn idx(&self) -> usize {
        self.row as usize * NUM_COLS + self.col as usize
    }

    /// Returns the neighboring square one step in direction (d_row, d_col),
    /// or None when that step leaves the board.
    pub const fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).map(Square::from_idx)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'a' + self.col) as char)?;
        f.write_char((b'1' + self.row) as char)
    }
}

/// Parses conventional notation, column letter then row digit: "d3" == (2, 3).
impl FromStr for Square {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let mut chars = s.trim().chars();
        let (col_ch, row_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(col_ch), Some(row_ch), None) => (col_ch.to_ascii_lowercase(), row_ch),
            _ => return Err((ErrorKind::ParseSquareMalformed, s).into()),
        };

        match (col_ch, row_ch) {
            ('a'..='h', '1'..='8') => Ok(Square::new(row_ch as u8 - b'1', col_ch as u8 - b'a')),
            _ => Err((ErrorKind::ParseSquareMalformed, s).into()),
        }
    }
}
