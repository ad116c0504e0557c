//! Board is the square-centric 8x8 grid of cells an Othello game is played on.
//!
//! Board notation is 64 cell characters in row-major order, from a1 (row 0, col 0)
//! to h8 (row 7, col 7). `X` is Black, `O` is White and `-` is empty. Lowercase,
//! `B`/`W` and `.` are also accepted, and ASCII whitespace is ignored so either a
//! compact single line or an 8-line grid can be parsed.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::coretypes::{Cell, Side, Square, NUM_COLS, NUM_ROWS, NUM_SQUARES};
use crate::error::{self, ErrorKind};

/// Classic 8x8 Othello board. Index starts at a1.
/// a1 = idx 0
/// b1 = idx 1
/// a2 = idx 8
/// h8 = idx 63
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; Self::SIZE],
}

impl Board {
    pub const ROWS: usize = NUM_ROWS;
    pub const COLS: usize = NUM_COLS;
    pub const SIZE: usize = NUM_SQUARES;

    /// Creates a Board with every cell empty.
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; Self::SIZE],
        }
    }

    /// Standard Othello start position, with the two center diagonals seeded.
    pub fn start_position() -> Self {
        let mut board = Self::empty();
        board[Square::new(3, 3)] = Cell::White;
        board[Square::new(4, 4)] = Cell::White;
        board[Square::new(3, 4)] = Cell::Black;
        board[Square::new(4, 3)] = Cell::Black;
        board
    }

    /// Number of discs owned by a side.
    pub fn count(&self, side: Side) -> u32 {
        let cell = Cell::from(side);
        self.cells.iter().filter(|&&c| c == cell).count() as u32
    }

    /// Number of empty cells.
    pub fn empties(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_empty()).count() as u32
    }

    /// Returns true if every cell holds a disc.
    pub fn is_full(&self) -> bool {
        self.empties() == 0
    }

    /// Iterate over all (square, cell) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (Square::from_idx(idx), cell))
    }

    /// Returns the compact 64 character notation of this board.
    pub fn to_notation(&self) -> String {
        self.cells.iter().map(|&cell| char::from(cell)).collect()
    }

    /// Returns pretty-printed board with column letters and row digits.
    pub fn pretty(&self) -> String {
        let mut pretty = String::with_capacity(180);

        pretty.push_str("  a b c d e f g h\n");
        for row in 0..Self::ROWS {
            pretty.push_str(&(row + 1).to_string());
            for col in 0..Self::COLS {
                pretty.push(' ');
                pretty.push(char::from(self[row * Self::COLS + col]));
            }
            pretty.push('\n');
        }

        pretty
    }
}

/// Be careful with accessing with usize, as usize value out of bounds will panic.
impl Index<usize> for Board {
    type Output = Cell;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.cells[idx]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.cells[idx]
    }
}

impl Index<Square> for Board {
    type Output = Cell;
    fn index(&self, square: Square) -> &Self::Output {
        &self.cells[square.idx()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.cells[square.idx()]
    }
}

/// Default value is the standard start position.
impl Default for Board {
    fn default() -> Self {
        Board::start_position()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

impl FromStr for Board {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let mut board = Board::empty();
        let mut num_cells = 0;

        for ch in s.chars().filter(|ch| !ch.is_ascii_whitespace()) {
            let cell = Cell::from_char(ch).ok_or_else(|| {
                error::Error::from((ErrorKind::ParseBoardMalformed, format!("bad cell {ch:?}")))
            })?;

            if num_cells >= Self::SIZE {
                return Err((ErrorKind::ParseBoardMalformed, "more than 64 cells").into());
            }
            board[num_cells] = cell;
            num_cells += 1;
        }

        if num_cells != Self::SIZE {
            return Err((
                ErrorKind::ParseBoardMalformed,
                format!("expected 64 cells, found {num_cells}"),
            )
                .into());
        }

        Ok(board)
    }
}
