//! Othello Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Othello Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the Othello engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Square parse string malformed.
    ParseSquareMalformed,
    /// Side parse string malformed.
    ParseSideMalformed,
    /// Board notation has an unknown cell character or the wrong number of cells.
    ParseBoardMalformed,
    /// Level parse string malformed.
    ParseLevelMalformed,

    /// A move that flips nothing, or targets an occupied square, was played.
    GameIllegalMove,
    /// A pass was requested while the side to move still has a legal move.
    GameIllegalPass,
    /// Neither side can move, so nothing more can be played.
    GameOver,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ParseSquareMalformed => "parse square malformed",
            ErrorKind::ParseSideMalformed => "parse side malformed",
            ErrorKind::ParseBoardMalformed => "parse board malformed",
            ErrorKind::ParseLevelMalformed => "parse level malformed",

            ErrorKind::GameIllegalMove => "game illegal move",
            ErrorKind::GameIllegalPass => "game illegal pass",
            ErrorKind::GameOver => "game over",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Othello Engine.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
}

impl Error {
    /// Returns the kind of this error, regardless of attached context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind) => *error_kind,
            Error::Message(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
