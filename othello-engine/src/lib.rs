//! Othello playing engine: move generation, static evaluation and a
//! time-boxed iterative deepening alpha-beta search.

pub mod board;
pub mod coretypes;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod level;
pub mod movegen;
pub mod movelist;
pub mod moveorder;
pub mod perft;
pub mod search;
pub mod timeman;

pub use board::Board;
pub use coretypes::{Cell, Move, Score, Side, Square};
pub use engine::{Engine, EngineBuilder};
pub use game::Game;
pub use level::Level;
pub use search::{find_best_move, SearchResult};
pub use timeman::Mode;
