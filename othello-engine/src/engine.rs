//! Engine struct acts as a simplified API for the various parts of the Othello engine.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::coretypes::Move;
use crate::error::{self, ErrorKind};
use crate::game::{Game, Status};
use crate::level::{Level, DEFAULT_MOVETIME};
use crate::search::{self, SearchResult};
use crate::timeman::Mode;

/// EngineBuilder allows for parameters of an Engine to be set and built once.
///
/// Default values:
///
/// * `game`: Starting position, Black to move
/// * `level`: Best
/// * `movetime`: 1200 milliseconds
/// * `seed`: None, seeded from entropy
/// * `debug`: false
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EngineBuilder {
    game: Game,
    level: Level,
    movetime: Duration,
    seed: Option<u64>,
    debug: bool,
}

impl EngineBuilder {
    /// Create a new default EngineBuilder.
    pub fn new() -> Self {
        Self {
            game: Game::start_position(),
            level: Level::Best,
            movetime: DEFAULT_MOVETIME,
            seed: None,
            debug: false,
        }
    }

    /// Create and return a new Engine.
    pub fn build(&self) -> Engine {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Engine {
            game: self.game.clone(),
            level: self.level,
            movetime: self.movetime,
            debug: self.debug,
            rng,
        }
    }

    /// Set the Engine's initial game state.
    pub fn game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    /// Set the difficulty level the engine plays at.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the time budget for each searched move.
    pub fn movetime(mut self, movetime: Duration) -> Self {
        self.movetime = movetime;
        self
    }

    /// Seed the engine's random source, making Easy and Hard play reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set whether the engine begins in debug mode.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine wraps up all parameters required for choosing moves in a game.
/// It owns the game being played, so moves from either side go through it.
pub struct Engine {
    game: Game,
    level: Level,
    movetime: Duration,
    debug: bool,
    rng: StdRng,
}

impl Engine {
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    /// Returns reference to current game of engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the engine's difficulty level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the engine's per move time budget.
    pub fn movetime(&self) -> Duration {
        self.movetime
    }

    /// Returns current debug flag of engine.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Update the engine's difficulty level.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Play a move on the engine's game, for example one made by a human opponent.
    pub fn play(&mut self, move_: Move) -> error::Result<()> {
        self.game.play(move_).map(|_| ())
    }

    /// Pick a move for the side to move at the engine's level without playing it.
    /// Returns None if the side to move has no legal move.
    pub fn choose_move(&mut self) -> Option<Move> {
        let side = self.game.side_to_move;
        let mut board = self.game.board;
        self.level
            .choose_move(&mut board, side, self.movetime, &mut self.rng, self.debug)
    }

    /// Choose and play a move for the side to move, passing when forced.
    /// Returns the move played, or None for a pass.
    pub fn play_turn(&mut self) -> error::Result<Option<Move>> {
        match self.game.status() {
            Status::ToMove(_) => {
                let move_ = self
                    .choose_move()
                    .ok_or_else(|| error::Error::from(ErrorKind::GameIllegalPass))?;
                self.game.play(move_)?;
                Ok(Some(move_))
            }
            Status::MustPass(_) => {
                self.game.pass()?;
                Ok(None)
            }
            Status::Over(_) => Err(ErrorKind::GameOver.into()),
        }
    }

    /// Run a blocking search on the current position, ignoring the engine's level.
    pub fn search_sync(&self, mode: Mode) -> SearchResult {
        let mut board = self.game.board;
        search::search(&mut board, self.game.side_to_move, mode, self.debug)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
