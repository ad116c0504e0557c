//! Main CLI interface to the Othello engine.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};

use othello_engine::coretypes::PlyKind;
use othello_engine::error;
use othello_engine::game::Status;
use othello_engine::level::DEFAULT_MOVETIME;
use othello_engine::perft::perft;
use othello_engine::{movegen, movelist, search};
use othello_engine::{Board, EngineBuilder, Level, Mode, Side};

#[derive(Parser, Debug)]
#[command(author, version, about = "Othello engine command line driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a board and print the best move for the side to move
    Bestmove {
        /// Board as 64 cells in row-major order: '-' empty, 'X' black, 'O' white.
        /// Whitespace is ignored.
        board: Board,

        /// Side to move
        #[arg(short, long, default_value = "black")]
        side: Side,

        /// Time budget in milliseconds
        #[arg(short, long)]
        movetime: Option<u64>,

        /// Fixed search depth, time boxed only when --movetime is also given
        #[arg(short, long)]
        depth: Option<PlyKind>,

        /// Print per-iteration search info
        #[arg(long)]
        debug: bool,
    },

    /// Play a CPU versus CPU game from the start position
    Selfplay {
        /// Level playing Black: easy, hard or best
        #[arg(long, default_value = "best")]
        black: Level,

        /// Level playing White: easy, hard or best
        #[arg(long, default_value = "best")]
        white: Level,

        /// Time budget in milliseconds for each searched move
        #[arg(short, long, default_value_t = DEFAULT_MOVETIME.as_millis() as u64)]
        movetime: u64,

        /// Seed for reproducible random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Only print the final result
        #[arg(short, long)]
        quiet: bool,
    },

    /// Count leaf nodes from the start position for each depth up to DEPTH
    Perft {
        depth: PlyKind,

        /// Number of worker threads
        #[arg(short, long, default_value_t = 1)]
        threads: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Bestmove {
            board,
            side,
            movetime,
            depth,
            debug,
        } => bestmove(board, side, movetime, depth, debug),
        Command::Selfplay {
            black,
            white,
            movetime,
            seed,
            quiet,
        } => selfplay(black, white, movetime, seed, quiet),
        Command::Perft { depth, threads } => {
            run_perft(depth, threads);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn bestmove(
    mut board: Board,
    side: Side,
    movetime: Option<u64>,
    depth: Option<PlyKind>,
    debug: bool,
) -> error::Result<()> {
    let mode = match depth {
        Some(ply) => Mode::depth(ply, movetime.map(Duration::from_millis)),
        None => Mode::movetime(
            movetime.map_or(DEFAULT_MOVETIME, Duration::from_millis),
            None,
        ),
    };

    if debug {
        println!("{}", board.pretty());
        let legal_moves = movegen::legal_moves(&board, side);
        println!("info legal moves {}", movelist::display(&legal_moves));
    }
    let result = search::search(&mut board, side, mode, debug);
    match result.best_move {
        Some(best_move) => println!("bestmove {best_move}"),
        None => println!("bestmove pass"),
    }
    print!("{result}");
    Ok(())
}

fn selfplay(
    black: Level,
    white: Level,
    movetime: u64,
    seed: Option<u64>,
    quiet: bool,
) -> error::Result<()> {
    let mut builder = EngineBuilder::new().movetime(Duration::from_millis(movetime));
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let mut engine = builder.build();

    loop {
        let status = engine.game().status();
        let side = match status {
            Status::ToMove(side) | Status::MustPass(side) => side,
            Status::Over(_) => break,
        };
        engine.set_level(match side {
            Side::Black => black,
            Side::White => white,
        });

        let played = engine.play_turn()?;
        if !quiet {
            match played {
                Some(move_) => println!("{side}: {move_}"),
                None => println!("{side}: pass"),
            }
        }
    }

    let game = engine.game();
    let (black_discs, white_discs) = game.score();
    println!("{}", game.board.pretty());
    println!("black ({black}) {black_discs} - {white_discs} white ({white})");
    match game.winner() {
        Some(winner) => println!("winner: {winner}"),
        None => println!("draw"),
    }
    Ok(())
}

fn run_perft(depth: PlyKind, threads: usize) {
    let board = Board::start_position();
    for ply in 0..=depth {
        let instant = Instant::now();
        let info = perft(board, Side::Black, ply, threads);
        println!(
            "perft({ply}) = {} ({} ms)",
            info.nodes,
            instant.elapsed().as_millis()
        );
    }
}
