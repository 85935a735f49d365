/*
cli_options.rs

Copyright 2026 The Triangram developers

This file is part of Triangram.

Triangram is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Triangram is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Triangram. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! These options are intended for developers creating puzzles.
//! Triangram can generate random puzzles, save them as text files, and verify
//! existing puzzle files.
//!
//! # Examples
//!
//! Generate a puzzle at the easy difficulty level and save it:
//!
//! ```text
//! $ triangram -f easy -o puzzle.txt
//! ffff ffcc cccc cccc
//! ffff fecc eecc cdcc
//! aaaa aeee eeee dddd
//! aaaa abbb bbbb bddd
//! ```
//!
//! Verify a puzzle file:
//!
//! ```text
//! $ triangram --check puzzle.txt
//! puzzle.txt: 6 shapes on a 4x4 board
//! ```

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::config::{BoardConfig, COPYRIGHT_NOTICE, CheckAlgorithm, ConfigError, Difficulty};
use crate::game::Game;
use crate::generator::grow::{Growth, GrowthError};
use crate::generator::partition::Partition;
use crate::geometry::Vec2;
use crate::saver::game::SaverGame;
use crate::saver::puzzle::SaverPuzzle;

/// Give up generating after this many failed attempts.
const MAX_RETRIES: usize = 100;

/// Build and verify random triangle puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Difficulty level of the generated puzzles
    #[arg(value_enum, short = 'f', long, conflicts_with_all = ["size", "shapes"])]
    difficulty: Option<Difficulty>,

    /// Board side, in squares
    #[arg(long)]
    size: Option<usize>,

    /// Number of shapes to cut the board into
    #[arg(long)]
    shapes: Option<usize>,

    /// Completion check to run on the generated puzzles
    #[arg(value_enum, short = 'a', long, default_value_t = CheckAlgorithm::PositionCheck)]
    algorithm: CheckAlgorithm,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Save the generated puzzle to the given file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verify the given puzzle file instead of generating puzzles
    #[arg(long, conflicts_with_all = ["count", "output", "seed", "summary"])]
    check: Option<PathBuf>,

    /// Seed for the random number generator, for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Play random puzzles automatically and save the session
    #[arg(long, default_value_t = false, conflicts_with = "output")]
    autoplay: bool,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if let Some(path) = &args.check {
        return check_puzzle_file(path);
    }

    //
    // Resolve the board parameters
    //
    let config: BoardConfig = if args.size.is_some() || args.shapes.is_some() {
        let size: usize = args.size.unwrap_or(Difficulty::Easy.size());
        let shapes: usize = args.shapes.unwrap_or(Difficulty::Easy.shape_count());
        let ret: Result<BoardConfig, ConfigError> =
            BoardConfig::new(size, shapes, args.algorithm);
        match ret {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: {error}");
                return 1;
            }
        }
    } else {
        BoardConfig::from_difficulty(args.difficulty.unwrap_or_default(), args.algorithm)
    };

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if args.autoplay {
        return autoplay(config, args.count, &mut rng);
    }

    //
    // Generate the puzzles
    //
    let mut growth: Growth = Growth::new(config.size, config.shape_count);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;
    let mut errors: usize = 0;
    let mut i: usize = 0;
    while i < args.count {
        debug!("Iteration {i}");

        let ret: Result<Partition, GrowthError> = growth.generate(&mut rng);
        let partition: Partition = match ret {
            Ok(partition) => partition,
            Err(_) => {
                // The growth got walled in, retry with new seeds
                errors += 1;
                debug!("ERROR generating a random puzzle");
                if errors >= MAX_RETRIES {
                    eprintln!(
                        "Error: giving up after {errors} failed attempts. \
                         Try fewer shapes for this board size."
                    );
                    return 1;
                }
                continue;
            }
        };
        total += growth.duration;
        if growth.duration > max {
            max = growth.duration;
        }
        iterations += growth.iteration;

        // Verify that the shapes exactly cover the board
        if let Err(error) = partition.validate() {
            eprintln!("Invalid cover: {error}");
            panic!("Bug: the generated shapes do not cover the board");
        }

        // Verify that every shape is connected
        for shape in 0..partition.shape_count() {
            if !partition.shape_is_connected(shape) {
                eprintln!("Disconnected shape: {:?}", partition.shape_members(shape));
                panic!("Bug: the generator built a disconnected shape");
            }
        }

        // Verify that the assembled board passes both completion checks
        let mut board: Board = Board::from_partition(config, &partition);
        for shape in 0..board.shapes.len() {
            let target: Vec2 = board.shapes[shape].target;
            board.shapes[shape].set_position(target);
        }
        if !board.position_check() || !board.raycast_check() {
            panic!("Bug: the assembled board does not pass the completion checks");
        }

        println!("{}", partition.render_text());

        if let Some(path) = &args.output {
            let path: PathBuf = if args.count > 1 {
                path.with_extension(format!("{i}.txt"))
            } else {
                path.clone()
            };
            let saver: SaverPuzzle = SaverPuzzle::new(path);
            if let Err(error) = saver.save(&partition) {
                eprintln!("Error: {error}");
                return 1;
            }
        }

        i += 1;
    }

    // Print some stats
    if args.summary {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
            errors = {}",
            total,
            total / args.count as f32,
            max,
            iterations / args.count,
            errors
        );
    }
    0
}

/// Load and verify a puzzle file. Print the board on success.
fn check_puzzle_file(path: &Path) -> u8 {
    let saver: SaverPuzzle = SaverPuzzle::new(path.to_path_buf());
    let partition: Partition = match saver.load() {
        Ok(partition) => partition,
        Err(error) => {
            eprintln!("{}: {error}", path.display());
            return 1;
        }
    };

    for shape in 0..partition.shape_count() {
        if !partition.shape_is_connected(shape) {
            eprintln!(
                "{}: shape {shape} is disconnected",
                path.display()
            );
            return 1;
        }
    }

    println!(
        "{}: {} shapes on a {}x{} board",
        path.display(),
        partition.shape_count(),
        partition.size(),
        partition.size()
    );
    println!("{}", partition.render_text());
    0
}

/// Play puzzles automatically: ask for one hint, then drop every remaining
/// shape on its target. The session is saved in the system temporary
/// directory and resumed on the next run.
fn autoplay(config: BoardConfig, count: usize, rng: &mut StdRng) -> u8 {
    let saver: SaverGame = SaverGame::new(env::temp_dir());
    let saved: Option<Game> = match saver.get_game() {
        Ok(saved) => saved,
        Err(error) => {
            // A corrupt save file must not block playing
            eprintln!("Cannot restore the saved session, starting over: {error}");
            saver.delete_save();
            None
        }
    };
    let mut game: Game = match saved {
        Some(game) => {
            println!("Resuming the saved session");
            game
        }
        None => match Game::new(config, rng) {
            Ok(game) => game,
            Err(error) => {
                eprintln!("Error: {error}");
                return 1;
            }
        },
    };

    for i in 0..count {
        game.give_hint(rng);
        while !game.solved {
            let misplaced: Option<usize> = game
                .board
                .shapes
                .iter()
                .position(|shape| !shape.correctly_placed);
            match misplaced {
                Some(shape) => {
                    let target: Vec2 = game.board.shapes[shape].target;
                    game.drop_shape(shape, target);
                }
                None => break,
            }
        }
        let (hours, minutes, seconds) = game.get_duration_hms();
        println!(
            "Puzzle {i} solved in {hours:02}:{minutes:02}:{seconds:02}, total score: {}",
            game.score.total
        );

        if let Err(error) = game.next_puzzle(rng) {
            eprintln!("Error: {error}");
            return 1;
        }
    }

    debug!("Saving the session after {:?}", game.get_duration());
    if let Err(error) = saver.save_game(&game) {
        eprintln!("Error: {error}");
        return 1;
    }
    0
}
