/*
game.rs

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

//! Save and restore the game in progress when quitting or starting Triangram.
//!
//! When a game is in progress and the user quits Triangram, the game status is
//! saved in the `savegame.json` file.
//! When Triangram is restarted, the saved game is loaded, and the user can
//! continue the puzzle.
//!
//! The saved object is a serialization of the [`Game`] object in JSON format
//! by using [`serde`], wrapped with the save timestamp.

use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::game::Game;

/// Serialize and deserialize [`std::time::Instant`] objects with Serde.
pub mod instant {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
    use std::time::{Duration, Instant};

    /// Serialize an [`std::time::Instant`] object.
    pub fn serialize<S>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let duration: Duration = instant.elapsed();
        duration.serialize(serializer)
    }

    /// Deserialize an [`std::time::Instant`] object.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Instant, D::Error>
    where
        D: Deserializer<'de>,
    {
        let duration: Duration = Duration::deserialize(deserializer)?;
        let now: Instant = Instant::now();
        let instant: Instant = now
            .checked_sub(duration)
            .ok_or_else(|| Error::custom("Cannot compute the saved game duration"))?;
        Ok(instant)
    }
}

/// A saved game with its save timestamp.
#[derive(Serialize, Deserialize, Debug)]
pub struct SavedGame {
    /// When the game was saved.
    pub saved_at: DateTime<Local>,

    /// The game status.
    pub game: Game,
}

/// Object to save and restore a game in progress.
pub struct SaverGame {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the game
    /// must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("savegame.json");
        debug!("Save game file: {data_dir:?}");
        SaverGame {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Game`] object for the saved game.
    ///
    /// Return the [`Game`] object or None if there is no saved game.
    pub fn get_game(&self) -> Result<Option<Game>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let saved: SavedGame = serde_json::from_reader(reader)?;
        debug!("Restoring the game saved at {}", saved.saved_at);
        Ok(Some(saved.game))
    }

    /// Save the provided [`Game`] object.
    pub fn save_game(&self, game: &Game) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(
            &mut writer,
            &SavedGameRef {
                saved_at: Local::now(),
                game,
            },
        )?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

/// Borrowing counterpart of [`SavedGame`] for serialization.
#[derive(Serialize)]
struct SavedGameRef<'a> {
    saved_at: DateTime<Local>,
    game: &'a Game,
}

#[cfg(test)]
mod tests {
    use std::env;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::config::{BoardConfig, CheckAlgorithm, Difficulty};
    use crate::geometry::Vec2;

    fn game() -> Game {
        let config: BoardConfig =
            BoardConfig::from_difficulty(Difficulty::Easy, CheckAlgorithm::RaycastCheck);
        let mut rng: StdRng = StdRng::seed_from_u64(21);
        Game::new(config, &mut rng).unwrap_or_else(|err| panic!("generation failed: {err}"))
    }

    #[test]
    fn saves_and_restores_the_game() {
        let dir: PathBuf = env::temp_dir();
        let saver: SaverGame = SaverGame::new(dir);
        saver.delete_save();

        let mut game: Game = game();
        let target: Vec2 = game.board.shapes[0].target;
        game.drop_shape(0, target);

        saver
            .save_game(&game)
            .unwrap_or_else(|err| panic!("saving failed: {err}"));
        let restored: Game = saver
            .get_game()
            .unwrap_or_else(|err| panic!("loading failed: {err}"))
            .unwrap_or_else(|| panic!("no saved game"));

        assert_eq!(restored.board, game.board);
        assert_eq!(restored.score, game.score);
        assert_eq!(restored.solved, game.solved);
        assert!(restored.board.shapes[0].correctly_placed);

        saver.delete_save();
    }

    #[test]
    fn missing_save_is_not_an_error() {
        let mut dir: PathBuf = env::temp_dir();
        dir.push("no-such-subdirectory");
        let saver: SaverGame = SaverGame::new(dir);
        assert!(matches!(saver.get_game(), Ok(None)));
    }
}
