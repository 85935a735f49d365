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

//! Manage the status of a game in progress.

use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::BoardConfig;
use crate::generator::grow::GrowthError;
use crate::geometry::Vec2;
use crate::saver::game::instant;
use crate::score::Score;

/// Cost of a hint, as a share of the board size.
fn hint_cost(config: &BoardConfig) -> i32 {
    config.size as i32
}

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct Game {
    /// The board being played.
    pub board: Board,

    /// Running score.
    pub score: Score,

    /// Whether the game has started.
    pub started: bool,

    /// Whether the current puzzle is solved.
    pub solved: bool,

    /// Whether the player asked for a hint on the current puzzle.
    pub hint_used: bool,

    /// Time when the game started. Used to compute game duration.
    #[serde(with = "instant")]
    start_time: Instant,
}

impl Game {
    /// Create a [`Game`] object with a freshly generated puzzle.
    pub fn new(config: BoardConfig, rng: &mut impl Rng) -> Result<Self, GrowthError> {
        let board: Board = Board::new_random(config, rng)?;
        Ok(Self::with_board(board))
    }

    /// Create a [`Game`] object from an already assembled board, for example
    /// a board loaded from a puzzle file.
    pub fn with_board(board: Board) -> Self {
        let mut score: Score = Score::new();
        score.start_puzzle(board.config.shape_count);
        Self {
            board,
            score,
            started: true,
            solved: false,
            hint_used: false,
            start_time: Instant::now(),
        }
    }

    /// Drop a shape at the given position. Each move costs one point. A
    /// shape placed by a hint is locked; dropping it does nothing and costs
    /// nothing.
    ///
    /// Return whether the move completed the puzzle.
    pub fn drop_shape(&mut self, shape: usize, position: Vec2) -> bool {
        if self.solved || self.board.shapes[shape].used_as_hint {
            return self.solved;
        }
        self.board.drop_shape(shape, position);
        self.score.deduct(1);
        if self.board.is_complete() {
            self.solved = true;
            self.score.complete_puzzle();
            debug!("Puzzle solved, total score: {}", self.score.total);
        }
        self.solved
    }

    /// Move a random misplaced shape onto its target. A hint costs as many
    /// points as the board side.
    ///
    /// Return whether the hint completed the puzzle.
    pub fn give_hint(&mut self, rng: &mut impl Rng) -> bool {
        if self.solved {
            return true;
        }
        if self.board.place_hint(rng).is_some() {
            self.hint_used = true;
            self.score.deduct(hint_cost(&self.board.config));
        }
        if self.board.is_complete() {
            self.solved = true;
            self.score.complete_puzzle();
        }
        self.solved
    }

    /// Replace the solved puzzle with a new one on the same parameters,
    /// keeping the banked score.
    pub fn next_puzzle(&mut self, rng: &mut impl Rng) -> Result<(), GrowthError> {
        self.board = Board::new_random(self.board.config, rng)?;
        self.score.start_puzzle(self.board.config.shape_count);
        self.solved = false;
        self.hint_used = false;
        Ok(())
    }

    /// Return the game duration.
    pub fn get_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Return the game duration in hours, minutes, and seconds.
    pub fn get_duration_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.start_time.elapsed().as_secs();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::config::{CheckAlgorithm, Difficulty};

    fn game(seed: u64) -> Game {
        let config: BoardConfig =
            BoardConfig::from_difficulty(Difficulty::Easy, CheckAlgorithm::PositionCheck);
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        Game::new(config, &mut rng)
            .unwrap_or_else(|err| panic!("generation failed: {err}"))
    }

    #[test]
    fn starts_with_the_full_budget() {
        let game: Game = game(1);
        assert!(game.started);
        assert!(!game.solved);
        assert_eq!(game.score.puzzle, 12);
        assert_eq!(game.score.total, 0);
    }

    #[test]
    fn moves_cost_one_point() {
        let mut game: Game = game(2);
        let target: Vec2 = game.board.shapes[0].target;
        assert!(!game.drop_shape(0, target));
        assert_eq!(game.score.puzzle, 11);
    }

    #[test]
    fn solving_by_moves_banks_the_score() {
        let mut game: Game = game(3);
        let count: usize = game.board.shapes.len();
        for shape in 0..count {
            let target: Vec2 = game.board.shapes[shape].target;
            let solved: bool = game.drop_shape(shape, target);
            assert_eq!(solved, shape == count - 1);
        }
        assert!(game.solved);
        assert_eq!(game.score.puzzle, 0);
        assert_eq!(game.score.total, 12 - count as i32);
        assert!(!game.hint_used);
    }

    #[test]
    fn hints_cost_the_board_size() {
        let mut game: Game = game(4);
        let mut rng: StdRng = StdRng::seed_from_u64(40);
        game.give_hint(&mut rng);
        assert!(game.hint_used);
        assert_eq!(game.score.puzzle, 12 - 4);
    }

    #[test]
    fn hint_shapes_cannot_be_moved() {
        let mut game: Game = game(7);
        let mut rng: StdRng = StdRng::seed_from_u64(70);
        game.give_hint(&mut rng);

        let placed: usize = game
            .board
            .shapes
            .iter()
            .position(|shape| shape.used_as_hint)
            .unwrap_or_else(|| panic!("a hint was placed"));
        let before: i32 = game.score.puzzle;

        game.drop_shape(placed, Vec2::new(0.0, -5.0));
        assert!(game.board.shapes[placed].correctly_placed);
        assert_eq!(game.score.puzzle, before);
    }

    #[test]
    fn hints_alone_solve_the_puzzle() {
        let mut game: Game = game(5);
        let mut rng: StdRng = StdRng::seed_from_u64(50);
        let count: usize = game.board.shapes.len();
        for _ in 0..count - 1 {
            assert!(!game.give_hint(&mut rng));
        }
        assert!(game.give_hint(&mut rng));
        assert!(game.solved);
        // 6 hints at 4 points each overdraw the 12-point budget.
        assert_eq!(game.score.total, 12 - 6 * 4);
    }

    #[test]
    fn next_puzzle_keeps_the_banked_score() {
        let mut game: Game = game(6);
        for shape in 0..game.board.shapes.len() {
            let target: Vec2 = game.board.shapes[shape].target;
            game.drop_shape(shape, target);
        }
        let banked: i32 = game.score.total;
        assert!(banked > 0);

        let mut rng: StdRng = StdRng::seed_from_u64(60);
        game.next_puzzle(&mut rng)
            .unwrap_or_else(|err| panic!("generation failed: {err}"));
        assert!(!game.solved);
        assert_eq!(game.score.total, banked);
        assert_eq!(game.score.puzzle, 12);
    }
}
