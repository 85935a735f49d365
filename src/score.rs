/*
score.rs

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

//! Score bookkeeping across puzzles.

use serde::{Deserialize, Serialize};

/// Points granted per shape at the start of each puzzle.
const POINTS_PER_SHAPE: i32 = 2;

/// Running score of a play session.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Score {
    /// Points banked from completed puzzles.
    pub total: i32,

    /// Points remaining for the puzzle in progress.
    pub puzzle: i32,
}

impl Score {
    /// Create a [`Score`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the puzzle budget for a new puzzle with the given number of
    /// shapes.
    pub fn start_puzzle(&mut self, shape_count: usize) {
        self.puzzle = POINTS_PER_SHAPE * shape_count as i32;
    }

    /// Deduct points from the puzzle budget. The budget can go negative when
    /// a puzzle takes more moves than it grants, and completing the puzzle
    /// then subtracts from the total.
    pub fn deduct(&mut self, points: i32) {
        self.puzzle -= points;
    }

    /// Bank the remaining puzzle budget into the total.
    pub fn complete_puzzle(&mut self) {
        self.total += self.puzzle;
        self.puzzle = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_tracks_the_shape_count() {
        let mut score: Score = Score::new();
        score.start_puzzle(6);
        assert_eq!(score.puzzle, 12);
        score.start_puzzle(12);
        assert_eq!(score.puzzle, 24);
    }

    #[test]
    fn overspent_budget_goes_negative_and_is_banked() {
        let mut score: Score = Score::new();
        score.start_puzzle(6);
        score.deduct(1);
        score.deduct(4);
        assert_eq!(score.puzzle, 7);
        score.deduct(10);
        assert_eq!(score.puzzle, -3);
        score.complete_puzzle();
        assert_eq!(score.total, -3);
    }

    #[test]
    fn completing_banks_the_remainder() {
        let mut score: Score = Score::new();
        score.start_puzzle(6);
        score.deduct(2);
        score.complete_puzzle();
        assert_eq!(score.total, 10);
        assert_eq!(score.puzzle, 0);

        score.start_puzzle(9);
        score.complete_puzzle();
        assert_eq!(score.total, 28);
    }
}
