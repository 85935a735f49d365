/*
board.rs

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

//! The playing board: shapes cut out of the grid, their tray layout, and the
//! two completion checks.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{BoardConfig, CheckAlgorithm, SHAPES_SPACING_X, SHAPES_SPACING_Y};
use crate::generator::coords::{self, Coord};
use crate::generator::grow::{Growth, GrowthError};
use crate::generator::partition::Partition;
use crate::geometry::{self, Vec2};
use crate::shape::Shape;

/// A puzzle board: the grid parameters, the shapes to place, and the
/// triangle ownership map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Board {
    /// Board parameters.
    pub config: BoardConfig,

    /// The shapes of the puzzle.
    pub shapes: Vec<Shape>,

    /// Owning shape of each triangle, indexed by [`Coord::index`].
    owner: Vec<usize>,
}

impl Board {
    /// Create a [`Board`] object from a board partition. The shapes start in
    /// the tray below the board.
    pub fn from_partition(config: BoardConfig, partition: &Partition) -> Self {
        let mut owner: Vec<usize> = vec![0; config.num_triangles()];
        let mut shapes: Vec<Shape> = Vec::with_capacity(config.shape_count);

        for (index, members) in partition.members().iter().enumerate() {
            for coord in members {
                owner[coord.index(config.size)] = index;
            }
            // The first member is the growth seed; the shape target is the
            // center of its square.
            let seed: Coord = members[0];
            let target: Vec2 = geometry::square_center(seed.col, seed.row, config.origin);
            let position: Vec2 = Self::tray_slot(&config, index);
            shapes.push(Shape::new(index, members.clone(), position, target));
        }

        Self {
            config,
            shapes,
            owner,
        }
    }

    /// Create a [`Board`] object with a freshly generated partition.
    pub fn new_random(
        config: BoardConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, GrowthError> {
        let mut growth: Growth = Growth::new(config.size, config.shape_count);
        let partition: Partition = growth.generate(rng)?;
        Ok(Self::from_partition(config, &partition))
    }

    /// Tray position of the shape with the given index. The tray fills
    /// columns of up to `shape_count / 3` slots below the board.
    fn tray_slot(config: &BoardConfig, index: usize) -> Vec2 {
        let rows: usize = (config.shape_count / 3).max(1);
        config.shapes_origin
            + Vec2::new(
                (index / rows) as f32 * SHAPES_SPACING_X,
                -((index % rows) as f32 * SHAPES_SPACING_Y),
            )
    }

    /// Index of the shape owning the given triangle.
    pub fn owner_of(&self, coord: Coord) -> usize {
        self.owner[coord.index(self.config.size)]
    }

    /// Drop a shape at the given position. Above the snapping height the
    /// position is snapped to the grid first, so that near-correct drops
    /// land exactly on target. A shape placed by a hint is locked and
    /// ignores drops.
    pub fn drop_shape(&mut self, shape: usize, position: Vec2) {
        if self.shapes[shape].used_as_hint {
            return;
        }
        let position: Vec2 = if position.y > self.config.min_snap_y {
            geometry::snap(position, self.config.origin)
        } else {
            position
        };
        self.shapes[shape].set_position(position);
        debug!(
            "Shape {shape} dropped at ({}, {}), correctly placed: {}",
            position.x, position.y, self.shapes[shape].correctly_placed
        );
    }

    /// Whether the puzzle is complete, using the configured check.
    pub fn is_complete(&self) -> bool {
        match self.config.algorithm {
            CheckAlgorithm::PositionCheck => self.position_check(),
            CheckAlgorithm::RaycastCheck => self.raycast_check(),
        }
    }

    /// Whether every shape sits on its target position.
    pub fn position_check(&self) -> bool {
        self.shapes.iter().all(|shape| shape.correctly_placed)
    }

    /// Whether every square of the board is exactly covered. Each of the
    /// four probe points of each square must lie inside exactly one
    /// triangle, wherever the shapes currently are.
    pub fn raycast_check(&self) -> bool {
        for col in 0..self.config.size {
            for row in 0..self.config.size {
                for probe in geometry::probe_points(col, row, self.config.origin) {
                    if self.count_triangles_at(probe) != 1 {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Number of triangles covering the given point, with each triangle
    /// displaced by its owning shape.
    fn count_triangles_at(&self, point: Vec2) -> usize {
        let mut count: usize = 0;
        for coord in coords::all_coords(self.config.size) {
            let displacement: Vec2 = self.shapes[self.owner_of(coord)].displacement();
            let corners: [Vec2; 3] = geometry::triangle_corners(coord, self.config.origin)
                .map(|corner| corner + displacement);
            if geometry::point_in_triangle(point, &corners) {
                count += 1;
            }
        }
        count
    }

    /// Move a random misplaced shape onto its target. Returns the index of
    /// the placed shape, or `None` when every shape is already placed.
    pub fn place_hint(&mut self, rng: &mut impl Rng) -> Option<usize> {
        let misplaced: Vec<usize> = self
            .shapes
            .iter()
            .filter(|shape| !shape.correctly_placed)
            .map(|shape| shape.index)
            .collect();
        if misplaced.is_empty() {
            return None;
        }
        let shape: usize = misplaced[rng.random_range(0..misplaced.len())];
        self.shapes[shape].use_as_hint();
        debug!("Hint placed shape {shape}");
        Some(shape)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::config::Difficulty;

    // One shape per column of squares.
    fn column_strips(size: usize) -> Partition {
        let members: Vec<Vec<Coord>> = (0..size)
            .map(|col| {
                (0..size)
                    .flat_map(|row| (0..4).map(move |orient| Coord::new(col, row, orient)))
                    .collect()
            })
            .collect();
        Partition::from_members(size, members)
            .unwrap_or_else(|err| panic!("column strips are a valid partition: {err}"))
    }

    fn strip_board(algorithm: CheckAlgorithm) -> Board {
        let config: BoardConfig = BoardConfig::new(4, 4, algorithm)
            .unwrap_or_else(|err| panic!("valid parameters: {err}"));
        Board::from_partition(config, &column_strips(4))
    }

    fn solve(board: &mut Board) {
        for index in 0..board.shapes.len() {
            let target: Vec2 = board.shapes[index].target;
            board.shapes[index].set_position(target);
        }
    }

    #[test]
    fn shapes_start_in_the_tray() {
        let board: Board = strip_board(CheckAlgorithm::PositionCheck);
        assert_eq!(board.shapes.len(), 4);
        assert!(!board.position_check());

        // 4 shapes over a single tray row of slots.
        assert_eq!(board.shapes[0].position, Vec2::new(-1.5, -4.5));
        assert_eq!(board.shapes[1].position, Vec2::new(1.5, -4.5));
        assert_eq!(board.shapes[2].position, Vec2::new(4.5, -4.5));
    }

    #[test]
    fn ownership_follows_the_partition() {
        let board: Board = strip_board(CheckAlgorithm::PositionCheck);
        assert_eq!(board.owner_of(Coord::new(0, 3, 2)), 0);
        assert_eq!(board.owner_of(Coord::new(3, 0, 1)), 3);
    }

    #[test]
    fn position_check_requires_every_shape() {
        let mut board: Board = strip_board(CheckAlgorithm::PositionCheck);
        solve(&mut board);
        assert!(board.is_complete());

        let target: Vec2 = board.shapes[2].target;
        board.shapes[2].set_position(target + Vec2::new(0.02, 0.0));
        assert!(!board.is_complete());

        // Within tolerance still counts as placed.
        board.shapes[2].set_position(target + Vec2::new(0.005, 0.0));
        assert!(board.is_complete());
    }

    #[test]
    fn raycast_check_passes_on_a_solved_board() {
        let mut board: Board = strip_board(CheckAlgorithm::RaycastCheck);
        solve(&mut board);
        assert!(board.is_complete());
    }

    #[test]
    fn raycast_check_fails_on_a_missing_shape() {
        let mut board: Board = strip_board(CheckAlgorithm::RaycastCheck);
        solve(&mut board);
        let target: Vec2 = board.shapes[1].target;
        board.shapes[1].set_position(target + Vec2::new(100.0, 0.0));
        assert!(!board.is_complete());
    }

    #[test]
    fn raycast_check_fails_on_overlap() {
        let mut board: Board = strip_board(CheckAlgorithm::RaycastCheck);
        solve(&mut board);
        // Move the first strip onto the second: double cover on column 1,
        // no cover on column 0.
        let target: Vec2 = board.shapes[0].target;
        board.shapes[0].set_position(target + Vec2::new(1.0, 0.0));
        assert!(!board.is_complete());
    }

    #[test]
    fn drops_snap_only_above_the_threshold() {
        let mut board: Board = strip_board(CheckAlgorithm::PositionCheck);

        // min_snap_y is 0.0 for a size-4 board, so a drop on the upper half
        // of the board snaps to the grid.
        board.drop_shape(0, Vec2::new(-1.3, 1.4));
        assert_eq!(board.shapes[0].position, Vec2::new(-1.5, 1.5));

        let low: Vec2 = Vec2::new(-1.3, -4.2);
        board.drop_shape(0, low);
        assert_eq!(board.shapes[0].position, low);
    }

    #[test]
    fn hints_place_misplaced_shapes() {
        let mut board: Board = strip_board(CheckAlgorithm::PositionCheck);
        let mut rng: StdRng = StdRng::seed_from_u64(11);

        for _ in 0..4 {
            let placed: usize = board
                .place_hint(&mut rng)
                .unwrap_or_else(|| panic!("misplaced shapes remain"));
            assert!(board.shapes[placed].correctly_placed);
            assert!(board.shapes[placed].used_as_hint);
        }
        assert!(board.position_check());
        assert_eq!(board.place_hint(&mut rng), None);
    }

    #[test]
    fn hint_shapes_are_locked() {
        let mut board: Board = strip_board(CheckAlgorithm::PositionCheck);
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let placed: usize = board
            .place_hint(&mut rng)
            .unwrap_or_else(|| panic!("misplaced shapes remain"));

        let target: Vec2 = board.shapes[placed].target;
        board.drop_shape(placed, Vec2::new(-1.3, -4.2));
        assert_eq!(board.shapes[placed].position, target);
        assert!(board.shapes[placed].correctly_placed);
    }

    #[test]
    fn generated_boards_solve_under_both_checks() {
        for seed in 0..4 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let config: BoardConfig = BoardConfig::from_difficulty(
                Difficulty::Easy,
                CheckAlgorithm::RaycastCheck,
            );
            let mut board: Board = Board::new_random(config, &mut rng)
                .unwrap_or_else(|err| panic!("generation failed: {err}"));
            assert!(!board.is_complete());
            solve(&mut board);
            assert!(board.raycast_check());
            assert!(board.position_check());
        }
    }
}
