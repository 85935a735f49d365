/*
grow.rs

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

//! Generate a random partition by growing all shapes at once.
//!
//! Generation runs in two phases. The seeding phase gives every shape one
//! uniformly random unowned triangle, so all shapes start growing in parallel
//! from the first step. The growth phase then repeats until no unowned
//! triangle remains: pick a random shape among those whose frontier is not
//! empty, pick a random triangle from that frontier, and claim it.
//!
//! Growing all shapes together is deliberate. Filling shapes one after the
//! other would leave the later shapes with whatever scattered triangles
//! remain, which produces visibly lopsided puzzles.
//!
//! A shape's frontier holds the unowned triangles adjacent to the shape.
//! Claiming a triangle removes it from the frontier of every shape, so no
//! shape can claim a triangle twice. A shape whose frontier runs empty simply
//! stops growing; it can never become growable again, because frontiers only
//! gain triangles next to a shape's own claims.

use log::debug;
use rand::Rng;
use std::fmt;
use std::time::Instant;

use super::coords::{self, Coord};
use super::partition::Partition;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum GrowthError {
    /// Unowned triangles remain but no shape can grow. This cannot happen on
    /// a connected board, but a caller must get an error rather than an
    /// endless loop. Retrying with the same random sequence would reproduce
    /// the failure, so the caller decides whether to retry with fresh
    /// randomness.
    Stuck,
}

impl fmt::Display for GrowthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrowthError::Stuck => {
                write!(f, "no shape can grow but unowned triangles remain")
            }
        }
    }
}

impl std::error::Error for GrowthError {}

/// Random partition generator.
pub struct Growth {
    /// Board size (squares per side).
    size: usize,

    /// Number of shapes to grow.
    shape_count: usize,

    /// Partition being built.
    partition: Partition,

    /// Claimed status of every triangle, indexed by arena index.
    claimed: Vec<bool>,

    /// Arena indices of the triangles that no shape owns yet. Unordered; a
    /// claim swap-removes its entry.
    unowned: Vec<usize>,

    /// Position of each unowned triangle in [`Growth::unowned`], indexed by
    /// arena index. Entries of claimed triangles are stale.
    unowned_pos: Vec<usize>,

    /// Per-shape frontier: arena indices of the unowned triangles adjacent to
    /// the shape.
    frontiers: Vec<Vec<usize>>,

    /// Number of triangles claimed while generating the last partition.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last partition.
    pub duration: f32,

    /// Time when the generation started. Used to compute [`Growth::duration`].
    start: Instant,
}

impl Growth {
    /// Create a [`Growth`] object.
    pub fn new(size: usize, shape_count: usize) -> Self {
        Self {
            size,
            shape_count,
            partition: Partition::new(size, shape_count),
            claimed: Vec::new(),
            unowned: Vec::new(),
            unowned_pos: Vec::new(),
            frontiers: Vec::new(),
            iteration: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate and return a random partition.
    ///
    /// # Errors
    ///
    /// The method returns [`GrowthError::Stuck`] when growth cannot proceed
    /// with unowned triangles remaining. The error is never retried here.
    pub fn generate(&mut self, rng: &mut impl Rng) -> Result<Partition, GrowthError> {
        self.iteration = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        self.seed(rng)?;
        while self.step(rng)? {}

        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}",
            self.iteration, self.duration
        );
        Ok(self.partition.clone())
    }

    /// Seeding phase: give every shape one random unowned triangle and start
    /// its frontier.
    fn seed(&mut self, rng: &mut impl Rng) -> Result<(), GrowthError> {
        self.partition = Partition::new(self.size, self.shape_count);
        self.claimed = vec![false; coords::num_triangles(self.size)];
        self.unowned = (0..coords::num_triangles(self.size)).collect();
        self.unowned_pos = (0..coords::num_triangles(self.size)).collect();
        self.frontiers = vec![Vec::new(); self.shape_count];

        for shape in 0..self.shape_count {
            if self.unowned.is_empty() {
                return Err(GrowthError::Stuck);
            }
            let index: usize = self.unowned[rng.random_range(0..self.unowned.len())];
            debug!(
                "Seeding shape {} at {}",
                shape,
                Coord::from_index(index, self.size)
            );
            self.claim(shape, index);
        }
        Ok(())
    }

    /// Growth phase, one iteration: claim one random frontier triangle for one
    /// random growable shape.
    ///
    /// Return `false` when every triangle is owned and generation is over.
    ///
    /// # Errors
    ///
    /// The method returns [`GrowthError::Stuck`] when no shape has a frontier
    /// triangle left while unowned triangles remain.
    fn step(&mut self, rng: &mut impl Rng) -> Result<bool, GrowthError> {
        if self.unowned.is_empty() {
            return Ok(false);
        }

        let growable: Vec<usize> = (0..self.shape_count)
            .filter(|&shape| !self.frontiers[shape].is_empty())
            .collect();
        if growable.is_empty() {
            debug!(
                "Stuck with {} unowned triangles and no growable shape",
                self.unowned.len()
            );
            return Err(GrowthError::Stuck);
        }

        let shape: usize = growable[rng.random_range(0..growable.len())];
        let frontier: &[usize] = &self.frontiers[shape];
        let index: usize = frontier[rng.random_range(0..frontier.len())];
        self.claim(shape, index);
        Ok(true)
    }

    /// Give the triangle to the shape, drop it from every frontier, and
    /// extend the claiming shape's frontier with the still-unowned neighbors.
    fn claim(&mut self, shape: usize, index: usize) {
        let coord: Coord = Coord::from_index(index, self.size);

        self.partition.claim(shape, coord);
        self.claimed[index] = true;
        let pos: usize = self.unowned_pos[index];
        self.unowned.swap_remove(pos);
        if let Some(&moved) = self.unowned.get(pos) {
            self.unowned_pos[moved] = pos;
        }
        // Every frontier, not only the claiming shape's: the triangle may be
        // a growth candidate of several shapes at once.
        for frontier in &mut self.frontiers {
            frontier.retain(|&t| t != index);
        }

        let frontier: &mut Vec<usize> = &mut self.frontiers[shape];
        for neighbor in coord.neighbors(self.size) {
            let neighbor_index: usize = neighbor.index(self.size);
            if !self.claimed[neighbor_index] && !frontier.contains(&neighbor_index) {
                frontier.push(neighbor_index);
            }
        }
        self.iteration += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_a_full_partition_of_connected_shapes() {
        let mut growth: Growth = Growth::new(4, 6);

        for seed in 0..8_u64 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let partition: Partition = growth.generate(&mut rng).unwrap();

            assert_eq!(partition.shape_count(), 6);
            assert_eq!(partition.claimed_count(), 64);
            assert!(partition.validate().is_ok());
            for shape in 0..6 {
                assert!(
                    partition.shape_is_connected(shape),
                    "shape {shape} is not connected (seed {seed})"
                );
                assert!(!partition.shape_members(shape).is_empty());
            }
        }
    }

    #[test]
    fn generation_is_reproducible_for_a_seed() {
        let mut growth: Growth = Growth::new(5, 9);
        let first: Partition = growth
            .generate(&mut StdRng::seed_from_u64(17))
            .unwrap();
        let second: Partition = growth
            .generate(&mut StdRng::seed_from_u64(17))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn frontiers_stay_consistent_during_growth() {
        let mut growth: Growth = Growth::new(4, 6);
        let mut rng: StdRng = StdRng::seed_from_u64(3);

        growth.seed(&mut rng).unwrap();
        loop {
            // Every frontier triangle is unowned and touches the shape that
            // lists it; a claimed triangle is in no frontier at all.
            for shape in 0..6 {
                for &index in &growth.frontiers[shape] {
                    let coord: Coord = Coord::from_index(index, 4);
                    assert_eq!(growth.partition.owner_of(coord), None);
                    assert!(
                        coord
                            .neighbors(4)
                            .iter()
                            .any(|n| growth.partition.owner_of(*n) == Some(shape)),
                        "frontier triangle {coord} does not touch shape {shape}"
                    );
                }
            }
            if !growth.step(&mut rng).unwrap() {
                break;
            }
        }
        assert!(growth.partition.validate().is_ok());
    }

    #[test]
    fn unowned_list_matches_the_claimed_map() {
        let mut growth: Growth = Growth::new(4, 6);
        let mut rng: StdRng = StdRng::seed_from_u64(9);

        growth.seed(&mut rng).unwrap();
        loop {
            // The unowned list and its position index track the claimed map
            // exactly through every swap-remove.
            assert_eq!(
                growth.unowned.len(),
                growth.claimed.iter().filter(|&&claimed| !claimed).count()
            );
            for &index in &growth.unowned {
                assert!(!growth.claimed[index]);
                assert_eq!(growth.unowned[growth.unowned_pos[index]], index);
            }
            if !growth.step(&mut rng).unwrap() {
                break;
            }
        }
        assert!(growth.unowned.is_empty());
    }

    #[test]
    fn seeding_fails_with_more_shapes_than_triangles() {
        // 4 triangles on a 1x1 board cannot seed 5 shapes.
        let mut growth: Growth = Growth::new(1, 5);
        let result = growth.seed(&mut StdRng::seed_from_u64(0));
        assert_eq!(result.unwrap_err(), GrowthError::Stuck);
    }

    #[test]
    fn one_shape_owns_the_whole_board() {
        let mut growth: Growth = Growth::new(3, 1);
        let partition: Partition = growth
            .generate(&mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_eq!(partition.shape_members(0).len(), 36);
        assert!(partition.shape_is_connected(0));
    }
}
