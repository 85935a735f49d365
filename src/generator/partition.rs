/*
partition.rs

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

//! Assignment of every board triangle to exactly one shape.
//!
//! A [`Partition`] stores the membership list of each shape, in claim order,
//! together with an owner table indexed by the triangle arena index. A
//! triangle that no shape has claimed yet holds [`None`] in the owner table;
//! such triangles only exist while a puzzle is being generated.
//!
//! A partition built from untrusted data (a save file) must go through
//! [`Partition::from_members`], which rejects out-of-range coordinates,
//! triangles claimed twice, and incomplete board coverage.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coords::{self, Coord};

/// Type of errors raised when validating shape memberships.
#[derive(Debug, PartialEq, Eq)]
pub enum PartitionError {
    /// A coordinate falls outside the board.
    OutOfRange(Coord),

    /// A triangle appears in more than one shape, or twice in the same shape.
    DuplicateOwner(Coord),

    /// The memberships do not cover the whole board.
    IncompleteCover {
        /// Number of triangles on the board.
        expected: usize,

        /// Number of distinct triangles found in the memberships.
        actual: usize,
    },
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartitionError::OutOfRange(c) => {
                write!(f, "coordinate {c} is outside the board")
            }
            PartitionError::DuplicateOwner(c) => {
                write!(f, "triangle {c} is claimed more than once")
            }
            PartitionError::IncompleteCover { expected, actual } => {
                write!(
                    f,
                    "the shapes cover {actual} triangles instead of {expected}"
                )
            }
        }
    }
}

impl std::error::Error for PartitionError {}

/// Assignment of the board triangles to the shapes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Partition {
    /// Board size (squares per side).
    size: usize,

    /// Per-shape membership, in claim order. The first coordinate of a shape
    /// is its seed triangle.
    members: Vec<Vec<Coord>>,

    /// Owning shape of each triangle, indexed by [`Coord::index`]. [`None`]
    /// marks a triangle that no shape claimed yet.
    owner: Vec<Option<usize>>,
}

impl Partition {
    /// Create an empty [`Partition`] object with every triangle unowned.
    pub fn new(size: usize, shape_count: usize) -> Self {
        Self {
            size,
            members: vec![Vec::new(); shape_count],
            owner: vec![None; coords::num_triangles(size)],
        }
    }

    /// Build and validate a [`Partition`] object from per-shape memberships,
    /// as decoded from a save file.
    ///
    /// # Errors
    ///
    /// The method fails when a coordinate is out of range, when a triangle is
    /// claimed twice, or when the union of the memberships does not cover the
    /// board exactly.
    pub fn from_members(size: usize, members: Vec<Vec<Coord>>) -> Result<Self, PartitionError> {
        let mut partition: Partition = Partition::new(size, members.len());

        for (shape, shape_members) in members.iter().enumerate() {
            for coord in shape_members {
                if !coord.in_bounds(size) {
                    return Err(PartitionError::OutOfRange(*coord));
                }
                if partition.owner[coord.index(size)].is_some() {
                    return Err(PartitionError::DuplicateOwner(*coord));
                }
                partition.claim(shape, *coord);
            }
        }

        partition.validate()?;
        Ok(partition)
    }

    /// Board size (squares per side).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of shapes.
    pub fn shape_count(&self) -> usize {
        self.members.len()
    }

    /// Membership of every shape, in claim order.
    pub fn members(&self) -> &[Vec<Coord>] {
        &self.members
    }

    /// Membership of the given shape, in claim order.
    pub fn shape_members(&self, shape: usize) -> &[Coord] {
        &self.members[shape]
    }

    /// Shape owning the given triangle, or [`None`] when unclaimed.
    pub fn owner_of(&self, coord: Coord) -> Option<usize> {
        self.owner[coord.index(self.size)]
    }

    /// Number of triangles claimed so far, over all shapes.
    pub fn claimed_count(&self) -> usize {
        self.members.iter().map(Vec::len).sum()
    }

    /// Give the triangle to the shape. The triangle must be unowned.
    pub fn claim(&mut self, shape: usize, coord: Coord) {
        debug_assert!(self.owner[coord.index(self.size)].is_none());
        self.owner[coord.index(self.size)] = Some(shape);
        self.members[shape].push(coord);
    }

    /// Verify that every triangle of the board is owned by exactly one shape.
    ///
    /// Per-triangle uniqueness is structural (the owner table holds a single
    /// shape per slot), so only the coverage needs checking.
    pub fn validate(&self) -> Result<(), PartitionError> {
        let expected: usize = coords::num_triangles(self.size);
        let actual: usize = self.claimed_count();
        if actual != expected || self.owner.iter().any(Option::is_none) {
            return Err(PartitionError::IncompleteCover { expected, actual });
        }
        Ok(())
    }

    /// Whether the membership of the given shape forms a single connected
    /// component under triangle adjacency.
    ///
    /// An empty shape is not connected.
    pub fn shape_is_connected(&self, shape: usize) -> bool {
        let shape_members: &[Coord] = &self.members[shape];
        if shape_members.is_empty() {
            return false;
        }

        // Breadth-first walk from the seed triangle, restricted to the
        // triangles that the shape owns.
        let mut reached: Vec<bool> = vec![false; coords::num_triangles(self.size)];
        let mut queue: Vec<Coord> = vec![shape_members[0]];
        let mut count: usize = 0;

        reached[shape_members[0].index(self.size)] = true;
        while let Some(coord) = queue.pop() {
            count += 1;
            for neighbor in coord.neighbors(self.size) {
                let index: usize = neighbor.index(self.size);
                if !reached[index] && self.owner[index] == Some(shape) {
                    reached[index] = true;
                    queue.push(neighbor);
                }
            }
        }
        count == shape_members.len()
    }

    /// Render the partition as text for the command line.
    ///
    /// Rows are printed from the top of the board down. Each square shows its
    /// four triangles as owner letters in orientation order (west, south,
    /// east, north); a dot marks an unowned triangle.
    pub fn render_text(&self) -> String {
        let mut output: String = String::new();
        for row in (0..self.size).rev() {
            for col in 0..self.size {
                if col > 0 {
                    output.push(' ');
                }
                for orient in 0..4 {
                    let letter: char = match self.owner_of(Coord::new(col, row, orient)) {
                        Some(shape) if shape < 26 => char::from(b'a' + shape as u8),
                        Some(_) => '?',
                        None => '.',
                    };
                    output.push(letter);
                }
            }
            output.push('\n');
        }
        output
    }
}
