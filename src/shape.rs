/*
shape.rs

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

//! A movable group of triangles cut out of the board.

use serde::{Deserialize, Serialize};

use crate::config::PLACEMENT_TOLERANCE;
use crate::generator::coords::Coord;
use crate::geometry::Vec2;

/// A puzzle piece: a connected group of triangles with a current position and
/// a target position on the board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Shape {
    /// Index of the shape on its board.
    pub index: usize,

    /// Home coordinates of the member triangles.
    pub triangles: Vec<Coord>,

    /// Current position of the shape anchor.
    pub position: Vec2,

    /// Position of the anchor when the shape is correctly placed.
    pub target: Vec2,

    /// Whether the shape currently sits on its target.
    pub correctly_placed: bool,

    /// Whether a hint moved the shape into place.
    pub used_as_hint: bool,
}

impl Shape {
    /// Create a [`Shape`] object at the given starting position.
    pub fn new(index: usize, triangles: Vec<Coord>, position: Vec2, target: Vec2) -> Self {
        Self {
            index,
            triangles,
            position,
            target,
            correctly_placed: false,
            used_as_hint: false,
        }
    }

    /// Move the shape and update its placement flag.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.correctly_placed = position.distance(self.target) < PLACEMENT_TOLERANCE;
    }

    /// Move the shape onto its target as a hint.
    pub fn use_as_hint(&mut self) {
        self.used_as_hint = true;
        self.set_position(self.target);
    }

    /// Offset between the current position and the target. Zero when the
    /// shape is correctly placed.
    pub fn displacement(&self) -> Vec2 {
        self.position - self.target
    }
}
