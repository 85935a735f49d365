/*
geometry.rs

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

//! Placement math for the board plane.
//!
//! Every unit square sits at `origin + (col, row)`, with the square spanning
//! half a unit around that point. The four triangles of a square are the
//! pinwheel split around the square center; their corner tables below match
//! the orientation numbering of [`crate::generator::coords`].

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::generator::coords::Coord;

/// Distance from a square center to each of its four probe points.
const PROBE_OFFSET: f32 = 0.25;

/// Corners of the four triangles of a square, relative to the square center,
/// in orientation order: west, south, east, north.
const TRIANGLE_CORNERS: [[(f32, f32); 3]; 4] = [
    [(0.0, 0.0), (-0.5, 0.5), (-0.5, -0.5)],
    [(0.0, 0.0), (-0.5, -0.5), (0.5, -0.5)],
    [(0.0, 0.0), (0.5, -0.5), (0.5, 0.5)],
    [(0.0, 0.0), (0.5, 0.5), (-0.5, 0.5)],
];

/// A point or displacement on the board plane.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Vec2 {
    /// Create a [`Vec2`] object.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to the other point.
    pub fn distance(self, other: Vec2) -> f32 {
        let dx: f32 = self.x - other.x;
        let dy: f32 = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Center of the square at the given column and row.
pub fn square_center(col: usize, row: usize, origin: Vec2) -> Vec2 {
    origin + Vec2::new(col as f32, row as f32)
}

/// Corners of the triangle at the given coordinate, in board space.
pub fn triangle_corners(coord: Coord, origin: Vec2) -> [Vec2; 3] {
    let center: Vec2 = square_center(coord.col, coord.row, origin);
    TRIANGLE_CORNERS[coord.orient].map(|(x, y)| center + Vec2::new(x, y))
}

/// The four probe points of a square: center displaced down, up, left, and
/// right by a quarter unit. Each point lies strictly inside one triangle of
/// the square (south, north, west, east respectively).
pub fn probe_points(col: usize, row: usize, origin: Vec2) -> [Vec2; 4] {
    let center: Vec2 = square_center(col, row, origin);
    [
        center + Vec2::new(0.0, -PROBE_OFFSET),
        center + Vec2::new(0.0, PROBE_OFFSET),
        center + Vec2::new(-PROBE_OFFSET, 0.0),
        center + Vec2::new(PROBE_OFFSET, 0.0),
    ]
}

/// Whether the point lies inside the triangle. Points on an edge count as
/// inside.
pub fn point_in_triangle(point: Vec2, corners: &[Vec2; 3]) -> bool {
    // Sign of the cross product of (b - a) and (point - a): which side of the
    // edge a-b the point falls on.
    fn side(point: Vec2, a: Vec2, b: Vec2) -> f32 {
        (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x)
    }

    let d1: f32 = side(point, corners[0], corners[1]);
    let d2: f32 = side(point, corners[1], corners[2]);
    let d3: f32 = side(point, corners[2], corners[0]);

    let has_negative: bool = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive: bool = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_negative && has_positive)
}

/// Snap a dropped position to the board grid, so that square centers land on
/// `origin + (col, row)` points.
pub fn snap(position: Vec2, origin: Vec2) -> Vec2 {
    Vec2::new(
        (position.x + origin.x).round() - origin.x,
        (position.y + origin.y).round() - origin.y,
    )
}
