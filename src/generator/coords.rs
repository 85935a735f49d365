/*
coords.rs

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

//! Coordinates of the triangles on the board.
//!
//! The board is a `size x size` grid of unit squares, and both diagonals split
//! every square into four right triangles (a pinwheel split). A triangle is
//! addressed by the column and row of its square plus an orientation:
//!
//! - `0` is the west triangle,
//! - `1` is the south triangle,
//! - `2` is the east triangle,
//! - `3` is the north triangle.
//!
//! Inside a square, orientation `o` shares a short edge with orientations
//! `(o + 1) % 4` and `(o + 3) % 4`. The hypotenuse borders the triangle with
//! the opposite orientation, `(o + 2) % 4`, in the adjacent square: the west
//! triangle touches the square on the left, the south triangle the square
//! below, and so on. Triangles along the board border therefore have two
//! neighbors instead of three.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Address of one triangle on the board.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column of the unit square, between 0 and the board size (excluded).
    pub col: usize,

    /// Row of the unit square, between 0 and the board size (excluded).
    pub row: usize,

    /// Orientation inside the square, between 0 and 3.
    pub orient: usize,
}

/// The triangle coordinates are displayed as `col,row,orient`, which is also
/// the format used in the puzzle save files.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.col, self.row, self.orient)
    }
}

impl Coord {
    /// Create a [`Coord`] object.
    pub fn new(col: usize, row: usize, orient: usize) -> Self {
        Self { col, row, orient }
    }

    /// Parse a `col,row,orient` string, as found in the puzzle save files.
    ///
    /// Return [`None`] when the string does not contain exactly three
    /// comma-separated non-negative integers. The components are not checked
    /// against any board size here; that validation belongs to the partition.
    pub fn parse(text: &str) -> Option<Self> {
        let mut items = text.split(',');
        let col: usize = items.next()?.trim().parse().ok()?;
        let row: usize = items.next()?.trim().parse().ok()?;
        let orient: usize = items.next()?.trim().parse().ok()?;
        if items.next().is_some() {
            return None;
        }
        Some(Self { col, row, orient })
    }

    /// Whether the coordinate addresses a triangle of a `size x size` board.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.col < size && self.row < size && self.orient < 4
    }

    /// Flat arena index of the triangle, between 0 and `4 * size * size`
    /// (excluded). The index is stable for a given board size.
    pub fn index(&self, size: usize) -> usize {
        (self.col * size + self.row) * 4 + self.orient
    }

    /// Reverse of [`Coord::index`].
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            col: index / (4 * size),
            row: (index / 4) % size,
            orient: index % 4,
        }
    }

    /// Return the triangles that share an edge with this one.
    ///
    /// The two same-square neighbors always exist. The hypotenuse neighbor is
    /// dropped when the adjacent square falls outside the board, so the result
    /// holds two or three coordinates.
    pub fn neighbors(&self, size: usize) -> Vec<Coord> {
        let mut adjacent: Vec<Coord> = Vec::with_capacity(3);

        adjacent.push(Coord::new(self.col, self.row, (self.orient + 1) % 4));
        adjacent.push(Coord::new(self.col, self.row, (self.orient + 3) % 4));

        // The square on the other side of the hypotenuse. The displacement
        // axis is a function of the orientation only.
        let cross: Option<(usize, usize)> = match self.orient {
            0 => self.col.checked_sub(1).map(|col| (col, self.row)),
            1 => self.row.checked_sub(1).map(|row| (self.col, row)),
            2 => {
                if self.col + 1 < size {
                    Some((self.col + 1, self.row))
                } else {
                    None
                }
            }
            _ => {
                if self.row + 1 < size {
                    Some((self.col, self.row + 1))
                } else {
                    None
                }
            }
        };
        if let Some((col, row)) = cross {
            adjacent.push(Coord::new(col, row, (self.orient + 2) % 4));
        }
        adjacent
    }
}

/// Number of triangles on a `size x size` board.
pub fn num_triangles(size: usize) -> usize {
    4 * size * size
}

/// Enumerate every triangle of a `size x size` board exactly once.
///
/// The order is fixed: squares column by column, then row by row, then the
/// four orientations in increasing order. Callers rely on this order being
/// reproducible.
pub fn all_coords(size: usize) -> Vec<Coord> {
    let mut coords: Vec<Coord> = Vec::with_capacity(num_triangles(size));
    for col in 0..size {
        for row in 0..size {
            for orient in 0..4 {
                coords.push(Coord::new(col, row, orient));
            }
        }
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_coords_covers_the_board_once() {
        let coords: Vec<Coord> = all_coords(4);
        assert_eq!(coords.len(), 64);

        let unique: HashSet<Coord> = coords.iter().copied().collect();
        assert_eq!(unique.len(), 64);
        assert!(coords.iter().all(|c| c.in_bounds(4)));
    }

    #[test]
    fn index_round_trips() {
        for size in [1, 4, 6] {
            for (i, coord) in all_coords(size).iter().enumerate() {
                assert_eq!(coord.index(size), i);
                assert_eq!(Coord::from_index(i, size), *coord);
            }
        }
    }

    #[test]
    fn neighbors_are_symmetric() {
        let size: usize = 4;
        for coord in all_coords(size) {
            for neighbor in coord.neighbors(size) {
                assert!(neighbor.in_bounds(size));
                assert!(
                    neighbor.neighbors(size).contains(&coord),
                    "{neighbor} does not list {coord} back"
                );
            }
        }
    }

    #[test]
    fn border_triangles_have_two_neighbors() {
        // The west triangle of the leftmost column has no square on the other
        // side of its hypotenuse.
        assert_eq!(Coord::new(0, 2, 0).neighbors(4).len(), 2);
        assert_eq!(Coord::new(2, 0, 1).neighbors(4).len(), 2);
        assert_eq!(Coord::new(3, 2, 2).neighbors(4).len(), 2);
        assert_eq!(Coord::new(2, 3, 3).neighbors(4).len(), 2);
    }

    #[test]
    fn interior_triangles_have_three_neighbors() {
        let c: Coord = Coord::new(1, 1, 0);
        let adjacent: Vec<Coord> = c.neighbors(4);
        assert_eq!(adjacent.len(), 3);
        assert!(adjacent.contains(&Coord::new(1, 1, 1)));
        assert!(adjacent.contains(&Coord::new(1, 1, 3)));
        assert!(adjacent.contains(&Coord::new(0, 1, 2)));
    }

    #[test]
    fn cross_square_neighbor_follows_the_orientation_axis() {
        assert!(Coord::new(2, 2, 1).neighbors(4).contains(&Coord::new(2, 1, 3)));
        assert!(Coord::new(2, 2, 2).neighbors(4).contains(&Coord::new(3, 2, 0)));
        assert!(Coord::new(2, 2, 3).neighbors(4).contains(&Coord::new(2, 3, 1)));
    }

    #[test]
    fn parse_accepts_coordinate_lines() {
        assert_eq!(Coord::parse("1,2,3"), Some(Coord::new(1, 2, 3)));
        assert_eq!(Coord::parse(" 0 , 0 , 0 "), Some(Coord::new(0, 0, 0)));
        assert_eq!(Coord::parse("1,2"), None);
        assert_eq!(Coord::parse("1,2,3,4"), None);
        assert_eq!(Coord::parse("shape"), None);
        assert_eq!(Coord::parse("1,-2,3"), None);
    }
}
