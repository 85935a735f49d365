/*
config.rs

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

//! Board parameters: difficulty presets, completion check selection, and the
//! derived layout constants.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use crate::geometry::Vec2;

/// Notice printed by the `--version` command-line option.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2026 The Triangram developers\n\
     License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>"
);

/// Maximum board side, in squares.
pub const MAX_SIZE: usize = 32;

/// Horizontal spacing between shape slots in the tray.
pub const SHAPES_SPACING_X: f32 = 3.0;

/// Vertical spacing between shape slots in the tray.
pub const SHAPES_SPACING_Y: f32 = 2.0;

/// Vertical gap between the board and the shape tray.
pub const SHAPES_TRAY_GAP: f32 = 3.0;

/// A shape is correctly placed when it lies within this distance of its
/// target position.
pub const PLACEMENT_TOLERANCE: f32 = 0.01;

/// Difficulty level of the puzzles.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    FromRepr,
    clap::ValueEnum,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl Difficulty {
    /// Board side for the difficulty level, in squares.
    pub fn size(&self) -> usize {
        *self as usize + 4
    }

    /// Number of shapes the board is cut into.
    pub fn shape_count(&self) -> usize {
        *self as usize * 3 + 6
    }
}

/// Algorithm used to decide whether the puzzle is complete.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    FromRepr,
    clap::ValueEnum,
)]
#[repr(i32)]
pub enum CheckAlgorithm {
    /// Compare each shape position against its target.
    #[default]
    PositionCheck,
    /// Probe every square of the board and count the triangles covering each
    /// probe point.
    RaycastCheck,
}

impl fmt::Display for CheckAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CheckAlgorithm::PositionCheck => write!(f, "position-check"),
            CheckAlgorithm::RaycastCheck => write!(f, "raycast-check"),
        }
    }
}

/// Errors raised when validating board parameters.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The board side is zero or larger than [`MAX_SIZE`].
    SizeOutOfRange(usize),
    /// The shape count is zero or exceeds the number of triangles.
    ShapeCountOutOfRange(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::SizeOutOfRange(size) => {
                write!(f, "board size {size} is not between 1 and {MAX_SIZE}")
            }
            ConfigError::ShapeCountOutOfRange(count) => {
                write!(f, "shape count {count} exceeds the number of triangles")
            }
        }
    }
}

impl Error for ConfigError {}

/// Validated board parameters and the layout constants derived from them.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct BoardConfig {
    /// Difficulty preset the parameters come from, if any.
    pub difficulty: Option<Difficulty>,

    /// Board side, in squares.
    pub size: usize,

    /// Number of shapes the board is cut into.
    pub shape_count: usize,

    /// Completion check to run.
    pub algorithm: CheckAlgorithm,

    /// Center of the bottom-left square. The board is centered on the plane
    /// origin.
    pub origin: Vec2,

    /// Position of the first shape tray slot, below the board.
    pub shapes_origin: Vec2,

    /// Dropped shapes snap to the grid only above this height.
    pub min_snap_y: f32,
}

impl BoardConfig {
    /// Create a [`BoardConfig`] object from explicit parameters.
    pub fn new(
        size: usize,
        shape_count: usize,
        algorithm: CheckAlgorithm,
    ) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_SIZE {
            return Err(ConfigError::SizeOutOfRange(size));
        }
        if shape_count == 0 || shape_count > 4 * size * size {
            return Err(ConfigError::ShapeCountOutOfRange(shape_count));
        }

        Ok(Self::build(None, size, shape_count, algorithm))
    }

    /// Create a [`BoardConfig`] object from a difficulty preset.
    pub fn from_difficulty(difficulty: Difficulty, algorithm: CheckAlgorithm) -> Self {
        Self::build(
            Some(difficulty),
            difficulty.size(),
            difficulty.shape_count(),
            algorithm,
        )
    }

    fn build(
        difficulty: Option<Difficulty>,
        size: usize,
        shape_count: usize,
        algorithm: CheckAlgorithm,
    ) -> Self {
        let offset: f32 = (1.0 - size as f32) * 0.5;
        let origin: Vec2 = Vec2::new(offset, offset);
        Self {
            difficulty,
            size,
            shape_count,
            algorithm,
            origin,
            shapes_origin: Vec2::new(origin.x, origin.y - SHAPES_TRAY_GAP),
            min_snap_y: (4.0 - size as f32) / 2.0,
        }
    }

    /// Total number of triangles on the board.
    pub fn num_triangles(&self) -> usize {
        4 * self.size * self.size
    }
}
