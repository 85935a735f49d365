/*
generator.rs

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

//! Build random puzzles over the triangle grid.
//!
//! The [`coords`] module addresses the triangles of the board and computes
//! their adjacency. It is pure coordinate math and holds no state.
//!
//! The [`partition`] module defines the [`partition::Partition`] type, the
//! assignment of every triangle to exactly one shape. A partition is either
//! grown at random or rebuilt from a save file; the
//! [`partition::Partition::from_members`] constructor validates untrusted
//! memberships.
//!
//! The [`grow`] module generates a fresh random partition. Create a
//! [`grow::Growth`] object and use its [`grow::Growth::generate`] method with
//! a random source. Generation either completes or fails fast with
//! [`grow::GrowthError::Stuck`]; it is never retried internally.

pub mod coords;
pub mod grow;
pub mod partition;
