/*
puzzle.rs

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

//! Save and restore puzzles as text files.
//!
//! The format is line oriented: the board size, the number of shapes, and
//! then each shape as a `shape` marker line followed by one `col,row,orient`
//! line per member triangle:
//!
//! ```text
//! 4
//! 6
//! shape
//! 2,1,0
//! 2,1,1
//! ...
//! ```
//!
//! The decoder tolerates a missing marker before the first shape, and
//! validates that the decoded shapes exactly cover the board.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use log::debug;

use crate::config::MAX_SIZE;
use crate::generator::coords::Coord;
use crate::generator::partition::{Partition, PartitionError};

/// Line introducing each shape in a puzzle file.
const SHAPE_MARKER: &str = "shape";

/// Errors raised when reading a puzzle file.
#[derive(Debug)]
pub enum PuzzleFileError {
    /// The file cannot be read or written.
    Io(io::Error),
    /// A line cannot be parsed.
    Parse { line: usize, content: String },
    /// The number of decoded shapes does not match the declared count.
    ShapeCount { expected: usize, actual: usize },
    /// The decoded shapes do not exactly cover the board.
    Invalid(PartitionError),
}

impl fmt::Display for PuzzleFileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleFileError::Io(error) => write!(f, "Cannot access the puzzle file: {error}"),
            PuzzleFileError::Parse { line, content } => {
                write!(f, "Cannot parse line {line} of the puzzle file: {content:?}")
            }
            PuzzleFileError::ShapeCount { expected, actual } => {
                write!(f, "The puzzle file declares {expected} shapes but holds {actual}")
            }
            PuzzleFileError::Invalid(error) => {
                write!(f, "The puzzle file is not a valid board cover: {error}")
            }
        }
    }
}

impl Error for PuzzleFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PuzzleFileError::Io(error) => Some(error),
            PuzzleFileError::Invalid(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for PuzzleFileError {
    fn from(error: io::Error) -> Self {
        PuzzleFileError::Io(error)
    }
}

impl From<PartitionError> for PuzzleFileError {
    fn from(error: PartitionError) -> Self {
        PuzzleFileError::Invalid(error)
    }
}

/// Write a partition to the given writer in puzzle file format.
pub fn encode(writer: &mut impl Write, partition: &Partition) -> Result<(), PuzzleFileError> {
    writeln!(writer, "{}", partition.size())?;
    writeln!(writer, "{}", partition.shape_count())?;
    for members in partition.members() {
        writeln!(writer, "{SHAPE_MARKER}")?;
        for coord in members {
            writeln!(writer, "{coord}")?;
        }
    }
    Ok(())
}

/// Read a partition from the given reader in puzzle file format.
pub fn decode(reader: impl BufRead) -> Result<Partition, PuzzleFileError> {
    let mut lines = reader.lines().enumerate();

    // Header values must be positive and bounded, so that a corrupt file
    // cannot request absurd allocations.
    let mut header = |limit: usize| -> Result<usize, PuzzleFileError> {
        // Skip blank lines before the header values.
        for (number, line) in lines.by_ref() {
            let line: String = line?;
            let text: &str = line.trim();
            if text.is_empty() {
                continue;
            }
            return match text.parse::<usize>() {
                Ok(value) if (1..=limit).contains(&value) => Ok(value),
                _ => Err(PuzzleFileError::Parse {
                    line: number + 1,
                    content: line,
                }),
            };
        }
        Err(PuzzleFileError::Parse {
            line: 0,
            content: String::new(),
        })
    };

    let size: usize = header(MAX_SIZE)?;
    let shape_count: usize = header(4 * size * size)?;

    let mut shapes: Vec<Vec<Coord>> = Vec::with_capacity(shape_count);
    let mut current: Vec<Coord> = Vec::new();

    for (number, line) in lines {
        let line: String = line?;
        let text: &str = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == SHAPE_MARKER {
            // A marker before the first coordinate line is optional, and a
            // repeated marker starts no shape. Only a marker that closes a
            // non-empty shape flushes it.
            if !current.is_empty() {
                shapes.push(std::mem::take(&mut current));
            }
            continue;
        }
        match Coord::parse(text) {
            Some(coord) => current.push(coord),
            None => {
                return Err(PuzzleFileError::Parse {
                    line: number + 1,
                    content: line,
                });
            }
        }
    }
    if !current.is_empty() {
        shapes.push(current);
    }

    if shapes.len() != shape_count {
        return Err(PuzzleFileError::ShapeCount {
            expected: shape_count,
            actual: shapes.len(),
        });
    }

    Ok(Partition::from_members(size, shapes)?)
}

/// Object to save and restore a puzzle as a text file.
pub struct SaverPuzzle {
    /// Path to the puzzle file.
    save_file: PathBuf,
}

impl SaverPuzzle {
    /// Create a [`SaverPuzzle`] object for the given file path.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Puzzle file: {save_file:?}");
        SaverPuzzle { save_file }
    }

    /// Save the provided [`Partition`] object.
    pub fn save(&self, partition: &Partition) -> Result<(), PuzzleFileError> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);
        encode(&mut writer, partition)?;
        writer.flush()?;
        Ok(())
    }

    /// Retrieve the [`Partition`] object from the puzzle file.
    pub fn load(&self) -> Result<Partition, PuzzleFileError> {
        let file: File = File::open(&self.save_file)?;
        decode(BufReader::new(file))
    }
}
