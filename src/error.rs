//! Error types for the 8-puzzle crate.

use crate::engine::Tile;
use thiserror::Error;

/// Errors returned by board construction, parsing and moves.
///
/// Search exhaustion is not an error: the solvers report it as a missing
/// solution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PuzzleError {
    #[error("invalid move: tile {tile:?} is not orthogonally adjacent to the blank")]
    InvalidMove { tile: Tile },

    #[error("invalid tile label '{label}' (expected a single digit from 1 to 8)")]
    InvalidTileLabel { label: String },

    #[error("invalid number of rows: expected {expected}, found {found}")]
    InvalidRowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells (expected {expected})")]
    InvalidRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized character '{character}' in row {row} col {col}")]
    UnrecognizedCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("tile {tile:?} appears more than once")]
    DuplicateTile { tile: Tile },
}
