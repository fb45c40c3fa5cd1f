//! # 8-Puzzle Search Library
//!
//! This library provides the board model for the sliding 8-puzzle (a 3x3 grid
//! with eight numbered tiles and one blank) and three interchangeable search
//! strategies over its state space: depth-first, breadth-first and greedy
//! best-first guided by a pluggable heuristic.
//!
//! It is used by three binaries:
//! - `human_player`: Interactive play from the command line.
//! - `greedy_demo`: Solves one random board with greedy search.
//! - `benchmark`: Runs every algorithm over many random boards and prints
//!   timing and step counts as CSV.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), tiles (`Tile`), legal moves,
//!   goal test and heuristic values.
//! - `tree`: A lazily expanded tree of board snapshots (`StateTree`).
//! - `solver`: The search algorithms and their reports.
//! - `heuristics`: Selection of the heuristic used by greedy search.
//! - `harness`: Benchmark records and their CSV format.
//! - `utils`: Parsing boards and tile labels from strings.
//! - `error`: The crate's error type.

pub mod engine;
pub mod error;
pub mod harness;
pub mod heuristics;
pub mod solver;
pub mod tree;
pub mod utils;
