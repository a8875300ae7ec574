//! Procedural room-and-corridor dungeon levels with exact shortest paths
//!
//! The grid is partitioned into a matrix of rooms joined by stitched corridor
//! stubs, then solved with a breadth-first search expressed as repeated
//! neighborhood sweeps over the whole grid.

#![deny(unsafe_code)]

/// Layout generation and path solving
pub mod algorithm;
/// Connectivity checks and level statistics
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Morphological neighborhood filters
pub mod math;
/// Grid data structures, sampling and windows
pub mod spatial;

pub use io::error::{DungeonError, Result};
