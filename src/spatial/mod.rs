//! Spatial data structures and grid access
//!
//! This module contains the level grid and the utilities that read from it:
//! - Cell tags, directions and the grid itself
//! - Free-cell sampling and random marker placement
//! - Local window extraction with edge clamping

/// Grid cells, layers and start/goal bookkeeping
pub mod grid;
/// Random free-cell sampling
pub mod sampling;
/// Clamped sub-window extraction
pub mod window;

pub use grid::{Cell, Direction, Grid, Position};
