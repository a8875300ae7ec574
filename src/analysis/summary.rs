//! Per-level statistics used for diagnostics and batch reports

use std::fmt;

use crate::analysis::connectivity::open_components;
use crate::spatial::grid::{Cell, Grid};

/// Cell counts and connectivity of a generated level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSummary {
    /// Grid dimensions (rows, cols)
    pub dimensions: (usize, usize),
    /// Number of rooms recorded in the room index
    pub rooms: usize,
    /// Walkable cells, markers included
    pub open_cells: usize,
    /// Wall cells
    pub wall_cells: usize,
    /// Cells open in the room layer
    pub room_cells: usize,
    /// Cells open in the corridor layer but not in the room layer
    pub corridor_only_cells: usize,
    /// Number of 4-connected open components
    pub components: usize,
}

impl LevelSummary {
    /// Gather statistics for a grid
    pub fn from_grid(grid: &Grid) -> Self {
        let room_cells = grid.room_mask.iter().filter(|&&open| open).count();
        let corridor_only_cells = grid
            .room_mask
            .iter()
            .zip(grid.corridor_mask.iter())
            .filter(|&(&room, &corridor)| corridor && !room)
            .count();
        let wall_cells = grid.count(Cell::Wall);

        Self {
            dimensions: grid.dimensions(),
            rooms: grid.room_index.len(),
            open_cells: grid.len() - wall_cells,
            wall_cells,
            room_cells,
            corridor_only_cells,
            components: open_components(grid),
        }
    }

    /// Fraction of the grid that is walkable
    pub fn open_ratio(&self) -> f64 {
        let total = self.open_cells + self.wall_cells;
        if total == 0 {
            return 0.0;
        }
        self.open_cells as f64 / total as f64
    }
}

impl fmt::Display for LevelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} grid, {} rooms, {} open cells ({:.1}%), {} corridor cells, {} component(s)",
            self.dimensions.1,
            self.dimensions.0,
            self.rooms,
            self.open_cells,
            self.open_ratio() * 100.0,
            self.corridor_only_cells,
            self.components
        )
    }
}
