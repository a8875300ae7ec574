//! Even partitioning of the grid into a matrix of room cells
//!
//! Boundaries are spread evenly over `[0, extent - 1]` and rounded down to an
//! even coordinate, which keeps room centers and corridor stubs on the same
//! parity lattice.

use std::ops::Range;

use crate::io::error::{Result, invalid_configuration};
use crate::spatial::grid::Position;

/// Split `[0, extent - 1]` into `parts` nearly equal pieces
///
/// Returns `parts + 1` boundaries, each rounded down to an even integer.
/// `extent` and `parts` must both be at least one.
pub fn even_boundaries(extent: usize, parts: usize) -> Vec<usize> {
    let last = extent.saturating_sub(1);
    let parts = parts.max(1);
    (0..=parts).map(|i| (i * last / parts) & !1).collect()
}

/// Sides of a room that face a neighboring room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    /// Neighbor in the row above
    pub up: bool,
    /// Neighbor in the row below
    pub down: bool,
    /// Neighbor in the column to the left
    pub left: bool,
    /// Neighbor in the column to the right
    pub right: bool,
}

impl Sides {
    /// Number of connecting sides
    pub const fn count(&self) -> usize {
        self.up as usize + self.down as usize + self.left as usize + self.right as usize
    }
}

/// Which sides of the room at `(row, col)` face a neighbor in a
/// `room_rows x room_cols` matrix
pub const fn connecting_sides(
    row: usize,
    col: usize,
    room_rows: usize,
    room_cols: usize,
) -> Sides {
    Sides {
        up: row > 0,
        down: row + 1 < room_rows,
        left: col > 0,
        right: col + 1 < room_cols,
    }
}

/// One cell of the room matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionCell {
    /// Row index within the room matrix
    pub row: usize,
    /// Column index within the room matrix
    pub col: usize,
    /// Top-left boundary corner as `[row, col]`
    pub origin: Position,
    /// Distance to the next boundary on each axis as `[rows, cols]`
    pub span: [usize; 2],
    /// Floor midpoint between the boundaries
    pub center: Position,
    /// Sides that face a neighboring cell
    pub sides: Sides,
}

impl PartitionCell {
    /// Boundary coordinate past the last row of this cell
    pub const fn row_end(&self) -> usize {
        self.origin[0] + self.span[0]
    }

    /// Boundary coordinate past the last column of this cell
    pub const fn col_end(&self) -> usize {
        self.origin[1] + self.span[1]
    }
}

/// Boundaries of the room matrix on both axes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    row_bounds: Vec<usize>,
    col_bounds: Vec<usize>,
}

impl Partition {
    /// Partition a `rows x cols` grid into `room_rows x room_cols` cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either count is zero or the grid has
    /// no cells
    pub fn new(rows: usize, cols: usize, room_rows: usize, room_cols: usize) -> Result<Self> {
        if room_rows == 0 {
            return Err(invalid_configuration(
                "room_rows",
                &room_rows,
                &"at least one row of rooms is required",
            ));
        }
        if room_cols == 0 {
            return Err(invalid_configuration(
                "room_columns",
                &room_cols,
                &"at least one column of rooms is required",
            ));
        }
        if rows == 0 || cols == 0 {
            return Err(invalid_configuration(
                "dimensions",
                &format!("{cols}x{rows}"),
                &"grid must contain at least one cell",
            ));
        }

        Ok(Self {
            row_bounds: even_boundaries(rows, room_rows),
            col_bounds: even_boundaries(cols, room_cols),
        })
    }

    /// Row boundaries, first and last included
    pub fn row_bounds(&self) -> &[usize] {
        &self.row_bounds
    }

    /// Column boundaries, first and last included
    pub fn col_bounds(&self) -> &[usize] {
        &self.col_bounds
    }

    /// Number of room rows
    pub fn room_rows(&self) -> usize {
        self.row_bounds.len().saturating_sub(1)
    }

    /// Number of room columns
    pub fn room_cols(&self) -> usize {
        self.col_bounds.len().saturating_sub(1)
    }

    /// Row boundaries shared by two room rows
    pub fn internal_row_bounds(&self) -> &[usize] {
        interior(&self.row_bounds)
    }

    /// Column boundaries shared by two room columns
    pub fn internal_col_bounds(&self) -> &[usize] {
        interior(&self.col_bounds)
    }

    /// Row ranges covered by each room row
    pub fn row_bands(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        bands(&self.row_bounds)
    }

    /// Column ranges covered by each room column
    pub fn col_bands(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        bands(&self.col_bounds)
    }

    /// Spans of all room rows
    pub fn row_spans(&self) -> impl Iterator<Item = usize> + '_ {
        self.row_bands().map(|band| band.len())
    }

    /// Spans of all room columns
    pub fn col_spans(&self) -> impl Iterator<Item = usize> + '_ {
        self.col_bands().map(|band| band.len())
    }

    /// All cells of the room matrix in row-major order
    pub fn cells(&self) -> impl Iterator<Item = PartitionCell> + '_ {
        let room_rows = self.room_rows();
        let room_cols = self.room_cols();
        self.row_bands().enumerate().flat_map(move |(row, rows)| {
            self.col_bands()
                .enumerate()
                .map(move |(col, cols)| PartitionCell {
                    row,
                    col,
                    origin: [rows.start, cols.start],
                    span: [rows.len(), cols.len()],
                    center: [
                        (rows.start + rows.end) / 2,
                        (cols.start + cols.end) / 2,
                    ],
                    sides: connecting_sides(row, col, room_rows, room_cols),
                })
        })
    }
}

fn interior(bounds: &[usize]) -> &[usize] {
    bounds
        .get(1..bounds.len().saturating_sub(1))
        .unwrap_or_default()
}

fn bands(bounds: &[usize]) -> impl Iterator<Item = Range<usize>> + '_ {
    bounds.windows(2).filter_map(|pair| match pair {
        [start, end] => Some(*start..*end),
        _ => None,
    })
}
