//! Room-and-corridor level generation
//!
//! The grid is split into an even matrix of partition cells. Each cell gets a
//! randomly sized rectangular room around its center and one straight corridor
//! stub per side that faces a neighbor. Stubs are then stitched across the
//! partition boundaries, widened, and merged with the rooms into the final
//! grid. All random draws come from a caller-supplied generator.

use std::ops::Range;

use log::{debug, info};
use ndarray::{Array2, s};
use rand::Rng;

use crate::algorithm::partition::{Partition, PartitionCell, Sides};
use crate::algorithm::stitching::{stitch_columns, stitch_rows};
use crate::io::configuration::{
    DEFAULT_CORRIDOR_WIDTH, DEFAULT_MAX_ROOM_RATIO, DEFAULT_MIN_ROOM_RATIO, DEFAULT_ROOM_COLUMNS,
    DEFAULT_ROOM_ROWS, MAX_GRID_DIMENSION, MIN_ROOM_HALF_SIZE,
};
use crate::io::error::{Result, invalid_configuration};
use crate::math::morphology::grow;
use crate::spatial::grid::{Cell, Grid, Position};

/// Parameters controlling room layout and corridor shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Number of room columns
    pub room_columns: usize,
    /// Number of room rows
    pub room_rows: usize,
    /// Corridor width in cells
    pub corridor_width: usize,
    /// Smallest room size as a fraction of its partition span
    pub min_room_ratio: f64,
    /// Largest room size (exclusive) as a fraction of its partition span
    pub max_room_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            room_columns: DEFAULT_ROOM_COLUMNS,
            room_rows: DEFAULT_ROOM_ROWS,
            corridor_width: DEFAULT_CORRIDOR_WIDTH,
            min_room_ratio: DEFAULT_MIN_ROOM_RATIO,
            max_room_ratio: DEFAULT_MAX_ROOM_RATIO,
        }
    }
}

impl LayoutConfig {
    /// Range room sizes are drawn from for a partition span
    pub fn size_range(&self, span: usize) -> Range<usize> {
        let span = span as f64;
        (span * self.min_room_ratio) as usize..(span * self.max_room_ratio) as usize
    }

    /// Check the parameters against a `rows x cols` grid and build its partition
    ///
    /// Every span must leave a non-empty size range whose smallest room still
    /// has room for an exit that avoids the corners.
    ///
    /// The check covers the whole range rather than the room actually drawn,
    /// so a borderline span is refused even when some draws from it would fit.
    /// A span needs `size_range(span).start >= 2 * MIN_ROOM_HALF_SIZE`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` describing the first violated constraint
    pub fn validate(&self, rows: usize, cols: usize) -> Result<Partition> {
        if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
            return Err(invalid_configuration(
                "dimensions",
                &format!("{cols}x{rows}"),
                &format!("grid dimensions may not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.corridor_width == 0 {
            return Err(invalid_configuration(
                "corridor_width",
                &self.corridor_width,
                &"corridors must be at least one cell wide",
            ));
        }
        let ratios_ordered = self.min_room_ratio > 0.0
            && self.min_room_ratio < self.max_room_ratio
            && self.max_room_ratio < 1.0;
        if !ratios_ordered {
            return Err(invalid_configuration(
                "room_ratio",
                &format!("[{}, {})", self.min_room_ratio, self.max_room_ratio),
                &"ratios must satisfy 0 < min < max < 1",
            ));
        }

        let partition = Partition::new(rows, cols, self.room_rows, self.room_columns)?;

        for span in partition.row_spans() {
            self.check_span("room_rows", self.room_rows, span)?;
        }
        for span in partition.col_spans() {
            self.check_span("room_columns", self.room_columns, span)?;
        }

        Ok(partition)
    }

    fn check_span(&self, parameter: &'static str, count: usize, span: usize) -> Result<()> {
        let range = self.size_range(span);
        if range.is_empty() {
            return Err(invalid_configuration(
                parameter,
                &count,
                &format!("partition span {span} leaves no room sizes to draw from"),
            ));
        }
        if range.start / 2 < MIN_ROOM_HALF_SIZE {
            return Err(invalid_configuration(
                parameter,
                &count,
                &format!(
                    "partition span {span} allows rooms of size {} which leave no exit range",
                    range.start
                ),
            ));
        }
        Ok(())
    }
}

/// Rectangular room carved around a partition center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// Center of the owning partition cell
    pub center: Position,
    /// Half of the drawn height and width
    pub half_size: [usize; 2],
}

impl Room {
    /// Rows covered by the room
    pub const fn rows(&self) -> Range<usize> {
        self.center[0] - self.half_size[0]..self.center[0] + self.half_size[0]
    }

    /// Columns covered by the room
    pub const fn cols(&self) -> Range<usize> {
        self.center[1] - self.half_size[1]..self.center[1] + self.half_size[1]
    }

    /// Rows an exit on the left or right side may use
    pub const fn exit_rows(&self) -> Range<usize> {
        let rows = self.rows();
        rows.start + 1..rows.end.saturating_sub(1)
    }

    /// Columns an exit on the top or bottom side may use
    pub const fn exit_cols(&self) -> Range<usize> {
        let cols = self.cols();
        cols.start + 1..cols.end.saturating_sub(1)
    }
}

/// Exit offsets chosen for each connecting side of a room
///
/// Up and down hold a column, left and right hold a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exits {
    /// Column of the stub leaving through the top
    pub up: Option<usize>,
    /// Column of the stub leaving through the bottom
    pub down: Option<usize>,
    /// Row of the stub leaving through the left
    pub left: Option<usize>,
    /// Row of the stub leaving through the right
    pub right: Option<usize>,
}

/// Mark a rectangle open in a mask
pub fn carve(mask: &mut Array2<bool>, rows: Range<usize>, cols: Range<usize>) {
    mask.slice_mut(s![rows, cols]).fill(true);
}

fn draw<R: Rng + ?Sized>(range: Range<usize>, parameter: &'static str, rng: &mut R) -> Result<usize> {
    if range.is_empty() {
        return Err(invalid_configuration(
            parameter,
            &format!("{}..{}", range.start, range.end),
            &"sampling range is empty",
        ));
    }
    Ok(rng.random_range(range))
}

/// Draw a room size for a partition cell
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the cell's size range is empty
pub fn draw_room<R: Rng + ?Sized>(
    cell: &PartitionCell,
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<Room> {
    let width = draw(config.size_range(cell.span[1]), "room_columns", rng)?;
    let height = draw(config.size_range(cell.span[0]), "room_rows", rng)?;
    Ok(Room {
        center: cell.center,
        half_size: [height / 2, width / 2],
    })
}

/// Draw one exit offset per connecting side
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the room is too small to host an exit
pub fn draw_exits<R: Rng + ?Sized>(room: &Room, sides: Sides, rng: &mut R) -> Result<Exits> {
    let mut exits = Exits::default();
    if sides.up {
        exits.up = Some(draw(room.exit_cols(), "room_columns", rng)?);
    }
    if sides.down {
        exits.down = Some(draw(room.exit_cols(), "room_columns", rng)?);
    }
    if sides.left {
        exits.left = Some(draw(room.exit_rows(), "room_rows", rng)?);
    }
    if sides.right {
        exits.right = Some(draw(room.exit_rows(), "room_rows", rng)?);
    }
    Ok(exits)
}

/// Carve straight stubs from the room center to each connecting boundary
pub fn carve_stubs(corridors: &mut Array2<bool>, cell: &PartitionCell, exits: &Exits) {
    let [center_row, center_col] = cell.center;
    if let Some(col) = exits.up {
        carve(corridors, cell.origin[0]..center_row, col..col + 1);
    }
    if let Some(col) = exits.down {
        carve(corridors, center_row..cell.row_end(), col..col + 1);
    }
    if let Some(row) = exits.left {
        carve(corridors, row..row + 1, cell.origin[1]..center_col);
    }
    if let Some(row) = exits.right {
        carve(corridors, row..row + 1, center_col..cell.col_end());
    }
}

/// Generate a `rows x cols` level
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the parameters cannot produce a
/// connected layout on a grid of this size. Validation runs before any
/// random draw.
pub fn generate_layout<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<Grid> {
    let partition = config.validate(rows, cols)?;
    debug!(
        "partition boundaries: rows {:?}, cols {:?}",
        partition.row_bounds(),
        partition.col_bounds()
    );

    let mut rooms = Array2::from_elem((rows, cols), false);
    let mut corridors = Array2::from_elem((rows, cols), false);
    let mut room_index = Vec::with_capacity(config.room_rows * config.room_columns);

    for cell in partition.cells() {
        let room = draw_room(&cell, config, rng)?;
        carve(&mut rooms, room.rows(), room.cols());

        let exits = draw_exits(&room, cell.sides, rng)?;
        carve_stubs(&mut corridors, &cell, &exits);

        room_index.push(cell.center);
    }

    // Both passes need every stub in place
    let vertical = stitch_columns(&mut corridors, &partition)?;
    let horizontal = stitch_rows(&mut corridors, &partition)?;

    let corridors = grow(&corridors, config.corridor_width);
    let grid = Grid::from_layers(rooms, corridors, room_index);

    info!(
        "generated {}x{} level: {} rooms, {} stitched segments, {} open cells",
        cols,
        rows,
        grid.room_index.len(),
        vertical + horizontal,
        grid.len() - grid.count(Cell::Wall)
    );

    Ok(grid)
}
