//! Tile grid with room and corridor layers and start/goal bookkeeping
//!
//! Cells are addressed as `[row, col]`. The grid is created fully walled,
//! carved once by the layout generator, and afterwards only the start and
//! goal markers move.

use std::fmt;

use ndarray::Array2;

use crate::io::error::{DungeonError, Result};

/// Grid coordinate as `[row, col]`
pub type Position = [usize; 2];

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Walkable floor
    Free,
    /// Solid rock
    #[default]
    Wall,
    /// Walkable floor holding the start marker
    Start,
    /// Walkable floor holding the goal marker
    Goal,
}

impl Cell {
    /// Whether the cell can be walked on
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Character used by the text rendering
    pub const fn symbol(self) -> char {
        match self {
            Self::Free => ' ',
            Self::Wall => 'W',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }
}

/// 4-connected movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards the last row
    Down,
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
}

impl Direction {
    /// All directions in the fixed up, down, left, right order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Step one cell in this direction, returning `None` when leaving the grid
    pub const fn step(self, position: Position, dimensions: (usize, usize)) -> Option<Position> {
        let [row, col] = position;
        match self {
            Self::Up if row > 0 => Some([row - 1, col]),
            Self::Down if row + 1 < dimensions.0 => Some([row + 1, col]),
            Self::Left if col > 0 => Some([row, col - 1]),
            Self::Right if col + 1 < dimensions.1 => Some([row, col + 1]),
            _ => None,
        }
    }
}

/// Dungeon level: cell tags plus the layers it was built from
#[derive(Debug, Clone)]
pub struct Grid {
    /// Cell tags indexed by `[row, col]`
    pub cells: Array2<Cell>,

    /// Open cells contributed by rooms
    pub room_mask: Array2<bool>,

    /// Open cells contributed by corridors
    pub corridor_mask: Array2<bool>,

    /// Room centers in generation order (row-major over the room matrix)
    pub room_index: Vec<Position>,

    start: Option<Position>,
    goal: Option<Position>,
}

impl Grid {
    /// Create a fully walled grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::Wall),
            room_mask: Array2::from_elem((rows, cols), false),
            corridor_mask: Array2::from_elem((rows, cols), false),
            room_index: Vec::new(),
            start: None,
            goal: None,
        }
    }

    /// Build a grid from room and corridor layers
    ///
    /// A cell is a wall only when it is closed in both layers.
    pub fn from_layers(
        room_mask: Array2<bool>,
        corridor_mask: Array2<bool>,
        room_index: Vec<Position>,
    ) -> Self {
        let mut cells = Array2::from_elem(room_mask.dim(), Cell::Wall);
        ndarray::Zip::from(&mut cells)
            .and(&room_mask)
            .and(&corridor_mask)
            .for_each(|cell, &room, &corridor| {
                if room || corridor {
                    *cell = Cell::Free;
                }
            });

        Self {
            cells,
            room_mask,
            corridor_mask,
            room_index,
            start: None,
            goal: None,
        }
    }

    /// Build a grid directly from an open mask (`true` = free)
    ///
    /// The mask is recorded as the room layer; the corridor layer stays closed.
    pub fn from_open_mask(open: Array2<bool>) -> Self {
        let corridor_mask = Array2::from_elem(open.dim(), false);
        Self::from_layers(open, corridor_mask, Vec::new())
    }

    /// Number of rows (height)
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns (width)
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at a position, or `None` outside the grid
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Whether a position is inside the grid and walkable
    pub fn is_open(&self, position: Position) -> bool {
        self.get(position).is_some_and(Cell::is_open)
    }

    /// Current start marker
    pub const fn start(&self) -> Option<Position> {
        self.start
    }

    /// Current goal marker
    pub const fn goal(&self) -> Option<Position> {
        self.goal
    }

    /// Count cells carrying the given tag
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// All free cells in row-major order
    pub fn free_cells(&self) -> Vec<Position> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| **cell == Cell::Free)
            .map(|((row, col), _)| [row, col])
            .collect()
    }

    /// Tag a cell as the start, clearing any previous start
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside the grid and `OccupiedCell` when the
    /// target is a wall or currently holds the goal.
    pub fn set_start(&mut self, position: Position) -> Result<()> {
        self.check_placeable(position, Cell::Goal)?;
        if let Some(previous) = self.start.take() {
            self.write(previous, Cell::Free);
        }
        self.write(position, Cell::Start);
        self.start = Some(position);
        Ok(())
    }

    /// Tag a cell as the goal, clearing any previous goal
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside the grid and `OccupiedCell` when the
    /// target is a wall or currently holds the start.
    pub fn set_goal(&mut self, position: Position) -> Result<()> {
        self.check_placeable(position, Cell::Start)?;
        if let Some(previous) = self.goal.take() {
            self.write(previous, Cell::Free);
        }
        self.write(position, Cell::Goal);
        self.goal = Some(position);
        Ok(())
    }

    /// Remove the start marker if present
    pub fn clear_start(&mut self) {
        if let Some(previous) = self.start.take() {
            self.write(previous, Cell::Free);
        }
    }

    /// Remove the goal marker if present
    pub fn clear_goal(&mut self) {
        if let Some(previous) = self.goal.take() {
            self.write(previous, Cell::Free);
        }
    }

    /// Ensure a position exists in the grid
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn check_bounds(&self, position: Position) -> Result<Cell> {
        self.get(position).ok_or(DungeonError::OutOfBounds {
            position,
            dimensions: self.dimensions(),
        })
    }

    fn check_placeable(&self, position: Position, other_marker: Cell) -> Result<()> {
        let cell = self.check_bounds(position)?;
        if cell == Cell::Wall || cell == other_marker {
            return Err(DungeonError::OccupiedCell { position, cell });
        }
        Ok(())
    }

    fn write(&mut self, position: Position, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(position) {
            *slot = cell;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
