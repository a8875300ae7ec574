//! Local sub-window extraction around a grid position
//!
//! A window that would run off one edge of the grid is shifted towards the
//! other edge so it keeps its requested size, and only shrinks when the grid
//! itself is smaller than the window.

use ndarray::{ArrayView2, s};

use crate::io::error::{Result, invalid_configuration};
use crate::spatial::grid::{Cell, Grid, Position};

/// Cells taken on each side of the window center
///
/// `left + right` is the window width and `up + down` its height. The center
/// cell is counted in `right` and `down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMargins {
    /// Columns left of the center
    pub left: usize,
    /// Columns from the center rightwards, center included
    pub right: usize,
    /// Rows above the center
    pub up: usize,
    /// Rows from the center downwards, center included
    pub down: usize,
}

impl WindowMargins {
    /// Window dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.up + self.down, self.left + self.right)
    }
}

// Returns (before, after) for one axis
const fn clamp_axis(center: usize, extent: usize, size: usize) -> (usize, usize) {
    let mut before = size / 2;
    let mut after = size - before;

    if center < before {
        before = center;
        after = size - before;
    } else if center + after > extent {
        after = extent - center;
        before = size - after;
    }

    // Grid narrower than the window on this axis
    if before > center {
        before = center;
    }
    if after > extent - center {
        after = extent - center;
    }

    (before, after)
}

/// Extract a `size x size` window centered on a position
///
/// # Errors
///
/// Returns `OutOfBounds` if the center lies outside the grid and
/// `InvalidConfiguration` for a zero-sized window.
pub fn extract_window(
    grid: &Grid,
    center: Position,
    size: usize,
) -> Result<(ArrayView2<'_, Cell>, WindowMargins)> {
    grid.check_bounds(center)?;
    if size == 0 {
        return Err(invalid_configuration(
            "window_size",
            &size,
            &"window must be at least one cell wide",
        ));
    }

    let [row, col] = center;
    let (up, down) = clamp_axis(row, grid.rows(), size);
    let (left, right) = clamp_axis(col, grid.cols(), size);

    let view = grid
        .cells
        .slice(s![row - up..row + down, col - left..col + right]);

    Ok((
        view,
        WindowMargins {
            left,
            right,
            up,
            down,
        },
    ))
}
