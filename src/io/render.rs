//! Text rendering of levels and windows with an optional route overlay

use std::collections::HashSet;

use ndarray::ArrayView2;

use crate::spatial::grid::{Cell, Grid, Position};

/// Character drawn on free cells along the route
pub const ROUTE_SYMBOL: char = '.';

/// Render a block of cells, one line per row
///
/// `origin` is the grid position of the block's top-left cell, used to place
/// route cells given in grid coordinates. Markers and walls are never
/// overdrawn by the route.
pub fn render_cells(cells: ArrayView2<'_, Cell>, origin: Position, route: &[Position]) -> String {
    let on_route: HashSet<Position> = route.iter().copied().collect();
    let mut out = String::with_capacity(cells.len() + cells.nrows());

    for (row, line) in cells.rows().into_iter().enumerate() {
        for (col, &cell) in line.iter().enumerate() {
            let position = [origin[0] + row, origin[1] + col];
            if cell == Cell::Free && on_route.contains(&position) {
                out.push(ROUTE_SYMBOL);
            } else {
                out.push(cell.symbol());
            }
        }
        out.push('\n');
    }

    out
}

/// Render a whole level with a route drawn over its free cells
pub fn render_level(grid: &Grid, route: &[Position]) -> String {
    render_cells(grid.cells.view(), [0, 0], route)
}
