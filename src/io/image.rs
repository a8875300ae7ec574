//! PNG export of levels with their route

use std::collections::HashSet;
use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::error::{DungeonError, Result, invalid_configuration};
use crate::spatial::grid::{Cell, Grid, Position};

/// Color of wall cells
pub const WALL_COLOR: [u8; 4] = [40, 40, 48, 255];
/// Color of free cells
pub const FREE_COLOR: [u8; 4] = [224, 220, 210, 255];
/// Color of free cells on the route
pub const ROUTE_COLOR: [u8; 4] = [80, 200, 220, 255];
/// Color of the start marker
pub const START_COLOR: [u8; 4] = [40, 90, 230, 255];
/// Color of the goal marker
pub const GOAL_COLOR: [u8; 4] = [220, 50, 40, 255];

/// Color used for a cell, given whether it lies on the route
pub const fn cell_color(cell: Cell, on_route: bool) -> [u8; 4] {
    match cell {
        Cell::Wall => WALL_COLOR,
        Cell::Start => START_COLOR,
        Cell::Goal => GOAL_COLOR,
        Cell::Free if on_route => ROUTE_COLOR,
        Cell::Free => FREE_COLOR,
    }
}

/// Render the level as an RGBA image with `scale x scale` pixels per cell
///
/// # Errors
///
/// Returns `InvalidConfiguration` for a zero scale or an image too large to address
pub fn render_level_image(
    grid: &Grid,
    route: &[Position],
    scale: u32,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    if scale == 0 {
        return Err(invalid_configuration(
            "scale",
            &scale,
            &"each cell needs at least one pixel",
        ));
    }

    let width = u32::try_from(grid.cols())
        .ok()
        .and_then(|cols| cols.checked_mul(scale));
    let height = u32::try_from(grid.rows())
        .ok()
        .and_then(|rows| rows.checked_mul(scale));
    let (Some(width), Some(height)) = (width, height) else {
        return Err(invalid_configuration(
            "scale",
            &scale,
            &"rendered image would exceed u32 pixel dimensions",
        ));
    };

    let on_route: HashSet<Position> = route.iter().copied().collect();

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let position = [(y / scale) as usize, (x / scale) as usize];
        let cell = grid.get(position).unwrap_or(Cell::Wall);
        Rgba(cell_color(cell, on_route.contains(&position)))
    }))
}

/// Export the level as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The scale is zero or the image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_level_png(grid: &Grid, route: &[Position], scale: u32, output_path: &Path) -> Result<()> {
    let img = render_level_image(grid, route, scale)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| DungeonError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| DungeonError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
