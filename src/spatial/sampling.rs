//! Uniform sampling of free cells and random marker placement

use rand::Rng;
use rand::seq::index;

use crate::io::error::{DungeonError, Result};
use crate::spatial::grid::{Grid, Position};

/// Draw `count` distinct free cells uniformly at random
///
/// Cells already tagged as start or goal are not free and are never drawn.
///
/// # Errors
///
/// Returns `InsufficientFreeSpace` if `count` exceeds the number of free cells
pub fn sample_free_cells<R: Rng + ?Sized>(
    grid: &Grid,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Position>> {
    let free = grid.free_cells();
    if count > free.len() {
        return Err(DungeonError::InsufficientFreeSpace {
            requested: count,
            available: free.len(),
        });
    }

    Ok(index::sample(rng, free.len(), count)
        .into_iter()
        .filter_map(|i| free.get(i).copied())
        .collect())
}

/// Move the start marker to a random free cell
///
/// The previous start is cleared first, so its cell is a candidate again.
///
/// # Errors
///
/// Returns `InsufficientFreeSpace` if no free cell remains
pub fn place_start_random<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<Position> {
    grid.clear_start();
    let position = draw_one(grid, rng)?;
    grid.set_start(position)?;
    Ok(position)
}

/// Move the goal marker to a random free cell
///
/// The previous goal is cleared first, so its cell is a candidate again.
///
/// # Errors
///
/// Returns `InsufficientFreeSpace` if no free cell remains
pub fn place_goal_random<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<Position> {
    grid.clear_goal();
    let position = draw_one(grid, rng)?;
    grid.set_goal(position)?;
    Ok(position)
}

fn draw_one<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<Position> {
    sample_free_cells(grid, 1, rng)?
        .first()
        .copied()
        .ok_or(DungeonError::InsufficientFreeSpace {
            requested: 1,
            available: 0,
        })
}
