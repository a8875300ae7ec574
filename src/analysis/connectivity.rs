//! Queue-based reachability over the 4-connected open cells
//!
//! These walk the grid directly instead of sweeping it, which makes them a
//! cheap independent check on the generator's connectivity and on the
//! solver's distances.

use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::spatial::grid::{Direction, Grid, Position};

const fn flat(position: Position, cols: usize) -> usize {
    position[0] * cols + position[1]
}

fn is_marked(visited: &BitVec, index: usize) -> bool {
    visited.get(index).as_deref() == Some(&true)
}

// Breadth-first fill from `seed`, calling `visit` with each cell and its depth
fn flood<F, V>(grid: &Grid, seed: Position, passable: F, visited: &mut BitVec, mut visit: V)
where
    F: Fn(Position) -> bool,
    V: FnMut(Position, usize),
{
    let dimensions = grid.dimensions();
    let cols = grid.cols();

    visited.set(flat(seed, cols), true);
    let mut queue = VecDeque::from([(seed, 0_usize)]);

    while let Some((position, depth)) = queue.pop_front() {
        visit(position, depth);
        for direction in Direction::ALL {
            let Some(next) = direction.step(position, dimensions) else {
                continue;
            };
            let index = flat(next, cols);
            if !is_marked(visited, index) && passable(next) {
                visited.set(index, true);
                queue.push_back((next, depth + 1));
            }
        }
    }
}

/// Number of 4-connected components formed by the open cells
pub fn open_components(grid: &Grid) -> usize {
    let mut visited = bitvec![0; grid.len()];
    let cols = grid.cols();
    let mut components = 0;

    for ((row, col), cell) in grid.cells.indexed_iter() {
        let position = [row, col];
        if cell.is_open() && !is_marked(&visited, flat(position, cols)) {
            components += 1;
            flood(grid, position, |p| grid.is_open(p), &mut visited, |_, _| {});
        }
    }

    components
}

/// Whether all open cells form a single 4-connected region
///
/// A grid without open cells counts as connected.
pub fn is_connected(grid: &Grid) -> bool {
    open_components(grid) <= 1
}

/// Cells reachable from an open `seed` through open cells, in breadth-first order
///
/// Returns nothing when the seed is a wall or outside the grid.
pub fn reachable_from(grid: &Grid, seed: Position) -> Vec<Position> {
    let mut reached = Vec::new();
    if !grid.is_open(seed) {
        return reached;
    }
    let mut visited = bitvec![0; grid.len()];
    flood(grid, seed, |p| grid.is_open(p), &mut visited, |position, _| {
        reached.push(position);
    });
    reached
}

/// Breadth-first step count between two cells
///
/// Walls block movement except at the two endpoints themselves. Returns
/// `None` when either endpoint is outside the grid or no route exists.
pub fn bfs_distance(grid: &Grid, start: Position, goal: Position) -> Option<usize> {
    grid.get(start)?;
    grid.get(goal)?;

    let mut visited = bitvec![0; grid.len()];
    let mut distance = None;
    flood(
        grid,
        start,
        |p| p == goal || grid.is_open(p),
        &mut visited,
        |position, depth| {
            if position == goal && distance.is_none() {
                distance = Some(depth);
            }
        },
    );
    distance
}
