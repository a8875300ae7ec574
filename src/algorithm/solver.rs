//! Shortest paths by layered frontier sweeps
//!
//! The cost field is built one breadth-first layer per round: the plus-shaped
//! dilation of the finalized set, minus the finalized set and the barriers,
//! is the new frontier, and each frontier cell costs one more than its
//! cheapest finalized neighbor. Layers are assigned in non-decreasing order,
//! so the field matches breadth-first graph distances exactly.
//!
//! The route is recovered by walking down the cost field from the goal,
//! checking neighbors in the fixed order up, down, left, right and taking the
//! first one whose cost is exactly one lower. That order is the tie-break
//! between equally short routes.

use log::{debug, warn};
use ndarray::{Array2, Zip};

use crate::io::error::{DungeonError, Result, UnreachableCause, invalid_configuration};
use crate::math::morphology::{Footprint, dilate, minimum_filter};
use crate::spatial::grid::{Cell, Direction, Grid, Position};

/// Cost of a cell that has not been reached
pub const UNREACHED: u32 = u32::MAX;

/// Neighbor order used when walking back from the goal
pub const BACKTRACK_ORDER: [Direction; 4] = Direction::ALL;

/// Distances from the start cell, as far as the sweep got
#[derive(Debug, Clone)]
pub struct CostField {
    /// Step count from the start, [`UNREACHED`] where not finalized
    pub cost: Array2<u32>,
    /// Number of expansion rounds performed
    pub rounds: usize,
}

impl CostField {
    /// Cost at a position, `None` outside the grid or when unreached
    pub fn at(&self, position: Position) -> Option<u32> {
        self.cost
            .get(position)
            .copied()
            .filter(|&cost| cost != UNREACHED)
    }
}

// Walls block expansion, except that the endpoints of the query never do
fn barriers(grid: &Grid, start: Position, goal: Position) -> Array2<bool> {
    Zip::indexed(&grid.cells).map_collect(|(row, col), &cell| {
        let position = [row, col];
        cell == Cell::Wall && position != start && position != goal
    })
}

/// Sweep costs outwards from `start` until `goal` is finalized
///
/// # Errors
///
/// Returns `OutOfBounds` if either endpoint lies outside the grid, and
/// `Unreachable` when the frontier runs dry or the sweep exceeds one round
/// per grid cell
///
/// Every round that does not stop on an empty frontier finalizes at least one
/// new cell, so the round limit is a backstop that cannot fire while the
/// frontier check holds.
pub fn compute_cost_field(grid: &Grid, start: Position, goal: Position) -> Result<CostField> {
    grid.check_bounds(start)?;
    grid.check_bounds(goal)?;

    let dimensions = grid.dimensions();
    let blocked = barriers(grid, start, goal);
    let plus = Footprint::plus();

    let mut cost = Array2::from_elem(dimensions, UNREACHED);
    let mut done = Array2::from_elem(dimensions, false);
    if let Some(origin) = cost.get_mut(start) {
        *origin = 0;
    }
    if let Some(origin) = done.get_mut(start) {
        *origin = true;
    }

    if start == goal {
        return Ok(CostField { cost, rounds: 0 });
    }

    let max_rounds = grid.len();
    for round in 1..=max_rounds {
        let reached = dilate(&done, &plus);
        let cheapest = minimum_filter(&cost, &plus);

        let mut frontier = 0_usize;
        Zip::from(&mut cost)
            .and(&mut done)
            .and(&reached)
            .and(&cheapest)
            .and(&blocked)
            .for_each(|slot, finalized, &near, &lowest, &wall| {
                if near && !*finalized && !wall {
                    *slot = lowest.saturating_add(1);
                    *finalized = true;
                    frontier += 1;
                }
            });

        if done.get(goal).copied().unwrap_or(false) {
            debug!("cost field reached goal {goal:?} after {round} rounds");
            return Ok(CostField { cost, rounds: round });
        }

        if frontier == 0 {
            warn!(
                "goal {goal:?} unreachable from {start:?}: frontier exhausted after {round} rounds, the cells lie in different components"
            );
            return Err(DungeonError::Unreachable {
                start,
                goal,
                rounds: round,
                cause: UnreachableCause::Disconnected,
            });
        }
    }

    warn!(
        "goal {goal:?} unreachable from {start:?}: sweep did not converge within {max_rounds} rounds"
    );
    Err(DungeonError::Unreachable {
        start,
        goal,
        rounds: max_rounds,
        cause: UnreachableCause::RoundLimit,
    })
}

/// Walk down a cost field from `goal` back to the zero-cost start
///
/// Returns the route ordered from start to goal, both included.
///
/// # Errors
///
/// Returns `OutOfBounds` if `goal` lies outside the field and `Unreachable`
/// if the goal was never reached or the descent gets stuck
pub fn backtrack(field: &CostField, start: Position, goal: Position) -> Result<Vec<Position>> {
    let dimensions = field.cost.dim();
    let unreachable_error = |cause| DungeonError::Unreachable {
        start,
        goal,
        rounds: field.rounds,
        cause,
    };

    let mut remaining = match field.cost.get(goal).copied() {
        None => {
            return Err(DungeonError::OutOfBounds {
                position: goal,
                dimensions,
            });
        }
        Some(UNREACHED) => return Err(unreachable_error(UnreachableCause::Disconnected)),
        Some(cost) => cost,
    };

    let mut current = goal;
    let mut route = Vec::with_capacity(remaining as usize + 1);
    route.push(current);

    while remaining > 0 {
        let wanted = remaining - 1;
        let next = BACKTRACK_ORDER.iter().find_map(|direction| {
            direction
                .step(current, dimensions)
                .filter(|&neighbor| field.cost.get(neighbor) == Some(&wanted))
        });

        let Some(next) = next else {
            warn!("cost descent stalled at {current:?} with cost {remaining}");
            return Err(unreachable_error(UnreachableCause::Disconnected));
        };

        current = next;
        remaining = wanted;
        route.push(current);
    }

    route.reverse();
    Ok(route)
}

/// Shortest 4-connected route from `start` to `goal`, both included
///
/// # Errors
///
/// Returns `OutOfBounds` for endpoints outside the grid and `Unreachable`
/// when no walkable route exists
pub fn shortest_path(grid: &Grid, start: Position, goal: Position) -> Result<Vec<Position>> {
    let field = compute_cost_field(grid, start, goal)?;
    backtrack(&field, start, goal)
}

/// Shortest route between the grid's own start and goal markers
///
/// # Errors
///
/// Returns `InvalidConfiguration` if either marker is missing, otherwise the
/// errors of [`shortest_path`]
pub fn solve_markers(grid: &Grid) -> Result<Vec<Position>> {
    let start = grid.start().ok_or_else(|| {
        invalid_configuration("start", &"none", &"grid has no start marker")
    })?;
    let goal = grid.goal().ok_or_else(|| {
        invalid_configuration("goal", &"none", &"grid has no goal marker")
    })?;
    shortest_path(grid, start, goal)
}
