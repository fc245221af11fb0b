//! Offline planning baseline: one A* pass over the fully known maze.
//!
//! This is the yardstick the online loop is measured against. The true
//! world is handed to the planner in full, so the first plan is also the
//! final one; no sensing, no replanning.

use crate::error::{Result, WayfindError};
use crate::grid::{Coordinate, GridWorld};
use crate::grid_problem::GridProblem;
use crate::heuristics::DistanceFn;
use crate::search::astar_search;

/// The outcome of one offline planning pass.
#[derive(Debug, Clone)]
pub struct OfflinePlan {
    /// The full path from start to goal, both endpoints included.
    pub path: Vec<Coordinate>,
    /// Cost of the path; on a unit-cost grid this is `path.len() - 1`.
    pub path_cost: f32,
    /// Nodes the planner expanded to find the path.
    pub node_expansions: u64,
}

/// Plans a route from the world's `S` marker to its `G` marker with full
/// knowledge of the walls.
///
/// # Errors
///
/// Returns [`WayfindError::InvalidProblem`] if the world lacks a start or a
/// goal marker, and [`WayfindError::NoSolutionFound`] if the goal is
/// unreachable.
pub fn offline_astar(world: &GridWorld, heuristic: DistanceFn) -> Result<OfflinePlan> {
    let (start, goal) = match (world.start(), world.goal()) {
        (Some(start), Some(goal)) => (start, goal),
        _ => return Err(WayfindError::InvalidProblem),
    };

    let problem = GridProblem::new(world, start, goal, heuristic);
    let result = astar_search(&problem).ok_or(WayfindError::NoSolutionFound)?;

    log::debug!(
        "offline plan: cost {} with {} expansions",
        result.path_cost(),
        result.metrics.expanded_nodes
    );

    Ok(OfflinePlan {
        path: result.path(),
        path_cost: result.path_cost(),
        node_expansions: result.metrics.expanded_nodes,
    })
}
