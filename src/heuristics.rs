//! Distance heuristics for grid planning.

use crate::grid::Coordinate;

/// A heuristic over grid cells: estimates the cost from a cell to the goal.
pub type DistanceFn = fn(Coordinate, Coordinate) -> f32;

/// Manhattan distance; admissible and consistent for 4-connected grids with
/// unit step cost.
pub fn manhattan_distance(a: Coordinate, b: Coordinate) -> f32 {
    ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f32
}

/// Euclidean distance; a looser bound than Manhattan on 4-connected grids
/// but still admissible.
pub fn euclidean_distance(a: Coordinate, b: Coordinate) -> f32 {
    let dx = (a.0 - b.0) as f32;
    let dy = (a.1 - b.1) as f32;
    dx.hypot(dy)
}
