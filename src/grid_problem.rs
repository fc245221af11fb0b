//! The grid navigation problem: unit step cost, 4-connected moves.

use crate::grid::{Coordinate, WorldView};
use crate::heuristics::DistanceFn;
use crate::problem::SearchProblem;

/// Navigation between two cells of any [`WorldView`].
///
/// An action is simply the neighbor cell chosen to step into, so the
/// transition function is the identity on the action. The world is borrowed
/// read-only: planning never mutates it, which is what allows the online
/// loop to plan against a belief overlay that only the sensing step may
/// change.
#[derive(Debug, Clone)]
pub struct GridProblem<'w, W: WorldView> {
    world: &'w W,
    initial: Coordinate,
    goal: Coordinate,
    heuristic: DistanceFn,
}

impl<'w, W: WorldView> GridProblem<'w, W> {
    pub fn new(world: &'w W, initial: Coordinate, goal: Coordinate, heuristic: DistanceFn) -> Self {
        Self {
            world,
            initial,
            goal,
            heuristic,
        }
    }
}

impl<W: WorldView> SearchProblem for GridProblem<'_, W> {
    type State = Coordinate;
    type Action = Coordinate;

    fn initial_state(&self) -> Coordinate {
        self.initial
    }

    fn is_goal(&self, state: &Coordinate) -> bool {
        *state == self.goal
    }

    fn actions(&self, state: &Coordinate) -> Vec<Coordinate> {
        self.world.neighbors4(*state)
    }

    fn result(&self, _state: &Coordinate, action: &Coordinate) -> Coordinate {
        *action
    }

    fn step_cost(
        &self,
        accumulated: f32,
        _state: &Coordinate,
        _action: &Coordinate,
        _next: &Coordinate,
    ) -> f32 {
        // Uniform step cost on the grid.
        accumulated + 1.0
    }

    fn heuristic(&self, state: &Coordinate) -> f32 {
        (self.heuristic)(*state, self.goal)
    }
}
