//! The agent's belief overlay over a true grid world.
//!
//! The belief world wraps a read-only reference to the true maze with a
//! growing set of known walls. The set only ever grows over the lifetime of
//! one run: a cell, once learned, is never "un-learned". Unknown cells are
//! optimistically treated as passable, which is exactly what forces the
//! online loop to replan when the optimism proves wrong.

use std::collections::HashSet;

use crate::grid::{Coordinate, GridWorld, WorldView};

/// Partial knowledge of a [`GridWorld`], fed by local sensing.
#[derive(Debug, Clone)]
pub struct BeliefWorld<'w> {
    true_world: &'w GridWorld,
    known_walls: HashSet<Coordinate>,
}

impl<'w> BeliefWorld<'w> {
    /// Starts with no knowledge: every in-bounds cell is presumed free.
    pub fn new(true_world: &'w GridWorld) -> Self {
        Self {
            true_world,
            known_walls: HashSet::new(),
        }
    }

    /// Observes the agent's own cell and its four orthogonal neighbors in
    /// the true world, recording any walls among them. Returns the walls
    /// discovered for the first time by this call; sensing the same
    /// position twice on an unchanged world discovers nothing new.
    ///
    /// This is the only way information enters the belief state.
    pub fn sense(&mut self, position: Coordinate) -> Vec<Coordinate> {
        let (x, y) = position;
        let mut discovered = Vec::new();
        for cell in [(x, y), (x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if !self.true_world.is_inside(cell.0, cell.1) {
                continue;
            }
            if self.true_world.is_wall(cell.0, cell.1) && self.known_walls.insert(cell) {
                discovered.push(cell);
            }
        }
        discovered
    }

    /// The walls discovered so far.
    pub fn known_walls(&self) -> &HashSet<Coordinate> {
        &self.known_walls
    }
}

impl WorldView for BeliefWorld<'_> {
    fn is_inside(&self, x: i32, y: i32) -> bool {
        self.true_world.is_inside(x, y)
    }

    /// Out-of-bounds is always a wall; otherwise a cell is a wall iff it
    /// has been sensed as one. Unknown means free.
    fn is_wall(&self, x: i32, y: i32) -> bool {
        if !self.is_inside(x, y) {
            return true;
        }
        self.known_walls.contains(&(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridWorld;

    const MAZE: &str = "\
S#...
.#.#.
...#G
";

    #[test]
    fn test_unknown_cells_are_presumed_free() {
        let world = GridWorld::from_text(MAZE).unwrap();
        let belief = BeliefWorld::new(&world);
        // (1, 0) really is a wall, but it has not been sensed yet.
        assert!(!belief.is_wall(1, 0));
        assert!(belief.is_free(1, 0));
    }

    #[test]
    fn test_out_of_bounds_is_a_wall_even_unsensed() {
        let world = GridWorld::from_text(MAZE).unwrap();
        let belief = BeliefWorld::new(&world);
        assert!(belief.is_wall(-1, 0));
        assert!(belief.is_wall(0, 3));
    }

    #[test]
    fn test_sense_records_adjacent_walls() {
        let world = GridWorld::from_text(MAZE).unwrap();
        let mut belief = BeliefWorld::new(&world);
        let discovered = belief.sense((0, 0));
        assert_eq!(discovered, vec![(1, 0)]);
        assert!(belief.is_wall(1, 0));
        // Walls beyond the sensing radius stay unknown.
        assert!(!belief.is_wall(1, 1));
    }

    #[test]
    fn test_sense_is_idempotent() {
        let world = GridWorld::from_text(MAZE).unwrap();
        let mut belief = BeliefWorld::new(&world);
        belief.sense((0, 0));
        let before = belief.known_walls().clone();
        let rediscovered = belief.sense((0, 0));
        assert!(rediscovered.is_empty());
        assert_eq!(*belief.known_walls(), before);
    }

    #[test]
    fn test_knowledge_grows_monotonically() {
        let world = GridWorld::from_text(MAZE).unwrap();
        let mut belief = BeliefWorld::new(&world);
        let mut last = 0;
        for position in [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1)] {
            belief.sense(position);
            let now = belief.known_walls().len();
            assert!(now >= last, "known walls must never shrink");
            last = now;
        }
        assert!(last > 0);
    }

    #[test]
    fn test_neighbors_reflect_belief_not_truth() {
        let world = GridWorld::from_text(MAZE).unwrap();
        let mut belief = BeliefWorld::new(&world);
        // Before sensing, the true wall at (1, 0) is invisible.
        assert!(belief.neighbors4((0, 0)).contains(&(1, 0)));
        belief.sense((0, 0));
        assert!(!belief.neighbors4((0, 0)).contains(&(1, 0)));
    }
}
