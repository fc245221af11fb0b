//! The generic best-first search engine.
//!
//! One loop serves three classic algorithms; they differ only in the
//! evaluation function handed to [`best_first_search`]:
//!
//! - Greedy best-first: `f(n) = h(n.state)` — [`greedy_search`]
//! - Uniform-cost: `f(n) = n.path_cost` — [`uniform_cost_search`]
//! - A*: `f(n) = n.path_cost + h(n.state)` — [`astar_search`]
//!
//! The engine is world-agnostic; it depends only on the
//! [`SearchProblem`] trait. Exhausting the frontier without a goal match is
//! not a fault: it is reported as `None`, distinguishing "no path exists"
//! from a system error.

use std::collections::HashSet;

use crate::frontier::{Frontier, Order};
use crate::node::{Node, NodeArena};
use crate::problem::SearchProblem;

/// Counters accumulated over one engine invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Number of nodes whose successors were generated.
    pub expanded_nodes: u64,
    /// Maximum frontier size observed.
    pub frontier_max: usize,
    /// Size of the explored set when the search returned.
    pub explored: usize,
}

/// A successful search: the goal node, the tree that led to it, and the
/// metrics gathered along the way.
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    arena: NodeArena<S, A>,
    goal: usize,
    /// Metrics for this invocation.
    pub metrics: SearchMetrics,
}

impl<S: Clone, A: Clone> SearchResult<S, A> {
    /// The goal state reached.
    pub fn state(&self) -> &S {
        &self.arena.get(self.goal).state
    }

    /// Cumulative cost of the path from the initial state to the goal.
    pub fn path_cost(&self) -> f32 {
        self.arena.get(self.goal).path_cost
    }

    /// Depth of the goal node in the search tree.
    pub fn depth(&self) -> u32 {
        self.arena.get(self.goal).depth
    }

    /// The ordered states from the initial state to the goal, inclusive.
    pub fn path(&self) -> Vec<S> {
        self.arena.path_states(self.goal)
    }

    /// The action sequence that turns the initial state into the goal.
    pub fn solution(&self) -> Vec<A> {
        self.arena.solution_actions(self.goal)
    }
}

/// Best-first graph search parameterized by an evaluation function.
///
/// The frontier is ordered ascending by `f`; the goal test runs when a node
/// is popped, not when it is generated, which is what makes A* optimal under
/// a consistent heuristic. A state is expanded at most once: once explored
/// it is never re-expanded, even if a cheaper node for it is discovered
/// later. Under an inconsistent heuristic that rule can discard the better
/// route, which is the documented price of the single-expansion policy.
///
/// A child whose state already has a frontier entry with a strictly worse
/// `f` value replaces that entry (decrease-key); a child whose state has
/// been explored is discarded unconditionally.
///
/// Returns `None` when the frontier empties without a goal match.
pub fn best_first_search<P, F>(problem: &P, f: F) -> Option<SearchResult<P::State, P::Action>>
where
    P: SearchProblem,
    F: Fn(&Node<P::State, P::Action>) -> f32,
{
    let mut arena = NodeArena::new();
    let root = arena.push_root(problem.initial_state());

    let mut frontier = Frontier::new(Order::Min);
    let root_priority = f(arena.get(root));
    frontier.insert(root_priority, root, arena.get(root).state.clone());

    let mut explored: HashSet<P::State> = HashSet::new();
    let mut expanded_nodes: u64 = 0;

    while let Some(id) = frontier.pop_best() {
        if problem.is_goal(&arena.get(id).state) {
            let metrics = SearchMetrics {
                expanded_nodes,
                frontier_max: frontier.high_water(),
                explored: explored.len(),
            };
            return Some(SearchResult {
                arena,
                goal: id,
                metrics,
            });
        }

        explored.insert(arena.get(id).state.clone());
        expanded_nodes += 1;

        for child in arena.expand(id, problem) {
            let priority = f(arena.get(child));
            let state = &arena.get(child).state;
            if explored.contains(state) {
                continue;
            }
            match frontier.priority_of(state) {
                None => {
                    let state = state.clone();
                    frontier.insert(priority, child, state);
                }
                Some(existing) if priority < existing => {
                    let state = state.clone();
                    frontier.remove(&state);
                    frontier.insert(priority, child, state);
                }
                Some(_) => {}
            }
        }
    }

    None
}

/// Greedy best-first search: expands the node whose state looks closest to
/// the goal, ignoring the cost already paid.
pub fn greedy_search<P>(problem: &P) -> Option<SearchResult<P::State, P::Action>>
where
    P: SearchProblem,
{
    best_first_search(problem, |n| n.heuristic_with(|s| problem.heuristic(s)))
}

/// Uniform-cost search: expands the cheapest node first; optimal whenever
/// step costs are non-negative.
pub fn uniform_cost_search<P>(problem: &P) -> Option<SearchResult<P::State, P::Action>>
where
    P: SearchProblem,
{
    best_first_search(problem, |n| n.path_cost)
}

/// A* search: orders the frontier by cost so far plus the heuristic
/// estimate of the cost to go.
pub fn astar_search<P>(problem: &P) -> Option<SearchResult<P::State, P::Action>>
where
    P: SearchProblem,
{
    best_first_search(problem, |n| {
        n.path_cost + n.heuristic_with(|s| problem.heuristic(s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two routes from 0 to 3: an expensive direct hop and a cheap two-step
    /// detour through 1 and 2.
    struct Diamond;

    impl SearchProblem for Diamond {
        type State = u8;
        type Action = u8;

        fn initial_state(&self) -> u8 {
            0
        }

        fn is_goal(&self, state: &u8) -> bool {
            *state == 3
        }

        fn actions(&self, state: &u8) -> Vec<u8> {
            match state {
                0 => vec![1, 3],
                1 => vec![2],
                2 => vec![3],
                _ => vec![],
            }
        }

        fn result(&self, _state: &u8, action: &u8) -> u8 {
            *action
        }

        fn step_cost(&self, accumulated: f32, state: &u8, _action: &u8, next: &u8) -> f32 {
            let step = match (state, next) {
                (0, 3) => 10.0,
                _ => 1.0,
            };
            accumulated + step
        }

        fn heuristic(&self, state: &u8) -> f32 {
            // Admissible: never overestimates the true remaining cost.
            match state {
                3 => 0.0,
                2 => 1.0,
                1 => 2.0,
                _ => 3.0,
            }
        }
    }

    /// A start state with no actions that is not itself a goal.
    struct DeadEnd;

    impl SearchProblem for DeadEnd {
        type State = u8;
        type Action = u8;

        fn initial_state(&self) -> u8 {
            0
        }

        fn is_goal(&self, state: &u8) -> bool {
            *state == 1
        }

        fn actions(&self, _state: &u8) -> Vec<u8> {
            vec![]
        }

        fn result(&self, _state: &u8, action: &u8) -> u8 {
            *action
        }
    }

    #[test]
    fn test_uniform_cost_prefers_cheap_detour() {
        let result = uniform_cost_search(&Diamond).unwrap();
        assert_eq!(*result.state(), 3);
        assert_eq!(result.path_cost(), 3.0);
        assert_eq!(result.path(), vec![0, 1, 2, 3]);
        assert_eq!(result.solution(), vec![1, 2, 3]);
    }

    #[test]
    fn test_astar_matches_uniform_cost_on_consistent_heuristic() {
        let ucs = uniform_cost_search(&Diamond).unwrap();
        let astar = astar_search(&Diamond).unwrap();
        assert_eq!(astar.path_cost(), ucs.path_cost());
        assert_eq!(astar.path(), ucs.path());
    }

    #[test]
    fn test_goal_state_is_returned_for_unique_goal() {
        let result = astar_search(&Diamond).unwrap();
        assert!(Diamond.is_goal(result.state()));
    }

    #[test]
    fn test_greedy_reaches_goal() {
        let result = greedy_search(&Diamond).unwrap();
        assert_eq!(*result.state(), 3);
    }

    #[test]
    fn test_no_solution_reported_as_none() {
        assert!(uniform_cost_search(&DeadEnd).is_none());
    }

    #[test]
    fn test_trivial_goal_expands_nothing() {
        struct AlreadyThere;

        impl SearchProblem for AlreadyThere {
            type State = u8;
            type Action = u8;

            fn initial_state(&self) -> u8 {
                0
            }

            fn is_goal(&self, state: &u8) -> bool {
                *state == 0
            }

            fn actions(&self, _state: &u8) -> Vec<u8> {
                vec![]
            }

            fn result(&self, _state: &u8, action: &u8) -> u8 {
                *action
            }
        }

        let result = uniform_cost_search(&AlreadyThere).unwrap();
        assert_eq!(result.metrics.expanded_nodes, 0);
        assert_eq!(result.path_cost(), 0.0);
        assert_eq!(result.depth(), 0);
    }

    #[test]
    fn test_metrics_are_collected() {
        let result = uniform_cost_search(&Diamond).unwrap();
        assert!(result.metrics.expanded_nodes >= 3);
        assert!(result.metrics.frontier_max >= 2);
        assert_eq!(result.metrics.explored as u64, result.metrics.expanded_nodes);
    }
}
