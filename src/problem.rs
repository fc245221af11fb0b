//! # Problem Abstraction
//!
//! A search problem describes a state space: where the search starts, which
//! actions are admissible in a state, what they lead to and cost, and when a
//! state counts as a goal. The best-first engine in [`crate::search`] is
//! written against this trait alone, so the same loop serves road-network
//! routing, grid navigation, and anything else that can describe itself this
//! way.
//!
//! # Examples
//!
//! A one-dimensional counting problem where the only action is "add one":
//!
//! ```
//! use wayfind::{uniform_cost_search, SearchProblem};
//!
//! struct CountUp {
//!     target: i32,
//! }
//!
//! impl SearchProblem for CountUp {
//!     type State = i32;
//!     type Action = i32;
//!
//!     fn initial_state(&self) -> i32 {
//!         0
//!     }
//!
//!     fn is_goal(&self, state: &i32) -> bool {
//!         *state == self.target
//!     }
//!
//!     fn actions(&self, _state: &i32) -> Vec<i32> {
//!         vec![1]
//!     }
//!
//!     fn result(&self, state: &i32, action: &i32) -> i32 {
//!         state + action
//!     }
//! }
//!
//! let result = uniform_cost_search(&CountUp { target: 3 }).unwrap();
//! assert_eq!(*result.state(), 3);
//! assert_eq!(result.path_cost(), 3.0);
//! ```

use std::fmt::Debug;
use std::hash::Hash;

/// A formal search problem over a discrete state space.
///
/// Implementors provide the capability set the engine plans with: the start
/// state, the goal test (an equality check or membership in a set of
/// acceptable states, as the implementor sees fit), action enumeration, the
/// transition function, the cost function, and an optional heuristic.
///
/// # Contract
///
/// - `actions` must return a finite sequence and must be side-effect-free.
/// - `result` must be deterministic.
/// - `step_cost` must be non-negative and monotonically non-decreasing in the
///   accumulated argument; otherwise the optimality guarantees of
///   uniform-cost and A* search do not hold.
/// - `heuristic` must never be negative. When no estimate is available it
///   must return `f32::INFINITY` rather than a sentinel value, so that
///   frontier comparisons stay meaningful.
///
/// A malformed problem (say, a start state with no actions that is not
/// itself a goal) is valid input; searching it simply yields no solution.
pub trait SearchProblem {
    /// A snapshot of the world. Cloned freely by the engine, so keep it
    /// small; equality and hashing drive duplicate detection.
    type State: Clone + Eq + Hash + Debug;
    /// An admissible move between states.
    type Action: Clone;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// The actions admissible in `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// The cumulative cost of reaching `next` via `action`, given the cost
    /// `accumulated` of reaching `state`. Defaults to a unit step cost.
    fn step_cost(
        &self,
        accumulated: f32,
        _state: &Self::State,
        _action: &Self::Action,
        _next: &Self::State,
    ) -> f32 {
        accumulated + 1.0
    }

    /// An estimate of the remaining cost from `state` to a goal.
    ///
    /// The default of `0.0` turns A* into uniform-cost search.
    fn heuristic(&self, _state: &Self::State) -> f32 {
        0.0
    }
}
