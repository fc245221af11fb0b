//! Best-first search and online replanning for partially known grid worlds.
//!
//! The crate has two layers. The lower layer is a generic best-first graph
//! search engine ([`best_first_search`]) over anything implementing
//! [`SearchProblem`], with the three classic instantiations exposed as
//! [`greedy_search`], [`uniform_cost_search`] and [`astar_search`]. The
//! upper layer is an online agent ([`OnlineAgent`]) that navigates a maze
//! it can only see one cell around itself, replanning with A* whenever a
//! freshly sensed wall invalidates the current plan.
//!
//! # Examples
//!
//! ```
//! use wayfind::{manhattan_distance, GridWorld, OnlineAgent};
//!
//! let world = GridWorld::from_text("S.#..\n..#..\n.....\n..#.G\n")?;
//! let run = OnlineAgent::new(&world, manhattan_distance).run()?;
//!
//! assert_eq!(*run.path.last().unwrap(), (4, 3));
//! assert!(run.metrics.replans >= 1);
//! # Ok::<(), wayfind::WayfindError>(())
//! ```

pub mod belief;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod grid;
pub mod grid_problem;
pub mod heuristics;
pub mod node;
pub mod offline;
pub mod online;
pub mod problem;
pub mod search;

pub use belief::BeliefWorld;
pub use error::{Result, WayfindError};
pub use frontier::{Frontier, Order};
pub use graph::{RouteProblem, WeightedGraph};
pub use grid::{Coordinate, GridWorld, WorldView};
pub use grid_problem::GridProblem;
pub use heuristics::{euclidean_distance, manhattan_distance, DistanceFn};
pub use node::{Node, NodeArena};
pub use offline::{offline_astar, OfflinePlan};
pub use online::{AgentObserver, NoopObserver, OnlineAgent, OnlineMetrics, OnlineRun};
pub use problem::SearchProblem;
pub use search::{
    astar_search, best_first_search, greedy_search, uniform_cost_search, SearchMetrics,
    SearchResult,
};
