//! The online replanning loop: sense, plan, execute, repeat.
//!
//! The agent walks a maze it cannot see in full. It keeps a
//! [`BeliefWorld`] fed by local sensing, plans with A* over that belief,
//! and follows the plan until a freshly discovered wall invalidates it, at
//! which point it plans again from wherever it is standing. Unknown cells
//! are presumed free, so early plans are optimistic and the replan count
//! measures how often the maze contradicted them.

use crate::belief::BeliefWorld;
use crate::error::{Result, WayfindError};
use crate::grid::{Coordinate, GridWorld, WorldView};
use crate::grid_problem::GridProblem;
use crate::heuristics::DistanceFn;
use crate::search::astar_search;

/// Callbacks invoked as the agent progresses. All methods default to
/// no-ops, so an observer implements only what it cares about.
pub trait AgentObserver {
    /// Called after the agent arrives at `position` (including the start
    /// cell, before any move is made).
    fn on_step(&mut self, position: Coordinate) {
        let _ = position;
    }

    /// Called right before each planning pass, from the cell the agent is
    /// standing on.
    fn on_replan(&mut self, position: Coordinate) {
        let _ = position;
    }
}

/// The observer used when the caller does not supply one.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl AgentObserver for NoopObserver {}

/// Counters accumulated over one online run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OnlineMetrics {
    /// Total nodes expanded across every planning pass.
    pub node_expansions: u64,
    /// Cost of the walked path; one per step on the unit-cost grid.
    pub path_cost: f32,
    /// Number of cells visited, start and goal included.
    pub path_length: usize,
    /// Number of planning passes.
    pub replans: u32,
}

/// A completed online run: the cells actually walked, in order, plus the
/// run's metrics.
#[derive(Debug, Clone)]
pub struct OnlineRun {
    pub path: Vec<Coordinate>,
    pub metrics: OnlineMetrics,
}

/// An agent that navigates a [`GridWorld`] it only learns by sensing.
///
/// # Examples
///
/// ```
/// use wayfind::{manhattan_distance, GridWorld, OnlineAgent};
///
/// let world = GridWorld::from_text("S....\n.....\n....G\n")?;
/// let run = OnlineAgent::new(&world, manhattan_distance).run()?;
/// assert_eq!(run.metrics.path_cost, 6.0);
/// assert_eq!(run.metrics.replans, 1);
/// # Ok::<(), wayfind::WayfindError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OnlineAgent<'w> {
    world: &'w GridWorld,
    heuristic: DistanceFn,
}

impl<'w> OnlineAgent<'w> {
    pub fn new(world: &'w GridWorld, heuristic: DistanceFn) -> Self {
        Self { world, heuristic }
    }

    /// Runs the loop to completion without callbacks.
    ///
    /// # Errors
    ///
    /// See [`OnlineAgent::run_with_observer`].
    pub fn run(&self) -> Result<OnlineRun> {
        self.run_with_observer(&mut NoopObserver)
    }

    /// Runs the loop to completion, reporting progress to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`WayfindError::InvalidProblem`] if the world lacks a start
    /// or goal marker, [`WayfindError::NoPlanFound`] when the belief map
    /// admits no route to the goal (once enough walls are known, this is
    /// how a truly unreachable goal surfaces), and [`WayfindError::Stuck`]
    /// if an execution pass makes no forward progress.
    pub fn run_with_observer(&self, observer: &mut dyn AgentObserver) -> Result<OnlineRun> {
        let (start, goal) = match (self.world.start(), self.world.goal()) {
            (Some(start), Some(goal)) => (start, goal),
            _ => return Err(WayfindError::InvalidProblem),
        };

        let mut belief = BeliefWorld::new(self.world);
        let mut current = start;
        let mut walked = vec![start];
        let mut metrics = OnlineMetrics::default();

        // The agent looks around before it plans anything.
        belief.sense(current);
        observer.on_step(current);
        log::info!("online run: start {:?}, goal {:?}", start, goal);

        while current != goal {
            observer.on_replan(current);
            metrics.replans += 1;
            log::debug!(
                "planning pass {} from {:?} ({} known walls)",
                metrics.replans,
                current,
                belief.known_walls().len()
            );

            let problem = GridProblem::new(&belief, current, goal, self.heuristic);
            let result = astar_search(&problem).ok_or(WayfindError::NoPlanFound)?;
            metrics.node_expansions += result.metrics.expanded_nodes;
            let plan = result.path();

            let mut progressed = false;
            for &next in &plan[1..] {
                if belief.is_wall(next.0, next.1) {
                    // The plan runs through a wall discovered after it was
                    // made. Abandon it and plan again from here.
                    log::warn!("plan blocked at {:?}, replanning from {:?}", next, current);
                    break;
                }
                current = next;
                walked.push(current);
                let discovered = belief.sense(current);
                observer.on_step(current);
                progressed = true;
                if !discovered.is_empty() {
                    log::debug!("sensed new walls at {:?}", discovered);
                }
                if current == goal {
                    break;
                }
            }

            if !progressed && current != goal {
                return Err(WayfindError::Stuck);
            }
        }

        metrics.path_length = walked.len();
        metrics.path_cost = (walked.len() - 1) as f32;
        log::info!(
            "online run done: cost {}, {} replans, {} expansions",
            metrics.path_cost,
            metrics.replans,
            metrics.node_expansions
        );

        Ok(OnlineRun {
            path: walked,
            metrics,
        })
    }
}
