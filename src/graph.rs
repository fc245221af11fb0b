//! Weighted graphs and route-finding problems over them.
//!
//! [`WeightedGraph`] is an adjacency-map graph whose edges carry fixed
//! costs; nodes may additionally carry 2D coordinates so that a
//! straight-line-distance heuristic becomes available. [`RouteProblem`]
//! wraps such a graph in the [`SearchProblem`] interface: a state is a node
//! label and an action is the neighbor chosen to travel to next.

use std::collections::HashMap;

use crate::problem::SearchProblem;

/// A graph of labeled nodes with per-edge costs and optional node
/// coordinates.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    edges: HashMap<String, HashMap<String, f32>>,
    locations: HashMap<String, (f32, f32)>,
    directed: bool,
}

impl WeightedGraph {
    /// Creates an empty undirected graph: every connection is traversable
    /// both ways at the same cost.
    pub fn undirected() -> Self {
        Self {
            edges: HashMap::new(),
            locations: HashMap::new(),
            directed: false,
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::undirected()
        }
    }

    /// Adds an edge from `a` to `b` with the given cost; for undirected
    /// graphs the reverse edge is added as well.
    pub fn connect(&mut self, a: &str, b: &str, cost: f32) {
        self.connect_one(a, b, cost);
        if !self.directed {
            self.connect_one(b, a, cost);
        }
    }

    fn connect_one(&mut self, a: &str, b: &str, cost: f32) {
        self.edges
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), cost);
    }

    /// Records the 2D position of a node, enabling the straight-line
    /// heuristic for route problems on this graph.
    pub fn set_location(&mut self, name: &str, position: (f32, f32)) {
        self.locations.insert(name.to_string(), position);
    }

    /// The position of `name`, if one was recorded.
    pub fn location(&self, name: &str) -> Option<(f32, f32)> {
        self.locations.get(name).copied()
    }

    /// The cost of the edge from `a` to `b`, if it exists.
    pub fn cost(&self, a: &str, b: &str) -> Option<f32> {
        self.edges.get(a).and_then(|links| links.get(b)).copied()
    }

    /// The neighbors reachable from `name`, sorted for deterministic
    /// expansion order.
    pub fn neighbors(&self, name: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .edges
            .get(name)
            .map(|links| links.keys().cloned().collect())
            .unwrap_or_default();
        out.sort();
        out
    }
}

/// Shortest-route problem between two nodes of a [`WeightedGraph`].
///
/// The heuristic is the straight-line distance between recorded node
/// positions; when either endpoint has no position the estimate degrades to
/// `f32::INFINITY`, never to a negative or fabricated value.
#[derive(Debug, Clone)]
pub struct RouteProblem<'g> {
    graph: &'g WeightedGraph,
    initial: String,
    goal: String,
}

impl<'g> RouteProblem<'g> {
    pub fn new(graph: &'g WeightedGraph, initial: &str, goal: &str) -> Self {
        Self {
            graph,
            initial: initial.to_string(),
            goal: goal.to_string(),
        }
    }
}

impl SearchProblem for RouteProblem<'_> {
    type State = String;
    type Action = String;

    fn initial_state(&self) -> String {
        self.initial.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        *state == self.goal
    }

    fn actions(&self, state: &String) -> Vec<String> {
        self.graph.neighbors(state)
    }

    fn result(&self, _state: &String, action: &String) -> String {
        // The action is "go to this neighbor".
        action.clone()
    }

    fn step_cost(&self, accumulated: f32, state: &String, _action: &String, next: &String) -> f32 {
        accumulated + self.graph.cost(state, next).unwrap_or(f32::INFINITY)
    }

    fn heuristic(&self, state: &String) -> f32 {
        match (self.graph.location(state), self.graph.location(&self.goal)) {
            (Some((ax, ay)), Some((bx, by))) => (ax - bx).hypot(ay - by),
            _ => f32::INFINITY,
        }
    }
}
