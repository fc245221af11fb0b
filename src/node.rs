//! Search nodes and the arena that owns them.
//!
//! Nodes form an immutable tree reachable only backward: each node records
//! the index of its single parent inside a [`NodeArena`], and a parent may be
//! shared by many children. Keeping nodes in an arena indexed by `usize`
//! avoids reference-counted parent chains while preserving cheap structural
//! sharing; path reconstruction walks parent indices to the root and
//! reverses.

use std::cell::Cell;
use std::hash::{Hash, Hasher};

use crate::problem::SearchProblem;

/// A node in a search tree: a state plus how (and how expensively) the
/// search reached it.
///
/// Equality and hashing are defined by `state` alone, not by cost or path.
/// This is load-bearing: it lets the frontier and the explored set treat two
/// routes to the same state as duplicates while only one is retained.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    /// The state this node stands for.
    pub state: S,
    /// Arena index of the parent node, `None` for the root.
    pub parent: Option<usize>,
    /// The action that produced this node from its parent, `None` for the
    /// root.
    pub action: Option<A>,
    /// Cumulative cost of the path from the root to this node.
    pub path_cost: f32,
    /// Tree depth; the root has depth 0.
    pub depth: u32,
    /// Heuristic value, computed lazily on first query and then reused for
    /// every later comparison of this node.
    cached_h: Cell<Option<f32>>,
}

impl<S, A> Node<S, A> {
    fn new(state: S, parent: Option<usize>, action: Option<A>, path_cost: f32, depth: u32) -> Self {
        Self {
            state,
            parent,
            action,
            path_cost,
            depth,
            cached_h: Cell::new(None),
        }
    }

    /// Evaluates `h` on this node's state, caching the result so the
    /// heuristic runs at most once per node object.
    pub fn heuristic_with(&self, h: impl FnOnce(&S) -> f32) -> f32 {
        if let Some(value) = self.cached_h.get() {
            return value;
        }
        let value = h(&self.state);
        self.cached_h.set(Some(value));
        value
    }
}

impl<S: PartialEq, A> PartialEq for Node<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for Node<S, A> {}

impl<S: Hash, A> Hash for Node<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

/// Owns every node created during one search invocation.
///
/// Nodes are appended and never removed; handles are plain indices into the
/// backing vector and stay valid for the arena's lifetime.
#[derive(Debug, Clone, Default)]
pub struct NodeArena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S: Clone, A: Clone> NodeArena<S, A> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a root node (depth 0, no parent, no action) and returns its
    /// handle.
    pub fn push_root(&mut self, state: S) -> usize {
        self.nodes.push(Node::new(state, None, None, 0.0, 0));
        self.nodes.len() - 1
    }

    pub fn get(&self, id: usize) -> &Node<S, A> {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Generates one child of `parent` per action available in its state,
    /// computing each child's cumulative cost via the problem's cost
    /// function. Returns the handles of the new children.
    pub fn expand<P>(&mut self, parent: usize, problem: &P) -> Vec<usize>
    where
        P: SearchProblem<State = S, Action = A>,
    {
        let actions = problem.actions(&self.nodes[parent].state);
        actions
            .into_iter()
            .map(|action| self.child(parent, action, problem))
            .collect()
    }

    /// Creates a single child of `parent` reached by `action`.
    pub fn child<P>(&mut self, parent: usize, action: A, problem: &P) -> usize
    where
        P: SearchProblem<State = S, Action = A>,
    {
        let (state, cost, depth) = {
            let p = &self.nodes[parent];
            (p.state.clone(), p.path_cost, p.depth)
        };
        let next = problem.result(&state, &action);
        let next_cost = problem.step_cost(cost, &state, &action, &next);
        self.nodes
            .push(Node::new(next, Some(parent), Some(action), next_cost, depth + 1));
        self.nodes.len() - 1
    }

    /// The ordered sequence of states from the root to `id`, inclusive.
    pub fn path_states(&self, id: usize) -> Vec<S> {
        let mut back = Vec::new();
        let mut current = Some(id);
        while let Some(i) = current {
            back.push(self.nodes[i].state.clone());
            current = self.nodes[i].parent;
        }
        back.reverse();
        back
    }

    /// The action sequence from the root to `id`, discarding the root's
    /// placeholder.
    pub fn solution_actions(&self, id: usize) -> Vec<A> {
        let mut back = Vec::new();
        let mut current = Some(id);
        while let Some(i) = current {
            if let Some(action) = &self.nodes[i].action {
                back.push(action.clone());
            }
            current = self.nodes[i].parent;
        }
        back.reverse();
        back
    }
}
