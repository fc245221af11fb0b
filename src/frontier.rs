//! Priority frontier for best-first search.
//!
//! A binary-heap-backed structure ordered by a caller-supplied evaluation
//! value, configurable for ascending ("min", used by uniform-cost and A*) or
//! descending ("max") order via sign negation at insertion. Each entry
//! carries an ever-increasing sequence number used purely as a deterministic
//! tie-break when priorities are equal, since states carry no total order of
//! their own.
//!
//! Membership tests and removal are O(n) scans. State cardinality in the
//! intended workloads (road networks, small grids) is small enough that an
//! auxiliary state-to-position index is not warranted; a larger deployment
//! could add one to make removal O(log n).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Whether the best entry is the one with the lowest or the highest
/// priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Min,
    Max,
}

/// One frontier entry. `priority` is stored sign-adjusted so that a smaller
/// stored value is always better regardless of [`Order`].
#[derive(Debug, Clone)]
struct Entry<S> {
    priority: f32,
    seq: u64,
    node: usize,
    state: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Evaluation-ordered frontier over arena node handles.
///
/// The structure itself allows duplicate entries for one state: resolving
/// duplicates (via [`Frontier::remove`] followed by [`Frontier::insert`],
/// i.e. decrease-key) is the engine's job, and the engine maintains the
/// invariant of at most one live entry per state.
#[derive(Debug)]
pub struct Frontier<S> {
    heap: BinaryHeap<Reverse<Entry<S>>>,
    order: Order,
    seq: u64,
    high_water: usize,
}

impl<S: Eq> Frontier<S> {
    pub fn new(order: Order) -> Self {
        Self {
            heap: BinaryHeap::new(),
            order,
            seq: 0,
            high_water: 0,
        }
    }

    fn stored_priority(&self, priority: f32) -> f32 {
        match self.order {
            Order::Min => priority,
            Order::Max => -priority,
        }
    }

    /// Inserts a node handle under the given priority. O(log n). Always
    /// allowed, even for a state that already has an entry.
    pub fn insert(&mut self, priority: f32, node: usize, state: S) {
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            priority: self.stored_priority(priority),
            seq: self.seq,
            node,
            state,
        }));
        if self.heap.len() > self.high_water {
            self.high_water = self.heap.len();
        }
    }

    /// Removes and returns the best entry's node handle, or `None` if the
    /// frontier is empty.
    pub fn pop_best(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    /// Whether any live entry holds `state`. O(n).
    pub fn contains(&self, state: &S) -> bool {
        self.heap.iter().any(|Reverse(entry)| &entry.state == state)
    }

    /// The currently stored priority for `state`, if it has an entry.
    pub fn priority_of(&self, state: &S) -> Option<f32> {
        self.heap
            .iter()
            .find(|Reverse(entry)| &entry.state == state)
            .map(|Reverse(entry)| match self.order {
                Order::Min => entry.priority,
                Order::Max => -entry.priority,
            })
    }

    /// Removes the first entry holding `state` and restores the heap
    /// invariant. Returns whether an entry was removed. O(n) rebuild.
    pub fn remove(&mut self, state: &S) -> bool {
        let mut entries: Vec<Entry<S>> = std::mem::take(&mut self.heap)
            .into_iter()
            .map(|Reverse(entry)| entry)
            .collect();
        let removed = match entries.iter().position(|entry| &entry.state == state) {
            Some(i) => {
                entries.remove(i);
                true
            }
            None => false,
        };
        self.heap = entries.into_iter().map(Reverse).collect();
        removed
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The maximum number of live entries observed over this frontier's
    /// lifetime. Never decreases on pop.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
