use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::node::NodeId;

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    priority: f64,
    tie_break: f64,
    sequence: u64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

// BinaryHeap is a max-heap, so every key is reversed: the smallest priority,
// then the smallest tie break, then the oldest entry is popped first.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.tie_break.total_cmp(&self.tie_break))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of search nodes.
///
/// Entries with equal keys come out in insertion order, so a search over a
/// given problem always expands nodes in the same order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    sequence: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, priority: f64) {
        self.push_with_tie_break(node, priority, 0.0);
    }

    /// Push with a secondary key compared only when priorities are equal.
    pub fn push_with_tie_break(&mut self, node: NodeId, priority: f64, tie_break: f64) {
        self.heap.push(FrontierEntry {
            priority,
            tie_break,
            sequence: self.sequence,
            node,
        });
        self.sequence += 1;
    }

    /// Remove the lowest entry, returning its node and priority.
    pub fn pop(&mut self) -> Option<(NodeId, f64)> {
        self.heap.pop().map(|entry| (entry.node, entry.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Lowest cost at which each state has been finalized.
///
/// A state is only finalized again at a strictly lower cost, so the recorded
/// cost of a state never increases.
#[derive(Debug)]
pub struct FinalizedCosts<S> {
    costs: HashMap<S, f64>,
}

impl<S: Eq + Hash> FinalizedCosts<S> {
    pub fn new() -> Self {
        FinalizedCosts {
            costs: HashMap::new(),
        }
    }

    /// True when `state` was already finalized at `cost` or lower.
    pub fn is_stale(&self, state: &S, cost: f64) -> bool {
        self.costs.get(state).is_some_and(|&best| best <= cost)
    }

    /// Record `cost` for `state`, returning the cost it replaced. Callers must
    /// check [`FinalizedCosts::is_stale`] first.
    pub fn finalize(&mut self, state: S, cost: f64) -> Option<f64> {
        let previous = self.costs.insert(state, cost);
        debug_assert!(previous.map_or(true, |previous| cost < previous));
        previous
    }

    pub fn get(&self, state: &S) -> Option<f64> {
        self.costs.get(state).copied()
    }
}

impl<S: Eq + Hash> Default for FinalizedCosts<S> {
    fn default() -> Self {
        Self::new()
    }
}
