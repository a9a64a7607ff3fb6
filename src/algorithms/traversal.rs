// Graph traversal used for reachability checks

use crate::models::{Vertex, WeightedGraph};
use std::collections::{HashSet, VecDeque};

/// Visitation state threaded through a traversal
///
/// Owning the visited set here lets several traversals share it explicitly,
/// e.g. to collect every vertex reachable from a group of start vertices.
#[derive(Debug, Clone)]
pub struct TraversalState<V: Vertex> {
    visited: HashSet<V>,
    order: Vec<V>,
}

impl<V: Vertex> Default for TraversalState<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> TraversalState<V> {
    pub fn new() -> Self {
        TraversalState {
            visited: HashSet::new(),
            order: Vec::new(),
        }
    }

    pub fn is_visited(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }

    /// Vertices in discovery order
    pub fn order(&self) -> &[V] {
        &self.order
    }

    pub fn into_order(self) -> Vec<V> {
        self.order
    }

    /// Marks a vertex visited; returns false if it already was
    fn mark(&mut self, vertex: &V) -> bool {
        if self.visited.contains(vertex) {
            return false;
        }
        self.visited.insert(vertex.clone());
        self.order.push(vertex.clone());
        true
    }

    /// Depth-first preorder from `start`, skipping already visited vertices
    ///
    /// Each stack frame keeps a cursor into its adjacency list, which yields the
    /// same order as the recursive formulation without growing the call stack.
    pub fn depth_first_from(&mut self, graph: &WeightedGraph<V>, start: &V) {
        if !self.mark(start) {
            return;
        }

        let mut stack: Vec<(V, usize)> = vec![(start.clone(), 0)];
        while let Some(frame) = stack.last_mut() {
            let next = graph.neighbors(&frame.0).get(frame.1);
            frame.1 += 1;

            match next {
                Some((neighbor, _)) => {
                    if self.mark(neighbor) {
                        stack.push((neighbor.clone(), 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// Level-order traversal from `start`, marking vertices when enqueued
    pub fn breadth_first_from(&mut self, graph: &WeightedGraph<V>, start: &V) {
        if !self.mark(start) {
            return;
        }

        let mut queue = VecDeque::from([start.clone()]);
        while let Some(vertex) = queue.pop_front() {
            for (neighbor, _) in graph.neighbors(&vertex) {
                if self.mark(neighbor) {
                    queue.push_back(neighbor.clone());
                }
            }
        }
    }
}

/// Vertices reachable from `start` in depth-first preorder
pub fn depth_first<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Vec<V> {
    let mut state = TraversalState::new();
    state.depth_first_from(graph, start);
    state.into_order()
}

/// Vertices reachable from `start` in breadth-first order
pub fn breadth_first<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Vec<V> {
    let mut state = TraversalState::new();
    state.breadth_first_from(graph, start);
    state.into_order()
}

/// Whether `end` can be reached from `start`
pub fn is_reachable<V: Vertex>(graph: &WeightedGraph<V>, start: &V, end: &V) -> bool {
    depth_first(graph, start).contains(end)
}

/// Stops that cannot be reached from the depot, in input order
///
/// Runs a single traversal instead of one [`is_reachable`] call per stop.
pub fn unreachable_stops<V: Vertex>(graph: &WeightedGraph<V>, depot: &V, stops: &[V]) -> Vec<V> {
    let mut state = TraversalState::new();
    state.depth_first_from(graph, depot);

    stops
        .iter()
        .filter(|stop| !state.is_visited(stop))
        .cloned()
        .collect()
}
