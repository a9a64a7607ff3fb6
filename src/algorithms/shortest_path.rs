// Single-source shortest paths over the location graph

use crate::models::{Distance, Vertex, Weight, WeightedGraph};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier entry for Dijkstra algorithm
#[derive(Clone, Debug)]
struct DijkstraNode<V> {
    vertex: V,
    distance: Weight,
}

impl<V> PartialEq for DijkstraNode<V> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<V> Eq for DijkstraNode<V> {}

// Implement Ord for DijkstraNode, so that nodes with smaller distances have higher priority
impl<V> Ord for DijkstraNode<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Note: This is reversed order, because we want a min-heap
        other.distance.cmp(&self.distance)
    }
}

impl<V> PartialOrd for DijkstraNode<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of one Dijkstra run, scoped to a single source vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<V: Vertex> {
    pub source: V,

    /// Finalized distance of every known vertex
    pub distances: HashMap<V, Distance>,

    /// Previous vertex on the discovered shortest path, `None` for the source
    /// and for unreachable vertices
    pub predecessors: HashMap<V, Option<V>>,
}

impl<V: Vertex> ShortestPaths<V> {
    /// Distance to `target`, `Unreachable` when unknown
    pub fn distance_to(&self, target: &V) -> Distance {
        self.distances
            .get(target)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// Shortest path from the source to `target`, both included
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Runs Dijkstra algorithm from `source` over every known vertex
///
/// The frontier admits duplicate entries instead of decreasing keys; a popped
/// entry for an already finalized vertex is stale and skipped. Relaxation uses
/// strict `<`, so among equal-cost paths the first one discovered keeps its
/// predecessor. An unknown source yields empty maps.
pub fn shortest_paths<V: Vertex>(graph: &WeightedGraph<V>, source: &V) -> ShortestPaths<V> {
    if !graph.contains(source) {
        return ShortestPaths {
            source: source.clone(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        };
    }

    let mut distances: HashMap<V, Distance> = graph
        .vertices()
        .iter()
        .map(|vertex| (vertex.clone(), Distance::Unreachable))
        .collect();
    let mut predecessors: HashMap<V, Option<V>> = graph
        .vertices()
        .iter()
        .map(|vertex| (vertex.clone(), None))
        .collect();
    let mut visited = HashSet::new();
    let mut priority_queue = BinaryHeap::new();

    // Set start vertex distance to 0 and add to queue
    distances.insert(source.clone(), Distance::ZERO);
    priority_queue.push(DijkstraNode {
        vertex: source.clone(),
        distance: 0,
    });

    while let Some(DijkstraNode { vertex, distance }) = priority_queue.pop() {
        if visited.contains(&vertex) {
            continue;
        }
        visited.insert(vertex.clone());

        for (neighbor, edge_weight) in graph.neighbors(&vertex) {
            if visited.contains(neighbor) {
                continue;
            }

            let new_distance = distance.saturating_add(*edge_weight);
            let current = distances
                .get(neighbor)
                .copied()
                .unwrap_or(Distance::Unreachable);

            if Distance::Finite(new_distance) < current {
                distances.insert(neighbor.clone(), Distance::Finite(new_distance));
                predecessors.insert(neighbor.clone(), Some(vertex.clone()));
                priority_queue.push(DijkstraNode {
                    vertex: neighbor.clone(),
                    distance: new_distance,
                });
            }
        }
    }

    ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    }
}

/// Walks the predecessor chain back from `target`
///
/// Returns the path only when the chain ends at `source`; an unknown target or
/// a chain ending anywhere else means there is no path.
pub fn reconstruct_path<V: Vertex>(
    predecessors: &HashMap<V, Option<V>>,
    source: &V,
    target: &V,
) -> Option<Vec<V>> {
    if !predecessors.contains_key(target) {
        return None;
    }

    let mut path = vec![target.clone()];
    let mut current = target;
    while let Some(Some(previous)) = predecessors.get(current) {
        // A cycle can only come from a hand-built map; bail out instead of looping.
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(previous.clone());
        current = previous;
    }

    path.reverse();
    if path.first() == Some(source) {
        Some(path)
    } else {
        None
    }
}
