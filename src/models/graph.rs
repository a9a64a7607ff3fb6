// Weighted location graph shared by every routing algorithm

use crate::models::{Edge, Vertex, Weight};
use std::collections::{HashMap, HashSet};

/// Weighted graph of delivery locations
///
/// Built once from an edge list and read-only afterwards. Parallel edges and
/// self-loops are kept exactly as added.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V: Vertex> {
    directed: bool,
    vertices: HashSet<V>,
    adjacency_list: HashMap<V, Vec<(V, Weight)>>, // Vertex -> [(adjacent vertex, weight)] in insertion order
    edge_count: usize,
}

impl<V: Vertex> WeightedGraph<V> {
    /// Creates an empty graph
    pub fn new(directed: bool) -> Self {
        WeightedGraph {
            directed,
            vertices: HashSet::new(),
            adjacency_list: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Builds a graph by applying every edge in input order
    ///
    /// Accepts anything convertible into an [`Edge`], so `(u, v, w)` triples and
    /// `(u, v)` pairs (weight 1) can be passed directly.
    pub fn from_edges<I, E>(edges: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        let mut graph = WeightedGraph::new(directed);
        for edge in edges {
            let Edge {
                origin,
                destination,
                weight,
            } = edge.into();
            graph.add_edge(origin, destination, weight);
        }
        graph
    }

    /// Adds an edge, registering both endpoints as vertices
    pub fn add_edge(&mut self, origin: V, destination: V, weight: Weight) {
        self.vertices.insert(origin.clone());
        self.vertices.insert(destination.clone());

        if !self.directed {
            self.adjacency_list
                .entry(destination.clone())
                .or_insert_with(Vec::new)
                .push((origin.clone(), weight));
        }

        self.adjacency_list
            .entry(origin)
            .or_insert_with(Vec::new)
            .push((destination, weight));

        self.edge_count += 1;
    }

    /// Outgoing `(neighbor, weight)` pairs of a vertex, empty for unknown vertices
    pub fn neighbors(&self, vertex: &V) -> &[(V, Weight)] {
        self.adjacency_list
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn vertices(&self) -> &HashSet<V> {
        &self.vertices
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of `add_edge` calls, so an undirected edge counts once
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Lightest edge from `origin` to `destination`, if one exists
    pub fn edge_weight(&self, origin: &V, destination: &V) -> Option<Weight> {
        self.neighbors(origin)
            .iter()
            .filter(|(neighbor, _)| neighbor == destination)
            .map(|(_, weight)| *weight)
            .min()
    }
}
