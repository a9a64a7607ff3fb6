//! Property-based tests for the graph algorithms and the route optimizer.
//!
//! # Invariants tested
//!
//! - **Traversal agreement:** DFS and BFS visit the same vertices, each once.
//! - **Source distance:** the source is at distance 0 with no predecessor.
//! - **Triangle inequality:** no edge can shorten a finalized distance.
//! - **Idempotence:** repeated runs on the same graph give identical maps.
//! - **Path round-trip:** reconstructed paths start at the source, end at the
//!   target, and their edge weights sum to the reported distance.
//! - **Optimality:** `plan_route` matches a brute-force search over orderings.

use std::collections::HashSet;

use delivery_planner::{
    breadth_first, depth_first, plan_route, plan_route_parallel, reconstruct_path,
    shortest_distance, shortest_paths, Distance, WeightedGraph,
};
use proptest::prelude::*;

fn graph_strategy() -> impl Strategy<Value = WeightedGraph<u8>> {
    (
        prop::collection::vec((0u8..8, 0u8..8, 0u64..20), 1..24),
        any::<bool>(),
    )
        .prop_map(|(edges, directed)| WeightedGraph::from_edges(edges, directed))
}

fn stops_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::subsequence((0u8..8).collect::<Vec<_>>(), 0..=4).prop_shuffle()
}

/// Cheapest closed tour found by trying every ordering recursively
fn brute_force_tour(graph: &WeightedGraph<u8>, depot: u8, stops: &[u8]) -> Distance {
    fn search(
        graph: &WeightedGraph<u8>,
        depot: u8,
        current: u8,
        remaining: &mut Vec<u8>,
        so_far: Distance,
    ) -> Distance {
        if remaining.is_empty() {
            return so_far + shortest_distance(graph, &current, &depot).1;
        }

        let mut best = Distance::Unreachable;
        for i in 0..remaining.len() {
            let next = remaining.remove(i);
            let leg = shortest_distance(graph, &current, &next).1;
            if leg.is_finite() {
                best = best.min(search(graph, depot, next, remaining, so_far + leg));
            }
            remaining.insert(i, next);
        }
        best
    }

    search(graph, depot, depot, &mut stops.to_vec(), Distance::ZERO)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn traversals_visit_same_vertices_once(graph in graph_strategy(), start in 0u8..8) {
        let dfs = depth_first(&graph, &start);
        let bfs = breadth_first(&graph, &start);

        let dfs_set: HashSet<u8> = dfs.iter().copied().collect();
        let bfs_set: HashSet<u8> = bfs.iter().copied().collect();
        prop_assert_eq!(dfs_set.len(), dfs.len());
        prop_assert_eq!(bfs_set.len(), bfs.len());
        prop_assert_eq!(dfs_set, bfs_set);
        prop_assert_eq!(dfs.first(), Some(&start));
        prop_assert_eq!(bfs.first(), Some(&start));
    }

    #[test]
    fn source_is_at_distance_zero(graph in graph_strategy(), start in 0u8..8) {
        prop_assume!(graph.contains(&start));
        let result = shortest_paths(&graph, &start);

        prop_assert_eq!(result.distance_to(&start), Distance::ZERO);
        prop_assert_eq!(result.predecessors.get(&start), Some(&None));
    }

    #[test]
    fn distances_satisfy_triangle_inequality(graph in graph_strategy(), start in 0u8..8) {
        let result = shortest_paths(&graph, &start);

        for vertex in graph.vertices() {
            let from = result.distance_to(vertex);
            if !from.is_finite() {
                continue;
            }
            for (neighbor, weight) in graph.neighbors(vertex) {
                prop_assert!(result.distance_to(neighbor) <= from.extend(*weight));
            }
        }
    }

    #[test]
    fn shortest_paths_are_idempotent(graph in graph_strategy(), start in 0u8..8) {
        prop_assert_eq!(shortest_paths(&graph, &start), shortest_paths(&graph, &start));
    }

    #[test]
    fn reconstructed_paths_match_distances(graph in graph_strategy(), start in 0u8..8) {
        let result = shortest_paths(&graph, &start);

        for vertex in graph.vertices() {
            let path = reconstruct_path(&result.predecessors, &start, vertex);
            match result.distance_to(vertex) {
                Distance::Finite(distance) => {
                    let path = path.expect("finite distance has a path");
                    prop_assert_eq!(path.first(), Some(&start));
                    prop_assert_eq!(path.last(), Some(vertex));

                    let mut total = 0;
                    for pair in path.windows(2) {
                        let weight = graph.edge_weight(&pair[0], &pair[1]);
                        prop_assert!(weight.is_some());
                        total += weight.unwrap_or_default();
                    }
                    prop_assert_eq!(total, distance);
                }
                Distance::Unreachable => prop_assert!(path.is_none()),
            }
        }
    }

    #[test]
    fn plan_route_is_optimal(graph in graph_strategy(), depot in 0u8..8, stops in stops_strategy()) {
        prop_assume!(!stops.contains(&depot));
        let route = plan_route(&graph, &depot, &stops);

        prop_assert_eq!(route.total, brute_force_tour(&graph, depot, &stops));
        prop_assert_eq!(&route, &plan_route_parallel(&graph, &depot, &stops));

        if route.is_feasible() {
            let legs: Distance = route
                .legs()
                .map(|(from, to)| shortest_distance(&graph, from, to).1)
                .sum();
            prop_assert_eq!(legs, route.total);

            let mut visited = route.stops().to_vec();
            let mut expected = stops.clone();
            visited.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(visited, expected);
            prop_assert_eq!(route.tour.first(), Some(&depot));
            prop_assert_eq!(route.tour.last(), Some(&depot));
        } else {
            prop_assert!(route.tour.is_empty());
        }
    }
}
