//! Delivery planning on top of the graph algorithms.
//!
//! [`DeliveryPlanner`] runs the checks a caller would otherwise do by hand:
//! it bounds the exhaustive search, makes sure every stop is reachable before
//! searching, and expands the winning tour into concrete legs.

use std::fmt::Display;

use tracing::{info, instrument, warn};

use crate::algorithms::route_optimizer::{shortest_distance, ExhaustiveSolver};
use crate::algorithms::traversal::unreachable_stops;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{DeliveryPlan, Distance, Edge, RouteLeg, Vertex, WeightedGraph};
use crate::utils::config::PlannerConfig;

/// Plans delivery tours over one immutable location graph
#[derive(Debug, Clone)]
pub struct DeliveryPlanner<V: Vertex> {
    graph: WeightedGraph<V>,
    config: PlannerConfig,
}

impl<V: Vertex> DeliveryPlanner<V> {
    pub fn new(graph: WeightedGraph<V>, config: PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// Builds the graph from edges, directed or not as configured
    pub fn from_edges<I, E>(edges: I, config: PlannerConfig) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        let graph = WeightedGraph::from_edges(edges, config.directed);
        Self::new(graph, config)
    }

    pub fn graph(&self) -> &WeightedGraph<V> {
        &self.graph
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Whether every stop can be reached from the depot
    pub fn check_feasibility(&self, depot: &V, stops: &[V]) -> bool {
        unreachable_stops(&self.graph, depot, stops).is_empty()
    }

    /// Shortest path and distance between two locations
    pub fn shortest_distance(&self, start: &V, end: &V) -> (Option<Vec<V>>, Distance) {
        shortest_distance(&self.graph, start, end)
    }

    /// Finds the cheapest round trip from `depot` through every stop
    #[instrument(skip_all, fields(depot = %depot, stops = stops.len()))]
    pub fn plan(&self, depot: &V, stops: &[V]) -> PlannerResult<DeliveryPlan<V>>
    where
        V: Display,
    {
        if stops.len() > self.config.max_stops {
            return Err(PlannerError::TooManyStops {
                requested: stops.len(),
                limit: self.config.max_stops,
            });
        }

        if !self.graph.contains(depot) {
            warn!("depot is not in the graph");
            return Err(PlannerError::UnknownDepot {
                depot: depot.to_string(),
            });
        }

        let missing = unreachable_stops(&self.graph, depot, stops);
        if !missing.is_empty() {
            warn!("{} stops unreachable from the depot", missing.len());
            return Err(PlannerError::UnreachableStops {
                stops: missing.iter().map(ToString::to_string).collect(),
            });
        }

        let solver = ExhaustiveSolver::new(&self.graph).with_parallel(self.config.parallel);
        let matrix = solver.distance_matrix(depot, stops);
        let route = solver.search(&matrix, depot, stops);
        if !route.is_feasible() {
            return Err(PlannerError::InfeasibleRoute);
        }

        let legs = route
            .legs()
            .map(|(from, to)| RouteLeg {
                from: from.clone(),
                to: to.clone(),
                path: matrix.path(from, to).unwrap_or_default(),
                distance: matrix.distance(from, to),
            })
            .collect();

        info!("planned {} legs, total distance {}", route.tour.len().saturating_sub(1), route.total);
        Ok(DeliveryPlan { route, legs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_planner(config: PlannerConfig) -> DeliveryPlanner<&'static str> {
        DeliveryPlanner::from_edges(
            vec![("A", "B", 4), ("B", "C", 3), ("A", "C", 10), ("X", "Y", 1)],
            config,
        )
    }

    #[test]
    fn test_plan_builds_legs() {
        let planner = create_test_planner(PlannerConfig::default());
        let plan = planner.plan(&"A", &["B", "C"]).unwrap();

        assert_eq!(plan.route.tour, vec!["A", "B", "C", "A"]);
        assert_eq!(plan.total(), Distance::Finite(14));
        assert_eq!(plan.legs.len(), 3);
        assert_eq!(plan.legs[2].path, vec!["C", "B", "A"]);
        assert_eq!(plan.legs[2].distance, Distance::Finite(7));
        assert_eq!(
            plan.legs.iter().map(|leg| leg.distance).sum::<Distance>(),
            plan.total()
        );
    }

    #[test]
    fn test_unreachable_stops_are_reported() {
        let planner = create_test_planner(PlannerConfig::default());
        let result = planner.plan(&"A", &["B", "Y", "Q"]);

        match result {
            Err(PlannerError::UnreachableStops { stops }) => {
                assert_eq!(stops, vec!["Y".to_string(), "Q".to_string()])
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!planner.check_feasibility(&"A", &["Y"]));
        assert!(planner.check_feasibility(&"A", &["B", "C"]));
    }

    #[test]
    fn test_unknown_depot_is_reported() {
        let planner = create_test_planner(PlannerConfig::default());

        for stops in [&[][..], &["B"][..]] {
            match planner.plan(&"Z", stops) {
                Err(PlannerError::UnknownDepot { depot }) => assert_eq!(depot, "Z"),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_stop_limit() {
        let config = PlannerConfig {
            max_stops: 1,
            ..PlannerConfig::default()
        };
        let planner = create_test_planner(config);

        assert!(matches!(
            planner.plan(&"A", &["B", "C"]),
            Err(PlannerError::TooManyStops {
                requested: 2,
                limit: 1
            })
        ));
    }

    #[test]
    fn test_directed_dead_end_is_infeasible() {
        let config = PlannerConfig {
            directed: true,
            ..PlannerConfig::default()
        };
        let planner = DeliveryPlanner::from_edges(vec![("A", "B", 1), ("B", "C", 1)], config);

        assert!(planner.check_feasibility(&"A", &["B", "C"]));
        assert!(matches!(
            planner.plan(&"A", &["B", "C"]),
            Err(PlannerError::InfeasibleRoute)
        ));
    }

    #[test]
    fn test_empty_stop_list() {
        let planner = create_test_planner(PlannerConfig::default());
        let plan = planner.plan(&"A", &[]).unwrap();

        assert_eq!(plan.route.tour, vec!["A", "A"]);
        assert_eq!(plan.total(), Distance::ZERO);
        assert_eq!(plan.legs[0].path, vec!["A"]);
    }

    #[test]
    fn test_parallel_config_gives_same_plan() {
        let sequential = create_test_planner(PlannerConfig::default());
        let parallel = create_test_planner(PlannerConfig {
            parallel: true,
            ..PlannerConfig::default()
        });

        assert_eq!(
            sequential.plan(&"A", &["C", "B"]).unwrap(),
            parallel.plan(&"A", &["C", "B"]).unwrap()
        );
    }
}
