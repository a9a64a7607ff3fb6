pub mod route_optimizer;
pub mod shortest_path;
pub mod traversal;

// Common algorithm traits
use crate::models::{Distance, Route, Vertex};

/// Trait for delivery tour solvers
pub trait TourSolver<V: Vertex> {
    /// Find the cheapest closed tour from `depot` through every stop and back
    fn solve(&self, depot: &V, stops: &[V]) -> Route<V>;

    /// Sum of shortest distances between consecutive vertices of a tour
    fn tour_cost(&self, tour: &[V]) -> Distance;
}
