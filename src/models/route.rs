// Route models for representing delivery tours

use crate::models::{Distance, Vertex};
use serde::Serialize;
use std::cmp::Ordering;

/// A closed delivery tour starting and ending at the depot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<V> {
    /// Depot, every stop exactly once, depot again. Empty when infeasible
    pub tour: Vec<V>,

    /// Sum of the shortest distances of all legs
    pub total: Distance,
}

impl<V: Vertex> Route<V> {
    /// Creates a new route
    pub fn new(tour: Vec<V>, total: Distance) -> Self {
        Self { tour, total }
    }

    /// Route returned when no stop ordering can be completed
    pub fn infeasible() -> Self {
        Self::new(Vec::new(), Distance::Unreachable)
    }

    pub fn is_feasible(&self) -> bool {
        self.total.is_finite()
    }

    /// Consecutive `(from, to)` pairs of the tour
    pub fn legs(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.tour.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Stops in visiting order, without the depot at either end
    pub fn stops(&self) -> &[V] {
        if self.tour.len() < 2 {
            return &[];
        }
        &self.tour[1..self.tour.len() - 1]
    }
}

/// One leg of a planned route with its concrete shortest path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteLeg<V> {
    pub from: V,
    pub to: V,

    /// Vertices walked from `from` to `to`, both included
    pub path: Vec<V>,

    pub distance: Distance,
}

/// Complete answer handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryPlan<V> {
    pub route: Route<V>,
    pub legs: Vec<RouteLeg<V>>,
}

impl<V> DeliveryPlan<V> {
    pub fn total(&self) -> Distance {
        self.route.total
    }
}

/// Evaluated stop ordering competing for the best tour
///
/// Ordered by total first and enumeration index second, so the minimum is the
/// first-found cheapest ordering no matter which thread evaluated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TourCandidate {
    /// Position of the ordering in the permutation sequence
    pub index: usize,

    /// Stop indices in visiting order
    pub order: Vec<usize>,

    pub total: Distance,
}

impl PartialOrd for TourCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TourCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total
            .cmp(&other.total)
            .then_with(|| self.index.cmp(&other.index))
    }
}
