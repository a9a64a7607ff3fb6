use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, instrument, warn};

use crate::algorithms::shortest_path::{shortest_paths, ShortestPaths};
use crate::algorithms::TourSolver;
use crate::models::{Distance, Route, TourCandidate, Vertex, WeightedGraph};

/// Lazy lexicographic enumeration of index orderings
///
/// Yields every permutation of `0..n` exactly once, starting from the identity,
/// so `n` positions produce `n!` orderings (one empty ordering for `n = 0`).
/// Clone it or call [`Permutations::reset`] to enumerate again.
#[derive(Debug, Clone)]
pub struct Permutations {
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Permutations {
            indices: (0..n).collect(),
            started: false,
            exhausted: false,
        }
    }

    /// Restarts the enumeration from the identity ordering
    pub fn reset(&mut self) {
        self.indices.sort_unstable();
        self.started = false;
        self.exhausted = false;
    }

    /// Advances `indices` to the next lexicographic ordering in place
    fn advance(&mut self) -> bool {
        let n = self.indices.len();
        if n < 2 {
            return false;
        }

        let mut i = n - 1;
        while i > 0 && self.indices[i - 1] >= self.indices[i] {
            i -= 1;
        }
        if i == 0 {
            return false;
        }

        let pivot = i - 1;
        let mut j = n - 1;
        while self.indices[j] <= self.indices[pivot] {
            j -= 1;
        }
        self.indices.swap(pivot, j);
        self.indices[i..].reverse();
        true
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }
        if self.advance() {
            Some(self.indices.clone())
        } else {
            self.exhausted = true;
            None
        }
    }
}

/// Number of orderings of `n` stops, `None` if it overflows `usize`
pub fn permutation_count(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// Shortest distances between every pair of route terminals
///
/// Holds one Dijkstra result per terminal (the depot and each stop), so every
/// leg lookup during the permutation search is a map access.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<V: Vertex> {
    rows: HashMap<V, ShortestPaths<V>>,
}

impl<V: Vertex> DistanceMatrix<V> {
    /// Runs one shortest-path search per distinct terminal
    pub fn build<'a, I>(graph: &WeightedGraph<V>, terminals: I, parallel: bool) -> Self
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut sources: Vec<&V> = Vec::new();
        for terminal in terminals {
            if !sources.contains(&terminal) {
                sources.push(terminal);
            }
        }

        let rows: HashMap<V, ShortestPaths<V>> = if parallel {
            sources
                .par_iter()
                .map(|source| ((*source).clone(), shortest_paths(graph, source)))
                .collect()
        } else {
            sources
                .iter()
                .map(|source| ((*source).clone(), shortest_paths(graph, source)))
                .collect()
        };

        DistanceMatrix { rows }
    }

    /// Shortest distance of the leg `from -> to`
    pub fn distance(&self, from: &V, to: &V) -> Distance {
        match self.rows.get(from) {
            Some(row) => row.distance_to(to),
            None => {
                warn!("{:?} is not a terminal of this distance matrix", from);
                Distance::Unreachable
            }
        }
    }

    /// Shortest path of the leg `from -> to`, both ends included
    pub fn path(&self, from: &V, to: &V) -> Option<Vec<V>> {
        self.rows.get(from).and_then(|row| row.path_to(to))
    }

    pub fn terminal_count(&self) -> usize {
        self.rows.len()
    }
}

/// Shortest path and its cost between two locations
///
/// Returns `(None, Distance::Unreachable)` when `end` cannot be reached.
pub fn shortest_distance<V: Vertex>(
    graph: &WeightedGraph<V>,
    start: &V,
    end: &V,
) -> (Option<Vec<V>>, Distance) {
    let result = shortest_paths(graph, start);
    match result.path_to(end) {
        Some(path) => (Some(path), result.distance_to(end)),
        None => (None, Distance::Unreachable),
    }
}

/// Exact route optimizer trying every ordering of the stops
///
/// The search space grows with the factorial of the stop count, so this is
/// only meant for a handful of stops.
#[derive(Debug, Clone)]
pub struct ExhaustiveSolver<'g, V: Vertex> {
    graph: &'g WeightedGraph<V>,
    parallel: bool,
}

impl<'g, V: Vertex> ExhaustiveSolver<'g, V> {
    /// Creates a sequential solver
    pub fn new(graph: &'g WeightedGraph<V>) -> Self {
        ExhaustiveSolver {
            graph,
            parallel: false,
        }
    }

    /// Evaluates orderings on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn graph(&self) -> &'g WeightedGraph<V> {
        self.graph
    }

    /// Distance matrix over the depot and every stop
    pub fn distance_matrix(&self, depot: &V, stops: &[V]) -> DistanceMatrix<V> {
        DistanceMatrix::build(
            self.graph,
            std::iter::once(depot).chain(stops.iter()),
            self.parallel,
        )
    }

    /// Searches every ordering of `stops` using precomputed leg distances
    ///
    /// Orderings with an unreachable leg are discarded. Among the rest the
    /// strictly cheapest wins, ties going to the earliest ordering.
    #[instrument(level = "debug", skip_all, fields(stops = stops.len(), parallel = self.parallel))]
    pub fn search(&self, matrix: &DistanceMatrix<V>, depot: &V, stops: &[V]) -> Route<V> {
        match permutation_count(stops.len()) {
            Some(count) => debug!("evaluating {} stop orderings", count),
            None => warn!("stop orderings exceed usize for {} stops", stops.len()),
        }

        let best = if self.parallel {
            Permutations::new(stops.len())
                .enumerate()
                .par_bridge()
                .filter_map(|(index, order)| evaluate_tour(matrix, depot, stops, index, order))
                .min()
        } else {
            let mut best: Option<TourCandidate> = None;
            for (index, order) in Permutations::new(stops.len()).enumerate() {
                if let Some(candidate) = evaluate_tour(matrix, depot, stops, index, order) {
                    let improves = match &best {
                        Some(current) => candidate.total < current.total,
                        None => true,
                    };
                    if improves {
                        best = Some(candidate);
                    }
                }
            }
            best
        };

        match best {
            Some(candidate) => {
                debug!(
                    "best ordering #{} costs {}",
                    candidate.index, candidate.total
                );
                let mut tour = Vec::with_capacity(stops.len() + 2);
                tour.push(depot.clone());
                tour.extend(candidate.order.iter().map(|&stop| stops[stop].clone()));
                tour.push(depot.clone());
                Route::new(tour, candidate.total)
            }
            None => {
                warn!("no stop ordering closes the tour from {:?}", depot);
                Route::infeasible()
            }
        }
    }
}

impl<'g, V: Vertex> TourSolver<V> for ExhaustiveSolver<'g, V> {
    fn solve(&self, depot: &V, stops: &[V]) -> Route<V> {
        let matrix = self.distance_matrix(depot, stops);
        self.search(&matrix, depot, stops)
    }

    fn tour_cost(&self, tour: &[V]) -> Distance {
        let matrix = DistanceMatrix::build(self.graph, tour.iter(), self.parallel);
        tour.windows(2)
            .map(|leg| matrix.distance(&leg[0], &leg[1]))
            .sum()
    }
}

/// Total of the closed tour for one ordering, `None` if a leg is unreachable
fn evaluate_tour<V: Vertex>(
    matrix: &DistanceMatrix<V>,
    depot: &V,
    stops: &[V],
    index: usize,
    order: Vec<usize>,
) -> Option<TourCandidate> {
    let mut total = Distance::ZERO;
    let mut previous = depot;

    for &stop in &order {
        let leg = matrix.distance(previous, &stops[stop]);
        if !leg.is_finite() {
            return None;
        }
        total = total + leg;
        previous = &stops[stop];
    }

    let back = matrix.distance(previous, depot);
    if !back.is_finite() {
        return None;
    }

    Some(TourCandidate {
        index,
        order,
        total: total + back,
    })
}

/// Cheapest closed tour from `depot` through every stop, evaluated sequentially
///
/// Callers are expected to have checked reachability first; if no ordering is
/// feasible the route is empty with an unreachable total.
pub fn plan_route<V: Vertex>(graph: &WeightedGraph<V>, depot: &V, stops: &[V]) -> Route<V> {
    ExhaustiveSolver::new(graph).solve(depot, stops)
}

/// Same as [`plan_route`] with orderings evaluated in parallel
pub fn plan_route_parallel<V: Vertex>(graph: &WeightedGraph<V>, depot: &V, stops: &[V]) -> Route<V> {
    ExhaustiveSolver::new(graph).with_parallel(true).solve(depot, stops)
}
