//! Error types raised while loading inputs and planning deliveries.
//!
//! The graph algorithms never fail; unreachable targets and infeasible tours
//! are reported through [`crate::models::Distance::Unreachable`]. These errors
//! cover the layers around them.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading inputs or planning a delivery route.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Opening or reading an input file failed.
    #[error("failed to read {path}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A line of the edge list could not be parsed.
    #[error("invalid edge on line {line}: {reason}")]
    ParseEdge {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// An edge carried a negative weight.
    #[error("negative edge weight {weight} on line {line}")]
    NegativeWeight {
        /// One-based line number.
        line: usize,
        /// Weight found in the file.
        weight: i64,
    },
    /// The JSON configuration could not be parsed.
    #[error("invalid planner configuration")]
    Config(#[from] serde_json::Error),
    /// Exhaustive search was asked for more stops than allowed.
    #[error("{requested} stops requested but exhaustive search is limited to {limit}")]
    TooManyStops {
        /// Number of stops in the request.
        requested: usize,
        /// Configured `max_stops`.
        limit: usize,
    },
    /// The depot is not a location of the graph.
    #[error("depot {depot} is not a known location")]
    UnknownDepot {
        /// Depot as given by the caller.
        depot: String,
    },
    /// Some stops cannot be reached from the depot.
    #[error("unreachable from the depot: {}", .stops.join(", "))]
    UnreachableStops {
        /// Offending stops, formatted for display.
        stops: Vec<String>,
    },
    /// Every stop ordering contains a leg with no path.
    #[error("no stop ordering yields a closed tour back to the depot")]
    InfeasibleRoute,
}

/// Convenience alias used across the crate.
pub type PlannerResult<T> = Result<T, PlannerError>;
