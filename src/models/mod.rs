// Models module - exports all model types

mod distance;
mod edge;
mod graph;
mod route;

// Re-export model types
pub use self::distance::Distance;
pub use self::edge::Edge;
pub use self::graph::WeightedGraph;
pub use self::route::{DeliveryPlan, Route, RouteLeg};
pub(crate) use self::route::TourCandidate;

use std::fmt::Debug;
use std::hash::Hash;

// Common type aliases for improved code readability
pub type Weight = u64;

/// Location identifier stored in a [`WeightedGraph`]
///
/// Blanket-implemented for every type that is cheap enough to clone, hashable,
/// and shareable across the rayon pool, so `String`, `&str` and integer ids
/// all work out of the box.
pub trait Vertex: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug + Send + Sync {}
