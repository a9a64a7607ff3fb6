// Edge model representing a weighted connection between two locations

use crate::models::Weight;
use serde::{Deserialize, Serialize};

/// A weighted connection read from the edge list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<V> {
    /// Location the edge leaves from
    pub origin: V,

    /// Location the edge arrives at
    pub destination: V,

    /// Travel distance, 1 when the source omits it
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

fn default_weight() -> Weight {
    1
}

impl<V> Edge<V> {
    /// Creates a new edge with the given weight
    pub fn new(origin: V, destination: V, weight: Weight) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }

    /// Creates an edge with the default weight of 1
    pub fn unweighted(origin: V, destination: V) -> Self {
        Self::new(origin, destination, default_weight())
    }
}

impl<V> From<(V, V, Weight)> for Edge<V> {
    fn from((origin, destination, weight): (V, V, Weight)) -> Self {
        Edge::new(origin, destination, weight)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((origin, destination): (V, V)) -> Self {
        Edge::unweighted(origin, destination)
    }
}
