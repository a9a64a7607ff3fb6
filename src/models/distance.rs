// Distance model replacing the floating-point infinity sentinel

use crate::models::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Shortest-path distance between two vertices
///
/// Variant order matters: the derived `Ord` places every `Finite` value before
/// `Unreachable`, so comparisons behave like integers with a positive infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// Total weight of a discovered path
    Finite(Weight),

    /// No path exists
    Unreachable,
}

impl Distance {
    /// Distance from a vertex to itself
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, if any
    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(value) => Some(*value),
            Distance::Unreachable => None,
        }
    }

    /// Extends this distance by one edge of the given weight
    pub fn extend(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(value) => Distance::Finite(value.saturating_add(weight)),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::Unreachable
    }
}

impl From<Weight> for Distance {
    fn from(value: Weight) -> Self {
        Distance::Finite(value)
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        match rhs {
            Distance::Finite(weight) => self.extend(weight),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Distance {
        iter.fold(Distance::ZERO, |acc, leg| acc + leg)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{}", value),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}
