// Planner configuration loaded from JSON

use crate::error::{PlannerError, PlannerResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest stop count searched exhaustively unless configured otherwise
pub const DEFAULT_MAX_STOPS: usize = 10;

/// Settings shared by the planner and the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Treat every edge as one-way
    pub directed: bool,

    /// Evaluate stop orderings on the rayon thread pool
    pub parallel: bool,

    /// Reject requests with more stops than this
    pub max_stops: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            directed: false,
            parallel: false,
            max_stops: DEFAULT_MAX_STOPS,
        }
    }
}

impl PlannerConfig {
    /// Parses a configuration from a JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> PlannerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> PlannerResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Loads the file if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> PlannerResult<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }
}
