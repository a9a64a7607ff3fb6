// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod planner;
pub mod utils;

// Re-exports for convenience
pub use algorithms::route_optimizer::{plan_route, plan_route_parallel, shortest_distance};
pub use algorithms::traversal::{breadth_first, depth_first, is_reachable};
pub use algorithms::shortest_path::{reconstruct_path, shortest_paths};
pub use error::{PlannerError, PlannerResult};
pub use models::{DeliveryPlan, Distance, Edge, Route, RouteLeg, WeightedGraph};
pub use planner::DeliveryPlanner;
pub use utils::config::PlannerConfig;
