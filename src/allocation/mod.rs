pub mod cluster;
pub mod dispatch;
pub mod nearest;
pub mod planner;

pub use cluster::{cluster_locations, LocationCluster};
pub use dispatch::{assign_volunteer, dispatch_team};
pub use nearest::{nearest_candidate, select_nearest};
pub use planner::{AllocationBatch, AllocationPlanner};
