pub mod geo;
pub mod inventory;
pub mod location;
pub mod team;
pub mod volunteer;

pub use geo::Coordinates;
pub use inventory::{InventoryItem, InventoryStatus, NewInventoryItem};
pub use location::{
    DistanceBreakdown, LocationStatus, Needs, ReliefLocation, Urgency,
};
pub use team::{Team, TeamStatus};
pub use volunteer::{CandidateDistance, RoutedDistance, VolunteerRequest};
