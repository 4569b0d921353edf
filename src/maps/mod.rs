//! Client for the external mapping provider (routing, reverse geocoding,
//! place detail).

pub mod boundary;
pub mod client;
pub mod types;

pub use boundary::{approximate_circle, AreaBoundary};
pub use client::MapClient;
pub use types::{GeocodeResult, PlaceDetail, RouteLeg, RouteStep};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Coordinates;

/// Vehicle parameter understood by the routing endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingProfile {
    Car,
    Bike,
    Foot,
}

impl RoutingProfile {
    pub const ALL: [RoutingProfile; 3] = [RoutingProfile::Car, RoutingProfile::Bike, RoutingProfile::Foot];

    pub fn as_str(self) -> &'static str {
        match self {
            RoutingProfile::Car => "car",
            RoutingProfile::Bike => "bike",
            RoutingProfile::Foot => "foot",
        }
    }
}

impl fmt::Display for RoutingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can answer "route from A to B for this profile".
///
/// Implementations fail silently: `None` means no route, whatever the cause.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        profile: RoutingProfile,
    ) -> Option<RouteLeg>;
}
