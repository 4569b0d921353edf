use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::maps::RoutingProfile;
use crate::models::Coordinates;

/// Road distance and duration reported by the routing provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedDistance {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub distance_text: String,
    pub duration_text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDistance {
    pub straight_line_km: f64,
    /// Empty when routing was unavailable for the batch.
    #[serde(default)]
    pub routed: BTreeMap<RoutingProfile, RoutedDistance>,
}

impl CandidateDistance {
    pub fn straight_line(km: f64) -> Self {
        Self {
            straight_line_km: km,
            routed: BTreeMap::new(),
        }
    }

    pub fn is_routed(&self) -> bool {
        !self.routed.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerRequest {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<CandidateDistance>,
    #[serde(default)]
    pub is_nearest: bool,
}
