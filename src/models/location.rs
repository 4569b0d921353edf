use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::AllocationError;
use crate::models::Coordinates;
use crate::scoring::{TravelEstimate, VehicleKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationStatus {
    Unassigned,
    Assigned,
    OnTheWay,
    Completed,
    Failed,
}

impl LocationStatus {
    pub fn can_transition_to(self, next: LocationStatus) -> bool {
        use LocationStatus::*;
        matches!(
            (self, next),
            (Unassigned, Assigned)
                | (Assigned, OnTheWay)
                | (Assigned, Failed)
                | (OnTheWay, Completed)
                | (OnTheWay, Failed)
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Needs {
    pub food: bool,
    pub water: bool,
    pub medicine: bool,
    pub emergency_rescue: bool,
}

impl Needs {
    pub const KINDS: usize = 4;

    pub fn count(&self) -> usize {
        [self.food, self.water, self.medicine, self.emergency_rescue]
            .iter()
            .filter(|flag| **flag)
            .count()
    }
}

/// Distance from headquarters with a travel estimate per vehicle kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceBreakdown {
    pub straight_line_km: f64,
    pub by_vehicle: BTreeMap<VehicleKind, TravelEstimate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliefLocation {
    pub id: String,
    pub name: String,
    pub province: String,
    pub coordinates: Coordinates,
    pub urgency: Urgency,
    pub people_count: u32,
    pub needs: Needs,
    pub status: LocationStatus,
    pub reported_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_hq: Option<DistanceBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_team: Option<String>,
}

impl ReliefLocation {
    pub fn advance_status(&mut self, next: LocationStatus) -> Result<(), AllocationError> {
        if !self.status.can_transition_to(next) {
            return Err(AllocationError::InvalidTransition {
                location_id: self.id.clone(),
                from: self.status,
                to: next,
            });
        }
        tracing::debug!(location = %self.id, from = ?self.status, to = ?next, "location status changed");
        self.status = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states_do_not_move() {
        for next in [
            LocationStatus::Unassigned,
            LocationStatus::Assigned,
            LocationStatus::OnTheWay,
            LocationStatus::Completed,
            LocationStatus::Failed,
        ] {
            assert!(!LocationStatus::Completed.can_transition_to(next));
            assert!(!LocationStatus::Failed.can_transition_to(next));
        }
    }

    #[test]
    fn unassigned_cannot_skip_to_completed() {
        assert!(!LocationStatus::Unassigned.can_transition_to(LocationStatus::Completed));
        assert!(LocationStatus::Unassigned.can_transition_to(LocationStatus::Assigned));
    }

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&LocationStatus::OnTheWay).unwrap();
        assert_eq!(json, "\"on-the-way\"");
    }

    #[test]
    fn needs_count() {
        let needs = Needs {
            food: true,
            water: false,
            medicine: true,
            emergency_rescue: false,
        };
        assert_eq!(needs.count(), 2);
    }
}
