//! Distance and danger/priority heuristics. Everything here is pure; the
//! current time is always passed in.

pub mod danger;
pub mod distance;
pub mod priority;

pub use danger::calculate_danger_score;
pub use distance::{calculate_distance, estimate_travel_time, TravelEstimate, VehicleKind};
pub use priority::{calculate_priority_score, province_bonus};

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::models::{Coordinates, DistanceBreakdown, ReliefLocation};

/// Fill the computed fields of a location: danger, priority and the
/// distance breakdown from headquarters.
pub fn assess_location(location: &mut ReliefLocation, hq: Coordinates, now: DateTime<Utc>) {
    let danger = calculate_danger_score(location, now);
    let priority = calculate_priority_score(location, danger);
    let straight_line_km = calculate_distance(hq, location.coordinates);

    let by_vehicle: BTreeMap<VehicleKind, TravelEstimate> = VehicleKind::ALL
        .iter()
        .map(|kind| (*kind, estimate_travel_time(straight_line_km, *kind)))
        .collect();

    location.danger_score = Some(danger);
    location.priority_score = Some(priority);
    location.distance_from_hq = Some(DistanceBreakdown {
        straight_line_km,
        by_vehicle,
    });
}

pub fn assess_all(locations: &mut [ReliefLocation], hq: Coordinates, now: DateTime<Utc>) {
    for location in locations.iter_mut() {
        assess_location(location, hq, now);
    }
}
