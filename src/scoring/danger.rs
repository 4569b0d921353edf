use chrono::{DateTime, Utc};

use crate::models::{Needs, ReliefLocation, Urgency};

pub const PEOPLE_CEILING: f64 = 300.0;
pub const PEOPLE_WEIGHT: f64 = 20.0;
pub const RESCUE_BONUS: f64 = 20.0;
pub const NEEDS_WEIGHT: f64 = 10.0;
pub const AGE_WEIGHT: f64 = 10.0;
pub const AGE_CEILING_HOURS: f64 = 6.0;

pub fn urgency_points(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::High => 40.0,
        Urgency::Medium => 25.0,
        Urgency::Low => 0.0,
    }
}

/// Heuristic danger in `0..=100`.
///
/// A report stamped after `now` counts as brand new.
pub fn calculate_danger_score(location: &ReliefLocation, now: DateTime<Utc>) -> u8 {
    let people = (location.people_count as f64 / PEOPLE_CEILING).min(1.0) * PEOPLE_WEIGHT;
    let rescue = if location.needs.emergency_rescue {
        RESCUE_BONUS
    } else {
        0.0
    };
    let needs = location.needs.count() as f64 / Needs::KINDS as f64 * NEEDS_WEIGHT;

    let age_hours = (now - location.reported_at).num_seconds().max(0) as f64 / 3600.0;
    let age = (age_hours / AGE_CEILING_HOURS).min(1.0) * AGE_WEIGHT;

    let score = urgency_points(location.urgency) + people + rescue + needs + age;
    score.clamp(0.0, 100.0).round() as u8
}
