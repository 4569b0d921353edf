use serde::Serialize;

use crate::models::{Coordinates, ReliefLocation, Urgency};
use crate::scoring::calculate_distance;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCluster {
    pub id: String,
    /// The location that founded the cluster.
    pub seed: Coordinates,
    pub center: Coordinates,
    pub location_ids: Vec<String>,
    pub total_people: u32,
    pub max_danger: u8,
    pub mean_priority: f64,
    pub highest_urgency: Urgency,
}

struct Builder<'a> {
    seed: Coordinates,
    members: Vec<&'a ReliefLocation>,
}

/// Greedy radius clustering.
///
/// Locations are visited by descending priority (unscored locations count
/// as zero, ties keep input order). Each one joins the first cluster whose
/// seed is within `radius_km`, otherwise it seeds a new cluster.
pub fn cluster_locations(locations: &[ReliefLocation], radius_km: f64) -> Vec<LocationCluster> {
    let mut order: Vec<&ReliefLocation> = locations.iter().collect();
    order.sort_by(|a, b| b.priority_score.unwrap_or(0).cmp(&a.priority_score.unwrap_or(0)));

    let mut builders: Vec<Builder<'_>> = Vec::new();
    for location in order {
        let home = builders
            .iter_mut()
            .find(|b| calculate_distance(b.seed, location.coordinates) <= radius_km);
        match home {
            Some(builder) => builder.members.push(location),
            None => builders.push(Builder {
                seed: location.coordinates,
                members: vec![location],
            }),
        }
    }

    builders
        .into_iter()
        .enumerate()
        .map(|(idx, b)| summarize(idx + 1, b))
        .collect()
}

fn summarize(number: usize, builder: Builder<'_>) -> LocationCluster {
    let points: Vec<Coordinates> = builder.members.iter().map(|l| l.coordinates).collect();
    let priorities: Vec<f64> = builder
        .members
        .iter()
        .map(|l| l.priority_score.unwrap_or(0) as f64)
        .collect();

    LocationCluster {
        id: format!("cluster-{number}"),
        seed: builder.seed,
        center: Coordinates::centroid(&points).unwrap_or(builder.seed),
        location_ids: builder.members.iter().map(|l| l.id.clone()).collect(),
        total_people: builder.members.iter().map(|l| l.people_count).sum(),
        max_danger: builder
            .members
            .iter()
            .filter_map(|l| l.danger_score)
            .max()
            .unwrap_or(0),
        mean_priority: priorities.iter().sum::<f64>() / priorities.len().max(1) as f64,
        highest_urgency: builder
            .members
            .iter()
            .map(|l| l.urgency)
            .max()
            .unwrap_or(Urgency::Low),
    }
}
