use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::models::Coordinates;
use crate::scoring::distance::EARTH_RADIUS_KM;

pub const CIRCLE_VERTICES: usize = 32;
pub const CIRCLE_RADIUS_KM: f64 = 1.0;

/// Outline of the administrative area around a point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaBoundary {
    /// Closed ring: the last vertex repeats the first.
    pub polygon: Vec<Coordinates>,
    /// True when the ring was synthesized instead of returned by the provider.
    pub approximate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl AreaBoundary {
    pub fn approximate(center: Coordinates) -> Self {
        Self {
            polygon: approximate_circle(center, CIRCLE_RADIUS_KM, CIRCLE_VERTICES),
            approximate: true,
            place_id: None,
            address: None,
        }
    }
}

/// A closed ring of `vertices` points at `radius_km` around `center`.
pub fn approximate_circle(center: Coordinates, radius_km: f64, vertices: usize) -> Vec<Coordinates> {
    if vertices == 0 {
        return Vec::new();
    }
    let angular = radius_km / EARTH_RADIUS_KM;
    let lat_scale = center.lat.to_radians().cos().abs().max(1e-6);

    let mut ring: Vec<Coordinates> = (0..vertices)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / vertices as f64;
            Coordinates {
                lat: center.lat + (angular * theta.cos()).to_degrees(),
                lng: center.lng + (angular * theta.sin() / lat_scale).to_degrees(),
            }
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// Outer ring of a GeoJSON `Polygon` or the first polygon of a
/// `MultiPolygon`. GeoJSON positions are `[lng, lat]`.
pub fn parse_geojson_ring(value: &serde_json::Value) -> Option<Vec<Coordinates>> {
    let kind = value.get("type")?.as_str()?;
    let coordinates = value.get("coordinates")?;
    let ring = match kind {
        "Polygon" => coordinates.get(0)?,
        "MultiPolygon" => coordinates.get(0)?.get(0)?,
        _ => return None,
    };

    let points: Vec<Coordinates> = ring
        .as_array()?
        .iter()
        .filter_map(|pos| {
            let pos = pos.as_array()?;
            Some(Coordinates {
                lng: pos.first()?.as_f64()?,
                lat: pos.get(1)?.as_f64()?,
            })
        })
        .collect();

    if points.len() < 3 {
        return None;
    }
    Some(points)
}
