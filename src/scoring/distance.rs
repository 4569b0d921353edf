use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres (Haversine).
pub fn calculate_distance(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `h` just past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Motorcycle,
    Truck,
    Helicopter,
    Boat,
    #[serde(other)]
    Other,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Motorcycle,
        VehicleKind::Truck,
        VehicleKind::Helicopter,
        VehicleKind::Boat,
    ];

    /// Average speed in km/h.
    pub fn average_speed_kmh(self) -> f64 {
        match self {
            VehicleKind::Motorcycle => 35.0,
            VehicleKind::Truck => 30.0,
            VehicleKind::Helicopter => 180.0,
            VehicleKind::Boat => 20.0,
            VehicleKind::Other => 40.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEstimate {
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

pub fn estimate_travel_time(distance_km: f64, vehicle: VehicleKind) -> TravelEstimate {
    let distance_km = distance_km.max(0.0);
    let hours = distance_km / vehicle.average_speed_kmh();
    TravelEstimate {
        distance_meters: (distance_km * 1000.0).round(),
        duration_seconds: (hours * 3600.0).round(),
    }
}
