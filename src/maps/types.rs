use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, RoutedDistance};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub distance: Measure,
    pub duration: Measure,
    #[serde(default)]
    pub html_instructions: Option<String>,
    #[serde(default)]
    pub maneuver: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub distance: Measure,
    pub duration: Measure,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

impl RouteLeg {
    pub fn to_routed_distance(&self) -> RoutedDistance {
        RoutedDistance {
            distance_meters: self.distance.value,
            duration_seconds: self.duration.value,
            distance_text: self.distance.text.clone(),
            duration_text: self.duration.text.clone(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Route {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    pub fn into_first_leg(self) -> Option<RouteLeg> {
        self.routes.into_iter().next()?.legs.into_iter().next()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
    /// GeoJSON, only present on some place detail responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub commune: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub place_id: String,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub compound: Option<Compound>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PlaceDetailResponse {
    pub result: Option<PlaceDetail>,
}
