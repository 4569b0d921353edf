use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::MapError;
use crate::logger::redact_url;
use crate::maps::boundary::{parse_geojson_ring, AreaBoundary};
use crate::maps::types::{
    DirectionsResponse, GeocodeResponse, GeocodeResult, PlaceDetail, PlaceDetailResponse, RouteLeg,
};
use crate::maps::{RouteProvider, RoutingProfile};
use crate::models::Coordinates;
use crate::resilience::CircuitBreaker;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct MapClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    breaker: Arc<CircuitBreaker>,
    geocode_timeout: Duration,
    routing_timeout: Duration,
}

impl MapClient {
    /// Fails with `MissingApiKey` when no key is configured; callers are
    /// expected to run without routing in that case.
    pub fn new(config: &Config, breaker: Arc<CircuitBreaker>) -> Result<Self, MapError> {
        let api_key = config.api_key().ok_or(MapError::MissingApiKey)?.to_string();
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| MapError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.map_base_url.trim_end_matches('/').to_string(),
            api_key,
            breaker,
            geocode_timeout: config.geocode_timeout(),
            routing_timeout: config.routing_timeout(),
        })
    }

    pub fn breaker(&self) -> &Arc<CircuitBreaker> {
        &self.breaker
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<T, MapError> {
        if !self.breaker.is_call_permitted() {
            return Err(MapError::CircuitOpen);
        }

        let result = self.send(path, query, timeout).await;
        match &result {
            Ok(_) => self.breaker.record_success(),
            Err(e) if e.is_auth_rejection() => self.breaker.record_rejection(),
            Err(e) if e.is_breaker_failure() => self.breaker.record_failure(),
            Err(_) => self.breaker.record_neutral(),
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<T, MapError> {
        let url = format!("{}{}", self.base_url, path);
        let mut params = query.to_vec();
        params.push(("api_key", self.api_key.clone()));

        let request = self
            .http
            .get(&url)
            .query(&params)
            .timeout(timeout)
            .build()?;
        tracing::debug!(url = %redact_url(request.url(), "api_key"), "map provider request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MapError::from_status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MapError::Decode(e.to_string()))
    }

    /// First leg of the first route between two points.
    pub async fn fetch_directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        profile: RoutingProfile,
    ) -> Result<RouteLeg, MapError> {
        let query = [
            ("origin", origin.to_query()),
            ("destination", destination.to_query()),
            ("vehicle", profile.as_str().to_string()),
        ];
        let response: DirectionsResponse =
            self.get_json("/Direction", &query, self.routing_timeout).await?;
        response.into_first_leg().ok_or(MapError::Empty)
    }

    /// Like `fetch_directions`, but any failure is logged and becomes `None`.
    pub async fn get_directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        profile: RoutingProfile,
    ) -> Option<RouteLeg> {
        match self.fetch_directions(origin, destination, profile).await {
            Ok(leg) => Some(leg),
            Err(e) => {
                tracing::warn!(%origin, %destination, %profile, error = %e, "directions request failed");
                None
            }
        }
    }

    pub async fn reverse_geocode(&self, point: Coordinates) -> Result<GeocodeResult, MapError> {
        let query = [("latlng", point.to_query())];
        let response: GeocodeResponse =
            self.get_json("/Geocode", &query, self.geocode_timeout).await?;
        response.results.into_iter().next().ok_or(MapError::Empty)
    }

    pub async fn place_detail(&self, place_id: &str) -> Result<PlaceDetail, MapError> {
        let query = [("place_id", place_id.to_string())];
        let response: PlaceDetailResponse =
            self.get_json("/Place/Detail", &query, self.geocode_timeout).await?;
        response.result.ok_or(MapError::Empty)
    }

    /// Administrative outline around `point`. Falls back to a 1 km circle
    /// whenever the provider cannot supply one.
    pub async fn area_boundary(&self, point: Coordinates) -> AreaBoundary {
        let place = match self.reverse_geocode(point).await {
            Ok(place) => place,
            Err(e) => {
                tracing::warn!(%point, error = %e, "reverse geocode failed, using approximate area");
                return AreaBoundary::approximate(point);
            }
        };

        let mut boundary = AreaBoundary::approximate(point);
        boundary.place_id = Some(place.place_id.clone());
        boundary.address = Some(place.formatted_address.clone());

        match self.place_detail(&place.place_id).await {
            Ok(detail) => {
                let ring = detail
                    .geometry
                    .as_ref()
                    .and_then(|g| g.boundary.as_ref())
                    .and_then(parse_geojson_ring);
                match ring {
                    Some(polygon) => {
                        boundary.polygon = polygon;
                        boundary.approximate = false;
                    }
                    None => {
                        tracing::debug!(place_id = %place.place_id, "place has no boundary, using approximate area");
                    }
                }
            }
            Err(e) => {
                tracing::warn!(place_id = %place.place_id, error = %e, "place detail failed, using approximate area");
            }
        }
        boundary
    }
}

#[async_trait]
impl RouteProvider for MapClient {
    async fn directions(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        profile: RoutingProfile,
    ) -> Option<RouteLeg> {
        self.get_directions(origin, destination, profile).await
    }
}
