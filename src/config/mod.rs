use serde::Deserialize;
use std::time::Duration;

use crate::error::ConfigError;
use crate::models::Coordinates;

pub const ENV_PREFIX: &str = "RELIEF";
pub const DEFAULT_MAP_BASE_URL: &str = "https://rsapi.goong.io";

/// Hoan Kiem, Hanoi.
pub const DEFAULT_HQ: Coordinates = Coordinates {
    lat: 21.0285,
    lng: 105.8542,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map_api_key: Option<String>,
    pub map_base_url: String,
    pub hq_lat: f64,
    pub hq_lng: f64,
    pub request_stagger_ms: u64,
    pub geocode_timeout_ms: u64,
    pub routing_timeout_ms: u64,
    pub breaker_failure_threshold: u32,
    pub breaker_cooldown_secs: u64,
    pub cluster_radius_km: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_api_key: None,
            map_base_url: DEFAULT_MAP_BASE_URL.to_string(),
            hq_lat: DEFAULT_HQ.lat,
            hq_lng: DEFAULT_HQ.lng,
            request_stagger_ms: 150,
            geocode_timeout_ms: 5_000,
            routing_timeout_ms: 10_000,
            breaker_failure_threshold: 3,
            breaker_cooldown_secs: 30,
            cluster_radius_km: 5.0,
        }
    }
}

impl Config {
    /// Load defaults, then `.env`, then `RELIEF_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let defaults = Config::default();
        let settings = config::Config::builder()
            .set_default("map_base_url", defaults.map_base_url)?
            .set_default("hq_lat", defaults.hq_lat)?
            .set_default("hq_lng", defaults.hq_lng)?
            .set_default("request_stagger_ms", defaults.request_stagger_ms as i64)?
            .set_default("geocode_timeout_ms", defaults.geocode_timeout_ms as i64)?
            .set_default("routing_timeout_ms", defaults.routing_timeout_ms as i64)?
            .set_default(
                "breaker_failure_threshold",
                defaults.breaker_failure_threshold as i64,
            )?
            .set_default("breaker_cooldown_secs", defaults.breaker_cooldown_secs as i64)?
            .set_default("cluster_radius_km", defaults.cluster_radius_km)?
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-90.0..=90.0).contains(&self.hq_lat) || !(-180.0..=180.0).contains(&self.hq_lng) {
            return Err(ConfigError::Invalid(format!(
                "headquarters coordinates out of range: {},{}",
                self.hq_lat, self.hq_lng
            )));
        }
        if self.breaker_failure_threshold == 0 {
            return Err(ConfigError::Invalid(
                "breaker_failure_threshold must be at least 1".to_string(),
            ));
        }
        if self.cluster_radius_km <= 0.0 {
            return Err(ConfigError::Invalid(
                "cluster_radius_km must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The API key, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.map_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn headquarters(&self) -> Coordinates {
        Coordinates::new(self.hq_lat, self.hq_lng)
    }

    pub fn request_stagger(&self) -> Duration {
        Duration::from_millis(self.request_stagger_ms)
    }

    pub fn geocode_timeout(&self) -> Duration {
        Duration::from_millis(self.geocode_timeout_ms)
    }

    pub fn routing_timeout(&self) -> Duration {
        Duration::from_millis(self.routing_timeout_ms)
    }

    pub fn breaker_cooldown(&self) -> Duration {
        Duration::from_secs(self.breaker_cooldown_secs)
    }
}
