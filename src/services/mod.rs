pub mod notification;

use std::sync::Arc;

use crate::allocation::AllocationPlanner;
use crate::config::Config;
use crate::error::MapError;
use crate::maps::{MapClient, RouteProvider};
use crate::resilience::CircuitBreaker;
use notification::NotificationService;

pub const MISSING_KEY_NOTICE: &str =
    "Map API key is not configured; routing and area boundaries are disabled";

pub struct AppState {
    pub config: Config,
    pub breaker: Arc<CircuitBreaker>,
    pub notifications: Arc<NotificationService>,
    /// `None` when the map provider is not configured.
    pub maps: Option<Arc<MapClient>>,
    pub planner: AllocationPlanner,
}

impl AppState {
    /// Wire the services together. A missing API key degrades the state
    /// instead of failing.
    pub fn new(config: Config) -> Result<Self, MapError> {
        let breaker = Arc::new(CircuitBreaker::new(
            config.breaker_failure_threshold,
            config.breaker_cooldown(),
        ));
        let notifications = Arc::new(NotificationService::default());

        let maps = match MapClient::new(&config, breaker.clone()) {
            Ok(client) => Some(Arc::new(client)),
            Err(MapError::MissingApiKey) => {
                notifications.warn(MISSING_KEY_NOTICE);
                None
            }
            Err(e) => return Err(e),
        };

        let provider = maps
            .clone()
            .map(|client| client as Arc<dyn RouteProvider>);
        let planner = AllocationPlanner::new(
            config.headquarters(),
            config.request_stagger(),
            provider,
            notifications.clone(),
        );

        Ok(Self {
            config,
            breaker,
            notifications,
            maps,
            planner,
        })
    }

    pub fn is_degraded(&self) -> bool {
        self.maps.is_none()
    }
}
