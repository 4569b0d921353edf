use thiserror::Error;

use crate::models::{LocationStatus, TeamStatus};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration load error: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Failures talking to the mapping provider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    #[error("map provider API key is not configured")]
    MissingApiKey,
    #[error("map provider rejected the API key ({status})")]
    Unauthorized { status: u16 },
    #[error("map provider returned status {status}")]
    Status { status: u16 },
    #[error("map provider request timed out")]
    Timeout,
    #[error("map provider transport error: {0}")]
    Transport(String),
    #[error("map provider response could not be decoded: {0}")]
    Decode(String),
    #[error("map provider returned no result")]
    Empty,
    #[error("map provider circuit is open")]
    CircuitOpen,
}

impl MapError {
    /// Rejections that will not heal by retrying with the same key.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, MapError::Unauthorized { .. })
    }

    /// Whether the failure counts against the circuit breaker.
    pub fn is_breaker_failure(&self) -> bool {
        match self {
            MapError::Timeout | MapError::Transport(_) => true,
            MapError::Status { status } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for MapError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            return MapError::Timeout;
        }
        if value.is_decode() {
            return MapError::Decode(value.to_string());
        }
        match value.status() {
            Some(status) => MapError::from_status(status.as_u16()),
            None => MapError::Transport(value.to_string()),
        }
    }
}

impl MapError {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => MapError::Unauthorized { status },
            _ => MapError::Status { status },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("allocation batch was cancelled")]
    Cancelled,
    #[error("team {team_id} is full ({capacity} members)")]
    TeamFull { team_id: String, capacity: u32 },
    #[error("team {team_id} is not available (status {status:?})")]
    TeamUnavailable { team_id: String, status: TeamStatus },
    #[error("location {location_id} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        location_id: String,
        from: LocationStatus,
        to: LocationStatus,
    },
}

/// Constraints enforced before a create dialog may be submitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("capacity must be greater than zero")]
    InvalidCapacity,
    #[error("current stock {current} exceeds capacity {capacity}")]
    ExceedsCapacity { current: u32, capacity: u32 },
}
