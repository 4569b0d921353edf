//! Relief allocation core: distance and danger/priority scoring, nearest
//! volunteer selection, location clustering and a client for the external
//! mapping provider that degrades to straight-line distances when the
//! provider is unreachable.

pub mod allocation;
pub mod config;
pub mod error;
pub mod logger;
pub mod maps;
pub mod models;
pub mod resilience;
pub mod scoring;
pub mod seed;
pub mod services;

pub use config::Config;
pub use error::{AllocationError, ConfigError, MapError, ValidationError};
pub use models::Coordinates;
