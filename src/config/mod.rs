//! Configuration module for the power-law forecast.

pub mod app_config;
pub mod forecast;
pub mod persistence;

mod debug; // Private: use crate::config::DEBUG_FLAGS rather than crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use app_config::AppConfig;
pub use forecast::{BandConfig, EpochConfig, FORECAST, ForecastConfig, QueryBounds, SignalConfig};
pub use persistence::{PERSISTENCE, export_filename};
