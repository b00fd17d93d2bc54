//! Domain service that turns a city name into a forecast report.
//!
//! Geocodes the name, fetches the hourly forecast for the coordinates, cuts
//! the series down to the forecast window and translates the current weather
//! code.

use crate::forecast::WindowError;
use crate::models::weather::WeatherReport;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("City not found: {0}")]
    NotFound(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl From<anyhow::Error> for WeatherError {
    fn from(err: anyhow::Error) -> Self {
        Self::Upstream(format!("{err:#}"))
    }
}

impl From<WindowError> for WeatherError {
    fn from(err: WindowError) -> Self {
        Self::Upstream(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait WeatherService: Send + Sync {
    /// Builds the report for an already trimmed, non-empty city name.
    async fn lookup(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}
