//! Nominatim + Open-Meteo implementation of the `WeatherService` trait.

use crate::clients::{NominatimClient, OpenMeteoClient};
use crate::forecast::{forecast_window, resolve_timezone, wording};
use crate::models::weather::WeatherReport;
use crate::services::weather_service::{WeatherError, WeatherService};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;
use tracing::{info, warn};

pub struct OpenMeteoWeatherService {
    geocoder: Arc<NominatimClient>,
    forecaster: Arc<OpenMeteoClient>,
    window_hours: u32,
}

impl OpenMeteoWeatherService {
    #[must_use]
    pub fn new(
        geocoder: Arc<NominatimClient>,
        forecaster: Arc<OpenMeteoClient>,
        window_hours: u32,
    ) -> Self {
        Self {
            geocoder,
            forecaster,
            window_hours,
        }
    }

    /// Same as [`WeatherService::lookup`] with an explicit "now".
    pub async fn lookup_at(
        &self,
        city: &str,
        now: DateTime<Utc>,
    ) -> Result<WeatherReport, WeatherError> {
        let result = self.build_report(city, now).await;

        let outcome = match &result {
            Ok(_) => "found",
            Err(WeatherError::Validation(_)) => "invalid",
            Err(WeatherError::NotFound(_)) => "not_found",
            Err(WeatherError::Upstream(reason)) => {
                warn!(city, %reason, "Weather lookup failed");
                "upstream_error"
            }
        };
        metrics::counter!("weather_lookups_total", "outcome" => outcome).increment(1);

        result
    }

    async fn build_report(
        &self,
        city: &str,
        now: DateTime<Utc>,
    ) -> Result<WeatherReport, WeatherError> {
        if city.trim().is_empty() {
            return Err(WeatherError::Validation("city name is empty".to_string()));
        }

        let Some(coordinates) = self.geocoder.search(city).await? else {
            info!(city, "City not found");
            return Err(WeatherError::NotFound(city.to_string()));
        };

        let payload = self.forecaster.forecast(coordinates).await?;

        let tz = resolve_timezone(payload.timezone.as_deref())?;
        let forecast = forecast_window(
            &payload.hourly.time,
            &payload.hourly.temperature_2m,
            tz,
            now,
            TimeDelta::hours(i64::from(self.window_hours)),
        )?;

        let mut current_weather = payload.current_weather.unwrap_or_default();
        current_weather.describe();

        let message = if forecast.is_empty() {
            warn!(city, timezone = %tz, "Forecast window is empty");
            wording::no_forecast(self.window_hours)
        } else {
            String::new()
        };

        info!(
            city,
            timezone = %tz,
            hours = forecast.len(),
            "Forecast ready"
        );

        Ok(WeatherReport {
            city: city.to_string(),
            timezone: tz.name().to_string(),
            current_weather,
            forecast,
            window_hours: self.window_hours,
            message,
        })
    }
}

#[async_trait]
impl WeatherService for OpenMeteoWeatherService {
    async fn lookup(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        self.lookup_at(city, Utc::now()).await
    }
}
