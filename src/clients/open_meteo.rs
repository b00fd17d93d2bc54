use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::models::weather::{Coordinates, CurrentWeather};

#[derive(Debug, Deserialize)]
pub struct ForecastPayload {
    /// IANA zone resolved by `timezone=auto`
    pub timezone: Option<String>,
    pub current_weather: Option<CurrentWeather>,
    pub hourly: HourlySeries,
}

/// Parallel hourly sequences as Open-Meteo returns them.
#[derive(Debug, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
}

#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    #[must_use]
    pub fn with_shared_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn forecast(&self, coordinates: Coordinates) -> Result<ForecastPayload> {
        let latitude = coordinates.latitude.to_string();
        let longitude = coordinates.longitude.to_string();

        let url = url::Url::parse_with_params(
            &self.base_url,
            &[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("hourly", "temperature_2m"),
                ("current_weather", "true"),
                ("timezone", "auto"),
            ],
        )
        .with_context(|| format!("Invalid forecast URL: {}", self.base_url))?;

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Open-Meteo API error: {} - {}", status, body));
        }

        let payload: ForecastPayload = response
            .json()
            .await
            .context("Malformed Open-Meteo forecast payload")?;

        Ok(payload)
    }
}
