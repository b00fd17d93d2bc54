use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::models::weather::Coordinates;

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: Coordinate,
    lon: Coordinate,
    display_name: Option<String>,
}

/// Nominatim sends coordinates as decimal strings; mirrors send plain numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Text(String),
    Number(f64),
}

impl Coordinate {
    fn value(&self) -> Result<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .with_context(|| format!("Invalid coordinate from Nominatim: '{s}'")),
        }
    }
}

#[derive(Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    #[must_use]
    pub fn with_shared_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Looks up a free-text place name and returns the first match, or `None`
    /// when Nominatim has nothing for it.
    pub async fn search(&self, city: &str) -> Result<Option<Coordinates>> {
        let url = url::Url::parse_with_params(&self.base_url, &[("format", "json"), ("q", city)])
            .with_context(|| format!("Invalid geocoding URL: {}", self.base_url))?;

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Nominatim API error: {} - {}", status, body));
        }

        let places: Vec<NominatimPlace> = response.json().await?;

        let Some(place) = places.first() else {
            debug!(city, "Nominatim returned no matches");
            return Ok(None);
        };

        let coordinates = Coordinates {
            latitude: place.lat.value()?,
            longitude: place.lon.value()?,
        };

        debug!(
            city,
            place = place.display_name.as_deref().unwrap_or("-"),
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "Geocoded city"
        );

        Ok(Some(coordinates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_coordinates() {
        let body = r#"[{"lat": "55.7504461", "lon": "37.6174943", "display_name": "Москва"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();

        assert!((places[0].lat.value().unwrap() - 55.750_446_1).abs() < 1e-9);
        assert!((places[0].lon.value().unwrap() - 37.617_494_3).abs() < 1e-9);
    }

    #[test]
    fn test_parse_numeric_coordinates() {
        let body = r#"[{"lat": 59.93, "lon": 30.31}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();

        assert!((places[0].lat.value().unwrap() - 59.93).abs() < 1e-9);
        assert!(places[0].display_name.is_none());
    }

    #[test]
    fn test_garbage_coordinate_is_an_error() {
        let body = r#"[{"lat": "north", "lon": "30.31"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();

        assert!(places[0].lat.value().is_err());
    }
}
