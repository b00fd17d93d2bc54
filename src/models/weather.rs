use serde::{Deserialize, Serialize};

use crate::forecast::codes;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One hour of the forecast window, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastEntry {
    /// Local wall-clock time, `YYYY-MM-DD HH:MM`
    pub time: String,
    pub temperature: Option<f64>,
}

/// Open-Meteo `current_weather` block.
///
/// Known fields are typed; anything else the upstream sends is kept in
/// `extra` and serialized back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windspeed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winddirection: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weathercode: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CurrentWeather {
    /// Fills `weather_description` from `weathercode`. Leaves it unset when
    /// the upstream sent no code.
    pub fn describe(&mut self) {
        if let Some(code) = self.weathercode {
            self.weather_description = Some(codes::describe(code).to_string());
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub timezone: String,
    pub current_weather: CurrentWeather,
    pub forecast: Vec<ForecastEntry>,
    /// Length of the window `forecast` was cut from
    pub window_hours: u32,
    /// Empty unless the forecast window came back empty
    pub message: String,
}
