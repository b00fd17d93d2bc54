use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::views;
use crate::constants::messages::{CITY_NOT_FOUND, EMPTY_CITY};
use crate::services::{LedgerError, WeatherError};

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),

    /// Geocoder had no match for the city.
    CityNotFound(String),

    DatabaseError(String),

    ExternalApiError { service: String, message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::CityNotFound(city) => write!(f, "City not found: {city}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::ExternalApiError { service, message } => {
                write!(f, "{service} error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(msg) => {
                (StatusCode::BAD_REQUEST, views::error_page("", &msg)).into_response()
            }
            // Not-found is rendered as a normal page: 200, unlike the 400 above.
            Self::CityNotFound(city) => {
                (StatusCode::OK, views::error_page(&city, CITY_NOT_FOUND)).into_response()
            }
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            Self::ExternalApiError { service, message } => {
                tracing::warn!("{} API error: {}", service, message);
                (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response()
            }
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::Validation(_) => Self::validation(EMPTY_CITY),
            WeatherError::NotFound(city) => Self::CityNotFound(city),
            WeatherError::Upstream(message) => Self::upstream_error(message),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn upstream_error(msg: impl Into<String>) -> Self {
        Self::ExternalApiError {
            service: "Weather".to_string(),
            message: msg.into(),
        }
    }
}
