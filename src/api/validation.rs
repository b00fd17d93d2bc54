use super::ApiError;
use crate::constants::messages::EMPTY_CITY;

/// Trims the submitted city name; whitespace-only input is rejected.
pub fn validate_city(city: &str) -> Result<&str, ApiError> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(EMPTY_CITY));
    }
    Ok(trimmed)
}
