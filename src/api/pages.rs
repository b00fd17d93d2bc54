use axum::{
    Form,
    extract::State,
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::validation::validate_city;
use super::{ApiError, AppState, cookies, views};

#[derive(Debug, Deserialize)]
pub struct CityForm {
    pub city: String,
}

pub async fn home(headers: HeaderMap) -> Html<String> {
    let last_city = cookies::last_city(&headers);
    views::form_page(last_city.as_deref())
}

pub async fn submit_weather(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CityForm>,
) -> Result<Response, ApiError> {
    let city = validate_city(&form.city)?;

    let report = state.weather_service().lookup(city).await?;

    state.search_ledger().record(city).await?;
    info!(city, hours = report.forecast.len(), "Served forecast");

    let cookie = cookies::last_city_cookie(city, state.config().server.secure_cookies);

    Ok(([(header::SET_COOKIE, cookie)], views::weather_page(&report)).into_response())
}
