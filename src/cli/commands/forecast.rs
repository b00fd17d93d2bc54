//! Forecast command handler

use crate::config::Config;
use crate::constants::messages::{CITY_NOT_FOUND, EMPTY_CITY};
use crate::models::weather::WeatherReport;
use crate::services::WeatherError;
use crate::state::SharedState;

pub async fn cmd_forecast(config: Config, city: &str) -> anyhow::Result<()> {
    let city = city.trim();
    if city.is_empty() {
        println!("{EMPTY_CITY}");
        return Ok(());
    }

    let state = SharedState::new(config).await?;

    let report = match state.weather_service.lookup(city).await {
        Ok(report) => report,
        Err(WeatherError::NotFound(_)) => {
            println!("{CITY_NOT_FOUND}: {city}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    state.search_ledger.record(city).await?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &WeatherReport) {
    println!("{} ({})", report.city, report.timezone);
    println!("{:-<50}", "");

    let current = &report.current_weather;
    if let Some(description) = &current.weather_description {
        println!("  {description}");
    }
    if let Some(temperature) = current.temperature {
        println!("  {temperature:.1} °C");
    }
    if let Some(speed) = current.windspeed {
        println!("  Ветер: {speed:.1} км/ч");
    }
    println!();

    if !report.message.is_empty() {
        println!("{}", report.message);
        return;
    }

    for entry in &report.forecast {
        let temperature = entry
            .temperature
            .map_or_else(|| "—".to_string(), |t| format!("{t:.1} °C"));
        println!("  {}  {:>9}", entry.time, temperature);
    }
}
