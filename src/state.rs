use std::sync::Arc;

use crate::clients::{NominatimClient, OpenMeteoClient};
use crate::config::Config;
use crate::db::Store;
use crate::services::{OpenMeteoWeatherService, SeaOrmSearchLedger, SearchLedger, WeatherService};

/// Build a shared HTTP client with reasonable defaults for upstream calls.
/// Both the geocoder and the forecast client reuse it for connection pooling.
fn build_shared_http_client(user_agent: &str, timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub weather_service: Arc<dyn WeatherService>,

    pub search_ledger: Arc<dyn SearchLedger>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let http_client = build_shared_http_client(
            &config.upstream.user_agent,
            config.upstream.request_timeout_seconds,
        )?;

        let geocoder = Arc::new(NominatimClient::with_shared_client(
            http_client.clone(),
            config.upstream.geocoding_url.clone(),
        ));
        let forecaster = Arc::new(OpenMeteoClient::with_shared_client(
            http_client,
            config.upstream.forecast_url.clone(),
        ));

        let weather_service = Arc::new(OpenMeteoWeatherService::new(
            geocoder,
            forecaster,
            config.forecast.window_hours,
        )) as Arc<dyn WeatherService + Send + Sync + 'static>;

        let search_ledger = Arc::new(SeaOrmSearchLedger::new(store))
            as Arc<dyn SearchLedger + Send + Sync + 'static>;

        Ok(Self {
            config: Arc::new(config),
            weather_service,
            search_ledger,
        })
    }
}
