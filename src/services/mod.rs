pub mod search_ledger;
pub mod search_ledger_impl;
pub use search_ledger::{LedgerError, SearchLedger};
pub use search_ledger_impl::SeaOrmSearchLedger;

pub mod weather_service;
pub mod weather_service_impl;
pub use weather_service::{WeatherError, WeatherService};
pub use weather_service_impl::OpenMeteoWeatherService;
