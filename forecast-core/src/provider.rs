use crate::{
    Config, Coordinates, DailyForecast, FetchError, provider::openmeteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

/// Source of five-day daily forecasts.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Issue exactly one request for `coords` and return the parsed daily series.
    async fn daily_forecast(&self, coords: &Coordinates) -> Result<DailyForecast, FetchError>;
}

/// Construct the Open-Meteo provider against the configured endpoint.
pub fn provider_from_config(config: &Config) -> OpenMeteoProvider {
    OpenMeteoProvider::new(config.endpoint())
}
