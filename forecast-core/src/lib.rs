//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The weather-code table and the day-card renderer
//! - The Open-Meteo forecast provider
//! - The fetch-and-render cycle driving a display surface
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but any front end implementing [`Surface`]
//! can drive it.

pub mod app;
pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod surface;

pub use app::{ForecastApp, TriggerOutcome};
pub use codes::{WeatherCodeEntry, lookup};
pub use config::Config;
pub use error::{FETCH_FAILED_MESSAGE, FetchError, ValidationError};
pub use model::{Coordinates, DailyForecast, ForecastDay};
pub use provider::{ForecastProvider, openmeteo::OpenMeteoProvider, provider_from_config};
pub use render::{DisplayCard, render};
pub use surface::{MemorySurface, Surface};
