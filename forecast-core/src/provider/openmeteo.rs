use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::{Coordinates, DailyForecast, FetchError};

use super::ForecastProvider;

pub const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1";

const DAILY_FIELDS: &str =
    "weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max";
const FORECAST_DAYS: &str = "5";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    endpoint: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL for `coords`, query parameters included.
    pub fn request_url(&self, coords: &Coordinates) -> Result<Url, FetchError> {
        let base = format!("{}/forecast", self.endpoint.trim_end_matches('/'));
        let url = Url::parse_with_params(
            &base,
            &[
                ("latitude", coords.latitude.as_str()),
                ("longitude", coords.longitude.as_str()),
                ("daily", DAILY_FIELDS),
                ("timezone", "auto"),
                ("forecast_days", FORECAST_DAYS),
            ],
        )?;
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    daily: DailyForecast,
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn daily_forecast(&self, coords: &Coordinates) -> Result<DailyForecast, FetchError> {
        let url = self.request_url(coords)?;
        debug!(%url, "requesting daily forecast");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "forecast request rejected");
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OmForecastResponse = serde_json::from_str(&body)?;
        parsed.daily.validate()?;

        debug!(days = parsed.daily.len(), "forecast parsed");
        Ok(parsed.daily)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
