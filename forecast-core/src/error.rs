use reqwest::StatusCode;
use thiserror::Error;

/// Shown when a forecast could not be fetched, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch weather data. Please try again.";

/// Input rejected before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both latitude and longitude")]
    MissingCoordinates,
}

/// Anything that went wrong between issuing the request and holding a usable forecast.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch weather data (status {status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to reach forecast service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse forecast JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Forecast series `{field}` has {actual} entries, expected {expected}")]
    Shape {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid forecast endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl FetchError {
    /// The message a user gets to see; causes are only logged.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}
