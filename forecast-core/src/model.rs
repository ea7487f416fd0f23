use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FetchError, ValidationError};

/// Coordinates exactly as the user typed them, minus surrounding whitespace.
///
/// No numeric or range checks are made: whatever was typed goes to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, ValidationError> {
        let latitude = latitude.trim();
        let longitude = longitude.trim();

        if latitude.is_empty() || longitude.is_empty() {
            return Err(ValidationError::MissingCoordinates);
        }

        Ok(Self {
            latitude: latitude.to_owned(),
            longitude: longitude.to_owned(),
        })
    }
}

/// Open-Meteo `daily` block: parallel series, one entry per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<NaiveDate>,
    #[serde(rename = "weathercode")]
    pub weather_code: Vec<i32>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    #[serde(rename = "windspeed_10m_max")]
    pub wind_speed_max: Vec<f64>,
}

/// One index across all daily series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub precipitation_sum: f64,
    pub wind_speed_max: f64,
}

impl DailyForecast {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Every series must be as long as `time`.
    pub fn validate(&self) -> Result<(), FetchError> {
        let expected = self.time.len();
        let series = [
            ("weathercode", self.weather_code.len()),
            ("temperature_2m_max", self.temperature_max.len()),
            ("temperature_2m_min", self.temperature_min.len()),
            ("precipitation_sum", self.precipitation_sum.len()),
            ("windspeed_10m_max", self.wind_speed_max.len()),
        ];

        match series.into_iter().find(|(_, len)| *len != expected) {
            Some((field, actual)) => Err(FetchError::Shape {
                field,
                expected,
                actual,
            }),
            None => Ok(()),
        }
    }

    pub fn day(&self, index: usize) -> Option<ForecastDay> {
        Some(ForecastDay {
            date: *self.time.get(index)?,
            weather_code: *self.weather_code.get(index)?,
            temperature_max: *self.temperature_max.get(index)?,
            temperature_min: *self.temperature_min.get(index)?,
            precipitation_sum: *self.precipitation_sum.get(index)?,
            wind_speed_max: *self.wind_speed_max.get(index)?,
        })
    }

    /// Days in chronological order. Stops at the shortest series.
    pub fn days(&self) -> impl Iterator<Item = ForecastDay> + '_ {
        (0..self.len()).map_while(|i| self.day(i))
    }
}
