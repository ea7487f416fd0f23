//! Turns a [`DailyForecast`] into display cards.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::{codes, model::DailyForecast};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Everything shown for one forecast day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayCard {
    pub day_label: String,
    pub date: String,
    pub high_c: i64,
    pub description: &'static str,
    pub low_c: i64,
    pub precipitation_mm: f64,
    pub wind_kmh: i64,
}

impl fmt::Display for DisplayCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.day_label)?;
        writeln!(f, "{}", self.date)?;
        writeln!(f, "{}°", self.high_c)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "Low: {}°C", self.low_c)?;
        writeln!(f, "Rain: {} mm", self.precipitation_mm)?;
        write!(f, "Wind: {} km/h", self.wind_kmh)
    }
}

/// One card per day, index 0 first.
pub fn render(forecast: &DailyForecast) -> Vec<DisplayCard> {
    forecast
        .days()
        .enumerate()
        .map(|(index, day)| DisplayCard {
            day_label: day_label(day.date, index),
            date: format_date(day.date),
            high_c: round_half_up(day.temperature_max),
            description: codes::lookup(day.weather_code).description,
            low_c: round_half_up(day.temperature_min),
            precipitation_mm: day.precipitation_sum,
            wind_kmh: round_half_up(day.wind_speed_max),
        })
        .collect()
}

pub fn day_label(date: NaiveDate, index: usize) -> String {
    if index == 0 {
        return "Today".to_string();
    }
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize].to_string()
}

/// "Jan 5" style.
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.day())
}

/// Nearest integer, ties toward positive infinity (14.5 -> 15, -14.5 -> -14).
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}
