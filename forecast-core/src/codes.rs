//! WMO weather codes as reported by Open-Meteo's `weathercode` field.

use serde::Serialize;

/// One row of the weather-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCodeEntry {
    pub code: i32,
    pub description: &'static str,
}

const fn entry(code: i32, description: &'static str) -> WeatherCodeEntry {
    WeatherCodeEntry { code, description }
}

pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

static WEATHER_CODES: [WeatherCodeEntry; 20] = [
    entry(0, "Clear sky"),
    entry(1, "Mainly clear"),
    entry(2, "Partly cloudy"),
    entry(3, "Overcast"),
    entry(45, "Foggy"),
    entry(48, "Foggy"),
    entry(51, "Light drizzle"),
    entry(53, "Drizzle"),
    entry(55, "Heavy drizzle"),
    entry(61, "Light rain"),
    entry(63, "Rain"),
    entry(65, "Heavy rain"),
    entry(71, "Light snow"),
    entry(73, "Snow"),
    entry(75, "Heavy snow"),
    entry(80, "Rain showers"),
    entry(81, "Rain showers"),
    entry(82, "Heavy rain showers"),
    entry(95, "Thunderstorm"),
    entry(96, "Thunderstorm with hail"),
];

/// Resolve a weather code. Codes outside the table map to "Unknown".
pub fn lookup(code: i32) -> WeatherCodeEntry {
    WEATHER_CODES
        .iter()
        .find(|e| e.code == code)
        .copied()
        .unwrap_or(WeatherCodeEntry {
            code,
            description: UNKNOWN_DESCRIPTION,
        })
}

/// The full table, in ascending code order.
pub fn known() -> &'static [WeatherCodeEntry] {
    &WEATHER_CODES
}
