//! Core data models for wxsearch
//!
//! This module contains the types returned by the Open-Meteo geocoding,
//! forecast and marine endpoints, plus the clients that fetch them.

pub mod classify;
pub mod error;
pub mod geocoding;
pub mod marine;
pub mod weather;

pub use error::ApiError;
pub use geocoding::GeocodingClient;
pub use marine::MarineClient;
pub use weather::WeatherClient;

use std::time::Duration;

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use classify::WaveBand;

/// One geocoding search hit
///
/// Immutable once received; lists keep the order the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    /// Geonames identifier
    pub id: u64,
    /// Place name
    pub name: String,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
    /// First-level administrative area (state, province)
    #[serde(default)]
    pub admin1: Option<String>,
    /// Second-level administrative area (county, district)
    #[serde(default)]
    pub admin2: Option<String>,
    /// Country name
    #[serde(default)]
    pub country: Option<String>,
    /// ISO country code
    #[serde(default)]
    pub country_code: Option<String>,
    /// Population, when known
    #[serde(default)]
    pub population: Option<u64>,
    /// IANA timezone of the place
    #[serde(default)]
    pub timezone: Option<String>,
    /// Elevation in meters
    #[serde(default)]
    pub elevation: Option<f64>,
}

impl LocationCandidate {
    /// "Name, Admin1, Country", skipping the parts that are absent
    pub fn display_name(&self) -> String {
        let mut name = self.name.clone();
        for part in [&self.admin1, &self.country].into_iter().flatten() {
            name.push_str(", ");
            name.push_str(part);
        }
        name
    }

    /// Population with thousands separators, e.g. "715,522"
    pub fn population_label(&self) -> Option<String> {
        self.population.map(format_thousands)
    }
}

/// Formats an integer with comma thousands separators
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Unit labels reported by the forecast endpoint's `current_units` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherUnits {
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub wind_direction: String,
}

/// Current weather for the selected location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    /// Observation time in the location's timezone
    pub time: NaiveDateTime,
    /// Air temperature at 2m
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// WMO weather code
    pub weather_code: i32,
    /// Wind speed at 10m
    pub wind_speed: f64,
    /// Wind direction at 10m in degrees
    pub wind_direction: f64,
    pub units: WeatherUnits,
    /// Timezone resolved by the API
    pub timezone: String,
    /// Elevation in meters used for the forecast
    pub elevation: f64,
}

impl WeatherSnapshot {
    pub fn description(&self) -> &'static str {
        classify::weather_description(self.weather_code)
    }

    pub fn icon(&self) -> &'static str {
        classify::weather_icon(self.weather_code)
    }
}

/// Unit labels reported by the marine endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarineUnits {
    pub wave_height: String,
    pub sea_surface_temperature: String,
}

/// Current sea conditions for the selected location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarineSnapshot {
    /// Observation time in the location's timezone, when the API sent a readable one
    pub time: Option<NaiveDateTime>,
    /// Significant wave height in meters
    pub wave_height: f64,
    /// Sea surface temperature in Celsius
    pub sea_surface_temperature: f64,
    pub units: MarineUnits,
}

impl MarineSnapshot {
    pub fn wave_band(&self) -> WaveBand {
        WaveBand::from_height(self.wave_height)
    }

    pub fn sea_temperature_icon(&self) -> &'static str {
        classify::sea_temperature_icon(self.sea_surface_temperature)
    }
}

/// Parse an ISO 8601 local time as returned by Open-Meteo (e.g. "2024-07-15T14:00")
pub(crate) fn parse_api_time(time_str: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(time_str, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(time_str, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Builds the shared HTTP client with a per-request timeout
pub fn http_client(timeout: Duration) -> Result<Client, ApiError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// The three Open-Meteo clients, sharing one connection pool
#[derive(Debug, Clone)]
pub struct ApiClients {
    pub geocoding: GeocodingClient,
    pub weather: WeatherClient,
    pub marine: MarineClient,
}

impl ApiClients {
    /// Creates clients for the endpoints and timeout in `config`
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = http_client(config.request_timeout())?;
        Ok(Self {
            geocoding: GeocodingClient::with_client(client.clone())
                .with_base_url(&config.endpoints.geocoding),
            weather: WeatherClient::with_client(client.clone())
                .with_base_url(&config.endpoints.weather),
            marine: MarineClient::with_client(client).with_base_url(&config.endpoints.marine),
        })
    }
}
