//! Open-Meteo weather API client
//!
//! This module provides functionality to fetch current conditions from the
//! Open-Meteo forecast API and validate them into a `WeatherSnapshot`.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{parse_api_time, ApiError, WeatherSnapshot, WeatherUnits};

/// Base URL for the Open-Meteo API
pub const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Variables requested in the `current` block
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m,wind_direction_10m";

/// Client for fetching weather data from Open-Meteo API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

impl WeatherClient {
    /// Create a new WeatherClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: OPEN_METEO_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current weather for the given coordinates
    ///
    /// # Arguments
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    ///
    /// # Returns
    /// * `Ok(WeatherSnapshot)` - Validated current conditions
    /// * `Err(ApiError)` - If the request fails or the body is incomplete
    pub async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, ApiError> {
        debug!(lat, lon, "fetching weather");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status));
        }

        let text = response.text().await?;
        parse_response(&text)
    }
}

/// Parse and validate a forecast response body
fn parse_response(text: &str) -> Result<WeatherSnapshot, ApiError> {
    let response: OpenMeteoResponse =
        serde_json::from_str(text).map_err(|e| ApiError::Validation(e.to_string()))?;

    let current = response.current.ok_or_else(|| missing("current"))?;
    let units = response.current_units.ok_or_else(|| missing("current_units"))?;

    let time_str = current.time.ok_or_else(|| missing("current.time"))?;
    let time = parse_api_time(&time_str)
        .ok_or_else(|| ApiError::Validation(format!("invalid time format: {}", time_str)))?;

    Ok(WeatherSnapshot {
        time,
        temperature: current
            .temperature_2m
            .ok_or_else(|| missing("current.temperature_2m"))?,
        humidity: current
            .relative_humidity_2m
            .ok_or_else(|| missing("current.relative_humidity_2m"))?,
        weather_code: current
            .weather_code
            .ok_or_else(|| missing("current.weather_code"))?,
        wind_speed: current
            .wind_speed_10m
            .ok_or_else(|| missing("current.wind_speed_10m"))?,
        wind_direction: current
            .wind_direction_10m
            .ok_or_else(|| missing("current.wind_direction_10m"))?,
        units: WeatherUnits {
            temperature: units
                .temperature_2m
                .ok_or_else(|| missing("current_units.temperature_2m"))?,
            humidity: units
                .relative_humidity_2m
                .ok_or_else(|| missing("current_units.relative_humidity_2m"))?,
            wind_speed: units
                .wind_speed_10m
                .ok_or_else(|| missing("current_units.wind_speed_10m"))?,
            wind_direction: units
                .wind_direction_10m
                .ok_or_else(|| missing("current_units.wind_direction_10m"))?,
        },
        timezone: response.timezone.unwrap_or_default(),
        elevation: response.elevation.unwrap_or_default(),
    })
}

fn missing(field: &str) -> ApiError {
    ApiError::Validation(format!("missing field {}", field))
}

/// Open-Meteo API response structure
///
/// Every field is optional so absence is reported by name instead of as a
/// generic decode failure.
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    timezone: Option<String>,
    elevation: Option<f64>,
    current_units: Option<CurrentUnits>,
    current: Option<CurrentWeather>,
}

/// Current weather data from Open-Meteo
#[derive(Debug, Deserialize)]
struct CurrentWeather {
    time: Option<String>,
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    weather_code: Option<i32>,
    wind_speed_10m: Option<f64>,
    wind_direction_10m: Option<f64>,
}

/// Unit labels for the current block
#[derive(Debug, Deserialize)]
struct CurrentUnits {
    temperature_2m: Option<String>,
    relative_humidity_2m: Option<String>,
    wind_speed_10m: Option<String>,
    wind_direction_10m: Option<String>,
}
