//! Open-Meteo marine API client
//!
//! Marine data only exists for coastal and oceanic coordinates. Every way
//! this request can go wrong collapses into `ApiError::MarineUnavailable`,
//! which callers treat as "no sea nearby".

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{parse_api_time, ApiError, MarineSnapshot, MarineUnits};

/// Base URL for the Open-Meteo marine API
pub const MARINE_BASE_URL: &str = "https://marine-api.open-meteo.com/v1/marine";

/// Client for the marine endpoint
#[derive(Debug, Clone)]
pub struct MarineClient {
    client: Client,
    base_url: String,
}

impl Default for MarineClient {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

impl MarineClient {
    /// Create a new MarineClient sharing the given HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: MARINE_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current sea conditions for the given coordinates
    ///
    /// # Returns
    /// * `Ok(MarineSnapshot)` - Wave height and sea temperature are both present
    /// * `Err(ApiError::MarineUnavailable)` - Anything else, including network failures
    pub async fn fetch_marine(&self, lat: f64, lon: f64) -> Result<MarineSnapshot, ApiError> {
        debug!(lat, lon, "fetching marine conditions");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current", "wave_height,sea_surface_temperature".to_string()),
                ("forecast_days", "3".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::MarineUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::MarineUnavailable(status.to_string()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::MarineUnavailable(e.to_string()))?;
        parse_response(&text)
    }
}

/// Parse a marine response, requiring numeric wave height and sea temperature
fn parse_response(text: &str) -> Result<MarineSnapshot, ApiError> {
    let response: MarineResponse =
        serde_json::from_str(text).map_err(|e| ApiError::MarineUnavailable(e.to_string()))?;

    let current = response
        .current
        .ok_or_else(|| unavailable("response has no current block"))?;

    let wave_height = current
        .wave_height
        .as_ref()
        .and_then(Value::as_f64)
        .ok_or_else(|| unavailable("wave_height is not a number"))?;
    let sea_surface_temperature = current
        .sea_surface_temperature
        .as_ref()
        .and_then(Value::as_f64)
        .ok_or_else(|| unavailable("sea_surface_temperature is not a number"))?;

    // The timestamp is informational; only the two readings decide availability
    let time = current.time.as_deref().and_then(parse_api_time);

    Ok(MarineSnapshot {
        time,
        wave_height,
        sea_surface_temperature,
        units: response.current_units.unwrap_or_default(),
    })
}

fn unavailable(reason: &str) -> ApiError {
    ApiError::MarineUnavailable(reason.to_string())
}

/// Marine API response; values stay loosely typed until validated
#[derive(Debug, Deserialize)]
struct MarineResponse {
    current: Option<CurrentMarine>,
    current_units: Option<MarineUnits>,
}

#[derive(Debug, Deserialize)]
struct CurrentMarine {
    time: Option<String>,
    wave_height: Option<Value>,
    sea_surface_temperature: Option<Value>,
}
