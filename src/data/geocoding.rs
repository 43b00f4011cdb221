//! Open-Meteo geocoding client
//!
//! Resolves free-text place names into a list of candidate locations.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{ApiError, LocationCandidate};

/// Base URL for the Open-Meteo geocoding API
pub const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Maximum number of candidates requested per search
pub const RESULT_COUNT: u8 = 10;

/// Geocoding API response; `results` is absent when nothing matched
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Option<Vec<LocationCandidate>>,
}

/// Client for the geocoding endpoint
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodingClient {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

impl GeocodingClient {
    /// Create a new GeocodingClient sharing the given HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: GEOCODING_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search for locations matching `query`
    ///
    /// # Returns
    /// * `Ok(Vec<LocationCandidate>)` - Up to 10 hits in API order, empty when nothing matched
    /// * `Err(ApiError)` - Network failure, non-success status, or undecodable body
    pub async fn search_locations(&self, query: &str) -> Result<Vec<LocationCandidate>, ApiError> {
        debug!(query, "searching locations");

        let count = RESULT_COUNT.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", query),
                ("count", count.as_str()),
                ("language", "en"),
                ("format", "json"),
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

fn parse_response(text: &str) -> Result<Vec<LocationCandidate>, ApiError> {
    let response: GeocodeResponse =
        serde_json::from_str(text).map_err(|e| ApiError::Validation(e.to_string()))?;
    Ok(response.results.unwrap_or_default())
}
