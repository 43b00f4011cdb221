//! Errors returned by the Open-Meteo clients

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Open-Meteo endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, timeout or unreadable body
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(StatusCode),

    /// The response body is missing fields or has the wrong shape
    #[error("Malformed response: {0}")]
    Validation(String),

    /// No usable marine data for the requested coordinates
    #[error("Marine data not available for this location: {0}")]
    MarineUnavailable(String),
}

impl ApiError {
    /// True for failures of the request itself rather than of its payload
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::HttpStatus(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transport() {
        assert!(ApiError::HttpStatus(StatusCode::INTERNAL_SERVER_ERROR).is_transport());
        assert!(!ApiError::Validation("current".to_string()).is_transport());
        assert!(!ApiError::MarineUnavailable("400 Bad Request".to_string()).is_transport());
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::HttpStatus(StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("400"));

        let err = ApiError::Validation("missing field current.temperature_2m".to_string());
        assert!(err.to_string().contains("current.temperature_2m"));
    }
}
