//! Runtime configuration
//!
//! Settings come from an optional TOML file in the XDG config directory
//! (`~/.config/wxsearch/config.toml` on Linux), overridden by CLI flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;
use crate::data::geocoding::GEOCODING_BASE_URL;
use crate::data::marine::MARINE_BASE_URL;
use crate::data::weather::OPEN_METEO_BASE_URL;

/// Quiet period between the last keystroke and the location search
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Upper bound for a single HTTP request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Endpoint base URLs, overridable for self-hosted Open-Meteo instances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub geocoding: String,
    pub weather: String,
    pub marine: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding: GEOCODING_BASE_URL.to_string(),
            weather: OPEN_METEO_BASE_URL.to_string(),
            marine: MARINE_BASE_URL.to_string(),
        }
    }
}

/// Top-level configuration
///
/// Example TOML:
/// ```toml
/// debounce_ms = 300
/// request_timeout_secs = 5
///
/// [endpoints]
/// weather = "http://localhost:8080/v1/forecast"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Debounce quiet period in milliseconds
    pub debounce_ms: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Where to write the log; defaults to the cache directory
    pub log_file: Option<PathBuf>,
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file: None,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Default config file location, if a home directory can be determined
    pub fn default_path() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "wxsearch")?;
        Some(project_dirs.config_dir().join("config.toml"))
    }

    /// Load config from `path`, or return defaults if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from a TOML string; absent keys take their defaults
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Resolves the effective configuration for a CLI invocation
    ///
    /// Reads `--config` (or the default path), then applies flag overrides
    /// and validates the result.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match cli.config.as_deref() {
            Some(path) => Self::load(path)?,
            None => match Self::default_path() {
                Some(path) => Self::load(&path)?,
                None => Self::default(),
            },
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Overrides file values with any flags given on the command line
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(debounce_ms) = cli.debounce_ms {
            self.debounce_ms = debounce_ms;
        }
        if let Some(timeout_secs) = cli.timeout_secs {
            self.request_timeout_secs = timeout_secs;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = Some(log_file.clone());
        }
    }

    /// Rejects values that would make the app unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::Invalid("debounce_ms must be positive".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.debounce(), Duration::from_millis(500));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.endpoints.geocoding, GEOCODING_BASE_URL);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_from_toml_partial_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            debounce_ms = 250

            [endpoints]
            marine = "http://localhost:8080/v1/marine"
            "#,
        )
        .expect("Failed to parse");

        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.endpoints.marine, "http://localhost:8080/v1/marine");
        assert_eq!(config.endpoints.weather, OPEN_METEO_BASE_URL);
    }

    #[test]
    fn test_from_toml_rejects_wrong_types() {
        assert!(Config::from_toml("debounce_ms = \"fast\"").is_err());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = Config::load(&temp_dir.path().join("absent.toml")).expect("Failed to load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reads_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "request_timeout_secs = 3\nlog_file = \"/tmp/wx.log\"\n")
            .expect("Failed to write config");

        let config = Config::load(&path).expect("Failed to load");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/wx.log")));
    }

    #[test]
    fn test_load_invalid_file_reports_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "this is = = not toml").expect("Failed to write config");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config = Config::from_toml("debounce_ms = 250").expect("Failed to parse");
        let cli = Cli::parse_from(["wxsearch", "--debounce-ms", "900", "--timeout-secs", "4"]);
        config.apply_cli(&cli);

        assert_eq!(config.debounce_ms, 900);
        assert_eq!(config.request_timeout_secs, 4);
    }

    #[test]
    fn test_resolve_with_explicit_config_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "debounce_ms = 120\n").expect("Failed to write config");
        let path_arg = path.to_string_lossy().to_string();

        let cli = Cli::parse_from(["wxsearch", "--config", &path_arg]);
        let config = Config::resolve(&cli).expect("Failed to resolve");
        assert_eq!(config.debounce_ms, 120);
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = Config {
            debounce_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = Config {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
