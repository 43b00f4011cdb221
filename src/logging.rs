//! File-based logging
//!
//! The terminal belongs to the TUI, so log output goes to a file
//! (`~/.cache/wxsearch/wxsearch.log` on Linux unless configured otherwise).
//! Filtering follows `RUST_LOG`, defaulting to `wxsearch=info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "wxsearch=info";

/// Default log file location, if a home directory can be determined
pub fn default_log_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "wxsearch")?;
    Some(project_dirs.cache_dir().join("wxsearch.log"))
}

/// Installs the global tracing subscriber writing to `path`
///
/// Returns the path actually used. Errors only concern the log file itself;
/// callers can carry on without logging.
pub fn init(path: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_log_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no cache directory")
        })?,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    Ok(path)
}
