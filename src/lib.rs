//! wxsearch library
//!
//! Location search with debounced geocoding, plus current weather and
//! marine conditions for the chosen place. The binary wraps this in a
//! terminal UI; integration tests drive the orchestrator directly.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod debounce;
pub mod logging;
pub mod orchestrator;
pub mod state;
pub mod ui;
