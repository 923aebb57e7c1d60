// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present.

use crate::models::Coordinate;
use std::env;
use std::path::PathBuf;

/// Default search origin (lower Manhattan).
pub const DEFAULT_ORIGIN: Coordinate = Coordinate::new(40.7128, -74.0060);

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend REST API base URL (including the `/api` prefix)
    pub api_url: String,
    /// Google Places API key; live search is disabled without it
    pub places_api_key: Option<String>,
    /// Places API base URL (overridable for tests)
    pub places_base_url: String,
    /// Directory holding durable and session storage files
    pub state_dir: PathBuf,
    /// Search origin
    pub origin: Coordinate,
    /// Default search radius in miles
    pub default_radius_miles: f64,
    /// Per-request HTTP timeout in seconds
    pub http_timeout_secs: u64,
    /// Emit JSON log lines instead of compact text
    pub json_logs: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080/api".to_string(),
            places_api_key: None,
            places_base_url: "https://maps.googleapis.com/maps/api/place".to_string(),
            state_dir: env::temp_dir().join("live-planner-test"),
            origin: DEFAULT_ORIGIN,
            default_radius_miles: 10.0,
            http_timeout_secs: 15,
            json_logs: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let state_dir = match env::var("LIVE_STATE_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_local_dir()
                .ok_or(ConfigError::Missing("LIVE_STATE_DIR"))?
                .join("live-planner"),
        };

        Ok(Self {
            api_url: env::var("LIVE_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            places_api_key: env::var("GOOGLE_PLACES_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            places_base_url: env::var("GOOGLE_PLACES_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.places_base_url),
            state_dir,
            origin: Coordinate::new(
                parse_var("LIVE_ORIGIN_LAT", defaults.origin.lat)?,
                parse_var("LIVE_ORIGIN_LNG", defaults.origin.lng)?,
            ),
            default_radius_miles: parse_var(
                "LIVE_DEFAULT_RADIUS_MILES",
                defaults.default_radius_miles,
            )?,
            http_timeout_secs: parse_var("LIVE_HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }

    /// Path of the durable storage file (auth token, cached profile).
    pub fn local_storage_path(&self) -> PathBuf {
        self.state_dir.join("local.json")
    }

    /// Path of the session storage file (schedule draft).
    pub fn session_storage_path(&self) -> PathBuf {
        self.state_dir.join("session.json")
    }
}

/// Read an optional variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
