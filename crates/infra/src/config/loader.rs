//! Configuration loader
//!
//! Loads engine configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required variables are missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FIXWISE_API_BASE_URL`: Appointments backend base URL (required)
//! - `FIXWISE_BOOKING_HOUR_OFFSET`: Hour offset for booking timestamps
//! - `FIXWISE_WEEK_START`: First day of the week (`monday`, `sunday`, ...)
//! - `FIXWISE_HTTP_TIMEOUT_SECS`: HTTP request timeout in seconds
//! - `FIXWISE_HTTP_MAX_ATTEMPTS`: HTTP attempts per request
//!
//! ## File Locations
//! The loader probes `config.{json,toml}` and `fixwise.{json,toml}` in the
//! working directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Weekday;
use fixwise_domain::{CalendarConfig, FixwiseError, HttpConfig, Result};

/// Load configuration with automatic fallback strategy.
///
/// # Errors
/// Returns `FixwiseError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<CalendarConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables.
///
/// Only the base URL is required; the remaining variables fall back to the
/// engine defaults.
///
/// # Errors
/// Returns `FixwiseError::Config` if the base URL is missing or any set
/// variable has an invalid value.
pub fn load_from_env() -> Result<CalendarConfig> {
    let api_base_url = std::env::var("FIXWISE_API_BASE_URL").map_err(|_| {
        FixwiseError::Config("Missing required environment variable: FIXWISE_API_BASE_URL".into())
    })?;

    let defaults = CalendarConfig {
        api_base_url,
        booking_hour_offset: fixwise_domain::constants::DEFAULT_BOOKING_HOUR_OFFSET,
        week_start: Weekday::Mon,
        http: HttpConfig::default(),
    };

    let booking_hour_offset = match std::env::var("FIXWISE_BOOKING_HOUR_OFFSET") {
        Ok(raw) => raw.parse::<i64>().map_err(|e| {
            FixwiseError::Config(format!("Invalid booking hour offset: {e}"))
        })?,
        Err(_) => defaults.booking_hour_offset,
    };

    let week_start = match std::env::var("FIXWISE_WEEK_START") {
        Ok(raw) => Weekday::from_str(&raw)
            .map_err(|_| FixwiseError::Config(format!("Invalid week start day: {raw}")))?,
        Err(_) => defaults.week_start,
    };

    let timeout_seconds = match std::env::var("FIXWISE_HTTP_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| FixwiseError::Config(format!("Invalid HTTP timeout: {e}")))?,
        Err(_) => defaults.http.timeout_seconds,
    };

    let max_attempts = match std::env::var("FIXWISE_HTTP_MAX_ATTEMPTS") {
        Ok(raw) => raw
            .parse::<usize>()
            .map_err(|e| FixwiseError::Config(format!("Invalid HTTP attempt count: {e}")))?,
        Err(_) => defaults.http.max_attempts,
    };

    Ok(CalendarConfig {
        booking_hour_offset,
        week_start,
        http: HttpConfig { timeout_seconds, max_attempts },
        ..defaults
    })
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations. Format is detected
/// by extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `FixwiseError::Config` if no file is found or parsing fails.
pub fn load_from_file(path: Option<PathBuf>) -> Result<CalendarConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FixwiseError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            FixwiseError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FixwiseError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<CalendarConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| FixwiseError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| FixwiseError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(FixwiseError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        for name in ["config.json", "config.toml", "fixwise.json", "fixwise.toml"] {
            candidates.push(cwd.join(name));
            candidates.push(cwd.join("..").join(name));
        }
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            for name in ["config.json", "config.toml", "fixwise.json", "fixwise.toml"] {
                candidates.push(exe_dir.join(name));
            }
        }
    }

    candidates.into_iter().find(|path| path.exists())
}
