//! Engine configuration structures
//!
//! The booking hour offset and the API base URL were historically embedded
//! as literals next to the calendar rendering code. They are threaded here
//! as explicit configuration so deployments can validate them against the
//! backend's actual timezone contract.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BOOKING_HOUR_OFFSET, DEFAULT_HTTP_MAX_ATTEMPTS, DEFAULT_HTTP_TIMEOUT_SECS,
};

/// Top-level configuration for the availability engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Base URL of the appointments backend, e.g. `https://api.fixwise.app/v1`.
    pub api_base_url: String,
    /// Hour offset applied when constructing booking timestamps.
    #[serde(default = "default_booking_hour_offset")]
    pub booking_hour_offset: i64,
    /// First day of the week for week and month grids.
    #[serde(default = "default_week_start", with = "weekday_name")]
    pub week_start: Weekday,
    /// HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,
}

/// HTTP client settings for the appointments backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub timeout_seconds: u64,
    /// Total attempts per request (initial try + retries).
    #[serde(default = "default_http_max_attempts")]
    pub max_attempts: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
            max_attempts: DEFAULT_HTTP_MAX_ATTEMPTS,
        }
    }
}

const fn default_booking_hour_offset() -> i64 {
    DEFAULT_BOOKING_HOUR_OFFSET
}

const fn default_week_start() -> Weekday {
    Weekday::Mon
}

const fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

const fn default_http_max_attempts() -> usize {
    DEFAULT_HTTP_MAX_ATTEMPTS
}

mod weekday_name {
    //! Serialize week-start days as lowercase English names.

    use std::str::FromStr;

    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        let name = match day {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        };
        serializer.serialize_str(name)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Weekday::from_str(&raw)
            .map_err(|_| serde::de::Error::custom(format!("invalid week start day: {raw}")))
    }
}
