//! Domain constants shared across the engine

/// Hours rendered per day column in the day/week grids.
pub const HOURS_PER_DAY: u32 = 24;

/// Columns in a week grid.
pub const DAYS_PER_WEEK: u32 = 7;

/// Default hour offset applied when constructing booking timestamps.
///
/// Matches the backend's current timezone contract; deployments in other
/// locales must override this through `CalendarConfig`.
pub const DEFAULT_BOOKING_HOUR_OFFSET: i64 = 4;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default number of HTTP attempts (initial try + retries).
pub const DEFAULT_HTTP_MAX_ATTEMPTS: usize = 3;
