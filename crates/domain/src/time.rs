//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_at`, dispatch times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Milliseconds since the unix epoch for `ts`.
#[must_use]
pub fn unix_millis(ts: Timestamp) -> i64 {
    ts.timestamp_millis()
}
