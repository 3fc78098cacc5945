//! Date/time utilities for lanshare.

use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC datetime as ISO-8601 with millisecond precision.
///
/// Produces e.g. `2026-10-18T09:30:00.123Z`, the format browsers get from
/// `Date.prototype.toISOString`.
pub fn to_iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format a filesystem timestamp as ISO-8601 with millisecond precision.
pub fn system_time_to_iso8601(time: SystemTime) -> String {
    to_iso8601(&DateTime::<Utc>::from(time))
}

/// Current time formatted as ISO-8601.
pub fn now_iso8601() -> String {
    to_iso8601(&Utc::now())
}
