//! Windows FILETIME conversion.
//!
//! UserAssist records carry their last-access timestamp as a FILETIME: a
//! signed 64-bit count of 100-nanosecond ticks since 1601-01-01T00:00:00Z.
//! This module converts that raw count to a [`DateTime<Utc>`].

use chrono::{DateTime, Utc};

/// 100-nanosecond ticks per microsecond.
const TICKS_PER_MICROSECOND: i64 = 10;

/// Microseconds between 1601-01-01 and the Unix epoch.
const EPOCH_DELTA_MICROS: i64 = 11_644_473_600_000_000;

/// Convert a raw FILETIME tick count to a UTC timestamp.
///
/// A raw value of zero means "never recorded" in UserAssist data and maps
/// to `None` rather than the 1601 epoch. Sub-microsecond precision is
/// dropped; the division truncates toward zero.
pub fn filetime_to_utc(raw: i64) -> Option<DateTime<Utc>> {
    if raw == 0 {
        return None;
    }
    let micros = raw / TICKS_PER_MICROSECOND;
    DateTime::from_timestamp_micros(micros - EPOCH_DELTA_MICROS)
}
