//! Lightweight UTC date/time utilities (no chrono dependency).
//!
//! Uses Howard Hinnant's civil_from_days algorithm for Unix-to-date conversion.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current UTC time as microseconds since the Unix epoch.
pub fn now_unix_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros() as u64
}

/// Current UTC time as Unix seconds.
pub fn now_unix_secs() -> u64 {
    now_unix_micros() / 1_000_000
}

/// Convert Unix seconds to an ISO-8601 UTC string with second precision.
pub fn unix_to_iso8601(secs: u64) -> String {
    let (date, clock) = split_civil(secs);
    format!("{date}T{clock}Z")
}

/// Convert Unix microseconds to an ISO-8601 UTC string with microsecond precision.
pub fn unix_micros_to_iso8601(micros: u64) -> String {
    let (date, clock) = split_civil(micros / 1_000_000);
    let frac = micros % 1_000_000;
    format!("{date}T{clock}.{frac:06}Z")
}

fn split_civil(secs: u64) -> (String, String) {
    let days = (secs / 86400) as i64;
    let time_of_day = secs % 86400;
    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    let (y, m, d) = civil_from_days(days);
    (
        format!("{y:04}-{m:02}-{d:02}"),
        format!("{hours:02}:{minutes:02}:{seconds:02}"),
    )
}

/// Howard Hinnant's civil_from_days: Unix epoch days → (year, month, day).
fn civil_from_days(days: i64) -> (i64, u64, u64) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}
