//! Wall-clock access and human-readable durations.
//!
//! State transitions take the current time as an argument so they stay
//! deterministic under test; event handlers read it from here. The browser
//! build enables `time`'s `wasm-bindgen` support so this works in WASM.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// Current UTC time.
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {unit} ago") } else { format!("{n} {unit}s ago") }
}

/// Coarse "3 hours ago" style label for `then` as seen at `now`.
pub fn time_ago(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - then;
    if elapsed.whole_minutes() < 1 {
        return "just now".to_owned();
    }
    if elapsed.whole_hours() < 1 {
        return plural(elapsed.whole_minutes(), "minute");
    }
    if elapsed.whole_days() < 1 {
        return plural(elapsed.whole_hours(), "hour");
    }
    if elapsed.whole_days() < 30 {
        return plural(elapsed.whole_days(), "day");
    }
    plural(elapsed.whole_days() / 30, "month")
}

/// `HH:MM` for message bubbles.
pub fn clock_time(at: OffsetDateTime) -> String {
    at.format(format_description!("[hour]:[minute]")).unwrap_or_default()
}

/// `YYYY-MM-DD` for conversation previews and request dates.
pub fn short_date(date: time::Date) -> String {
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}
