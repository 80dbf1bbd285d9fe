use super::*;
use time::macros::{date, datetime};

const NOW: OffsetDateTime = datetime!(2025-06-03 12:00 UTC);

#[test]
fn time_ago_under_a_minute_is_just_now() {
    assert_eq!(time_ago(datetime!(2025-06-03 11:59:30 UTC), NOW), "just now");
}

#[test]
fn time_ago_picks_largest_whole_unit() {
    assert_eq!(time_ago(datetime!(2025-06-03 11:59 UTC), NOW), "1 minute ago");
    assert_eq!(time_ago(datetime!(2025-06-03 11:15 UTC), NOW), "45 minutes ago");
    assert_eq!(time_ago(datetime!(2025-06-03 09:00 UTC), NOW), "3 hours ago");
    assert_eq!(time_ago(datetime!(2025-06-01 13:09 UTC), NOW), "1 day ago");
    assert_eq!(time_ago(datetime!(2025-03-01 12:00 UTC), NOW), "3 months ago");
}

#[test]
fn time_ago_in_the_future_is_just_now() {
    assert_eq!(time_ago(datetime!(2025-06-04 12:00 UTC), NOW), "just now");
}

#[test]
fn clock_time_is_zero_padded() {
    assert_eq!(clock_time(datetime!(2025-06-05 09:05 UTC)), "09:05");
}

#[test]
fn short_date_is_iso() {
    assert_eq!(short_date(date!(2025-06-05)), "2025-06-05");
}
