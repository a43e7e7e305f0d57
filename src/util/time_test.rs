use super::*;

// These exercise the non-browser fallback path (UTC arithmetic).

#[test]
fn clock_time_formats_hours_and_minutes() {
    // 1970-01-01 14:05:00 UTC
    let ms = (14.0 * 3600.0 + 5.0 * 60.0) * 1000.0;
    assert_eq!(clock_time(ms), "14:05");
}

#[test]
fn clock_time_zero_pads() {
    let ms = (3.0 * 3600.0 + 7.0 * 60.0) * 1000.0;
    assert_eq!(clock_time(ms), "03:07");
}

#[test]
fn clock_time_wraps_across_days() {
    let day = 86_400_000.0;
    let ms = 3.0 * day + (23.0 * 3600.0 + 59.0 * 60.0) * 1000.0;
    assert_eq!(clock_time(ms), "23:59");
}
