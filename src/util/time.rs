//! Clock helpers for message timestamps.
//!
//! In the browser these use the JS `Date` so times render in the user's
//! local timezone; outside the browser they fall back to UTC arithmetic so
//! the formatting rules stay natively testable.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current time in epoch milliseconds. Returns `0.0` outside the browser.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Format epoch milliseconds as a localized `HH:MM` string.
#[must_use]
pub fn clock_time(ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        #[allow(clippy::cast_possible_truncation)]
        let total_minutes = (ms / 60_000.0).floor() as i64;
        let minutes = total_minutes.rem_euclid(60);
        let hours = (total_minutes / 60).rem_euclid(24);
        format!("{hours:02}:{minutes:02}")
    }
}
