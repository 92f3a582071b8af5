use chrono::{DateTime, Datelike, Utc};

/// ISO calendar week for an epoch-milliseconds timestamp. Timestamps are
/// validated at draw construction; an out-of-range value maps to week 0.
pub fn iso_week_of_millis(millis: i64) -> u32 {
    DateTime::from_timestamp_millis(millis)
        .map(|ts| ts.iso_week().week())
        .unwrap_or(0)
}

/// ISO year and week of the current moment, the form the draw-results API
/// expects in its by-week path.
pub fn current_iso_week() -> (i32, u32) {
    let now = Utc::now();
    (now.iso_week().year(), now.iso_week().week())
}
