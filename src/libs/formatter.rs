//! Human-readable formatting for worklog values.
//!
//! Used by the dry-run preview and the negative-duration warning, so the
//! user sees the time back in the same shorthand they typed it in.
//!
//! ```rust
//! use tlog::libs::formatter::{format_day, format_elapsed};
//! use chrono::{Duration, NaiveDate};
//!
//! assert_eq!(format_elapsed(&(Duration::hours(1) + Duration::minutes(30))), "1h 30m");
//! assert_eq!(format_day(&NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()), "2024-03-14 (Thu)");
//! ```

use chrono::{Duration, NaiveDate};

/// Formats a duration as `1h 30m`, `45m`, `1h 0m 20s` or `-30m`.
///
/// Only whole seconds are shown, matching what Jira receives. Zero-valued
/// trailing components are dropped, zero itself is `0m`.
pub fn format_elapsed(duration: &Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let body = match (hours, minutes, seconds) {
        (0, m, 0) => format!("{}m", m),
        (0, m, s) => format!("{}m {}s", m, s),
        (h, 0, 0) => format!("{}h", h),
        (h, m, 0) => format!("{}h {}m", h, m),
        (h, m, s) => format!("{}h {}m {}s", h, m, s),
    };

    format!("{}{}", sign, body)
}

/// Formats a day as `YYYY-MM-DD (Www)`.
pub fn format_day(day: &NaiveDate) -> String {
    day.format("%Y-%m-%d (%a)").to_string()
}
