//! Day token resolution.
//!
//! Turns the optional `[day]` argument into the calendar date the worklog is
//! logged on. "Today" is always the UTC date of the supplied instant.
//!
//! ## Accepted forms (case-insensitive)
//!
//! | Token                   | Result                                          |
//! |-------------------------|-------------------------------------------------|
//! | *(empty)*, `today`      | today                                           |
//! | `yesterday`             | today - 1 day                                   |
//! | `monday` .. `sunday`    | today + (wanted - current) days, Monday=1..Sunday=7 |
//! | `17`                    | that day of the current month                   |
//! | `03.17`                 | that day of the current year                    |
//! | `2024.03.17`            | that exact date                                 |
//!
//! The weekday offset is mechanical: asking for `monday` on a Wednesday gives
//! the Monday two days back, asking for `friday` gives the Friday two days
//! ahead. Days of the month are not range-checked, `31` in April rolls over
//! into May 1st and `0` is the last day of the previous month.

use crate::libs::error::{Result, WorklogError};
use crate::libs::messages::Message;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

/// Resolves `token` relative to `now`.
pub fn resolve_day(token: &str, now: DateTime<Utc>) -> Result<NaiveDate> {
    let invalid = || WorklogError::InvalidDay(Message::InvalidDay(token.to_string()));
    let today = now.date_naive();
    let token = token.to_lowercase();

    match token.as_str() {
        "" | "today" => return Ok(today),
        "yesterday" => return today.pred_opt().ok_or_else(invalid),
        _ => {}
    }

    if let Some(wanted) = weekday_from_name(&token) {
        let offset = i64::from(wanted.number_from_monday()) - i64::from(today.weekday().number_from_monday());
        return today.checked_add_signed(Duration::days(offset)).ok_or_else(invalid);
    }

    if let Ok(day) = token.parse::<i64>() {
        return day_of_month(today.year(), today.month(), day).ok_or_else(invalid);
    }

    if let Some(date) = parse_month_day(&token, today.year()) {
        return Ok(date);
    }

    if let Some(date) = parse_full_date(&token) {
        return Ok(date);
    }

    Err(invalid())
}

/// Full English weekday names only, abbreviations are not recognised.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Day `day` counted from the first of the month, overflowing into
/// neighbouring months.
fn day_of_month(year: i32, month: u32, day: i64) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = Duration::try_days(day.checked_sub(1)?)?;
    first.checked_add_signed(offset)
}

fn fixed_digits(field: &str, width: usize) -> Option<u32> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// `mm.dd` in `year`.
///
/// The pair must be a real calendar day in some year (so `02.29` is
/// accepted); it then rolls over like a day of the month if `year` lacks it.
fn parse_month_day(token: &str, year: i32) -> Option<NaiveDate> {
    let (month, day) = token.split_once('.')?;
    let month = fixed_digits(month, 2)?;
    let day = fixed_digits(day, 2)?;

    // 2000 is a leap year, so February accepts the 29th.
    NaiveDate::from_ymd_opt(2000, month, day)?;
    day_of_month(year, month, i64::from(day))
}

/// `yyyy.mm.dd`, validated against the given year.
fn parse_full_date(token: &str) -> Option<NaiveDate> {
    let mut fields = token.split('.');
    let year = fixed_digits(fields.next()?, 4)?;
    let month = fixed_digits(fields.next()?, 2)?;
    let day = fixed_digits(fields.next()?, 2)?;
    if fields.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}
