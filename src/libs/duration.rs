//! Compact duration parsing.
//!
//! Accepts a sequence of `<number><unit>` pairs with no separator, an optional
//! leading sign and optional decimal fractions: `1h30m`, `45m`, `1.5h`,
//! `-30m`, `300ms`. The bare literal `0` is also accepted.
//!
//! Valid units are `ns`, `us` (also `µs`/`μs`), `ms`, `s`, `m` and `h`.
//! Components are summed, so they may repeat and appear in any order.
//!
//! ```rust
//! use chrono::Duration;
//! use tlog::libs::duration::parse_duration;
//!
//! assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
//! assert!(parse_duration("3d").is_err());
//! ```

use crate::libs::error::{Result, WorklogError};
use crate::libs::messages::Message;
use chrono::Duration;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Largest magnitude that still fits a signed 64-bit nanosecond count once negated.
const MAX_MAGNITUDE: u64 = 1 << 63;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Splits off the leading run of ASCII digits as an integer.
///
/// Returns `None` on overflow.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    for digit in s[..end].bytes() {
        value = value.checked_mul(10)?.checked_add(u64::from(digit - b'0'))?;
        if value > MAX_MAGNITUDE {
            return None;
        }
    }
    Some((value, &s[end..]))
}

/// Splits off the digits after a decimal point as `(value, scale, rest)`.
///
/// Digits past the precision of `u64` are consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for digit in s[..end].bytes() {
        if overflow {
            continue;
        }
        match value.checked_mul(10).and_then(|v| v.checked_add(u64::from(digit - b'0'))) {
            Some(next) if next <= MAX_MAGNITUDE => {
                value = next;
                scale *= 10.0;
            }
            _ => overflow = true,
        }
    }
    (value, scale, &s[end..])
}

/// Parses a compact duration such as `1h30m` into a signed [`Duration`].
///
/// Negative values are accepted. Magnitudes beyond roughly 292 years
/// overflow and are rejected.
pub fn parse_duration(token: &str) -> Result<Duration> {
    let invalid = |reason: &str| WorklogError::InvalidDuration(Message::InvalidDuration(token.to_string(), reason.to_string()));

    let (negative, mut rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(invalid("expected a number followed by a unit, e.g. 1h30m"));
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid("expected a number"));
        }

        let before = rest.len();
        let (whole, after_int) = leading_int(rest).ok_or_else(|| invalid("value is too large"))?;
        let has_int = after_int.len() != before;
        rest = after_int;

        let (mut fraction, mut scale, mut has_fraction) = (0, 1.0, false);
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (value, value_scale, after_fraction) = leading_fraction(after_dot);
            has_fraction = after_fraction.len() != after_dot.len();
            fraction = value;
            scale = value_scale;
            rest = after_fraction;
        }
        if !has_int && !has_fraction {
            return Err(invalid("expected digits around the decimal point"));
        }

        let unit_end = rest.find(|c: char| c == '.' || c.is_ascii_digit()).unwrap_or(rest.len());
        if unit_end == 0 {
            return Err(invalid("missing unit, use h, m, s, ms, us or ns"));
        }
        let (unit, after_unit) = rest.split_at(unit_end);
        rest = after_unit;
        let unit = unit_nanos(unit).ok_or_else(|| invalid(&format!("unknown unit \"{}\"", unit)))?;

        let mut component = whole
            .checked_mul(unit)
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or_else(|| invalid("value is too large"))?;
        if fraction > 0 {
            // Sub-nanosecond remainders are dropped.
            component = component
                .checked_add((fraction as f64 * (unit as f64 / scale)) as u64)
                .filter(|v| *v <= MAX_MAGNITUDE)
                .ok_or_else(|| invalid("value is too large"))?;
        }

        total = total
            .checked_add(component)
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or_else(|| invalid("value is too large"))?;
    }

    let nanos = if negative {
        // `MAX_MAGNITUDE` is exactly `i64::MIN` in magnitude.
        0i64.checked_sub_unsigned(total).ok_or_else(|| invalid("value is too large"))?
    } else {
        i64::try_from(total).map_err(|_| invalid("value is too large"))?
    };

    Ok(Duration::nanoseconds(nanos))
}
