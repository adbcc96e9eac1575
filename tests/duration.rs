#[cfg(test)]
mod tests {
    use chrono::Duration;
    use tlog::libs::duration::parse_duration;
    use tlog::libs::error::WorklogError;

    fn assert_invalid(token: &str) {
        match parse_duration(token) {
            Err(WorklogError::InvalidDuration(_)) => {}
            other => panic!("expected InvalidDuration for {:?}, got {:?}", token, other),
        }
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("45m").unwrap(), Duration::minutes(45));
        assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
    }

    #[test]
    fn test_unit_order_does_not_matter() {
        assert_eq!(parse_duration("1h30m").unwrap(), parse_duration("30m1h").unwrap());
        assert_eq!(parse_duration("15m1h15m").unwrap(), Duration::minutes(90));
    }

    #[test]
    fn test_small_units() {
        assert_eq!(parse_duration("90s").unwrap(), Duration::seconds(90));
        assert_eq!(parse_duration("300ms").unwrap(), Duration::milliseconds(300));
        assert_eq!(parse_duration("20us").unwrap(), Duration::microseconds(20));
        assert_eq!(parse_duration("20µs").unwrap(), Duration::microseconds(20));
        assert_eq!(parse_duration("20μs").unwrap(), Duration::microseconds(20));
        assert_eq!(parse_duration("7ns").unwrap(), Duration::nanoseconds(7));
    }

    #[test]
    fn test_fractions() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration(".5h").unwrap(), Duration::minutes(30));
        assert_eq!(parse_duration("1.h").unwrap(), Duration::hours(1));
        assert_eq!(parse_duration("1.25m").unwrap(), Duration::seconds(75));
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse_duration("-30m").unwrap(), Duration::minutes(-30));
        assert_eq!(parse_duration("+15m").unwrap(), Duration::minutes(15));
        assert_eq!(parse_duration("-1h30m").unwrap(), Duration::minutes(-90));
    }

    #[test]
    fn test_bare_zero() {
        assert_eq!(parse_duration("0").unwrap(), Duration::zero());
        assert_eq!(parse_duration("-0").unwrap(), Duration::zero());
        assert_eq!(parse_duration("0m").unwrap(), Duration::zero());
    }

    #[test]
    fn test_empty_and_sign_only() {
        assert_invalid("");
        assert_invalid("-");
        assert_invalid("+");
    }

    #[test]
    fn test_missing_or_unknown_unit() {
        assert_invalid("30");
        assert_invalid("1h30");
        assert_invalid("3d");
        assert_invalid("1H");
        assert_invalid("1 h");
    }

    #[test]
    fn test_malformed_numbers() {
        assert_invalid("h");
        assert_invalid(".h");
        assert_invalid("1.2.3h");
        assert_invalid("--1h");
    }

    #[test]
    fn test_overflow() {
        assert!(parse_duration("2562047h").is_ok());
        assert_invalid("2562048h");
        assert_invalid("99999999999999999999ns");
        assert_invalid("2000000h2000000h");
    }

    #[test]
    fn test_error_message_names_token() {
        let error = parse_duration("3d").unwrap_err();
        let text = error.to_string();
        assert!(text.contains("3d"));
        assert!(text.contains("unknown unit"));
    }
}
