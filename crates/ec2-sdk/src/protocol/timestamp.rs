//! Wire timestamps.
//!
//! EC2 sends ISO-8601 UTC timestamps with millisecond precision
//! (`2020-03-01T12:00:00.000Z`) and accepts the same format in requests.
//! `format` keeps millisecond precision; anything finer is dropped.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a wire timestamp. Offsets other than `Z` are converted to UTC and a
/// missing offset is read as UTC.
pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let value = value.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => Ok(parsed.with_timezone(&Utc)),
        Err(err) => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_has_millis_and_z() {
        let ts = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format(&ts), "2020-01-02T03:04:05.000Z");
    }

    #[test]
    fn format_drops_sub_millisecond_digits() {
        let ts = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        assert_eq!(format(&ts), "2020-01-02T03:04:05.123Z");
    }

    #[test]
    fn parse_with_and_without_fraction() {
        let a = parse("2019-12-31T23:59:59.000Z").unwrap();
        let b = parse("2019-12-31T23:59:59Z").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_offset_converts_to_utc() {
        let ts = parse("2021-06-01T10:00:00+02:00").unwrap();
        assert_eq!(format(&ts), "2021-06-01T08:00:00.000Z");
    }

    #[test]
    fn parse_naive_as_utc() {
        let ts = parse("2021-06-01T10:00:00").unwrap();
        assert_eq!(format(&ts), "2021-06-01T10:00:00.000Z");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse("yesterday").is_err());
    }
}
