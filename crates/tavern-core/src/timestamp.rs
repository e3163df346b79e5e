//! Lenient timestamp parsing.
//!
//! The server is not consistent about timestamp formats: full RFC 3339,
//! naive date-times (with `T` or a space, seconds optional), and bare dates
//! all show up.
//! Everything is interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a calendar date-time. Returns `None` for empty or unrecognized input.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde `deserialize_with` adapter for `DateTime<Utc>` fields that accepts
/// anything [`parse_timestamp`] understands. Serialization stays RFC 3339.
pub mod lenient {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, de};

    /// Deserialize from any supported timestamp format.
    ///
    /// # Errors
    ///
    /// Fails when the string is not a recognizable date-time.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("unrecognized timestamp: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_timestamp("2024-01-05T10:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn parses_naive_datetime_variants() {
        let t = parse_timestamp("2024-03-01T12:30:00.123456").unwrap();
        assert_eq!((t.month(), t.minute()), (3, 30));
        let s = parse_timestamp("2024-03-01 12:30:00").unwrap();
        assert_eq!(s.hour(), 12);
    }

    #[test]
    fn parses_minute_precision_datetimes() {
        let t = parse_timestamp("2024-01-02T10:00").unwrap();
        assert_eq!((t.day(), t.hour(), t.minute(), t.second()), (2, 10, 0, 0));
        let s = parse_timestamp("2024-01-02 10:45").unwrap();
        assert_eq!((s.hour(), s.minute()), (10, 45));
        assert!(s > parse_timestamp("1066-10-14").unwrap());
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let dt = parse_timestamp("2024-01-02").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2024, 1, 2, 0));
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-45").is_none());
    }
}
