//! Date helpers for ISO-8601 publication dates
//!
//! Publication dates travel as strings ("2024-03-15" or a full RFC 3339
//! timestamp). Comparisons always go through [`parse_iso_date`], which
//! reads the leading `YYYY-MM-DD` and ignores any time component.

use chrono::{Datelike, NaiveDate, SecondsFormat, Utc};

/// Parse the date portion of an ISO-8601 string
///
/// Accepts both plain dates ("2024-03-15") and full timestamps
/// ("2024-03-15T09:30:00Z"). Returns `None` for anything that does not
/// start with a valid `YYYY-MM-DD`.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let head = s.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Extract the year from an ISO date string
pub fn year_of(s: &str) -> Option<i32> {
    parse_iso_date(s).map(|d| d.year())
}

/// Current UTC timestamp as an RFC 3339 string with millisecond precision
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current UTC time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let d = parse_iso_date("2024-03-15").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 3, 15));
    }

    #[test]
    fn test_parse_full_timestamp() {
        let d = parse_iso_date("2024-03-15T09:30:00.000Z").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 3, 15));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_iso_date("").is_none());
        assert!(parse_iso_date("not a date").is_none());
        assert!(parse_iso_date("2024").is_none());
        assert!(parse_iso_date("2024-13-40").is_none());
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2024-01-01"), Some(2024));
        assert_eq!(year_of("nope"), None);
    }

    #[test]
    fn test_now_iso_is_parseable() {
        let now = now_iso();
        assert!(parse_iso_date(&now).is_some());
        assert!(now.ends_with('Z'));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: parsing never panics on arbitrary input
        #[test]
        fn test_parse_total(s in ".*") {
            let _ = parse_iso_date(&s);
        }

        /// Property: a formatted date round-trips
        #[test]
        fn test_date_round_trip(y in 1900i32..2100, m in 1u32..=12, d in 1u32..=28) {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let s = date.format("%Y-%m-%d").to_string();
            prop_assert_eq!(parse_iso_date(&s), Some(date));
        }
    }
}
