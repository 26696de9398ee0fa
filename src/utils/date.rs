//! ISO 8601 date handling shared by filtering, sorting, timelines and export.
//!
//! Values without an offset are interpreted as UTC.

use std::sync::LazyLock;

use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;
use jiff::Timestamp;
use regex::Regex;

static DATE_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date prefix regex should be valid")
    });

/// Parse an ISO 8601 string into a UTC timestamp.
pub fn parse_iso_timestamp(value: &str) -> Option<Timestamp> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp);
    }

    if let Ok(datetime) = value.parse::<DateTime>() {
        return datetime
            .to_zoned(TimeZone::UTC)
            .ok()
            .map(|zoned| zoned.timestamp());
    }

    value
        .parse::<Date>()
        .ok()
        .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
        .map(|zoned| zoned.timestamp())
}

/// Epoch milliseconds for an ISO 8601 string, or `None` when it does not parse.
pub fn parse_iso_millis(value: &str) -> Option<i64> {
    parse_iso_timestamp(value).map(|timestamp| timestamp.as_millisecond())
}

/// Render a stored date as `YYYY-MM-DD`.
///
/// Values already starting with a calendar date are truncated; anything else
/// is re-parsed and reformatted in UTC. Unparseable values pass through.
pub fn format_date_only(raw: &str) -> String {
    if DATE_PREFIX_REGEX.is_match(raw) {
        if let Some(prefix) = raw.get(..10) {
            return prefix.to_string();
        }
    }

    match parse_iso_timestamp(raw) {
        Some(timestamp) => timestamp.to_zoned(TimeZone::UTC).date().to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_millis_accepts_common_shapes() {
        assert_eq!(parse_iso_millis("1970-01-01T00:00:00.000Z"), Some(0));
        assert_eq!(parse_iso_millis("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_iso_millis("1970-01-01T00:00:01"), Some(1_000));
        assert_eq!(parse_iso_millis("1970-01-01T01:00:00+01:00"), Some(0));
    }

    #[test]
    fn test_parse_iso_millis_rejects_garbage() {
        assert_eq!(parse_iso_millis(""), None);
        assert_eq!(parse_iso_millis("not a date"), None);
        assert_eq!(parse_iso_millis("2026-13-45"), None);
    }

    #[test]
    fn test_format_date_only() {
        assert_eq!(format_date_only("2026-02-20T10:30:00.000Z"), "2026-02-20");
        assert_eq!(format_date_only("2026-02-20"), "2026-02-20");
        assert_eq!(format_date_only("tomorrow"), "tomorrow");
    }

    #[test]
    fn test_format_date_only_passes_non_ascii_digits_through() {
        assert_eq!(format_date_only("٢٠٢٦-٠٢-٢٠"), "٢٠٢٦-٠٢-٢٠");
        assert_eq!(format_date_only("２０２６-０２-２０"), "２０２６-０２-２０");
    }
}
