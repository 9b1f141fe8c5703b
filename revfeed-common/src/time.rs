//! Timestamp utilities
//!
//! All persisted timestamps are ISO-8601 text in UTC. One parser handles
//! every variant that can appear in a data file: a trailing `Z`, an explicit
//! offset, or no zone information at all (treated as UTC). Unparsable input
//! maps to the earliest representable instant so that it sorts after every
//! real record and never lands in a recency window.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp for persistence (RFC 3339 with a `Z` suffix)
pub fn format_utc(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a persisted timestamp, falling back to the sentinel on bad input.
///
/// Returns `DateTime::<Utc>::MIN_UTC` for anything that cannot be parsed.
pub fn parse_utc_or_min(text: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return dt.with_timezone(&Utc);
    }

    // Zone-less timestamps are treated as UTC
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc();
    }

    DateTime::<Utc>::MIN_UTC
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_utc_suffix() {
        let ts = parse_utc_or_min("2025-06-01T12:30:45Z");
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap());
    }

    #[test]
    fn test_parse_explicit_offset_normalized_to_utc() {
        let ts = parse_utc_or_min("2025-06-01T14:30:45+02:00");
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap());
    }

    #[test]
    fn test_parse_zoneless_treated_as_utc() {
        let ts = parse_utc_or_min("2025-06-01T12:30:45");
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap());
    }

    #[test]
    fn test_parse_zoneless_with_microseconds() {
        let ts = parse_utc_or_min("2025-06-01T12:30:45.123456");
        assert_eq!(ts.timestamp(), Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap().timestamp());
        assert_eq!(ts.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn test_parse_garbage_yields_sentinel() {
        assert_eq!(parse_utc_or_min("not a timestamp"), DateTime::<Utc>::MIN_UTC);
        assert_eq!(parse_utc_or_min(""), DateTime::<Utc>::MIN_UTC);
        assert_eq!(parse_utc_or_min("2025-13-99T99:99:99Z"), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_sentinel_sorts_before_real_timestamps() {
        let real = parse_utc_or_min("1971-01-01T00:00:00Z");
        assert!(parse_utc_or_min("garbage") < real);
    }

    #[test]
    fn test_format_round_trips() {
        let original = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap();
        let text = format_utc(original);
        assert_eq!(parse_utc_or_min(&text), original);
    }

    #[test]
    fn test_format_uses_z_suffix() {
        let text = format_utc(now());
        assert!(text.ends_with('Z'));
    }
}
