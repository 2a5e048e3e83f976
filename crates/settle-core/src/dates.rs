//! Calendar date helpers.
//!
//! Every date in settle is a `chrono::NaiveDate`: a date already normalized
//! to midnight, so day differences are whole numbers and no rounding is
//! needed. Incoming date strings are parsed leniently; anything that cannot
//! be read as a date is treated as absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Whole days from `today` until `date`.
///
/// Negative means overdue, zero means due today. Returns `None` when the
/// date is absent.
#[must_use]
pub fn days_until(date: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    date.map(|date| date.signed_duration_since(today).num_days())
}

/// Parse a date string in any of the accepted formats.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, RFC 3339 timestamps, and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps. Timestamps keep the calendar date they
/// were written with; no timezone conversion is applied.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|timestamp| timestamp.date())
        })
}

/// Serde adapter for optional date fields that never fails.
///
/// Use with `#[serde(default, deserialize_with = "lenient_date")]`.
/// `null`, empty strings, unparseable strings, and non-string values all
/// become `None`.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => {
            let parsed = parse_date(&text);
            if parsed.is_none() && !text.trim().is_empty() {
                debug!(value = %text, "unparseable date treated as absent");
            }
            parsed
        }
        Some(other) => {
            debug!(value = %other, "non-string date treated as absent");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn today_is_zero_days_away() {
        let today = date("2025-11-20");
        assert_eq!(days_until(Some(today), today), Some(0));
        assert_eq!(days_until(Some(today), today), days_until(Some(today), today));
    }

    #[test]
    fn past_dates_are_negative() {
        let today = date("2025-11-20");
        assert_eq!(days_until(Some(date("2025-11-17")), today), Some(-3));
        assert_eq!(days_until(Some(date("2025-11-27")), today), Some(7));
    }

    #[test]
    fn absent_date_has_no_day_count() {
        assert_eq!(days_until(None, date("2025-11-20")), None);
    }

    #[test]
    fn day_count_crosses_month_and_year_boundaries() {
        assert_eq!(
            days_until(Some(date("2026-01-02")), date("2025-12-30")),
            Some(3)
        );
    }

    #[rstest]
    #[case("2025-11-22", Some("2025-11-22"))]
    #[case(" 2025-11-22 ", Some("2025-11-22"))]
    #[case("2025/11/22", Some("2025-11-22"))]
    #[case("2025-11-22T23:30:00+09:00", Some("2025-11-22"))]
    #[case("2025-11-22T10:00:00Z", Some("2025-11-22"))]
    #[case("2025-11-22T10:00:00", Some("2025-11-22"))]
    #[case("2025-11-22 10:00:00", Some("2025-11-22"))]
    #[case("", None)]
    #[case("next tuesday", None)]
    #[case("2025-13-01", None)]
    fn parses_accepted_formats(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_date(raw), expected.map(date));
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "lenient_date")]
        due: Option<NaiveDate>,
    }

    #[rstest]
    #[case(r#"{"due": "2025-11-22"}"#, Some("2025-11-22"))]
    #[case(r#"{"due": null}"#, None)]
    #[case(r#"{}"#, None)]
    #[case(r#"{"due": "soon"}"#, None)]
    #[case(r#"{"due": 20251122}"#, None)]
    fn lenient_date_never_fails(#[case] json: &str, #[case] expected: Option<&str>) {
        let holder: Holder = serde_json::from_str(json).unwrap();
        assert_eq!(holder.due, expected.map(date));
    }
}
