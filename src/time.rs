//! The compact timestamp format used by the Clash of Clans API.
//!
//! War start/end times are reported as `YYYYMMDDThhmmss.mmmZ`, e.g.
//! `20230115T093000.000Z`. This is not ISO 8601, so [`CocTime`] carries its
//! own parser and formatter and plugs them into `serde`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDateTime, SubsecRound, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DecodeError;

/// `chrono` layout equivalent of `YYYYMMDDThhmmss.mmmZ`.
const COC_TIME_LAYOUT: &str = "%Y%m%dT%H%M%S%.3fZ";

/// Exact byte length of a compact timestamp.
const COC_TIME_LEN: usize = 20;

/// A point in time decoded from the API's compact timestamp format.
///
/// # Example
///
/// ```rust
/// use coc_api::CocTime;
///
/// let t: CocTime = "20230115T093000.000Z".parse().unwrap();
/// assert_eq!(t.format(), "20230115T093000.000Z");
/// assert!("2023-01-15T09:30:00Z".parse::<CocTime>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CocTime(DateTime<Utc>);

impl CocTime {
    /// Parses a compact timestamp, tolerating surrounding `"` characters.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedTimestamp`] if the input deviates from
    /// `YYYYMMDDThhmmss.mmmZ` in any way or names an impossible date.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        let trimmed = text.trim_matches('"');
        let malformed = || DecodeError::MalformedTimestamp {
            value: text.to_string(),
        };

        if !has_compact_shape(trimmed) {
            return Err(malformed());
        }

        let naive =
            NaiveDateTime::parse_from_str(trimmed, COC_TIME_LAYOUT).map_err(|_| malformed())?;
        // chrono reads second 60 as a leap second
        if naive.nanosecond() >= 1_000_000_000 {
            return Err(malformed());
        }
        Ok(Self(naive.and_utc()))
    }

    /// Formats this timestamp in the compact layout, millisecond precision.
    #[must_use]
    pub fn format(&self) -> String {
        self.0.format(COC_TIME_LAYOUT).to_string()
    }

    /// Returns the wrapped UTC date-time.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

/// Checks digit and literal positions of `YYYYMMDDThhmmss.mmmZ`.
fn has_compact_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != COC_TIME_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        8 => *b == b'T',
        15 => *b == b'.',
        19 => *b == b'Z',
        _ => b.is_ascii_digit(),
    })
}

impl TryFrom<DateTime<Utc>> for CocTime {
    type Error = DecodeError;

    /// Sub-millisecond precision is truncated. Years outside `0000..=9999`
    /// and leap seconds have no compact form and are rejected.
    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        if !(0..=9999).contains(&value.year()) || value.nanosecond() >= 1_000_000_000 {
            return Err(DecodeError::MalformedTimestamp {
                value: value.to_rfc3339(),
            });
        }
        Ok(Self(value.trunc_subsecs(3)))
    }
}

impl From<CocTime> for DateTime<Utc> {
    fn from(value: CocTime) -> Self {
        value.0
    }
}

impl FromStr for CocTime {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CocTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl Serialize for CocTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for CocTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_valid_timestamp() {
        let t = CocTime::parse("20230115T093000.000Z").unwrap();
        let dt = t.as_datetime();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn test_parse_keeps_milliseconds() {
        let t = CocTime::parse("20230115T093000.123Z").unwrap();
        assert_eq!(t.as_datetime().timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_parse_strips_quotes() {
        let quoted = CocTime::parse("\"20230115T093000.000Z\"").unwrap();
        let bare = CocTime::parse("20230115T093000.000Z").unwrap();
        assert_eq!(quoted, bare);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            CocTime::parse("not-a-timestamp"),
            Err(DecodeError::MalformedTimestamp { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_layout_deviations() {
        for bad in [
            "",
            "20230115T093000Z",
            "20230115T093000.00Z",
            "20230115T093000.0000Z",
            "20230115 093000.000Z",
            "20230115T093000,000Z",
            "20230115T093000.000",
            "2023-1-15T093000.000Z",
            "2023O115T093000.000Z",
            "2023-01-15T09:30:00.000Z",
        ] {
            assert!(CocTime::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(CocTime::parse("20230230T093000.000Z").is_err());
        assert!(CocTime::parse("20231301T093000.000Z").is_err());
        assert!(CocTime::parse("20230115T253000.000Z").is_err());
        assert!(CocTime::parse("20230115T096000.000Z").is_err());
    }

    #[test]
    fn test_parse_rejects_second_sixty() {
        for bad in ["20230115T093060.000Z", "20230115T235960.999Z"] {
            assert!(
                matches!(CocTime::parse(bad), Err(DecodeError::MalformedTimestamp { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_format_uses_compact_layout() {
        let dt = Utc.with_ymd_and_hms(2021, 7, 4, 18, 5, 9).unwrap();
        assert_eq!(CocTime::try_from(dt).unwrap().format(), "20210704T180509.000Z");
    }

    #[test]
    fn test_round_trip_at_millisecond_precision() {
        let samples = [
            Utc.timestamp_millis_opt(0).unwrap(),
            Utc.timestamp_millis_opt(1_673_775_000_000).unwrap(),
            Utc.timestamp_millis_opt(1_700_000_000_999).unwrap(),
            Utc.timestamp_millis_opt(253_402_300_799_999).unwrap(),
        ];
        for dt in samples {
            let t = CocTime::try_from(dt).unwrap();
            assert_eq!(CocTime::parse(&t.format()).unwrap(), t);
        }
    }

    #[test]
    fn test_from_truncates_below_milliseconds() {
        let dt = Utc.timestamp_nanos(1_673_775_000_123_456_789);
        let t = CocTime::try_from(dt).unwrap();
        assert_eq!(t.format(), "20230115T093000.123Z");
    }

    #[test]
    fn test_try_from_rejects_years_without_compact_form() {
        let far_future = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        let before_zero = Utc.with_ymd_and_hms(-1, 12, 31, 0, 0, 0).unwrap();
        assert!(CocTime::try_from(far_future).is_err());
        assert!(CocTime::try_from(before_zero).is_err());

        let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        let t = CocTime::try_from(last).unwrap();
        assert_eq!(CocTime::parse(&t.format()).unwrap(), t);
    }

    #[test]
    fn test_serde_round_trip() {
        let t = CocTime::parse("20230115T093000.250Z").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#""20230115T093000.250Z""#);
        let back: CocTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        let result: Result<CocTime, _> = serde_json::from_str(r#""2023-01-15""#);
        assert!(result.is_err());
    }
}
