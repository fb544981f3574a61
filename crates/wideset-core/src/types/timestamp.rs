use crate::{error::Error, types::Date};
use chrono::DateTime;
use derive_more::Display;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u64 = 86_400;

///
/// Timestamp
/// (in seconds)
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Parse an RFC 3339 instant; instants before the epoch are rejected.
    #[allow(clippy::cast_sign_loss)]
    pub fn parse_rfc3339(s: &str) -> Result<Self, Error> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| Error::value_invalid(format!("timestamp parse error: {e}")))?;
        let ts = dt.timestamp();
        if ts < 0 {
            return Err(Error::value_invalid(format!("timestamp before epoch: {s}")));
        }

        Ok(Self(ts as u64))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Calendar day containing this instant (UTC), saturating at `Date::MAX`.
    ///
    /// Lossy: every second of a day maps to the same `Date`.
    #[must_use]
    pub fn to_date(self) -> Date {
        i32::try_from(self.0 / SECONDS_PER_DAY).map_or(Date::MAX, Date::from_days)
    }

    /// Whether this instant is exactly midnight UTC.
    #[must_use]
    pub const fn is_day_start(self) -> bool {
        self.0 % SECONDS_PER_DAY == 0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorOrigin;

    #[test]
    fn rfc3339_parses_to_seconds() {
        let ts = Timestamp::parse_rfc3339("1970-01-02T00:00:01Z").unwrap();

        assert_eq!(ts.get(), SECONDS_PER_DAY + 1);
    }

    #[test]
    fn rfc3339_failures_are_invalid_arguments() {
        for text in ["1969-12-31T23:59:59Z", "yesterday"] {
            let err = Timestamp::parse_rfc3339(text).expect_err(text);

            assert!(err.is_invalid_argument());
            assert_eq!(err.origin, ErrorOrigin::Value);
        }
    }

    #[test]
    fn to_date_floors_to_the_containing_day() {
        let morning = Timestamp::parse_rfc3339("2024-03-10T00:00:00Z").unwrap();
        let night = Timestamp::parse_rfc3339("2024-03-10T23:59:59Z").unwrap();
        let day = Date::new_checked(2024, 3, 10).unwrap();

        assert_eq!(morning.to_date(), day);
        assert_eq!(night.to_date(), day);
        assert!(morning.is_day_start());
        assert!(!night.is_day_start());
    }

    #[test]
    fn to_date_saturates() {
        assert_eq!(Timestamp::from_seconds(u64::MAX).to_date(), Date::MAX);
    }
}
