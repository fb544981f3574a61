use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    sync::OnceLock,
};
use time::{
    Date as TimeDate, Duration as TimeDuration, Month, format_description::BorrowedFormatItem,
};

static FORMAT: OnceLock<Option<Vec<BorrowedFormatItem<'static>>>> = OnceLock::new();

///
/// Date
///
/// Calendar day stored as its day number relative to 1970-01-01. Day numbers
/// order exactly like the dates they encode, which makes `Date` usable as a
/// physical key component for date-typed fields.
///
/// The full `i32` day range is valid, but only days inside the calendar's
/// four-digit year range have an ISO form; the rest display as raw day
/// numbers and refuse to serialize.
///

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
    pub const MIN: Self = Self(i32::MIN);
    pub const MAX: Self = Self(i32::MAX);

    const fn epoch_date() -> TimeDate {
        // Safe: constant valid date
        match TimeDate::from_calendar_date(1970, Month::January, 1) {
            Ok(d) => d,
            Err(_) => unreachable!(),
        }
    }

    #[must_use]
    pub fn new_checked(y: i32, m: u8, d: u8) -> Option<Self> {
        let month = Month::try_from(m).ok()?;
        let date = TimeDate::from_calendar_date(y, month, d).ok()?;

        Some(Self::from_time_date(date))
    }

    #[must_use]
    pub const fn from_days(days: i32) -> Self {
        Self(days)
    }

    /// Day number since the epoch.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn checked_add_days(self, days: i32) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Parse an ISO `YYYY-MM-DD` string into a `Date`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let format = FORMAT
            .get_or_init(|| time::format_description::parse("[year]-[month]-[day]").ok())
            .as_ref()?;

        TimeDate::parse(s, format).ok().map(Self::from_time_date)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_time_date(date: TimeDate) -> Self {
        let epoch = Self::epoch_date();
        let days = (date - epoch).whole_days();

        Self(days as i32)
    }

    // None outside the calendar's representable years.
    fn to_time_date(self) -> Option<TimeDate> {
        Self::epoch_date().checked_add(TimeDuration::days(self.0.into()))
    }
}

impl Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({})", self.0)
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(d) = self.to_time_date() else {
            return write!(f, "day {}", self.0);
        };
        let month: u8 = d.month().into();

        write!(f, "{:04}-{:02}-{:02}", d.year(), month, d.day())
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.to_time_date().is_none() {
            return Err(serde::ser::Error::custom(format!(
                "date out of calendar range: day {}",
                self.0
            )));
        }

        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {s}")))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_parse_returns_none() {
        assert!(Date::parse("2025-13-40").is_none());
        assert!(Date::new_checked(2025, 2, 30).is_none());
    }

    #[test]
    fn day_numbers_count_from_the_epoch() {
        assert_eq!(Date::new_checked(1970, 1, 1).unwrap(), Date::default());
        assert_eq!(Date::new_checked(1970, 1, 2).unwrap().get(), 1);
        assert_eq!(Date::new_checked(1969, 12, 31).unwrap().get(), -1);
    }

    #[test]
    fn checked_add_days_stops_at_extremes() {
        assert_eq!(Date::MAX.checked_add_days(1), None);
        assert_eq!(Date::MIN.checked_add_days(-1), None);
        assert_eq!(Date::default().checked_add_days(1), Some(Date::from_days(1)));
    }

    #[test]
    fn display_formats_as_iso_date() {
        let date = Date::new_checked(2025, 10, 19).unwrap();

        assert_eq!(format!("{date}"), "2025-10-19");
        assert_eq!(Date::parse("2025-10-19"), Some(date));
    }

    #[test]
    fn serde_uses_iso_text() {
        let date = Date::new_checked(2024, 2, 29).unwrap();
        let json = serde_json::to_string(&date).unwrap();

        assert_eq!(json, "\"2024-02-29\"");
        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), date);
    }

    #[test]
    fn last_calendar_day_round_trips() {
        let last = Date::new_checked(9999, 12, 31).unwrap();
        let json = serde_json::to_string(&last).unwrap();

        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), last);
        let past = last.checked_add_days(1).unwrap();
        assert_eq!(past.to_string(), format!("day {}", past.get()));
    }

    #[test]
    fn days_past_the_calendar_refuse_to_serialize() {
        for date in [Date::MAX, Date::MIN, Date::from_days(3_000_000)] {
            assert!(serde_json::to_string(&date).is_err(), "{date:?} serialized");
        }
    }

    #[test]
    fn distinct_days_never_share_debug_or_display_text() {
        let far = Date::from_days(3_000_000);

        assert_eq!(format!("{far:?}"), "Date(3000000)");
        assert_ne!(format!("{far:?}"), format!("{:?}", Date::MAX));
        assert_eq!(far.to_string(), "day 3000000");
        assert_ne!(far.to_string(), Date::MAX.to_string());
    }
}
