//! Birthday value object.

use super::digits::IntegerToken;
use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A birthday written as `DD.MM.YYYY`.
///
/// Only the ranges of day (1-31) and month (1-12) are checked. `31.02.2000`
/// is accepted: there is no month-length or leap-year check. The year may be
/// any integer of any length. Digits may come from any Unicode script. The raw
/// input is kept and rendered back unchanged.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("01.01.1990").unwrap();
/// assert_eq!(birthday.as_str(), "01.01.1990");
/// assert_eq!((birthday.day(), birthday.month()), (1, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    day: u32,
    month: u32,
}

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// The input must split on `.` into exactly three integers. Each token is
    /// parsed leniently: surrounding whitespace and a leading sign are allowed.
    /// The year is checked to be an integer and nothing more.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is not three
    /// integers or the day or month is out of range.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        match Self::parse(&raw) {
            Some((day, month)) => Ok(Self { raw, day, month }),
            None => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    fn parse(raw: &str) -> Option<(u32, u32)> {
        let mut tokens = raw.split('.');
        let day = IntegerToken::parse(tokens.next()?)?;
        let month = IntegerToken::parse(tokens.next()?)?;
        IntegerToken::parse(tokens.next()?)?;
        if tokens.next().is_some() {
            return None;
        }

        Some((day.in_range(1..=31)?, month.in_range(1..=12)?))
    }

    /// Get the birthday as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The date this birthday falls on in `year`.
    ///
    /// Days past the end of the month are moved to the month's last day, so
    /// `29.02` is celebrated on the 28th in common years and `31.04` on the 30th.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let last_day = days_in_month(year, self.month)?;
        NaiveDate::from_ymd_opt(year, self.month, self.day.min(last_day))
    }

    /// The first anniversary on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

// Serde support - serialize as the raw string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("01.01.1990").unwrap();
        assert_eq!(birthday.as_str(), "01.01.1990");
        assert_eq!(birthday.to_string(), "01.01.1990");
        assert_eq!(birthday.day(), 1);
        assert_eq!(birthday.month(), 1);
    }

    #[test]
    fn test_birthday_accepts_full_range() {
        for month in 1..=12 {
            for day in 1..=31 {
                let raw = format!("{}.{}.2001", day, month);
                assert!(Birthday::new(raw.clone()).is_ok(), "{} should be valid", raw);
            }
        }
    }

    #[test]
    fn test_birthday_keeps_known_looseness() {
        // No month-length check: these are accepted.
        assert!(Birthday::new("31.02.2001").is_ok());
        assert!(Birthday::new("31.04.2001").is_ok());
        assert!(Birthday::new("29.02.2001").is_ok());
    }

    #[test]
    fn test_birthday_rejects_out_of_range() {
        assert!(Birthday::new("01.13.1990").is_err());
        assert!(Birthday::new("32.01.1990").is_err());
        assert!(Birthday::new("00.01.1990").is_err());
        assert!(Birthday::new("01.00.1990").is_err());
        assert!(Birthday::new("-1.01.1990").is_err());
    }

    #[test]
    fn test_birthday_rejects_bad_shape() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("01.01").is_err());
        assert!(Birthday::new("01.01.1990.5").is_err());
        assert!(Birthday::new("1990-01-01").is_err());
        assert!(Birthday::new("aa.bb.cccc").is_err());
        assert!(Birthday::new("01..1990").is_err());
    }

    #[test]
    fn test_birthday_year_is_unchecked() {
        assert!(Birthday::new("15.06.-44").is_ok());
        assert!(Birthday::new("15.06.0").is_ok());
        assert!(Birthday::new("15.06.99999").is_ok());
        assert!(Birthday::new("01.01.99999999999999999999").is_ok());
        assert!(Birthday::new("01.01.-99999999999999999999").is_ok());
        assert!(Birthday::new("01.01.19x0").is_err());
    }

    #[test]
    fn test_birthday_accepts_unicode_digits() {
        let birthday = Birthday::new("٠٥.١٢.١٩٩٠").unwrap();
        assert_eq!((birthday.day(), birthday.month()), (5, 12));
        assert_eq!(birthday.as_str(), "٠٥.١٢.١٩٩٠");

        assert!(Birthday::new("٣٢.٠١.١٩٩٠").is_err());
    }

    #[test]
    fn test_birthday_huge_day_is_out_of_range() {
        assert!(Birthday::new("99999999999999999999.01.1990").is_err());
    }

    #[test]
    fn test_birthday_tokens_tolerate_whitespace() {
        let birthday = Birthday::new(" 5. 6 .1990").unwrap();
        assert_eq!((birthday.day(), birthday.month()), (5, 6));
        assert_eq!(birthday.as_str(), " 5. 6 .1990");
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::new("20.10.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2026, 10, 16)),
            Some(date(2026, 10, 20))
        );
    }

    #[test]
    fn test_next_occurrence_today() {
        let birthday = Birthday::new("16.10.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2026, 10, 16)),
            Some(date(2026, 10, 16))
        );
    }

    #[test]
    fn test_next_occurrence_wraps_year() {
        let birthday = Birthday::new("02.01.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2026, 12, 30)),
            Some(date(2027, 1, 2))
        );
    }

    #[test]
    fn test_anniversary_clamps_to_month_end() {
        let leap = Birthday::new("29.02.2000").unwrap();
        assert_eq!(leap.anniversary_in(2027), Some(date(2027, 2, 28)));
        assert_eq!(leap.anniversary_in(2028), Some(date(2028, 2, 29)));

        let april = Birthday::new("31.04.1990").unwrap();
        assert_eq!(april.anniversary_in(2026), Some(date(2026, 4, 30)));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("01.01.1990").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01.01.1990\"");

        let result: Result<Birthday, _> = serde_json::from_str("\"40.01.1990\"");
        assert!(result.is_err());
    }
}
