//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static DATE_SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_\\/]").expect("Failed to compile date separator regex"));

/// Display and storage format.
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// A validated birthday.
///
/// Parsed from `day-month-year`, where the separators may be any of
/// `-`, `_`, `\` or `/`. A birthday must be strictly earlier than the day
/// it is set on; it is not checked again afterwards.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("30/09/1990").unwrap();
/// assert_eq!(birthday.to_string(), "30-09-1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, checked against the local current date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MalformedDate` if the input is not three
    /// integers forming a real date, and `ValidationError::BirthdayNotInPast`
    /// if the date is today or later.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::new_as_of(raw, Local::now().date_naive())
    }

    /// Create a new Birthday, checked against an explicit `today`.
    pub fn new_as_of(raw: impl AsRef<str>, today: NaiveDate) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let date = Self::parse(raw)?;
        if date >= today {
            return Err(ValidationError::BirthdayNotInPast(raw.to_string()));
        }
        Ok(Self(date))
    }

    /// Replace the stored value, keeping the old one if validation fails.
    pub fn set(&mut self, raw: impl AsRef<str>) -> Result<(), ValidationError> {
        *self = Self::new(raw)?;
        Ok(())
    }

    /// Parse `day<sep>month<sep>year` into a date without the past check.
    fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
        let malformed = || ValidationError::MalformedDate(raw.to_string());

        let tokens: Vec<&str> = DATE_SEPARATOR_REGEX.split(raw).collect();
        let [day, month, year] = tokens.as_slice() else {
            return Err(malformed());
        };

        let day: u32 = day.trim().parse().map_err(|_| malformed())?;
        let month: u32 = month.trim().parse().map_err(|_| malformed())?;
        let year: i32 = year.trim().parse().map_err(|_| malformed())?;
        if year < 1 {
            return Err(malformed());
        }

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// February 29 is observed on February 28 in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day.saturating_sub(1)))
    }

    /// The first anniversary on or after `today`.
    pub fn next_anniversary(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year >= today {
            return Some(this_year);
        }
        self.anniversary_in(today.year() + 1)
    }

    /// Days from `today` until the next anniversary; 0 on the day itself.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_anniversary(today).map(|next| (next - today).num_days())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Stored birthdays were validated when set; only the format is checked on load.
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s)
            .map(Birthday)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
