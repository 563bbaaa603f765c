//! The Hebrew lunisolar calendar.
//!
//! A [`HebrewYear`] is classified as deficient, regular or abundant and as
//! common or leap; month lengths follow from that classification, and a
//! [`HebrewDate`] converts to and from a civil [`chrono::NaiveDate`].

mod calendar;
mod consts;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::RataDie;
pub use consts::*;
pub use types::{Day, HebrewMonth, HebrewYear, Quality, is_leap_year, month_length, year_length};

use crate::prelude::*;
use chrono::{NaiveDate, Weekday};
use std::cmp::Ordering;
use std::str::FromStr;

/// A validated day in the Hebrew calendar.
///
/// The month always occurs in the year (plain Adar only in common years,
/// Adar I and Adar II only in leap years) and the day never runs past the
/// end of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{day} {month} {year}")]
pub struct HebrewDate {
    year:  HebrewYear,
    month: HebrewMonth,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u32),
    #[display(fmt = "Invalid month index: {} (must be 3-16)", "_0")]
    InvalidMonth(u8),
    #[display(fmt = "Unknown month name: {_0}")]
    UnknownMonth(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for building and converting Hebrew dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Adar in a leap year, or Adar I / Adar II in a common year.
    #[error("Month {month} does not occur in year {year}")]
    MonthNotInYear { year: HebrewYear, month: HebrewMonth },

    /// Day is zero or past the end of the month.
    #[error("Invalid day {day} for {month} {year} (must be 1-{max})")]
    InvalidDay {
        year:  HebrewYear,
        month: HebrewMonth,
        day:   u8,
        max:   u8,
    },

    /// Day number outside the years `MIN_YEAR..=MAX_YEAR` or outside what
    /// the civil calendar can represent.
    #[error("Day number {0} is outside the supported calendar range")]
    OutOfRange(i64),

    /// Error parsing a date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl HebrewDate {
    /// Creates a date, checking the month against the year's leap status and
    /// the day against the month's length.
    ///
    /// # Errors
    /// Returns `DateError::MonthNotInYear` or `DateError::InvalidDay`.
    pub fn new(year: HebrewYear, month: HebrewMonth, day: u8) -> Result<Self, DateError> {
        if !year.contains_month(month) {
            return Err(DateError::MonthNotInYear { year, month });
        }
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw parts: year number, month and day
    ///
    /// # Errors
    /// Returns `DateError` if any part is invalid.
    pub fn from_parts(year: u32, month: HebrewMonth, day: u8) -> Result<Self, DateError> {
        Self::new(HebrewYear::new(year)?, month, day)
    }

    /// The Hebrew date falling on a civil date
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for civil dates before 1 Tishrei
    /// `MIN_YEAR` or after the end of `MAX_YEAR`.
    pub fn from_civil(date: NaiveDate) -> Result<Self, DateError> {
        Self::from_fixed(RataDie::from(date))
    }

    /// The civil date this day falls on
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if `chrono` cannot represent the day.
    pub fn to_civil(&self) -> Result<NaiveDate, DateError> {
        NaiveDate::try_from(self.to_fixed())
    }

    /// The Hebrew date for a day number
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` outside the supported years.
    pub fn from_fixed(date: RataDie) -> Result<Self, DateError> {
        let (year, month, day) = calendar::hebrew_from_fixed(date)?;
        Ok(Self { year, month, day })
    }

    /// Day number of this date
    pub fn to_fixed(&self) -> RataDie {
        calendar::fixed_from_hebrew(self.year, self.month, self.day)
    }

    /// Returns the year
    pub const fn year(&self) -> HebrewYear {
        self.year
    }

    /// Returns the month
    pub const fn month(&self) -> HebrewMonth {
        self.month
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Day plus the month's ordinal. A comparison key within one stretch
    /// of months of equal leap status, not a day-of-year count.
    pub const fn height(&self) -> u8 {
        self.day.get() + self.month.ordinal()
    }

    /// 1-based position of this day counted from 1 Tishrei
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn day_of_year(&self) -> u16 {
        // at most 385
        (self.to_fixed().since(self.year.new_year_day()) + 1) as u16
    }

    /// Day of the week
    pub fn weekday(&self) -> Weekday {
        self.to_fixed().weekday()
    }

    /// The date `days` later (or earlier, when negative)
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported years.
    pub fn checked_add_days(&self, days: i64) -> Result<Self, DateError> {
        let start = self.to_fixed();
        let shifted = start
            .checked_add(days)
            .ok_or(DateError::OutOfRange(start.get()))?;
        Self::from_fixed(shifted)
    }

    /// Compares every stored part. Derived fields of the year never differ
    /// for equal year numbers, so this agrees with `==`.
    pub fn equals(&self, other: &Self) -> bool {
        self.day == other.day && self.month == other.month && self.year.get() == other.year.get()
    }
}

impl FromStr for HebrewDate {
    type Err = DateError;

    /// Parses `"<day> <month> <year>"`, e.g. `"15 Nissan 5784"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let parts: Vec<&str> = trimmed
            .split(DATE_SEPARATOR)
            .filter(|p| !p.is_empty())
            .collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected <day> <month> <year>, found {} parts: {trimmed}",
                parts.len()
            ))
            .into());
        };

        let day = day
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*day).to_owned()))?;
        let month = month.parse::<HebrewMonth>()?;
        let year = year
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;

        Self::from_parts(year, month, day)
    }
}

impl TryFrom<(u32, HebrewMonth, u8)> for HebrewDate {
    type Error = DateError;

    fn try_from(value: (u32, HebrewMonth, u8)) -> Result<Self, Self::Error> {
        Self::from_parts(value.0, value.1, value.2)
    }
}

impl TryFrom<NaiveDate> for HebrewDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_civil(date)
    }
}

impl TryFrom<HebrewDate> for NaiveDate {
    type Error = DateError;

    fn try_from(date: HebrewDate) -> Result<Self, Self::Error> {
        date.to_civil()
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_fixed().cmp(&other.to_fixed())
    }
}

impl serde::Serialize for HebrewDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HebrewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
