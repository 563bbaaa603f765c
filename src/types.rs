use crate::calendar::{self, RataDie};
use crate::consts::{
    BASE_YEAR_DAYS, FULL_MONTH_DAYS, HOLLOW_MONTH_DAYS, LEAP_MONTH_DAYS, LEAP_YEAR_POSITIONS,
    MAX_YEAR, METONIC_CYCLE, MIN_YEAR,
};
use crate::{DateError, ParseError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::num::{NonZeroU8, NonZeroU32};
use std::str::FromStr;

/// How far a year's length departs from the base 354 days (384 in a leap year).
///
/// The discriminant is the signed day adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Quality {
    /// Marcheshvan and Kislev both hollow: 353 or 383 days
    Deficient = -1,
    /// Marcheshvan hollow, Kislev full: 354 or 384 days
    Regular = 0,
    /// Marcheshvan and Kislev both full: 355 or 385 days
    Abundant = 1,
}

impl Quality {
    /// Signed day adjustment relative to the base year length
    #[inline]
    pub const fn offset(self) -> i16 {
        self as i16
    }

    /// Classifies a total year length. Leap years are detected by length,
    /// so both 353 and 383 map to `Deficient`.
    pub(crate) fn from_year_length(days: u16) -> Self {
        let base = if days > BASE_YEAR_DAYS + LEAP_MONTH_DAYS / 2 {
            days - LEAP_MONTH_DAYS
        } else {
            days
        };
        match base.cmp(&BASE_YEAR_DAYS) {
            Ordering::Less => Self::Deficient,
            Ordering::Equal => Self::Regular,
            Ordering::Greater => Self::Abundant,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deficient => "deficient",
            Self::Regular => "regular",
            Self::Abundant => "abundant",
        })
    }
}

/// A Hebrew year (Anno Mundi) guaranteed to be in the range `MIN_YEAR..=MAX_YEAR`.
///
/// Only the year number is stored. Quality and leap status are derived from
/// it on demand, so two years with the same number are always identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HebrewYear(NonZeroU32);

impl HebrewYear {
    /// Creates a new year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u32) -> Result<Self, ParseError> {
        let non_zero = NonZeroU32::new(value).ok_or(ParseError::InvalidYear(value))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year number
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Whether this year carries the extra month Adar I
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.get())
    }

    /// Deficient, regular or abundant, from the molad arithmetic of this
    /// year and the next
    pub fn quality(self) -> Quality {
        Quality::from_year_length(calendar::days_in_year(self.get()))
    }

    /// Total days in the year: 353..=355, or 383..=385 in a leap year
    pub fn length(self) -> u16 {
        year_length(self.quality(), self.is_leap_year())
    }

    /// The months of this year in calendar order, starting at Tishrei
    pub fn months(self) -> &'static [HebrewMonth] {
        if self.is_leap_year() {
            &HebrewMonth::LEAP_YEAR
        } else {
            &HebrewMonth::COMMON_YEAR
        }
    }

    /// 12, or 13 in a leap year
    pub fn month_count(self) -> u8 {
        if self.is_leap_year() { 13 } else { 12 }
    }

    /// Whether `month` occurs in this year. Plain Adar is only found in
    /// common years, Adar I and Adar II only in leap years.
    pub fn contains_month(self, month: HebrewMonth) -> bool {
        month.occurs_in(self.is_leap_year())
    }

    /// Day number of 1 Tishrei (Rosh Hashanah) of this year
    pub fn new_year_day(self) -> RataDie {
        calendar::new_year(i64::from(self.get()))
    }

    /// The following year, if it is still within `MAX_YEAR`
    pub fn next_year(self) -> Option<Self> {
        self.get().checked_add(1).and_then(|y| Self::new(y).ok())
    }

    /// The preceding year, if it is not before `MIN_YEAR`
    pub fn previous_year(self) -> Option<Self> {
        self.get().checked_sub(1).and_then(|y| Self::new(y).ok())
    }
}

impl TryFrom<u32> for HebrewYear {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HebrewYear> for u32 {
    fn from(year: HebrewYear) -> Self {
        year.0.get()
    }
}

impl fmt::Display for HebrewYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fourteen month identifiers of the Hebrew calendar.
///
/// Discriminants are the fixed enumeration indices (Nissan = 3 .. Adar = 16).
/// They are not an ordering: use [`HebrewMonth::ordinal`] for the height and
/// [`HebrewYear::months`] for calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HebrewMonth {
    Nissan = 3,
    Iyar,
    Sivan,
    Tamuz,
    Av,
    Elul,
    Tishrei,
    Marcheshvan,
    Kislev,
    Tevet,
    Shevat,
    #[serde(rename = "Adar_I")]
    AdarI,
    #[serde(rename = "Adar_II")]
    AdarII,
    Adar,
}

impl HebrewMonth {
    /// Every month identifier, in enumeration-index order
    pub const ALL: [Self; 14] = [
        Self::Nissan,
        Self::Iyar,
        Self::Sivan,
        Self::Tamuz,
        Self::Av,
        Self::Elul,
        Self::Tishrei,
        Self::Marcheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shevat,
        Self::AdarI,
        Self::AdarII,
        Self::Adar,
    ];

    /// Calendar order of a common year
    pub const COMMON_YEAR: [Self; 12] = [
        Self::Tishrei,
        Self::Marcheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shevat,
        Self::Adar,
        Self::Nissan,
        Self::Iyar,
        Self::Sivan,
        Self::Tamuz,
        Self::Av,
        Self::Elul,
    ];

    /// Calendar order of a leap year
    pub const LEAP_YEAR: [Self; 13] = [
        Self::Tishrei,
        Self::Marcheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shevat,
        Self::AdarI,
        Self::AdarII,
        Self::Nissan,
        Self::Iyar,
        Self::Sivan,
        Self::Tamuz,
        Self::Av,
        Self::Elul,
    ];

    /// Canonical English transliteration
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nissan => "Nissan",
            Self::Iyar => "Iyar",
            Self::Sivan => "Sivan",
            Self::Tamuz => "Tamuz",
            Self::Av => "Av",
            Self::Elul => "Elul",
            Self::Tishrei => "Tishrei",
            Self::Marcheshvan => "Marcheshvan",
            Self::Kislev => "Kislev",
            Self::Tevet => "Tevet",
            Self::Shevat => "Shevat",
            Self::AdarI => "Adar_I",
            Self::AdarII => "Adar_II",
            Self::Adar => "Adar",
        }
    }

    /// Fixed enumeration index, 3..=16
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The month's height, used as the additive term of [`crate::HebrewDate::height`].
    ///
    /// Elul and Tishrei share height 8. Plain Adar sits in the slot of Adar I.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Nissan | Self::Iyar | Self::Sivan | Self::Tamuz | Self::Av | Self::Elul => {
                self.index()
            }
            Self::Adar => Self::AdarI.index() - 1,
            Self::Tishrei
            | Self::Marcheshvan
            | Self::Kislev
            | Self::Tevet
            | Self::Shevat
            | Self::AdarI
            | Self::AdarII => self.index() - 1,
        }
    }

    /// Days in this month for a year of the given quality
    pub const fn length(self, quality: Quality) -> u8 {
        month_length(self, quality)
    }

    /// Adar I and Adar II only exist in leap years
    pub const fn is_leap_only(self) -> bool {
        matches!(self, Self::AdarI | Self::AdarII)
    }

    pub(crate) const fn occurs_in(self, leap_year: bool) -> bool {
        match self {
            Self::Adar => !leap_year,
            Self::AdarI | Self::AdarII => leap_year,
            _ => true,
        }
    }
}

impl TryFrom<u8> for HebrewMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|m| m.index() == value)
            .ok_or(ParseError::InvalidMonth(value))
    }
}

impl From<HebrewMonth> for u8 {
    fn from(month: HebrewMonth) -> Self {
        month.index()
    }
}

impl FromStr for HebrewMonth {
    type Err = ParseError;

    /// Accepts the canonical name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownMonth(trimmed.to_owned()))
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day-of-month value guaranteed to be valid for its year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the month's length in `year`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: HebrewYear, month: HebrewMonth) -> Result<Self, DateError> {
        let max = month.length(year.quality());
        let invalid = || DateError::InvalidDay {
            year,
            month,
            day: value,
            max,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > max {
            return Err(invalid());
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Whether `year` is one of the seven leap years of its 19-year cycle
pub fn is_leap_year(year: u32) -> bool {
    let position = match year % METONIC_CYCLE {
        0 => METONIC_CYCLE,
        residue => residue,
    };
    LEAP_YEAR_POSITIONS.contains(&position)
}

/// Total days in a year of the given quality and leap status
pub const fn year_length(quality: Quality, leap_year: bool) -> u16 {
    let days = BASE_YEAR_DAYS.saturating_add_signed(quality.offset());
    if leap_year {
        days + LEAP_MONTH_DAYS
    } else {
        days
    }
}

/// Days in `month` for a year of the given quality.
///
/// Only Marcheshvan and Kislev vary.
pub const fn month_length(month: HebrewMonth, quality: Quality) -> u8 {
    match month {
        HebrewMonth::Nissan
        | HebrewMonth::Sivan
        | HebrewMonth::Av
        | HebrewMonth::Tishrei
        | HebrewMonth::Shevat
        | HebrewMonth::AdarI => FULL_MONTH_DAYS,
        HebrewMonth::Iyar
        | HebrewMonth::Tamuz
        | HebrewMonth::Elul
        | HebrewMonth::Tevet
        | HebrewMonth::AdarII
        | HebrewMonth::Adar => HOLLOW_MONTH_DAYS,
        HebrewMonth::Marcheshvan => {
            if matches!(quality, Quality::Abundant) {
                FULL_MONTH_DAYS
            } else {
                HOLLOW_MONTH_DAYS
            }
        }
        HebrewMonth::Kislev => {
            if matches!(quality, Quality::Deficient) {
                HOLLOW_MONTH_DAYS
            } else {
                FULL_MONTH_DAYS
            }
        }
    }
}
