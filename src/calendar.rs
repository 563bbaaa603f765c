//! Molad arithmetic and conversion between day numbers and Hebrew dates.
//!
//! Day numbers are Rata Die: day 1 is 1 January of year 1 in the proleptic
//! Gregorian calendar, the same count `chrono` exposes through
//! `NaiveDate::num_days_from_ce`.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::trace;

use crate::consts::{
    HEBREW_EPOCH, LUNATION_DAYS, LUNATION_PARTS, MAX_YEAR, MEAN_YEAR_DENOMINATOR,
    MEAN_YEAR_NUMERATOR, METONIC_CYCLE, MIN_YEAR, MOLAD_BEHARAD_PARTS, MONTHS_PER_CYCLE,
    PARTS_PER_DAY,
};
use crate::prelude::*;
use crate::types::{Day, HebrewMonth, HebrewYear};
use crate::DateError;

/// A fixed day number, counted from 1 January 1 (proleptic Gregorian) = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{_0}")]
pub struct RataDie(i64);

impl RataDie {
    pub const fn new(day: i64) -> Self {
        Self(day)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Signed number of days from `other` to `self`
    #[inline]
    pub const fn since(self, other: Self) -> i64 {
        self.0 - other.0
    }

    /// Shifts by `days`, or `None` on overflow
    pub const fn checked_add(self, days: i64) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(day) => Some(Self(day)),
            None => None,
        }
    }

    /// Day of the week. Day 1 was a Monday.
    pub const fn weekday(self) -> Weekday {
        match self.0.rem_euclid(7) {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

impl From<NaiveDate> for RataDie {
    fn from(date: NaiveDate) -> Self {
        Self(i64::from(date.num_days_from_ce()))
    }
}

impl TryFrom<RataDie> for NaiveDate {
    type Error = DateError;

    fn try_from(day: RataDie) -> Result<Self, Self::Error> {
        i32::try_from(day.get())
            .ok()
            .and_then(Self::from_num_days_from_ce_opt)
            .ok_or(DateError::OutOfRange(day.get()))
    }
}

/// Days from the epoch to the molad of Tishrei of `year`, postponed by a day
/// when that would otherwise put Rosh Hashanah on Sunday, Wednesday or Friday.
fn elapsed_days(year: i64) -> i64 {
    let months = (MONTHS_PER_CYCLE * year - (MONTHS_PER_CYCLE - 1))
        .div_euclid(i64::from(METONIC_CYCLE));
    let parts = MOLAD_BEHARAD_PARTS + LUNATION_PARTS * months;
    let days = LUNATION_DAYS * months + parts.div_euclid(PARTS_PER_DAY);

    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Extra delay keeping year lengths within the six permitted values:
/// no 356-day common year after this one and no 382-day leap year before it.
fn year_length_correction(year: i64) -> i64 {
    let previous = elapsed_days(year - 1);
    let current = elapsed_days(year);
    let next = elapsed_days(year + 1);

    if next - current == 356 {
        2
    } else if current - previous == 382 {
        1
    } else {
        0
    }
}

/// Day number of 1 Tishrei of `year`
pub(crate) fn new_year(year: i64) -> RataDie {
    RataDie(HEBREW_EPOCH.get() + elapsed_days(year) + year_length_correction(year))
}

/// Days from 1 Tishrei of `year` to 1 Tishrei of the following year
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn days_in_year(year: u32) -> u16 {
    let year = i64::from(year);
    let days = new_year(year + 1).since(new_year(year));
    debug_assert!((353..=385).contains(&days));
    days as u16
}

/// Day number of `day` `month` `year`. The parts are assumed to be validated.
pub(crate) fn fixed_from_hebrew(year: HebrewYear, month: HebrewMonth, day: Day) -> RataDie {
    let quality = year.quality();
    let preceding: i64 = year
        .months()
        .iter()
        .take_while(|&&m| m != month)
        .map(|m| i64::from(m.length(quality)))
        .sum();

    RataDie(year.new_year_day().get() + preceding + i64::from(day.get()) - 1)
}

/// Locates the Hebrew year, month and day containing `date`.
///
/// # Errors
/// Returns `DateError::OutOfRange` when `date` falls before 1 Tishrei of
/// `MIN_YEAR` or after the last day of `MAX_YEAR`.
pub(crate) fn hebrew_from_fixed(
    date: RataDie,
) -> Result<(HebrewYear, HebrewMonth, Day), DateError> {
    let out_of_range = || DateError::OutOfRange(date.get());

    if date < new_year(i64::from(MIN_YEAR)) || date >= new_year(i64::from(MAX_YEAR) + 1) {
        return Err(out_of_range());
    }

    // Mean-year estimate lands on the right year or up to two before it
    let approx =
        (date.since(HEBREW_EPOCH) * MEAN_YEAR_DENOMINATOR).div_euclid(MEAN_YEAR_NUMERATOR) + 1;
    let mut year = approx - 1;
    while new_year(year + 1) <= date {
        year += 1;
    }
    let year = u32::try_from(year)
        .ok()
        .and_then(|y| HebrewYear::new(y).ok())
        .ok_or_else(out_of_range)?;
    trace!(rata_die = date.get(), approx, year = year.get(), "located hebrew year");

    let quality = year.quality();
    let mut remaining = date.since(year.new_year_day());
    for &month in year.months() {
        let length = i64::from(month.length(quality));
        if remaining < length {
            trace!(%month, offset = remaining, "located hebrew month");
            let value = u8::try_from(remaining + 1).map_err(|_| out_of_range())?;
            return Ok((year, month, Day::new(value, year, month)?));
        }
        remaining -= length;
    }

    Err(out_of_range())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{civil, year};

    #[test]
    fn test_epoch_is_new_year_of_year_one() {
        assert_eq!(new_year(1), HEBREW_EPOCH);
        assert_eq!(year(1).new_year_day(), HEBREW_EPOCH);
    }

    #[test]
    fn test_new_year_days() {
        struct TestCase {
            year:  u32,
            civil: (i32, u32, u32),
        }

        let cases = [
            TestCase {
                year:  5781,
                civil: (2020, 9, 19),
            },
            TestCase {
                year:  5782,
                civil: (2021, 9, 7),
            },
            TestCase {
                year:  5783,
                civil: (2022, 9, 26),
            },
            TestCase {
                year:  5784,
                civil: (2023, 9, 16),
            },
            TestCase {
                year:  5785,
                civil: (2024, 10, 3),
            },
            TestCase {
                year:  5786,
                civil: (2025, 9, 23),
            },
        ];

        for case in &cases {
            let (y, m, d) = case.civil;
            assert_eq!(
                year(case.year).new_year_day(),
                RataDie::from(civil(y, m, d)),
                "Rosh Hashanah {}",
                case.year
            );
        }
    }

    #[test]
    fn test_rosh_hashanah_never_on_sunday_wednesday_friday() {
        for n in MIN_YEAR..=MAX_YEAR {
            let weekday = year(n).new_year_day().weekday();
            assert!(
                !matches!(weekday, Weekday::Sun | Weekday::Wed | Weekday::Fri),
                "1 Tishrei {n} falls on {weekday}"
            );
        }
    }

    #[test]
    fn test_rata_die_matches_chrono() {
        assert_eq!(RataDie::from(civil(1, 1, 1)), RataDie::new(1));
        let date = civil(2024, 4, 23);
        let day = RataDie::from(date);
        assert_eq!(NaiveDate::try_from(day).unwrap(), date);
        assert_eq!(day.weekday(), date.weekday());
        assert_eq!(RataDie::new(1).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_rata_die_out_of_chrono_range() {
        let result = NaiveDate::try_from(RataDie::new(i64::MAX));
        assert!(matches!(result, Err(DateError::OutOfRange(_))));
    }

    #[test]
    fn test_hebrew_from_fixed_bounds() {
        let first = hebrew_from_fixed(HEBREW_EPOCH).unwrap();
        assert_eq!(
            (first.0.get(), first.1, first.2.get()),
            (1, HebrewMonth::Tishrei, 1)
        );

        let before = HEBREW_EPOCH.checked_add(-1).unwrap();
        assert!(matches!(hebrew_from_fixed(before), Err(DateError::OutOfRange(_))));

        let last_day = new_year(i64::from(MAX_YEAR) + 1).checked_add(-1).unwrap();
        let last = hebrew_from_fixed(last_day).unwrap();
        assert_eq!(
            (last.0.get(), last.1, last.2.get()),
            (9999, HebrewMonth::Elul, 29)
        );
        assert!(hebrew_from_fixed(last_day.checked_add(1).unwrap()).is_err());
    }

    #[test]
    fn test_fixed_from_hebrew_walks_months() {
        let y = year(5784);
        let day = |value, month| Day::new(value, y, month).unwrap();

        assert_eq!(
            fixed_from_hebrew(y, HebrewMonth::Tishrei, day(1, HebrewMonth::Tishrei)),
            y.new_year_day()
        );
        assert_eq!(
            fixed_from_hebrew(y, HebrewMonth::Nissan, day(15, HebrewMonth::Nissan)),
            RataDie::from(civil(2024, 4, 23))
        );
        assert_eq!(
            fixed_from_hebrew(y, HebrewMonth::Elul, day(29, HebrewMonth::Elul)),
            year(5785).new_year_day().checked_add(-1).unwrap()
        );
    }
}
