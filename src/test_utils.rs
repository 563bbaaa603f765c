//! Short constructors for tests.

use chrono::NaiveDate;

use crate::{HebrewDate, HebrewMonth, HebrewYear};

pub fn year(value: u32) -> HebrewYear {
    HebrewYear::new(value).expect("valid hebrew year in test")
}

pub fn date(y: u32, month: HebrewMonth, day: u8) -> HebrewDate {
    HebrewDate::new(year(y), month, day).expect("valid hebrew date in test")
}

pub fn civil(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid civil date in test")
}
