use chrono::{Days, NaiveDate};
use hebrew_date::{DateError, HebrewDate, HebrewMonth, HebrewYear, RataDie};

fn civil(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn hebrew_to_civil_roundtrip_every_day() {
    for n in 5700..=5800 {
        let year = HebrewYear::new(n).unwrap();
        let quality = year.quality();
        for &month in year.months() {
            for day in 1..=month.length(quality) {
                let date = HebrewDate::new(year, month, day).unwrap();
                let back = HebrewDate::from_civil(date.to_civil().unwrap()).unwrap();
                assert_eq!(back, date, "roundtrip failed for {date}");
            }
        }
    }
}

#[test]
fn civil_to_hebrew_roundtrip_consecutive_days() {
    let start = civil(1900, 1, 1);
    let mut previous = HebrewDate::from_civil(start).unwrap();
    for offset in 1..=(365 * 200) {
        let day = start.checked_add_days(Days::new(offset)).unwrap();
        let hebrew = HebrewDate::from_civil(day).unwrap();
        assert_eq!(hebrew.to_civil().unwrap(), day, "roundtrip failed for {day}");
        assert_eq!(
            previous.checked_add_days(1).unwrap(),
            hebrew,
            "{previous} is not followed by {hebrew}"
        );
        previous = hebrew;
    }
}

#[test]
fn every_year_starts_where_the_previous_one_ends() {
    for n in 1..9999 {
        let year = HebrewYear::new(n).unwrap();
        let next = HebrewYear::new(n + 1).unwrap();
        let span = next.new_year_day().since(year.new_year_day());
        assert_eq!(span, i64::from(year.length()), "length of year {n}");

        let last = HebrewDate::new(year, HebrewMonth::Elul, 29).unwrap();
        let first = HebrewDate::new(next, HebrewMonth::Tishrei, 1).unwrap();
        assert_eq!(last.to_fixed().checked_add(1), Some(first.to_fixed()));
    }
}

#[test]
fn leap_year_5784_months() {
    let year = HebrewYear::new(5784).unwrap();
    assert!(year.is_leap_year());

    let months = year.months();
    assert!(months.contains(&HebrewMonth::AdarI));
    assert!(months.contains(&HebrewMonth::AdarII));
    assert!(!months.contains(&HebrewMonth::Adar));

    let result = HebrewDate::new(year, HebrewMonth::Adar, 14);
    assert!(matches!(result, Err(DateError::MonthNotInYear { .. })));

    // Purim 5784 fell in Adar II
    let purim = HebrewDate::new(year, HebrewMonth::AdarII, 14).unwrap();
    assert_eq!(purim.to_civil().unwrap(), civil(2024, 3, 24));
}

#[test]
fn known_holidays() {
    let cases: &[(&str, (i32, u32, u32))] = &[
        ("1 Tishrei 5784", (2023, 9, 16)),  // Rosh Hashanah
        ("10 Tishrei 5784", (2023, 9, 25)), // Yom Kippur
        ("25 Kislev 5784", (2023, 12, 8)),  // Hanukkah
        ("15 Nissan 5784", (2024, 4, 23)),  // Pesach
        ("6 Sivan 5784", (2024, 6, 12)),    // Shavuot
        ("14 Adar 5785", (2025, 3, 14)),    // Purim
    ];

    for &(text, (y, m, d)) in cases {
        let date: HebrewDate = text.parse().unwrap();
        assert_eq!(date.to_civil().unwrap(), civil(y, m, d), "{text}");
        assert_eq!(date.to_string(), text);
    }
}

#[test]
fn rata_die_bridges_chrono() {
    let date = civil(2024, 4, 23);
    let fixed = RataDie::from(date);
    let hebrew = HebrewDate::from_fixed(fixed).unwrap();
    assert_eq!(hebrew.to_fixed(), fixed);
    assert_eq!(NaiveDate::try_from(fixed).unwrap(), date);
}
