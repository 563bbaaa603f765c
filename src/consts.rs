use crate::calendar::RataDie;

/// Minimum valid Hebrew year (inclusive), Anno Mundi 1
pub const MIN_YEAR: u32 = 1;

/// Maximum valid Hebrew year (inclusive)
pub const MAX_YEAR: u32 = 9999;

/// Length of the Metonic cycle in years
pub const METONIC_CYCLE: u32 = 19;

/// Positions of the leap years within the 19-year cycle (1-indexed, residue 0 reads as 19)
pub const LEAP_YEAR_POSITIONS: [u32; 7] = [3, 6, 8, 11, 14, 17, 19];

/// Months in one Metonic cycle: 12 regular years of 12 months plus 7 leap years of 13
pub(crate) const MONTHS_PER_CYCLE: i64 = 235;

/// Days in a regular, non-leap year before the quality adjustment
pub const BASE_YEAR_DAYS: u16 = 354;

/// Length of the intercalated month (Adar I) in a leap year
pub const LEAP_MONTH_DAYS: u16 = 30;

/// Month length for "full" months
pub const FULL_MONTH_DAYS: u8 = 30;

/// Month length for "hollow" months
pub const HOLLOW_MONTH_DAYS: u8 = 29;

/// Halakim (parts) in a day: 24 hours of 1080 parts
pub(crate) const PARTS_PER_DAY: i64 = 25_920;

/// Parts beyond 29 whole days in a mean lunation (29d 12h 793p)
pub(crate) const LUNATION_PARTS: i64 = 13_753;

/// Parts (11h 204p) locating the molad of Tishrei AM 1, molad BaHaRaD
pub(crate) const MOLAD_BEHARAD_PARTS: i64 = 12_084;

/// Whole days in a mean lunation
pub(crate) const LUNATION_DAYS: i64 = 29;

/// Mean Hebrew year as a fraction of days, numerator
pub(crate) const MEAN_YEAR_NUMERATOR: i64 = 35_975_351;
/// Mean Hebrew year as a fraction of days, denominator
pub(crate) const MEAN_YEAR_DENOMINATOR: i64 = 98_496;

/// 1 Tishrei AM 1, which is 7 October 3761 BCE in the proleptic Julian calendar
pub const HEBREW_EPOCH: RataDie = RataDie::new(-1_373_427);

/// Separator between day, month and year in the textual form
pub const DATE_SEPARATOR: char = ' ';
