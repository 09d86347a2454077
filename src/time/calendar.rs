//! Calendar dates and their conversion to Julian Day numbers.
//!
//! Two calendars are supported: the Gregorian calendar (civil use since
//! 1582 October 15) and the Julian calendar which preceded it. Both date
//! types carry a fractional day-of-month encoding the time of day, and
//! both convert to and from [`JulianDay`] with Meeus's ch. 7 algorithms.
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{JulianDay, Month};
use crate::constants::SECONDS_PER_DAY;
use crate::errors::{Error, OrreryResult};

/// Gregorian leap year rule: divisible by 4, except centuries not
/// divisible by 400.
pub fn is_gregorian_leap_year(year: i64) -> bool {
    if year % 400 == 0 {
        return true;
    }
    if year % 100 == 0 {
        return false;
    }
    year % 4 == 0
}

/// Julian calendar leap year rule: every fourth year.
pub fn is_julian_leap_year(year: i64) -> bool {
    year % 4 == 0
}

/// A date in the Gregorian calendar.
///
/// The day-of-month is a real number, its fraction carries the time of day.
/// Construction performs no bounds checking, the conversion formulas assume
/// inputs were validated upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GregorianDate {
    /// Astronomical year numbering, year 0 = 1 BC.
    pub year: i64,

    /// Month of the year.
    pub month: Month,

    /// Day of month with time-of-day fraction, [0, 32).
    pub day: f64,
}

/// A date in the Julian calendar.
///
/// Same layout and conventions as [`GregorianDate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianDate {
    /// Astronomical year numbering, year 0 = 1 BC.
    pub year: i64,

    /// Month of the year.
    pub month: Month,

    /// Day of month with time-of-day fraction, [0, 32).
    pub day: f64,
}

/// A calendar-tagged date, the result of splitting a JD at the Gregorian
/// reform with [`JulianDay::to_calendar`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CalendarDate {
    /// A date on or after 1582 October 15.
    Gregorian(GregorianDate),

    /// A date before the Gregorian reform.
    Julian(JulianDate),
}

impl CalendarDate {
    /// Convert to a Julian Day number using the variant's own calendar.
    pub fn to_jd(&self) -> JulianDay {
        match self {
            CalendarDate::Gregorian(date) => date.to_jd(),
            CalendarDate::Julian(date) => date.to_jd(),
        }
    }
}

/// Meeus eq 7.1. January and February are counted as months 13 and 14 of
/// the previous year so the leap day falls at the end of the shifted year.
/// The century term `b` drops the Julian leap days the Gregorian calendar
/// skips; the Julian calendar omits it.
fn date_to_jd(year: i64, month: Month, day: f64, gregorian: bool) -> JulianDay {
    let (y, m) = if month.ordinal() > 2 {
        (year, month.ordinal() as i64)
    } else {
        (year - 1, month.ordinal() as i64 + 12)
    };

    let b = if gregorian {
        let a = y / 100;
        2 - a + a / 4
    } else {
        0
    };

    let jd = (365.25 * (y + 4716) as f64).floor() + (30.6001 * (m + 1) as f64).floor() + day
        + b as f64
        - 1524.5;
    JulianDay(jd)
}

/// Meeus p66: month and day-of-month from a day-of-year count.
/// None when the count is negative or beyond the length of the year.
fn month_day_from_doy(day_in_year: f64, leap: bool) -> Option<(Month, f64)> {
    if day_in_year < 0.0 {
        return None;
    }
    let limit = if leap { 367.0 } else { 366.0 };
    if day_in_year >= limit {
        return None;
    }

    let k: i64 = if leap { 1 } else { 2 };
    let month = if day_in_year < 32.0 {
        1
    } else {
        // A fractional day late on December 31 can push the estimate to 13.
        ((9.0 * (k as f64 + day_in_year) / 275.0 + 0.98) as i64).min(12)
    };
    let day = day_in_year - (275 * month / 9) as f64 + (k * ((month + 9) / 12) + 30) as f64;
    Some((Month::from_ordinal_unchecked(month), day))
}

/// Meeus p65: day-of-year from month and day-of-month.
fn day_of_year(month: Month, day: f64, leap: bool) -> f64 {
    let k: i64 = if leap { 1 } else { 2 };
    let m = month.ordinal() as i64;
    (275 * m / 9 - k * ((m + 9) / 12) - 30) as f64 + day
}

impl GregorianDate {
    /// Create a new date. No validation is performed.
    pub fn new(year: i64, month: Month, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Create a date from a day-of-year count.
    ///
    /// Fails when the count is negative or beyond the length of the year
    /// (366 days, 367 in leap years).
    pub fn from_day_of_year(year: i64, day_in_year: f64) -> OrreryResult<Self> {
        let (month, day) = month_day_from_doy(day_in_year, is_gregorian_leap_year(year))
            .ok_or_else(|| {
                Error::ValueError(format!(
                    "Day in year ({}) is outside of year {}",
                    day_in_year, year
                ))
            })?;
        Ok(Self { year, month, day })
    }

    /// Convert to a Julian Day number.
    /// Meeus, eq 7.1
    pub fn to_jd(&self) -> JulianDay {
        date_to_jd(self.year, self.month, self.day, true)
    }

    /// Day of the year, fractional.
    /// Meeus, p65
    pub fn day_of_year(&self) -> f64 {
        day_of_year(self.month, self.day, is_gregorian_leap_year(self.year))
    }

    /// Parse an ISO 8601 date-time string, e.g. `2022-08-06T11:30:00`.
    pub fn from_iso(s: &str) -> OrreryResult<Self> {
        let datetime = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")?;
        let frac = (datetime.time().num_seconds_from_midnight() as f64
            + datetime.time().nanosecond() as f64 * 1e-9)
            / SECONDS_PER_DAY;
        Ok(Self {
            year: datetime.year() as i64,
            month: Month::from_ordinal_unchecked(datetime.month() as i64),
            day: datetime.day() as f64 + frac,
        })
    }

    /// Format as an ISO 8601 date-time string with millisecond precision.
    ///
    /// Fails for dates which cannot be represented as a civil timestamp,
    /// such as a day-of-month of zero.
    pub fn to_iso(&self) -> OrreryResult<String> {
        let whole_day = self.day.trunc();
        let seconds = self.day.fract() * SECONDS_PER_DAY;
        let nanos = seconds.fract() * 1e9;

        let out_of_range = || Error::ValueError(format!("({}) cannot format as ISO 8601", self));
        let year = i32::try_from(self.year).map_err(|_| out_of_range())?;
        let date = NaiveDate::from_ymd_opt(year, self.month.ordinal() as u32, whole_day as u32)
            .ok_or_else(out_of_range)?;
        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, nanos as u32)
            .ok_or_else(out_of_range)?;
        Ok(date.and_time(time).format("%Y-%m-%dT%H:%M:%S%.3f").to_string())
    }
}

impl JulianDate {
    /// Create a new date. No validation is performed.
    pub fn new(year: i64, month: Month, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Create a date from a day-of-year count.
    ///
    /// Fails when the count is negative or beyond the length of the year
    /// (366 days, 367 in leap years).
    pub fn from_day_of_year(year: i64, day_in_year: f64) -> OrreryResult<Self> {
        let (month, day) = month_day_from_doy(day_in_year, is_julian_leap_year(year))
            .ok_or_else(|| {
                Error::ValueError(format!(
                    "Day in year ({}) is outside of year {}",
                    day_in_year, year
                ))
            })?;
        Ok(Self { year, month, day })
    }

    /// Convert to a Julian Day number.
    /// Meeus, eq 7.1
    pub fn to_jd(&self) -> JulianDay {
        date_to_jd(self.year, self.month, self.day, false)
    }

    /// Day of the year, fractional.
    /// Meeus, p65
    pub fn day_of_year(&self) -> f64 {
        day_of_year(self.month, self.day, is_julian_leap_year(self.year))
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{:?}-{}", self.year, self.month, self.day)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{:?}-{}", self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalendarDate::Gregorian(date) => write!(f, "{} (Gregorian)", date),
            CalendarDate::Julian(date) => write!(f, "{} (Julian)", date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::JulianDay;

    #[test]
    fn test_leap_years() {
        assert!(is_gregorian_leap_year(2000));
        assert!(!is_gregorian_leap_year(1900));
        assert!(is_gregorian_leap_year(1996));
        assert!(!is_gregorian_leap_year(1999));

        // The Julian rule depends only on divisibility by 4.
        assert!(is_julian_leap_year(1900));
        assert!(is_julian_leap_year(900));
        assert!(!is_julian_leap_year(1901));
    }

    #[test]
    fn test_gregorian_to_jd() {
        // Meeus, example 7.a: launch of Sputnik 1.
        let date = GregorianDate::new(1957, Month::October, 4.81);
        assert!((date.to_jd().0 - 2436116.31).abs() < 1e-6);

        assert!((GregorianDate::new(2000, Month::January, 1.5).to_jd().0 - 2451545.0).abs() < 1e-9);
        assert!((GregorianDate::new(1987, Month::January, 27.0).to_jd().0 - 2446822.5).abs() < 1e-9);
        assert!((GregorianDate::new(1988, Month::June, 19.5).to_jd().0 - 2447332.0).abs() < 1e-9);
        assert!((GregorianDate::new(1600, Month::January, 1.0).to_jd().0 - 2305447.5).abs() < 1e-9);
        assert!((GregorianDate::new(1600, Month::December, 31.0).to_jd().0 - 2305812.5).abs() < 1e-9);
    }

    #[test]
    fn test_julian_to_jd() {
        // Meeus, example 7.b
        let date = JulianDate::new(333, Month::January, 27.5);
        assert!((date.to_jd().0 - 1842713.0).abs() < 1e-9);

        assert!((JulianDate::new(837, Month::April, 10.3).to_jd().0 - 2026871.8).abs() < 1e-6);
        assert!((JulianDate::new(-1000, Month::July, 12.5).to_jd().0 - 1356001.0).abs() < 1e-9);
        assert!((JulianDate::new(-1000, Month::February, 29.0).to_jd().0 - 1355866.5).abs() < 1e-9);
        assert!((JulianDate::new(-1001, Month::August, 17.9).to_jd().0 - 1355671.4).abs() < 1e-6);
        assert!((JulianDate::new(-4712, Month::January, 1.5).to_jd().0).abs() < 1e-9);
    }

    #[test]
    fn test_jd_to_gregorian() {
        // Meeus, example 7.c
        let date = JulianDay(2436116.31).to_gregorian();
        assert_eq!(date.year, 1957);
        assert_eq!(date.month, Month::October);
        assert!((date.day - 4.81).abs() < 1e-6);

        let date = JulianDay(2418781.5).to_gregorian();
        assert_eq!(date.year, 1910);
        assert_eq!(date.month, Month::April);
        assert!((date.day - 20.0).abs() < 1e-9);

        let date = JulianDay(2446470.5).to_gregorian();
        assert_eq!(date.year, 1986);
        assert_eq!(date.month, Month::February);
        assert!((date.day - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_jd_to_julian() {
        let date = JulianDay(1842713.0).to_julian();
        assert_eq!(date.year, 333);
        assert_eq!(date.month, Month::January);
        assert!((date.day - 27.5).abs() < 1e-9);
    }

    #[test]
    fn test_gregorian_roundtrip() {
        // Sweep a wide range of dates, including century non-leap years.
        for year in [1583, 1600, 1900, 1996, 2000, 2024, 2399] {
            for month in 1..=12 {
                let month = Month::from_ordinal(month).unwrap();
                for day in [1.0, 1.25, 15.5, 28.975] {
                    let date = GregorianDate::new(year, month, day);
                    let back = date.to_jd().to_gregorian();
                    assert_eq!(back.year, date.year);
                    assert_eq!(back.month, date.month);
                    assert!((back.day - date.day).abs() < 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_julian_roundtrip() {
        for year in [-1000, -4, 0, 333, 837, 1582] {
            for month in 1..=12 {
                let month = Month::from_ordinal(month).unwrap();
                for day in [1.0, 12.5, 27.75] {
                    let date = JulianDate::new(year, month, day);
                    let back = date.to_jd().to_julian();
                    assert_eq!(back.year, date.year);
                    assert_eq!(back.month, date.month);
                    assert!((back.day - date.day).abs() < 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_day_of_year() {
        // Meeus, example 7.f
        let date = GregorianDate::new(1978, Month::November, 14.0);
        assert!((date.day_of_year() - 318.0).abs() < 1e-9);

        // Meeus, example 7.g (leap year)
        let date = GregorianDate::new(1988, Month::April, 22.0);
        assert!((date.day_of_year() - 113.0).abs() < 1e-9);

        let date = GregorianDate::new(1999, Month::February, 1.0);
        assert!((date.day_of_year() - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_day_of_year() {
        let date = GregorianDate::from_day_of_year(1978, 318.0).unwrap();
        assert_eq!(date.month, Month::November);
        assert!((date.day - 14.0).abs() < 1e-9);

        let date = GregorianDate::from_day_of_year(1988, 113.0).unwrap();
        assert_eq!(date.month, Month::April);
        assert!((date.day - 22.0).abs() < 1e-9);

        let date = JulianDate::from_day_of_year(900, 60.0).unwrap();
        assert_eq!(date.month, Month::February);
        assert!((date.day - 29.0).abs() < 1e-9);

        assert!(GregorianDate::from_day_of_year(1999, -1.0).is_err());
        assert!(GregorianDate::from_day_of_year(1999, 366.0).is_err());
        assert!(GregorianDate::from_day_of_year(2000, 367.0).is_err());

        // Fractional day at the very end of a leap year.
        let date = GregorianDate::from_day_of_year(2000, 366.5).unwrap();
        assert_eq!(date.month, Month::December);
        assert!((date.day - 31.5).abs() < 1e-9);
    }

    #[test]
    fn test_day_of_year_roundtrip() {
        for year in [1999, 2000] {
            for doy in 1..=365 {
                let date = GregorianDate::from_day_of_year(year, doy as f64).unwrap();
                assert!((date.day_of_year() - doy as f64).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_iso() {
        // Meeus, example 12.b
        let date = GregorianDate::from_iso("1987-04-10T19:21:00").unwrap();
        assert_eq!(date.year, 1987);
        assert_eq!(date.month, Month::April);
        assert!((date.day - 10.80625).abs() < 1e-9);
        assert!((date.to_jd().0 - 2446896.30625).abs() < 1e-9);

        let text = date.to_iso().unwrap();
        assert_eq!(text, "1987-04-10T19:21:00.000");

        assert!(GregorianDate::from_iso("not a timestamp").is_err());
        // Day zero has no civil timestamp representation.
        assert!(GregorianDate::new(2000, Month::January, 0.5).to_iso().is_err());
    }

    #[test]
    fn test_calendar_date_to_jd() {
        let tagged = JulianDay(2436116.31).to_calendar();
        assert!((tagged.to_jd().0 - 2436116.31).abs() < 1e-6);

        let tagged = JulianDay(1842713.0).to_calendar();
        assert!((tagged.to_jd().0 - 1842713.0).abs() < 1e-9);
    }
}
