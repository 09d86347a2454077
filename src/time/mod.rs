//! Time representation and conversions.
//!
//! Times are Julian Day numbers: a continuous count of days where the
//! fractional part carries the time of day and the day begins at noon, so
//! a fraction of 0.5 is midnight. Calendar conversions follow Meeus ch. 7.
pub mod calendar;

pub use calendar::{CalendarDate, GregorianDate, JulianDate};

use serde::{Deserialize, Serialize};

use crate::constants::{J2000_JD, JD_TO_MJD, JULIAN_CENTURY_DAYS};

/// Months of the year, ordinal 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Month from its 1-12 ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }

    /// Month ordinal, 1-12.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    // Meeus's recurrences only ever produce ordinals 1-12.
    pub(crate) fn from_ordinal_unchecked(ordinal: i64) -> Self {
        match Month::from_ordinal(ordinal as u8) {
            Some(month) => month,
            None => unreachable!(),
        }
    }
}

/// Days of the week, indexed so 0 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Weekday from its 0-6 index, 0 = Sunday.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }
}

/// Julian centuries from the J2000 epoch.
/// Meeus, eq 12.1
#[inline(always)]
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / JULIAN_CENTURY_DAYS
}

/// JD of January 0.0 of a Gregorian year, i.e. December 31.0 of the
/// preceding year.
pub fn jd0(year: i64) -> f64 {
    let y = (year - 1) as f64;
    let a = (y / 100.0).floor();
    (365.25 * y).floor() - a + (a / 4.0).floor() + 1721424.5
}

/// A Julian Day number.
///
/// A single f64 has around 23 microseconds of resolution for dates near
/// J2000, which is ample for every formula in this crate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(pub f64);

impl JulianDay {
    /// The J2000 epoch, 2000 January 1.5 TD.
    pub fn j2000() -> Self {
        JulianDay(J2000_JD)
    }

    /// Create from a Modified Julian Date.
    pub fn from_mjd(mjd: f64) -> Self {
        JulianDay(mjd - JD_TO_MJD)
    }

    /// Convert to a Modified Julian Date.
    pub fn mjd(&self) -> f64 {
        self.0 + JD_TO_MJD
    }

    /// Julian centuries from J2000.
    pub fn julian_centuries(&self) -> f64 {
        julian_centuries(self.0)
    }

    /// Day of the week.
    ///
    /// JD starts at noon, the added 0.5 re-anchors to midnight before the
    /// weekday index is taken mod 7.
    /// Meeus, p65
    pub fn weekday(&self) -> Weekday {
        let index = (self.0 + 0.5 + 1.5).floor().rem_euclid(7.0);
        match Weekday::from_index(index as u8) {
            Some(day) => day,
            None => unreachable!(),
        }
    }

    /// Convert to a date in the proleptic Gregorian calendar.
    ///
    /// The Gregorian century correction is applied for all inputs, so every
    /// Gregorian date round-trips through [`GregorianDate::to_jd`]. Use
    /// [`JulianDay::to_calendar`] for the historical calendar split.
    ///
    /// Meeus ch. 7. Only valid for JD ≥ 0, violations are a programming
    /// error.
    pub fn to_gregorian(&self) -> GregorianDate {
        debug_assert!(self.0 >= 0.0);
        let (year, month, day) = calendar_parts(self.0, true);
        GregorianDate { year, month, day }
    }

    /// Convert to a date in the Julian calendar.
    ///
    /// Meeus ch. 7. Only valid for JD ≥ 0, violations are a programming
    /// error.
    pub fn to_julian(&self) -> JulianDate {
        debug_assert!(self.0 >= 0.0);
        let (year, month, day) = calendar_parts(self.0, false);
        JulianDate { year, month, day }
    }

    /// Convert to the calendar in civil use at the time: Julian for days
    /// before the Gregorian reform (JD 2299161 = 1582 October 15.0), and
    /// Gregorian from the reform onward.
    pub fn to_calendar(&self) -> CalendarDate {
        debug_assert!(self.0 >= 0.0);
        if (self.0 + 0.5).trunc() >= 2299161.0 {
            CalendarDate::Gregorian(self.to_gregorian())
        } else {
            CalendarDate::Julian(self.to_julian())
        }
    }
}

impl From<f64> for JulianDay {
    fn from(jd: f64) -> Self {
        JulianDay(jd)
    }
}

impl From<JulianDay> for f64 {
    fn from(jd: JulianDay) -> Self {
        jd.0
    }
}

/// Shared inverse of Meeus eq 7.1; the Gregorian variant corrects for the
/// dropped leap days.
fn calendar_parts(jd: f64, gregorian: bool) -> (i64, Month, f64) {
    let tmp = jd + 0.5;
    let z = tmp.trunc();
    let f = tmp.fract();

    let a = if gregorian {
        let alpha = ((z - 1867216.25) / 36524.25).trunc() as i64;
        z as i64 + 1 + alpha - alpha / 4
    } else {
        z as i64
    };

    let b = (a + 1524) as f64;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if (e as i64) < 14 {
        e as i64 - 1
    } else {
        e as i64 - 13
    };
    let year = c as i64 - if month > 2 { 4716 } else { 4715 };

    (year, Month::from_ordinal_unchecked(month), day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_ordinals() {
        assert_eq!(Month::from_ordinal(1), Some(Month::January));
        assert_eq!(Month::from_ordinal(12), Some(Month::December));
        assert_eq!(Month::from_ordinal(0), None);
        assert_eq!(Month::from_ordinal(13), None);
        assert_eq!(Month::October.ordinal(), 10);
    }

    #[test]
    fn test_julian_centuries() {
        // Meeus, example 22.a
        let t = julian_centuries(2446895.5);
        assert!((t + 0.127296372348).abs() < 1e-12);
        assert!(JulianDay::j2000().julian_centuries().abs() < 1e-15);
    }

    #[test]
    fn test_jd0() {
        assert!((jd0(1999) - 2451178.5).abs() < 1e-9);
        assert!((jd0(2000) - 2451543.5).abs() < 1e-9);
    }

    #[test]
    fn test_mjd() {
        let t = JulianDay::from_mjd(0.0);
        assert!((t.0 - 2400000.5).abs() < 1e-9);
        assert!(JulianDay(2400000.5).mjd().abs() < 1e-9);
    }

    #[test]
    fn test_weekday() {
        // Meeus, p65: 1954 June 30.0 was a Wednesday.
        assert_eq!(JulianDay(2434923.5).weekday(), Weekday::Wednesday);
        // 2000 January 1 was a Saturday.
        assert_eq!(JulianDay(2451544.5).weekday(), Weekday::Saturday);
        // The first day of the Gregorian calendar was a Friday.
        assert_eq!(JulianDay(2299160.5).weekday(), Weekday::Friday);
    }

    #[test]
    fn test_calendar_split_at_reform() {
        // Last day of the Julian calendar, 1582 October 4.
        match JulianDay(2299159.5).to_calendar() {
            CalendarDate::Julian(date) => {
                assert_eq!(date.year, 1582);
                assert_eq!(date.month, Month::October);
                assert!((date.day - 4.0).abs() < 1e-9);
            }
            CalendarDate::Gregorian(_) => panic!("expected a Julian date"),
        }

        // First day of the Gregorian calendar, 1582 October 15.
        match JulianDay(2299160.5).to_calendar() {
            CalendarDate::Gregorian(date) => {
                assert_eq!(date.year, 1582);
                assert_eq!(date.month, Month::October);
                assert!((date.day - 15.0).abs() < 1e-9);
            }
            CalendarDate::Julian(_) => panic!("expected a Gregorian date"),
        }
    }
}
