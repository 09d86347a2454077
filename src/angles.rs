//! Angle unit algebra.
//!
//! Conversions between degrees, radians, arcseconds, hour angles, and the
//! sexagesimal representations used throughout the astronomical literature.
//! All normalizations map onto the positive residue class, so negative
//! inputs wrap rather than truncate toward zero.
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

use crate::constants::{
    ARCMIN_PER_DEGREE, ARCSEC_PER_DEGREE, DEGREES_PER_HOUR, MINUTES_PER_HOUR, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// Convert arcseconds to radians.
#[inline(always)]
pub fn arcsec_to_rad(arcsec: f64) -> f64 {
    (arcsec / ARCSEC_PER_DEGREE).to_radians()
}

/// Convert radians to arcseconds.
#[inline(always)]
pub fn rad_to_arcsec(rad: f64) -> f64 {
    rad.to_degrees() * ARCSEC_PER_DEGREE
}

/// Convert millidegrees to radians.
#[inline(always)]
pub fn mdeg_to_rad(mdeg: f64) -> f64 {
    (mdeg / 1e3).to_radians()
}

/// Convert microdegrees to radians.
#[inline(always)]
pub fn udeg_to_rad(udeg: f64) -> f64 {
    (udeg / 1e6).to_radians()
}

/// Convert degrees to hours of right ascension.
#[inline(always)]
pub fn degrees_to_hours(deg: f64) -> f64 {
    deg / DEGREES_PER_HOUR
}

/// Convert hours of right ascension to degrees.
#[inline(always)]
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * DEGREES_PER_HOUR
}

/// Normalize degrees to [0, 360).
#[inline(always)]
pub fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize radians to [0, 2π).
#[inline(always)]
pub fn normalize_radians(rad: f64) -> f64 {
    rad.rem_euclid(TAU)
}

/// Normalize a seconds field to [0, 60).
#[inline(always)]
pub fn normalize_seconds(seconds: f64) -> f64 {
    seconds.rem_euclid(SECONDS_PER_MINUTE)
}

/// Normalize seconds-of-day to [0, 86400).
#[inline(always)]
pub fn normalize_seconds_in_day(seconds: f64) -> f64 {
    seconds.rem_euclid(SECONDS_PER_DAY)
}

/// Normalize a minutes field to [0, 60).
#[inline(always)]
pub fn normalize_minutes(minutes: i32) -> i32 {
    minutes.rem_euclid(60)
}

/// Normalize an hours field to [0, 24).
#[inline(always)]
pub fn normalize_hours(hours: i32) -> i32 {
    hours.rem_euclid(24)
}

/// Sexagesimal angle of arc.
///
/// The sign of the whole angle is carried by the degrees field; minutes and
/// seconds are magnitudes. An angle between -1 and 0 degrees cannot be
/// represented with a negative degrees field, keep such values in decimal
/// form instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcAngle {
    /// Whole degrees, sign carries the sign of the angle.
    pub degrees: i32,

    /// Minutes of arc, 0-59.
    pub minutes: i32,

    /// Seconds of arc, [0, 60).
    pub seconds: f64,
}

impl ArcAngle {
    /// Create a new sexagesimal angle.
    pub fn new(degrees: i32, minutes: i32, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Split a decimal angle in degrees into sexagesimal components.
    pub fn from_degrees(deg: f64) -> Self {
        let total = deg.abs();
        let degrees = total.trunc();
        let minutes = ((total - degrees) * ARCMIN_PER_DEGREE).trunc();
        let seconds = (total - degrees - minutes / ARCMIN_PER_DEGREE) * ARCSEC_PER_DEGREE;
        Self {
            degrees: (degrees.copysign(deg)) as i32,
            minutes: minutes as i32,
            seconds,
        }
    }

    /// The angle as decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        let total = self.degrees.unsigned_abs() as f64
            + self.minutes as f64 / ARCMIN_PER_DEGREE
            + self.seconds / ARCSEC_PER_DEGREE;
        if self.degrees >= 0 {
            total
        } else {
            -total
        }
    }

    /// The angle in radians.
    pub fn to_radians(&self) -> f64 {
        self.to_degrees().to_radians()
    }
}

impl fmt::Display for ArcAngle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}°{}′{:.3}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Sexagesimal hour angle with 24 hour wraparound.
///
/// The sign of the whole angle is carried by the hours field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourAngle {
    /// Whole hours, sign carries the sign of the angle.
    pub hours: i32,

    /// Minutes, 0-59.
    pub minutes: i32,

    /// Seconds, [0, 60).
    pub seconds: f64,
}

impl HourAngle {
    /// Create a new hour angle.
    pub fn new(hours: i32, minutes: i32, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Construct from decimal seconds of day, wrapping into [0h, 24h).
    pub fn from_seconds(seconds: f64) -> Self {
        let total = normalize_seconds_in_day(seconds);
        Self {
            hours: (total / SECONDS_PER_HOUR) as i32,
            minutes: normalize_minutes((total / SECONDS_PER_MINUTE) as i32),
            seconds: normalize_seconds(total),
        }
    }

    /// Split decimal degrees into hour angle components.
    pub fn from_degrees(deg: f64) -> Self {
        let hours = degrees_to_hours(deg);
        let minutes = hours.fract() * MINUTES_PER_HOUR;
        let seconds = minutes.fract() * SECONDS_PER_MINUTE;
        Self {
            hours: hours.trunc() as i32,
            minutes: minutes.trunc() as i32,
            seconds,
        }
    }

    /// The angle as decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        let total = self.hours.unsigned_abs() as f64
            + self.minutes as f64 / MINUTES_PER_HOUR
            + self.seconds / SECONDS_PER_HOUR;
        if self.hours >= 0 {
            hours_to_degrees(total)
        } else {
            -hours_to_degrees(total)
        }
    }

    /// The angle in radians.
    pub fn to_radians(&self) -> f64 {
        self.to_degrees().to_radians()
    }
}

impl std::ops::Add for HourAngle {
    type Output = HourAngle;

    /// Component-wise sum, carries normalized seconds → minutes → hours with
    /// modular wraparound at 60/60/24.
    fn add(self, rhs: HourAngle) -> Self::Output {
        let seconds = self.seconds + rhs.seconds;
        let minutes =
            self.minutes + rhs.minutes + seconds.div_euclid(SECONDS_PER_MINUTE) as i32;
        let hours = self.hours + rhs.hours + minutes.div_euclid(60);
        HourAngle {
            hours: normalize_hours(hours),
            minutes: normalize_minutes(minutes),
            seconds: normalize_seconds(seconds),
        }
    }
}

impl fmt::Display for HourAngle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}h{}m{:.3}s", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_scalar_conversions() {
        assert!((arcsec_to_rad(3600.0) - 1.0_f64.to_radians()).abs() < 1e-15);
        assert!((rad_to_arcsec(arcsec_to_rad(9.443)) - 9.443).abs() < 1e-12);
        assert!((mdeg_to_rad(1000.0) - 1.0_f64.to_radians()).abs() < 1e-15);
        assert!((udeg_to_rad(1e6) - 1.0_f64.to_radians()).abs() < 1e-15);
        assert!((degrees_to_hours(202.5) - 13.5).abs() < 1e-12);
        assert!((hours_to_degrees(13.5) - 202.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_wraps_negative() {
        assert!((normalize_degrees(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_radians(-TAU / 4.0) - 3.0 * TAU / 4.0).abs() < 1e-12);
        assert!((normalize_seconds(-0.5) - 59.5).abs() < 1e-12);
        assert!((normalize_seconds_in_day(-30.0) - 86370.0).abs() < 1e-9);
        assert_eq!(normalize_minutes(-1), 59);
        assert_eq!(normalize_hours(-1), 23);
    }

    #[test]
    fn test_arc_angle_to_degrees() {
        // mean obliquity at J2000, Meeus eq 22.2
        let eps = ArcAngle::new(23, 26, 21.448);
        assert!((eps.to_degrees() - 23.43929111111111).abs() < 1e-12);

        let negative = ArcAngle::new(-5, 10, 30.0);
        assert!((negative.to_degrees() + 5.175).abs() < 1e-12);
    }

    #[test]
    fn test_arc_angle_roundtrip() {
        let angle = ArcAngle::new(23, 26, 27.407);
        let back = ArcAngle::from_degrees(angle.to_degrees());
        assert_eq!(back.degrees, 23);
        assert_eq!(back.minutes, 26);
        assert!((back.seconds - 27.407).abs() < 1e-9);

        let angle = ArcAngle::new(-120, 59, 59.5);
        let back = ArcAngle::from_degrees(angle.to_degrees());
        assert_eq!(back.degrees, -120);
        assert_eq!(back.minutes, 59);
        assert!((back.seconds - 59.5).abs() < 1e-8);
    }

    #[test]
    fn test_hour_angle_conversions() {
        let ha = HourAngle::from_degrees(202.5);
        assert_eq!(ha.hours, 13);
        assert_eq!(ha.minutes, 30);
        assert!(ha.seconds.abs() < 1e-9);
        assert!((ha.to_degrees() - 202.5).abs() < 1e-9);

        let ha = HourAngle::from_seconds(-30.0);
        assert_eq!(ha.hours, 23);
        assert_eq!(ha.minutes, 59);
        assert!((ha.seconds - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_hour_angle_add_carries() {
        let sum = HourAngle::new(1, 59, 59.5) + HourAngle::new(0, 0, 0.5);
        assert_eq!(sum.hours, 2);
        assert_eq!(sum.minutes, 0);
        assert!(sum.seconds.abs() < 1e-12);

        // 24 hour wraparound
        let sum = HourAngle::new(23, 30, 0.0) + HourAngle::new(2, 45, 0.0);
        assert_eq!(sum.hours, 2);
        assert_eq!(sum.minutes, 15);
        assert!(sum.seconds.abs() < 1e-12);
    }
}
