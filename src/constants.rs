//! Universal constants used across the crate.

/// Julian Day of the J2000 epoch, 2000 January 1.5 TD.
pub const J2000_JD: f64 = 2451545.0;

/// Offset from JD to MJD.
/// MJD = JD + JD_TO_MJD
pub const JD_TO_MJD: f64 = -2400000.5;

/// Days per Julian century.
pub const JULIAN_CENTURY_DAYS: f64 = 36525.0;

/// Minutes of arc per degree.
pub const ARCMIN_PER_DEGREE: f64 = 60.0;

/// Seconds of arc per degree.
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Degrees of rotation per hour of right ascension.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Km per AU (Definition)
pub const AU_KM: f64 = 149597870.7;
