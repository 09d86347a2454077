//! Geocentric position of the Sun.
//!
//! The low accuracy theory of Meeus ch. 25, good to about 0.01 degrees in
//! longitude. Times are dynamical time.
use serde::{Deserialize, Serialize};

use crate::angles::normalize_degrees;
use crate::time::julian_centuries;

/// Geocentric solar coordinates at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunPosition {
    /// True geometric longitude referred to the mean equinox of date, radians.
    pub true_longitude: f64,

    /// Apparent longitude: the true longitude corrected for nutation and
    /// aberration, radians.
    pub apparent_longitude: f64,

    /// True anomaly, radians.
    pub true_anomaly: f64,

    /// Radius vector, the Earth-Sun distance in AU.
    pub radius_vector: f64,
}

/// Geocentric position of the Sun.
pub fn position(jd: f64) -> SunPosition {
    let t = julian_centuries(jd);

    // Geometric mean longitude and mean anomaly, degrees.
    let l0 = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let m = 357.52911 + t * (35999.05029 - t * 0.0001537);

    // Eccentricity of the Earth's orbit.
    let e = 0.016708634 - t * (0.000042037 + t * 0.0000001267);

    // Equation of the center, degrees.
    let m_rad = m.to_radians();
    let c = (1.914602 - t * (0.004817 + t * 0.000014)) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_longitude = normalize_degrees(l0 + c);
    let true_anomaly = m + c;

    let radius_vector = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.to_radians().cos());

    // Nutation and aberration fold into a single node term at this accuracy.
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent_longitude = true_longitude - 0.00569 - 0.00478 * omega.sin();

    SunPosition {
        true_longitude: true_longitude.to_radians(),
        apparent_longitude: apparent_longitude.to_radians(),
        true_anomaly: normalize_degrees(true_anomaly).to_radians(),
        radius_vector,
    }
}
