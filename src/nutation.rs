//! Obliquity of the ecliptic and nutation.
//!
//! The full evaluation sums the 63 periodic terms of the IAU 1980 nutation
//! theory (Meeus table 22.A), good to about 0.5 milliarcseconds. The fast
//! variants keep only the largest terms and low order polynomials, good to
//! about half an arcsecond, which is ample for rise/set style work.
use serde::{Deserialize, Serialize};

use crate::angles::arcsec_to_rad;
use crate::time::julian_centuries;

/// Nutation angles at an instant, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutation {
    /// Nutation in longitude, Δψ.
    pub longitude: f64,

    /// Nutation in obliquity, Δε.
    pub obliquity: f64,
}

/// One periodic term of the IAU 1980 nutation series.
struct NutationTerm {
    /// Multiples of the fundamental arguments (D, M, M', F, Ω).
    args: [i8; 5],

    /// Sine coefficient and its rate per Julian century for Δψ, 0.0001″.
    psi: (f64, f64),

    /// Cosine coefficient and its rate per Julian century for Δε, 0.0001″.
    eps: (f64, f64),
}

/// Meeus table 22.A: the IAU 1980 series truncated to coefficients of at
/// least 0.0003″. Units of 0.0001″.
#[rustfmt::skip]
const IAU_1980: &[NutationTerm] = &[
    NutationTerm { args: [ 0,  0,  0,  0,  1], psi: (-171996.0, -174.2), eps: (92025.0, 8.9) },
    NutationTerm { args: [-2,  0,  0,  2,  2], psi: (-13187.0, -1.6), eps: (5736.0, -3.1) },
    NutationTerm { args: [ 0,  0,  0,  2,  2], psi: (-2274.0, -0.2), eps: (977.0, -0.5) },
    NutationTerm { args: [ 0,  0,  0,  0,  2], psi: (2062.0, 0.2), eps: (-895.0, 0.5) },
    NutationTerm { args: [ 0,  1,  0,  0,  0], psi: (1426.0, -3.4), eps: (54.0, -0.1) },
    NutationTerm { args: [ 0,  0,  1,  0,  0], psi: (712.0, 0.1), eps: (-7.0, 0.0) },
    NutationTerm { args: [-2,  1,  0,  2,  2], psi: (-517.0, 1.2), eps: (224.0, -0.6) },
    NutationTerm { args: [ 0,  0,  0,  2,  1], psi: (-386.0, -0.4), eps: (200.0, 0.0) },
    NutationTerm { args: [ 0,  0,  1,  2,  2], psi: (-301.0, 0.0), eps: (129.0, -0.1) },
    NutationTerm { args: [-2, -1,  0,  2,  2], psi: (217.0, -0.5), eps: (-95.0, 0.3) },
    NutationTerm { args: [-2,  0,  1,  0,  0], psi: (-158.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-2,  0,  0,  2,  1], psi: (129.0, 0.1), eps: (-70.0, 0.0) },
    NutationTerm { args: [ 0,  0, -1,  2,  2], psi: (123.0, 0.0), eps: (-53.0, 0.0) },
    NutationTerm { args: [ 2,  0,  0,  0,  0], psi: (63.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 0,  0,  1,  0,  1], psi: (63.0, 0.1), eps: (-33.0, 0.0) },
    NutationTerm { args: [ 2,  0, -1,  2,  2], psi: (-59.0, 0.0), eps: (26.0, 0.0) },
    NutationTerm { args: [ 0,  0, -1,  0,  1], psi: (-58.0, -0.1), eps: (32.0, 0.0) },
    NutationTerm { args: [ 0,  0,  1,  2,  1], psi: (-51.0, 0.0), eps: (27.0, 0.0) },
    NutationTerm { args: [-2,  0,  2,  0,  0], psi: (48.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 0,  0, -2,  2,  1], psi: (46.0, 0.0), eps: (-24.0, 0.0) },
    NutationTerm { args: [ 2,  0,  0,  2,  2], psi: (-38.0, 0.0), eps: (16.0, 0.0) },
    NutationTerm { args: [ 0,  0,  2,  2,  2], psi: (-31.0, 0.0), eps: (13.0, 0.0) },
    NutationTerm { args: [ 0,  0,  2,  0,  0], psi: (29.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-2,  0,  1,  2,  2], psi: (29.0, 0.0), eps: (-12.0, 0.0) },
    NutationTerm { args: [ 0,  0,  0,  2,  0], psi: (26.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-2,  0,  0,  2,  0], psi: (-22.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 0,  0, -1,  2,  1], psi: (21.0, 0.0), eps: (-10.0, 0.0) },
    NutationTerm { args: [ 0,  2,  0,  0,  0], psi: (17.0, -0.1), eps: (0.0, 0.0) },
    NutationTerm { args: [ 2,  0, -1,  0,  1], psi: (16.0, 0.0), eps: (-8.0, 0.0) },
    NutationTerm { args: [-2,  2,  0,  2,  2], psi: (-16.0, 0.1), eps: (7.0, 0.0) },
    NutationTerm { args: [ 0,  1,  0,  0,  1], psi: (-15.0, 0.0), eps: (9.0, 0.0) },
    NutationTerm { args: [-2,  0,  1,  0,  1], psi: (-13.0, 0.0), eps: (7.0, 0.0) },
    NutationTerm { args: [ 0, -1,  0,  0,  1], psi: (-12.0, 0.0), eps: (6.0, 0.0) },
    NutationTerm { args: [ 0,  0,  2, -2,  0], psi: (11.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 2,  0, -1,  2,  1], psi: (-10.0, 0.0), eps: (5.0, 0.0) },
    NutationTerm { args: [ 2,  0,  1,  2,  2], psi: (-8.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [ 0,  1,  0,  2,  2], psi: (7.0, 0.0), eps: (-3.0, 0.0) },
    NutationTerm { args: [-2,  1,  1,  0,  0], psi: (-7.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 0, -1,  0,  2,  2], psi: (-7.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [ 2,  0,  0,  2,  1], psi: (-7.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [ 2,  0,  1,  0,  0], psi: (6.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-2,  0,  2,  2,  2], psi: (6.0, 0.0), eps: (-3.0, 0.0) },
    NutationTerm { args: [-2,  0,  1,  2,  1], psi: (6.0, 0.0), eps: (-3.0, 0.0) },
    NutationTerm { args: [ 2,  0, -2,  0,  1], psi: (-6.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [ 2,  0,  0,  0,  1], psi: (-6.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [ 0, -1,  1,  0,  0], psi: (5.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-2, -1,  0,  2,  1], psi: (-5.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [-2,  0,  0,  0,  1], psi: (-5.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [ 0,  0,  2,  2,  1], psi: (-5.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [-2,  0,  2,  0,  1], psi: (4.0, 0.0), eps: (-2.0, 0.0) },
    NutationTerm { args: [-2,  1,  0,  2,  1], psi: (4.0, 0.0), eps: (-2.0, 0.0) },
    NutationTerm { args: [ 0,  0,  1, -2,  0], psi: (4.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-1,  0,  1,  0,  0], psi: (-4.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-2,  1,  0,  0,  0], psi: (-4.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 1,  0,  0,  0,  0], psi: (-4.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 0,  0,  1,  2,  0], psi: (3.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 0,  0, -2,  2,  2], psi: (-3.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-1, -1,  1,  0,  0], psi: (-3.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 0,  1,  1,  0,  0], psi: (-3.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 0, -1,  1,  2,  2], psi: (-3.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 2, -1, -1,  2,  2], psi: (-3.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 0,  0,  3,  2,  2], psi: (-3.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [ 2, -1,  0,  2,  2], psi: (-3.0, 0.0), eps: (0.0, 0.0) },
];

/// The five fundamental arguments of the lunar and solar orbits as cubic
/// polynomials in Julian centuries from J2000, in radians.
/// Meeus ch. 22: D, M, M', F, Ω.
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    // Mean elongation of the Moon from the Sun.
    let d = 297.85036 + 445267.111480 * t - 0.0019142 * t2 + t3 / 189474.0;

    // Mean anomaly of the Sun.
    let m = 357.52772 + 35999.050340 * t - 0.0001603 * t2 - t3 / 300000.0;

    // Mean anomaly of the Moon.
    let mp = 134.96298 + 477198.867398 * t + 0.0086972 * t2 + t3 / 56250.0;

    // Argument of latitude of the Moon.
    let f = 93.27191 + 483202.017538 * t - 0.0036825 * t2 + t3 / 327270.0;

    // Longitude of the ascending node of the Moon's mean orbit.
    let om = 125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450000.0;

    [
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
        om.to_radians(),
    ]
}

/// Nutation in longitude and obliquity from the full IAU 1980 series.
///
/// Accurate to about 0.5 milliarcseconds.
pub fn nutation(jd: f64) -> Nutation {
    let t = julian_centuries(jd);
    let args = fundamental_arguments(t);

    let mut psi = 0.0;
    let mut eps = 0.0;
    for term in IAU_1980 {
        let arg: f64 = term
            .args
            .iter()
            .zip(&args)
            .map(|(mult, angle)| *mult as f64 * angle)
            .sum();
        psi += (term.psi.0 + term.psi.1 * t) * arg.sin();
        eps += (term.eps.0 + term.eps.1 * t) * arg.cos();
    }

    Nutation {
        longitude: arcsec_to_rad(psi * 1e-4),
        obliquity: arcsec_to_rad(eps * 1e-4),
    }
}

/// Nutation from the dominant Ω, solar, and lunar terms only.
///
/// Accurate to about 0.5″ in longitude and 0.1″ in obliquity.
pub fn fast_nutation(jd: f64) -> Nutation {
    let t = julian_centuries(jd);

    // Longitude of the ascending node of the Moon's mean orbit.
    let om = (125.04452 - 1934.136261 * t).to_radians();

    // Mean longitudes of the Sun and the Moon.
    let ls = (280.4665 + 36000.7698 * t).to_radians();
    let lm = (218.3165 + 481267.8813 * t).to_radians();

    let psi = -17.20 * om.sin() - 1.32 * (2.0 * ls).sin() - 0.23 * (2.0 * lm).sin()
        + 0.21 * (2.0 * om).sin();
    let eps = 9.20 * om.cos() + 0.57 * (2.0 * ls).cos() + 0.10 * (2.0 * lm).cos()
        - 0.09 * (2.0 * om).cos();

    Nutation {
        longitude: arcsec_to_rad(psi),
        obliquity: arcsec_to_rad(eps),
    }
}

/// Mean obliquity of the ecliptic at J2000, arcseconds.
const OBLIQUITY_J2000_ARCSEC: f64 = 84381.448;

/// Mean obliquity of the ecliptic in radians.
///
/// Laskar's polynomial, Meeus eq 22.3. Good to 0.01″ over one millennium
/// around J2000 and to a few arcseconds over ten millennia.
pub fn mean_obliquity(jd: f64) -> f64 {
    // The polynomial argument is in units of 10000 Julian years.
    let u = julian_centuries(jd) / 100.0;
    let arcsec = OBLIQUITY_J2000_ARCSEC
        + u * (-4680.93
            + u * (-1.55
                + u * (1999.25
                    + u * (-51.38
                        + u * (-249.67
                            + u * (-39.05
                                + u * (7.12 + u * (27.87 + u * (5.79 + u * 2.45)))))))));
    arcsec_to_rad(arcsec)
}

/// Mean obliquity of the ecliptic from the cubic of the Astronomical
/// Almanac, Meeus eq 22.2. Adequate within a few centuries of J2000.
pub fn fast_mean_obliquity(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let arcsec = OBLIQUITY_J2000_ARCSEC + t * (-46.8150 + t * (-0.00059 + t * 0.001813));
    arcsec_to_rad(arcsec)
}

/// True obliquity of the ecliptic: mean obliquity plus nutation.
pub fn true_obliquity(jd: f64) -> f64 {
    mean_obliquity(jd) + nutation(jd).obliquity
}

/// True obliquity from the fast obliquity and nutation variants.
pub fn fast_true_obliquity(jd: f64) -> f64 {
    fast_mean_obliquity(jd) + fast_nutation(jd).obliquity
}
