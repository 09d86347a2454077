//! Heliocentric position of Pluto.
//!
//! The periodic series of Goffin, Meeus, and Blaauw (Meeus ch. 37), built on
//! the near 3:2 resonance between Pluto and Neptune. Accurate to about 0.1″
//! between 1885 and 2099; outside that span the series diverges quickly and
//! the results are meaningless.
use serde::{Deserialize, Serialize};

use crate::angles::normalize_degrees;
use crate::time::julian_centuries;

/// Heliocentric ecliptic coordinates referred to the mean equinox of J2000.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoord {
    /// Ecliptic longitude, radians.
    pub longitude: f64,

    /// Ecliptic latitude, radians.
    pub latitude: f64,

    /// Distance from the Sun, AU.
    pub distance: f64,
}

/// One periodic term of the Pluto series.
struct PlutoTerm {
    /// Multiples of the mean longitudes of Jupiter, Saturn, and Pluto.
    args: [i8; 3],

    /// Sine and cosine coefficients for longitude, 1e-6 degrees.
    lon: (f64, f64),

    /// Sine and cosine coefficients for latitude, 1e-6 degrees.
    lat: (f64, f64),

    /// Sine and cosine coefficients for the radius vector, 1e-7 AU.
    rad: (f64, f64),
}

/// Meeus table 37.A.
#[rustfmt::skip]
const PLUTO_TERMS: &[PlutoTerm] = &[
    PlutoTerm { args: [0, 0, 1], lon: (-19799805.0, 19850055.0), lat: (-5452852.0, -14974862.0), rad: (66865439.0, 68951812.0) },
    PlutoTerm { args: [0, 0, 2], lon: (897144.0, -4954829.0), lat: (3527812.0, 1672790.0), rad: (-11827535.0, -332538.0) },
    PlutoTerm { args: [0, 0, 3], lon: (611149.0, 1211027.0), lat: (-1050748.0, 327647.0), rad: (1593179.0, -1438890.0) },
    PlutoTerm { args: [0, 0, 4], lon: (-341243.0, -189585.0), lat: (178690.0, -292153.0), rad: (-18444.0, 483220.0) },
    PlutoTerm { args: [0, 0, 5], lon: (129287.0, -34992.0), lat: (18650.0, 100340.0), rad: (-65977.0, -85431.0) },
    PlutoTerm { args: [0, 0, 6], lon: (-38164.0, 30893.0), lat: (-30697.0, -25823.0), rad: (31174.0, -6032.0) },
    PlutoTerm { args: [0, 1, -1], lon: (20442.0, -9987.0), lat: (4878.0, 11248.0), rad: (-5794.0, 22161.0) },
    PlutoTerm { args: [0, 1, 0], lon: (-4063.0, -5071.0), lat: (226.0, -64.0), rad: (4601.0, 4032.0) },
    PlutoTerm { args: [0, 1, 1], lon: (-6016.0, -3336.0), lat: (2030.0, -836.0), rad: (-1729.0, 234.0) },
    PlutoTerm { args: [0, 1, 2], lon: (-3956.0, 3039.0), lat: (69.0, -604.0), rad: (-415.0, 702.0) },
    PlutoTerm { args: [0, 1, 3], lon: (-667.0, 3572.0), lat: (-247.0, -567.0), rad: (239.0, 723.0) },
    PlutoTerm { args: [0, 2, -2], lon: (1276.0, 501.0), lat: (-57.0, 1.0), rad: (67.0, -67.0) },
    PlutoTerm { args: [0, 2, -1], lon: (1152.0, -917.0), lat: (-122.0, 175.0), rad: (1034.0, -451.0) },
    PlutoTerm { args: [0, 2, 0], lon: (630.0, -1277.0), lat: (-49.0, -164.0), rad: (-129.0, 504.0) },
    PlutoTerm { args: [1, -1, 0], lon: (2571.0, -459.0), lat: (-197.0, 199.0), rad: (480.0, -231.0) },
    PlutoTerm { args: [1, -1, 1], lon: (899.0, -1449.0), lat: (-25.0, 217.0), rad: (2.0, -441.0) },
    PlutoTerm { args: [1, 0, -3], lon: (-1016.0, 1043.0), lat: (589.0, -248.0), rad: (-3359.0, 265.0) },
    PlutoTerm { args: [1, 0, -2], lon: (-2343.0, -1012.0), lat: (-269.0, 711.0), rad: (7856.0, -7832.0) },
    PlutoTerm { args: [1, 0, -1], lon: (7042.0, 788.0), lat: (185.0, 193.0), rad: (36.0, 45763.0) },
    PlutoTerm { args: [1, 0, 0], lon: (1199.0, -338.0), lat: (315.0, 807.0), rad: (8663.0, 8547.0) },
    PlutoTerm { args: [1, 0, 1], lon: (418.0, -67.0), lat: (-130.0, -43.0), rad: (-809.0, -769.0) },
    PlutoTerm { args: [1, 0, 2], lon: (120.0, -274.0), lat: (5.0, 3.0), rad: (263.0, -144.0) },
    PlutoTerm { args: [1, 0, 3], lon: (-60.0, -159.0), lat: (2.0, 17.0), rad: (-126.0, 32.0) },
    PlutoTerm { args: [1, 0, 4], lon: (-82.0, -29.0), lat: (2.0, 5.0), rad: (-35.0, -16.0) },
    PlutoTerm { args: [1, 1, -3], lon: (-36.0, -29.0), lat: (2.0, 3.0), rad: (-19.0, -4.0) },
    PlutoTerm { args: [1, 1, -2], lon: (-40.0, 7.0), lat: (3.0, 1.0), rad: (-15.0, 8.0) },
    PlutoTerm { args: [1, 1, -1], lon: (-14.0, 22.0), lat: (2.0, -1.0), rad: (-4.0, 12.0) },
    PlutoTerm { args: [1, 1, 0], lon: (4.0, 13.0), lat: (1.0, -1.0), rad: (5.0, 6.0) },
    PlutoTerm { args: [1, 1, 1], lon: (5.0, 2.0), lat: (0.0, -1.0), rad: (3.0, 1.0) },
    PlutoTerm { args: [1, 1, 3], lon: (-1.0, 0.0), lat: (0.0, 0.0), rad: (6.0, -2.0) },
    PlutoTerm { args: [2, 0, -6], lon: (2.0, 0.0), lat: (0.0, -2.0), rad: (2.0, 2.0) },
    PlutoTerm { args: [2, 0, -5], lon: (-4.0, 5.0), lat: (2.0, 2.0), rad: (-2.0, -2.0) },
    PlutoTerm { args: [2, 0, -4], lon: (4.0, -7.0), lat: (-7.0, 0.0), rad: (14.0, 13.0) },
    PlutoTerm { args: [2, 0, -3], lon: (14.0, 24.0), lat: (10.0, -8.0), rad: (24.0, -18.0) },
    PlutoTerm { args: [2, 0, -2], lon: (-49.0, -34.0), lat: (-3.0, 20.0), rad: (-33.0, -125.0) },
    PlutoTerm { args: [2, 0, -1], lon: (163.0, -48.0), lat: (6.0, 5.0), rad: (-5.0, -24.0) },
    PlutoTerm { args: [2, 0, 0], lon: (9.0, -24.0), lat: (14.0, 17.0), rad: (17.0, -24.0) },
    PlutoTerm { args: [2, 0, 1], lon: (-4.0, 1.0), lat: (-2.0, 0.0), rad: (4.0, 2.0) },
    PlutoTerm { args: [2, 0, 2], lon: (-3.0, 1.0), lat: (0.0, 0.0), rad: (0.0, 0.0) },
    PlutoTerm { args: [2, 0, 3], lon: (1.0, 3.0), lat: (0.0, 0.0), rad: (0.0, 0.0) },
    PlutoTerm { args: [3, 0, -2], lon: (-3.0, -1.0), lat: (0.0, 1.0), rad: (0.0, 5.0) },
    PlutoTerm { args: [3, 0, -1], lon: (5.0, -3.0), lat: (0.0, 0.0), rad: (0.0, 0.0) },
    PlutoTerm { args: [3, 0, 0], lon: (0.0, 0.0), lat: (1.0, 0.0), rad: (0.0, 0.0) },
];

/// Heliocentric position of Pluto referred to the mean equinox of J2000.
///
/// Only meaningful between the years 1885 and 2099.
pub fn heliocentric(jd: f64) -> EclipticCoord {
    let t = julian_centuries(jd);

    // Mean longitudes of Jupiter, Saturn, and Pluto, radians.
    let j = (34.35 + 3034.9057 * t).to_radians();
    let s = (50.08 + 1222.1138 * t).to_radians();
    let p = (238.96 + 144.9600 * t).to_radians();

    let mut lon = 0.0;
    let mut lat = 0.0;
    let mut rad = 0.0;
    for term in PLUTO_TERMS {
        let alpha = term.args[0] as f64 * j + term.args[1] as f64 * s + term.args[2] as f64 * p;
        let (sin_a, cos_a) = alpha.sin_cos();
        lon += term.lon.0 * sin_a + term.lon.1 * cos_a;
        lat += term.lat.0 * sin_a + term.lat.1 * cos_a;
        rad += term.rad.0 * sin_a + term.rad.1 * cos_a;
    }

    let longitude = normalize_degrees(238.958116 + 144.96 * t + lon * 1e-6);
    let latitude = -3.908239 + lat * 1e-6;
    let distance = 40.7241346 + rad * 1e-7;

    EclipticCoord {
        longitude: longitude.to_radians(),
        latitude: latitude.to_radians(),
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heliocentric() {
        // Meeus, example 37.a: 1992 October 13.0 TD
        let pluto = heliocentric(2448908.5);
        assert!((pluto.longitude.to_degrees() - 232.74071).abs() < 2e-4);
        assert!((pluto.latitude.to_degrees() - 14.58782).abs() < 2e-4);
        assert!((pluto.distance - 29.711111).abs() < 2e-4);
    }

    #[test]
    fn test_distance_stays_bounded() {
        // Perihelion is near 29.7 AU, aphelion near 49.3 AU.
        for year in 0..21 {
            let jd = 2415020.5 + year as f64 * 3652.5;
            let pluto = heliocentric(jd);
            assert!(pluto.distance > 29.0);
            assert!(pluto.distance < 50.0);
        }
    }

    #[test]
    fn test_term_count() {
        assert_eq!(PLUTO_TERMS.len(), 43);
    }
}
