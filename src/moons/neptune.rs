//! The major moons of Neptune.
use super::{PlanetaryBody, RAD_PER_DEG};

/// The three largest moons. Triton's inclination is greater than 90 degrees,
/// its orbit is retrograde.
pub const NEPTUNE_MOONS: &[PlanetaryBody] = &[
    PlanetaryBody {
        name: "Proteus",
        diameter: 420.0,
        mass: 4.4e19,
        semi_major_axis: 117646.0,
        orbital_period: 1.12231,
        eccentricity: 0.0005,
        inclination: 0.524 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Triton",
        diameter: 2706.8,
        mass: 2.139e22,
        semi_major_axis: 354759.0,
        orbital_period: 5.876854,
        eccentricity: 0.000016,
        inclination: 156.885 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Nereid",
        diameter: 340.0,
        mass: 3.1e19,
        semi_major_axis: 5513818.0,
        orbital_period: 360.13,
        eccentricity: 0.7507,
        inclination: 7.09 * RAD_PER_DEG,
    },
];
