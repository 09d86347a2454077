//! The Galilean moons of Jupiter.
use super::{PlanetaryBody, RAD_PER_DEG};

/// The four Galilean moons, in order of distance from Jupiter.
pub const JUPITER_MOONS: &[PlanetaryBody] = &[
    PlanetaryBody {
        name: "Io",
        diameter: 3643.2,
        mass: 8.93e22,
        semi_major_axis: 421700.0,
        orbital_period: 1.769138,
        eccentricity: 0.0041,
        inclination: 0.036 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Europa",
        diameter: 3121.6,
        mass: 4.8e22,
        semi_major_axis: 671034.0,
        orbital_period: 3.551181,
        eccentricity: 0.0094,
        inclination: 0.466 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Ganymede",
        diameter: 5268.2,
        mass: 1.4819e23,
        semi_major_axis: 1070412.0,
        orbital_period: 7.154553,
        eccentricity: 0.0013,
        inclination: 0.177 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Callisto",
        diameter: 4820.6,
        mass: 1.0759e23,
        semi_major_axis: 1882709.0,
        orbital_period: 16.689017,
        eccentricity: 0.0074,
        inclination: 0.192 * RAD_PER_DEG,
    },
];
