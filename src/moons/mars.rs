//! The moons of Mars.
use super::{PlanetaryBody, RAD_PER_DEG};

/// Both Martian moons.
pub const MARS_MOONS: &[PlanetaryBody] = &[
    PlanetaryBody {
        name: "Phobos",
        diameter: 22.2,
        mass: 1.0659e16,
        semi_major_axis: 9376.0,
        orbital_period: 0.31891,
        eccentricity: 0.0151,
        inclination: 1.093 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Deimos",
        diameter: 12.6,
        mass: 1.4762e15,
        semi_major_axis: 23463.0,
        orbital_period: 1.263,
        eccentricity: 0.00033,
        inclination: 0.93 * RAD_PER_DEG,
    },
];
