//! The major moons of Saturn.
use super::{PlanetaryBody, RAD_PER_DEG};

/// The seven major moons, in order of distance from Saturn.
pub const SATURN_MOONS: &[PlanetaryBody] = &[
    PlanetaryBody {
        name: "Mimas",
        diameter: 396.4,
        mass: 3.7493e19,
        semi_major_axis: 185539.0,
        orbital_period: 0.942422,
        eccentricity: 0.0196,
        inclination: 1.574 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Enceladus",
        diameter: 504.2,
        mass: 1.08022e20,
        semi_major_axis: 237948.0,
        orbital_period: 1.370218,
        eccentricity: 0.0047,
        inclination: 0.009 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Tethys",
        diameter: 1062.2,
        mass: 6.17449e20,
        semi_major_axis: 294619.0,
        orbital_period: 1.887802,
        eccentricity: 0.0001,
        inclination: 1.12 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Dione",
        diameter: 1122.8,
        mass: 1.095452e21,
        semi_major_axis: 377396.0,
        orbital_period: 2.736915,
        eccentricity: 0.0022,
        inclination: 0.019 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Rhea",
        diameter: 1527.6,
        mass: 2.306518e21,
        semi_major_axis: 527108.0,
        orbital_period: 4.518212,
        eccentricity: 0.001258,
        inclination: 0.345 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Titan",
        diameter: 5149.5,
        mass: 1.3452e23,
        semi_major_axis: 1221870.0,
        orbital_period: 15.945,
        eccentricity: 0.0288,
        inclination: 0.34854 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Iapetus",
        diameter: 1468.6,
        mass: 1.805635e21,
        semi_major_axis: 3560820.0,
        orbital_period: 79.3215,
        eccentricity: 0.0286,
        inclination: 15.47 * RAD_PER_DEG,
    },
];
