//! Earth's moon.
use super::{PlanetaryBody, RAD_PER_DEG};

/// The Moon. Inclination is to the ecliptic.
pub const EARTH_MOONS: &[PlanetaryBody] = &[PlanetaryBody {
    name: "Moon",
    diameter: 3474.8,
    mass: 7.342e22,
    semi_major_axis: 384399.0,
    orbital_period: 27.321661,
    eccentricity: 0.0549,
    inclination: 5.145 * RAD_PER_DEG,
}];
