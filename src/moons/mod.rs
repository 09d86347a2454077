//! Catalogs of the major planetary moons.
//!
//! Physical and orbital data for the principal natural satellites, one table
//! per host planet. Orbital elements are mean values referred to the local
//! Laplace plane.
pub mod earth;
pub mod jupiter;
pub mod mars;
pub mod neptune;
pub mod saturn;
pub mod uranus;

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Radians per degree, for inclination entries in the const tables.
const RAD_PER_DEG: f64 = std::f64::consts::PI / 180.0;

/// Physical and mean orbital data for a natural satellite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetaryBody {
    /// Canonical name.
    pub name: &'static str,

    /// Mean diameter, km.
    pub diameter: f64,

    /// Mass, kg.
    pub mass: f64,

    /// Semi-major axis of the orbit, km.
    pub semi_major_axis: f64,

    /// Sidereal orbital period, days.
    pub orbital_period: f64,

    /// Orbital eccentricity.
    pub eccentricity: f64,

    /// Orbital inclination to the local Laplace plane, radians.
    pub inclination: f64,
}

lazy_static! {
    /// Lowercased name to catalog entry, across all host planets.
    static ref MOON_INDEX: HashMap<String, &'static PlanetaryBody> = {
        let mut index = HashMap::new();
        let tables = [
            earth::EARTH_MOONS,
            mars::MARS_MOONS,
            jupiter::JUPITER_MOONS,
            saturn::SATURN_MOONS,
            uranus::URANUS_MOONS,
            neptune::NEPTUNE_MOONS,
        ];
        for table in tables {
            for body in table {
                let _ = index.insert(body.name.to_lowercase(), body);
            }
        }
        index
    };
}

/// Look up a moon by name, case-insensitively.
pub fn by_name(name: &str) -> Option<&'static PlanetaryBody> {
    MOON_INDEX.get(&name.to_lowercase()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        let titania = by_name("Titania").unwrap();
        assert_eq!(titania.name, "Titania");
        assert!((titania.semi_major_axis - 435910.0).abs() < 1.0);

        // case-insensitive
        assert_eq!(by_name("triton").unwrap().name, "Triton");
        assert!(by_name("Vulcan").is_none());
    }

    #[test]
    fn test_index_covers_all_tables() {
        let count: usize = [
            earth::EARTH_MOONS,
            mars::MARS_MOONS,
            jupiter::JUPITER_MOONS,
            saturn::SATURN_MOONS,
            uranus::URANUS_MOONS,
            neptune::NEPTUNE_MOONS,
        ]
        .iter()
        .map(|table| table.len())
        .sum();
        assert_eq!(MOON_INDEX.len(), count);
    }

    #[test]
    fn test_catalog_sanity() {
        for body in MOON_INDEX.values() {
            assert!(body.diameter > 0.0);
            assert!(body.mass > 0.0);
            assert!(body.semi_major_axis > 0.0);
            assert!(body.orbital_period > 0.0);
            assert!((0.0..1.0).contains(&body.eccentricity));
            assert!(body.inclination >= 0.0);
            assert!(body.inclination < std::f64::consts::PI);
        }
    }
}
