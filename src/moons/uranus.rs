//! The major moons of Uranus.
use super::{PlanetaryBody, RAD_PER_DEG};

/// The five major moons, in order of distance from Uranus.
pub const URANUS_MOONS: &[PlanetaryBody] = &[
    PlanetaryBody {
        name: "Miranda",
        diameter: 471.6,
        mass: 6.4e19,
        semi_major_axis: 129390.0,
        orbital_period: 1.41348,
        eccentricity: 0.0013,
        inclination: 4.232 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Ariel",
        diameter: 1157.8,
        mass: 1.251e21,
        semi_major_axis: 191020.0,
        orbital_period: 2.52038,
        eccentricity: 0.0012,
        inclination: 0.260 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Umbriel",
        diameter: 1169.4,
        mass: 1.275e21,
        semi_major_axis: 266300.0,
        orbital_period: 4.14418,
        eccentricity: 0.0039,
        inclination: 0.205 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Titania",
        diameter: 1576.8,
        mass: 3.4e21,
        semi_major_axis: 435910.0,
        orbital_period: 8.70587,
        eccentricity: 0.0011,
        inclination: 0.340 * RAD_PER_DEG,
    },
    PlanetaryBody {
        name: "Oberon",
        diameter: 1522.8,
        mass: 3.076e21,
        semi_major_axis: 583520.0,
        orbital_period: 13.4632,
        eccentricity: 0.0014,
        inclination: 0.058 * RAD_PER_DEG,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_and_resonance() {
        // Tables are sorted outward, and Kepler's third law holds to a few
        // percent across the system.
        for pair in URANUS_MOONS.windows(2) {
            assert!(pair[0].semi_major_axis < pair[1].semi_major_axis);
            let ratio = (pair[1].orbital_period / pair[0].orbital_period).powi(2)
                / (pair[1].semi_major_axis / pair[0].semi_major_axis).powi(3);
            assert!((ratio - 1.0).abs() < 0.05);
        }
    }
}
