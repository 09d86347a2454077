//! NACA 4-digit airfoil geometry.
//!
//! The classic closed-form profile family: a code such as "2412" encodes the
//! maximum camber in percent of the chord, the position of maximum camber in
//! tenths of the chord, and the maximum thickness in percent of the chord.
//! All coordinates are in chord units, with x running 0 at the leading edge
//! to 1 at the trailing edge. Inputs outside [0, 1] are not validated.
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, OrreryResult};

/// A NACA 4-digit airfoil profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Naca4 {
    /// Maximum camber, percent of chord (first digit).
    pub camber: f64,

    /// Position of maximum camber, tenths of chord (second digit).
    pub camber_position: f64,

    /// Maximum thickness, percent of chord (last two digits).
    pub thickness: f64,
}

impl Naca4 {
    /// Create a profile from its digit fields.
    pub fn new(camber: f64, camber_position: f64, thickness: f64) -> Self {
        Self {
            camber,
            camber_position,
            thickness,
        }
    }

    /// Parse a 4-digit code such as "2412" or "0015".
    pub fn from_code(code: &str) -> OrreryResult<Self> {
        let digits = code
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::ValueError(format!("NACA code is not numeric: {}", code)))?;
        if digits.len() != 4 {
            return Err(Error::ValueError(format!(
                "NACA code must have 4 digits: {}",
                code
            )));
        }
        Ok(Self {
            camber: digits[0] as f64,
            camber_position: digits[1] as f64,
            thickness: (digits[2] * 10 + digits[3]) as f64,
        })
    }

    /// True if the profile carries no camber.
    pub fn is_symmetric(&self) -> bool {
        self.camber == 0.0
    }

    /// Half-thickness of the profile at chord position x.
    pub fn thickness(&self, x: f64) -> f64 {
        let t = self.thickness / 100.0;
        5.0 * t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x * x + 0.2843 * x.powi(3)
                - 0.1015 * x.powi(4))
    }

    /// Height of the mean camber line at chord position x.
    ///
    /// A parabolic arc on each side of the maximum camber position.
    pub fn mean_camber_line(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            return 0.0;
        }
        let m = self.camber / 100.0;
        let p = self.camber_position / 10.0;
        if x <= p {
            m / (p * p) * (2.0 * p * x - x * x)
        } else {
            m / ((1.0 - p) * (1.0 - p)) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x)
        }
    }

    /// Upper and lower surface points at chord position x.
    ///
    /// The thickness envelope is applied perpendicular to the chord rather
    /// than to the camber line, the camber line slope is taken as zero.
    pub fn surface(&self, x: f64) -> (Vector2<f64>, Vector2<f64>) {
        let yt = self.thickness(x);
        if self.is_symmetric() {
            return (Vector2::new(x, yt), Vector2::new(x, -yt));
        }

        let yc = self.mean_camber_line(x);
        let slope: f64 = 0.0;
        let theta = slope.atan();

        let upper = Vector2::new(x - yt * theta.sin(), yc + yt * theta.cos());
        let lower = Vector2::new(x + yt * theta.sin(), yc - yt * theta.cos());
        (upper, lower)
    }
}
