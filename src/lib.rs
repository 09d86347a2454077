//! # Orrery Core
//! Closed-form astronomical and aerodynamic formulas.
//!
//! Every function in this crate is a pure numeric computation over small
//! value types. The astronomical algorithms follow Meeus's "Astronomical
//! Algorithms" (2nd edition); chapter and equation numbers are cited next
//! to the code which implements them.
//!
//! Angles are radians and distances are AU unless a function documents
//! otherwise. Times are Julian Day numbers, where the fractional part of a
//! day carries the time of day and a fraction of 0.5 is midnight.
//!

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub mod airfoil;
pub mod angles;
pub mod constants;
pub mod errors;
pub mod moons;
pub mod nutation;
pub mod pluto;
pub mod sun;
pub mod time;

/// Common useful imports
pub mod prelude {
    pub use crate::airfoil::Naca4;
    pub use crate::angles::{ArcAngle, HourAngle};
    pub use crate::errors::{Error, OrreryResult};
    pub use crate::moons::PlanetaryBody;
    pub use crate::nutation::{
        fast_mean_obliquity, fast_nutation, fast_true_obliquity, mean_obliquity, nutation,
        true_obliquity, Nutation,
    };
    pub use crate::pluto::EclipticCoord;
    pub use crate::sun::SunPosition;
    pub use crate::time::{
        CalendarDate, GregorianDate, JulianDate, JulianDay, Month, Weekday,
    };
}
