//! Coordinate systems.
//!
//! | System | Vector | Components | Singular at |
//! |--------|--------|------------|-------------|
//! | Polar | [`PolarVector`] | radius, angle | origin |
//! | Cylindrical | [`CylindricalVector`] | ρ, longitude, height | z-axis |
//! | Spherical | [`SphericalVector`] | radius, colatitude, longitude | z-axis |
//! | Latitudinal | [`LatitudinalVector`] | radius, latitude, longitude | z-axis |
//! | RA/Dec | [`RaDecVector`] | radius, right ascension, declination | z-axis |
//!
//! Each system has a `*Converter` for positions and a `*Transformation` for
//! its Jacobian.

use spacemath_core::constants::PI;

pub mod cylindrical;
pub mod latitudinal;
pub mod polar;
pub mod radec;
pub mod spherical;

pub use cylindrical::{CylindricalConverter, CylindricalTransformation, CylindricalVector};
pub use latitudinal::{LatitudinalConverter, LatitudinalTransformation, LatitudinalVector};
pub use polar::{PolarConverter, PolarTransformation, PolarVector};
pub use radec::{RaDecConverter, RaDecTransformation, RaDecVector};
pub use spherical::{SphericalConverter, SphericalTransformation, SphericalVector};

/// `atan2(y, x)` in `(-π, π]`.
///
/// `atan2` returns -π for a negative-zero `y` with negative `x`; that
/// direction is reported as π.
pub(crate) fn longitude(y: f64, x: f64) -> f64 {
    let angle = libm::atan2(y, x);
    if angle == -PI {
        PI
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longitude_folds_negative_half_turn() {
        assert_eq!(longitude(-0.0, -1.0), PI);
        assert_eq!(longitude(0.0, -1.0), PI);
        assert_eq!(longitude(-0.0, 1.0), -0.0);
        assert!(longitude(-1e-300, -1.0) == PI);
        assert_eq!(longitude(-1.0, 0.0), -0.5 * PI);
    }
}
