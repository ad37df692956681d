use super::latitudinal::{LatitudinalConverter, LatitudinalTransformation, LatitudinalVector};
use crate::transforms::{CoordinateConverter, CoordinateVector, Transformation};
use crate::CoordResult;
use spacemath_core::utils::normalize_angle_to_positive;
use spacemath_core::{Matrix3, Vector3};
use std::fmt;

/// Right ascension and declination with a radius.
///
/// Geometrically this is the latitudinal system with right ascension as
/// longitude and declination as latitude, but the components are ordered
/// `(radius, right ascension, declination)`. Right ascension from the
/// converter lies in `(-π, π]`; see
/// [`right_ascension_positive`](Self::right_ascension_positive).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaDecVector {
    radius: f64,
    right_ascension: f64,
    declination: f64,
}

impl RaDecVector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(radius: f64, right_ascension: f64, declination: f64) -> Self {
        Self {
            radius,
            right_ascension,
            declination,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Right ascension wrapped into `[0, 2π)`.
    pub fn right_ascension_positive(&self) -> f64 {
        normalize_angle_to_positive(self.right_ascension)
    }

    #[inline]
    pub fn declination(&self) -> f64 {
        self.declination
    }
}

impl From<LatitudinalVector> for RaDecVector {
    fn from(l: LatitudinalVector) -> Self {
        Self::new(l.radius(), l.longitude(), l.latitude())
    }
}

impl From<RaDecVector> for LatitudinalVector {
    fn from(r: RaDecVector) -> Self {
        Self::new(r.radius, r.declination, r.right_ascension)
    }
}

impl CoordinateVector for RaDecVector {
    type Components = Vector3;

    fn from_components(components: &Vector3) -> Self {
        Self::new(components.i, components.j, components.k)
    }

    fn components(&self) -> Vector3 {
        Vector3::new(self.radius, self.right_ascension, self.declination)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RaDecConverter;

impl CoordinateConverter for RaDecConverter {
    type Cartesian = Vector3;
    type Coordinate = RaDecVector;

    fn to_coordinate(&self, cartesian: &Vector3) -> RaDecVector {
        LatitudinalConverter.to_coordinate(cartesian).into()
    }

    fn to_cartesian(&self, coordinate: &RaDecVector) -> Vector3 {
        LatitudinalConverter.to_cartesian(&(*coordinate).into())
    }
}

/// Jacobian with columns ∂/∂r, ∂/∂ra, ∂/∂dec.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaDecTransformation;

impl Transformation for RaDecTransformation {
    type Matrix = Matrix3;
    type Coordinate = RaDecVector;

    const NAME: &'static str = "RaDecTransformation";

    fn get_transformation(&self, position: &RaDecVector) -> Matrix3 {
        let [d_radius, d_declination, d_right_ascension] = LatitudinalTransformation::partials(
            position.radius,
            position.declination,
            position.right_ascension,
        );
        Matrix3::from_columns(&d_radius, &d_right_ascension, &d_declination)
    }

    fn check_invertible(&self, position: &RaDecVector) -> CoordResult<()> {
        let declination = position.declination;
        LatitudinalTransformation::check_latitude(Self::NAME, position.radius, declination)
    }
}

impl From<Vector3> for RaDecVector {
    fn from(v: Vector3) -> Self {
        RaDecConverter.to_coordinate(&v)
    }
}

impl From<RaDecVector> for Vector3 {
    fn from(r: RaDecVector) -> Self {
        RaDecConverter.to_cartesian(&r)
    }
}

impl fmt::Display for RaDecVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(radius={}, ra={}, dec={})",
            self.radius, self.right_ascension, self.declination
        )
    }
}
