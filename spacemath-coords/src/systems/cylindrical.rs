use super::longitude;
use crate::transforms::{CoordinateConverter, CoordinateVector, Transformation};
use spacemath_core::math::compute_norm2;
use spacemath_core::{Matrix3, Vector3};
use std::fmt;

/// Cylindrical coordinates: distance from the z-axis, longitude about it
/// measured from +x toward +y, and height along it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CylindricalVector {
    cylindrical_radius: f64,
    longitude: f64,
    height: f64,
}

impl CylindricalVector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(cylindrical_radius: f64, longitude: f64, height: f64) -> Self {
        Self {
            cylindrical_radius,
            longitude,
            height,
        }
    }

    #[inline]
    pub fn cylindrical_radius(&self) -> f64 {
        self.cylindrical_radius
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl CoordinateVector for CylindricalVector {
    type Components = Vector3;

    fn from_components(components: &Vector3) -> Self {
        Self::new(components.i, components.j, components.k)
    }

    fn components(&self) -> Vector3 {
        Vector3::new(self.cylindrical_radius, self.longitude, self.height)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CylindricalConverter;

impl CoordinateConverter for CylindricalConverter {
    type Cartesian = Vector3;
    type Coordinate = CylindricalVector;

    fn to_coordinate(&self, cartesian: &Vector3) -> CylindricalVector {
        CylindricalVector::new(
            compute_norm2(cartesian.i, cartesian.j),
            longitude(cartesian.j, cartesian.i),
            cartesian.k,
        )
    }

    fn to_cartesian(&self, coordinate: &CylindricalVector) -> Vector3 {
        let (s, c) = libm::sincos(coordinate.longitude);
        Vector3::new(
            coordinate.cylindrical_radius * c,
            coordinate.cylindrical_radius * s,
            coordinate.height,
        )
    }
}

/// Jacobian of `(ρ cos φ, ρ sin φ, z)`, singular on the z-axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct CylindricalTransformation;

impl Transformation for CylindricalTransformation {
    type Matrix = Matrix3;
    type Coordinate = CylindricalVector;

    const NAME: &'static str = "CylindricalTransformation";

    fn get_transformation(&self, position: &CylindricalVector) -> Matrix3 {
        let rho = position.cylindrical_radius;
        let (s, c) = libm::sincos(position.longitude);
        Matrix3::new(c, s, 0.0, -rho * s, rho * c, 0.0, 0.0, 0.0, 1.0)
    }
}

impl From<Vector3> for CylindricalVector {
    fn from(v: Vector3) -> Self {
        CylindricalConverter.to_coordinate(&v)
    }
}

impl From<CylindricalVector> for Vector3 {
    fn from(c: CylindricalVector) -> Self {
        CylindricalConverter.to_cartesian(&c)
    }
}

impl fmt::Display for CylindricalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(rho={}, longitude={}, height={})",
            self.cylindrical_radius, self.longitude, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_negative_x_axis_longitude() {
        let c = CylindricalConverter.to_coordinate(&Vector3::I.negated());
        assert_eq!(c.longitude(), PI);
        assert_eq!(c.cylindrical_radius(), 1.0);
    }

    #[test]
    fn test_basis_at_known_point() {
        let j =
            CylindricalTransformation.get_transformation(&CylindricalVector::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(j.ii, -0.4161468365471424, epsilon = 1e-15);
        assert_abs_diff_eq!(j.ji, 0.9092974268256817, epsilon = 1e-15);
        assert_eq!(j.kk, 1.0);
    }

    #[test]
    fn test_height_passes_through() {
        let c = CylindricalConverter.to_coordinate(&Vector3::new(0.0, 0.0, -7.5));
        assert_eq!(c, CylindricalVector::new(0.0, 0.0, -7.5));
        assert_eq!(CylindricalConverter.to_cartesian(&c), Vector3::new(0.0, 0.0, -7.5));
    }

    #[test]
    fn test_roundtrip() {
        let v = Vector3::new(-1.5, 0.25, 4.0);
        let back = Vector3::from(CylindricalVector::from(v));
        assert_abs_diff_eq!(back, v, epsilon = 1e-14);
    }

    #[test]
    fn test_axis_is_singular() {
        let err = CylindricalTransformation
            .get_inverse_transformation(&CylindricalVector::new(0.0, 1.0, 2.0))
            .unwrap_err();
        assert!(err.is_point_on_axis());
    }
}
