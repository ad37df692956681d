use super::longitude;
use crate::transforms::{CoordinateConverter, CoordinateVector, Transformation};
use spacemath_core::math::compute_norm2;
use spacemath_core::{Matrix2, Vector2};
use std::fmt;

/// Plane polar coordinates: distance from the origin and angle from the
/// x-axis toward the y-axis, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarVector {
    radius: f64,
    angle: f64,
}

impl PolarVector {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl CoordinateVector for PolarVector {
    type Components = Vector2;

    fn from_components(components: &Vector2) -> Self {
        Self::new(components.i, components.j)
    }

    fn components(&self) -> Vector2 {
        Vector2::new(self.radius, self.angle)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PolarConverter;

impl CoordinateConverter for PolarConverter {
    type Cartesian = Vector2;
    type Coordinate = PolarVector;

    /// The origin maps to radius 0, angle 0.
    fn to_coordinate(&self, cartesian: &Vector2) -> PolarVector {
        let radius = compute_norm2(cartesian.i, cartesian.j);
        let angle = longitude(cartesian.j, cartesian.i);
        PolarVector::new(radius, angle)
    }

    fn to_cartesian(&self, coordinate: &PolarVector) -> Vector2 {
        let (s, c) = libm::sincos(coordinate.angle);
        Vector2::new(coordinate.radius * c, coordinate.radius * s)
    }
}

/// Jacobian of `(x, y) = (r cos θ, r sin θ)`, singular at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarTransformation;

impl Transformation for PolarTransformation {
    type Matrix = Matrix2;
    type Coordinate = PolarVector;

    const NAME: &'static str = "PolarTransformation";

    fn get_transformation(&self, position: &PolarVector) -> Matrix2 {
        let r = position.radius;
        let (s, c) = libm::sincos(position.angle);
        Matrix2::new(c, s, -r * s, r * c)
    }
}

impl From<Vector2> for PolarVector {
    fn from(v: Vector2) -> Self {
        PolarConverter.to_coordinate(&v)
    }
}

impl From<PolarVector> for Vector2 {
    fn from(p: PolarVector) -> Self {
        PolarConverter.to_cartesian(&p)
    }
}

impl fmt::Display for PolarVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(radius={}, angle={})", self.radius, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_to_coordinate_axes() {
        let p = PolarConverter.to_coordinate(&Vector2::new(0.0, 3.0));
        assert_eq!(p.radius(), 3.0);
        assert_eq!(p.angle(), FRAC_PI_2);

        let p = PolarConverter.to_coordinate(&Vector2::new(-2.0, 0.0));
        assert_eq!(p.radius(), 2.0);
        assert_eq!(p.angle(), PI);
    }

    #[test]
    fn test_negative_x_axis_with_negative_zero_y() {
        let p = PolarConverter.to_coordinate(&Vector2::I.negated());
        assert_eq!(p.angle(), PI);
    }

    #[test]
    fn test_origin_is_not_an_error() {
        assert_eq!(PolarConverter.to_coordinate(&Vector2::ZERO), PolarVector::ZERO);
    }

    #[test]
    fn test_large_components_do_not_overflow() {
        let p = PolarConverter.to_coordinate(&Vector2::new(3e300, 4e300));
        assert_abs_diff_eq!(p.radius(), 5e300, epsilon = 1e286);
    }

    #[test]
    fn test_known_point() {
        let v = PolarConverter.to_cartesian(&PolarVector::new(2.2360679774998, 1.1071487177941));
        assert_abs_diff_eq!(v, Vector2::new(1.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_jacobian_inverse() {
        let position = PolarVector::new(2.0, 0.7);
        let j = PolarTransformation.get_transformation(&position);
        let inv = PolarTransformation.get_inverse_transformation(&position).unwrap();
        assert_abs_diff_eq!(Matrix2::mxm(&j, &inv), Matrix2::IDENTITY, epsilon = 1e-15);
    }

    #[test]
    fn test_origin_is_on_axis() {
        let err = PolarTransformation
            .get_inverse_transformation(&PolarVector::new(0.0, 1.0))
            .unwrap_err();
        assert!(err.is_point_on_axis());
    }
}
