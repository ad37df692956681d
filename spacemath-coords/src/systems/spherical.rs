use super::longitude;
use crate::transforms::{CoordinateConverter, CoordinateVector, Transformation};
use crate::{CoordError, CoordResult};
use spacemath_core::math::compute_norm2;
use spacemath_core::{Matrix3, Vector3};
use std::fmt;

/// Spherical coordinates: radius, colatitude measured from +z in `[0, π]`,
/// and longitude measured from +x toward +y in `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalVector {
    radius: f64,
    colatitude: f64,
    longitude: f64,
}

impl SphericalVector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(radius: f64, colatitude: f64, longitude: f64) -> Self {
        Self {
            radius,
            colatitude,
            longitude,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn colatitude(&self) -> f64 {
        self.colatitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl CoordinateVector for SphericalVector {
    type Components = Vector3;

    fn from_components(components: &Vector3) -> Self {
        Self::new(components.i, components.j, components.k)
    }

    fn components(&self) -> Vector3 {
        Vector3::new(self.radius, self.colatitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalConverter;

impl CoordinateConverter for SphericalConverter {
    type Cartesian = Vector3;
    type Coordinate = SphericalVector;

    /// The origin maps to all zeros; points on the z-axis get longitude 0.
    fn to_coordinate(&self, cartesian: &Vector3) -> SphericalVector {
        let rho = compute_norm2(cartesian.i, cartesian.j);
        SphericalVector::new(
            cartesian.length(),
            libm::atan2(rho, cartesian.k),
            longitude(cartesian.j, cartesian.i),
        )
    }

    fn to_cartesian(&self, coordinate: &SphericalVector) -> Vector3 {
        let (st, ct) = libm::sincos(coordinate.colatitude);
        let (sp, cp) = libm::sincos(coordinate.longitude);
        let r = coordinate.radius;
        Vector3::new(r * st * cp, r * st * sp, r * ct)
    }
}

/// Jacobian of the spherical mapping, singular at the origin and on the
/// z-axis (colatitude 0 or π).
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalTransformation;

impl Transformation for SphericalTransformation {
    type Matrix = Matrix3;
    type Coordinate = SphericalVector;

    const NAME: &'static str = "SphericalTransformation";

    fn get_transformation(&self, position: &SphericalVector) -> Matrix3 {
        let r = position.radius;
        let (st, ct) = libm::sincos(position.colatitude);
        let (sp, cp) = libm::sincos(position.longitude);

        Matrix3::new(
            st * cp,
            st * sp,
            ct,
            r * ct * cp,
            r * ct * sp,
            -r * st,
            -r * st * sp,
            r * st * cp,
            0.0,
        )
    }

    fn check_invertible(&self, position: &SphericalVector) -> CoordResult<()> {
        if position.radius == 0.0 {
            return Err(CoordError::point_on_axis(Self::NAME, "radius is zero"));
        }
        if libm::sin(position.colatitude).abs() <= f64::EPSILON {
            return Err(CoordError::point_on_axis(
                Self::NAME,
                &format!("colatitude {} is on the z-axis", position.colatitude),
            ));
        }
        Ok(())
    }
}

impl From<Vector3> for SphericalVector {
    fn from(v: Vector3) -> Self {
        SphericalConverter.to_coordinate(&v)
    }
}

impl From<SphericalVector> for Vector3 {
    fn from(s: SphericalVector) -> Self {
        SphericalConverter.to_cartesian(&s)
    }
}

impl fmt::Display for SphericalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(radius={}, colatitude={}, longitude={})",
            self.radius, self.colatitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_axes() {
        let s = SphericalConverter.to_coordinate(&Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(s, SphericalVector::new(2.0, 0.0, 0.0));

        let s = SphericalConverter.to_coordinate(&Vector3::new(0.0, 0.0, -2.0));
        assert_eq!(s.colatitude(), PI);

        let s = SphericalConverter.to_coordinate(&Vector3::new(0.0, 5.0, 0.0));
        assert_eq!(s, SphericalVector::new(5.0, FRAC_PI_2, FRAC_PI_2));
    }

    #[test]
    fn test_origin() {
        assert_eq!(SphericalConverter.to_coordinate(&Vector3::ZERO), SphericalVector::ZERO);
    }

    #[test]
    fn test_diagonal_point() {
        let s = SphericalConverter.to_coordinate(&Vector3::new(1.0, 1.0, 0.0));
        assert_abs_diff_eq!(s.radius(), 2f64.sqrt(), epsilon = 1e-15);
        assert_abs_diff_eq!(s.colatitude(), FRAC_PI_2, epsilon = 1e-15);
        assert_abs_diff_eq!(s.longitude(), FRAC_PI_4, epsilon = 1e-15);
    }

    #[test]
    fn test_jacobian_columns_are_orthogonal() {
        let j = SphericalTransformation.get_transformation(&SphericalVector::new(3.0, 1.1, -2.4));
        let (a, b, c) = (j.ith_column(), j.jth_column(), j.kth_column());
        assert_abs_diff_eq!(a.dot(&b), 0.0, epsilon = 1e-14);
        assert_abs_diff_eq!(a.dot(&c), 0.0, epsilon = 1e-14);
        assert_abs_diff_eq!(b.dot(&c), 0.0, epsilon = 1e-14);
        assert_abs_diff_eq!(a.length(), 1.0, epsilon = 1e-14);
        assert_abs_diff_eq!(b.length(), 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_pole_is_singular() {
        let err = SphericalTransformation
            .get_inverse_transformation(&SphericalVector::new(1.0, 0.0, 0.3))
            .unwrap_err();
        assert!(err.is_point_on_axis());
    }

    #[test]
    fn test_south_pole_is_singular() {
        // sin(π) is 1.2e-16, so the longitude column is tiny but not zero
        let south = SphericalConverter.to_coordinate(&Vector3::new(0.0, 0.0, -3.0));
        assert_eq!(south.colatitude(), PI);
        let err = SphericalTransformation
            .get_inverse_transformation(&south)
            .unwrap_err();
        assert!(err.is_point_on_axis());
    }

    #[test]
    fn test_near_pole_is_invertible() {
        let position = SphericalVector::new(2.0, 1e-6, 0.5);
        let j = SphericalTransformation.get_transformation(&position);
        let inv = SphericalTransformation
            .get_inverse_transformation(&position)
            .unwrap();
        assert_abs_diff_eq!(Matrix3::mxm(&inv, &j), Matrix3::IDENTITY, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_x_axis_longitude() {
        let s = SphericalConverter.to_coordinate(&Vector3::I.negated());
        assert_eq!(s.longitude(), PI);
        assert_eq!(s.colatitude(), FRAC_PI_2);
    }
}
