use super::longitude;
use crate::transforms::{CoordinateConverter, CoordinateVector, Transformation};
use crate::{CoordError, CoordResult};
use spacemath_core::math::compute_norm2;
use spacemath_core::{Matrix3, Vector3};
use std::fmt;

/// Latitudinal coordinates: radius, latitude above the x-y plane in
/// `[-π/2, π/2]`, and longitude from +x toward +y in `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatitudinalVector {
    radius: f64,
    latitude: f64,
    longitude: f64,
}

impl LatitudinalVector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(radius: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            radius,
            latitude,
            longitude,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl CoordinateVector for LatitudinalVector {
    type Components = Vector3;

    fn from_components(components: &Vector3) -> Self {
        Self::new(components.i, components.j, components.k)
    }

    fn components(&self) -> Vector3 {
        Vector3::new(self.radius, self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LatitudinalConverter;

impl CoordinateConverter for LatitudinalConverter {
    type Cartesian = Vector3;
    type Coordinate = LatitudinalVector;

    fn to_coordinate(&self, cartesian: &Vector3) -> LatitudinalVector {
        let rho = compute_norm2(cartesian.i, cartesian.j);
        LatitudinalVector::new(
            cartesian.length(),
            libm::atan2(cartesian.k, rho),
            longitude(cartesian.j, cartesian.i),
        )
    }

    fn to_cartesian(&self, coordinate: &LatitudinalVector) -> Vector3 {
        let (sl, cl) = libm::sincos(coordinate.latitude);
        let (sp, cp) = libm::sincos(coordinate.longitude);
        let r = coordinate.radius;
        Vector3::new(r * cl * cp, r * cl * sp, r * sl)
    }
}

/// Jacobian of the latitudinal mapping, singular at the origin and at the
/// poles (latitude ±π/2).
#[derive(Debug, Clone, Copy, Default)]
pub struct LatitudinalTransformation;

impl LatitudinalTransformation {
    /// Jacobian columns ∂/∂r, ∂/∂lat, ∂/∂lon at a point.
    pub(crate) fn partials(radius: f64, latitude: f64, longitude: f64) -> [Vector3; 3] {
        let (sl, cl) = libm::sincos(latitude);
        let (sp, cp) = libm::sincos(longitude);
        [
            Vector3::new(cl * cp, cl * sp, sl),
            Vector3::new(-radius * sl * cp, -radius * sl * sp, radius * cl),
            Vector3::new(-radius * cl * sp, radius * cl * cp, 0.0),
        ]
    }

    /// Fails at the origin and at latitude ±π/2.
    pub(crate) fn check_latitude(name: &str, radius: f64, latitude: f64) -> CoordResult<()> {
        if radius == 0.0 {
            return Err(CoordError::point_on_axis(name, "radius is zero"));
        }
        if libm::cos(latitude).abs() <= f64::EPSILON {
            return Err(CoordError::point_on_axis(
                name,
                &format!("latitude {} is at a pole", latitude),
            ));
        }
        Ok(())
    }
}

impl Transformation for LatitudinalTransformation {
    type Matrix = Matrix3;
    type Coordinate = LatitudinalVector;

    const NAME: &'static str = "LatitudinalTransformation";

    fn get_transformation(&self, position: &LatitudinalVector) -> Matrix3 {
        let [d_radius, d_latitude, d_longitude] =
            Self::partials(position.radius, position.latitude, position.longitude);
        Matrix3::from_columns(&d_radius, &d_latitude, &d_longitude)
    }

    fn check_invertible(&self, position: &LatitudinalVector) -> CoordResult<()> {
        Self::check_latitude(Self::NAME, position.radius, position.latitude)
    }
}

impl From<Vector3> for LatitudinalVector {
    fn from(v: Vector3) -> Self {
        LatitudinalConverter.to_coordinate(&v)
    }
}

impl From<LatitudinalVector> for Vector3 {
    fn from(l: LatitudinalVector) -> Self {
        LatitudinalConverter.to_cartesian(&l)
    }
}

impl fmt::Display for LatitudinalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(radius={}, latitude={}, longitude={})",
            self.radius, self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_poles_and_equator() {
        let north = LatitudinalConverter.to_coordinate(&Vector3::new(0.0, 0.0, 4.0));
        assert_eq!(north, LatitudinalVector::new(4.0, FRAC_PI_2, 0.0));

        let south = LatitudinalConverter.to_coordinate(&Vector3::new(0.0, 0.0, -4.0));
        assert_eq!(south.latitude(), -FRAC_PI_2);

        let west = LatitudinalConverter.to_coordinate(&Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(west, LatitudinalVector::new(1.0, 0.0, PI));
    }

    #[test]
    fn test_roundtrip() {
        let v = Vector3::new(0.3, -2.0, 1.7);
        let back = Vector3::from(LatitudinalVector::from(v));
        assert_abs_diff_eq!(back, v, epsilon = 1e-14);
    }

    #[test]
    fn test_velocity_on_equator() {
        // Moving eastward at 1 rad/s on the unit equator at longitude 0 is +y.
        let position = LatitudinalVector::new(1.0, 0.0, 0.0);
        let j = LatitudinalTransformation.get_transformation(&position);
        let eastward = LatitudinalVector::new(0.0, 0.0, 1.0);
        let v = LatitudinalTransformation.mxv_to_cartesian(&j, &eastward);
        assert_abs_diff_eq!(v, Vector3::J, epsilon = 1e-15);

        let inv = LatitudinalTransformation
            .get_inverse_transformation(&position)
            .unwrap();
        let back = LatitudinalTransformation.mxv_to_coordinate(&inv, &v);
        assert_abs_diff_eq!(back.longitude(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(back.latitude(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_origin_is_singular() {
        let err = LatitudinalTransformation
            .get_inverse_transformation(&LatitudinalVector::new(0.0, 0.4, 0.2))
            .unwrap_err();
        assert!(err.is_point_on_axis());
    }

    #[test]
    fn test_poles_are_singular() {
        for z in [5.0, -5.0] {
            let pole = LatitudinalConverter.to_coordinate(&Vector3::new(0.0, 0.0, z));
            let err = LatitudinalTransformation
                .get_inverse_transformation(&pole)
                .unwrap_err();
            assert!(err.is_point_on_axis(), "latitude {}", pole.latitude());
        }
    }

    #[test]
    fn test_negative_x_axis_longitude() {
        let l = LatitudinalConverter.to_coordinate(&Vector3::I.negated());
        assert_eq!(l.longitude(), PI);
        assert_eq!(l.latitude(), 0.0);
    }
}
