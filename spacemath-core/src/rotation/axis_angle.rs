//! Axis-and-angle rotations.

use crate::constants::PI;
use crate::{MathError, MathErrorKind, MathResult, Matrix3, Quaternion, RotationMatrix3, Vector3};
use std::fmt;

/// A rotation by `angle` radians about a unit `axis`, right-hand rule.
///
/// The identity is conventionally axis `K`, angle 0.
///
/// ```
/// use spacemath_core::{AxisAndAngle, RotationMatrix3, Vector3};
/// use std::f64::consts::FRAC_PI_2;
///
/// let quarter = AxisAndAngle::new(&Vector3::new(0.0, 0.0, 5.0), FRAC_PI_2).unwrap();
/// assert_eq!(quarter.axis(), Vector3::K);
///
/// let r = RotationMatrix3::from(quarter);
/// let v = r.mxv(&Vector3::I);
/// assert!(v.i.abs() < 1e-15 && (v.j - 1.0).abs() < 1e-15);
///
/// let back = AxisAndAngle::from(r);
/// assert!((back.angle() - FRAC_PI_2).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedAxisAndAngle")
)]
pub struct AxisAndAngle {
    axis: Vector3,
    angle: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedAxisAndAngle {
    axis: Vector3,
    angle: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedAxisAndAngle> for AxisAndAngle {
    type Error = MathError;

    fn try_from(raw: UncheckedAxisAndAngle) -> MathResult<Self> {
        Self::new(&raw.axis, raw.angle)
    }
}

impl AxisAndAngle {
    pub const IDENTITY: Self = Self {
        axis: Vector3::K,
        angle: 0.0,
    };

    /// Unitizes `axis`; fails if it has zero length.
    pub fn new(axis: &Vector3, angle: f64) -> MathResult<Self> {
        let axis = axis.unitized().map_err(|_| {
            MathError::unsupported(
                "AxisAndAngle::new",
                MathErrorKind::ZeroLength,
                "rotation axis has zero length",
            )
        })?;
        Ok(Self { axis, angle })
    }

    #[inline]
    pub fn axis(&self) -> Vector3 {
        self.axis
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Axis and angle of a unit quaternion, angle in `[0, 2π)`.
    ///
    /// A quaternion with zero vector part gives [`IDENTITY`](Self::IDENTITY).
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let vector = q.vector();
        if vector.is_zero() {
            return Self::IDENTITY;
        }

        let length = vector.length();
        let axis = vector / length;
        let angle = if q.scalar() == 0.0 {
            PI
        } else {
            2.0 * libm::atan2(length, q.scalar())
        };
        Self { axis, angle }
    }

    /// Axis and angle of a rotation matrix, angle in `[0, π]`.
    pub fn from_rotation(rotation: &RotationMatrix3) -> Self {
        Self::from_quaternion(&Quaternion::from_rotation(rotation))
    }

    pub fn set_to(&mut self, rotation: &RotationMatrix3) -> &mut Self {
        *self = Self::from_rotation(rotation);
        self
    }

    pub fn to_quaternion(&self) -> Quaternion {
        let (s, c) = libm::sincos(self.angle * 0.5);
        let v = self.axis.scaled(s);
        Quaternion::from_unit_components(c, v.i, v.j, v.k)
    }

    /// The matrix whose columns are the basis vectors rotated by this rotation.
    pub fn to_rotation(&self) -> RotationMatrix3 {
        RotationMatrix3::from_matrix_unchecked(Matrix3::from_columns(
            &self.rotate(&Vector3::I),
            &self.rotate(&Vector3::J),
            &self.rotate(&Vector3::K),
        ))
    }

    pub fn rotate(&self, vector: &Vector3) -> Vector3 {
        Vector3::rotate_about_unit_axis(vector, &self.axis, self.angle)
    }
}

impl Default for AxisAndAngle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<&RotationMatrix3> for AxisAndAngle {
    fn from(rotation: &RotationMatrix3) -> Self {
        Self::from_rotation(rotation)
    }
}

impl From<RotationMatrix3> for AxisAndAngle {
    fn from(rotation: RotationMatrix3) -> Self {
        Self::from_rotation(&rotation)
    }
}

impl From<AxisAndAngle> for RotationMatrix3 {
    fn from(axis_angle: AxisAndAngle) -> Self {
        axis_angle.to_rotation()
    }
}

impl From<Quaternion> for AxisAndAngle {
    fn from(q: Quaternion) -> Self {
        Self::from_quaternion(&q)
    }
}

impl From<AxisAndAngle> for Quaternion {
    fn from(axis_angle: AxisAndAngle) -> Self {
        axis_angle.to_quaternion()
    }
}

impl fmt::Display for AxisAndAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "axis {} angle {:.16e} rad", self.axis, self.angle)
    }
}
