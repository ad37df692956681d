//! Unit quaternions.
//!
//! A [`Quaternion`] `(q0, q1, q2, q3)` with scalar part `q0` and vector part
//! `(q1, q2, q3)` represents the rotation by `θ` about the unit axis `a` as
//! `(cos θ/2, sin θ/2 · a)`. The rotation is active: it turns vectors, and
//! converting to a matrix gives the matrix that turns vectors the same way.
//!
//! Components are private and always normalized. Conversion from a rotation
//! matrix picks the representative with a non-negative scalar part.
//!
//! ```
//! use spacemath_core::{Quaternion, RotationMatrix3, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let half = FRAC_PI_2 / 2.0;
//! let q = Quaternion::new(half.cos(), 0.0, 0.0, half.sin()).unwrap();
//!
//! let v = q.rotate(&Vector3::I);
//! assert!(v.i.abs() < 1e-15);
//! assert!((v.j - 1.0).abs() < 1e-15);
//!
//! let r = RotationMatrix3::from(q);
//! let back = Quaternion::from(r);
//! assert!((back.scalar() - q.scalar()).abs() < 1e-15);
//! ```

use crate::math::abs_max2;
use crate::{MathError, MathErrorKind, MathResult, Matrix3, RotationMatrix3, Vector3};
use std::fmt;

#[inline]
fn norm4(q0: f64, q1: f64, q2: f64, q3: f64) -> f64 {
    let max = abs_max2(abs_max2(q0, q1), abs_max2(q2, q3));
    if max == 0.0 {
        return 0.0;
    }
    let (q0, q1, q2, q3) = (q0 / max, q1 / max, q2 / max, q3 / max);
    max * libm::sqrt(q0 * q0 + q1 * q1 + q2 * q2 + q3 * q3)
}

/// A unit quaternion representing a rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 4]", into = "[f64; 4]")
)]
pub struct Quaternion {
    q0: f64,
    q1: f64,
    q2: f64,
    q3: f64,
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        q0: 1.0,
        q1: 0.0,
        q2: 0.0,
        q3: 0.0,
    };

    /// Normalizes `(q0, q1, q2, q3)`; fails if every component is zero.
    pub fn new(q0: f64, q1: f64, q2: f64, q3: f64) -> MathResult<Self> {
        let length = norm4(q0, q1, q2, q3);
        if length == 0.0 {
            return Err(MathError::unsupported(
                "Quaternion::new",
                MathErrorKind::ZeroLength,
                "unable to normalize the zero quaternion",
            ));
        }
        if !length.is_finite() {
            return Err(MathError::invalid_argument(
                "Quaternion::new",
                &format!("components must be finite, got ({}, {}, {}, {})", q0, q1, q2, q3),
            ));
        }
        Ok(Self::from_unit_components(
            q0 / length,
            q1 / length,
            q2 / length,
            q3 / length,
        ))
    }

    pub fn from_scalar_vector(scalar: f64, vector: &Vector3) -> MathResult<Self> {
        Self::new(scalar, vector.i, vector.j, vector.k)
    }

    // Caller guarantees unit length.
    #[inline]
    pub(crate) fn from_unit_components(q0: f64, q1: f64, q2: f64, q3: f64) -> Self {
        Self { q0, q1, q2, q3 }
    }

    #[inline]
    pub fn scalar(&self) -> f64 {
        self.q0
    }

    #[inline]
    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.q1, self.q2, self.q3)
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.q0, self.q1, self.q2, self.q3]
    }

    /// The inverse rotation.
    pub fn conjugate(&self) -> Self {
        Self::from_unit_components(self.q0, -self.q1, -self.q2, -self.q3)
    }

    fn renormalized(self) -> Self {
        let length = norm4(self.q0, self.q1, self.q2, self.q3);
        if length == 0.0 || length == 1.0 {
            return self;
        }
        Self::from_unit_components(
            self.q0 / length,
            self.q1 / length,
            self.q2 / length,
            self.q3 / length,
        )
    }

    /// Hamilton product `a · b`, renormalized.
    ///
    /// The product represents applying `b` first, then `a`.
    pub fn multiply(a: &Self, b: &Self) -> Self {
        let av = a.vector();
        let bv = b.vector();

        let scalar = a.q0 * b.q0 - av.dot(&bv);
        let vector = Vector3::combine3(a.q0, &bv, b.q0, &av, 1.0, &av.cross(&bv));

        Self::from_unit_components(scalar, vector.i, vector.j, vector.k).renormalized()
    }

    pub fn multiply_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::multiply(a, b);
        buffer
    }

    /// Rotates `vector` by this quaternion.
    pub fn rotate(&self, vector: &Vector3) -> Vector3 {
        self.to_rotation().mxv(vector)
    }

    /// Quaternion of a rotation matrix.
    ///
    /// Of `1 + trace` and `1 - trace + 2·R_ii` for each diagonal entry, the
    /// first one reaching 1 (in that order) supplies the component computed by
    /// square root; the remaining three come from sums and differences of the
    /// off-diagonal terms divided by it.
    pub fn from_rotation(rotation: &RotationMatrix3) -> Self {
        let m: &Matrix3 = rotation;

        let trace = m.ii + m.jj + m.kk;
        let mtrace = 1.0 - trace;
        let cc4 = 1.0 + trace;
        let s114 = mtrace + 2.0 * m.ii;
        let s224 = mtrace + 2.0 * m.jj;
        let s334 = mtrace + 2.0 * m.kk;

        let (c, s1, s2, s3);
        if 1.0 <= cc4 {
            log::trace!("Quaternion::from_rotation: scalar branch");
            c = libm::sqrt(cc4 * 0.25);
            let factor = 1.0 / (c * 4.0);
            s1 = (m.kj - m.jk) * factor;
            s2 = (m.ik - m.ki) * factor;
            s3 = (m.ji - m.ij) * factor;
        } else if 1.0 <= s114 {
            log::trace!("Quaternion::from_rotation: first vector branch");
            s1 = libm::sqrt(s114 * 0.25);
            let factor = 1.0 / (s1 * 4.0);
            c = (m.kj - m.jk) * factor;
            s2 = (m.ij + m.ji) * factor;
            s3 = (m.ik + m.ki) * factor;
        } else if 1.0 <= s224 {
            log::trace!("Quaternion::from_rotation: second vector branch");
            s2 = libm::sqrt(s224 * 0.25);
            let factor = 1.0 / (s2 * 4.0);
            c = (m.ik - m.ki) * factor;
            s1 = (m.ij + m.ji) * factor;
            s3 = (m.jk + m.kj) * factor;
        } else {
            log::trace!("Quaternion::from_rotation: third vector branch");
            s3 = libm::sqrt(s334 * 0.25);
            let factor = 1.0 / (s3 * 4.0);
            c = (m.ji - m.ij) * factor;
            s1 = (m.ik + m.ki) * factor;
            s2 = (m.jk + m.kj) * factor;
        }

        let q = Self::from_unit_components(c, s1, s2, s3).renormalized();
        if q.q0 < 0.0 {
            Self::from_unit_components(-q.q0, -q.q1, -q.q2, -q.q3)
        } else {
            q
        }
    }

    /// Replaces the contents with the quaternion of `rotation`.
    pub fn set_to(&mut self, rotation: &RotationMatrix3) -> &mut Self {
        *self = Self::from_rotation(rotation);
        self
    }

    /// Rotation matrix of this quaternion.
    pub fn to_rotation(&self) -> RotationMatrix3 {
        let (q0, q1, q2, q3) = (self.q0, self.q1, self.q2, self.q3);

        let l2 = q0 * q0 + q1 * q1 + q2 * q2 + q3 * q3;
        let sharpen = if l2 != 0.0 && l2 != 1.0 { 1.0 / l2 } else { 1.0 };
        let two = 2.0 * sharpen;

        let (q01, q02, q03) = (q0 * q1, q0 * q2, q0 * q3);
        let (q12, q13, q23) = (q1 * q2, q1 * q3, q2 * q3);
        let (q11, q22, q33) = (q1 * q1, q2 * q2, q3 * q3);

        RotationMatrix3::from_matrix_unchecked(Matrix3::new(
            1.0 - two * (q22 + q33),
            two * (q12 + q03),
            two * (q13 - q02),
            two * (q12 - q03),
            1.0 - two * (q11 + q33),
            two * (q23 + q01),
            two * (q13 + q02),
            two * (q23 - q01),
            1.0 - two * (q11 + q22),
        ))
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<&RotationMatrix3> for Quaternion {
    fn from(rotation: &RotationMatrix3) -> Self {
        Self::from_rotation(rotation)
    }
}

impl From<RotationMatrix3> for Quaternion {
    fn from(rotation: RotationMatrix3) -> Self {
        Self::from_rotation(&rotation)
    }
}

impl From<Quaternion> for RotationMatrix3 {
    fn from(q: Quaternion) -> Self {
        q.to_rotation()
    }
}

impl From<&Quaternion> for RotationMatrix3 {
    fn from(q: &Quaternion) -> Self {
        q.to_rotation()
    }
}

impl TryFrom<[f64; 4]> for Quaternion {
    type Error = MathError;

    fn try_from(arr: [f64; 4]) -> MathResult<Self> {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::multiply(&self, &rhs)
    }
}

impl std::ops::Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.rotate(&vec)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.16e}, {:.16e}, {:.16e}, {:.16e}]",
            self.q0, self.q1, self.q2, self.q3
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn about(axis: &Vector3, angle: f64) -> Quaternion {
        let (s, c) = libm::sincos(angle / 2.0);
        Quaternion::from_scalar_vector(c, &axis.unitized().unwrap().scaled(s)).unwrap()
    }

    #[test]
    fn test_new_normalizes() {
        let q = Quaternion::new(2.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(q, Quaternion::IDENTITY);

        let q = Quaternion::new(1.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(q.to_array(), [0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_zero_quaternion_rejected() {
        let err = Quaternion::new(0.0, 0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::ZeroLength));
        assert!(Quaternion::new(f64::NAN, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_identity_matrix() {
        assert_eq!(Quaternion::IDENTITY.to_rotation(), RotationMatrix3::IDENTITY);
        assert_eq!(Quaternion::from_rotation(&RotationMatrix3::IDENTITY), Quaternion::IDENTITY);
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let q = about(&Vector3::K, FRAC_PI_2);
        let r = q.to_rotation();
        assert_abs_diff_eq!(r.mxv(&Vector3::I), Vector3::J, epsilon = 1e-15);
        assert_abs_diff_eq!(q * Vector3::J, Vector3::MINUS_I, epsilon = 1e-15);
    }

    #[test]
    fn test_from_rotation_each_branch() {
        // Small angle takes the scalar branch; half turns about each axis take
        // the vector branches in turn.
        let cases = [
            (Vector3::new(1.0, 2.0, 3.0), 0.4),
            (Vector3::new(1.0, 0.1, -0.1), PI),
            (Vector3::new(0.1, 1.0, 0.2), PI),
            (Vector3::new(-0.1, 0.2, 1.0), PI),
        ];
        for (axis, angle) in cases {
            let q = about(&axis, angle);
            let back = Quaternion::from_rotation(&q.to_rotation());
            assert!(back.scalar() >= 0.0);
            let same = (0..4).all(|n| (back.to_array()[n] - q.to_array()[n]).abs() < 1e-14);
            let negated = (0..4).all(|n| (back.to_array()[n] + q.to_array()[n]).abs() < 1e-14);
            assert!(same || negated, "axis {} angle {}", axis, angle);
        }
    }

    #[test]
    fn test_sign_flip_to_positive_scalar() {
        let q = about(&Vector3::new(0.3, -0.2, 0.9), 5.0);
        assert!(q.scalar() < 0.0);
        let back = Quaternion::from_rotation(&q.to_rotation());
        assert!(back.scalar() > 0.0);
        assert_abs_diff_eq!(back.vector(), q.vector().negated(), epsilon = 1e-14);
    }

    #[test]
    fn test_multiply_composes_rotations() {
        let a = about(&Vector3::new(1.0, -1.0, 0.5), 0.7);
        let b = about(&Vector3::new(0.0, 2.0, 1.0), -1.3);

        let product = Quaternion::multiply(&a, &b).to_rotation();
        let expected = a.to_rotation() * b.to_rotation();
        assert!(product.max_difference(&expected) < 1e-14);

        let mut buffer = Quaternion::IDENTITY;
        Quaternion::multiply_into(&a, &b, &mut buffer);
        assert_eq!(buffer, a * b);
    }

    #[test]
    fn test_conjugate_inverts() {
        let q = about(&Vector3::new(2.0, 1.0, -3.0), 1.1);
        let product = q * q.conjugate();
        assert_abs_diff_eq!(product.scalar(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(product.vector(), Vector3::ZERO, epsilon = 1e-15);
    }

    #[test]
    fn test_set_to() {
        let mut rotation = RotationMatrix3::IDENTITY;
        rotation.rotate_x(0.2);
        let mut q = Quaternion::IDENTITY;
        q.set_to(&rotation);
        assert!(q.to_rotation().max_difference(&rotation) < 1e-14);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_array() {
        let q = about(&Vector3::J, 0.5);
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.starts_with('['));
        let back: Quaternion = serde_json::from_str(&json).unwrap();
        assert_abs_diff_eq!(back, q, epsilon = 1e-15);

        assert!(serde_json::from_str::<Quaternion>("[0.0, 0.0, 0.0, 0.0]").is_err());
    }
}
