//! 3x3 proper rotation matrices.
//!
//! A [`RotationMatrix3`] is a [`Matrix3`] that is known to be orthonormal with
//! determinant +1 (within [`RotationTolerance`]). Its storage is private and it
//! derefs to `&Matrix3`, so every read-only matrix operation (`mxv`, `mtxv`,
//! `trace`, `determinant`, `max_difference`, ...) is available directly while
//! writes can only happen through paths that keep the invariant:
//!
//! - the checked constructors ([`from_matrix`](RotationMatrix3::from_matrix),
//!   [`from_columns`](RotationMatrix3::from_columns), ...) and
//!   [`set_to`](RotationMatrix3::set_to), which validate once at the end;
//! - compositions of rotations ([`mxm`](RotationMatrix3::mxm), the elementary
//!   [`rotate_x`](RotationMatrix3::rotate_x) family,
//!   [`transpose`](RotationMatrix3::transpose)), which skip the check because
//!   the result is a rotation by construction.
//!
//! ```
//! use spacemath_core::{Matrix3, RotationMatrix3, Vector3};
//!
//! let quarter_turn = Matrix3::from_columns(&Vector3::J, &Vector3::MINUS_I, &Vector3::K);
//! let r = RotationMatrix3::from_matrix(&quarter_turn).unwrap();
//! assert_eq!(r.mxv(&Vector3::I), Vector3::J);
//!
//! assert!(RotationMatrix3::from_matrix(&Matrix3::IDENTITY.scaled(2.0)).is_err());
//! ```
//!
//! # Elementary rotations
//!
//! [`rotate_x`](RotationMatrix3::rotate_x), [`rotate_y`](RotationMatrix3::rotate_y)
//! and [`rotate_z`](RotationMatrix3::rotate_z) follow the ERFA frame
//! convention: they rotate the coordinate frame rather than the vector, so a
//! positive quarter turn about Z takes `[1, 0, 0]` to `[0, -1, 0]`. Each call
//! premultiplies, `self = R(angle) · self`.
//!
//! ```
//! use spacemath_core::{RotationMatrix3, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let mut m = RotationMatrix3::IDENTITY;
//! m.rotate_z(FRAC_PI_2);
//!
//! let v = m.mxv(&Vector3::I);
//! assert!(v.i.abs() < 1e-15);
//! assert!((v.j + 1.0).abs() < 1e-15);
//! ```

use super::Matrix3;
use crate::{MathError, MathResult, RotationTolerance, Vector3};
use std::fmt;
use std::ops::Deref;

/// A 3x3 proper rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Matrix3", into = "Matrix3")
)]
pub struct RotationMatrix3 {
    matrix: Matrix3,
}

impl RotationMatrix3 {
    pub const IDENTITY: Self = Self {
        matrix: Matrix3::IDENTITY,
    };

    /// Validates `matrix` with the default [`RotationTolerance`].
    pub fn from_matrix(matrix: &Matrix3) -> MathResult<Self> {
        Self::from_matrix_with_tolerance(matrix, RotationTolerance::default())
    }

    pub fn from_matrix_with_tolerance(
        matrix: &Matrix3,
        tolerance: RotationTolerance,
    ) -> MathResult<Self> {
        matrix.check_rotation(tolerance).map_err(|err| {
            MathError::malformed_rotation(
                "RotationMatrix3::from_matrix",
                &format!("matrix is not a rotation: {}", err),
            )
        })?;
        Ok(Self { matrix: *matrix })
    }

    /// Wraps `matrix` without checking that it is a rotation.
    ///
    /// Intended for code that already knows the result is a rotation, such as
    /// products or transposes of rotations. A non-rotation passed here breaks
    /// every guarantee of this type, including the identity
    /// `inverse() == transpose()`.
    #[inline]
    pub fn from_matrix_unchecked(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// Components in column order, validated.
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        ii: f64,
        ji: f64,
        ki: f64,
        ij: f64,
        jj: f64,
        kj: f64,
        ik: f64,
        jk: f64,
        kk: f64,
    ) -> MathResult<Self> {
        Self::from_matrix(&Matrix3::new(ii, ji, ki, ij, jj, kj, ik, jk, kk))
    }

    /// Row-major nested arrays, validated.
    pub fn from_array(rows: [[f64; 3]; 3]) -> MathResult<Self> {
        Self::from_matrix(&Matrix3::from_array(rows))
    }

    pub fn from_columns(ith: &Vector3, jth: &Vector3, kth: &Vector3) -> MathResult<Self> {
        Self::from_matrix(&Matrix3::from_columns(ith, jth, kth))
    }

    pub fn from_scaled_columns(
        scale_i: f64,
        ith: &Vector3,
        scale_j: f64,
        jth: &Vector3,
        scale_k: f64,
        kth: &Vector3,
    ) -> MathResult<Self> {
        Self::from_matrix(&Matrix3::from_scaled_columns(
            scale_i, ith, scale_j, jth, scale_k, kth,
        ))
    }

    /// Replaces the contents with `matrix` if it is a rotation; on failure
    /// `self` is left unchanged.
    pub fn set_to(&mut self, matrix: &Matrix3) -> MathResult<&mut Self> {
        *self = Self::from_matrix(matrix)?;
        Ok(self)
    }

    #[inline]
    pub fn as_matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Transpose, which is also the inverse.
    pub fn transpose(&self) -> Self {
        Self::from_matrix_unchecked(self.matrix.transpose())
    }

    pub fn transpose_mut(&mut self) -> &mut Self {
        self.matrix.transpose_mut();
        self
    }

    #[inline]
    pub fn inverse(&self) -> Self {
        self.transpose()
    }

    pub fn mxm(a: &Self, b: &Self) -> Self {
        Self::from_matrix_unchecked(Matrix3::mxm(&a.matrix, &b.matrix))
    }

    pub fn mxm_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::mxm(a, b);
        buffer
    }

    pub fn mtxm(a: &Self, b: &Self) -> Self {
        Self::from_matrix_unchecked(Matrix3::mtxm(&a.matrix, &b.matrix))
    }

    pub fn mtxm_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::mtxm(a, b);
        buffer
    }

    pub fn mxmt(a: &Self, b: &Self) -> Self {
        Self::from_matrix_unchecked(Matrix3::mxmt(&a.matrix, &b.matrix))
    }

    pub fn mxmt_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::mxmt(a, b);
        buffer
    }

    /// Premultiplies by a frame rotation of `phi` radians about X:
    ///
    /// ```text
    /// Rx(phi) = | 1    0         0       |
    ///           | 0    cos(phi)  sin(phi)|
    ///           | 0   -sin(phi)  cos(phi)|
    /// ```
    pub fn rotate_x(&mut self, phi: f64) -> &mut Self {
        let (s, c) = libm::sincos(phi);
        let m = &mut self.matrix;

        let (a10, a11, a12) = (c * m.ji + s * m.ki, c * m.jj + s * m.kj, c * m.jk + s * m.kk);
        let (a20, a21, a22) = (
            -s * m.ji + c * m.ki,
            -s * m.jj + c * m.kj,
            -s * m.jk + c * m.kk,
        );

        (m.ji, m.jj, m.jk) = (a10, a11, a12);
        (m.ki, m.kj, m.kk) = (a20, a21, a22);
        self
    }

    /// Premultiplies by a frame rotation of `theta` radians about Y:
    ///
    /// ```text
    /// Ry(theta) = | cos(theta)  0  -sin(theta) |
    ///             |     0       1       0      |
    ///             | sin(theta)  0   cos(theta) |
    /// ```
    pub fn rotate_y(&mut self, theta: f64) -> &mut Self {
        let (s, c) = libm::sincos(theta);
        let m = &mut self.matrix;

        let (a00, a01, a02) = (c * m.ii - s * m.ki, c * m.ij - s * m.kj, c * m.ik - s * m.kk);
        let (a20, a21, a22) = (s * m.ii + c * m.ki, s * m.ij + c * m.kj, s * m.ik + c * m.kk);

        (m.ii, m.ij, m.ik) = (a00, a01, a02);
        (m.ki, m.kj, m.kk) = (a20, a21, a22);
        self
    }

    /// Premultiplies by a frame rotation of `psi` radians about Z:
    ///
    /// ```text
    /// Rz(psi) = | cos(psi)  sin(psi)  0 |
    ///           |-sin(psi)  cos(psi)  0 |
    ///           |    0         0      1 |
    /// ```
    pub fn rotate_z(&mut self, psi: f64) -> &mut Self {
        let (s, c) = libm::sincos(psi);
        let m = &mut self.matrix;

        let (a00, a01, a02) = (c * m.ii + s * m.ji, c * m.ij + s * m.jj, c * m.ik + s * m.jk);
        let (a10, a11, a12) = (
            -s * m.ii + c * m.ji,
            -s * m.ij + c * m.jj,
            -s * m.ik + c * m.jk,
        );

        (m.ii, m.ij, m.ik) = (a00, a01, a02);
        (m.ji, m.jj, m.jk) = (a10, a11, a12);
        self
    }

    /// Restores exact orthonormality after accumulated round-off.
    ///
    /// The ith column is unitized, the kth column is rebuilt as the unit
    /// `i × j`, and the jth column as `k × i`.
    pub fn sharpen(&mut self) -> MathResult<&mut Self> {
        let ith = self.matrix.ith_column().unitized()?;
        let kth = ith.ucross(&self.matrix.jth_column())?;
        let jth = kth.cross(&ith);
        self.matrix = Matrix3::from_columns(&ith, &jth, &kth);
        Ok(self)
    }

    pub fn sharpened(&self) -> MathResult<Self> {
        let mut result = *self;
        result.sharpen()?;
        Ok(result)
    }
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Deref for RotationMatrix3 {
    type Target = Matrix3;

    fn deref(&self) -> &Matrix3 {
        &self.matrix
    }
}

impl AsRef<Matrix3> for RotationMatrix3 {
    fn as_ref(&self) -> &Matrix3 {
        &self.matrix
    }
}

impl TryFrom<Matrix3> for RotationMatrix3 {
    type Error = MathError;

    fn try_from(matrix: Matrix3) -> MathResult<Self> {
        Self::from_matrix(&matrix)
    }
}

impl From<RotationMatrix3> for Matrix3 {
    fn from(rotation: RotationMatrix3) -> Self {
        rotation.matrix
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::mxm(&self, &rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        RotationMatrix3::mxm(&self, rhs)
    }
}

impl std::ops::Mul<RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: RotationMatrix3) -> RotationMatrix3 {
        RotationMatrix3::mxm(self, &rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        RotationMatrix3::mxm(self, rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.matrix.mxv(&vec)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.matrix.mxv(&vec)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.matrix.to_array() {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;
    use crate::MathErrorKind;

    #[test]
    fn test_rotate_z() {
        // Rz(+psi) turns the frame anticlockwise seen from +z, so [1,0,0] -> [0, -1, 0]
        let mut m = RotationMatrix3::IDENTITY;
        m.rotate_z(HALF_PI);
        let result = m.mxv(&Vector3::I);
        assert!(result.i.abs() < 1e-15);
        assert!((result.j + 1.0).abs() < 1e-15);
        assert!(result.k.abs() < 1e-15);
    }

    #[test]
    fn test_rotate_x() {
        let mut m = RotationMatrix3::IDENTITY;
        m.rotate_x(HALF_PI);
        let result = m.mxv(&Vector3::J);
        assert!(result.i.abs() < 1e-15);
        assert!(result.j.abs() < 1e-15);
        assert!((result.k + 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_rotate_y() {
        let mut m = RotationMatrix3::IDENTITY;
        m.rotate_y(HALF_PI);
        let result = m.mxv(&Vector3::K);
        assert!((result.i + 1.0).abs() < 1e-15);
        assert!(result.j.abs() < 1e-15);
        assert!(result.k.abs() < 1e-15);
    }

    #[test]
    fn test_rotation_chain_stays_valid() {
        let mut m = RotationMatrix3::IDENTITY;
        m.rotate_z(0.5).rotate_x(0.3).rotate_y(-1.2);
        assert!(m.is_rotation_with_tolerance(RotationTolerance::new(1e-14, 1e-14)));

        let product = m * m.transpose();
        assert!(product.max_difference(&Matrix3::IDENTITY) < 1e-14);
        assert_eq!(m.inverse(), m.transpose());
    }

    #[test]
    fn test_from_matrix_rejects_scaling() {
        let scaled = Matrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let err = RotationMatrix3::from_matrix(&scaled).unwrap_err();
        assert!(matches!(err, MathError::MalformedRotation { .. }));
        assert!(err.to_string().contains("ith column"));
    }

    #[test]
    fn test_from_matrix_rejects_reflection() {
        let reflection = Matrix3::IDENTITY.negated();
        assert!(RotationMatrix3::from_matrix(&reflection).is_err());
        assert!(RotationMatrix3::try_from(reflection).is_err());
    }

    #[test]
    fn test_from_matrix_rejects_shear() {
        let shear = Matrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(RotationMatrix3::from_matrix(&shear).is_err());

        let loose = RotationTolerance::new(0.01, 0.01);
        assert!(RotationMatrix3::from_matrix_with_tolerance(&shear, loose).is_ok());
    }

    #[test]
    fn test_checked_constructors() {
        let from_columns =
            RotationMatrix3::from_columns(&Vector3::J, &Vector3::MINUS_I, &Vector3::K).unwrap();
        let from_components =
            RotationMatrix3::from_components(0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0)
                .unwrap();
        let from_array =
            RotationMatrix3::from_array([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]])
                .unwrap();
        assert_eq!(from_columns, from_components);
        assert_eq!(from_columns, from_array);

        let scaled = RotationMatrix3::from_scaled_columns(
            0.5,
            &Vector3::new(0.0, 2.0, 0.0),
            1.0,
            &Vector3::MINUS_I,
            -1.0,
            &Vector3::MINUS_K,
        )
        .unwrap();
        assert_eq!(scaled, from_columns);
    }

    #[test]
    fn test_set_to_keeps_value_on_failure() {
        let mut r = RotationMatrix3::IDENTITY;
        assert!(r.set_to(&Matrix3::ZERO).is_err());
        assert_eq!(r, RotationMatrix3::IDENTITY);

        let mut target = RotationMatrix3::IDENTITY;
        target.rotate_x(0.25);
        r.set_to(target.as_matrix()).unwrap();
        assert_eq!(r, target);
    }

    #[test]
    fn test_sharpen() {
        let mut exact = RotationMatrix3::IDENTITY;
        exact.rotate_z(0.7).rotate_y(0.2);

        let drifted = exact.as_matrix().scaled(1.00001);
        let mut r = RotationMatrix3::from_matrix(&drifted).unwrap();
        r.sharpen().unwrap();
        assert!(r.max_difference(&exact) < 1e-14);
        assert!(r.is_rotation_with_tolerance(RotationTolerance::new(1e-14, 1e-14)));

        let degenerate = RotationMatrix3::from_matrix_unchecked(Matrix3::ZERO);
        let err = degenerate.sharpened().unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::ZeroLength));
    }

    #[test]
    fn test_mul_matrix_matrix() {
        let mut a = RotationMatrix3::IDENTITY;
        a.rotate_x(0.1);
        let mut b = RotationMatrix3::IDENTITY;
        b.rotate_y(0.2);

        let r1 = a * b;
        let r2 = a * &b;
        let r3 = &a * b;
        let r4 = &a * &b;

        assert_eq!(r1, r2);
        assert_eq!(r2, r3);
        assert_eq!(r3, r4);
        assert_eq!(r1, RotationMatrix3::mxm(&a, &b));
        assert_eq!(
            RotationMatrix3::mtxm(&a, &b),
            RotationMatrix3::mxm(&a.transpose(), &b)
        );
    }

    #[test]
    fn test_mul_matrix_vector() {
        let m = RotationMatrix3::IDENTITY;
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(m * v, v);
        assert_eq!(&m * v, v);
    }

    #[test]
    fn test_display() {
        let mut m = RotationMatrix3::IDENTITY;
        m.rotate_z(0.1);
        let s = format!("{}", m);
        assert!(s.contains("RotationMatrix3:"));
        assert!(s.contains('['));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let mut m = RotationMatrix3::IDENTITY;
        m.rotate_z(0.4);
        let json = serde_json::to_string(&m).unwrap();
        let back: RotationMatrix3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let bad = serde_json::to_string(&Matrix3::IDENTITY.scaled(3.0)).unwrap();
        assert!(serde_json::from_str::<RotationMatrix3>(&bad).is_err());
    }
}
