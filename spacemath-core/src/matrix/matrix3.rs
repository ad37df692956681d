//! General 3x3 matrices.
//!
//! Components are named by the basis vectors they connect: `ij` is the `i`
//! component of the `j`th column, so the first index is the row and the second
//! the column. The struct fields and [`Matrix3::new`] list the components in
//! column order (`ii, ji, ki, ij, ...`), while [`Matrix3::from_array`] takes
//! row-major nested arrays, the way matrices are usually written down:
//!
//! ```
//! use spacemath_core::{Matrix3, Vector3};
//!
//! let m = Matrix3::from_array([
//!     [1.0, 2.0, 3.0],
//!     [4.0, 5.0, 6.0],
//!     [7.0, 8.0, 10.0],
//! ]);
//! assert_eq!(m.ij, 2.0);
//! assert_eq!(m.ji, 4.0);
//! assert_eq!(m.jth_column(), Vector3::new(2.0, 5.0, 8.0));
//! ```
//!
//! # Products and buffers
//!
//! The product family (`mxm`, `mtxm`, `mxmt` and the `*add` sums of two
//! products) are associated functions. Each has a value-returning form and an
//! `_into` form writing into a caller supplied buffer. In-place variants on
//! `&mut self` ([`transpose_mut`](Matrix3::transpose_mut),
//! [`invert`](Matrix3::invert), [`invort`](Matrix3::invort)) cover the case
//! where the output overwrites an operand.
//!
//! # Inversion
//!
//! [`inverse`](Matrix3::inverse) is a general cofactor inversion and refuses
//! matrices whose determinant falls below
//! [`INVERSION_TOLERANCE`](crate::constants::INVERSION_TOLERANCE).
//! [`invorted`](Matrix3::invorted) assumes orthogonal columns and only
//! transposes and rescales, which is both cheaper and more accurate for
//! rotations and Jacobians of orthogonal coordinate systems.

use crate::constants::{INVERSION_TOLERANCE, INVORT_BOUND};
use crate::math::{check_rotation3, compute_determinant3};
use crate::{MathError, MathErrorKind, MathResult, RotationTolerance, Vector3};
use std::fmt;

const COLUMN_NAMES: [&str; 3] = ["ith", "jth", "kth"];

/// A general 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3 {
    pub ii: f64,
    pub ji: f64,
    pub ki: f64,
    pub ij: f64,
    pub jj: f64,
    pub kj: f64,
    pub ik: f64,
    pub jk: f64,
    pub kk: f64,
}

impl Matrix3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    pub const ONES: Self = Self::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0);

    /// Builds a matrix from its components in column order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        ii: f64,
        ji: f64,
        ki: f64,
        ij: f64,
        jj: f64,
        kj: f64,
        ik: f64,
        jk: f64,
        kk: f64,
    ) -> Self {
        Self {
            ii,
            ji,
            ki,
            ij,
            jj,
            kj,
            ik,
            jk,
            kk,
        }
    }

    /// Builds a matrix from row-major nested arrays: `rows[r][c]`.
    pub fn from_array(rows: [[f64; 3]; 3]) -> Self {
        Self::new(
            rows[0][0], rows[1][0], rows[2][0], rows[0][1], rows[1][1], rows[2][1], rows[0][2],
            rows[1][2], rows[2][2],
        )
    }

    /// Row-major nested arrays, the inverse of [`from_array`](Self::from_array).
    pub fn to_array(&self) -> [[f64; 3]; 3] {
        [
            [self.ii, self.ij, self.ik],
            [self.ji, self.jj, self.jk],
            [self.ki, self.kj, self.kk],
        ]
    }

    pub fn from_columns(ith: &Vector3, jth: &Vector3, kth: &Vector3) -> Self {
        Self::new(
            ith.i, ith.j, ith.k, jth.i, jth.j, jth.k, kth.i, kth.j, kth.k,
        )
    }

    pub fn from_scaled_columns(
        scale_i: f64,
        ith: &Vector3,
        scale_j: f64,
        jth: &Vector3,
        scale_k: f64,
        kth: &Vector3,
    ) -> Self {
        Self::from_columns(
            &ith.scaled(scale_i),
            &jth.scaled(scale_j),
            &kth.scaled(scale_k),
        )
    }

    #[inline]
    pub fn ith_column(&self) -> Vector3 {
        Vector3::new(self.ii, self.ji, self.ki)
    }

    #[inline]
    pub fn jth_column(&self) -> Vector3 {
        Vector3::new(self.ij, self.jj, self.kj)
    }

    #[inline]
    pub fn kth_column(&self) -> Vector3 {
        Vector3::new(self.ik, self.jk, self.kk)
    }

    pub fn column(&self, index: usize) -> MathResult<Vector3> {
        match index {
            0 => Ok(self.ith_column()),
            1 => Ok(self.jth_column()),
            2 => Ok(self.kth_column()),
            _ => Err(MathError::invalid_argument(
                "Matrix3::column",
                &format!("column {} out of bounds (valid range: 0-2)", index),
            )),
        }
    }

    pub fn set_column(&mut self, index: usize, column: &Vector3) -> MathResult<&mut Self> {
        match index {
            0 => (self.ii, self.ji, self.ki) = (column.i, column.j, column.k),
            1 => (self.ij, self.jj, self.kj) = (column.i, column.j, column.k),
            2 => (self.ik, self.jk, self.kk) = (column.i, column.j, column.k),
            _ => {
                return Err(MathError::invalid_argument(
                    "Matrix3::set_column",
                    &format!("column {} out of bounds (valid range: 0-2)", index),
                ))
            }
        }
        Ok(self)
    }

    fn component_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        match (row, col) {
            (0, 0) => Some(&mut self.ii),
            (1, 0) => Some(&mut self.ji),
            (2, 0) => Some(&mut self.ki),
            (0, 1) => Some(&mut self.ij),
            (1, 1) => Some(&mut self.jj),
            (2, 1) => Some(&mut self.kj),
            (0, 2) => Some(&mut self.ik),
            (1, 2) => Some(&mut self.jk),
            (2, 2) => Some(&mut self.kk),
            _ => None,
        }
    }

    fn component(&self, row: usize, col: usize) -> Option<&f64> {
        match (row, col) {
            (0, 0) => Some(&self.ii),
            (1, 0) => Some(&self.ji),
            (2, 0) => Some(&self.ki),
            (0, 1) => Some(&self.ij),
            (1, 1) => Some(&self.jj),
            (2, 1) => Some(&self.kj),
            (0, 2) => Some(&self.ik),
            (1, 2) => Some(&self.jk),
            (2, 2) => Some(&self.kk),
            _ => None,
        }
    }

    /// Element at `row`, `col` (0-based).
    pub fn get(&self, row: usize, col: usize) -> MathResult<f64> {
        self.component(row, col).copied().ok_or_else(|| {
            MathError::invalid_argument(
                "Matrix3::get",
                &format!("index ({}, {}) out of bounds (valid range: 0-2)", row, col),
            )
        })
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> MathResult<()> {
        match self.component_mut(row, col) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MathError::invalid_argument(
                "Matrix3::set",
                &format!("index ({}, {}) out of bounds (valid range: 0-2)", row, col),
            )),
        }
    }

    pub fn set_to(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }

    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(
            self.ii * scale,
            self.ji * scale,
            self.ki * scale,
            self.ij * scale,
            self.jj * scale,
            self.kj * scale,
            self.ik * scale,
            self.jk * scale,
            self.kk * scale,
        )
    }

    pub fn scale(&mut self, scale: f64) -> &mut Self {
        *self = self.scaled(scale);
        self
    }

    pub fn negated(&self) -> Self {
        self.scaled(-1.0)
    }

    pub fn negate(&mut self) -> &mut Self {
        self.scale(-1.0)
    }

    /// Determinant, computed on a copy scaled by the largest component.
    pub fn determinant(&self) -> f64 {
        compute_determinant3(
            self.ii, self.ji, self.ki, self.ij, self.jj, self.kj, self.ik, self.jk, self.kk,
        )
    }

    pub fn trace(&self) -> f64 {
        self.ii + self.jj + self.kk
    }

    /// Exact symmetry check: `ij == ji`, `ik == ki` and `jk == kj`.
    pub fn is_symmetric(&self) -> bool {
        self.ij == self.ji && self.ik == self.ki && self.jk == self.kj
    }

    /// Checks for a proper rotation with the default [`RotationTolerance`].
    ///
    /// ```
    /// use spacemath_core::Matrix3;
    ///
    /// assert!(Matrix3::IDENTITY.is_rotation());
    /// assert!(!Matrix3::IDENTITY.scaled(2.0).is_rotation());
    /// assert!(!Matrix3::IDENTITY.negated().is_rotation());
    /// ```
    pub fn is_rotation(&self) -> bool {
        self.is_rotation_with_tolerance(RotationTolerance::default())
    }

    pub fn is_rotation_with_tolerance(&self, tolerance: RotationTolerance) -> bool {
        self.check_rotation(tolerance).is_ok()
    }

    pub(crate) fn check_rotation(&self, tolerance: RotationTolerance) -> MathResult<()> {
        check_rotation3(
            self.ii,
            self.ji,
            self.ki,
            self.ij,
            self.jj,
            self.kj,
            self.ik,
            self.jk,
            self.kk,
            tolerance.norm,
            tolerance.determinant,
        )
    }

    pub fn transpose(&self) -> Self {
        Self::new(
            self.ii, self.ij, self.ik, self.ji, self.jj, self.jk, self.ki, self.kj, self.kk,
        )
    }

    pub fn transpose_mut(&mut self) -> &mut Self {
        std::mem::swap(&mut self.ij, &mut self.ji);
        std::mem::swap(&mut self.ik, &mut self.ki);
        std::mem::swap(&mut self.jk, &mut self.kj);
        self
    }

    /// General inverse with [`INVERSION_TOLERANCE`].
    ///
    /// ```
    /// use spacemath_core::Matrix3;
    ///
    /// let m = Matrix3::from_array([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 4.0, 0.0],
    ///     [0.0, 0.0, 8.0],
    /// ]);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.kk, 0.125);
    /// assert!(Matrix3::ZERO.inverse().is_err());
    /// ```
    pub fn inverse(&self) -> MathResult<Self> {
        self.inverse_with_tolerance(INVERSION_TOLERANCE)
    }

    /// General cofactor inverse; fails with [`MathErrorKind::Singular`] when
    /// `|det| < tolerance`.
    pub fn inverse_with_tolerance(&self, tolerance: f64) -> MathResult<Self> {
        let det = self.determinant();
        if det.is_nan() || det.abs() < tolerance {
            return Err(MathError::unsupported(
                "Matrix3::invert",
                MathErrorKind::Singular,
                &format!(
                    "determinant {} is below the inversion tolerance {}",
                    det, tolerance
                ),
            ));
        }

        Ok(Self::new(
            (self.jj * self.kk - self.jk * self.kj) / det,
            (self.jk * self.ki - self.ji * self.kk) / det,
            (self.ji * self.kj - self.jj * self.ki) / det,
            (self.ik * self.kj - self.ij * self.kk) / det,
            (self.ii * self.kk - self.ik * self.ki) / det,
            (self.ij * self.ki - self.ii * self.kj) / det,
            (self.ij * self.jk - self.ik * self.jj) / det,
            (self.ik * self.ji - self.ii * self.jk) / det,
            (self.ii * self.jj - self.ij * self.ji) / det,
        ))
    }

    pub fn invert(&mut self) -> MathResult<&mut Self> {
        self.invert_with_tolerance(INVERSION_TOLERANCE)
    }

    pub fn invert_with_tolerance(&mut self, tolerance: f64) -> MathResult<&mut Self> {
        *self = self.inverse_with_tolerance(tolerance)?;
        Ok(self)
    }

    /// Inverse of a matrix with orthogonal columns.
    ///
    /// Each column is divided by the square of its length and the result is
    /// transposed. The columns are not checked for orthogonality; the result
    /// is only an inverse when they are.
    pub fn invorted(&self) -> MathResult<Self> {
        let mut result = *self;
        result.invort()?;
        Ok(result)
    }

    pub fn invort(&mut self) -> MathResult<&mut Self> {
        let mut columns = [self.ith_column(), self.jth_column(), self.kth_column()];

        for (column, name) in columns.iter_mut().zip(COLUMN_NAMES) {
            let length = column.length();
            if length == 0.0 {
                return Err(MathError::unsupported(
                    "Matrix3::invort",
                    MathErrorKind::ZeroLength,
                    &format!("{} column has zero length", name),
                ));
            }
            if length < 1.0 / INVORT_BOUND {
                return Err(MathError::unsupported(
                    "Matrix3::invort",
                    MathErrorKind::Underflow,
                    &format!(
                        "{} column length {} is too small to invert",
                        name, length
                    ),
                ));
            }
            if !length.is_finite() {
                return Err(MathError::unsupported(
                    "Matrix3::invort",
                    MathErrorKind::Overflow,
                    &format!("{} column length is not finite", name),
                ));
            }
            let reciprocal = 1.0 / length;
            column.scale(reciprocal).scale(reciprocal);
        }

        *self = Self::from_columns(&columns[0], &columns[1], &columns[2]);
        Ok(self.transpose_mut())
    }

    /// Copy with every column scaled to unit length.
    pub fn unitized_columns(&self) -> MathResult<Self> {
        let mut result = *self;
        result.unitize_columns()?;
        Ok(result)
    }

    /// Scales every column to unit length; fails if any column is zero.
    pub fn unitize_columns(&mut self) -> MathResult<&mut Self> {
        let mut columns = [self.ith_column(), self.jth_column(), self.kth_column()];
        for (column, name) in columns.iter_mut().zip(COLUMN_NAMES) {
            column.unitize().map_err(|_| {
                MathError::unsupported(
                    "Matrix3::unitize_columns",
                    MathErrorKind::ZeroLength,
                    &format!("{} column has zero length", name),
                )
            })?;
        }
        *self = Self::from_columns(&columns[0], &columns[1], &columns[2]);
        Ok(self)
    }

    /// `self · v`
    pub fn mxv(&self, v: &Vector3) -> Vector3 {
        Vector3::new(
            self.ii * v.i + self.ij * v.j + self.ik * v.k,
            self.ji * v.i + self.jj * v.j + self.jk * v.k,
            self.ki * v.i + self.kj * v.j + self.kk * v.k,
        )
    }

    pub fn mxv_into<'a>(&self, v: &Vector3, buffer: &'a mut Vector3) -> &'a mut Vector3 {
        *buffer = self.mxv(v);
        buffer
    }

    /// `selfᵀ · v`
    pub fn mtxv(&self, v: &Vector3) -> Vector3 {
        Vector3::new(
            self.ii * v.i + self.ji * v.j + self.ki * v.k,
            self.ij * v.i + self.jj * v.j + self.kj * v.k,
            self.ik * v.i + self.jk * v.j + self.kk * v.k,
        )
    }

    pub fn mtxv_into<'a>(&self, v: &Vector3, buffer: &'a mut Vector3) -> &'a mut Vector3 {
        *buffer = self.mtxv(v);
        buffer
    }

    /// `a · b`
    pub fn mxm(a: &Self, b: &Self) -> Self {
        Self::from_columns(
            &a.mxv(&b.ith_column()),
            &a.mxv(&b.jth_column()),
            &a.mxv(&b.kth_column()),
        )
    }

    pub fn mxm_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::mxm(a, b);
        buffer
    }

    /// `aᵀ · b`
    pub fn mtxm(a: &Self, b: &Self) -> Self {
        Self::from_columns(
            &a.mtxv(&b.ith_column()),
            &a.mtxv(&b.jth_column()),
            &a.mtxv(&b.kth_column()),
        )
    }

    pub fn mtxm_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::mtxm(a, b);
        buffer
    }

    /// `a · bᵀ`
    pub fn mxmt(a: &Self, b: &Self) -> Self {
        Self::mxm(a, &b.transpose())
    }

    pub fn mxmt_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::mxmt(a, b);
        buffer
    }

    /// `a · b + c · d`
    pub fn mxmadd(a: &Self, b: &Self, c: &Self, d: &Self) -> Self {
        Self::mxm(a, b) + Self::mxm(c, d)
    }

    pub fn mxmadd_into<'a>(
        a: &Self,
        b: &Self,
        c: &Self,
        d: &Self,
        buffer: &'a mut Self,
    ) -> &'a mut Self {
        *buffer = Self::mxmadd(a, b, c, d);
        buffer
    }

    /// `aᵀ · b + cᵀ · d`
    pub fn mtxmadd(a: &Self, b: &Self, c: &Self, d: &Self) -> Self {
        Self::mtxm(a, b) + Self::mtxm(c, d)
    }

    pub fn mtxmadd_into<'a>(
        a: &Self,
        b: &Self,
        c: &Self,
        d: &Self,
        buffer: &'a mut Self,
    ) -> &'a mut Self {
        *buffer = Self::mtxmadd(a, b, c, d);
        buffer
    }

    /// `a · bᵀ + c · dᵀ`
    pub fn mxmtadd(a: &Self, b: &Self, c: &Self, d: &Self) -> Self {
        Self::mxmt(a, b) + Self::mxmt(c, d)
    }

    pub fn mxmtadd_into<'a>(
        a: &Self,
        b: &Self,
        c: &Self,
        d: &Self,
        buffer: &'a mut Self,
    ) -> &'a mut Self {
        *buffer = Self::mxmtadd(a, b, c, d);
        buffer
    }

    pub fn add(a: &Self, b: &Self) -> Self {
        Self::new(
            a.ii + b.ii,
            a.ji + b.ji,
            a.ki + b.ki,
            a.ij + b.ij,
            a.jj + b.jj,
            a.kj + b.kj,
            a.ik + b.ik,
            a.jk + b.jk,
            a.kk + b.kk,
        )
    }

    pub fn add_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::add(a, b);
        buffer
    }

    pub fn subtract(a: &Self, b: &Self) -> Self {
        Self::add(a, &b.negated())
    }

    pub fn subtract_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::subtract(a, b);
        buffer
    }

    /// Largest absolute difference between corresponding components.
    ///
    /// ```
    /// use spacemath_core::Matrix3;
    ///
    /// let mut b = Matrix3::IDENTITY;
    /// b.ij = 0.001;
    /// assert!((Matrix3::IDENTITY.max_difference(&b) - 0.001).abs() < 1e-15);
    /// ```
    pub fn max_difference(&self, other: &Self) -> f64 {
        let a = self.to_array();
        let b = other.to_array();

        let mut max_diff: f64 = 0.0;
        for (row_a, row_b) in a.iter().zip(b.iter()) {
            for (x, y) in row_a.iter().zip(row_b.iter()) {
                max_diff = max_diff.max((x - y).abs());
            }
        }
        max_diff
    }
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_array(rows)
    }
}

impl std::ops::Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::mxm(&self, &rhs)
    }
}

impl std::ops::Mul<&Matrix3> for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: &Matrix3) -> Matrix3 {
        Matrix3::mxm(self, rhs)
    }
}

impl std::ops::Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.mxv(&vec)
    }
}

impl std::ops::Mul<Vector3> for &Matrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.mxv(&vec)
    }
}

impl std::ops::Mul<f64> for Matrix3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scaled(scalar)
    }
}

impl std::ops::Add for Matrix3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Matrix3::add(&self, &rhs)
    }
}

impl std::ops::Sub for Matrix3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Matrix3::subtract(&self, &rhs)
    }
}

impl std::ops::Neg for Matrix3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::ops::Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.component(row, col) {
            Some(value) => value,
            None => panic!("Matrix3 index out of bounds: ({}, {})", row, col),
        }
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.component_mut(row, col) {
            Some(value) => value,
            None => panic!("Matrix3 index out of bounds: ({}, {})", row, col),
        }
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3:")?;
        for row in &self.to_array() {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> Matrix3 {
        Matrix3::from_array([[2.0, -1.0, 0.5], [1.0, 3.0, -2.0], [0.0, 4.0, 1.0]])
    }

    #[test]
    fn test_layout() {
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.ith_column(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m.get(0, 1).unwrap(), 4.0);
        assert_eq!(m[(2, 0)], 3.0);
        assert_eq!(Matrix3::from_array(m.to_array()), m);
        assert!(m.get(3, 0).is_err());
    }

    #[test]
    fn test_set_and_columns() {
        let mut m = Matrix3::ZERO;
        m.set(1, 2, 5.0).unwrap();
        assert_eq!(m.jk, 5.0);
        assert!(m.set(0, 3, 1.0).is_err());

        m.set_column(0, &Vector3::ONES).unwrap();
        assert_eq!(m.column(0).unwrap(), Vector3::ONES);
        assert!(m.column(3).is_err());
        assert!(m.set_column(3, &Vector3::ONES).is_err());
    }

    #[test]
    fn test_scaled_columns() {
        let m = Matrix3::from_scaled_columns(2.0, &Vector3::I, 3.0, &Vector3::J, -1.0, &Vector3::K);
        assert_eq!(m.trace(), 4.0);
        assert_abs_diff_eq!(m.determinant(), -6.0, epsilon = 1e-14);
    }

    #[test]
    fn test_determinant_and_symmetry() {
        assert_abs_diff_eq!(sample().determinant(), 25.0, epsilon = 1e-13);
        assert!(!sample().is_symmetric());
        let s = Matrix3::from_array([[1.0, 2.0, 3.0], [2.0, 4.0, 5.0], [3.0, 5.0, 6.0]]);
        assert!(s.is_symmetric());
        assert_eq!(s.transpose(), s);
    }

    #[test]
    fn test_transpose_mut() {
        let mut m = sample();
        let t = m.transpose();
        m.transpose_mut();
        assert_eq!(m, t);
        assert_eq!(m.ij, 1.0);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let m = sample();
        let inv = m.inverse().unwrap();
        let product = m * inv;
        assert!(product.max_difference(&Matrix3::IDENTITY) < 1e-14);

        let back = inv.inverse().unwrap();
        assert!(back.max_difference(&m) < 1e-14);

        let v = Vector3::new(1.0, -2.0, 0.25);
        assert_abs_diff_eq!(inv.mxv(&m.mxv(&v)), v, epsilon = 1e-14);
    }

    #[test]
    fn test_invert_singular() {
        let mut m = Matrix3::from_array([[1.0, 2.0, 4.0], [2.0, 4.0, 8.0], [0.0, 1.0, 1.0]]);
        assert_eq!(m.determinant(), 0.0);
        let err = m.invert().unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::Singular));

        let tiny = Matrix3::IDENTITY.scaled(1e-3);
        assert!(tiny.inverse().is_ok());
        assert!(tiny.inverse_with_tolerance(1e-6).is_err());
    }

    #[test]
    fn test_invort() {
        let m = Matrix3::from_scaled_columns(2.0, &Vector3::J, 4.0, &Vector3::K, 0.5, &Vector3::I);
        let inv = m.invorted().unwrap();
        assert!((m * inv).max_difference(&Matrix3::IDENTITY) < 1e-15);

        let mut zero_column = Matrix3::IDENTITY;
        zero_column.set_column(2, &Vector3::ZERO).unwrap();
        let err = zero_column.invort().unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::ZeroLength));
        assert!(err.to_string().contains("kth column"));
    }

    #[test]
    fn test_unitize_columns() {
        let m = Matrix3::from_scaled_columns(3.0, &Vector3::I, 2.0, &Vector3::K, 5.0, &Vector3::J);
        let u = m.unitized_columns().unwrap();
        assert_eq!(u.ith_column(), Vector3::I);
        assert_eq!(u.kth_column(), Vector3::J);

        let err = Matrix3::ZERO.unitized_columns().unwrap_err();
        assert!(err.to_string().contains("ith column"));
    }

    #[test]
    fn test_products() {
        let a = sample();
        let b = Matrix3::from_array([[0.0, 1.0, 2.0], [-1.0, 0.5, 0.0], [3.0, 0.0, 1.0]]);

        assert_eq!(Matrix3::mtxm(&a, &b), Matrix3::mxm(&a.transpose(), &b));
        assert_eq!(Matrix3::mxmt(&a, &b), Matrix3::mxm(&a, &b.transpose()));
        assert_eq!(
            Matrix3::mxmadd(&a, &b, &b, &a),
            Matrix3::mxm(&a, &b) + Matrix3::mxm(&b, &a)
        );
        assert_eq!(
            Matrix3::mtxmadd(&a, &b, &b, &a),
            Matrix3::mtxm(&a, &b) + Matrix3::mtxm(&b, &a)
        );
        assert_eq!(
            Matrix3::mxmtadd(&a, &b, &b, &a),
            Matrix3::mxmt(&a, &b) + Matrix3::mxmt(&b, &a)
        );

        let mut buffer = Matrix3::ZERO;
        Matrix3::mxm_into(&a, &Matrix3::IDENTITY, &mut buffer);
        assert_eq!(buffer, a);
        Matrix3::subtract_into(&a, &a, &mut buffer);
        assert_eq!(buffer, Matrix3::ZERO);
    }

    #[test]
    fn test_mxv_mtxv() {
        let m = sample();
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(m.mxv(&v), Vector3::new(1.5, 1.0, 11.0));
        assert_eq!(m.mtxv(&v), m.transpose().mxv(&v));

        let mut out = Vector3::ZERO;
        m.mtxv_into(&v, &mut out);
        assert_eq!(out, m.mtxv(&v));
    }

    #[test]
    fn test_is_rotation() {
        let quarter_turn = Matrix3::from_columns(&Vector3::J, &Vector3::MINUS_I, &Vector3::K);
        assert!(quarter_turn.is_rotation());

        let reflection = Matrix3::from_columns(&Vector3::J, &Vector3::I, &Vector3::K);
        assert!(!reflection.is_rotation());

        let loose = RotationTolerance::new(0.2, 0.2);
        let nearly = Matrix3::IDENTITY.scaled(1.05);
        assert!(!nearly.is_rotation());
        assert!(nearly.is_rotation_with_tolerance(loose));
    }
}
