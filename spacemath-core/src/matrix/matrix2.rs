//! General 2x2 matrices and symmetric eigen-decomposition.
//!
//! [`Matrix2`] uses the same component naming as
//! [`Matrix3`](crate::Matrix3): `ij` is row `i`, column `j`, and
//! [`Matrix2::new`] takes components in column order.
//!
//! ```
//! use spacemath_core::Matrix2;
//!
//! let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(m.to_array(), [[1.0, 3.0], [2.0, 4.0]]);
//!
//! let inv = m.inverse().unwrap();
//! assert_eq!(inv, Matrix2::new(-2.0, 1.0, 1.5, -0.5));
//! ```

use crate::constants::{INVERSION_TOLERANCE, INVORT_BOUND};
use crate::math::{abs_max3, check_rotation2, compute_determinant2, solve_quadratic};
use crate::{MathError, MathErrorKind, MathResult, RotationTolerance, Vector2};
use std::fmt;

const COLUMN_NAMES: [&str; 2] = ["ith", "jth"];

/// A general 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2 {
    pub ii: f64,
    pub ji: f64,
    pub ij: f64,
    pub jj: f64,
}

impl Matrix2 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const ONES: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Builds a matrix from its components in column order.
    #[inline]
    pub const fn new(ii: f64, ji: f64, ij: f64, jj: f64) -> Self {
        Self { ii, ji, ij, jj }
    }

    /// Builds a matrix from row-major nested arrays: `rows[r][c]`.
    pub fn from_array(rows: [[f64; 2]; 2]) -> Self {
        Self::new(rows[0][0], rows[1][0], rows[0][1], rows[1][1])
    }

    pub fn to_array(&self) -> [[f64; 2]; 2] {
        [[self.ii, self.ij], [self.ji, self.jj]]
    }

    pub fn from_columns(ith: &Vector2, jth: &Vector2) -> Self {
        Self::new(ith.i, ith.j, jth.i, jth.j)
    }

    pub fn from_scaled_columns(scale_i: f64, ith: &Vector2, scale_j: f64, jth: &Vector2) -> Self {
        Self::from_columns(&ith.scaled(scale_i), &jth.scaled(scale_j))
    }

    #[inline]
    pub fn ith_column(&self) -> Vector2 {
        Vector2::new(self.ii, self.ji)
    }

    #[inline]
    pub fn jth_column(&self) -> Vector2 {
        Vector2::new(self.ij, self.jj)
    }

    pub fn column(&self, index: usize) -> MathResult<Vector2> {
        match index {
            0 => Ok(self.ith_column()),
            1 => Ok(self.jth_column()),
            _ => Err(MathError::invalid_argument(
                "Matrix2::column",
                &format!("column {} out of bounds (valid range: 0-1)", index),
            )),
        }
    }

    pub fn set_column(&mut self, index: usize, column: &Vector2) -> MathResult<&mut Self> {
        match index {
            0 => (self.ii, self.ji) = (column.i, column.j),
            1 => (self.ij, self.jj) = (column.i, column.j),
            _ => {
                return Err(MathError::invalid_argument(
                    "Matrix2::set_column",
                    &format!("column {} out of bounds (valid range: 0-1)", index),
                ))
            }
        }
        Ok(self)
    }

    fn component(&self, row: usize, col: usize) -> Option<&f64> {
        match (row, col) {
            (0, 0) => Some(&self.ii),
            (1, 0) => Some(&self.ji),
            (0, 1) => Some(&self.ij),
            (1, 1) => Some(&self.jj),
            _ => None,
        }
    }

    fn component_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        match (row, col) {
            (0, 0) => Some(&mut self.ii),
            (1, 0) => Some(&mut self.ji),
            (0, 1) => Some(&mut self.ij),
            (1, 1) => Some(&mut self.jj),
            _ => None,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> MathResult<f64> {
        self.component(row, col).copied().ok_or_else(|| {
            MathError::invalid_argument(
                "Matrix2::get",
                &format!("index ({}, {}) out of bounds (valid range: 0-1)", row, col),
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
                "Matrix2::set",
                &format!("index ({}, {}) out of bounds (valid range: 0-1)", row, col),
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
            self.ij * scale,
            self.jj * scale,
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

    pub fn determinant(&self) -> f64 {
        compute_determinant2(self.ii, self.ji, self.ij, self.jj)
    }

    pub fn trace(&self) -> f64 {
        self.ii + self.jj
    }

    pub fn is_symmetric(&self) -> bool {
        self.ij == self.ji
    }

    pub fn is_rotation(&self) -> bool {
        self.is_rotation_with_tolerance(RotationTolerance::default())
    }

    pub fn is_rotation_with_tolerance(&self, tolerance: RotationTolerance) -> bool {
        check_rotation2(
            self.ii,
            self.ji,
            self.ij,
            self.jj,
            tolerance.norm,
            tolerance.determinant,
        )
        .is_ok()
    }

    pub fn transpose(&self) -> Self {
        Self::new(self.ii, self.ij, self.ji, self.jj)
    }

    pub fn transpose_mut(&mut self) -> &mut Self {
        std::mem::swap(&mut self.ij, &mut self.ji);
        self
    }

    pub fn inverse(&self) -> MathResult<Self> {
        self.inverse_with_tolerance(INVERSION_TOLERANCE)
    }

    /// Cofactor inverse; fails with [`MathErrorKind::Singular`] when
    /// `|det| < tolerance`.
    pub fn inverse_with_tolerance(&self, tolerance: f64) -> MathResult<Self> {
        let det = self.determinant();
        if det.is_nan() || det.abs() < tolerance {
            return Err(MathError::unsupported(
                "Matrix2::invert",
                MathErrorKind::Singular,
                &format!(
                    "determinant {} is below the inversion tolerance {}",
                    det, tolerance
                ),
            ));
        }
        Ok(Self::new(
            self.jj / det,
            -self.ji / det,
            -self.ij / det,
            self.ii / det,
        ))
    }

    pub fn invert(&mut self) -> MathResult<&mut Self> {
        self.invert_with_tolerance(INVERSION_TOLERANCE)
    }

    pub fn invert_with_tolerance(&mut self, tolerance: f64) -> MathResult<&mut Self> {
        *self = self.inverse_with_tolerance(tolerance)?;
        Ok(self)
    }

    /// Inverse of a matrix with orthogonal columns, see
    /// [`Matrix3::invorted`](crate::Matrix3::invorted).
    pub fn invorted(&self) -> MathResult<Self> {
        let mut result = *self;
        result.invort()?;
        Ok(result)
    }

    pub fn invort(&mut self) -> MathResult<&mut Self> {
        let mut columns = [self.ith_column(), self.jth_column()];

        for (column, name) in columns.iter_mut().zip(COLUMN_NAMES) {
            let length = column.length();
            if length == 0.0 {
                return Err(MathError::unsupported(
                    "Matrix2::invort",
                    MathErrorKind::ZeroLength,
                    &format!("{} column has zero length", name),
                ));
            }
            if length < 1.0 / INVORT_BOUND {
                return Err(MathError::unsupported(
                    "Matrix2::invort",
                    MathErrorKind::Underflow,
                    &format!(
                        "{} column length {} is too small to invert",
                        name, length
                    ),
                ));
            }
            if !length.is_finite() {
                return Err(MathError::unsupported(
                    "Matrix2::invort",
                    MathErrorKind::Overflow,
                    &format!("{} column length is not finite", name),
                ));
            }
            let reciprocal = 1.0 / length;
            column.scale(reciprocal).scale(reciprocal);
        }

        *self = Self::from_columns(&columns[0], &columns[1]);
        Ok(self.transpose_mut())
    }

    pub fn unitized_columns(&self) -> MathResult<Self> {
        let mut result = *self;
        result.unitize_columns()?;
        Ok(result)
    }

    pub fn unitize_columns(&mut self) -> MathResult<&mut Self> {
        let mut columns = [self.ith_column(), self.jth_column()];
        for (column, name) in columns.iter_mut().zip(COLUMN_NAMES) {
            column.unitize().map_err(|_| {
                MathError::unsupported(
                    "Matrix2::unitize_columns",
                    MathErrorKind::ZeroLength,
                    &format!("{} column has zero length", name),
                )
            })?;
        }
        *self = Self::from_columns(&columns[0], &columns[1]);
        Ok(self)
    }

    pub fn mxv(&self, v: &Vector2) -> Vector2 {
        Vector2::new(
            self.ii * v.i + self.ij * v.j,
            self.ji * v.i + self.jj * v.j,
        )
    }

    pub fn mxv_into<'a>(&self, v: &Vector2, buffer: &'a mut Vector2) -> &'a mut Vector2 {
        *buffer = self.mxv(v);
        buffer
    }

    pub fn mtxv(&self, v: &Vector2) -> Vector2 {
        Vector2::new(
            self.ii * v.i + self.ji * v.j,
            self.ij * v.i + self.jj * v.j,
        )
    }

    pub fn mtxv_into<'a>(&self, v: &Vector2, buffer: &'a mut Vector2) -> &'a mut Vector2 {
        *buffer = self.mtxv(v);
        buffer
    }

    pub fn mxm(a: &Self, b: &Self) -> Self {
        Self::from_columns(&a.mxv(&b.ith_column()), &a.mxv(&b.jth_column()))
    }

    pub fn mxm_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::mxm(a, b);
        buffer
    }

    pub fn mtxm(a: &Self, b: &Self) -> Self {
        Self::from_columns(&a.mtxv(&b.ith_column()), &a.mtxv(&b.jth_column()))
    }

    pub fn mtxm_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::mtxm(a, b);
        buffer
    }

    pub fn mxmt(a: &Self, b: &Self) -> Self {
        Self::mxm(a, &b.transpose())
    }

    pub fn mxmt_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::mxmt(a, b);
        buffer
    }

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
        Self::new(a.ii + b.ii, a.ji + b.ji, a.ij + b.ij, a.jj + b.jj)
    }

    pub fn add_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::add(a, b);
        buffer
    }

    pub fn subtract(a: &Self, b: &Self) -> Self {
        Self::new(a.ii - b.ii, a.ji - b.ji, a.ij - b.ij, a.jj - b.jj)
    }

    pub fn subtract_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::subtract(a, b);
        buffer
    }

    pub fn max_difference(&self, other: &Self) -> f64 {
        [
            self.ii - other.ii,
            self.ji - other.ji,
            self.ij - other.ij,
            self.jj - other.jj,
        ]
        .iter()
        .fold(0.0_f64, |max, d| max.max(d.abs()))
    }

    /// Eigenvalues and eigenvectors of a symmetric matrix.
    ///
    /// Returns the two eigenvalues and a rotation whose columns are the
    /// matching unit eigenvectors, so that `symmetric = R · diag(λ) · Rᵀ`. A
    /// diagonal input returns its diagonal and the identity; otherwise the
    /// first eigenvalue is the one of larger magnitude.
    ///
    /// The matrix is divided by its largest component before the
    /// characteristic quadratic is solved, and of the two equivalent formulas
    /// for the first eigenvector the one with the larger difference term is
    /// used. Fails with [`MathErrorKind::NotSymmetric`] unless `ij == ji`
    /// exactly.
    ///
    /// ```
    /// use spacemath_core::Matrix2;
    ///
    /// let m = Matrix2::from_array([[6.0, 2.0], [2.0, 3.0]]);
    /// let ([big, small], vectors) = Matrix2::diagonalize_symmetric(&m).unwrap();
    /// assert!((big - 7.0).abs() < 1e-14);
    /// assert!((small - 2.0).abs() < 1e-14);
    /// assert!((vectors.ii - 2.0 / 5f64.sqrt()).abs() < 1e-15);
    /// assert!(vectors.is_rotation());
    /// ```
    pub fn diagonalize_symmetric(symmetric: &Self) -> MathResult<([f64; 2], Self)> {
        if !symmetric.is_symmetric() {
            return Err(MathError::unsupported(
                "Matrix2::diagonalize_symmetric",
                MathErrorKind::NotSymmetric,
                &format!(
                    "off-diagonal components differ: ij = {}, ji = {}",
                    symmetric.ij, symmetric.ji
                ),
            ));
        }

        let (a, b, c) = (symmetric.ii, symmetric.ij, symmetric.jj);
        if b == 0.0 {
            return Ok(([a, c], Self::IDENTITY));
        }

        let scale = abs_max3(a, b, c);
        let (a, b, c) = (a / scale, b / scale, c / scale);

        let [root1, root2] = solve_quadratic(1.0, -(a + c), a * c - b * b)?;

        let eigenvector = if (root1 - a).abs() >= (root1 - c).abs() {
            log::trace!("diagonalize_symmetric: eigenvector from first row");
            Vector2::new(b, root1 - a)
        } else {
            log::trace!("diagonalize_symmetric: eigenvector from second row");
            Vector2::new(root1 - c, b)
        };
        let eigenvector = eigenvector.unitized()?;

        let rotation = Self::new(
            eigenvector.i,
            eigenvector.j,
            -eigenvector.j,
            eigenvector.i,
        );
        Ok(([root1 * scale, root2 * scale], rotation))
    }

    pub fn diagonalize_symmetric_into(
        symmetric: &Self,
        eigenvalues: &mut [f64; 2],
        eigenvectors: &mut Self,
    ) -> MathResult<()> {
        let (values, vectors) = Self::diagonalize_symmetric(symmetric)?;
        *eigenvalues = values;
        *eigenvectors = vectors;
        Ok(())
    }
}

impl From<[[f64; 2]; 2]> for Matrix2 {
    fn from(rows: [[f64; 2]; 2]) -> Self {
        Self::from_array(rows)
    }
}

impl std::ops::Mul for Matrix2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::mxm(&self, &rhs)
    }
}

impl std::ops::Mul<Vector2> for Matrix2 {
    type Output = Vector2;

    fn mul(self, vec: Vector2) -> Vector2 {
        self.mxv(&vec)
    }
}

impl std::ops::Mul<f64> for Matrix2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scaled(scalar)
    }
}

impl std::ops::Add for Matrix2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Matrix2::add(&self, &rhs)
    }
}

impl std::ops::Sub for Matrix2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Matrix2::subtract(&self, &rhs)
    }
}

impl std::ops::Neg for Matrix2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::ops::Index<(usize, usize)> for Matrix2 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.component(row, col) {
            Some(value) => value,
            None => panic!("Matrix2 index out of bounds: ({}, {})", row, col),
        }
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix2 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.component_mut(row, col) {
            Some(value) => value,
            None => panic!("Matrix2 index out of bounds: ({}, {})", row, col),
        }
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix2:")?;
        for row in &self.to_array() {
            writeln!(f, "  [{:12.9} {:12.9}]", row[0], row[1])?;
        }
        Ok(())
    }
}
