//! Overflow-safe numeric helpers shared by the vector and matrix types.
//!
//! Norms and determinants are computed after dividing every component by the
//! largest magnitude among them, then rescaled. This keeps very large or very
//! small operands from overflowing or underflowing while squaring.

use crate::constants::{DETERMINANT_TOLERANCE, NORM_TOLERANCE};
use crate::{MathError, MathErrorKind, MathResult};

#[inline]
pub fn abs_max2(i: f64, j: f64) -> f64 {
    i.abs().max(j.abs())
}

#[inline]
pub fn abs_max3(i: f64, j: f64, k: f64) -> f64 {
    i.abs().max(j.abs()).max(k.abs())
}

/// Euclidean norm of `(i, j)`, exactly 0 for the zero vector.
#[inline]
pub fn compute_norm2(i: f64, j: f64) -> f64 {
    let max = abs_max2(i, j);
    if max == 0.0 {
        return 0.0;
    }
    let (i, j) = (i / max, j / max);
    max * libm::sqrt(i * i + j * j)
}

/// Euclidean norm of `(i, j, k)`, exactly 0 for the zero vector.
#[inline]
pub fn compute_norm3(i: f64, j: f64, k: f64) -> f64 {
    let max = abs_max3(i, j, k);
    if max == 0.0 {
        return 0.0;
    }
    let (i, j, k) = (i / max, j / max, k / max);
    max * libm::sqrt(i * i + j * j + k * k)
}

/// Determinant of the 2x2 matrix with columns `(ii, ji)` and `(ij, jj)`.
pub fn compute_determinant2(ii: f64, ji: f64, ij: f64, jj: f64) -> f64 {
    let max = abs_max2(abs_max2(ii, ji), abs_max2(ij, jj));
    if max == 0.0 {
        return 0.0;
    }
    let (ii, ji, ij, jj) = (ii / max, ji / max, ij / max, jj / max);
    (ii * jj - ij * ji) * max * max
}

/// Determinant of the 3x3 matrix with columns `(ii, ji, ki)`, `(ij, jj, kj)`
/// and `(ik, jk, kk)`.
#[allow(clippy::too_many_arguments)]
pub fn compute_determinant3(
    ii: f64,
    ji: f64,
    ki: f64,
    ij: f64,
    jj: f64,
    kj: f64,
    ik: f64,
    jk: f64,
    kk: f64,
) -> f64 {
    let max = abs_max3(abs_max3(ii, ji, ki), abs_max3(ij, jj, kj), abs_max3(ik, jk, kk));
    if max == 0.0 {
        return 0.0;
    }
    let (ii, ji, ki) = (ii / max, ji / max, ki / max);
    let (ij, jj, kj) = (ij / max, jj / max, kj / max);
    let (ik, jk, kk) = (ik / max, jk / max, kk / max);

    let det = ii * (jj * kk - jk * kj) - ij * (ji * kk - jk * ki) + ik * (ji * kj - jj * ki);
    det * max * max * max
}

// NaN-safe: a NaN deviation is never within tolerance.
#[inline]
fn within(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() <= tolerance
}

fn check_column_norm(operation: &str, name: &str, norm: f64, tolerance: f64) -> MathResult<()> {
    if within(norm, 1.0, tolerance) {
        return Ok(());
    }
    Err(MathError::malformed_rotation(
        operation,
        &format!(
            "{} column norm {} deviates from unity by more than {}",
            name, norm, tolerance
        ),
    ))
}

/// Verifies that the 2x2 matrix is a rotation: unit columns and determinant +1
/// once the columns are unitized.
pub fn check_rotation2(
    ii: f64,
    ji: f64,
    ij: f64,
    jj: f64,
    norm_tolerance: f64,
    det_tolerance: f64,
) -> MathResult<()> {
    const OP: &str = "check_rotation2";
    let ni = compute_norm2(ii, ji);
    let nj = compute_norm2(ij, jj);
    check_column_norm(OP, "ith", ni, norm_tolerance)?;
    check_column_norm(OP, "jth", nj, norm_tolerance)?;

    let det = compute_determinant2(ii / ni, ji / ni, ij / nj, jj / nj);
    if within(det, 1.0, det_tolerance) {
        return Ok(());
    }
    Err(MathError::malformed_rotation(
        OP,
        &format!(
            "determinant {} deviates from +1 by more than {}",
            det, det_tolerance
        ),
    ))
}

/// Verifies that the 3x3 matrix is a rotation: unit columns and determinant +1
/// once the columns are unitized.
#[allow(clippy::too_many_arguments)]
pub fn check_rotation3(
    ii: f64,
    ji: f64,
    ki: f64,
    ij: f64,
    jj: f64,
    kj: f64,
    ik: f64,
    jk: f64,
    kk: f64,
    norm_tolerance: f64,
    det_tolerance: f64,
) -> MathResult<()> {
    const OP: &str = "check_rotation3";
    let ni = compute_norm3(ii, ji, ki);
    let nj = compute_norm3(ij, jj, kj);
    let nk = compute_norm3(ik, jk, kk);
    check_column_norm(OP, "ith", ni, norm_tolerance)?;
    check_column_norm(OP, "jth", nj, norm_tolerance)?;
    check_column_norm(OP, "kth", nk, norm_tolerance)?;

    let det = compute_determinant3(
        ii / ni,
        ji / ni,
        ki / ni,
        ij / nj,
        jj / nj,
        kj / nj,
        ik / nk,
        jk / nk,
        kk / nk,
    );
    if within(det, 1.0, det_tolerance) {
        return Ok(());
    }
    Err(MathError::malformed_rotation(
        OP,
        &format!(
            "determinant {} deviates from +1 by more than {}",
            det, det_tolerance
        ),
    ))
}

/// [`check_rotation3`] with [`NORM_TOLERANCE`] and [`DETERMINANT_TOLERANCE`].
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn check_rotation3_default(
    ii: f64,
    ji: f64,
    ki: f64,
    ij: f64,
    jj: f64,
    kj: f64,
    ik: f64,
    jk: f64,
    kk: f64,
) -> MathResult<()> {
    check_rotation3(
        ii,
        ji,
        ki,
        ij,
        jj,
        kj,
        ik,
        jk,
        kk,
        NORM_TOLERANCE,
        DETERMINANT_TOLERANCE,
    )
}

/// Real roots of `a·x² + b·x + c = 0`.
///
/// The coefficients are first divided by the largest of them. The root of
/// larger magnitude is computed directly as `q / a` with
/// `q = -(b + sign(b)·√disc) / 2`, and the other from the product of roots,
/// `c / q`, so no step subtracts nearly equal quantities. The larger-magnitude
/// root is returned first.
///
/// With `a == 0` the equation is solved as linear and both entries hold the
/// single root.
///
/// ```
/// use spacemath_core::math::solve_quadratic;
///
/// // (x - 1)(x - 1e8) = x² - (1e8 + 1)x + 1e8
/// let [big, small] = solve_quadratic(1.0, -(1e8 + 1.0), 1e8).unwrap();
/// assert!((big - 1e8).abs() < 1e-6);
/// assert!((small - 1.0).abs() < 1e-15);
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> MathResult<[f64; 2]> {
    const OP: &str = "solve_quadratic";

    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(MathError::invalid_argument(
            OP,
            &format!("coefficients must be finite, got ({}, {}, {})", a, b, c),
        ));
    }
    if a == 0.0 && b == 0.0 {
        return Err(MathError::unsupported(
            OP,
            MathErrorKind::Degenerate,
            "quadratic and linear coefficients are both zero",
        ));
    }

    let scale = abs_max3(a, b, c);
    let (a, b, c) = (a / scale, b / scale, c / scale);

    if a == 0.0 {
        log::trace!("{OP}: degenerate to linear equation");
        let root = -c / b;
        return Ok([root, root]);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Err(MathError::unsupported(
            OP,
            MathErrorKind::NegativeDiscriminant,
            &format!("discriminant {} has no real square root", discriminant),
        ));
    }

    let sign = if b < 0.0 { -1.0 } else { 1.0 };
    let q = -0.5 * (b + sign * libm::sqrt(discriminant));
    if q == 0.0 {
        return Ok([0.0, 0.0]);
    }

    Ok([q / a, c / q])
}
