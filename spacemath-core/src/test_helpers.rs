//! Assertions shared by the unit and integration tests of this workspace.
//!
//! ULP comparisons for scalars, plus absolute-tolerance comparisons for
//! vectors and matrices that report the offending component on failure.

use crate::{Matrix2, Matrix3, Vector2, Vector3};

/// Number of representable doubles between `a` and `b`.
///
/// Bit patterns are mapped onto one monotonic integer line, so the count is
/// valid across the sign boundary and `-0.0` coincides with `0.0`.
pub fn ulps_between(a: f64, b: f64) -> u64 {
    fn ordinal(x: f64) -> i64 {
        let bits = x.to_bits() as i64;
        if bits < 0 {
            i64::MIN - bits
        } else {
            bits
        }
    }
    ordinal(a).abs_diff(ordinal(b))
}

/// Asserts `actual` is within `max_ulps` representable steps of `expected`.
///
/// Meant for results that should be exact or nearly so; a value expected to
/// be zero is better checked with [`assert_close`].
#[track_caller]
pub fn assert_ulps(actual: f64, expected: f64, max_ulps: u64, ctx: &str) {
    assert!(
        actual.is_finite() && expected.is_finite(),
        "{}: non-finite comparison {} vs {}",
        ctx,
        actual,
        expected
    );
    let ulps = ulps_between(actual, expected);
    assert!(
        ulps <= max_ulps,
        "{}: {} is {} ulps from {} (allowed {})",
        ctx,
        actual,
        ulps,
        expected,
        max_ulps
    );
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, ctx: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: |{} - {}| = {:e} exceeds {:e}",
        ctx,
        actual,
        expected,
        (actual - expected).abs(),
        tolerance
    );
}

#[track_caller]
pub fn assert_vector2_close(actual: &Vector2, expected: &Vector2, tolerance: f64) {
    for (name, a, e) in [("i", actual.i, expected.i), ("j", actual.j, expected.j)] {
        assert_close(a, e, tolerance, &format!("{} component of {}", name, actual));
    }
}

#[track_caller]
pub fn assert_vector3_close(actual: &Vector3, expected: &Vector3, tolerance: f64) {
    for (name, a, e) in [
        ("i", actual.i, expected.i),
        ("j", actual.j, expected.j),
        ("k", actual.k, expected.k),
    ] {
        assert_close(a, e, tolerance, &format!("{} component of {}", name, actual));
    }
}

#[track_caller]
pub fn assert_matrix3_close(actual: &Matrix3, expected: &Matrix3, tolerance: f64) {
    let diff = actual.max_difference(expected);
    assert!(
        diff <= tolerance,
        "max component difference {:e} exceeds {:e}\nactual {}expected {}",
        diff,
        tolerance,
        actual,
        expected
    );
}

#[track_caller]
pub fn assert_vector3_ulps(actual: &Vector3, expected: &Vector3, max_ulps: u64) {
    for (name, a, e) in [
        ("i", actual.i, expected.i),
        ("j", actual.j, expected.j),
        ("k", actual.k, expected.k),
    ] {
        assert_ulps(a, e, max_ulps, &format!("{} component of {}", name, actual));
    }
}

#[track_caller]
pub fn assert_matrix2_ulps(actual: &Matrix2, expected: &Matrix2, max_ulps: u64) {
    for (name, a, e) in [
        ("ii", actual.ii, expected.ii),
        ("ji", actual.ji, expected.ji),
        ("ij", actual.ij, expected.ij),
        ("jj", actual.jj, expected.jj),
    ] {
        assert_ulps(a, e, max_ulps, &format!("{} component of {}", name, actual));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulps_between() {
        let above_one = f64::from_bits(1.0_f64.to_bits() + 1);
        assert_eq!(ulps_between(1.0, above_one), 1);
        assert_eq!(ulps_between(above_one, 1.0), 1);
        assert_eq!(ulps_between(-0.0, 0.0), 0);

        let tiny = f64::from_bits(1);
        assert_eq!(ulps_between(-tiny, tiny), 2);
        assert_eq!(ulps_between(-1.5, -1.5), 0);
    }

    #[test]
    #[should_panic(expected = "ulps from")]
    fn test_assert_ulps_rejects_distant_values() {
        assert_ulps(1.0, 1.0 + 1e-12, 4, "scalar");
    }

    #[test]
    #[should_panic(expected = "ij component")]
    fn test_matrix_ulps_reports_component() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        let mut off = m;
        off.ij = 3.0 + 1e-9;
        assert_matrix2_ulps(&off, &m, 8);
    }

    #[test]
    #[should_panic(expected = "j component")]
    fn test_vector_close_reports_component() {
        assert_vector3_close(
            &Vector3::new(1.0, 2.0, 3.0),
            &Vector3::new(1.0, 2.5, 3.0),
            1e-3,
        );
    }
}
