use spacemath_core::collections::search::{first_greater_than, last_less_than_or_equal_to};
use spacemath_core::test_helpers::{
    assert_matrix3_close, assert_vector2_close, assert_vector3_close,
};
use spacemath_core::{MathErrorKind, Matrix2, Matrix3, Vector2, Vector3};

const SAMPLE: [[f64; 3]; 3] = [[2.0, -1.0, 0.5], [0.25, 3.0, 1.0], [-1.5, 0.0, 4.0]];

#[test]
fn test_invert_twice_recovers_matrix() {
    let m = Matrix3::from_array(SAMPLE);
    let mut twice = m;
    twice.invert().unwrap().invert().unwrap();
    assert_matrix3_close(&twice, &m, 1e-14);
}

#[test]
fn test_mxv_then_inverse_recovers_vector() {
    let m = Matrix3::from_array(SAMPLE);
    let v = Vector3::new(0.3, -7.0, 2.5);
    let w = m.mxv(&v);
    let back = m.inverse().unwrap().mxv(&w);
    assert_vector3_close(&back, &v, 1e-13);
}

#[test]
fn test_mtxv_is_transpose_product() {
    let m = Matrix3::from_array(SAMPLE);
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(m.mtxv(&v), m.transpose().mxv(&v));
}

#[test]
fn test_invort_matches_inverse_for_orthogonal_columns() {
    let m = Matrix3::from_columns(
        &Vector3::new(1.0, 1.0, 0.0),
        &Vector3::new(-2.0, 2.0, 0.0),
        &Vector3::new(0.0, 0.0, 0.5),
    );
    assert_matrix3_close(&m.invorted().unwrap(), &m.inverse().unwrap(), 1e-15);
}

#[test]
fn test_singular_matrix_errors() {
    let m = Matrix3::from_array([[1.0, 2.0, 4.0], [2.0, 4.0, 8.0], [0.0, 1.0, 1.0]]);
    assert_eq!(m.inverse().unwrap_err().kind(), Some(MathErrorKind::Singular));

    let zero_column = Matrix3::from_columns(&Vector3::I, &Vector3::ZERO, &Vector3::K);
    assert_eq!(
        zero_column.invorted().unwrap_err().kind(),
        Some(MathErrorKind::ZeroLength)
    );
}

#[test]
fn test_symmetric_diagonalization_reconstructs() {
    let m = Matrix2::new(4.0, 1.5, 1.5, -2.0);
    let (values, vectors) = Matrix2::diagonalize_symmetric(&m).unwrap();

    for (column, value) in [vectors.ith_column(), vectors.jth_column()].iter().zip(values) {
        assert_vector2_close(&m.mxv(column), &column.scaled(value), 1e-13);
    }
    assert!(vectors.is_rotation());
    assert_vector2_close(
        &Vector2::new(values[0] + values[1], values[0] * values[1]),
        &Vector2::new(m.trace(), m.determinant()),
        1e-13,
    );
}

#[test]
fn test_table_lookup_brackets_key() {
    let epochs = [0.0, 10.0, 20.0, 20.0, 35.0];
    let i = last_less_than_or_equal_to(&epochs, &27.0).unwrap();
    let j = first_greater_than(&epochs, &27.0);
    assert_eq!((i, j), (3, 4));
    assert!(epochs[i] <= 27.0 && 27.0 < epochs[j]);
}
