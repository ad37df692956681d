#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

/// Default allowed deviation of a rotation's column norms from 1.
pub const NORM_TOLERANCE: f64 = 1e-4;

/// Default allowed deviation of a rotation's determinant from +1.
pub const DETERMINANT_TOLERANCE: f64 = 1e-4;

/// Default smallest `|det|` accepted by general matrix inversion.
pub const INVERSION_TOLERANCE: f64 = 1e-16;

/// Largest column length whose reciprocal is still taken by `invort`.
pub const INVORT_BOUND: f64 = f64::MAX;

/// Tolerances applied when checking that a matrix is a proper rotation.
///
/// The default matches [`NORM_TOLERANCE`] and [`DETERMINANT_TOLERANCE`].
///
/// ```
/// use spacemath_core::{Matrix3, RotationTolerance};
///
/// let tight = RotationTolerance::new(1e-12, 1e-12);
/// assert!(Matrix3::IDENTITY.is_rotation_with_tolerance(tight));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationTolerance {
    /// Allowed `| |column| - 1 |` for every column.
    pub norm: f64,
    /// Allowed `| det - 1 |` after the columns are unitized.
    pub determinant: f64,
}

impl RotationTolerance {
    pub const fn new(norm: f64, determinant: f64) -> Self {
        Self { norm, determinant }
    }
}

impl Default for RotationTolerance {
    fn default() -> Self {
        Self::new(NORM_TOLERANCE, DETERMINANT_TOLERANCE)
    }
}
