//! 2×2 and 3×3 matrices.
//!
//! - [`Matrix2`]: general 2×2 matrix, symmetric eigen-decomposition
//! - [`Matrix3`]: general 3×3 matrix
//! - [`RotationMatrix3`]: 3×3 matrix checked to be a proper rotation

mod matrix2;
mod matrix3;
mod rotation_matrix;

pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use rotation_matrix::RotationMatrix3;
