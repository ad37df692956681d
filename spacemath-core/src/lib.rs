//! Vector, matrix and rotation kernel for space-physics computations.
//!
//! `spacemath-core` provides the numeric building blocks that field models and
//! geometry code are written against: 2D/3D vectors, general 2×2/3×3 matrices,
//! checked rotation matrices, quaternions and axis-angle rotations, plus the
//! search helpers used by tabulated data.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vector`] | [`Vector2`], [`Vector3`] |
//! | [`matrix`] | [`Matrix2`], [`Matrix3`], [`RotationMatrix3`] |
//! | [`rotation`] | [`Quaternion`], [`AxisAndAngle`] and conversions |
//! | [`collections`] | Bracketing searches over sorted slices |
//! | [`math`] | Scaled norms and determinants, rotation checks, quadratic solver |
//! | [`constants`] | π multiples, default tolerances, [`RotationTolerance`] |
//! | [`utils`] | Angle wrapping |
//! | [`errors`] | [`MathError`], [`MathErrorKind`] and [`MathResult`] |
//!
//! # Re-exports
//!
//! ```
//! use spacemath_core::{Vector2, Vector3, Matrix2, Matrix3, RotationMatrix3};
//! use spacemath_core::{AxisAndAngle, Quaternion};
//! use spacemath_core::{MathError, MathErrorKind, MathResult, RotationTolerance};
//! ```
//!
//! # Design Notes
//!
//! - **Read-only and mutable use**: a `&Vector3` or `&Matrix3` only offers
//!   queries and value-returning operations; setters and in-place forms
//!   (`scale`, `unitize`, `transpose_mut`, `invert`) need `&mut`.
//!   [`RotationMatrix3`] goes further and keeps its storage private, so it can
//!   only change through validated or rotation-preserving paths.
//!
//! - **Buffers**: operations combining several operands are associated
//!   functions with a value form and an `_into` form that writes into a
//!   caller supplied buffer and returns it.
//!
//! - **Radians internally**: every angle in the API is in radians.
//!
//! - **Optional features**: `serde` derives serialization for all value types
//!   (rotation types deserialize through their validating constructors);
//!   `approx` implements `AbsDiffEq`/`RelativeEq` for vectors, matrices and
//!   quaternions.

pub mod collections;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod rotation;
pub mod utils;
pub mod vector;

#[cfg(any(test, feature = "approx"))]
mod approx_eq;

pub use constants::RotationTolerance;
pub use errors::{MathError, MathErrorKind, MathResult};
pub use matrix::{Matrix2, Matrix3, RotationMatrix3};
pub use rotation::{AxisAndAngle, Quaternion};
pub use vector::{Vector2, Vector3};

pub mod test_helpers;
