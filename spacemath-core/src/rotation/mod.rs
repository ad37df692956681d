//! Rotation representations and the conversions between them.
//!
//! | Type | Form | Notes |
//! |------|------|-------|
//! | [`RotationMatrix3`](crate::RotationMatrix3) | 3×3 orthonormal matrix | applies to vectors via `mxv` |
//! | [`Quaternion`] | unit `(q0, q1, q2, q3)` | composition by Hamilton product |
//! | [`AxisAndAngle`] | unit axis and angle | identity is axis `K`, angle 0 |
//!
//! Every pair converts with `From`. Matrix to axis-and-angle goes through the
//! quaternion.
//!
//! ```
//! use spacemath_core::{AxisAndAngle, Quaternion, RotationMatrix3, Vector3};
//!
//! let aa = AxisAndAngle::new(&Vector3::new(1.0, 1.0, 1.0), 0.8).unwrap();
//! let r = RotationMatrix3::from(aa);
//! let q = Quaternion::from(r);
//! let back = RotationMatrix3::from(q);
//! assert!(back.max_difference(&r) < 1e-14);
//! ```

mod axis_angle;
mod quaternion;

pub use axis_angle::AxisAndAngle;
pub use quaternion::Quaternion;
