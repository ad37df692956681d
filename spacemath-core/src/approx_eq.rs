//! [`approx`] comparisons for the vector, matrix and quaternion types.
//!
//! Enabled by the `approx` feature. Comparison is component-wise with the
//! tolerance applied to each component. Quaternions compare their stored
//! components, so `q` and `-q` (the same rotation) are not equal.

use crate::{Matrix2, Matrix3, Quaternion, RotationMatrix3, Vector2, Vector3};
use approx::{AbsDiffEq, RelativeEq};

macro_rules! impl_componentwise_eq {
    ($ty:ty, |$v:ident| $components:expr) => {
        impl AbsDiffEq for $ty {
            type Epsilon = <f64 as AbsDiffEq>::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let lhs = {
                    let $v = self;
                    $components
                };
                let rhs = {
                    let $v = other;
                    $components
                };
                lhs.iter()
                    .zip(rhs.iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> Self::Epsilon {
                f64::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let lhs = {
                    let $v = self;
                    $components
                };
                let rhs = {
                    let $v = other;
                    $components
                };
                lhs.iter()
                    .zip(rhs.iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

impl_componentwise_eq!(Vector2, |v| [v.i, v.j]);
impl_componentwise_eq!(Vector3, |v| [v.i, v.j, v.k]);
impl_componentwise_eq!(Matrix2, |m| [m.ii, m.ji, m.ij, m.jj]);
impl_componentwise_eq!(Matrix3, |m| [
    m.ii, m.ji, m.ki, m.ij, m.jj, m.kj, m.ik, m.jk, m.kk
]);
impl_componentwise_eq!(RotationMatrix3, |r| [
    r.ii, r.ji, r.ki, r.ij, r.jj, r.kj, r.ik, r.jk, r.kk
]);
impl_componentwise_eq!(Quaternion, |q| q.to_array());
