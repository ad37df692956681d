//! 3D Cartesian vectors.
//!
//! [`Vector3`] carries field values, positions and velocities through every
//! computation in the library. Components are named `i`, `j`, `k` after the
//! Cartesian basis vectors they scale.
//!
//! # Read-only and mutable use
//!
//! A `&Vector3` exposes only getters and derived quantities (length, dot
//! product, unit vector, negation, scaled copy). Holding a `&mut Vector3`
//! additionally allows in-place setters such as [`scale`](Vector3::scale),
//! [`unitize`](Vector3::unitize) and [`clear`](Vector3::clear).
//!
//! # Combinators
//!
//! Operations that combine several vectors are associated functions with two
//! forms: one returning a new vector and an `_into` form writing into a caller
//! supplied buffer and returning it, for inner loops that reuse storage.
//!
//! ```
//! use spacemath_core::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(-1.0, 0.5, 2.0);
//!
//! let sum = Vector3::combine(2.0, &a, -1.0, &b);
//! assert_eq!(sum, Vector3::new(3.0, 3.5, 4.0));
//!
//! let mut buffer = Vector3::ZERO;
//! Vector3::cross_into(&a, &b, &mut buffer);
//! assert_eq!(buffer, a.cross(&b));
//! ```
//!
//! # Numerical care
//!
//! [`length`](Vector3::length) divides through by the largest component before
//! squaring so that vectors near the limits of the `f64` range do not overflow
//! or underflow. [`separation`](Vector3::separation) uses a half-angle formula
//! that stays accurate near 0 and π, where `acos` of the dot product loses
//! most of its digits.

use crate::constants::{HALF_PI, PI};
use crate::math::{abs_max3, compute_norm2, compute_norm3};
use crate::{MathError, MathErrorKind, MathResult};
use std::fmt;

/// A 3D Cartesian vector.
///
/// ```
/// use spacemath_core::Vector3;
///
/// let v = Vector3::new(3.0, 4.0, 0.0);
/// assert_eq!(v.length(), 5.0);
///
/// let unit = v.unitized().unwrap();
/// assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONES: Self = Self::new(1.0, 1.0, 1.0);
    pub const I: Self = Self::new(1.0, 0.0, 0.0);
    pub const J: Self = Self::new(0.0, 1.0, 0.0);
    pub const K: Self = Self::new(0.0, 0.0, 1.0);
    pub const MINUS_I: Self = Self::new(-1.0, 0.0, 0.0);
    pub const MINUS_J: Self = Self::new(0.0, -1.0, 0.0);
    pub const MINUS_K: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(i: f64, j: f64, k: f64) -> Self {
        Self { i, j, k }
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.i, self.j, self.k]
    }

    /// Reads three consecutive components starting at `offset`.
    ///
    /// ```
    /// use spacemath_core::Vector3;
    ///
    /// let data = [9.0, 1.0, 2.0, 3.0];
    /// assert_eq!(Vector3::from_slice(&data, 1).unwrap(), Vector3::new(1.0, 2.0, 3.0));
    /// assert!(Vector3::from_slice(&data, 2).is_err());
    /// ```
    pub fn from_slice(data: &[f64], offset: usize) -> MathResult<Self> {
        match data.get(offset..offset.saturating_add(3)) {
            Some(&[i, j, k]) => Ok(Self::new(i, j, k)),
            _ => Err(MathError::invalid_argument(
                "Vector3::from_slice",
                &format!(
                    "need 3 components at offset {}, slice has length {}",
                    offset,
                    data.len()
                ),
            )),
        }
    }

    /// Returns the component at the given index (0=i, 1=j, 2=k).
    ///
    /// For unchecked access use `v[index]` or the public fields.
    pub fn get(&self, index: usize) -> MathResult<f64> {
        match index {
            0 => Ok(self.i),
            1 => Ok(self.j),
            2 => Ok(self.k),
            _ => Err(MathError::invalid_argument(
                "Vector3::get",
                &format!("index {} out of bounds (valid range: 0-2)", index),
            )),
        }
    }

    /// Sets the component at the given index (0=i, 1=j, 2=k).
    pub fn set(&mut self, index: usize, value: f64) -> MathResult<()> {
        match index {
            0 => self.i = value,
            1 => self.j = value,
            2 => self.k = value,
            _ => {
                return Err(MathError::invalid_argument(
                    "Vector3::set",
                    &format!("index {} out of bounds (valid range: 0-2)", index),
                ))
            }
        }
        Ok(())
    }

    /// Euclidean length, exactly 0 for the zero vector.
    #[inline]
    pub fn length(&self) -> f64 {
        compute_norm3(self.i, self.j, self.k)
    }

    /// Largest absolute component.
    #[inline]
    pub fn abs_max_component(&self) -> f64 {
        abs_max3(self.i, self.j, self.k)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.i == 0.0 && self.j == 0.0 && self.k == 0.0
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.i * other.i + self.j * other.j + self.k * other.k
    }

    /// Returns a unit vector in the same direction.
    ///
    /// Fails with [`MathErrorKind::ZeroLength`] for the zero vector.
    pub fn unitized(&self) -> MathResult<Self> {
        let mut unit = *self;
        unit.unitize()?;
        Ok(unit)
    }

    /// Scales this vector to unit length in place.
    pub fn unitize(&mut self) -> MathResult<&mut Self> {
        let length = self.length();
        if length == 0.0 {
            return Err(MathError::unsupported(
                "Vector3::unitize",
                MathErrorKind::ZeroLength,
                "unable to unitize the zero vector",
            ));
        }
        *self /= length;
        Ok(self)
    }

    #[inline]
    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(self.i * scale, self.j * scale, self.k * scale)
    }

    #[inline]
    pub fn scale(&mut self, scale: f64) -> &mut Self {
        self.i *= scale;
        self.j *= scale;
        self.k *= scale;
        self
    }

    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.i, -self.j, -self.k)
    }

    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.scale(-1.0)
    }

    /// Sets every component to zero.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }

    #[inline]
    pub fn set_to(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    #[inline]
    pub fn set_to_scaled(&mut self, scale: f64, other: &Self) -> &mut Self {
        *self = other.scaled(scale);
        self
    }

    #[inline]
    pub fn set_components(&mut self, i: f64, j: f64, k: f64) -> &mut Self {
        *self = Self::new(i, j, k);
        self
    }

    /// Angle in radians between this vector and `other`, in `[0, π]`.
    ///
    /// Computed as `2·asin(|u₁ - u₂| / 2)` when the vectors point into the same
    /// hemisphere and `π - 2·asin(|u₁ + u₂| / 2)` otherwise, where `u₁, u₂` are
    /// the unit vectors.
    ///
    /// ```
    /// use spacemath_core::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let angle = Vector3::I.separation(&Vector3::new(0.0, 5.0, 0.0)).unwrap();
    /// assert_eq!(angle, FRAC_PI_2);
    /// assert!(Vector3::I.separation(&Vector3::ZERO).is_err());
    /// ```
    pub fn separation(&self, other: &Self) -> MathResult<f64> {
        let u1 = self.unitized()?;
        let u2 = other.unitized()?;

        let dot = u1.dot(&u2);
        if dot > 0.0 {
            Ok(2.0 * libm::asin(0.5 * (u1 - u2).length()))
        } else if dot < 0.0 {
            Ok(PI - 2.0 * libm::asin(0.5 * (u1 + u2).length()))
        } else {
            Ok(HALF_PI)
        }
    }

    /// Angle in radians between this vector and the plane with the given
    /// normal, in `[-π/2, π/2]`; positive on the side the normal points to.
    pub fn separation_out_of_plane(&self, normal: &Self) -> MathResult<f64> {
        Ok(HALF_PI - self.separation(normal)?)
    }

    /// Cross product `self × other`.
    ///
    /// ```
    /// use spacemath_core::Vector3;
    ///
    /// assert_eq!(Vector3::I.cross(&Vector3::J), Vector3::K);
    /// ```
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.j * other.k - self.k * other.j,
            self.k * other.i - self.i * other.k,
            self.i * other.j - self.j * other.i,
        )
    }

    pub fn cross_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = a.cross(b);
        buffer
    }

    /// Unit vector along `self × other`.
    ///
    /// Both inputs are scaled by their largest component before crossing, so
    /// the product neither overflows nor underflows. Fails if either input or
    /// the product has zero length.
    pub fn ucross(&self, other: &Self) -> MathResult<Self> {
        const OP: &str = "Vector3::ucross";
        let max_a = self.abs_max_component();
        let max_b = other.abs_max_component();
        if max_a == 0.0 || max_b == 0.0 {
            return Err(MathError::unsupported(
                OP,
                MathErrorKind::ZeroLength,
                "unable to compute the unit cross product with the zero vector",
            ));
        }

        let a = self.scaled(1.0 / max_a);
        let b = other.scaled(1.0 / max_b);
        a.cross(&b).unitized().map_err(|_| {
            MathError::unsupported(
                OP,
                MathErrorKind::ZeroLength,
                "vectors are parallel; the cross product has zero length",
            )
        })
    }

    pub fn ucross_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> MathResult<&'a mut Self> {
        *buffer = a.ucross(b)?;
        Ok(buffer)
    }

    pub fn add_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = *a + *b;
        buffer
    }

    pub fn subtract_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = *a - *b;
        buffer
    }

    /// Linear combination `scale_a·a + scale_b·b`.
    #[inline]
    pub fn combine(scale_a: f64, a: &Self, scale_b: f64, b: &Self) -> Self {
        Self::new(
            scale_a * a.i + scale_b * b.i,
            scale_a * a.j + scale_b * b.j,
            scale_a * a.k + scale_b * b.k,
        )
    }

    pub fn combine_into<'a>(
        scale_a: f64,
        a: &Self,
        scale_b: f64,
        b: &Self,
        buffer: &'a mut Self,
    ) -> &'a mut Self {
        *buffer = Self::combine(scale_a, a, scale_b, b);
        buffer
    }

    /// Linear combination `scale_a·a + scale_b·b + scale_c·c`.
    #[inline]
    pub fn combine3(
        scale_a: f64,
        a: &Self,
        scale_b: f64,
        b: &Self,
        scale_c: f64,
        c: &Self,
    ) -> Self {
        Self::new(
            scale_a * a.i + scale_b * b.i + scale_c * c.i,
            scale_a * a.j + scale_b * b.j + scale_c * c.j,
            scale_a * a.k + scale_b * b.k + scale_c * c.k,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn combine3_into<'a>(
        scale_a: f64,
        a: &Self,
        scale_b: f64,
        b: &Self,
        scale_c: f64,
        c: &Self,
        buffer: &'a mut Self,
    ) -> &'a mut Self {
        *buffer = Self::combine3(scale_a, a, scale_b, b, scale_c, c);
        buffer
    }

    /// Orthogonal projection of `vector` onto `onto`.
    ///
    /// Both vectors are scaled by their largest component first. Projecting the
    /// zero vector yields zero; projecting onto the zero vector fails.
    ///
    /// ```
    /// use spacemath_core::Vector3;
    ///
    /// let onto = Vector3::new(0.0, 0.0, 7.0);
    /// let p = Vector3::project(&Vector3::new(2.0, 3.0, 4.0), &onto).unwrap();
    /// assert_eq!(p, Vector3::new(0.0, 0.0, 4.0));
    /// ```
    pub fn project(vector: &Self, onto: &Self) -> MathResult<Self> {
        let max_onto = onto.abs_max_component();
        if max_onto == 0.0 {
            return Err(MathError::unsupported(
                "Vector3::project",
                MathErrorKind::ZeroLength,
                "unable to project onto the zero vector",
            ));
        }

        let max_vector = vector.abs_max_component();
        if max_vector == 0.0 {
            return Ok(Self::ZERO);
        }

        let r = onto.scaled(1.0 / max_onto);
        let t = vector.scaled(1.0 / max_vector);
        let scale = t.dot(&r) * max_vector / r.dot(&r);
        Ok(r.scaled(scale))
    }

    pub fn project_into<'a>(
        vector: &Self,
        onto: &Self,
        buffer: &'a mut Self,
    ) -> MathResult<&'a mut Self> {
        *buffer = Self::project(vector, onto)?;
        Ok(buffer)
    }

    /// Projection of `vector` onto the plane through the origin with the
    /// given normal. Fails if the normal has zero length.
    pub fn project_onto_plane(vector: &Self, normal: &Self) -> MathResult<Self> {
        let along = Self::project(vector, normal)?;
        Ok(*vector - along)
    }

    pub fn project_onto_plane_into<'a>(
        vector: &Self,
        normal: &Self,
        buffer: &'a mut Self,
    ) -> MathResult<&'a mut Self> {
        *buffer = Self::project_onto_plane(vector, normal)?;
        Ok(buffer)
    }

    /// Sum of every vector in `vectors`; zero for an empty slice.
    pub fn add_all(vectors: &[Self]) -> Self {
        vectors.iter().fold(Self::ZERO, |acc, v| acc + *v)
    }

    pub fn add_all_into<'a>(vectors: &[Self], buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::add_all(vectors);
        buffer
    }

    /// Component-wise root-sum-square: `(√(a.i² + b.i²), √(a.j² + b.j²), √(a.k² + b.k²))`.
    pub fn add_rss(a: &Self, b: &Self) -> Self {
        Self::new(
            compute_norm2(a.i, b.i),
            compute_norm2(a.j, b.j),
            compute_norm2(a.k, b.k),
        )
    }

    pub fn add_rss_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::add_rss(a, b);
        buffer
    }

    /// Rotates `vector` about `axis` by `angle` radians (right-hand rule).
    ///
    /// The vector is split into components parallel and perpendicular to the
    /// unit axis `x`; the result is `p + cos(angle)·v⊥ + sin(angle)·(x × v⊥)`.
    /// Fails if `axis` has zero length.
    ///
    /// ```
    /// use spacemath_core::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let r = Vector3::rotate(&Vector3::I, &Vector3::K, FRAC_PI_2).unwrap();
    /// assert!(r.i.abs() < 1e-15);
    /// assert!((r.j - 1.0).abs() < 1e-15);
    /// ```
    pub fn rotate(vector: &Self, axis: &Self, angle: f64) -> MathResult<Self> {
        let x = axis.unitized().map_err(|_| {
            MathError::unsupported(
                "Vector3::rotate",
                MathErrorKind::ZeroLength,
                "rotation axis has zero length",
            )
        })?;
        Ok(Self::rotate_about_unit_axis(vector, &x, angle))
    }

    /// [`rotate`](Self::rotate) for an axis already known to be unit length.
    pub(crate) fn rotate_about_unit_axis(vector: &Self, x: &Self, angle: f64) -> Self {
        let parallel = x.scaled(vector.dot(x));
        let perpendicular = *vector - parallel;
        let normal = x.cross(&perpendicular);
        let (s, c) = libm::sincos(angle);

        Self::combine3(1.0, &parallel, c, &perpendicular, s, &normal)
    }

    pub fn rotate_into<'a>(
        vector: &Self,
        axis: &Self,
        angle: f64,
        buffer: &'a mut Self,
    ) -> MathResult<&'a mut Self> {
        *buffer = Self::rotate(vector, axis, angle)?;
        Ok(buffer)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.j += rhs.j;
        self.k += rhs.k;
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl std::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.i -= rhs.i;
        self.j -= rhs.j;
        self.k -= rhs.k;
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scaled(scalar)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec.scaled(self)
    }
}

impl std::ops::MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.scale(scalar);
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.i / scalar, self.j / scalar, self.k / scalar)
    }
}

impl std::ops::DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, scalar: f64) {
        self.i /= scalar;
        self.j /= scalar;
        self.k /= scalar;
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.i,
            1 => &self.j,
            2 => &self.k,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.i,
            1 => &mut self.j,
            2 => &mut self.k,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.16e}, {:.16e}, {:.16e}]", self.i, self.j, self.k)
    }
}
