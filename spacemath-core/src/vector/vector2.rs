//! 2D Cartesian vectors.
//!
//! [`Vector2`] is the planar counterpart of [`Vector3`](crate::Vector3) and
//! follows the same conventions: `&Vector2` for read-only use, `&mut Vector2`
//! for in-place mutation, and associated combinators with an `_into` buffer
//! form.

use crate::constants::{HALF_PI, PI};
use crate::math::{abs_max2, compute_norm2};
use crate::{MathError, MathErrorKind, MathResult};
use std::fmt;

/// A 2D Cartesian vector with components `i` and `j`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub i: f64,
    pub j: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONES: Self = Self::new(1.0, 1.0);
    pub const I: Self = Self::new(1.0, 0.0);
    pub const J: Self = Self::new(0.0, 1.0);
    pub const MINUS_I: Self = Self::new(-1.0, 0.0);
    pub const MINUS_J: Self = Self::new(0.0, -1.0);

    #[inline]
    pub const fn new(i: f64, j: f64) -> Self {
        Self { i, j }
    }

    #[inline]
    pub fn from_array(arr: [f64; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        [self.i, self.j]
    }

    /// Reads two consecutive components starting at `offset`.
    pub fn from_slice(data: &[f64], offset: usize) -> MathResult<Self> {
        match data.get(offset..offset.saturating_add(2)) {
            Some(&[i, j]) => Ok(Self::new(i, j)),
            _ => Err(MathError::invalid_argument(
                "Vector2::from_slice",
                &format!(
                    "need 2 components at offset {}, slice has length {}",
                    offset,
                    data.len()
                ),
            )),
        }
    }

    pub fn get(&self, index: usize) -> MathResult<f64> {
        match index {
            0 => Ok(self.i),
            1 => Ok(self.j),
            _ => Err(MathError::invalid_argument(
                "Vector2::get",
                &format!("index {} out of bounds (valid range: 0-1)", index),
            )),
        }
    }

    pub fn set(&mut self, index: usize, value: f64) -> MathResult<()> {
        match index {
            0 => self.i = value,
            1 => self.j = value,
            _ => {
                return Err(MathError::invalid_argument(
                    "Vector2::set",
                    &format!("index {} out of bounds (valid range: 0-1)", index),
                ))
            }
        }
        Ok(())
    }

    /// Euclidean length, exactly 0 for the zero vector.
    #[inline]
    pub fn length(&self) -> f64 {
        compute_norm2(self.i, self.j)
    }

    #[inline]
    pub fn abs_max_component(&self) -> f64 {
        abs_max2(self.i, self.j)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.i == 0.0 && self.j == 0.0
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.i * other.i + self.j * other.j
    }

    pub fn unitized(&self) -> MathResult<Self> {
        let mut unit = *self;
        unit.unitize()?;
        Ok(unit)
    }

    pub fn unitize(&mut self) -> MathResult<&mut Self> {
        let length = self.length();
        if length == 0.0 {
            return Err(MathError::unsupported(
                "Vector2::unitize",
                MathErrorKind::ZeroLength,
                "unable to unitize the zero vector",
            ));
        }
        *self /= length;
        Ok(self)
    }

    #[inline]
    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(self.i * scale, self.j * scale)
    }

    #[inline]
    pub fn scale(&mut self, scale: f64) -> &mut Self {
        self.i *= scale;
        self.j *= scale;
        self
    }

    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.i, -self.j)
    }

    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.scale(-1.0)
    }

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
    pub fn set_components(&mut self, i: f64, j: f64) -> &mut Self {
        *self = Self::new(i, j);
        self
    }

    /// Angle in radians between the two vectors, in `[0, π]`.
    ///
    /// Uses the same half-angle formulation as
    /// [`Vector3::separation`](crate::Vector3::separation).
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

    pub fn add_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = *a + *b;
        buffer
    }

    pub fn subtract_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = *a - *b;
        buffer
    }

    #[inline]
    pub fn combine(scale_a: f64, a: &Self, scale_b: f64, b: &Self) -> Self {
        Self::new(
            scale_a * a.i + scale_b * b.i,
            scale_a * a.j + scale_b * b.j,
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

    /// Orthogonal projection of `vector` onto `onto`; fails if `onto` is zero.
    pub fn project(vector: &Self, onto: &Self) -> MathResult<Self> {
        let max_onto = onto.abs_max_component();
        if max_onto == 0.0 {
            return Err(MathError::unsupported(
                "Vector2::project",
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

    /// Component of `vector` perpendicular to the line through the origin along
    /// `direction`. Fails if `direction` is zero.
    pub fn project_onto_line(vector: &Self, direction: &Self) -> MathResult<Self> {
        let along = Self::project(vector, direction)?;
        Ok(*vector - along)
    }

    pub fn add_all(vectors: &[Self]) -> Self {
        vectors.iter().fold(Self::ZERO, |acc, v| acc + *v)
    }

    pub fn add_all_into<'a>(vectors: &[Self], buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::add_all(vectors);
        buffer
    }

    /// Component-wise root-sum-square of `a` and `b`.
    pub fn add_rss(a: &Self, b: &Self) -> Self {
        Self::new(compute_norm2(a.i, b.i), compute_norm2(a.j, b.j))
    }

    pub fn add_rss_into<'a>(a: &Self, b: &Self, buffer: &'a mut Self) -> &'a mut Self {
        *buffer = Self::add_rss(a, b);
        buffer
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(arr: [f64; 2]) -> Self {
        Self::from_array(arr)
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.i + rhs.i, self.j + rhs.j)
    }
}

impl std::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.j += rhs.j;
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.i - rhs.i, self.j - rhs.j)
    }
}

impl std::ops::SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.i -= rhs.i;
        self.j -= rhs.j;
    }
}

impl std::ops::Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scaled(scalar)
    }
}

impl std::ops::Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, vec: Vector2) -> Vector2 {
        vec.scaled(self)
    }
}

impl std::ops::Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.i / scalar, self.j / scalar)
    }
}

impl std::ops::DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, scalar: f64) {
        self.i /= scalar;
        self.j /= scalar;
    }
}

impl std::ops::Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::ops::Index<usize> for Vector2 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.i,
            1 => &self.j,
            _ => panic!("Vector2 index out of bounds: {}", index),
        }
    }
}

impl std::ops::IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.i,
            1 => &mut self.j,
            _ => panic!("Vector2 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.16e}, {:.16e}]", self.i, self.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_from_slice() {
        let data = [0.0, 5.0, 6.0];
        assert_eq!(Vector2::from_slice(&data, 1).unwrap(), Vector2::new(5.0, 6.0));
        assert!(Vector2::from_slice(&data, 2).is_err());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v.get(1).unwrap(), 2.0);
        assert!(v.get(2).is_err());
        v.set(0, -1.0).unwrap();
        assert_eq!(v.i, -1.0);
        assert!(v.set(2, 0.0).is_err());
    }

    #[test]
    fn test_length_and_unitize() {
        let v = Vector2::new(-3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.unitized().unwrap(), Vector2::new(-0.6, 0.8));
        assert!(Vector2::ZERO.unitized().is_err());
    }

    #[test]
    fn test_separation() {
        let a = Vector2::new(2.0, 2.0);
        assert_abs_diff_eq!(a.separation(&Vector2::J).unwrap(), FRAC_PI_4, epsilon = 1e-15);
        assert_eq!(Vector2::I.separation(&Vector2::MINUS_J).unwrap(), HALF_PI);
        assert_abs_diff_eq!(Vector2::I.separation(&Vector2::MINUS_I).unwrap(), PI, epsilon = 1e-15);
        assert!(a.separation(&Vector2::ZERO).is_err());
    }

    #[test]
    fn test_project_and_line() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(Vector2::project(&v, &Vector2::new(0.0, 2.0)).unwrap(), Vector2::new(0.0, 4.0));
        assert_eq!(
            Vector2::project_onto_line(&v, &Vector2::new(0.0, 2.0)).unwrap(),
            Vector2::new(3.0, 0.0)
        );
        assert!(Vector2::project(&v, &Vector2::ZERO).is_err());
        assert_eq!(Vector2::project(&Vector2::ZERO, &v).unwrap(), Vector2::ZERO);
    }

    #[test]
    fn test_combinators() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(Vector2::combine(2.0, &a, 1.0, &b), Vector2::new(5.0, 3.0));
        assert_eq!(
            Vector2::combine3(1.0, &a, 1.0, &b, -1.0, &Vector2::ONES),
            Vector2::new(3.0, 0.0)
        );
        assert_eq!(Vector2::add_all(&[a, b, a]), Vector2::new(5.0, 3.0));
        assert_eq!(
            Vector2::add_rss(&Vector2::new(3.0, 6.0), &Vector2::new(4.0, 8.0)),
            Vector2::new(5.0, 10.0)
        );

        let mut buffer = Vector2::ZERO;
        Vector2::subtract_into(&a, &b, &mut buffer);
        assert_eq!(buffer, Vector2::new(-2.0, 3.0));
    }

    #[test]
    fn test_mutators() {
        let mut v = Vector2::new(1.0, -1.0);
        v.scale(3.0).negate();
        assert_eq!(v, Vector2::new(-3.0, 3.0));
        v.clear();
        assert!(v.is_zero());
    }
}
