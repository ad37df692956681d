//! Converter and Jacobian traits shared by every coordinate system.
//!
//! A coordinate system is described by two stateless objects:
//!
//! - a [`CoordinateConverter`] mapping positions between Cartesian components
//!   and the system's own coordinates, and
//! - a [`Transformation`] giving the Jacobian ∂(Cartesian)/∂(coordinate) at a
//!   position, used to carry vector quantities (velocities, field vectors)
//!   between the Cartesian basis and the local coordinate basis.
//!
//! A vector quantity in coordinate form uses the same type as a position in
//! that system: a spherical velocity is a
//! [`SphericalVector`](crate::SphericalVector) holding `(dr, dθ, dφ)`.

use crate::{CoordError, CoordResult};
use spacemath_core::{MathResult, Matrix2, Matrix3, Vector2, Vector3};

/// The 2×2 and 3×3 matrices a Jacobian can be expressed in.
pub trait JacobianMatrix: Copy {
    type Vector: Copy;

    /// Inverse of a matrix with mutually orthogonal columns.
    fn invorted(&self) -> MathResult<Self>;

    fn mxv(&self, vector: &Self::Vector) -> Self::Vector;
}

impl JacobianMatrix for Matrix2 {
    type Vector = Vector2;

    fn invorted(&self) -> MathResult<Self> {
        Matrix2::invorted(self)
    }

    fn mxv(&self, vector: &Vector2) -> Vector2 {
        Matrix2::mxv(self, vector)
    }
}

impl JacobianMatrix for Matrix3 {
    type Vector = Vector3;

    fn invorted(&self) -> MathResult<Self> {
        Matrix3::invorted(self)
    }

    fn mxv(&self, vector: &Vector3) -> Vector3 {
        Matrix3::mxv(self, vector)
    }
}

/// A coordinate tuple that can be read as, and built from, plain components.
///
/// Components are in the order of the system's coordinates, e.g.
/// `(radius, colatitude, longitude)` for spherical.
pub trait CoordinateVector: Copy {
    type Components: Copy;

    fn from_components(components: &Self::Components) -> Self;

    fn components(&self) -> Self::Components;
}

/// Maps positions between Cartesian components and a coordinate system.
///
/// `to_cartesian(&to_coordinate(v))` recovers `v` to floating-point precision
/// for every `v` away from the system's origin and poles.
pub trait CoordinateConverter {
    type Cartesian;
    type Coordinate;

    fn to_coordinate(&self, cartesian: &Self::Cartesian) -> Self::Coordinate;

    fn to_cartesian(&self, coordinate: &Self::Coordinate) -> Self::Cartesian;
}

/// A vector quantity expressed either in the Cartesian basis or in the local
/// basis of a coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Velocity<C, K> {
    Cartesian(C),
    Coordinate(K),
}

impl<C, K> Velocity<C, K> {
    pub fn is_cartesian(&self) -> bool {
        matches!(self, Self::Cartesian(_))
    }

    pub fn cartesian(&self) -> CoordResult<&C> {
        match self {
            Self::Cartesian(v) => Ok(v),
            Self::Coordinate(_) => Err(CoordError::invalid_coordinate(
                "velocity is expressed in coordinate form, not Cartesian",
            )),
        }
    }

    pub fn coordinate(&self) -> CoordResult<&K> {
        match self {
            Self::Coordinate(v) => Ok(v),
            Self::Cartesian(_) => Err(CoordError::invalid_coordinate(
                "velocity is expressed in Cartesian form, not coordinate",
            )),
        }
    }
}

/// Jacobian of the Cartesian mapping of a coordinate system.
///
/// The columns of [`get_transformation`](Self::get_transformation) are the
/// partial derivatives of the Cartesian position with respect to each
/// coordinate. Every system provided here has mutually orthogonal columns,
/// so the inverse is taken with `invort`; a zero column marks a point on the
/// polar axis or at the origin.
pub trait Transformation {
    type Matrix: JacobianMatrix;
    type Coordinate: CoordinateVector<Components = <Self::Matrix as JacobianMatrix>::Vector>;

    /// Name used in error messages and logs.
    const NAME: &'static str;

    fn get_transformation(&self, position: &Self::Coordinate) -> Self::Matrix;

    fn get_transformation_into<'a>(
        &self,
        position: &Self::Coordinate,
        buffer: &'a mut Self::Matrix,
    ) -> &'a mut Self::Matrix {
        *buffer = self.get_transformation(position);
        buffer
    }

    /// Rejects positions where the Jacobian is analytically singular.
    ///
    /// The default leaves detection to `invort`, which only catches columns
    /// that are exactly zero. Systems whose singular columns are built from
    /// `sin(π)` or `cos(π/2)` override this, since those are not zero in
    /// floating point.
    fn check_invertible(&self, _position: &Self::Coordinate) -> CoordResult<()> {
        Ok(())
    }

    /// Jacobian of the inverse mapping, ∂(coordinate)/∂(Cartesian).
    fn get_inverse_transformation(
        &self,
        position: &Self::Coordinate,
    ) -> CoordResult<Self::Matrix> {
        self.check_invertible(position)?;
        self.get_transformation(position)
            .invorted()
            .map_err(|err| CoordError::from_inversion(Self::NAME, err))
    }

    fn get_inverse_transformation_into<'a>(
        &self,
        position: &Self::Coordinate,
        buffer: &'a mut Self::Matrix,
    ) -> CoordResult<&'a mut Self::Matrix> {
        *buffer = self.get_inverse_transformation(position)?;
        Ok(buffer)
    }

    /// Carries a coordinate-basis vector into the Cartesian basis using the
    /// forward Jacobian.
    fn mxv_to_cartesian(
        &self,
        jacobian: &Self::Matrix,
        velocity: &Self::Coordinate,
    ) -> <Self::Matrix as JacobianMatrix>::Vector {
        jacobian.mxv(&velocity.components())
    }

    /// Carries a Cartesian vector into the coordinate basis using the
    /// inverse Jacobian.
    fn mxv_to_coordinate(
        &self,
        inverse_jacobian: &Self::Matrix,
        velocity: &<Self::Matrix as JacobianMatrix>::Vector,
    ) -> Self::Coordinate {
        Self::Coordinate::from_components(&inverse_jacobian.mxv(velocity))
    }

    /// Transforms a velocity into the complementary basis.
    ///
    /// `matrix` is the forward Jacobian for a coordinate-form velocity and the
    /// inverse Jacobian for a Cartesian one.
    #[allow(clippy::type_complexity)]
    fn mxv(
        &self,
        matrix: &Self::Matrix,
        velocity: &Velocity<<Self::Matrix as JacobianMatrix>::Vector, Self::Coordinate>,
    ) -> Velocity<<Self::Matrix as JacobianMatrix>::Vector, Self::Coordinate> {
        match velocity {
            Velocity::Coordinate(v) => Velocity::Cartesian(self.mxv_to_cartesian(matrix, v)),
            Velocity::Cartesian(v) => Velocity::Coordinate(self.mxv_to_coordinate(matrix, v)),
        }
    }
}
