use spacemath_core::{MathError, MathErrorKind};
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordError {
    /// The Jacobian at this position is not invertible: the point lies on the
    /// polar axis or at the origin of the coordinate system.
    #[error("Point on axis in {operation}: {message}")]
    PointOnAxis { operation: String, message: String },

    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Core math operation failed: {0}")]
    Core(#[from] MathError),
}

impl CoordError {
    pub fn point_on_axis(operation: &str, reason: &str) -> Self {
        log::debug!("{}: point on axis: {}", operation, reason);
        Self::PointOnAxis {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    /// Classifies an inversion failure of a Jacobian.
    ///
    /// Zero-length and underflowing columns mean the position is singular for
    /// the coordinate system. Anything else (non-finite input) is passed
    /// through as a core error.
    pub fn from_inversion(operation: &str, error: MathError) -> Self {
        match error.kind() {
            Some(MathErrorKind::ZeroLength) | Some(MathErrorKind::Underflow) => {
                Self::point_on_axis(operation, &error.to_string())
            }
            _ => Self::Core(error),
        }
    }

    pub fn is_point_on_axis(&self) -> bool {
        matches!(self, Self::PointOnAxis { .. })
    }
}
