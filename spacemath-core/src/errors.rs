//! Error types for the vector, matrix and rotation kernel.
//!
//! Every fallible operation in this crate returns [`MathResult<T>`]. The error
//! variants follow the failure families of the kernel:
//!
//! | Variant | Raised when | Typical trigger |
//! |---------|-------------|-----------------|
//! | [`InvalidArgument`](MathError::InvalidArgument) | Arguments have the wrong shape | Index out of range, short slice, non-finite input |
//! | [`UnsupportedOperation`](MathError::UnsupportedOperation) | The arithmetic cannot proceed | Unitizing a zero vector, inverting a singular matrix |
//! | [`MalformedRotation`](MathError::MalformedRotation) | A rotation fails its validity check | Non-unit column, determinant far from +1 |
//!
//! None of these are recoverable for the failing call. Callers are expected to
//! avoid the triggering condition (check [`Vector3::length`](crate::Vector3::length)
//! or [`Matrix3::is_rotation`](crate::Matrix3::is_rotation) first) or treat the
//! error as a hard stop of the current computation.
//!
//! ```
//! use spacemath_core::{MathError, MathErrorKind, Vector3};
//!
//! let err = Vector3::ZERO.unitized().unwrap_err();
//! assert!(matches!(
//!     err,
//!     MathError::UnsupportedOperation { kind: MathErrorKind::ZeroLength, .. }
//! ));
//! ```

use thiserror::Error;

/// Classification of an [`UnsupportedOperation`](MathError::UnsupportedOperation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// A vector (or matrix column) has zero length.
    ZeroLength,
    /// A matrix determinant is below the inversion tolerance.
    Singular,
    /// A reciprocal would leave the representable range.
    Underflow,
    /// A result would exceed the representable range.
    Overflow,
    /// A quadratic has no real roots.
    NegativeDiscriminant,
    /// A symmetric-matrix routine received a non-symmetric matrix.
    NotSymmetric,
    /// An equation degenerated to `0 = c`.
    Degenerate,
}

/// Error type for the numeric kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Malformed arguments: wrong shape, out-of-range index, non-finite input.
    #[error("Invalid argument to {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    /// The requested arithmetic cannot be carried out on these operands.
    #[error("Unsupported operation in {operation} ({kind:?}): {message}")]
    UnsupportedOperation {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// A matrix offered as a rotation is not one within tolerance.
    #[error("Malformed rotation in {operation}: {message}")]
    MalformedRotation { operation: String, message: String },
}

/// Convenience alias for `Result<T, MathError>`.
pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(operation: &str, reason: &str) -> Self {
        Self::InvalidArgument {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates an [`UnsupportedOperation`](Self::UnsupportedOperation) error.
    pub fn unsupported(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        log::debug!("{operation} refused ({kind:?}): {reason}");
        Self::UnsupportedOperation {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`MalformedRotation`](Self::MalformedRotation) error.
    pub fn malformed_rotation(operation: &str, reason: &str) -> Self {
        log::debug!("{operation} rejected a non-rotation: {reason}");
        Self::MalformedRotation {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] of an unsupported operation, if this is one.
    pub fn kind(&self) -> Option<MathErrorKind> {
        match self {
            Self::UnsupportedOperation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = MathError::invalid_argument("Vector3::get", "index 3 out of bounds");
        assert_eq!(
            err.to_string(),
            "Invalid argument to Vector3::get: index 3 out of bounds"
        );
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_unsupported_with_kind() {
        let err = MathError::unsupported(
            "Matrix3::invert",
            MathErrorKind::Singular,
            "determinant below tolerance",
        );
        assert!(err.to_string().contains("Unsupported operation"));
        assert!(err.to_string().contains("Singular"));
        assert_eq!(err.kind(), Some(MathErrorKind::Singular));
    }

    #[test]
    fn test_malformed_rotation() {
        let err = MathError::malformed_rotation("RotationMatrix3::from_matrix", "determinant 2");
        assert!(err
            .to_string()
            .contains("Malformed rotation in RotationMatrix3::from_matrix"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<MathError>();
        _assert_sync::<MathError>();
    }
}
