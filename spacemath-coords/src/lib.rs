//! Coordinate systems for `spacemath`.
//!
//! Converters between Cartesian components and polar, cylindrical, spherical,
//! latitudinal and right-ascension/declination coordinates, together with the
//! Jacobians that carry vector quantities between the Cartesian basis and each
//! system's local basis.
//!
//! ```
//! use spacemath_coords::{
//!     CoordinateConverter, SphericalConverter, SphericalTransformation, Transformation,
//! };
//! use spacemath_core::Vector3;
//!
//! let position = SphericalConverter.to_coordinate(&Vector3::new(1.0, 1.0, 1.0));
//! let jacobian = SphericalTransformation.get_transformation(&position);
//! let inverse = SphericalTransformation.get_inverse_transformation(&position).unwrap();
//!
//! // radial unit velocity in Cartesian form, and back
//! let radial = Vector3::new(1.0, 1.0, 1.0).unitized().unwrap();
//! let local = SphericalTransformation.mxv_to_coordinate(&inverse, &radial);
//! assert!((local.radius() - 1.0).abs() < 1e-15);
//! let cartesian = SphericalTransformation.mxv_to_cartesian(&jacobian, &local);
//! assert!((cartesian - radial).length() < 1e-15);
//! ```

pub mod errors;
pub mod systems;
pub mod transforms;

pub use errors::{CoordError, CoordResult};
pub use systems::{
    CylindricalConverter, CylindricalTransformation, CylindricalVector, LatitudinalConverter,
    LatitudinalTransformation, LatitudinalVector, PolarConverter, PolarTransformation,
    PolarVector, RaDecConverter, RaDecTransformation, RaDecVector, SphericalConverter,
    SphericalTransformation, SphericalVector,
};
pub use transforms::{
    CoordinateConverter, CoordinateVector, JacobianMatrix, Transformation, Velocity,
};
