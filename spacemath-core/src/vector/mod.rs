//! 2D and 3D Cartesian vectors.
//!
//! - [`Vector2`]: planar vector
//! - [`Vector3`]: spatial vector, with cross products and axis rotation

mod vector2;
mod vector3;

pub use vector2::Vector2;
pub use vector3::Vector3;
