//! Immutable free vectors in the plane and in space, anchored at an initial
//! point, with products, angles and rotations.

#[macro_use]
mod macros;

pub mod angle;
pub mod error;
pub mod num;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use error::{Result, VectorError};
pub use num::Float;
pub use vector::{FreeVector, Vector2d, Vector3d};
