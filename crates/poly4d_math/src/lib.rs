//! 4D Mathematics Library
//!
//! Vector, rotation and projection types for the poly4d viewer.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - 3D vector, the projector's output
//! - [`RotationPlane`] / [`RotationAngles`] - the six rotation planes and their angles
//! - [`Rotation4`] - six sequential planar rotations with precomputed sin/cos
//! - [`Projector`] - 4D to 3D perspective projection

mod vec4;
mod vec3;
pub mod rotation;
pub mod projection;

pub use vec4::Vec4;
pub use vec3::Vec3;
pub use rotation::{rotate, wrap_angle, RotationAngles, RotationPlane, Rotation4};
pub use projection::{project, Projector};
