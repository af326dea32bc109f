//! Math primitives for the FXAA demo
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`mat4::Mat4`] - column-major 4x4 matrix and camera helpers

mod vec3;
pub mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;
