//! Core math types and free functions for working with angles, points and affine transforms.
mod base_math;
mod matrix;
mod vector2;

pub use base_math::*;
pub use matrix::Matrix;
pub use vector2::{vec2, Vector2};
