//! 2D geometry kernel and scene graph for simple games.
//!
//! - [core]: the numeric traits, [Vector2](core::math::Vector2), the affine
//!   [Matrix](core::math::Matrix) and the [EventDelegate](core::event::EventDelegate) used to
//!   announce changes.
//! - [shape]: vectors (points), circles, axis aligned rectangles and convex polygons.
//! - [intersect]: boolean intersection tests and minimum translation vectors (separating axis
//!   theorem) for every pair of shapes.
//! - [scene]: entities, scene graphs answering spatial queries and a headless camera.
//!
//! All math is y-up and angles are radians, positive counter clockwise.
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod core;
pub mod error;
pub mod intersect;
pub mod scene;
pub mod shape;

pub use static_aabb2d_index::AABB;
