//! Entities, scene graphs and the camera.
//!
//! A [SceneGraph] owns [Entity] values and answers spatial queries against their world space
//! collidables. Two implementations are provided: [LinearSG] tests every entity and [IndexedSG]
//! narrows the candidates with a bounding box index first. Both return the same ids in the same
//! (insertion) order.

mod camera;
mod entity;
mod flags;
mod graph;
mod indexed_sg;
mod linear_sg;

pub use camera::Camera;
pub use entity::Entity;
pub use flags::{FlagFilter, FlagMatch, QueryTarget};
pub use graph::{EntityId, SceneGraph};
pub use indexed_sg::IndexedSG;
pub use linear_sg::LinearSG;
