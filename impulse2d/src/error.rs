//! Error type shared by shape construction, transforms and scene graph queries.

use crate::scene::EntityId;
use thiserror::Error;

/// Result type for fallible geometry and scene graph operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors raised by the geometry kernel and scene graphs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A polygon needs at least 3 vertices.
    #[error("cannot construct polygon with {vertex_count} vertices, at least 3 are required")]
    InvalidShape { vertex_count: usize },

    /// Slice constructor received the wrong number of values.
    #[error("expected {expected} values, found {found}")]
    InvalidArguments { expected: usize, found: usize },

    /// Circles cannot represent ellipses.
    #[error("non-uniform scaling ({x}, {y}) cannot be applied to a circle")]
    NonUniformScale { x: f64, y: f64 },

    /// A transform with a zero determinant had to be inverted.
    #[error("matrix is not invertible")]
    SingularMatrix,

    /// Query variant not supported by this scene graph implementation.
    #[error("{0} is not implemented by this scene graph")]
    NotImplemented(&'static str),

    /// Raw shape id outside the known variants.
    #[error("unknown shape id {0}")]
    UnknownShapeId(u8),

    /// Entity id not stored in the scene graph.
    #[error("entity {0} is not part of this scene graph")]
    UnknownEntity(EntityId),

    /// Parent chain of the entity loops back on itself.
    #[error("parent chain of entity {0} contains a cycle")]
    ParentCycle(EntityId),

    /// Broad phase index could not be built.
    #[error("failed to build spatial index: {0}")]
    SpatialIndex(String),
}
