//! Shape primitives and the closed [Shape] sum type the intersection routines dispatch on.

mod circle;
mod polygon;
mod rect;

pub use circle::Circle;
pub use polygon::Polygon;
pub use rect::Rect;

use crate::{
    core::{
        math::{Matrix, Vector2},
        traits::Real,
    },
    error::{GeometryError, Result},
};
use static_aabb2d_index::AABB;
use std::fmt;

/// Stable numeric id of each shape variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeId {
    Circle = 0,
    Polygon = 1,
    Rect = 2,
    Vector = 3,
}

impl TryFrom<u8> for ShapeId {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ShapeId::Circle),
            1 => Ok(ShapeId::Polygon),
            2 => Ok(ShapeId::Rect),
            3 => Ok(ShapeId::Vector),
            _ => Err(GeometryError::UnknownShapeId(value)),
        }
    }
}

impl From<ShapeId> for u8 {
    #[inline]
    fn from(id: ShapeId) -> Self {
        id as u8
    }
}

/// Capability set shared by every shape.
///
/// Equality (through the `PartialEq` supertrait) is exact numeric equality of the defining
/// fields.
pub trait ShapeOps<T>: Clone + PartialEq + fmt::Display
where
    T: Real,
{
    fn shape_id(&self) -> ShapeId;

    fn center(&self) -> Vector2<T>;

    /// Move the shape so its center is at `center`, keeping its extents.
    fn set_center(&mut self, center: Vector2<T>) -> &mut Self;

    #[inline]
    fn set_center_xy(&mut self, x: T, y: T) -> &mut Self {
        self.set_center(Vector2::new(x, y))
    }

    /// Transform the shape in place by `matrix`.
    ///
    /// Fails without modifying the shape if the shape cannot represent the transformed result.
    fn apply_transform(&mut self, matrix: &Matrix<T>) -> Result<&mut Self>;

    /// Axis aligned bounding box.
    fn bounding_box(&self) -> AABB<T>;
}

impl<T> ShapeOps<T> for Vector2<T>
where
    T: Real,
{
    #[inline]
    fn shape_id(&self) -> ShapeId {
        ShapeId::Vector
    }

    #[inline]
    fn center(&self) -> Vector2<T> {
        *self
    }

    #[inline]
    fn set_center(&mut self, center: Vector2<T>) -> &mut Self {
        *self = center;
        self
    }

    #[inline]
    fn apply_transform(&mut self, matrix: &Matrix<T>) -> Result<&mut Self> {
        *self = matrix.transform_point(*self);
        Ok(self)
    }

    #[inline]
    fn bounding_box(&self) -> AABB<T> {
        AABB::new(self.x, self.y, self.x, self.y)
    }
}

/// Any shape the intersection routines understand.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<T = f64> {
    Vector(Vector2<T>),
    Circle(Circle<T>),
    Rect(Rect<T>),
    Polygon(Polygon<T>),
}

impl<T> ShapeOps<T> for Shape<T>
where
    T: Real,
{
    fn shape_id(&self) -> ShapeId {
        match self {
            Shape::Vector(v) => v.shape_id(),
            Shape::Circle(c) => c.shape_id(),
            Shape::Rect(r) => r.shape_id(),
            Shape::Polygon(p) => p.shape_id(),
        }
    }

    fn center(&self) -> Vector2<T> {
        match self {
            Shape::Vector(v) => v.center(),
            Shape::Circle(c) => c.center(),
            Shape::Rect(r) => r.center(),
            Shape::Polygon(p) => p.center(),
        }
    }

    fn set_center(&mut self, center: Vector2<T>) -> &mut Self {
        match self {
            Shape::Vector(v) => {
                v.set_center(center);
            }
            Shape::Circle(c) => {
                c.set_center(center);
            }
            Shape::Rect(r) => {
                r.set_center(center);
            }
            Shape::Polygon(p) => {
                p.set_center(center);
            }
        }
        self
    }

    fn apply_transform(&mut self, matrix: &Matrix<T>) -> Result<&mut Self> {
        match self {
            Shape::Vector(v) => {
                v.apply_transform(matrix)?;
            }
            Shape::Circle(c) => {
                c.apply_transform(matrix)?;
            }
            Shape::Rect(r) => {
                r.apply_transform(matrix)?;
            }
            Shape::Polygon(p) => {
                p.apply_transform(matrix)?;
            }
        }
        Ok(self)
    }

    fn bounding_box(&self) -> AABB<T> {
        match self {
            Shape::Vector(v) => v.bounding_box(),
            Shape::Circle(c) => c.bounding_box(),
            Shape::Rect(r) => r.bounding_box(),
            Shape::Polygon(p) => p.bounding_box(),
        }
    }
}

impl<T> fmt::Display for Shape<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Vector(v) => fmt::Display::fmt(v, f),
            Shape::Circle(c) => fmt::Display::fmt(c, f),
            Shape::Rect(r) => fmt::Display::fmt(r, f),
            Shape::Polygon(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl<T> From<Vector2<T>> for Shape<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Shape::Vector(v)
    }
}

impl<T> From<Circle<T>> for Shape<T> {
    #[inline]
    fn from(c: Circle<T>) -> Self {
        Shape::Circle(c)
    }
}

impl<T> From<Rect<T>> for Shape<T> {
    #[inline]
    fn from(r: Rect<T>) -> Self {
        Shape::Rect(r)
    }
}

impl<T> From<Polygon<T>> for Shape<T> {
    #[inline]
    fn from(p: Polygon<T>) -> Self {
        Shape::Polygon(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn shape_id_round_trip() {
        for raw in 0u8..4 {
            let id = ShapeId::try_from(raw).unwrap();
            assert_eq!(u8::from(id), raw);
        }
        assert_eq!(ShapeId::try_from(4), Err(GeometryError::UnknownShapeId(4)));
    }

    #[test]
    fn variants_never_equal() {
        let point: Shape = vec2(1.0, 1.0).into();
        let circle: Shape = Circle::new(1.0, 1.0, 0.0).into();
        assert_ne!(point, circle);
        assert_eq!(point.center(), circle.center());
    }

    #[test]
    fn vector_as_shape() {
        let mut v = vec2(1.0, 2.0);
        v.apply_transform(&Matrix::from_translation(1.0, 1.0)).unwrap();
        assert_eq!(v, vec2(2.0, 3.0));
        v.set_center_xy(5.0, 5.0);
        assert_eq!(v.center(), vec2(5.0, 5.0));
        assert_eq!(v.shape_id(), ShapeId::Vector);
    }
}
