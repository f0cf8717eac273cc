use super::{ShapeId, ShapeOps};
use crate::{
    core::{
        math::{Matrix, Vector2},
        traits::Real,
    },
    error::Result,
};
use static_aabb2d_index::AABB;
use std::fmt;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle<T = f64> {
    pub x: T,
    pub y: T,
    pub r: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, r: T) -> Self {
        Circle { x, y, r }
    }

    #[inline]
    pub fn from_center(center: Vector2<T>, r: T) -> Self {
        Circle::new(center.x, center.y, r)
    }
}

impl<T> ShapeOps<T> for Circle<T>
where
    T: Real,
{
    #[inline]
    fn shape_id(&self) -> ShapeId {
        ShapeId::Circle
    }

    #[inline]
    fn center(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    fn set_center(&mut self, center: Vector2<T>) -> &mut Self {
        self.x = center.x;
        self.y = center.y;
        self
    }

    /// Transforms the center and scales the radius.
    ///
    /// Fails with [NonUniformScale](crate::error::GeometryError::NonUniformScale) if `matrix`
    /// scales x and y differently, the circle is left untouched in that case.
    fn apply_transform(&mut self, matrix: &Matrix<T>) -> Result<&mut Self> {
        let scale = matrix.uniform_scale()?;
        let c = matrix.transform_point(self.center());
        self.set_center(c);
        self.r = self.r * scale;
        Ok(self)
    }

    #[inline]
    fn bounding_box(&self) -> AABB<T> {
        AABB::new(
            self.x - self.r,
            self.y - self.r,
            self.x + self.r,
            self.y + self.r,
        )
    }
}

impl<T> fmt::Display for Circle<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({}, {}, {})", self.x, self.y, self.r)
    }
}
