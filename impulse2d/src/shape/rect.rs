use super::{ShapeId, ShapeOps};
use crate::{
    core::{
        math::{min_max, Matrix, Vector2},
        traits::Real,
    },
    error::Result,
};
use static_aabb2d_index::AABB;
use std::fmt;

/// Axis aligned rectangle.
///
/// `(x, y)` is the top left corner and the height extends downward (y up), so the center is
/// `(x + w / 2, y - h / 2)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect<T = f64> {
    pub x: T,
    pub y: T,
    pub w: T,
    pub h: T,
}

impl<T> Rect<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, w: T, h: T) -> Self {
        Rect { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> T {
        self.x
    }

    #[inline]
    pub fn right(&self) -> T {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> T {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.y - self.h
    }

    /// Corners in the order top left, top right, bottom right, bottom left.
    pub fn vertices(&self) -> [Vector2<T>; 4] {
        [
            Vector2::new(self.left(), self.top()),
            Vector2::new(self.right(), self.top()),
            Vector2::new(self.right(), self.bottom()),
            Vector2::new(self.left(), self.bottom()),
        ]
    }
}

impl<T> ShapeOps<T> for Rect<T>
where
    T: Real,
{
    #[inline]
    fn shape_id(&self) -> ShapeId {
        ShapeId::Rect
    }

    #[inline]
    fn center(&self) -> Vector2<T> {
        Vector2::new(self.x + self.w * T::half(), self.y - self.h * T::half())
    }

    #[inline]
    fn set_center(&mut self, center: Vector2<T>) -> &mut Self {
        self.x = center.x - self.w * T::half();
        self.y = center.y + self.h * T::half();
        self
    }

    /// Moves the center through `matrix` and scales the width and height by the matrix scale
    /// factors. Rotation is dropped, the rect stays axis aligned.
    fn apply_transform(&mut self, matrix: &Matrix<T>) -> Result<&mut Self> {
        let c = matrix.transform_point(self.center());
        let scale = matrix.scale_factors();
        self.w = self.w * scale.x;
        self.h = self.h * scale.y;
        self.set_center(c);
        Ok(self)
    }

    fn bounding_box(&self) -> AABB<T> {
        let (min_x, max_x) = min_max(self.left(), self.right());
        let (min_y, max_y) = min_max(self.bottom(), self.top());
        AABB::new(min_x, min_y, max_x, max_y)
    }
}

impl<T> fmt::Display for Rect<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {}, {}, {})", self.x, self.y, self.w, self.h)
    }
}
