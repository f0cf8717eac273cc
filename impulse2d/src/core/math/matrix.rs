use super::{vec2, Vector2};
use crate::{
    core::traits::Real,
    error::{GeometryError, Result},
};
use std::fmt;

/// 2D affine transform.
///
/// The matrix is 3x3 with the last row fixed to `[0, 0, 1]`, in the same layout as the canvas
/// `transform()` arguments:
///
/// ```text
/// [a c e]
/// [b d f]
/// [0 0 1]
/// ```
///
/// Points are column vectors `[x y 1]`. Mutating methods work in place and return `&mut Self` so
/// they can be chained; [Matrix::combined] and [Matrix::inverse] are the value returning
/// counterparts.
///
/// "Pre" operations ([Matrix::pre_rotate], [Matrix::pre_scale], [Matrix::pre_translate]) act on
/// the existing content before its translation is applied, post operations ([Matrix::rotate],
/// [Matrix::scale], [Matrix::translate]) act on the result, so post rotate/scale also affect the
/// translation column.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub e: T,
    pub f: T,
}

impl<T> Matrix<T>
where
    T: Real,
{
    #[inline]
    pub fn new(a: T, b: T, c: T, d: T, e: T, f: T) -> Self {
        Matrix { a, b, c, d, e, f }
    }

    #[inline]
    pub fn identity() -> Self {
        Matrix::new(T::one(), T::zero(), T::zero(), T::one(), T::zero(), T::zero())
    }

    /// Pure translation by `(x, y)`.
    #[inline]
    pub fn from_translation(x: T, y: T) -> Self {
        Matrix::new(T::one(), T::zero(), T::zero(), T::one(), x, y)
    }

    /// Construct from a `[a, b, c, d, e, f]` slice.
    pub fn from_slice(slice: &[T]) -> Result<Self> {
        if let [a, b, c, d, e, f] = *slice {
            Ok(Matrix::new(a, b, c, d, e, f))
        } else {
            Err(GeometryError::InvalidArguments {
                expected: 6,
                found: slice.len(),
            })
        }
    }

    /// Overwrite all six values.
    pub fn set_values(&mut self, a: T, b: T, c: T, d: T, e: T, f: T) -> &mut Self {
        *self = Matrix::new(a, b, c, d, e, f);
        self
    }

    /// Compose with `rhs` in place so that `self` is applied first and `rhs` second.
    ///
    /// Combining an entity's local transform with its parent's world transform gives the
    /// entity's world transform.
    ///
    /// # Examples
    ///
    /// ```
    /// # use impulse2d::core::math::*;
    /// let mut m = Matrix::from_translation(1.0, 0.0);
    /// m.combine(&Matrix::new(2.0, 0.0, 0.0, 2.0, 0.0, 0.0));
    /// // translated first, then scaled
    /// assert_eq!(m.transform_point(vec2(0.0, 0.0)), vec2(2.0, 0.0));
    /// ```
    pub fn combine(&mut self, rhs: &Matrix<T>) -> &mut Self {
        let m = *self;
        self.a = m.a * rhs.a + m.b * rhs.c;
        self.b = m.a * rhs.b + m.b * rhs.d;
        self.c = m.c * rhs.a + m.d * rhs.c;
        self.d = m.c * rhs.b + m.d * rhs.d;
        self.e = m.e * rhs.a + m.f * rhs.c + rhs.e;
        self.f = m.e * rhs.b + m.f * rhs.d + rhs.f;
        self
    }

    /// Value returning version of [Matrix::combine].
    #[inline]
    pub fn combined(&self, rhs: &Matrix<T>) -> Self {
        let mut result = *self;
        result.combine(rhs);
        result
    }

    #[inline]
    pub fn determinant(&self) -> T {
        self.a * self.d - self.b * self.c
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.determinant() != T::zero()
    }

    /// Exactly the identity matrix.
    pub fn is_identity(&self) -> bool {
        *self == Matrix::identity()
    }

    /// Invert in place. A singular matrix is left unchanged, check [Matrix::is_invertible] first
    /// when that matters.
    pub fn invert(&mut self) -> &mut Self {
        let det = self.determinant();
        if det == T::zero() {
            return self;
        }

        let m = *self;
        self.a = m.d / det;
        self.b = -m.b / det;
        self.c = -m.c / det;
        self.d = m.a / det;
        self.e = (m.c * m.f - m.e * m.d) / det;
        self.f = (m.e * m.b - m.a * m.f) / det;
        self
    }

    /// Inverse of this matrix, `None` if it is singular.
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_invertible() {
            return None;
        }

        let mut result = *self;
        result.invert();
        Some(result)
    }

    /// Counter clockwise rotation applied before the translation.
    pub fn pre_rotate(&mut self, angle: T) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let m = *self;
        self.a = cos * m.a - sin * m.b;
        self.b = sin * m.a + cos * m.b;
        self.c = cos * m.c - sin * m.d;
        self.d = sin * m.c + cos * m.d;
        self
    }

    /// Uniform scale applied before the translation.
    #[inline]
    pub fn pre_scale(&mut self, scale: T) -> &mut Self {
        self.pre_scale_xy(scale, scale)
    }

    pub fn pre_scale_xy(&mut self, scale_x: T, scale_y: T) -> &mut Self {
        self.a = self.a * scale_x;
        self.b = self.b * scale_y;
        self.c = self.c * scale_x;
        self.d = self.d * scale_y;
        self
    }

    /// Adds directly to the translation column.
    pub fn pre_translate(&mut self, dx: T, dy: T) -> &mut Self {
        self.e = self.e + dx;
        self.f = self.f + dy;
        self
    }

    /// Counter clockwise rotation applied after the existing transform (rotates the
    /// translation too).
    pub fn rotate(&mut self, angle: T) -> &mut Self {
        let e = self.e;
        let f = self.f;
        let (sin, cos) = angle.sin_cos();
        self.pre_rotate(angle);
        self.e = cos * e - sin * f;
        self.f = sin * e + cos * f;
        self
    }

    /// Uniform scale applied after the existing transform (scales the translation too).
    #[inline]
    pub fn scale(&mut self, scale: T) -> &mut Self {
        self.scale_xy(scale, scale)
    }

    pub fn scale_xy(&mut self, scale_x: T, scale_y: T) -> &mut Self {
        self.pre_scale_xy(scale_x, scale_y);
        self.e = self.e * scale_x;
        self.f = self.f * scale_y;
        self
    }

    /// Translation along the transformed axes.
    pub fn translate(&mut self, dx: T, dy: T) -> &mut Self {
        self.e = self.e + self.a * dx + self.c * dy;
        self.f = self.f + self.b * dx + self.d * dy;
        self
    }

    /// Rotation in radians, `atan2(b, a)`.
    #[inline]
    pub fn rotation(&self) -> T {
        T::atan2(self.b, self.a)
    }

    /// Scale factors for each axis, computed from the column norms.
    ///
    /// Only meaningful for matrices built from rotation, scale and translation (no shear).
    #[inline]
    pub fn scale_factors(&self) -> Vector2<T> {
        vec2(
            (self.a * self.a + self.b * self.b).sqrt(),
            (self.c * self.c + self.d * self.d).sqrt(),
        )
    }

    /// The single scale factor of a uniformly scaled matrix.
    ///
    /// Fails with [GeometryError::NonUniformScale] if the x and y factors are not fuzzy equal.
    pub fn uniform_scale(&self) -> Result<T> {
        let s = self.scale_factors();
        if !s.x.fuzzy_eq(s.y) {
            return Err(GeometryError::NonUniformScale {
                x: s.x.to_f64().unwrap_or(f64::NAN),
                y: s.y.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(s.x)
    }

    #[inline]
    pub fn translation(&self) -> Vector2<T> {
        vec2(self.e, self.f)
    }

    /// Apply this transform to a point.
    #[inline]
    pub fn transform_point(&self, point: Vector2<T>) -> Vector2<T> {
        vec2(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Fuzzy equal comparison of all six values using `fuzzy_epsilon`.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.a.fuzzy_eq_eps(other.a, fuzzy_epsilon)
            && self.b.fuzzy_eq_eps(other.b, fuzzy_epsilon)
            && self.c.fuzzy_eq_eps(other.c, fuzzy_epsilon)
            && self.d.fuzzy_eq_eps(other.d, fuzzy_epsilon)
            && self.e.fuzzy_eq_eps(other.e, fuzzy_epsilon)
            && self.f.fuzzy_eq_eps(other.f, fuzzy_epsilon)
    }

    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T> Default for Matrix<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Matrix::identity()
    }
}

impl<T> fmt::Display for Matrix<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix([{}, {}, {}] [{}, {}, {}] [0, 0, 1])",
            self.a, self.c, self.e, self.b, self.d, self.f
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        assert!(Matrix::<f64>::default().is_identity());
        assert!(!Matrix::from_translation(1.0, 0.0).is_identity());
    }

    #[test]
    fn display() {
        let m = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(m.to_string(), "Matrix([1, 3, 5] [2, 4, 6] [0, 0, 1])");
    }

    #[test]
    fn from_slice_arity() {
        assert_eq!(
            Matrix::from_slice(&[1.0, 0.0, 0.0, 1.0, 0.0]),
            Err(GeometryError::InvalidArguments {
                expected: 6,
                found: 5
            })
        );
        assert!(Matrix::from_slice(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
            .unwrap()
            .is_identity());
    }
}
