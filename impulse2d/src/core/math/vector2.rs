use super::Matrix;
use crate::{
    core::traits::Real,
    error::{GeometryError, Result},
};
use std::{fmt, ops};

/// 2D vector used both as a point and as a free direction.
///
/// `Vector2` is `Copy` and its methods return new values; the in-place forms (`+=`, `-=`, `*=`,
/// [Vector2::negate_mut], [Vector2::normalize_mut]) are there for tight loops such as the SAT
/// routines.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Construct a vector from a `[x, y]` slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use impulse2d::core::math::*;
    /// assert_eq!(Vector2::from_slice(&[1.0, 2.0]).unwrap(), vec2(1.0, 2.0));
    /// assert!(Vector2::from_slice(&[1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_slice(slice: &[T]) -> Result<Self> {
        if let [x, y] = *slice {
            Ok(Vector2::new(x, y))
        } else {
            Err(GeometryError::InvalidArguments {
                expected: 2,
                found: slice.len(),
            })
        }
    }

    /// Exactly `<0, 0>`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Scale x and y independently.
    #[inline]
    pub fn scale_xy(&self, scale_x: T, scale_y: T) -> Self {
        vec2(scale_x * self.x, scale_y * self.y)
    }

    /// Componentwise product.
    #[inline]
    pub fn mul_components(&self, other: Self) -> Self {
        vec2(self.x * other.x, self.y * other.y)
    }

    /// Componentwise quotient.
    #[inline]
    pub fn div_components(&self, other: Self) -> Self {
        vec2(self.x / other.x, self.y / other.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Squared distance between two points.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> T {
        (other - self).length_squared()
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(&self, other: Self) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Unit length vector in the same direction, the zero vector stays zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use impulse2d::core::math::*;
    /// assert!(vec2(3.0, 4.0).normalize().fuzzy_eq(vec2(0.6, 0.8)));
    /// assert_eq!(Vector2::<f64>::zero().normalize(), Vector2::zero());
    /// ```
    #[inline]
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == T::zero() {
            return *self;
        }

        self.scale(T::one() / length)
    }

    /// In place version of [Vector2::normalize].
    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// In place negation.
    #[inline]
    pub fn negate_mut(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Vector in the same direction with the given `length`, the zero vector stays zero.
    #[inline]
    pub fn scale_to_length(&self, length: T) -> Self {
        self.normalize().scale(length)
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Create perpendicular vector (rotated 90 degrees counter clockwise).
    #[inline]
    pub fn perp(&self) -> Self {
        vec2(-self.y, self.x)
    }

    /// Create perpendicular unit vector (length = 1).
    #[inline]
    pub fn unit_perp(&self) -> Self {
        self.perp().normalize()
    }

    /// Rotate counter clockwise about the origin by `angle` in radians.
    pub fn rotate(&self, angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        vec2(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotate this point around an `origin` point by some `angle` in radians.
    pub fn rotate_about(&self, origin: Self, angle: T) -> Self {
        (self - origin).rotate(angle) + origin
    }

    /// Projection of this vector onto `other`.
    ///
    /// `other` must be non-zero, projecting onto the zero vector yields NaN components.
    pub fn project_onto(&self, other: Self) -> Self {
        other.scale(self.dot(other) / other.length_squared())
    }

    /// Right hand unit normal of the segment from the origin to this point.
    #[inline]
    pub fn normal(&self) -> Self {
        Vector2::zero().normal_to(*self)
    }

    /// Right hand unit normal of the segment from this point to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use impulse2d::core::math::*;
    /// // segment pointing along +x has its right hand side at -y
    /// assert_eq!(vec2(0.0, 0.0).normal_to(vec2(2.0, 0.0)), vec2(0.0, -1.0));
    /// ```
    #[inline]
    pub fn normal_to(&self, other: Self) -> Self {
        vec2(other.y - self.y, self.x - other.x).normalize()
    }

    /// Signed angle in radians rotating this vector onto `other`, in `(-PI, PI]`.
    #[inline]
    pub fn angle_between(&self, other: Self) -> T {
        T::atan2(self.perp_dot(other), self.dot(other))
    }

    /// Direction angle in radians of the segment from this point to `other`, in `(-PI, PI]`.
    #[inline]
    pub fn angle_to(&self, other: Self) -> T {
        T::atan2(other.y - self.y, other.x - self.x)
    }

    /// Apply the affine transform `matrix` to this point.
    #[inline]
    pub fn transform(&self, matrix: &Matrix<T>) -> Self {
        matrix.transform_point(*self)
    }

    /// Returns whichever of `a` and `b` is longer, `a` on ties.
    pub fn longest(a: Self, b: Self) -> Self {
        if a.length_squared() >= b.length_squared() {
            a
        } else {
            b
        }
    }

    /// Returns whichever of `a` and `b` is shorter, `a` on ties.
    pub fn shortest(a: Self, b: Self) -> Self {
        if a.length_squared() <= b.length_squared() {
            a
        } else {
            b
        }
    }

    /// Vector triple product `b * (a . c) - a * (b . c)`.
    pub fn triple_product(a: Self, b: Self, c: Self) -> Self {
        b.scale(a.dot(c)) - a.scale(b.dot(c))
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

impl<T> fmt::Display for Vector2<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

macro_rules! ImplAssignOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            fn $op_func(&mut self, rhs: Vector2<T>) {
                self.x = self.x $op rhs.x;
                self.y = self.y $op rhs.y;
            }
        }
    };
}

ImplAssignOp!(AddAssign, add_assign, +);
ImplAssignOp!(SubAssign, sub_assign, -);

impl<T: Real> ops::Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Real> ops::MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x = self.x * rhs;
        self.y = self.y * rhs;
    }
}

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Real> ops::Neg for &Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}
