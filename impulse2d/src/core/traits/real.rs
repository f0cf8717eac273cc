use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;
use std::fmt;

/// Scalar type every geometry type is generic over (`f64` by default, `f32` also implemented).
///
/// `IndexableNum` lets shape bounding boxes feed the broad phase index of
/// [IndexedSG](crate::scene::IndexedSG) directly.
pub trait Real:
    num_traits::real::Real
    + FuzzyEq
    + Default
    + fmt::Debug
    + fmt::Display
    + IndexableNum
    + 'static
{
    fn pi() -> Self;

    fn tau() -> Self;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }
}
