use super::EntityId;
use crate::shape::Shape;

/// How the bits of a [FlagFilter] are matched against an entity's flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FlagMatch {
    /// At least one of the filter bits is set.
    Any,
    /// Every filter bit is set.
    All,
}

/// Bitmask filter applied to entity flags by scene graph queries.
///
/// A filter with no bits set matches every entity regardless of the mode.
///
/// # Examples
///
/// ```
/// # use impulse2d::scene::*;
/// let any = FlagFilter::any(0b0110);
/// assert!(any.matches(0b0010));
/// assert!(!any.matches(0b1000));
///
/// let all = FlagFilter::all(0b0110);
/// assert!(all.matches(0b1110));
/// assert!(!all.matches(0b0010));
///
/// assert!(FlagFilter::default().matches(0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FlagFilter {
    pub flags: u32,
    pub mode: FlagMatch,
}

impl FlagFilter {
    /// Filter matching any of `flags` if `use_or` is true, otherwise all of them.
    #[inline]
    pub fn new(flags: u32, use_or: bool) -> Self {
        let mode = if use_or { FlagMatch::Any } else { FlagMatch::All };
        FlagFilter { flags, mode }
    }

    #[inline]
    pub fn any(flags: u32) -> Self {
        FlagFilter {
            flags,
            mode: FlagMatch::Any,
        }
    }

    #[inline]
    pub fn all(flags: u32) -> Self {
        FlagFilter {
            flags,
            mode: FlagMatch::All,
        }
    }

    #[inline]
    pub fn matches(&self, entity_flags: u32) -> bool {
        if self.flags == 0 {
            return true;
        }

        match self.mode {
            FlagMatch::Any => entity_flags & self.flags != 0,
            FlagMatch::All => entity_flags & self.flags == self.flags,
        }
    }
}

impl Default for FlagFilter {
    /// Matches everything.
    #[inline]
    fn default() -> Self {
        FlagFilter::any(0)
    }
}

/// What a spatial query is tested against.
///
/// An entity target is resolved to its world space collidable and never appears in its own
/// query results.
#[derive(Debug, Copy, Clone)]
pub enum QueryTarget<'a, T = f64> {
    Shape(&'a Shape<T>),
    Entity(EntityId),
}

impl<'a, T> From<&'a Shape<T>> for QueryTarget<'a, T> {
    #[inline]
    fn from(shape: &'a Shape<T>) -> Self {
        QueryTarget::Shape(shape)
    }
}

impl<T> From<EntityId> for QueryTarget<'_, T> {
    #[inline]
    fn from(id: EntityId) -> Self {
        QueryTarget::Entity(id)
    }
}
