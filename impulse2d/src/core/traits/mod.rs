//! Numeric traits shared by every geometry type in the crate.
mod fuzzy;
mod real;

pub use fuzzy::FuzzyEq;
pub use real::Real;
