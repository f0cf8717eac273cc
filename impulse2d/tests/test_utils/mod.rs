#![allow(dead_code)]

mod scene_fixtures;
mod shape_test_properties;

pub use scene_fixtures::*;
pub use shape_test_properties::*;
