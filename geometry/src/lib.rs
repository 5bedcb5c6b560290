//! Geometry primitives for touch surfaces.
mod point;
mod size;

pub use point::*;
pub use size::*;
