//! `crowd-geom` — skin-to-skin distance primitives and static obstacles.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`distance`] | circle-circle, three-circle, circle-line, three-circle-line |
//! | [`obstacle`] | `LineObstacle` (immutable endpoint pair)                  |
//!
//! All distance functions are pure: they take positions and radii, return a
//! signed surface gap `h` (negative = overlapping) plus a unit normal, and
//! never touch agent storage.  The force model consumes them directly.

pub mod distance;
pub mod obstacle;

#[cfg(test)]
mod tests;

pub use distance::{
    ThreeCircleDistance, ThreeCircleLineDistance, distance_circle_circle, distance_circle_line,
    distance_three_circle, distance_three_circle_line,
};
pub use obstacle::LineObstacle;
