//! Geometry primitives
//!
//! Every hit test in the game goes through `RotatedRect::intersects`.

mod rotated_rect;
mod vec2;

pub use rotated_rect::{Corners, RotatedRect};
pub use vec2::Vec2;
