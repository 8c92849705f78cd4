//! Player - controlled actor integrated against the grid's placed hit boxes
//!
//! One `integrate` call per simulation step:
//! 1. Move by the current velocity in whole pixels
//! 2. Reset contact flags
//! 3. Ground resolution (`ground.rs`)
//! 4. Velocity modifiers in fixed order (`velocity.rs`)

mod body;
mod ground;
mod velocity;

pub use body::{ContactFlags, MotionMode, Player, PlayerConfig, PLAYER_HEIGHT, PLAYER_WIDTH};
pub use ground::{resolve_ground, GroundReport};
