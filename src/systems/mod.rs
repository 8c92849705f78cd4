//! Per-step systems: tile shift transaction, player integration, input snapshot

pub mod input;
pub mod player;
pub mod tile_shift;

pub use input::{Buttons, InputState, Pointer};
pub use player::{ContactFlags, GroundReport, MotionMode, Player, PlayerConfig};
pub use tile_shift::{Direction, ShiftRejection};
