//! Shattered Engine - grid, tile and collision core for the Shattered platformer
//!
//! Architecture:
//! - common/     - Identifiers and the error type
//! - geometry/   - Vectors and rotated rectangles
//! - domain/     - Hit boxes, pieces, tiles, design-time records
//! - spatial/    - The fixed world grid
//! - systems/    - Tile shift, player integration, input
//! - simulation/ - Level orchestration and the wasm facade

pub mod common;
pub mod geometry;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Short paths
pub use spatial::grid;
pub use systems::player;
pub use systems::tile_shift;

use std::sync::Once;

use wasm_bindgen::prelude::*;

// Thread pool for the parallel hit queries; JS awaits `initThreadPool(n)` before stepping
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

static INIT: Once = Once::new();

/// Install the panic hook and console logger (idempotent)
#[wasm_bindgen]
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        #[cfg(target_arch = "wasm32")]
        {
            if console_log::init_with_level(log::Level::Debug).is_err() {
                // Another logger was installed by the host
                return;
            }
        }

        log::debug!("shattered engine {} initialized", env!("CARGO_PKG_VERSION"));
    });
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use common::{CoreError, CoreResult, PieceId, SlotId, TileId};
pub use domain::{GridPiece, HitBox, HitBoxData, LevelData, PieceArena, Tile};
pub use geometry::{RotatedRect, Vec2};
pub use grid::{Grid, GridSettings, GridSlot};
pub use simulation::{GridMode, Level, LevelCore, LevelSettings, PerfStats};
pub use systems::{Buttons, Direction, InputState, Player, PlayerConfig};
