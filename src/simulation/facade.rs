use wasm_bindgen::prelude::*;

use crate::common::{CoreError, PieceId, TileId};
use crate::domain::HitBoxData;
use crate::grid::GridSettings;
use crate::systems::{Buttons, InputState, Pointer};

use super::perf_stats::PerfStats;
use super::settings::{GridMode, LevelSettings};
use super::LevelCore;

fn js_err(e: CoreError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct Level {
    core: LevelCore,
    // Previous frame's snapshots for edge detection
    last_buttons: Buttons,
    last_pointer: Pointer,
}

impl Level {
    fn from_core(core: LevelCore) -> Self {
        Self {
            core,
            last_buttons: Buttons::default(),
            last_pointer: Pointer::default(),
        }
    }

    pub fn core(&self) -> &LevelCore {
        &self.core
    }
}

#[wasm_bindgen]
impl Level {
    /// Level with the default 20x8 grid of 256x180 cells
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_core(LevelCore::default())
    }

    #[wasm_bindgen(js_name = withGrid)]
    pub fn with_grid(columns: u32, rows: u32, cell_width: i32, cell_height: i32) -> Self {
        let settings = LevelSettings {
            grid: GridSettings { columns, rows, cell_width, cell_height },
            ..LevelSettings::default()
        };
        Self::from_core(LevelCore::new(settings))
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 { self.core.grid().columns() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.grid().rows() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn is_active(&self) -> bool { self.core.is_active() }

    #[wasm_bindgen(getter)]
    pub fn tile_count(&self) -> u32 { self.core.tiles().len() as u32 }

    #[wasm_bindgen(getter)]
    pub fn piece_count(&self) -> u32 { self.core.pieces().len() as u32 }

    pub fn activate(&mut self) {
        self.core.activate();
    }

    pub fn deactivate(&mut self) {
        self.core.deactivate();
    }

    /// 0 = move, 1 = slide, 2 = shift
    pub fn set_grid_mode(&mut self, mode: u8) -> Result<(), JsValue> {
        let mode = GridMode::from_u8(mode)
            .ok_or_else(|| JsValue::from_str(&format!("unknown grid mode: {}", mode)))?;
        self.core.set_grid_mode(mode);
        Ok(())
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === Scrolling ===
    pub fn move_elements(&mut self, dx: i32, dy: i32) {
        self.core.move_elements(dx, dy);
    }

    pub fn set_grid_start(&mut self, cx: i32, cy: i32) {
        self.core.set_grid_start(cx, cy);
    }

    pub fn apply_grid_start(&mut self) {
        self.core.apply_grid_start();
    }

    // === Level I/O ===
    pub fn load_level(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_level_json(&json).map_err(js_err)
    }

    pub fn level_json(&self) -> Result<String, JsValue> {
        self.core.level_json().map_err(js_err)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === Editor commands ===
    pub fn create_tile(&mut self) -> u32 {
        self.core.create_tile().0
    }

    pub fn add_piece(&mut self, tile: u32, x: i32, y: i32) -> Result<u32, JsValue> {
        self.core.add_piece(TileId(tile), x, y).map(|p| p.0).map_err(js_err)
    }

    pub fn remove_piece(&mut self, piece: u32) -> Result<(), JsValue> {
        self.core.remove_piece(PieceId(piece)).map_err(js_err)
    }

    pub fn add_member(&mut self, tile: u32, piece: u32) -> Result<(), JsValue> {
        self.core.add_member(TileId(tile), PieceId(piece)).map_err(js_err)
    }

    /// Offset `(x, y)` is relative to the piece's slot
    pub fn add_hit_box(
        &mut self,
        piece: u32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        rotation: f32,
    ) -> Result<u32, JsValue> {
        let data = HitBoxData { x, y, width, height, rotation };
        self.core
            .add_hit_box(PieceId(piece), data)
            .map(|i| i as u32)
            .map_err(js_err)
    }

    pub fn remove_hit_box(&mut self, piece: u32, index: u32) -> Result<(), JsValue> {
        self.core
            .remove_hit_box(PieceId(piece), index as usize)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn adjust_hit_box(&mut self, piece: u32, index: u32, dx: i32, dy: i32) -> Result<(), JsValue> {
        self.core.adjust_hit_box(PieceId(piece), index as usize, dx, dy).map_err(js_err)
    }

    pub fn resize_hit_box(&mut self, piece: u32, index: u32, dw: i32, dh: i32) -> Result<(), JsValue> {
        self.core.resize_hit_box(PieceId(piece), index as usize, dw, dh).map_err(js_err)
    }

    pub fn rotate_hit_box(&mut self, piece: u32, index: u32, dr: f32) -> Result<(), JsValue> {
        self.core.rotate_hit_box(PieceId(piece), index as usize, dr).map_err(js_err)
    }

    /// `[piece, index]` of the hit box under the pixel, empty when none
    pub fn hit_box_at(&self, x: f32, y: f32) -> Vec<u32> {
        match self.core.hit_box_at(x, y) {
            Some((piece, index)) => vec![piece.0, index as u32],
            None => Vec::new(),
        }
    }

    pub fn shift_tile(&mut self, tile: u32, dx: i32, dy: i32) -> Result<bool, JsValue> {
        self.core.shift_tile(TileId(tile), dx, dy).map_err(js_err)
    }

    // === Selection ===
    #[wasm_bindgen(getter)]
    pub fn selected_tile(&self) -> Option<u32> {
        self.core.selected_tile().map(|t| t.0)
    }

    #[wasm_bindgen(getter)]
    pub fn hovered_tile(&self) -> Option<u32> {
        self.core.hovered_tile().map(|t| t.0)
    }

    #[wasm_bindgen(getter)]
    pub fn is_sliding(&self) -> bool {
        self.core.is_sliding()
    }

    // === Player ===
    pub fn spawn_player(&mut self, x: i32, y: i32) {
        self.core.spawn_player(x, y);
    }

    #[wasm_bindgen(getter)]
    pub fn player_x(&self) -> f32 { self.core.player().position().x }

    #[wasm_bindgen(getter)]
    pub fn player_y(&self) -> f32 { self.core.player().position().y }

    #[wasm_bindgen(getter)]
    pub fn player_on_ground(&self) -> bool { self.core.player().on_ground() }

    // === Render extraction ===
    /// Corners of every placed hit box, 8 floats each (x0 y0 .. x3 y3), slot then z order
    pub fn hit_box_corners(&self) -> Vec<f32> {
        let grid = self.core.grid();
        let mut out = Vec::with_capacity(grid.occupied_count() * 8);
        for (_, _, _, hb) in grid.placed_hit_boxes(self.core.pieces()) {
            for c in hb.rect().corners() {
                out.push(c.x);
                out.push(c.y);
            }
        }
        out
    }

    pub fn player_corners(&self) -> Vec<f32> {
        self.core
            .player()
            .hit_box()
            .rect()
            .corners()
            .iter()
            .flat_map(|c| [c.x, c.y])
            .collect()
    }

    // === Step ===
    /// Advance one frame.
    ///
    /// `buttons` is a bitmask: left, right, up, down, jump from bit 0.
    pub fn step(&mut self, buttons: u8, pointer_x: f32, pointer_y: f32, pointer_pressed: bool, elapsed_ms: f32) {
        let current = Buttons::from_bits(buttons);
        let pointer = Pointer { x: pointer_x, y: pointer_y, pressed: pointer_pressed };
        let input = InputState::from_snapshots(&self.last_buttons, &current, &self.last_pointer, pointer);
        self.core.step(&input, elapsed_ms);
        self.last_buttons = current;
        self.last_pointer = pointer;
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}
