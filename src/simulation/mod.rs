//! Level - grid, pieces, tiles and the player driven one step at a time
//!
//! `LevelCore` owns all mutable state and delegates:
//! - editor/loader commands in commands/
//! - per-step tile control, selection and player integration in step/
//! - JSON level import/export in io/
//! - perf collection in perf/
//!
//! `Level` (facade.rs) is the wasm-bindgen surface over `LevelCore`.

use crate::common::{CoreResult, PieceId, TileId};
use crate::domain::{HitBoxData, PieceArena, Tile};
use crate::grid::Grid;
use crate::systems::{InputState, Player};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "step/slide.rs"]
mod slide;
#[path = "step/select.rs"]
mod select;
#[path = "io/level_io.rs"]
mod level_io;
mod facade;

pub use facade::Level;
pub use perf_stats::PerfStats;
pub use settings::{GridMode, LevelSettings, DEFAULT_GRID_START, DEFAULT_SLIDE_INTERVAL_MS};
pub use slide::SlideState;

use perf_timer::PerfTimer;

pub struct LevelCore {
    settings: LevelSettings,
    grid: Grid,
    pieces: PieceArena,
    tiles: Vec<Tile>,
    player: Player,

    // State
    active: bool,
    selected: Option<TileId>,
    hovered: Option<TileId>,
    slide: SlideState,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl LevelCore {
    pub fn new(settings: LevelSettings) -> Self {
        init::create_level_core(settings)
    }

    // === Read access ===
    pub fn settings(&self) -> &LevelSettings { &self.settings }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn pieces(&self) -> &PieceArena { &self.pieces }

    pub fn tiles(&self) -> &[Tile] { &self.tiles }

    pub fn tile(&self, id: TileId) -> Option<&Tile> { self.tiles.get(id.index()) }

    pub fn player(&self) -> &Player { &self.player }

    pub fn is_active(&self) -> bool { self.active }

    pub fn selected_tile(&self) -> Option<TileId> { self.selected }

    pub fn hovered_tile(&self) -> Option<TileId> { self.hovered }

    pub fn is_sliding(&self) -> bool { self.slide.is_sliding() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Tile that claims `piece`, if any
    pub fn tile_of(&self, piece: PieceId) -> Option<TileId> {
        self.tiles
            .iter()
            .position(|t| t.contains(piece))
            .map(|i| TileId(i as u32))
    }

    // === Settings ===
    pub fn activate(&mut self) {
        settings::set_active(self, true);
    }

    pub fn deactivate(&mut self) {
        settings::set_active(self, false);
    }

    pub fn set_grid_mode(&mut self, mode: GridMode) {
        settings::set_grid_mode(self, mode);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Scrolling ===
    /// Scroll every slot, every tile's hit boxes and the player by whole pixels
    pub fn move_elements(&mut self, dx: i32, dy: i32) {
        commands::move_elements(self, dx, dy);
    }

    /// Scroll so that cell `(cx, cy)` sits at the screen origin
    pub fn set_grid_start(&mut self, cx: i32, cy: i32) {
        commands::set_grid_start(self, cx, cy);
    }

    /// `set_grid_start` at the configured start cell
    pub fn apply_grid_start(&mut self) {
        let (cx, cy) = self.settings.grid_start;
        commands::set_grid_start(self, cx, cy);
    }

    // === Editor / loader commands ===
    pub fn create_tile(&mut self) -> TileId {
        commands::create_tile(self)
    }

    /// New piece in an empty cell, claimed by `tile`
    pub fn add_piece(&mut self, tile: TileId, x: i32, y: i32) -> CoreResult<PieceId> {
        commands::add_piece(self, tile, x, y)
    }

    /// Unlink and drop a piece
    pub fn remove_piece(&mut self, piece: PieceId) -> CoreResult<()> {
        commands::remove_piece(self, piece)
    }

    /// Give `piece` to `tile`; a piece belongs to at most one tile
    pub fn add_member(&mut self, tile: TileId, piece: PieceId) -> CoreResult<()> {
        commands::add_member(self, tile, piece)
    }

    /// Hit box placed relative to the piece's slot
    pub fn add_hit_box(&mut self, piece: PieceId, data: HitBoxData) -> CoreResult<usize> {
        commands::add_hit_box(self, piece, data)
    }

    pub fn remove_hit_box(&mut self, piece: PieceId, index: usize) -> CoreResult<HitBoxData> {
        commands::remove_hit_box(self, piece, index)
    }

    pub fn adjust_hit_box(&mut self, piece: PieceId, index: usize, dx: i32, dy: i32) -> CoreResult<()> {
        commands::adjust_hit_box(self, piece, index, dx, dy)
    }

    pub fn resize_hit_box(&mut self, piece: PieceId, index: usize, dw: i32, dh: i32) -> CoreResult<()> {
        commands::resize_hit_box(self, piece, index, dw, dh)
    }

    pub fn rotate_hit_box(&mut self, piece: PieceId, index: usize, dr: f32) -> CoreResult<()> {
        commands::rotate_hit_box(self, piece, index, dr)
    }

    /// First hit box (slot order, then z order) under a screen pixel
    pub fn hit_box_at(&self, x: f32, y: f32) -> Option<(PieceId, usize)> {
        commands::hit_box_at(self, x, y)
    }

    pub fn shift_tile(&mut self, tile: TileId, dx: i32, dy: i32) -> CoreResult<bool> {
        commands::shift_tile(self, tile, dx, dy)
    }

    /// Place the player's top-left at a screen position, at rest
    pub fn spawn_player(&mut self, x: i32, y: i32) {
        commands::spawn_player(self, x, y);
    }

    /// Drop every tile and piece; the grid keeps its scroll
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === Level I/O ===
    pub fn load_level_json(&mut self, json: &str) -> CoreResult<()> {
        level_io::load_level_json(self, json)
    }

    pub fn level_json(&self) -> CoreResult<String> {
        level_io::level_json(self)
    }

    // === Step ===
    /// Pointer hover/click over the grid
    pub fn select_at(&mut self, x: f32, y: f32, clicked: bool) {
        select::select_at(self, x, y, clicked);
    }

    /// Advance one frame: tile control, selection, then the player
    pub fn step(&mut self, input: &InputState, elapsed_ms: f32) {
        step::step(self, input, elapsed_ms);
    }
}

impl Default for LevelCore {
    fn default() -> Self {
        Self::new(LevelSettings::default())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
