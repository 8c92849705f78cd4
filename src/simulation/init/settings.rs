use crate::grid::GridSettings;
use crate::systems::PlayerConfig;

use super::perf_stats::PerfStats;
use super::LevelCore;

pub const DEFAULT_SLIDE_INTERVAL_MS: f32 = 25.0;
pub const DEFAULT_GRID_START: (i32, i32) = (0, 4);

/// How the selected tile responds to arrow keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridMode {
    /// Arrows do nothing
    Move,
    /// A pushed arrow keeps shifting on a timer until blocked
    #[default]
    Slide,
    /// A pushed arrow shifts once
    Shift,
}

impl GridMode {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(GridMode::Move),
            1 => Some(GridMode::Slide),
            2 => Some(GridMode::Shift),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelSettings {
    pub grid: GridSettings,
    pub player: PlayerConfig,
    pub grid_mode: GridMode,
    /// Milliseconds between slide steps
    pub slide_interval_ms: f32,
    /// Cell scrolled to the screen origin by `apply_grid_start`
    pub grid_start: (i32, i32),
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            player: PlayerConfig::default(),
            grid_mode: GridMode::default(),
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            grid_start: DEFAULT_GRID_START,
        }
    }
}

pub(super) fn set_active(level: &mut LevelCore, active: bool) {
    level.active = active;
}

pub(super) fn set_grid_mode(level: &mut LevelCore, mode: GridMode) {
    level.settings.grid_mode = mode;
    level.slide.stop();
}

pub(super) fn enable_perf_metrics(level: &mut LevelCore, enabled: bool) {
    level.perf_enabled = enabled;
    if !enabled {
        level.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(level: &LevelCore) -> PerfStats {
    level.perf_stats.clone()
}
