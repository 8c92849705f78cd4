use crate::domain::PieceArena;
use crate::grid::Grid;
use crate::systems::Player;

use super::perf_stats::PerfStats;
use super::settings::LevelSettings;
use super::slide::SlideState;
use super::LevelCore;

pub(super) fn create_level_core(settings: LevelSettings) -> LevelCore {
    log::debug!(
        "level: {}x{} grid of {}x{} cells",
        settings.grid.columns,
        settings.grid.rows,
        settings.grid.cell_width,
        settings.grid.cell_height
    );
    LevelCore {
        grid: Grid::new(settings.grid),
        pieces: PieceArena::new(),
        tiles: Vec::new(),
        player: Player::new(settings.player, 0, 0),
        settings,
        active: true,
        selected: None,
        hovered: None,
        slide: SlideState::default(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
