use crate::systems::InputState;

use super::{select, slide, LevelCore, PerfTimer};

pub(super) fn step(level: &mut LevelCore, input: &InputState, elapsed_ms: f32) {
    if !level.active {
        return;
    }

    let perf_on = level.perf_enabled;
    if perf_on {
        level.perf_stats.reset();
        level.perf_stats.tile_count = level.tiles.len() as u32;
        level.perf_stats.placed_pieces = level.grid.occupied_count() as u32;
    }
    let step_start = PerfTimer::start_if(perf_on);

    // === TILE CONTROL ===
    let t0 = PerfTimer::start_if(perf_on);
    slide::control_selected_tile(level, input, elapsed_ms);
    if let Some(t0) = t0 {
        level.perf_stats.tiles_ms = t0.elapsed_ms();
    }

    // === SELECTION ===
    select::select_at(level, input.pointer.x, input.pointer.y, input.clicked);

    // === PLAYER ===
    let t0 = PerfTimer::start_if(perf_on);
    let report = level.player.integrate(input, &level.grid, &level.pieces);
    if let Some(t0) = t0 {
        level.perf_stats.ground_ms = t0.elapsed_ms();
        level.perf_stats.hit_tests = report.hit_tests;
        level.perf_stats.lift_pixels = report.lifted;
        level.perf_stats.lift_capped = report.capped as u32;
    }

    level.frame += 1;

    if let Some(start) = step_start {
        level.perf_stats.step_ms = start.elapsed_ms();
    }
}
