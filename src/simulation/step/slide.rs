use crate::systems::{Direction, InputState};

use super::settings::GridMode;
use super::LevelCore;

/// Timer-driven repeat of a tile shift
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideState {
    direction: Option<Direction>,
    elapsed_ms: f32,
}

impl SlideState {
    #[inline]
    pub fn is_sliding(&self) -> bool {
        self.direction.is_some()
    }

    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub(crate) fn start(&mut self, direction: Direction) {
        self.direction = Some(direction);
        self.elapsed_ms = 0.0;
    }

    pub(crate) fn stop(&mut self) {
        self.direction = None;
        self.elapsed_ms = 0.0;
    }
}

/// Drive the selected tile from the arrows according to the grid mode
pub(super) fn control_selected_tile(level: &mut LevelCore, input: &InputState, elapsed_ms: f32) {
    let Some(tile) = level.selected else {
        return;
    };

    match level.settings.grid_mode {
        GridMode::Move => {}
        GridMode::Shift => {
            if let Some((dx, dy)) = input.pushed_arrow() {
                // Unknown tile ids can't reach here; selection only stores live tiles
                let _ = super::commands::shift_tile(level, tile, dx, dy);
            }
        }
        GridMode::Slide => match level.slide.direction {
            None => {
                if let Some(dir) = input.pushed_arrow().and_then(|(dx, dy)| Direction::from_unit(dx, dy)) {
                    level.slide.start(dir);
                }
            }
            Some(dir) => {
                if level.slide.elapsed_ms > level.settings.slide_interval_ms {
                    let (dx, dy) = dir.delta();
                    match super::commands::shift_tile(level, tile, dx, dy) {
                        Ok(true) => level.slide.elapsed_ms = 0.0,
                        _ => {
                            log::debug!("slide of tile {} stopped going {:?}", tile, dir);
                            level.slide.stop();
                        }
                    }
                } else {
                    level.slide.elapsed_ms += elapsed_ms;
                }
            }
        },
    }
}
