use super::LevelCore;

/// Hover or click over the grid.
///
/// Over a piece: a click selects its tile, otherwise the tile becomes the hover tile.
/// Over an empty cell: a click clears the selection, otherwise the hover tile is cleared.
/// Outside the grid nothing changes, and selection is frozen while a slide runs.
pub(super) fn select_at(level: &mut LevelCore, x: f32, y: f32, clicked: bool) {
    if level.slide.is_sliding() {
        return;
    }
    let Some((gx, gy)) = level.grid.cell_at_pixel(x, y) else {
        return;
    };

    match level.grid.piece_at(gx as i32, gy as i32) {
        Some(piece) => {
            let Some(tile) = level.tile_of(piece) else {
                return;
            };
            if clicked {
                level.selected = Some(tile);
            } else {
                level.hovered = Some(tile);
            }
        }
        None => {
            if clicked {
                level.selected = None;
            } else {
                level.hovered = None;
            }
        }
    }
}
