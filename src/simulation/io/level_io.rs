use crate::common::{CoreError, CoreResult};
use crate::domain::LevelData;

use super::LevelCore;

/// Replace the level's tiles with those in `json`.
///
/// The whole document is validated before anything is touched: every piece must land in bounds
/// and no cell may be claimed twice.
pub(super) fn load_level_json(level: &mut LevelCore, json: &str) -> CoreResult<()> {
    let data = LevelData::from_json(json).map_err(CoreError::InvalidLevel)?;
    validate(level, &data)?;

    super::commands::clear(level);
    let mut piece_count = 0usize;
    let mut box_count = 0usize;
    for tile_data in &data.tiles {
        let tile = super::commands::create_tile(level);
        for piece_data in &tile_data.pieces {
            let piece = super::commands::add_piece(level, tile, piece_data.x, piece_data.y)?;
            for hb in &piece_data.hit_boxes {
                super::commands::add_hit_box(level, piece, *hb)?;
                box_count += 1;
            }
            piece_count += 1;
        }
    }

    log::debug!(
        "loaded level: {} tiles, {} pieces, {} hit boxes",
        data.tiles.len(),
        piece_count,
        box_count
    );
    Ok(())
}

fn validate(level: &LevelCore, data: &LevelData) -> CoreResult<()> {
    let mut claimed = vec![false; level.grid.size()];
    for piece in data.tiles.iter().flat_map(|t| t.pieces.iter()) {
        let Some(slot) = level.grid.slot_id(piece.x, piece.y) else {
            return Err(CoreError::InvalidLevel(format!(
                "piece at ({}, {}) is outside the {}x{} grid",
                piece.x,
                piece.y,
                level.grid.columns(),
                level.grid.rows()
            )));
        };
        if std::mem::replace(&mut claimed[slot.0], true) {
            return Err(CoreError::InvalidLevel(format!(
                "cell ({}, {}) is claimed twice",
                piece.x, piece.y
            )));
        }
    }
    Ok(())
}

/// Design-time record of every tile, in tile order
pub(super) fn level_json(level: &LevelCore) -> CoreResult<String> {
    let tiles = level
        .tiles
        .iter()
        .map(|t| t.export(&level.grid, &level.pieces))
        .collect::<CoreResult<Vec<_>>>()?;
    let data = LevelData { tiles, ..LevelData::default() };
    Ok(data.to_json())
}
