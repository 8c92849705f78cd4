use crate::common::{CoreError, CoreResult, PieceId, TileId};
use crate::domain::{GridPiece, HitBox, HitBoxData, Tile};
use crate::geometry::RotatedRect;
use crate::systems::Player;

use super::LevelCore;

pub(super) fn move_elements(level: &mut LevelCore, dx: i32, dy: i32) {
    level.grid.move_slots(dx as f32, dy as f32);
    for tile in &level.tiles {
        tile.translate(&mut level.pieces, dx, dy);
    }
    level.player.move_by(dx, dy);
}

pub(super) fn set_grid_start(level: &mut LevelCore, cx: i32, cy: i32) {
    let dx = -(cx * level.grid.cell_width());
    let dy = -(cy * level.grid.cell_height());
    move_elements(level, dx, dy);
}

pub(super) fn create_tile(level: &mut LevelCore) -> TileId {
    level.tiles.push(Tile::new());
    TileId(level.tiles.len() as u32 - 1)
}

fn check_tile(level: &LevelCore, tile: TileId) -> CoreResult<()> {
    if tile.index() < level.tiles.len() {
        Ok(())
    } else {
        Err(CoreError::UnknownTile(tile))
    }
}

pub(super) fn add_piece(level: &mut LevelCore, tile: TileId, x: i32, y: i32) -> CoreResult<PieceId> {
    check_tile(level, tile)?;
    let slot = level.grid.checked_slot_id(x, y)?;
    if level.grid.slot(slot).map(|s| !s.is_empty()).unwrap_or(false) {
        return Err(CoreError::SlotOccupied { x, y });
    }

    let piece = level.pieces.insert(GridPiece::new());
    level.grid.place(&mut level.pieces, slot, piece)?;
    add_member(level, tile, piece)?;
    Ok(piece)
}

pub(super) fn remove_piece(level: &mut LevelCore, piece: PieceId) -> CoreResult<()> {
    level.pieces.try_get(piece)?;
    level.grid.vacate(&mut level.pieces, piece);
    for tile in level.tiles.iter_mut() {
        tile.remove_member(piece);
    }
    level.pieces.remove(piece);
    Ok(())
}

pub(super) fn add_member(level: &mut LevelCore, tile: TileId, piece: PieceId) -> CoreResult<()> {
    check_tile(level, tile)?;
    level.pieces.try_get(piece)?;
    match level.tile_of(piece) {
        Some(owner) if owner == tile => Ok(()),
        Some(owner) => Err(CoreError::PieceAlreadyInTile { piece, tile: owner }),
        None => {
            if let Some(t) = level.tiles.get_mut(tile.index()) {
                t.add_member(piece);
            }
            Ok(())
        }
    }
}

pub(super) fn add_hit_box(level: &mut LevelCore, piece: PieceId, data: HitBoxData) -> CoreResult<usize> {
    let slot = level.pieces.try_get(piece)?.slot().ok_or(CoreError::PieceUnplaced(piece))?;
    let origin = level
        .grid
        .slot(slot)
        .map(|s| s.position())
        .ok_or(CoreError::PieceUnplaced(piece))?;
    let hit_box = HitBox::from_data(&data, origin.x, origin.y);
    Ok(level.pieces.try_get_mut(piece)?.add_hit_box(hit_box))
}

pub(super) fn remove_hit_box(level: &mut LevelCore, piece: PieceId, index: usize) -> CoreResult<HitBoxData> {
    level
        .pieces
        .try_get_mut(piece)?
        .remove_hit_box(index)
        .map(|hb| hb.export())
        .ok_or(CoreError::HitBoxIndex { piece, index })
}

fn with_hit_box(
    level: &mut LevelCore,
    piece: PieceId,
    index: usize,
    f: impl FnOnce(&mut HitBox),
) -> CoreResult<()> {
    let hb = level
        .pieces
        .try_get_mut(piece)?
        .hit_box_mut(index)
        .ok_or(CoreError::HitBoxIndex { piece, index })?;
    f(hb);
    Ok(())
}

pub(super) fn adjust_hit_box(level: &mut LevelCore, piece: PieceId, index: usize, dx: i32, dy: i32) -> CoreResult<()> {
    with_hit_box(level, piece, index, |hb| hb.adjust_position(dx, dy))
}

pub(super) fn resize_hit_box(level: &mut LevelCore, piece: PieceId, index: usize, dw: i32, dh: i32) -> CoreResult<()> {
    with_hit_box(level, piece, index, |hb| {
        hb.change_width(dw);
        hb.change_height(dh);
    })
}

pub(super) fn rotate_hit_box(level: &mut LevelCore, piece: PieceId, index: usize, dr: f32) -> CoreResult<()> {
    with_hit_box(level, piece, index, |hb| hb.change_rotation(dr))
}

pub(super) fn hit_box_at(level: &LevelCore, x: f32, y: f32) -> Option<(PieceId, usize)> {
    let probe = RotatedRect::axis_aligned(x, y, 1.0, 1.0);
    level.grid.first_hit(&level.pieces, &probe)
}

pub(super) fn shift_tile(level: &mut LevelCore, tile: TileId, dx: i32, dy: i32) -> CoreResult<bool> {
    let t = level.tiles.get(tile.index()).ok_or(CoreError::UnknownTile(tile))?;
    let committed = t.shift(&mut level.grid, &mut level.pieces, dx, dy);
    if level.perf_enabled {
        level.perf_stats.record_shift(committed);
    }
    Ok(committed)
}

pub(super) fn spawn_player(level: &mut LevelCore, x: i32, y: i32) {
    level.player = Player::new(level.settings.player, x, y);
}

pub(super) fn clear(level: &mut LevelCore) {
    for (slot, _) in level.grid.occupied().collect::<Vec<_>>() {
        level.grid.clear(&mut level.pieces, slot);
    }
    level.pieces.clear();
    level.tiles.clear();
    level.selected = None;
    level.hovered = None;
    level.slide.stop();
}
