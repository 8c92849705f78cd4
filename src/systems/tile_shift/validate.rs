use crate::common::SlotId;
use crate::domain::{PieceArena, Tile};
use crate::grid::{Grid, MoveBuffer, PieceMove};

use super::{Direction, ShiftRejection};

/// Check every member and record the moves, reading the grid only.
pub(super) fn plan_shift(
    tile: &Tile,
    grid: &Grid,
    pieces: &PieceArena,
    dir: Direction,
    moves: &mut MoveBuffer,
) -> Result<(), ShiftRejection> {
    let (dx, dy) = dir.delta();

    for &piece in tile.members() {
        let Some(slot) = pieces.get(piece).and_then(|p| p.slot()) else {
            log::warn!("tile member {} is not placed; shift refused", piece);
            return Err(ShiftRejection::Unplaced { piece });
        };
        let (x, y) = grid.coords(slot);
        let Some(dest) = grid.slot_id(x as i32 + dx, y as i32 + dy) else {
            return Err(ShiftRejection::OutOfBounds { piece });
        };
        if let Some(by) = grid.slot(dest).and_then(|s| s.piece()) {
            if !tile.contains(by) {
                return Err(ShiftRejection::Blocked { piece, by });
            }
        }
    }

    // Column-major sweep over the untouched grid, matching the order pieces are committed in
    for x in 0..grid.columns() {
        for y in 0..grid.rows() {
            let from = SlotId(grid.index(x, y));
            let Some(piece) = grid.slot(from).and_then(|s| s.piece()) else {
                continue;
            };
            if !tile.contains(piece) {
                continue;
            }
            if let Some(to) = grid.slot_id(x as i32 + dx, y as i32 + dy) {
                moves.push(PieceMove { piece, from, to });
            }
        }
    }

    Ok(())
}
