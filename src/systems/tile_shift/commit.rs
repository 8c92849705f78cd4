use crate::domain::PieceArena;
use crate::grid::{Grid, PieceMove};

use super::Direction;

/// Apply validated moves. Sources are vacated first so no destination write can clobber a
/// member that has not moved yet.
pub(super) fn commit_shift(grid: &mut Grid, pieces: &mut PieceArena, moves: &[PieceMove], dir: Direction) {
    let (dx, dy) = dir.delta();
    // Grid coordinate -> pixel convention: +x on the grid is -cell_width on the hit boxes
    let px = -(dx * grid.cell_width());
    let py = -(dy * grid.cell_height());

    for m in moves {
        if grid.slot(m.from).and_then(|s| s.piece()) == Some(m.piece) {
            grid.clear(pieces, m.from);
        }
    }

    for m in moves {
        match grid.place(pieces, m.to, m.piece) {
            Ok(evicted) => debug_assert!(evicted.is_none(), "shift overwrote {:?}", evicted),
            Err(e) => log::error!("shift commit failed for {}: {}", m.piece, e),
        }
        if let Some(piece) = pieces.get_mut(m.piece) {
            piece.translate_hit_boxes(px, py);
        }
    }
}
