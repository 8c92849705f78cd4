use crate::common::{CoreError, CoreResult, PieceId};
use crate::grid::Grid;

use super::level_data::{GridPieceData, TileData};
use super::piece::PieceArena;

/// A rigid group of pieces that move together.
///
/// Member order is insertion order and is kept for deterministic export. The shift transaction
/// lives in `systems::tile_shift`.
#[derive(Clone, Debug, Default)]
pub struct Tile {
    members: Vec<PieceId>,
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the piece is already a member
    pub fn add_member(&mut self, piece: PieceId) -> bool {
        if self.contains(piece) {
            return false;
        }
        self.members.push(piece);
        true
    }

    pub fn remove_member(&mut self, piece: PieceId) -> bool {
        match self.members.iter().position(|&p| p == piece) {
            Some(idx) => {
                self.members.remove(idx);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, piece: PieceId) -> bool {
        self.members.contains(&piece)
    }

    #[inline]
    pub fn members(&self) -> &[PieceId] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Pure visual scroll of every member's hit boxes; grid coordinates are untouched
    pub fn translate(&self, pieces: &mut PieceArena, dx: i32, dy: i32) {
        for &id in &self.members {
            if let Some(piece) = pieces.get_mut(id) {
                piece.translate_hit_boxes(dx, dy);
            }
        }
    }

    pub fn export(&self, grid: &Grid, pieces: &PieceArena) -> CoreResult<TileData> {
        let mut out = Vec::with_capacity(self.members.len());
        for &id in &self.members {
            let piece = pieces.try_get(id)?;
            let slot = piece.slot().ok_or(CoreError::PieceUnplaced(id))?;
            let (x, y) = grid.coords(slot);
            out.push(GridPieceData {
                x: x as i32,
                y: y as i32,
                hit_boxes: piece.hit_boxes().iter().map(|hb| hb.export()).collect(),
            });
        }
        Ok(TileData { pieces: out })
    }
}
