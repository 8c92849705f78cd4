use crate::common::{CoreError, CoreResult, PieceId, SlotId};

use super::hitbox::HitBox;

/// A placed game object: an ordered list of hit boxes plus a back-reference to its slot.
///
/// The slot back-reference is only written by `Grid` placement so that it always mirrors the
/// slot's own occupant.
#[derive(Clone, Debug, Default)]
pub struct GridPiece {
    hit_boxes: Vec<HitBox>,
    slot: Option<SlotId>,
}

impl GridPiece {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn slot(&self) -> Option<SlotId> {
        self.slot
    }

    #[inline]
    pub(crate) fn set_slot(&mut self, slot: Option<SlotId>) {
        self.slot = slot;
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.slot.is_some()
    }

    /// Hit boxes in z/creation order
    #[inline]
    pub fn hit_boxes(&self) -> &[HitBox] {
        &self.hit_boxes
    }

    /// Append a hit box and return its index
    pub fn add_hit_box(&mut self, hit_box: HitBox) -> usize {
        self.hit_boxes.push(hit_box);
        self.hit_boxes.len() - 1
    }

    /// Remove the hit box at `index`, keeping the order of the rest
    pub fn remove_hit_box(&mut self, index: usize) -> Option<HitBox> {
        if index < self.hit_boxes.len() {
            Some(self.hit_boxes.remove(index))
        } else {
            None
        }
    }

    pub fn hit_box_mut(&mut self, index: usize) -> Option<&mut HitBox> {
        self.hit_boxes.get_mut(index)
    }

    /// Live shift of every hit box (grid shifts and scrolling)
    pub fn translate_hit_boxes(&mut self, dx: i32, dy: i32) {
        for hb in self.hit_boxes.iter_mut() {
            hb.shift(dx, dy);
        }
    }
}

/// Owner of every `GridPiece`, addressed by stable `PieceId` handles.
///
/// Handles are never reused: removing a piece leaves a hole so stale ids can't alias a newer piece.
/// `clear` keeps the holes too, so ids handed out before a reload stay dead afterwards.
#[derive(Clone, Debug, Default)]
pub struct PieceArena {
    pieces: Vec<Option<GridPiece>>,
    live: usize,
}

impl PieceArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, piece: GridPiece) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(Some(piece));
        self.live += 1;
        id
    }

    /// Drop a piece from the arena. The caller must have vacated its slot first.
    pub(crate) fn remove(&mut self, id: PieceId) -> Option<GridPiece> {
        let removed = self.pieces.get_mut(id.index())?.take();
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&GridPiece> {
        self.pieces.get(id.index())?.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut GridPiece> {
        self.pieces.get_mut(id.index())?.as_mut()
    }

    pub fn try_get(&self, id: PieceId) -> CoreResult<&GridPiece> {
        self.get(id).ok_or(CoreError::UnknownPiece(id))
    }

    pub fn try_get_mut(&mut self, id: PieceId) -> CoreResult<&mut GridPiece> {
        self.get_mut(id).ok_or(CoreError::UnknownPiece(id))
    }

    #[inline]
    pub fn contains(&self, id: PieceId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &GridPiece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_ref().map(|p| (PieceId(i as u32), p)))
    }

    pub fn clear(&mut self) {
        for piece in self.pieces.iter_mut() {
            *piece = None;
        }
        self.live = 0;
    }
}
