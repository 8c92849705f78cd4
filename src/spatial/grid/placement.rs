use crate::common::{CoreError, CoreResult, PieceId, SlotId};
use crate::domain::PieceArena;

use super::*;

impl Grid {
    fn bad_slot(&self, id: SlotId) -> CoreError {
        let (x, y) = self.coords(id);
        CoreError::OutOfBounds { x: x as i32, y: y as i32 }
    }

    /// Put `piece` into `slot`, updating both sides of the link.
    ///
    /// The piece leaves its previous slot. Whatever occupied `slot` before is unlinked and
    /// returned; occupancy policy (refusing occupied cells) belongs to the caller.
    pub fn place(
        &mut self,
        pieces: &mut PieceArena,
        slot: SlotId,
        piece: PieceId,
    ) -> CoreResult<Option<PieceId>> {
        if slot.0 >= self.size {
            return Err(self.bad_slot(slot));
        }
        let previous_slot = pieces.try_get(piece)?.slot();

        if let Some(prev) = previous_slot {
            if let Some(s) = self.slot_mut(prev) {
                if s.piece == Some(piece) {
                    s.piece = None;
                }
            }
        }

        let evicted = match self.slot_mut(slot) {
            Some(s) => s.piece.replace(piece).filter(|&p| p != piece),
            None => None,
        };
        if let Some(old) = evicted {
            if let Some(p) = pieces.get_mut(old) {
                p.set_slot(None);
            }
        }
        if let Some(p) = pieces.get_mut(piece) {
            p.set_slot(Some(slot));
        }
        Ok(evicted)
    }

    /// Bounds-checked `place` by grid coordinate
    pub fn place_at(
        &mut self,
        pieces: &mut PieceArena,
        x: i32,
        y: i32,
        piece: PieceId,
    ) -> CoreResult<Option<PieceId>> {
        let slot = self.checked_slot_id(x, y)?;
        self.place(pieces, slot, piece)
    }

    /// Empty `slot`, unlinking its occupant on both sides
    pub fn clear(&mut self, pieces: &mut PieceArena, slot: SlotId) -> Option<PieceId> {
        let old = self.slot_mut(slot)?.piece.take()?;
        if let Some(p) = pieces.get_mut(old) {
            if p.slot() == Some(slot) {
                p.set_slot(None);
            }
        }
        Some(old)
    }

    pub fn clear_at(&mut self, pieces: &mut PieceArena, x: i32, y: i32) -> CoreResult<Option<PieceId>> {
        let slot = self.checked_slot_id(x, y)?;
        Ok(self.clear(pieces, slot))
    }

    /// Take `piece` out of whatever slot holds it
    pub fn vacate(&mut self, pieces: &mut PieceArena, piece: PieceId) -> Option<SlotId> {
        let slot = pieces.get(piece)?.slot()?;
        self.clear(pieces, slot);
        Some(slot)
    }

    /// True when every slot/piece link agrees in both directions
    pub fn links_consistent(&self, pieces: &PieceArena) -> bool {
        let slots_ok = self.slots().all(|(id, s)| match s.piece() {
            None => true,
            Some(p) => pieces.get(p).map(|p| p.slot() == Some(id)).unwrap_or(false),
        });
        let pieces_ok = pieces.iter().all(|(id, p)| match p.slot() {
            None => true,
            Some(s) => self.slot(s).map(|s| s.piece() == Some(id)).unwrap_or(false),
        });
        slots_ok && pieces_ok
    }
}
