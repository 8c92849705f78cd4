use crate::common::{PieceId, SlotId};
use crate::domain::{HitBox, PieceArena};

use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    /// Every hit box anchored in the grid, in slot order then z order
    pub fn placed_hit_boxes<'a>(
        &'a self,
        pieces: &'a PieceArena,
    ) -> impl Iterator<Item = (SlotId, PieceId, usize, &'a HitBox)> + 'a {
        self.occupied().flat_map(move |(slot, piece)| {
            pieces
                .get(piece)
                .map(|p| p.hit_boxes())
                .unwrap_or(&[])
                .iter()
                .enumerate()
                .map(move |(i, hb)| (slot, piece, i, hb))
        })
    }

    /// First placed hit box overlapping `rect`
    pub fn first_hit(&self, pieces: &PieceArena, rect: &RotatedRect) -> Option<(PieceId, usize)> {
        self.placed_hit_boxes(pieces)
            .find(|(_, _, _, hb)| hb.hit_test_rect(rect))
            .map(|(_, piece, i, _)| (piece, i))
    }

    /// Does any placed hit box overlap `rect`?
    /// Parallel slot scan with Rayon when feature enabled
    pub fn any_hit(&self, pieces: &PieceArena, rect: &RotatedRect) -> bool {
        let slot_hits = |s: &GridSlot| {
            s.piece()
                .and_then(|p| pieces.get(p))
                .map(|p| p.hit_boxes().iter().any(|hb| hb.hit_test_rect(rect)))
                .unwrap_or(false)
        };

        #[cfg(feature = "parallel")]
        {
            self.slots.par_iter().any(slot_hits)
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.slots.iter().any(slot_hits)
        }
    }
}
