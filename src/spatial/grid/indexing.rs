use crate::common::{CoreError, CoreResult, PieceId, SlotId};

use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn columns(&self) -> u32 { self.columns }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    #[inline]
    pub fn cell_width(&self) -> i32 { self.cell_width }

    #[inline]
    pub fn cell_height(&self) -> i32 { self.cell_height }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.columns as usize) + (x as usize)
    }

    /// Column and row of a slot index. A zero-column grid has no slots; any index maps to row 0.
    #[inline]
    pub fn coords(&self, id: SlotId) -> (u32, u32) {
        let columns = self.columns.max(1) as usize;
        let x = (id.0 % columns) as u32;
        let y = (id.0 / columns) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.columns as i32 && y >= 0 && y < self.rows as i32
    }

    #[inline]
    pub fn slot_id(&self, x: i32, y: i32) -> Option<SlotId> {
        if self.in_bounds(x, y) {
            Some(SlotId(self.index(x as u32, y as u32)))
        } else {
            None
        }
    }

    pub fn checked_slot_id(&self, x: i32, y: i32) -> CoreResult<SlotId> {
        self.slot_id(x, y).ok_or_else(|| {
            log::warn!("rejected grid coordinate ({}, {}) for {}x{} grid", x, y, self.columns, self.rows);
            CoreError::OutOfBounds { x, y }
        })
    }

    // === Slot access ===
    #[inline]
    pub fn slot(&self, id: SlotId) -> Option<&GridSlot> {
        self.slots.get(id.0)
    }

    #[inline]
    pub fn slot_at(&self, x: i32, y: i32) -> Option<&GridSlot> {
        self.slot_id(x, y).and_then(|id| self.slot(id))
    }

    #[inline]
    pub fn piece_at(&self, x: i32, y: i32) -> Option<PieceId> {
        self.slot_at(x, y).and_then(|s| s.piece())
    }

    pub fn slots(&self) -> impl Iterator<Item = (SlotId, &GridSlot)> {
        self.slots.iter().enumerate().map(|(i, s)| (SlotId(i), s))
    }

    /// Occupied slots in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (SlotId, PieceId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.piece().map(|p| (SlotId(i), p)))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.piece().is_some()).count()
    }

    /// Grid cell under a screen pixel, accounting for scroll
    pub fn cell_at_pixel(&self, px: f32, py: f32) -> Option<(u32, u32)> {
        let gx = ((px - self.origin.x) / self.cell_width as f32).floor();
        let gy = ((py - self.origin.y) / self.cell_height as f32).floor();
        // NaN and infinities would saturate into a real cell
        if !gx.is_finite() || !gy.is_finite() {
            return None;
        }
        if self.in_bounds(gx as i32, gy as i32) {
            Some((gx as u32, gy as u32))
        } else {
            None
        }
    }
}
