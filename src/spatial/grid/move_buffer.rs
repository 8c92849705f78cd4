use crate::common::{PieceId, SlotId};

/// One planned relocation inside a shift transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceMove {
    pub piece: PieceId,
    pub from: SlotId,
    pub to: SlotId,
}

/// Reusable buffer of planned moves.
///
/// Allocated once per grid (one entry per slot is the most a single shift can need) and cleared
/// at the start of every transaction.
pub struct MoveBuffer {
    data: Vec<PieceMove>,
    capacity: usize,
}

impl Default for MoveBuffer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl MoveBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn push(&mut self, m: PieceMove) {
        debug_assert!(
            self.data.len() < self.capacity,
            "MoveBuffer: more moves than grid slots ({} >= {})",
            self.data.len(),
            self.capacity
        );
        self.data.push(m);
    }

    /// Reset length - memory stays allocated
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[PieceMove] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
