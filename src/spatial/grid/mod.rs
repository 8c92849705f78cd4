//! Grid - fixed lattice of slots, each holding at most one piece
//!
//! Slots are stored row-major (`y * columns + x`). The grid is built once and never resized;
//! scrolling only moves slot screen positions.
//!
//! Occupancy is a two-sided link: `GridSlot::piece` and `GridPiece::slot`. Both sides are written
//! together by `place`/`clear` in `placement.rs` and nowhere else.

use crate::common::{PieceId, SlotId};
use crate::geometry::{RotatedRect, Vec2};

mod indexing;
mod move_buffer;
mod placement;
mod query;
mod scroll;

pub use move_buffer::{MoveBuffer, PieceMove};

pub const DEFAULT_COLUMNS: u32 = 20;
pub const DEFAULT_ROWS: u32 = 8;
pub const DEFAULT_CELL_WIDTH: i32 = 256;
pub const DEFAULT_CELL_HEIGHT: i32 = 180;

/// Grid dimensions, fixed at build time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSettings {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: i32,
    pub cell_height: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

/// One addressable cell of the grid
#[derive(Clone, Debug)]
pub struct GridSlot {
    x: u32,
    y: u32,
    position: Vec2,
    rect: RotatedRect,
    piece: Option<PieceId>,
}

impl GridSlot {
    fn new(x: u32, y: u32, position: Vec2, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            position,
            rect: RotatedRect::axis_aligned(position.x, position.y, width as f32, height as f32),
            piece: None,
        }
    }

    /// Grid coordinates, fixed for the slot's lifetime
    #[inline]
    pub fn coords(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Screen-space top-left (moves under scroll)
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn rect(&self) -> &RotatedRect {
        &self.rect
    }

    #[inline]
    pub fn piece(&self) -> Option<PieceId> {
        self.piece
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Translate the screen position and bounding rectangle (whole-grid scroll only)
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
        self.rect.translate(dx, dy);
    }
}

pub struct Grid {
    columns: u32,
    rows: u32,
    size: usize,
    cell_width: i32,
    cell_height: i32,

    /// Screen position of slot (0, 0)
    origin: Vec2,
    slots: Vec<GridSlot>,

    /// Reused by the tile shift transaction
    pub(crate) pending_moves: MoveBuffer,
}

impl Grid {
    /// Build a grid of empty slots laid out on a regular lattice
    pub fn new(settings: GridSettings) -> Self {
        let GridSettings { columns, rows, cell_width, cell_height } = settings;
        let size = (columns as usize) * (rows as usize);

        let mut slots = Vec::with_capacity(size);
        for y in 0..rows {
            for x in 0..columns {
                let position = Vec2::new(
                    (x as i32 * cell_width) as f32,
                    (y as i32 * cell_height) as f32,
                );
                slots.push(GridSlot::new(x, y, position, cell_width, cell_height));
            }
        }

        Self {
            columns,
            rows,
            size,
            cell_width,
            cell_height,
            origin: Vec2::zero(),
            slots,
            pending_moves: MoveBuffer::new(size),
        }
    }

    pub fn build(columns: u32, rows: u32, cell_width: i32, cell_height: i32) -> Self {
        Self::new(GridSettings { columns, rows, cell_width, cell_height })
    }

    pub fn settings(&self) -> GridSettings {
        GridSettings {
            columns: self.columns,
            rows: self.rows,
            cell_width: self.cell_width,
            cell_height: self.cell_height,
        }
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, id: SlotId) -> Option<&mut GridSlot> {
        self.slots.get_mut(id.0)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GridSettings::default())
    }
}
