//! Tile shift - all-or-nothing one-cell move of a tile's pieces
//!
//! Two phases:
//! 1. Validation + planning: every member's destination must be in bounds and either empty or
//!    held by another member. The planned moves are read from one consistent view of the grid
//!    into the grid's `MoveBuffer` before anything is written.
//! 2. Commit: vacate every source slot, then place every piece at its destination and shift its
//!    hit boxes by one cell.
//!
//! Nothing is written unless validation passes, so a rejected shift leaves slots, pieces and hit
//! boxes exactly as they were.

use crate::common::PieceId;
use crate::domain::{PieceArena, Tile};
use crate::grid::Grid;

mod commit;
mod validate;

/// Unit step across the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Only the four unit steps are directions
    pub fn from_unit(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            _ => None,
        }
    }

    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Why a shift was refused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftRejection {
    /// A member would leave the grid
    OutOfBounds { piece: PieceId },
    /// A member's destination holds a piece from outside the tile
    Blocked { piece: PieceId, by: PieceId },
    /// A member is not in the arena or not placed in any slot
    Unplaced { piece: PieceId },
}

impl Tile {
    /// Shift by a unit step `(dir_x, dir_y)`. Any other step is refused.
    pub fn shift(&self, grid: &mut Grid, pieces: &mut PieceArena, dir_x: i32, dir_y: i32) -> bool {
        match Direction::from_unit(dir_x, dir_y) {
            Some(dir) => self.try_shift(grid, pieces, dir).is_ok(),
            None => {
                log::debug!("shift refused: ({}, {}) is not a unit step", dir_x, dir_y);
                false
            }
        }
    }

    /// Shift one cell, returning how many pieces moved
    pub fn try_shift(
        &self,
        grid: &mut Grid,
        pieces: &mut PieceArena,
        dir: Direction,
    ) -> Result<usize, ShiftRejection> {
        let mut moves = std::mem::take(&mut grid.pending_moves);
        moves.clear();

        let planned = validate::plan_shift(self, grid, pieces, dir, &mut moves);
        let result = match planned {
            Ok(()) => {
                commit::commit_shift(grid, pieces, moves.as_slice(), dir);
                Ok(moves.len())
            }
            Err(reason) => {
                log::debug!("shift {:?} rejected: {:?}", dir, reason);
                Err(reason)
            }
        };

        moves.clear();
        grid.pending_moves = moves;
        result
    }
}

#[cfg(test)]
mod tests;
