use std::fmt;

use super::ids::{PieceId, TileId};

pub type CoreResult<T> = Result<T, CoreError>;

/// Caller errors reported by the grid/tile core.
///
/// None of these are fatal: the attempted action is dropped and state is left untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum CoreError {
    /// Grid coordinate outside `[0, columns) x [0, rows)`
    OutOfBounds { x: i32, y: i32 },
    /// The target cell already holds a piece
    SlotOccupied { x: i32, y: i32 },
    UnknownPiece(PieceId),
    UnknownTile(TileId),
    /// A piece may belong to exactly one tile
    PieceAlreadyInTile { piece: PieceId, tile: TileId },
    /// The operation needs the piece to sit in a slot
    PieceUnplaced(PieceId),
    HitBoxIndex { piece: PieceId, index: usize },
    InvalidLevel(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::OutOfBounds { x, y } => write!(f, "grid coordinate out of bounds: ({}, {})", x, y),
            CoreError::SlotOccupied { x, y } => write!(f, "grid slot ({}, {}) is already occupied", x, y),
            CoreError::UnknownPiece(id) => write!(f, "unknown grid piece: {}", id),
            CoreError::UnknownTile(id) => write!(f, "unknown tile: {}", id),
            CoreError::PieceAlreadyInTile { piece, tile } => {
                write!(f, "{} already belongs to {}", piece, tile)
            }
            CoreError::PieceUnplaced(id) => write!(f, "{} is not placed in the grid", id),
            CoreError::HitBoxIndex { piece, index } => {
                write!(f, "{} has no hit box at index {}", piece, index)
            }
            CoreError::InvalidLevel(msg) => write!(f, "invalid level: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}
