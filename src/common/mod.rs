//! Shared identifiers and the crate error type.

mod error;
mod ids;

pub use error::{CoreError, CoreResult};
pub use ids::{PieceId, SlotId, TileId};
