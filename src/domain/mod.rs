//! Level entities: hit boxes, grid pieces, tiles and their design-time records

pub mod hitbox;
pub mod level_data;
pub mod piece;
pub mod tile;

pub use hitbox::{HitBox, HitBoxOrigin};
pub use level_data::{GridPieceData, HitBoxData, LevelData, TileData, LEVEL_FORMAT_VERSION};
pub use piece::{GridPiece, PieceArena};
pub use tile::Tile;
