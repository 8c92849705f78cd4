//! Design-time level records.
//!
//! These carry the *original* placement of every entity (grid coordinates for pieces, relative
//! offset/size/rotation for hit boxes) so a level can be rebuilt after the runtime copy has been
//! scrolled or shifted around.

use serde::{Deserialize, Serialize};

pub const LEVEL_FORMAT_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitBoxData {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub rotation: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPieceData {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub hit_boxes: Vec<HitBoxData>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileData {
    #[serde(default)]
    pub pieces: Vec<GridPieceData>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelData {
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default)]
    pub tiles: Vec<TileData>,
}

fn default_format_version() -> u32 {
    LEVEL_FORMAT_VERSION
}

impl Default for LevelData {
    fn default() -> Self {
        Self { format_version: LEVEL_FORMAT_VERSION, tiles: Vec::new() }
    }
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let data: LevelData = serde_json::from_str(json).map_err(|e| e.to_string())?;
        if data.format_version != LEVEL_FORMAT_VERSION {
            return Err(format!("unsupported level format version: {}", data.format_version));
        }
        Ok(data)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
