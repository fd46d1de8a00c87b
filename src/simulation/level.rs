use serde::{Deserialize, Serialize};

use crate::domain::constants::TILE_SIZE;
use crate::domain::tiles::TileId;
use crate::spatial::TileMap;

/// On-disk level bundle: dimensions plus row-major tile ids.
///
/// Unknown tile ids are accepted as-is; the tile palette is open content.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelRoot {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    pub tiles: Vec<TileId>,
}

fn default_tile_size() -> f32 {
    TILE_SIZE
}

impl LevelRoot {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn into_map(self) -> Result<TileMap, String> {
        TileMap::from_tiles(self.width, self.height, self.tile_size, self.tiles)
    }
}
