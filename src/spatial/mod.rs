pub mod tile_map;

pub use tile_map::TileMap;
