//! Platforma Engine - Tile platformer movement core in WASM
//!
//! Architecture:
//! - domain/     - Tile ids and world constants
//! - physics/    - Bodies, collision probes, grounding
//! - spatial/    - Tile map world storage
//! - simulation/ - Orchestration only
//! - facade      - Public WASM API (in simulation/)

pub mod domain;
pub mod physics;
pub mod simulation;
pub mod spatial;

// Compatibility re-exports (keeps external paths short)
pub use domain::tiles;
pub use spatial::tile_map;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Platforma WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use physics::{
    Aabb, Body, BodyHooks, CollisionInfo, CollisionResolver, Direction, NoHooks, NullResolver,
    Vec2,
};
pub use simulation::{BodyId, PerfStats, World, WorldCore};
pub use spatial::TileMap;

// Export tile constants for JS
#[wasm_bindgen]
pub fn tile_empty() -> u8 { tiles::TILE_EMPTY }
#[wasm_bindgen]
pub fn tile_dirt() -> u8 { tiles::TILE_DIRT }
#[wasm_bindgen]
pub fn tile_stone() -> u8 { tiles::TILE_STONE }
#[wasm_bindgen]
pub fn tile_brick() -> u8 { tiles::TILE_BRICK }
#[wasm_bindgen]
pub fn tile_ladder() -> u8 { tiles::TILE_LADDER }
