use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use crate::domain::tiles::TileId;

use super::perf_stats::PerfStats;
use super::{BodyId, WorldCore};

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with an empty map of the given tile dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn tile_size(&self) -> f32 { self.core.tile_size() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn load_level(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_level_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    pub fn gravity(&self) -> f32 {
        self.core.gravity()
    }

    /// Place a tile; returns false when out of bounds
    pub fn set_tile(&mut self, x: u32, y: u32, tile: TileId) -> bool {
        self.core.map_mut().set_tile(x, y, tile)
    }

    /// Tile at grid coordinates (empty when out of bounds)
    pub fn get_tile(&self, x: i32, y: i32) -> TileId {
        self.core.map().get_tile(x, y)
    }

    /// Fill a tile rectangle (level building)
    pub fn fill_tiles(&mut self, x: u32, y: u32, w: u32, h: u32, tile: TileId) {
        self.core.map_mut().fill_rect(x, y, w, h, tile);
    }

    // === BODY API ===

    /// Spawn a body at world position (x, y) with box size (w, h).
    /// Returns the body ID.
    pub fn spawn_body(&mut self, x: f32, y: f32, w: f32, h: f32) -> BodyId {
        self.core.spawn_body(x, y, w, h)
    }

    /// Remove a body by ID
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        self.core.remove_body(id)
    }

    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    pub fn set_body_velocity(&mut self, id: BodyId, vx: f32, vy: f32) -> bool {
        self.core.set_body_velocity(id, vx, vy)
    }

    pub fn set_body_gravity(&mut self, id: BodyId, enabled: bool) -> bool {
        self.core.set_body_gravity(id, enabled)
    }

    pub fn set_body_collision(&mut self, id: BodyId, enabled: bool) -> bool {
        self.core.set_body_collision(id, enabled)
    }

    pub fn body_x(&self, id: BodyId) -> f32 {
        self.core.body(id).map_or(0.0, |b| b.bounding_box.x)
    }

    pub fn body_y(&self, id: BodyId) -> f32 {
        self.core.body(id).map_or(0.0, |b| b.bounding_box.y)
    }

    pub fn body_vx(&self, id: BodyId) -> f32 {
        self.core.body(id).map_or(0.0, |b| b.velocity.x)
    }

    pub fn body_vy(&self, id: BodyId) -> f32 {
        self.core.body(id).map_or(0.0, |b| b.velocity.y)
    }

    pub fn is_body_on_ground(&self, id: BodyId) -> bool {
        self.core.body(id).map_or(false, |b| b.is_on_ground_now)
    }

    /// Whether the body's last check collided on the X axis
    pub fn body_hit_wall(&self, id: BodyId) -> bool {
        self.core.body(id).map_or(false, |b| b.collision_info.is_collision_x)
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Copy out [x, y, w, h] per body for rendering
    pub fn body_rects(&mut self) -> Float32Array {
        Float32Array::from(self.core.extract_body_rects())
    }
}
