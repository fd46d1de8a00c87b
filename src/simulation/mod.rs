//! World - platformer simulation orchestration
//!
//! `WorldCore` only orchestrates: tile storage lives in spatial/, movement
//! and collision response in physics/. The wasm-facing surface is the
//! `World` facade; everything here stays plain Rust so native tests and
//! benches run without a JS host.

use crate::domain::constants::DEFAULT_GRAVITY;
use crate::physics::Body;
use crate::spatial::TileMap;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
mod facade;
mod level;

pub use facade::World;
pub use level::LevelRoot;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Handle to a spawned body, stable for the body's lifetime
pub type BodyId = u32;

/// The simulation world
pub struct WorldCore {
    map: TileMap,
    bodies: Vec<(BodyId, Body)>,
    next_id: BodyId,

    // Settings
    gravity: f32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    // Reusable transfer buffer for rendering ([x, y, w, h] per body)
    body_rects: Vec<f32>,
}

impl WorldCore {
    /// Create a world with an empty map of the given tile dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            map: TileMap::new(width, height),
            bodies: Vec::new(),
            next_id: 1,
            gravity: DEFAULT_GRAVITY,
            frame: 0,
            perf_enabled: false,
            perf_stats: PerfStats::new(),
            body_rects: Vec::new(),
        }
    }

    /// Replace the map from a level bundle; removes all spawned bodies.
    pub fn load_level_json(&mut self, json: &str) -> Result<(), String> {
        let level = LevelRoot::from_json(json)?;
        self.map = level.into_map()?;
        self.bodies.clear();
        Ok(())
    }

    pub fn width(&self) -> u32 { self.map.width() }

    pub fn height(&self) -> u32 { self.map.height() }

    pub fn tile_size(&self) -> f32 { self.map.tile_size() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn map(&self) -> &TileMap { &self.map }

    pub fn map_mut(&mut self) -> &mut TileMap { &mut self.map }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    /// World gravity applied to every gravity-affected body per tick
    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    // === BODY API ===

    /// Spawn a body at world position (x, y) with box size (w, h).
    /// Returns the body ID. Gravity and world collision start disabled.
    pub fn spawn_body(&mut self, x: f32, y: f32, w: f32, h: f32) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.push((id, Body::new(x, y, w, h)));
        id
    }

    /// Remove a body by ID
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        if let Some(idx) = self.bodies.iter().position(|(bid, _)| *bid == id) {
            self.bodies.swap_remove(idx);
            return true;
        }
        false
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|(bid, _)| *bid == id).map(|(_, b)| b)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|(bid, _)| *bid == id).map(|(_, b)| b)
    }

    pub fn set_body_velocity(&mut self, id: BodyId, vx: f32, vy: f32) -> bool {
        if let Some(body) = self.body_mut(id) {
            body.velocity.x = vx;
            body.velocity.y = vy;
            return true;
        }
        false
    }

    pub fn set_body_gravity(&mut self, id: BodyId, enabled: bool) -> bool {
        if let Some(body) = self.body_mut(id) {
            body.is_affected_by_gravity = enabled;
            return true;
        }
        false
    }

    pub fn set_body_collision(&mut self, id: BodyId, enabled: bool) -> bool {
        if let Some(body) = self.body_mut(id) {
            body.does_collide_with_world = enabled;
            return true;
        }
        false
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Fill the transfer buffer with [x, y, w, h] per body (render extract)
    pub fn extract_body_rects(&mut self) -> &[f32] {
        self.body_rects.clear();
        for (_, body) in self.bodies.iter() {
            self.body_rects.push(body.bounding_box.x);
            self.body_rects.push(body.bounding_box.y);
            self.body_rects.push(body.bounding_box.width);
            self.body_rects.push(body.bounding_box.height);
        }
        &self.body_rects
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
