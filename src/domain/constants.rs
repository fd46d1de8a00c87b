//! World constants shared by every simulated body.

/// Downward acceleration added to a gravity-affected body's vertical
/// velocity once per tick (units per tick squared).
pub const DEFAULT_GRAVITY: f32 = 0.25;

/// Edge length of one world tile in world units.
pub const TILE_SIZE: f32 = 16.0;
