use crate::domain::tiles::{TileId, TILE_EMPTY};

/// Direction of travel that produced a probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Outcome of the per-axis collision probes for one body, one frame.
///
/// Owned by its body and reused across frames: `reset()` runs at the start
/// of every collision check, so no field ever carries stale data into a new
/// frame's decisions.
///
/// Population is asymmetric on purpose: `world_*` and `direction_*` record
/// every *attempted* probe (hit or miss), while `tile_*`, `corrected_*`,
/// `tile_type` and the `is_collision_*` flags are written only on a
/// confirmed hit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionInfo {
    /// Whether a collision occurred on the X axis
    pub is_collision_x: bool,
    /// Whether a collision occurred on the Y axis
    pub is_collision_y: bool,
    /// The world X coordinate that was probed
    pub world_x: f32,
    /// The world Y coordinate that was probed
    pub world_y: f32,
    /// Horizontal direction of travel, `None` if no probe ran this frame
    pub direction_x: Option<Direction>,
    /// Vertical direction of travel, `None` if no probe ran this frame
    pub direction_y: Option<Direction>,
    /// Tile grid X of the hit
    pub tile_x: i32,
    /// Tile grid Y of the hit
    pub tile_y: i32,
    /// Position to snap to so the box sits flush on the X axis
    pub corrected_x: f32,
    /// Position to snap to so the box sits flush on the Y axis
    pub corrected_y: f32,
    /// Classification of the tile that caused the hit (0 = none)
    pub tile_type: TileId,
}

impl CollisionInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all collision information back to the neutral state.
    pub fn reset(&mut self) {
        self.is_collision_x = false;
        self.is_collision_y = false;
        self.world_x = 0.0;
        self.world_y = 0.0;
        self.direction_x = None;
        self.direction_y = None;
        self.tile_x = 0;
        self.tile_y = 0;
        self.corrected_x = 0.0;
        self.corrected_y = 0.0;
        self.tile_type = TILE_EMPTY;
    }
}

/// World-collision oracle shared by every body.
///
/// Both probes are synchronous and side-effect-limited to `info`; an
/// implementation must be stateless between calls so that any number of
/// bodies can share one instance.
///
/// Contract: the caller records the probed coordinate and direction into
/// `info` before the call. On a hit the implementation sets the
/// `is_collision_*` flag and fully populates the tile coordinates,
/// `tile_type` and the corrected coordinate for that axis; on a miss it
/// leaves all of them untouched.
pub trait CollisionResolver {
    /// Test the vertical edge at world-x `probe_x`, spanning
    /// `[top_y, bottom_y]` inclusive. `direction` is `Left` or `Right` and
    /// selects which face of the hit tile `corrected_x` resolves to.
    fn check_horizontal_edge(
        &self,
        probe_x: f32,
        top_y: f32,
        bottom_y: f32,
        direction: Direction,
        info: &mut CollisionInfo,
    );

    /// Test the horizontal edge at world-y `probe_y`, spanning
    /// `[left_x, right_x]` inclusive. `direction` is `Up` or `Down`.
    fn check_vertical_edge(
        &self,
        probe_y: f32,
        left_x: f32,
        right_x: f32,
        direction: Direction,
        info: &mut CollisionInfo,
    );
}

/// Resolver for bodies not attached to any world: never reports a hit.
pub struct NullResolver;

impl CollisionResolver for NullResolver {
    fn check_horizontal_edge(
        &self,
        _probe_x: f32,
        _top_y: f32,
        _bottom_y: f32,
        _direction: Direction,
        _info: &mut CollisionInfo,
    ) {
    }

    fn check_vertical_edge(
        &self,
        _probe_y: f32,
        _left_x: f32,
        _right_x: f32,
        _direction: Direction,
        _info: &mut CollisionInfo,
    ) {
    }
}
