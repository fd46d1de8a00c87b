use super::aabb::Aabb;
use super::collision::{CollisionInfo, CollisionResolver, Direction};
use super::vec2::Vec2;

/// Per-frame extension points for a body.
///
/// Selected by composition: the caller passes a hooks value into
/// `update_with_hooks`/`check_collision_with_hooks`. Every method defaults
/// to a no-op, so implementors override only what they need.
pub trait BodyHooks {
    /// Called after the collision info is reset, before any probe runs.
    fn pre_check_collision(&mut self, _body: &mut Body) {}

    /// Called after both axes have been resolved.
    fn post_check_collision(&mut self, _body: &mut Body) {}

    /// Called when the body transitions from airborne to grounded.
    fn on_landing(&mut self, _body: &mut Body) {}
}

/// The no-op hook set, for bodies with no gameplay attached.
pub struct NoHooks;

impl BodyHooks for NoHooks {}

/// A box capable of using a collision resolver and reacting to collisions.
///
/// Owns its velocity, bounding box and collision info exclusively; the
/// collision resolver is shared and passed in per update. This is a hot
/// inner-loop type: malformed inputs (negative box dimensions, non-finite
/// velocities) are caller contract violations and are not guarded.
pub struct Body {
    pub velocity: Vec2,
    pub bounding_box: Aabb,
    pub collision_info: CollisionInfo,
    /// Set by a successful downward probe. Never cleared by the body
    /// itself; see `was_ground_last_frame`.
    pub is_on_ground_now: bool,
    /// Continuity flag for landing-edge detection. The frame driver must
    /// copy `is_on_ground_now` into this between ticks (`WorldCore::step`
    /// does); a body driven manually owns that transfer itself.
    pub was_ground_last_frame: bool,
    pub is_affected_by_gravity: bool,
    pub does_collide_with_world: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            velocity: Vec2::zero(),
            bounding_box: Aabb::new(x, y, width, height),
            collision_info: CollisionInfo::new(),
            is_on_ground_now: false,
            was_ground_last_frame: false,
            is_affected_by_gravity: false,
            does_collide_with_world: false,
        }
    }

    /// Advance one simulation tick: gravity, collision, integration.
    ///
    /// Gravity is applied before the collision check so the check sees the
    /// post-gravity velocity; integration runs last with the possibly
    /// zeroed velocity, so a body that hit a wall or floor this frame does
    /// not also slide or fall further the same frame.
    pub fn update<R: CollisionResolver + ?Sized>(&mut self, resolver: &R, gravity: f32) {
        self.update_with_hooks(resolver, gravity, &mut NoHooks);
    }

    pub fn update_with_hooks<R, H>(&mut self, resolver: &R, gravity: f32, hooks: &mut H)
    where
        R: CollisionResolver + ?Sized,
        H: BodyHooks,
    {
        if self.is_affected_by_gravity {
            self.velocity.y += gravity;
        }

        if self.does_collide_with_world {
            self.check_collision_with_hooks(resolver, hooks);
        }

        self.bounding_box.x += self.velocity.x;
        self.bounding_box.y += self.velocity.y;
    }

    /// Run the per-axis collision probes and correct position/velocity.
    pub fn check_collision<R: CollisionResolver + ?Sized>(&mut self, resolver: &R) {
        self.check_collision_with_hooks(resolver, &mut NoHooks);
    }

    /// Horizontal axis is always resolved before vertical, so diagonal
    /// motion into a corner decomposes deterministically: the vertical
    /// probe spans the already-corrected x position.
    pub fn check_collision_with_hooks<R, H>(&mut self, resolver: &R, hooks: &mut H)
    where
        R: CollisionResolver + ?Sized,
        H: BodyHooks,
    {
        self.collision_info.reset();

        hooks.pre_check_collision(self);

        // Check the horizontal axis first
        if self.velocity.x < 0.0 {
            // Moving left, so only check the potential new left edge
            let probe_x = self.bounding_box.x + self.velocity.x;
            self.collision_info.world_x = probe_x;
            self.collision_info.direction_x = Some(Direction::Left);
            resolver.check_horizontal_edge(
                probe_x,
                self.bounding_box.y,
                self.bounding_box.y + self.bounding_box.height - 1.0,
                Direction::Left,
                &mut self.collision_info,
            );

            if self.collision_info.is_collision_x {
                self.bounding_box.x = self.collision_info.corrected_x;
                self.velocity.x = 0.0;
            }
        } else if self.velocity.x > 0.0 {
            // Moving right, so only check the potential new right edge
            let probe_x = self.bounding_box.right() + self.velocity.x;
            self.collision_info.world_x = probe_x;
            self.collision_info.direction_x = Some(Direction::Right);
            resolver.check_horizontal_edge(
                probe_x,
                self.bounding_box.y,
                self.bounding_box.y + self.bounding_box.height - 1.0,
                Direction::Right,
                &mut self.collision_info,
            );

            if self.collision_info.is_collision_x {
                self.bounding_box.x = self.collision_info.corrected_x - self.bounding_box.width;
                self.velocity.x = 0.0;
            }
        }

        // Check the vertical axis second
        if self.velocity.y < 0.0 {
            // Moving up, so only check the potential new top edge
            let probe_y = self.bounding_box.y + self.velocity.y;
            self.collision_info.world_y = probe_y;
            self.collision_info.direction_y = Some(Direction::Up);
            resolver.check_vertical_edge(
                probe_y,
                self.bounding_box.x,
                self.bounding_box.x + self.bounding_box.width - 1.0,
                Direction::Up,
                &mut self.collision_info,
            );

            if self.collision_info.is_collision_y {
                self.bounding_box.y = self.collision_info.corrected_y;
                self.velocity.y = 0.0;
            }
        } else if self.velocity.y > 0.0 {
            // Moving down, so only check the potential new bottom edge
            let probe_y = self.bounding_box.bottom() + self.velocity.y;
            self.collision_info.world_y = probe_y;
            self.collision_info.direction_y = Some(Direction::Down);
            resolver.check_vertical_edge(
                probe_y,
                self.bounding_box.x,
                self.bounding_box.x + self.bounding_box.width - 1.0,
                Direction::Down,
                &mut self.collision_info,
            );

            if self.collision_info.is_collision_y {
                self.bounding_box.y = self.collision_info.corrected_y - self.bounding_box.height;
                self.velocity.y = 0.0;
                self.is_on_ground_now = true;

                if !self.was_ground_last_frame {
                    hooks.on_landing(self);
                }
            }
        }

        hooks.post_check_collision(self);
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
