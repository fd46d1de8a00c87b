//! Physics System - Axis-separated tile collision
//!
//! Implements velocity-based movement with per-axis edge probes against the
//! tile world.
//!
//! Key concepts:
//! - Bodies have a velocity (vx, vy) that persists across frames
//! - Gravity accelerates gravity-affected bodies downward each tick
//! - Before a move commits, the leading edge in the direction of travel is
//!   probed against the world, one axis at a time (horizontal first)
//! - A hit snaps the body flush against the obstruction and zeroes that
//!   axis' velocity, so a body never tunnels into or slides along a wall
//!   it hit this frame

mod aabb;
mod body;
mod collision;
mod perf;
mod vec2;

pub use aabb::Aabb;
pub use body::{Body, BodyHooks, NoHooks};
pub use collision::{CollisionInfo, CollisionResolver, Direction, NullResolver};
pub use perf::{reset_probe_counters, take_probe_counters, PERF_EDGE_HITS, PERF_EDGE_PROBES};
pub use vec2::Vec2;
