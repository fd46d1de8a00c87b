use crate::physics::{reset_probe_counters, take_probe_counters};

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
        reset_probe_counters();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let map = &world.map;
    let gravity = world.gravity;

    let mut speed_max = 0.0f32;
    let mut grounded = 0u32;

    for (_, body) in world.bodies.iter_mut() {
        body.update(map, gravity);

        // Driver contract: the landing-edge continuity flag is rotated
        // here, after the body's own check, never inside the body.
        body.was_ground_last_frame = body.is_on_ground_now;

        if perf_on {
            speed_max = speed_max.max(body.velocity.length());
            if body.is_on_ground_now {
                grounded += 1;
            }
        }
    }

    world.frame += 1;

    if perf_on {
        let (probes, hits) = take_probe_counters();
        world.perf_stats.edge_probes = probes as u32;
        world.perf_stats.edge_hits = hits as u32;
        world.perf_stats.bodies_grounded = grounded;
        world.perf_stats.speed_max = speed_max;
        if let Some(t0) = step_start {
            world.perf_stats.step_ms = t0.elapsed_ms();
        }
    }
}
