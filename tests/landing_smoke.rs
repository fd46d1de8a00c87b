use platforma_engine::tiles::TILE_STONE;
use platforma_engine::World;

#[test]
fn landing_smoke_step() {
    let mut world = World::new(32, 24);
    world.enable_perf_metrics(true);
    world.fill_tiles(0, 23, 32, 1, TILE_STONE);

    let id = world.spawn_body(100.0, 200.0, 12.0, 16.0);
    world.set_body_gravity(id, true);
    world.set_body_collision(id, true);

    for _ in 0..400 {
        world.step();
    }

    // Floor top face: 23 * 16 = 368
    assert!(world.is_body_on_ground(id));
    assert_eq!(world.body_y(id), 368.0 - 16.0);
    assert_eq!(world.body_vy(id), 0.0);

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 1);
    assert_eq!(stats.bodies_grounded(), 1);
}
