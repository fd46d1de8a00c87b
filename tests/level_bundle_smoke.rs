use platforma_engine::simulation::LevelRoot;
use platforma_engine::tiles::{TILE_DIRT, TILE_EMPTY, TILE_STONE};
use platforma_engine::WorldCore;

#[test]
fn level_bundle_smoke_parses_and_is_queryable() {
    let json = r#"{
        "width": 4,
        "height": 3,
        "tile_size": 16.0,
        "tiles": [0, 0, 0, 0,
                  0, 2, 0, 0,
                  1, 1, 1, 1]
    }"#;

    let level = LevelRoot::from_json(json).expect("bundle should parse");
    assert_eq!(level.width, 4);
    assert_eq!(level.height, 3);

    let map = level.into_map().expect("bundle should build a map");
    assert_eq!(map.get_tile(1, 1), TILE_STONE);
    assert_eq!(map.get_tile(0, 2), TILE_DIRT);
    assert_eq!(map.get_tile(3, 0), TILE_EMPTY);
    // Out of bounds reads as empty
    assert_eq!(map.get_tile(-1, 0), TILE_EMPTY);
    assert_eq!(map.get_tile(0, 3), TILE_EMPTY);
}

#[test]
fn world_loads_a_bundle_and_bodies_collide_with_it() {
    let mut world = WorldCore::new(2, 2);
    world
        .load_level_json(
            r#"{"width": 6, "height": 4, "tiles": [0,0,0,0,0,0, 0,0,0,0,0,0, 0,0,0,0,0,0, 1,1,1,1,1,1]}"#,
        )
        .expect("bundle should load");

    let id = world.spawn_body(16.0, 8.0, 8.0, 8.0);
    world.set_body_gravity(id, true);
    world.set_body_collision(id, true);

    for _ in 0..200 {
        world.step();
    }

    // Floor row top face is at y = 3 * 16 = 48
    let body = world.body(id).expect("body should survive stepping");
    assert_eq!(body.bounding_box.y + body.bounding_box.height, 48.0);
    assert!(body.is_on_ground_now);
}
