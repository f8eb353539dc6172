use tileworld::{
    DEFAULT_LIGHT_RADIUS, MemoryStore, Seed, Session, StringInput, Tile, World, compute_visible,
    interact_with_input_string,
};

fn final_world(input: &str) -> World {
    let mut session = Session::new();
    session
        .run(&mut StringInput::new(input), &mut MemoryStore::default())
        .expect("scripted run should not touch the store");
    session.world().cloned().expect("input should reach play")
}

#[test]
fn identical_inputs_produce_identical_hashes() {
    for input in ["N123S", "N123SWWDD", "N99999SPWASDO", "N0S", "NS"] {
        let first = final_world(input);
        let second = final_world(input);
        assert_eq!(first.snapshot_hash(), second.snapshot_hash(), "input {input:?}");
        assert_eq!(first.grid().render_ascii(), second.grid().render_ascii());
    }
}

#[test]
fn different_seeds_produce_different_hashes() {
    let a = final_world("N123S");
    let b = final_world("N456S");
    assert_ne!(a.snapshot_hash(), b.snapshot_hash());
}

#[test]
fn input_string_frame_matches_fresh_world_for_new_game() {
    let frame = interact_with_input_string("n123s", &mut MemoryStore::default())
        .expect("no store access")
        .expect("world built");
    assert_eq!(frame, World::new(Seed::new(123)).worldframe());
    assert_eq!(frame.count(Tile::Player), 1);
    assert!(frame.walkable_tiles_connected());
}

#[test]
fn player_always_stands_on_walkable_tile() {
    let world = final_world("N2024SWWWWWWAAAAAAAASSSSSSSSSSDDDDDDDDDDDDDDDDWWWW");
    assert_eq!(world.grid().tile_at(world.player()), Tile::Player);
    assert_eq!(world.grid().count(Tile::Player), 1);
    assert!(world.grid().walkable_tiles_connected());
}

#[test]
fn light_masks_frame_but_not_world() {
    let dark = final_world("N77SP");
    let bright = final_world("N77S");
    let masked = compute_visible(&dark, DEFAULT_LIGHT_RADIUS).apply(dark.grid());
    let unmasked = compute_visible(&bright, DEFAULT_LIGHT_RADIUS).apply(bright.grid());

    assert_eq!(dark.grid(), bright.grid());
    assert_eq!(&unmasked, bright.grid());
    assert!(masked.count(Tile::Floor) < unmasked.count(Tile::Floor));
    assert_eq!(masked.tile_at(dark.player()), Tile::Player);
}
