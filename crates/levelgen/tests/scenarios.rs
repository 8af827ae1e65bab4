use levelgen::dungeon::{MAX_ROOM_SIZE, MIN_ROOM_SIZE, macro_cell_bounds, macro_path, room_slot};
use levelgen::regions::compute_regions;
use levelgen::rng::SeededStream;
use levelgen::{GenerationConfig, GenerationError, LayoutStrategy, Pos, TileKind};

#[test]
fn scenario_a_cave_is_a_single_connected_region() {
    let config = GenerationConfig::new(12_345, 50, 50);
    let layout = LayoutStrategy::Cave { initial_wall_fraction: 0.45 }
        .generate(&config)
        .expect("scenario A cave should generate");

    assert!(layout.floor_count() >= 1);
    assert_eq!(compute_regions(&layout.grid).len(), 1);
    assert!(layout.rooms.is_empty(), "caves have no rooms");
}

#[test]
fn scenario_b_dungeon_rooms_fit_their_macro_cells() {
    let config = GenerationConfig::new(42, 30, 30);
    let layout = LayoutStrategy::Dungeon.generate(&config).expect("scenario B dungeon should generate");

    assert!((1..=9).contains(&layout.rooms.len()), "got {} rooms", layout.rooms.len());
    let path = macro_path(&mut SeededStream::new(config.seed));
    assert_eq!(path.len(), layout.rooms.len());

    for (room, cell) in layout.rooms.iter().zip(path) {
        let bounds = macro_cell_bounds(config.width, config.height, cell);
        let slot = room_slot(bounds, config.width, config.height);
        let max_width = MAX_ROOM_SIZE.min(slot.width);
        let max_height = MAX_ROOM_SIZE.min(slot.height);
        assert!((MIN_ROOM_SIZE.min(max_width)..=max_width).contains(&room.rect.width));
        assert!((MIN_ROOM_SIZE.min(max_height)..=max_height).contains(&room.rect.height));
        assert!(room.rect.within(&slot), "room {} escapes {slot:?}", room.id);
    }
    assert_eq!(compute_regions(&layout.grid).len(), 1);
}

#[test]
fn scenario_c_arena_has_wall_corner_and_open_center() {
    let config = GenerationConfig::new(0, 60, 60);
    let layout = LayoutStrategy::Arena { border_thickness: 3 }
        .generate(&config)
        .expect("scenario C arena should generate");

    assert_eq!(layout.tile_at(Pos::new(0, 0)), TileKind::Wall);
    assert_eq!(layout.tile_at(Pos::new(30, 30)), TileKind::Floor);
    assert!(layout.rooms.is_empty());
}

#[test]
fn saturated_cave_reports_an_empty_level_instead_of_looping() {
    let config = GenerationConfig::new(12_345, 50, 50);
    let result = LayoutStrategy::Cave { initial_wall_fraction: 1.0 }.generate(&config);
    assert!(matches!(result, Err(GenerationError::EmptyLevel { .. })));
}
