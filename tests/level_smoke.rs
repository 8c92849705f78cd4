use shattered_engine::Level;

const LEVEL: &str = r#"{
  "formatVersion": 1,
  "tiles": [
    { "pieces": [
      { "x": 0, "y": 7, "hitBoxes": [ { "x": 0, "y": 0, "width": 256, "height": 40 } ] },
      { "x": 1, "y": 7, "hitBoxes": [ { "x": 0, "y": 0, "width": 256, "height": 40 } ] }
    ] },
    { "pieces": [
      { "x": 5, "y": 5, "hitBoxes": [ { "x": 50, "y": 50, "width": 150, "height": 25 } ] }
    ] }
  ]
}"#;

#[test]
fn level_smoke_step() {
    let mut level = Level::new();
    level.enable_perf_metrics(true);
    assert!(level.load_level(LEVEL.to_string()).is_ok());
    assert_eq!(level.tile_count(), 2);
    assert_eq!(level.piece_count(), 3);

    // Ground top is y = 7 * 180 = 1260; stand the player just above it
    level.spawn_player(100, 1260 - 90 - 1);
    for _ in 0..5 {
        level.step(0, -1.0, -1.0, false, 16.0);
    }
    assert!(level.player_on_ground());
    assert_eq!(level.player_y(), 1170.0);

    let stats = level.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.hit_tests() > 0);
    assert_eq!(stats.lift_capped(), 0);
    assert_eq!(level.frame(), 5);
}

#[test]
fn arrows_slide_the_clicked_tile() {
    let mut level = Level::new();
    assert!(level.load_level(LEVEL.to_string()).is_ok());
    level.spawn_player(100, 1260 - 90);

    // Click the lone piece at (5, 5)
    level.step(0, 5.0 * 256.0 + 10.0, 5.0 * 180.0 + 10.0, true, 16.0);
    assert_eq!(level.selected_tile(), Some(1));

    // Push right once, then let the slide run to the grid edge
    level.step(0b00010, -1.0, -1.0, false, 16.0);
    assert!(level.is_sliding());
    for _ in 0..200 {
        level.step(0, -1.0, -1.0, false, 16.0);
    }
    assert!(!level.is_sliding());

    let json = level.level_json().unwrap_or_default();
    assert!(json.contains(r#"{"x":19,"y":5"#), "{}", json);
}

#[test]
fn render_extraction_lists_every_box() {
    let mut level = Level::new();
    assert!(level.load_level(LEVEL.to_string()).is_ok());
    assert_eq!(level.hit_box_corners().len(), 3 * 8);
    assert_eq!(level.player_corners().len(), 8);
    assert_eq!(level.hit_box_at(1280.0 + 60.0, 900.0 + 60.0), vec![2, 0]);
    assert!(level.hit_box_at(-10.0, -10.0).is_empty());
}
