//! Shift transaction properties over deterministic sweeps

use shattered_engine::{
    Direction, Grid, GridPiece, GridSettings, HitBox, InputState, PieceArena, PieceId, Player,
    PlayerConfig, Tile,
};

fn coords(grid: &Grid, pieces: &PieceArena, id: PieceId) -> (i32, i32) {
    let slot = pieces.get(id).and_then(|p| p.slot()).expect("placed");
    let (x, y) = grid.coords(slot);
    (x as i32, y as i32)
}

fn live_boxes(pieces: &PieceArena, ids: &[PieceId]) -> Vec<(f32, f32)> {
    ids.iter()
        .flat_map(|&id| pieces.get(id).map(|p| p.hit_boxes().to_vec()).unwrap_or_default())
        .map(|hb| {
            let c = hb.rect().center();
            (c.x, c.y)
        })
        .collect()
}

fn add(grid: &mut Grid, pieces: &mut PieceArena, x: i32, y: i32) -> PieceId {
    let pos = grid.slot_at(x, y).map(|s| s.position()).expect("in range");
    let mut piece = GridPiece::new();
    piece.add_hit_box(HitBox::relative(20, 30, pos.x as i32 + 20, pos.y as i32 + 30, 100, 40, 0.3));
    let id = pieces.insert(piece);
    grid.place_at(pieces, x, y, id).expect("in range");
    id
}

/// Small L-shaped tile plus a blocker, placed at every offset of a 7x5 grid
fn scenarios() -> Vec<(i32, i32, i32, i32)> {
    let mut out = Vec::new();
    for ox in 0..5 {
        for oy in 0..4 {
            for (bx, by) in [(ox + 2, oy), (ox, oy + 1), (6, 4), (ox + 1, oy + 1)] {
                out.push((ox, oy, bx, by));
            }
        }
    }
    out
}

#[test]
fn shifts_are_atomic_rigid_and_bounded() {
    for (ox, oy, bx, by) in scenarios() {
        for dir in Direction::ALL {
            let mut grid = Grid::build(7, 5, 256, 180);
            let mut pieces = PieceArena::new();
            let shape = [(0, 0), (1, 0), (1, 1)];
            let ids: Vec<PieceId> = shape.iter().map(|(dx, dy)| add(&mut grid, &mut pieces, ox + dx, oy + dy)).collect();
            let blocker = if grid.piece_at(bx, by).is_none() && grid.in_bounds(bx, by) {
                Some(add(&mut grid, &mut pieces, bx, by))
            } else {
                None
            };

            let mut tile = Tile::new();
            for &id in &ids {
                tile.add_member(id);
            }

            let before: Vec<(i32, i32)> = ids.iter().map(|&id| coords(&grid, &pieces, id)).collect();
            let boxes_before = live_boxes(&pieces, &ids);
            let blocker_before = blocker.map(|b| coords(&grid, &pieces, b));

            let (dx, dy) = dir.delta();
            let ok = tile.shift(&mut grid, &mut pieces, dx, dy);
            let after: Vec<(i32, i32)> = ids.iter().map(|&id| coords(&grid, &pieces, id)).collect();

            let leaves_grid = before.iter().any(|&(x, y)| !grid.in_bounds(x + dx, y + dy));
            let hits_blocker = blocker_before
                .map(|b| before.iter().any(|&(x, y)| (x + dx, y + dy) == b))
                .unwrap_or(false);
            assert_eq!(ok, !leaves_grid && !hits_blocker, "at ({}, {}) going {:?}", ox, oy, dir);

            if ok {
                for (a, b) in before.iter().zip(&after) {
                    assert_eq!((b.0 - a.0, b.1 - a.1), (dx, dy));
                }
                let px = -(dx * 256) as f32;
                let py = -(dy * 180) as f32;
                for (a, b) in boxes_before.iter().zip(live_boxes(&pieces, &ids)) {
                    assert!((b.0 - a.0 - px).abs() < 1e-3 && (b.1 - a.1 - py).abs() < 1e-3);
                }
            } else {
                assert_eq!(before, after);
                assert_eq!(boxes_before, live_boxes(&pieces, &ids));
            }
            assert_eq!(blocker.map(|b| coords(&grid, &pieces, b)), blocker_before);
            assert!(grid.links_consistent(&pieces));
        }
    }
}

#[test]
fn single_piece_on_default_grid() {
    let mut grid = Grid::new(GridSettings::default());
    let mut pieces = PieceArena::new();
    let id = add(&mut grid, &mut pieces, 5, 5);
    let mut tile = Tile::new();
    tile.add_member(id);

    let x0 = live_boxes(&pieces, &[id])[0].0;
    assert!(tile.shift(&mut grid, &mut pieces, 1, 0));
    assert_eq!(coords(&grid, &pieces, id), (6, 5));
    assert_eq!(live_boxes(&pieces, &[id])[0].0, x0 - 256.0);
    assert_eq!(pieces.get(id).map(|p| p.hit_boxes()[0].origin().x), Some(20));
}

#[test]
fn twenty_right_shifts_stop_at_the_last_column() {
    let mut grid = Grid::new(GridSettings::default());
    let mut pieces = PieceArena::new();
    let id = add(&mut grid, &mut pieces, 5, 5);
    let mut tile = Tile::new();
    tile.add_member(id);

    let results: Vec<bool> = (0..20).map(|_| tile.shift(&mut grid, &mut pieces, 1, 0)).collect();
    let first_fail = results.iter().position(|ok| !ok);
    assert_eq!(first_fail, Some(14));
    assert!(results[14..].iter().all(|ok| !ok));
    assert_eq!(coords(&grid, &pieces, id), (19, 5));
}

#[test]
fn player_lands_on_ground_box() {
    let mut grid = Grid::new(GridSettings::default());
    let mut pieces = PieceArena::new();
    let mut ground = GridPiece::new();
    let ground_box = HitBox::new(0, 1260, 256, 40, 0.0);
    ground.add_hit_box(ground_box.clone());
    let id = pieces.insert(ground);
    grid.place_at(&mut pieces, 0, 7, id).expect("in range");

    let mut player = Player::new(PlayerConfig::default(), 50, 1260 - 90 - 1);
    player.set_velocity(0.0, 5.0);
    assert!(!player.on_ground());

    player.integrate(&InputState::default(), &grid, &pieces);
    assert!(player.on_ground());
    assert_eq!(player.velocity().y, 0.0);
    assert!(!player.hit_box().hit_test(&ground_box));
}

#[test]
fn falling_player_never_ends_inside_ground() {
    for speed in 1..40 {
        for x in (-80..300).step_by(23) {
            let mut grid = Grid::new(GridSettings::default());
            let mut pieces = PieceArena::new();
            let mut ground = GridPiece::new();
            ground.add_hit_box(HitBox::new(0, 1260, 256, 40, 0.0));
            ground.add_hit_box(HitBox::new(60, 1200, 80, 30, 0.6));
            let id = pieces.insert(ground);
            grid.place_at(&mut pieces, 0, 7, id).expect("in range");

            let mut player = Player::new(PlayerConfig::default(), x, 1000);
            player.set_velocity(0.0, speed as f32);
            for _ in 0..30 {
                player.integrate(&InputState::default(), &grid, &pieces);
                let inside = grid
                    .placed_hit_boxes(&pieces)
                    .any(|(_, _, _, hb)| hb.hit_test(player.hit_box()));
                assert!(!inside, "speed {} x {}", speed, x);
            }
        }
    }
}
