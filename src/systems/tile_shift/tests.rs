use super::*;
use crate::domain::{GridPiece, HitBox};

fn setup() -> (Grid, PieceArena) {
    (Grid::build(6, 4, 100, 50), PieceArena::new())
}

fn place(grid: &mut Grid, pieces: &mut PieceArena, x: i32, y: i32) -> PieceId {
    let slot = grid.slot_at(x, y).map(|s| s.position()).expect("in range");
    let mut piece = GridPiece::new();
    piece.add_hit_box(HitBox::relative(10, 5, slot.x as i32 + 10, slot.y as i32 + 5, 20, 20, 0.0));
    let id = pieces.insert(piece);
    grid.place_at(pieces, x, y, id).expect("in range");
    id
}

fn coords(grid: &Grid, pieces: &PieceArena, id: PieceId) -> (u32, u32) {
    let slot = pieces.get(id).and_then(|p| p.slot()).expect("placed");
    grid.coords(slot)
}

fn live_x(pieces: &PieceArena, id: PieceId) -> f32 {
    pieces.get(id).map(|p| p.hit_boxes()[0].rect().top_left().x).expect("piece")
}

#[test]
fn direction_accepts_only_unit_steps() {
    for dir in Direction::ALL {
        let (dx, dy) = dir.delta();
        assert_eq!(Direction::from_unit(dx, dy), Some(dir));
    }
    assert_eq!(Direction::from_unit(1, 1), None);
    assert_eq!(Direction::from_unit(0, 0), None);
    assert_eq!(Direction::from_unit(2, 0), None);
}

#[test]
fn shift_moves_piece_and_hit_boxes() {
    let (mut grid, mut pieces) = setup();
    let p = place(&mut grid, &mut pieces, 2, 1);
    let mut tile = Tile::new();
    tile.add_member(p);
    let before = live_x(&pieces, p);

    assert!(tile.shift(&mut grid, &mut pieces, 1, 0));
    assert_eq!(coords(&grid, &pieces, p), (3, 1));
    assert_eq!(grid.piece_at(2, 1), None);
    assert_eq!(live_x(&pieces, p), before - 100.0);
    assert_eq!(pieces.get(p).map(|p| p.hit_boxes()[0].origin().x), Some(10));
    assert!(grid.links_consistent(&pieces));
}

#[test]
fn vertical_shift_uses_cell_height() {
    let (mut grid, mut pieces) = setup();
    let p = place(&mut grid, &mut pieces, 0, 0);
    let mut tile = Tile::new();
    tile.add_member(p);
    let before = pieces.get(p).map(|p| p.hit_boxes()[0].rect().top_left().y).expect("piece");

    assert!(tile.shift(&mut grid, &mut pieces, 0, 1));
    let after = pieces.get(p).map(|p| p.hit_boxes()[0].rect().top_left().y).expect("piece");
    assert_eq!(coords(&grid, &pieces, p), (0, 1));
    assert_eq!(after, before - 50.0);
}

#[test]
fn members_may_enter_each_others_cells() {
    let (mut grid, mut pieces) = setup();
    let a = place(&mut grid, &mut pieces, 1, 2);
    let b = place(&mut grid, &mut pieces, 2, 2);
    let c = place(&mut grid, &mut pieces, 3, 2);
    let mut tile = Tile::new();
    for id in [a, b, c] {
        tile.add_member(id);
    }

    assert!(tile.shift(&mut grid, &mut pieces, -1, 0));
    assert_eq!(coords(&grid, &pieces, a), (0, 2));
    assert_eq!(coords(&grid, &pieces, b), (1, 2));
    assert_eq!(coords(&grid, &pieces, c), (2, 2));
    assert_eq!(grid.piece_at(3, 2), None);
    assert_eq!(grid.occupied_count(), 3);

    assert!(tile.shift(&mut grid, &mut pieces, 1, 0));
    assert!(tile.shift(&mut grid, &mut pieces, 1, 0));
    assert_eq!(coords(&grid, &pieces, c), (4, 2));
    assert!(grid.links_consistent(&pieces));
}

#[test]
fn blocked_shift_changes_nothing() {
    let (mut grid, mut pieces) = setup();
    let a = place(&mut grid, &mut pieces, 1, 1);
    let b = place(&mut grid, &mut pieces, 1, 2);
    let wall = place(&mut grid, &mut pieces, 2, 2);
    let mut tile = Tile::new();
    tile.add_member(a);
    tile.add_member(b);
    let xs = (live_x(&pieces, a), live_x(&pieces, b), live_x(&pieces, wall));

    assert_eq!(
        tile.try_shift(&mut grid, &mut pieces, Direction::Right),
        Err(ShiftRejection::Blocked { piece: b, by: wall })
    );
    assert_eq!(coords(&grid, &pieces, a), (1, 1));
    assert_eq!(coords(&grid, &pieces, b), (1, 2));
    assert_eq!(coords(&grid, &pieces, wall), (2, 2));
    assert_eq!(xs, (live_x(&pieces, a), live_x(&pieces, b), live_x(&pieces, wall)));
    assert!(grid.links_consistent(&pieces));
}

#[test]
fn edge_of_grid_refuses_shift() {
    let (mut grid, mut pieces) = setup();
    let a = place(&mut grid, &mut pieces, 0, 0);
    let b = place(&mut grid, &mut pieces, 3, 0);
    let mut tile = Tile::new();
    tile.add_member(a);
    tile.add_member(b);

    assert_eq!(
        tile.try_shift(&mut grid, &mut pieces, Direction::Left),
        Err(ShiftRejection::OutOfBounds { piece: a })
    );
    assert!(!tile.shift(&mut grid, &mut pieces, 0, -1));
    assert_eq!(coords(&grid, &pieces, b), (3, 0));
}

#[test]
fn unplaced_member_refuses_shift() {
    let (mut grid, mut pieces) = setup();
    let a = place(&mut grid, &mut pieces, 2, 2);
    let loose = pieces.insert(GridPiece::new());
    let mut tile = Tile::new();
    tile.add_member(a);
    tile.add_member(loose);

    assert_eq!(
        tile.try_shift(&mut grid, &mut pieces, Direction::Down),
        Err(ShiftRejection::Unplaced { piece: loose })
    );
    assert_eq!(coords(&grid, &pieces, a), (2, 2));
}

#[test]
fn empty_tile_shifts_vacuously() {
    let (mut grid, mut pieces) = setup();
    let tile = Tile::new();
    assert_eq!(tile.try_shift(&mut grid, &mut pieces, Direction::Up), Ok(0));
    assert!(grid.pending_moves.is_empty());
}

#[test]
fn non_unit_step_is_refused() {
    let (mut grid, mut pieces) = setup();
    let a = place(&mut grid, &mut pieces, 2, 2);
    let mut tile = Tile::new();
    tile.add_member(a);
    assert!(!tile.shift(&mut grid, &mut pieces, 1, 1));
    assert!(!tile.shift(&mut grid, &mut pieces, 0, 0));
    assert_eq!(coords(&grid, &pieces, a), (2, 2));
}
