#![cfg(target_arch = "wasm32")]

use shattered_engine::Level;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_reports_errors_as_js_values() {
    shattered_engine::init();
    let mut level = Level::with_grid(4, 4, 100, 100);
    let tile = level.create_tile();
    assert!(level.add_piece(tile, 1, 1).is_ok());
    assert!(level.add_piece(tile, 1, 1).is_err());
    assert!(level.add_piece(tile, 9, 9).is_err());
    assert!(level.set_grid_mode(7).is_err());
    assert!(level.load_level("{".to_string()).is_err());
    assert_eq!(level.shift_tile(tile, 1, 0).ok(), Some(true));
}

#[wasm_bindgen_test]
fn init_is_idempotent() {
    shattered_engine::init();
    shattered_engine::init();
    assert!(!shattered_engine::version().is_empty());
}
