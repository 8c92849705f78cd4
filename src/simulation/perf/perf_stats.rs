use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) tiles_ms: f64,
    pub(super) ground_ms: f64,
    pub(super) hit_tests: u32,
    pub(super) lift_pixels: u32,
    pub(super) lift_capped: u32,
    pub(super) shifts_attempted: u32,
    pub(super) shifts_committed: u32,
    pub(super) placed_pieces: u32,
    pub(super) tile_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_shift(&mut self, committed: bool) {
        self.shifts_attempted += 1;
        if committed {
            self.shifts_committed += 1;
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }

    #[wasm_bindgen(getter)]
    pub fn tiles_ms(&self) -> f64 { self.tiles_ms }

    #[wasm_bindgen(getter)]
    pub fn ground_ms(&self) -> f64 { self.ground_ms }

    #[wasm_bindgen(getter)]
    pub fn hit_tests(&self) -> u32 { self.hit_tests }

    #[wasm_bindgen(getter)]
    pub fn lift_pixels(&self) -> u32 { self.lift_pixels }

    /// Steps where ground resolution hit its bound
    #[wasm_bindgen(getter)]
    pub fn lift_capped(&self) -> u32 { self.lift_capped }

    #[wasm_bindgen(getter)]
    pub fn shifts_attempted(&self) -> u32 { self.shifts_attempted }

    #[wasm_bindgen(getter)]
    pub fn shifts_committed(&self) -> u32 { self.shifts_committed }

    #[wasm_bindgen(getter)]
    pub fn placed_pieces(&self) -> u32 { self.placed_pieces }

    #[wasm_bindgen(getter)]
    pub fn tile_count(&self) -> u32 { self.tile_count }
}
