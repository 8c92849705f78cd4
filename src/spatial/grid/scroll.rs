use super::*;

impl Grid {
    /// Screen position of slot (0, 0)
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Move every slot on screen; grid coordinates and occupancy are untouched
    pub fn move_slots(&mut self, dx: f32, dy: f32) {
        self.origin.x += dx;
        self.origin.y += dy;
        for slot in self.slots.iter_mut() {
            slot.move_by(dx, dy);
        }
    }
}
