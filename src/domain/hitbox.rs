use crate::geometry::RotatedRect;

use super::level_data::HitBoxData;

/// Design-time placement of a hit box.
///
/// `x`/`y` are relative to the owning slot's top-left corner. These values only change through
/// the `adjust_*`/`change_*` family, never through a scroll `shift`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitBoxOrigin {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub rotation: f32,
}

/// Rotatable collision rectangle plus its design-time placement
#[derive(Clone, Debug, PartialEq)]
pub struct HitBox {
    rect: RotatedRect,
    origin: HitBoxOrigin,
}

impl HitBox {
    /// Hit box at an absolute top-left position with no relative offset
    pub fn new(pos_x: i32, pos_y: i32, width: i32, height: i32, rotation: f32) -> Self {
        Self::relative(0, 0, pos_x, pos_y, width, height, rotation)
    }

    /// Hit box at `(pos_x, pos_y)` remembering `(x, y)` as its offset inside the owning slot
    pub fn relative(
        x: i32,
        y: i32,
        pos_x: i32,
        pos_y: i32,
        width: i32,
        height: i32,
        rotation: f32,
    ) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            rect: RotatedRect::from_top_left(
                pos_x as f32,
                pos_y as f32,
                width as f32,
                height as f32,
                rotation,
            ),
            origin: HitBoxOrigin { x, y, width, height, rotation },
        }
    }

    /// Build from a design-time record, anchored at a slot's current top-left
    pub fn from_data(data: &HitBoxData, slot_x: f32, slot_y: f32) -> Self {
        Self::relative(
            data.x,
            data.y,
            slot_x as i32 + data.x,
            slot_y as i32 + data.y,
            data.width,
            data.height,
            data.rotation,
        )
    }

    #[inline]
    pub fn rect(&self) -> &RotatedRect {
        &self.rect
    }

    #[inline]
    pub fn origin(&self) -> &HitBoxOrigin {
        &self.origin
    }

    /// Live (possibly scrolled) shift; the design-time offset is left alone
    pub fn shift(&mut self, dx: i32, dy: i32) {
        self.rect.translate(dx as f32, dy as f32);
    }

    /// Shift that is remembered in the design-time offset (editor drags)
    pub fn adjust_position(&mut self, dx: i32, dy: i32) {
        self.shift(dx, dy);
        self.origin.x += dx;
        self.origin.y += dy;
    }

    /// Grow or shrink the width, keeping the unrotated top-left in place
    pub fn change_width(&mut self, delta: i32) {
        let new_width = (self.origin.width + delta).max(0);
        let applied = (new_width - self.origin.width) as f32;
        self.origin.width = new_width;
        self.rect.set_width(new_width as f32);
        self.rect.translate(applied * 0.5, 0.0);
    }

    /// Grow or shrink the height, keeping the unrotated top-left in place
    pub fn change_height(&mut self, delta: i32) {
        let new_height = (self.origin.height + delta).max(0);
        let applied = (new_height - self.origin.height) as f32;
        self.origin.height = new_height;
        self.rect.set_height(new_height as f32);
        self.rect.translate(0.0, applied * 0.5);
    }

    pub fn change_rotation(&mut self, delta: f32) {
        self.rect.rotate(delta);
        self.origin.rotation += delta;
    }

    pub fn hit_test(&self, other: &HitBox) -> bool {
        self.rect.intersects(&other.rect)
    }

    pub fn hit_test_rect(&self, rect: &RotatedRect) -> bool {
        self.rect.intersects(rect)
    }

    /// Design-time record for serializers
    pub fn export(&self) -> HitBoxData {
        HitBoxData {
            x: self.origin.x,
            y: self.origin.y,
            width: self.origin.width,
            height: self.origin.height,
            rotation: self.origin.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_moves_live_rect_only() {
        let mut hb = HitBox::relative(50, 100, 1330, 1000, 200, 50, 0.0);
        hb.shift(-256, 0);
        assert_eq!(hb.rect().top_left().x, 1074.0);
        assert_eq!(hb.origin().x, 50);
        assert_eq!(hb.export().x, 50);
    }

    #[test]
    fn adjust_position_updates_design_offset() {
        let mut hb = HitBox::relative(50, 50, 50, 50, 150, 25, 0.0);
        hb.adjust_position(3, -4);
        assert_eq!(hb.rect().top_left().x, 53.0);
        assert_eq!(hb.rect().top_left().y, 46.0);
        assert_eq!((hb.origin().x, hb.origin().y), (53, 46));
    }

    #[test]
    fn dimensions_clamp_at_zero() {
        let mut hb = HitBox::new(0, 0, 4, 4, 0.0);
        hb.change_width(-10);
        hb.change_height(-1);
        assert_eq!(hb.origin().width, 0);
        assert_eq!(hb.origin().height, 3);
        assert_eq!(hb.rect().width(), 0.0);
        assert_eq!(hb.rect().top_left().x, 0.0);

        hb.change_width(5);
        assert_eq!(hb.rect().width(), 5.0);
        assert_eq!(hb.rect().top_left().x, 0.0);
    }

    #[test]
    fn rotation_accumulates_in_both_frames() {
        let mut hb = HitBox::new(0, 0, 10, 10, 0.5);
        hb.change_rotation(0.25);
        assert_eq!(hb.rect().rotation(), 0.75);
        assert_eq!(hb.export().rotation, 0.75);
    }

    #[test]
    fn hit_test_delegates_to_rect() {
        let a = HitBox::new(0, 0, 10, 10, 0.0);
        let b = HitBox::new(5, 5, 10, 10, 0.0);
        let c = HitBox::new(10, 0, 10, 10, 0.0);
        assert!(a.hit_test(&b));
        assert!(!a.hit_test(&c));
        assert!(a.hit_test_rect(&RotatedRect::axis_aligned(9.0, 9.0, 1.0, 1.0)));
    }
}
