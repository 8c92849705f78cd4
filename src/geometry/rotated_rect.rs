use super::vec2::Vec2;

pub type Corners = [Vec2; 4];

const SIGNS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Rectangle rotated about its own center
///
/// Width and height are never negative: resizing clamps at zero. The rotation is stored as given
/// (radians, clockwise positive in screen space) and never normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedRect {
    center: Vec2,
    half_width: f32,
    half_height: f32,
    rotation: f32,
}

impl RotatedRect {
    pub fn new(center: Vec2, width: f32, height: f32, rotation: f32) -> Self {
        Self {
            center,
            half_width: width.max(0.0) * 0.5,
            half_height: height.max(0.0) * 0.5,
            rotation,
        }
    }

    /// Build from an unrotated top-left placement, then rotate about the center
    pub fn from_top_left(x: f32, y: f32, width: f32, height: f32, rotation: f32) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self::new(Vec2::new(x + width * 0.5, y + height * 0.5), width, height, rotation)
    }

    /// Axis-aligned rectangle
    pub fn axis_aligned(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_top_left(x, y, width, height, 0.0)
    }

    // === Accessors ===
    #[inline]
    pub fn center(&self) -> Vec2 { self.center }

    #[inline]
    pub fn width(&self) -> f32 { self.half_width * 2.0 }

    #[inline]
    pub fn height(&self) -> f32 { self.half_height * 2.0 }

    #[inline]
    pub fn half_extents(&self) -> (f32, f32) { (self.half_width, self.half_height) }

    #[inline]
    pub fn rotation(&self) -> f32 { self.rotation }

    /// Top-left corner of the unrotated rectangle
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.center.x - self.half_width, self.center.y - self.half_height)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.half_width <= 0.0 || self.half_height <= 0.0
    }

    // === Mutators ===
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.center.x += dx;
        self.center.y += dy;
    }

    pub fn set_width(&mut self, width: f32) {
        self.half_width = width.max(0.0) * 0.5;
    }

    pub fn set_height(&mut self, height: f32) {
        self.half_height = height.max(0.0) * 0.5;
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    pub fn rotate(&mut self, delta: f32) {
        self.rotation += delta;
    }

    // === Shape ===
    /// Corners in winding order, starting at the rotated top-left
    pub fn corners(&self) -> Corners {
        let (sin, cos) = self.rotation.sin_cos();
        let mut corners = [Vec2::ZERO; 4];
        for (i, &(sx, sy)) in SIGNS.iter().enumerate() {
            let lx = sx * self.half_width;
            let ly = sy * self.half_height;
            corners[i] = Vec2::new(
                self.center.x + lx * cos - ly * sin,
                self.center.y + lx * sin + ly * cos,
            );
        }
        corners
    }

    /// The two edge normals of this rectangle
    pub fn axes(&self) -> [Vec2; 2] {
        let x_axis = Vec2::from_angle(self.rotation);
        [x_axis, x_axis.perp()]
    }

    /// True if the interiors overlap by a nonzero area.
    ///
    /// Separating-axis test over both rectangles' own axes. Shared edges or corners do not count,
    /// and a zero-area rectangle never intersects anything.
    pub fn intersects(&self, other: &RotatedRect) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }

        let a = self.corners();
        let b = other.corners();
        let [a0, a1] = self.axes();
        let [b0, b1] = other.axes();

        for axis in [a0, a1, b0, b1] {
            let (min_a, max_a) = project(&a, axis);
            let (min_b, max_b) = project(&b, axis);
            if max_a <= min_b || max_b <= min_a {
                return false;
            }
        }
        true
    }

    /// Axis-aligned bounds of the rotated shape: (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let corners = self.corners();
        let mut min = corners[0];
        let mut max = corners[0];
        for c in &corners[1..] {
            min.x = min.x.min(c.x);
            min.y = min.y.min(c.y);
            max.x = max.x.max(c.x);
            max.y = max.y.max(c.y);
        }
        (min, max)
    }
}

fn project(corners: &Corners, axis: Vec2) -> (f32, f32) {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for c in corners {
        let d = c.dot(axis);
        lo = lo.min(d);
        hi = hi.max(d);
    }
    (lo, hi)
}
