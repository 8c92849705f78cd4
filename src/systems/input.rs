//! Immutable per-step input snapshot
//!
//! The front-end polls keyboard and mouse once per frame and hands the core one `InputState`.
//! Edge detection ("pushed", "clicked") is computed from the previous and current snapshots.

/// Buttons the core reacts to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
}

impl Buttons {
    /// Pack into a bitmask (left, right, up, down, jump from bit 0)
    pub fn bits(&self) -> u8 {
        (self.left as u8)
            | (self.right as u8) << 1
            | (self.up as u8) << 2
            | (self.down as u8) << 3
            | (self.jump as u8) << 4
    }

    pub fn from_bits(bits: u8) -> Self {
        Self {
            left: bits & 0b00001 != 0,
            right: bits & 0b00010 != 0,
            up: bits & 0b00100 != 0,
            down: bits & 0b01000 != 0,
            jump: bits & 0b10000 != 0,
        }
    }

    /// Buttons down in `self` but not in `previous`
    pub fn newly_down(&self, previous: &Buttons) -> Buttons {
        Buttons::from_bits(self.bits() & !previous.bits())
    }
}

/// Pointer position in screen pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    pub pressed: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    /// Held this frame
    pub held: Buttons,
    /// Went down this frame
    pub pushed: Buttons,
    pub pointer: Pointer,
    /// Primary pointer button went down this frame
    pub clicked: bool,
}

impl InputState {
    pub fn new(held: Buttons) -> Self {
        Self { held, ..Self::default() }
    }

    pub fn from_snapshots(previous: &Buttons, current: &Buttons, previous_pointer: &Pointer, pointer: Pointer) -> Self {
        Self {
            held: *current,
            pushed: current.newly_down(previous),
            pointer,
            clicked: pointer.pressed && !previous_pointer.pressed,
        }
    }

    /// Jump fires on either the jump button or up
    #[inline]
    pub fn jump_held(&self) -> bool {
        self.held.jump || self.held.up
    }

    #[inline]
    pub fn horizontal_held(&self) -> bool {
        self.held.left || self.held.right
    }

    /// First pushed arrow as a unit step (right, left, up, down priority)
    pub fn pushed_arrow(&self) -> Option<(i32, i32)> {
        let p = &self.pushed;
        if p.right {
            Some((1, 0))
        } else if p.left {
            Some((-1, 0))
        } else if p.up {
            Some((0, -1))
        } else if p.down {
            Some((0, 1))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_round_trip_and_edges() {
        let b = Buttons { left: true, jump: true, ..Buttons::default() };
        assert_eq!(Buttons::from_bits(b.bits()), b);

        let prev = Buttons { left: true, ..Buttons::default() };
        let now = Buttons { left: true, right: true, ..Buttons::default() };
        let input = InputState::from_snapshots(&prev, &now, &Pointer::default(), Pointer::default());
        assert!(input.pushed.right);
        assert!(!input.pushed.left);
        assert_eq!(input.pushed_arrow(), Some((1, 0)));
    }

    #[test]
    fn click_is_an_edge() {
        let down = Pointer { x: 3.0, y: 4.0, pressed: true };
        let first = InputState::from_snapshots(&Buttons::default(), &Buttons::default(), &Pointer::default(), down);
        let held = InputState::from_snapshots(&Buttons::default(), &Buttons::default(), &down, down);
        assert!(first.clicked);
        assert!(!held.clicked);
    }

    #[test]
    fn up_counts_as_jump() {
        let input = InputState::new(Buttons { up: true, ..Buttons::default() });
        assert!(input.jump_held());
        assert!(!input.horizontal_held());
    }
}
