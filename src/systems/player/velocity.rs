use crate::geometry::Vec2;
use crate::systems::input::InputState;

use super::body::{ContactFlags, PlayerConfig};

/// Velocity modifiers, order matters:
/// gravity, ground stop, jump, drag, side stop, acceleration, clamp
pub(super) fn apply(velocity: &mut Vec2, contacts: &ContactFlags, input: &InputState, config: &PlayerConfig) {
    // Vertical
    velocity.y += config.gravity;
    if contacts.on_ground {
        velocity.y = 0.0;
    }
    if input.jump_held() && contacts.on_ground {
        velocity.y = -config.jump_impulse;
    }

    // Horizontal
    if !input.horizontal_held() {
        velocity.x *= config.horizontal_drag;
    }
    if contacts.hit_left || contacts.hit_right {
        velocity.x = 0.0;
    }
    if input.held.right && !contacts.hit_right {
        velocity.x += config.horizontal_acceleration;
    }
    if input.held.left && !contacts.hit_left {
        velocity.x -= config.horizontal_acceleration;
    }
    velocity.x = velocity.x.clamp(-config.max_horizontal_speed, config.max_horizontal_speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::input::Buttons;

    fn held(b: Buttons) -> InputState {
        InputState::new(b)
    }

    #[test]
    fn gravity_accumulates_in_the_air() {
        let mut v = Vec2::zero();
        let cfg = PlayerConfig::default();
        apply(&mut v, &ContactFlags::default(), &InputState::default(), &cfg);
        apply(&mut v, &ContactFlags::default(), &InputState::default(), &cfg);
        assert_eq!(v.y, 1.0);
    }

    #[test]
    fn jump_needs_ground() {
        let cfg = PlayerConfig::default();
        let jump = held(Buttons { jump: true, ..Buttons::default() });

        let mut air = Vec2::zero();
        apply(&mut air, &ContactFlags::default(), &jump, &cfg);
        assert_eq!(air.y, 0.5);

        let mut ground = Vec2::new(0.0, 3.0);
        let on_ground = ContactFlags { on_ground: true, ..ContactFlags::default() };
        apply(&mut ground, &on_ground, &jump, &cfg);
        assert_eq!(ground.y, -12.0);
    }

    #[test]
    fn drag_only_without_horizontal_input() {
        let cfg = PlayerConfig::default();
        let mut coasting = Vec2::new(4.0, 0.0);
        apply(&mut coasting, &ContactFlags::default(), &InputState::default(), &cfg);
        assert!((coasting.x - 3.6).abs() < 1e-5);

        let mut pushing = Vec2::new(4.0, 0.0);
        apply(&mut pushing, &ContactFlags::default(), &held(Buttons { right: true, ..Buttons::default() }), &cfg);
        assert_eq!(pushing.x, 4.75);
    }

    #[test]
    fn speed_is_clamped() {
        let cfg = PlayerConfig::default();
        let mut v = Vec2::new(5.9, 0.0);
        let right = held(Buttons { right: true, ..Buttons::default() });
        apply(&mut v, &ContactFlags::default(), &right, &cfg);
        assert_eq!(v.x, 6.0);

        let mut v = Vec2::new(-5.9, 0.0);
        let left = held(Buttons { left: true, ..Buttons::default() });
        apply(&mut v, &ContactFlags::default(), &left, &cfg);
        assert_eq!(v.x, -6.0);
    }

    #[test]
    fn side_contact_stops_and_gates_acceleration() {
        let cfg = PlayerConfig::default();
        let flags = ContactFlags { hit_right: true, ..ContactFlags::default() };
        let mut v = Vec2::new(3.0, 0.0);
        apply(&mut v, &flags, &held(Buttons { right: true, ..Buttons::default() }), &cfg);
        assert_eq!(v.x, 0.0);
    }
}
