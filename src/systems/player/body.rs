use crate::domain::{HitBox, PieceArena};
use crate::geometry::Vec2;
use crate::grid::Grid;
use crate::systems::input::InputState;

use super::ground::{resolve_ground, GroundReport};
use super::velocity;

pub const PLAYER_WIDTH: i32 = 60;
pub const PLAYER_HEIGHT: i32 = 90;

/// How fractional velocity is turned into whole-pixel motion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionMode {
    /// Truncate toward zero every step; sub-pixel motion is lost
    #[default]
    Truncate,
    /// Carry the fractional remainder into the next step
    Accumulate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerConfig {
    pub max_horizontal_speed: f32,
    pub horizontal_acceleration: f32,
    pub horizontal_drag: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub width: i32,
    pub height: i32,
    pub motion: MotionMode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_horizontal_speed: 6.0,
            horizontal_acceleration: 0.75,
            horizontal_drag: 0.9,
            gravity: 0.5,
            jump_impulse: 12.0,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            motion: MotionMode::Truncate,
        }
    }
}

/// Transient contact state, recomputed every step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactFlags {
    pub on_ground: bool,
    /// Not computed by the ground pass; kept for velocity gating
    pub hit_left: bool,
    pub hit_right: bool,
    pub hit_top: bool,
}

pub struct Player {
    config: PlayerConfig,
    position: Vec2,
    velocity: Vec2,
    /// Sub-pixel carry for `MotionMode::Accumulate`
    remainder: Vec2,
    hit_box: HitBox,
    contacts: ContactFlags,
}

impl Player {
    pub fn new(config: PlayerConfig, x: i32, y: i32) -> Self {
        Self {
            config,
            position: Vec2::new(x as f32, y as f32),
            velocity: Vec2::zero(),
            remainder: Vec2::zero(),
            hit_box: HitBox::new(x, y, config.width, config.height, 0.0),
            contacts: ContactFlags::default(),
        }
    }

    // === Accessors ===
    #[inline]
    pub fn config(&self) -> &PlayerConfig { &self.config }

    #[inline]
    pub fn position(&self) -> Vec2 { self.position }

    #[inline]
    pub fn velocity(&self) -> Vec2 { self.velocity }

    #[inline]
    pub fn hit_box(&self) -> &HitBox { &self.hit_box }

    #[inline]
    pub fn contacts(&self) -> ContactFlags { self.contacts }

    #[inline]
    pub fn on_ground(&self) -> bool { self.contacts.on_ground }

    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.velocity = Vec2::new(vx, vy);
    }

    /// Teleport, keeping the hit box in step with the position
    pub fn set_position(&mut self, x: i32, y: i32) {
        let dx = x - self.position.x as i32;
        let dy = y - self.position.y as i32;
        self.move_by(dx, dy);
        self.remainder = Vec2::zero();
    }

    /// Move position and hit box by whole pixels
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.position.x += dx as f32;
        self.position.y += dy as f32;
        self.hit_box.shift(dx, dy);
    }

    /// One simulation step against the grid
    pub fn integrate(&mut self, input: &InputState, grid: &Grid, pieces: &PieceArena) -> GroundReport {
        let (dx, dy) = self.step_pixels();
        self.move_by(dx, dy);

        self.contacts = ContactFlags::default();

        let report = resolve_ground(self, grid, pieces);
        self.contacts.on_ground = report.on_ground;

        velocity::apply(&mut self.velocity, &self.contacts, input, &self.config);
        report
    }

    fn step_pixels(&mut self) -> (i32, i32) {
        match self.config.motion {
            MotionMode::Truncate => (self.velocity.x as i32, self.velocity.y as i32),
            MotionMode::Accumulate => {
                let total = self.velocity + self.remainder;
                let step = (total.x.trunc(), total.y.trunc());
                self.remainder = Vec2::new(total.x - step.0, total.y - step.1);
                (step.0 as i32, step.1 as i32)
            }
        }
    }
}
