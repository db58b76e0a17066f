//! The player sprite: gravity, bounce and horizontal wraparound

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::Rgb;
use crate::tuning::PhysicsTuning;

pub const PLAYER_COLOR: Rgb = [50, 120, 190];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// World units per tick, +y is down
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub move_speed: f32,
    /// Horizontal wrap width
    pub world_width: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, world_width: f32, physics: &PhysicsTuning) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            width: physics.player_width,
            height: physics.player_height,
            gravity: physics.gravity,
            jump_impulse: physics.jump_impulse,
            move_speed: physics.move_speed,
            world_width,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn color(&self) -> Rgb {
        PLAYER_COLOR
    }

    /// Set horizontal velocity from -1/0/1; applied on the next update
    pub fn move_dir(&mut self, direction: i8) {
        self.vel.x = f32::from(direction.signum()) * self.move_speed;
    }

    pub fn jump(&mut self) {
        self.vel.y = self.jump_impulse;
    }

    /// Integrate one tick
    pub fn update(&mut self) {
        self.vel.y += self.gravity;
        self.pos += self.vel;

        let max_x = self.world_width - self.width;
        if self.pos.x < 0.0 {
            self.pos.x = max_x;
        } else if self.pos.x > max_x {
            self.pos.x = 0.0;
        }
    }
}
