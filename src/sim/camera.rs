//! Vertical follow camera with exponential smoothing

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub offset: f32,
    pub target: f32,
    /// Fraction of the remaining distance covered per update, in (0, 1]
    pub lerp: f32,
    /// Fraction of the view kept below the player
    pub follow_ratio: f32,
}

impl Camera {
    pub fn new(lerp: f32, follow_ratio: f32) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            lerp: lerp.clamp(f32::EPSILON, 1.0),
            follow_ratio,
        }
    }

    pub fn update(&mut self, player_y: f32, view_height: f32) {
        self.target = player_y - view_height * self.follow_ratio;
        self.offset += (self.target - self.offset) * self.lerp;
    }

    /// World y to screen y
    #[inline]
    pub fn apply_offset(&self, world_y: f32) -> f32 {
        world_y - self.offset
    }

    /// Jump straight to `offset`; only used when a run restarts
    pub fn reset(&mut self, offset: f32) {
        self.offset = offset;
        self.target = offset;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.1, 0.6)
    }
}
