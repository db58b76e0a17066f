//! Platforms: placement, horizontal motion and the fade-out after a bounce

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::path::Placement;
use super::rect::Rect;
use crate::Rgb;
use crate::consts::*;

/// Platform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Normal,
    Small,
    Medium,
    Large,
    MovingSlow,
    MovingMedium,
    MovingFast,
}

/// Base motion for the moving kinds, before jitter and difficulty scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    /// World units per tick
    pub speed: f32,
    /// Max displacement from the spawn x
    pub range: f32,
}

impl PlatformKind {
    pub const ALL: [PlatformKind; 7] = [
        PlatformKind::Normal,
        PlatformKind::Small,
        PlatformKind::Medium,
        PlatformKind::Large,
        PlatformKind::MovingSlow,
        PlatformKind::MovingMedium,
        PlatformKind::MovingFast,
    ];

    pub fn color(self) -> Rgb {
        match self {
            PlatformKind::Normal => [34, 139, 34],
            PlatformKind::Small => [139, 69, 19],
            PlatformKind::Medium => [34, 139, 34],
            PlatformKind::Large => [0, 100, 0],
            PlatformKind::MovingSlow => [135, 206, 235],
            PlatformKind::MovingMedium => [0, 191, 255],
            PlatformKind::MovingFast => [30, 144, 255],
        }
    }

    pub fn motion(self) -> Option<MotionProfile> {
        match self {
            PlatformKind::MovingSlow => Some(MotionProfile {
                speed: 1.5,
                range: 50.0,
            }),
            PlatformKind::MovingMedium => Some(MotionProfile {
                speed: 2.5,
                range: 70.0,
            }),
            PlatformKind::MovingFast => Some(MotionProfile {
                speed: 3.5,
                range: 90.0,
            }),
            PlatformKind::Normal
            | PlatformKind::Small
            | PlatformKind::Medium
            | PlatformKind::Large => None,
        }
    }

    #[inline]
    pub fn is_moving(self) -> bool {
        self.motion().is_some()
    }

    /// Seconds from first bounce to disappearance
    pub fn default_fade_duration(self) -> f32 {
        if self.is_moving() { 1.5 } else { 2.0 }
    }
}

/// Horizontal patrol state of a moving platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub speed: f32,
    pub range: f32,
    /// +1.0 right, -1.0 left
    pub direction: f32,
    pub origin_x: f32,
}

/// A platform entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub kind: PlatformKind,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub active: bool,
    /// Seconds since the first bounce (None until bounced)
    pub fade_elapsed: Option<f32>,
    pub fade_duration: f32,
    /// 255 until the fade starts, then down to 0
    pub alpha: f32,
    pub motion: Option<Motion>,
}

impl Platform {
    /// Build a platform; width is derived from difficulty when not given
    pub fn new<R: Rng + ?Sized>(
        id: u32,
        x: f32,
        y: f32,
        difficulty: f32,
        width: Option<f32>,
        kind: PlatformKind,
        rng: &mut R,
    ) -> Self {
        let width = match width {
            Some(w) => w.clamp(PLATFORM_MIN_WIDTH, PLATFORM_MAX_WIDTH),
            None => {
                let base = PLATFORM_MAX_WIDTH - difficulty * PLATFORM_WIDTH_PER_DIFFICULTY;
                let jitter = rng.random_range(-10..=10) as f32;
                (base + jitter).clamp(PLATFORM_MIN_WIDTH, PLATFORM_MAX_WIDTH)
            }
        };

        let motion = kind.motion().map(|profile| {
            let speed = profile.speed + (rng.random::<f32>() * 0.5 - 0.25) + difficulty * 0.5;
            let range = profile.range + rng.random_range(-10..=10) as f32 + difficulty * 10.0;
            Motion {
                speed,
                range,
                direction: 1.0,
                origin_x: x,
            }
        });

        Self {
            id,
            kind,
            pos: Vec2::new(x, y),
            width,
            height: PLATFORM_HEIGHT,
            active: true,
            fade_elapsed: None,
            fade_duration: kind.default_fade_duration(),
            alpha: 255.0,
            motion,
        }
    }

    /// Build a platform from a path manager placement
    pub fn from_placement<R: Rng + ?Sized>(id: u32, placement: &Placement, rng: &mut R) -> Self {
        let mut platform = Self::new(
            id,
            placement.x,
            placement.y,
            placement.difficulty,
            None,
            placement.kind,
            rng,
        );
        platform.fade_duration = placement.fade_duration;
        platform
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    /// Patrol direction (0.0 for static platforms)
    pub fn direction(&self) -> f32 {
        self.motion.map(|m| m.direction).unwrap_or(0.0)
    }

    pub fn is_fading(&self) -> bool {
        self.fade_elapsed.is_some()
    }

    /// Mid-fade platforms stay collidable until they deactivate
    pub fn is_collidable(&self) -> bool {
        self.active
    }

    /// Alpha rounded for the renderer
    pub fn alpha_u8(&self) -> u8 {
        self.alpha.round().clamp(0.0, 255.0) as u8
    }

    /// Start the fade; later calls keep the original start
    pub fn on_collision(&mut self) {
        if self.active && self.fade_elapsed.is_none() {
            self.fade_elapsed = Some(0.0);
        }
    }

    /// Advance patrol by one tick and the fade by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.active {
            if let Some(motion) = self.motion.as_mut() {
                let min_x = motion.origin_x - motion.range;
                let max_x = motion.origin_x + motion.range;
                self.pos.x += motion.speed * motion.direction;
                if self.pos.x >= max_x {
                    self.pos.x = max_x;
                    motion.direction = -1.0;
                } else if self.pos.x <= min_x {
                    self.pos.x = min_x;
                    motion.direction = 1.0;
                }
            }
        }

        if let Some(elapsed) = self.fade_elapsed.as_mut() {
            *elapsed += dt;
            if *elapsed >= self.fade_duration {
                self.active = false;
                self.alpha = 0.0;
            } else {
                self.alpha = 255.0 * (1.0 - *elapsed / self.fade_duration);
            }
        }
    }
}
