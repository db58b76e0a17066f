//! Data-driven game balance
//!
//! Every number that shapes the climb lives here so a settings file can
//! override it without touching the simulation.

use serde::{Deserialize, Serialize};

/// Player physics, in world units per tick
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    pub gravity: f32,
    /// Vertical velocity applied on a bounce (negative is up)
    pub jump_impulse: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_impulse: -15.0,
            move_speed: 5.0,
            player_width: 40.0,
            player_height: 40.0,
        }
    }
}

impl PhysicsTuning {
    /// Apex of a single bounce: v² / 2g
    pub fn max_jump_height(&self) -> f32 {
        self.jump_impulse * self.jump_impulse / (2.0 * self.gravity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Exponential smoothing factor in (0, 1]
    pub lerp: f32,
    /// Fraction of the view height kept below the player
    pub follow_ratio: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            lerp: 0.1,
            follow_ratio: 0.6,
        }
    }
}

/// Piecewise-linear difficulty curve through zone boundaries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyCurve {
    /// Height where Intermediate starts
    pub intermediate_height: f32,
    /// Height where Advanced starts
    pub advanced_height: f32,
    /// Height where Expert starts
    pub expert_height: f32,
    /// Height past Expert at which the cap is reached
    pub expert_ramp: f32,
    /// Difficulty at 0, and at the start of Intermediate, Advanced, Expert
    pub levels: [f32; 4],
    pub cap: f32,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self {
            intermediate_height: 10_000.0,
            advanced_height: 40_000.0,
            expert_height: 80_000.0,
            expert_ramp: 40_000.0,
            levels: [1.0, 1.5, 2.2, 2.7],
            cap: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathTuning {
    /// Jitter of the single centered lane at game start
    pub center_jitter: f32,
    /// Jitter of each lane after a split
    pub split_jitter: f32,
    /// Jitter of the lane created by a merge
    pub merged_jitter: f32,
    /// Height that must be climbed before the first split
    pub split_min_height: f32,
    /// Split roll succeeds when `random() < split_chance * difficulty`
    pub split_chance: f32,
    /// Climb after a split before lanes merge again
    pub merge_threshold_min: f32,
    pub merge_threshold_max: f32,
    /// Fade hint for platforms on a live lane, in seconds
    pub fade_time: f32,
    /// Fade hint given to lanes retired by a merge
    pub retired_fade_time: f32,
    /// Every Nth platform on a lane is forced to Normal
    pub safe_interval: u32,
    /// Small roll is `small_base + (difficulty - 1) * small_per_difficulty`
    pub small_base: f32,
    pub small_per_difficulty: f32,
    /// Moving platforms start at this fraction of the Intermediate height
    pub moving_start_fraction: f32,
    /// Moving chance gained per unit of height past the start
    pub moving_ramp: f32,
    pub moving_max_chance: f32,
    /// Row gap at difficulty 1.0 before the difficulty stretch
    pub base_row_spacing: f32,
    /// Row gap never exceeds this fraction of the max jump height
    pub max_spacing_ratio: f32,
}

impl Default for PathTuning {
    fn default() -> Self {
        Self {
            center_jitter: 100.0,
            split_jitter: 50.0,
            merged_jitter: 150.0,
            split_min_height: 500.0,
            split_chance: 0.2,
            merge_threshold_min: 800.0,
            merge_threshold_max: 1200.0,
            fade_time: 2.0,
            retired_fade_time: 0.5,
            safe_interval: 5,
            small_base: 0.3,
            small_per_difficulty: 0.2,
            moving_start_fraction: 0.1,
            moving_ramp: 0.000_005,
            moving_max_chance: 0.35,
            base_row_spacing: 144.0,
            max_spacing_ratio: 0.85,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsTuning,
    pub camera: CameraTuning,
    pub difficulty: DifficultyCurve,
    pub paths: PathTuning,
}
