//! Game settings and preferences
//!
//! Stored as a JSON file; any field left out falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::{PLATFORM_MAX_WIDTH, WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::World;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub world_width: f32,
    pub world_height: f32,
    /// Frames (and simulation ticks) per second
    pub fps: u32,
    /// Fixed run seed; a fresh one is picked per run when absent
    pub seed: Option<u64>,
    /// Name recorded on the leaderboard
    pub player_name: String,
    pub high_score_path: PathBuf,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            fps: 60,
            seed: None,
            player_name: crate::highscores::DEFAULT_NAME.to_string(),
            high_score_path: PathBuf::from("data/high_scores.json"),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    pub fn world(&self) -> World {
        World {
            width: self.world_width,
            height: self.world_height,
        }
    }

    /// Fixed timestep for the configured frame rate
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        if self.world_width <= PLATFORM_MAX_WIDTH || self.world_height <= 0.0 {
            bail!(
                "world must be wider than a platform and taller than zero (got {}x{})",
                self.world_width,
                self.world_height
            );
        }
        let physics = &self.tuning.physics;
        if physics.gravity <= 0.0 || physics.jump_impulse >= 0.0 {
            bail!("gravity must be positive and the jump impulse negative");
        }
        let camera = &self.tuning.camera;
        if !(camera.lerp > 0.0 && camera.lerp <= 1.0) {
            bail!("camera lerp must be in (0, 1], got {}", camera.lerp);
        }
        let paths = &self.tuning.paths;
        if paths.base_row_spacing <= 0.0 || paths.max_spacing_ratio <= 0.0 {
            bail!("row spacing must be positive");
        }
        if paths.merge_threshold_min > paths.merge_threshold_max {
            bail!("merge threshold range is empty");
        }
        if paths.safe_interval == 0 {
            bail!("safe interval must be at least 1");
        }
        let levels = &self.tuning.difficulty.levels;
        if levels.windows(2).any(|w| w[1] < w[0]) || self.tuning.difficulty.cap < levels[3] {
            bail!("difficulty levels must not decrease");
        }
        Ok(())
    }

    /// Load settings; a missing or unreadable file gives the defaults
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("Using default settings");
                return Self::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring unreadable settings at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let data = serde_json::to_vec_pretty(self).context("encoding settings")?;
        fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Settings saved");
        Ok(())
    }
}
