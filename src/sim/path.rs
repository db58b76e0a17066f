//! Platform path generation
//!
//! Platforms are laid out along one or more lanes. A single centered lane
//! splits into two parallel lanes once the climb is high enough, and the two
//! merge back into one after a randomized stretch. Each lane forces a plain
//! platform every few rows so there is always a safe foothold.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::difficulty::{Zone, difficulty_at, moving_chance_at};
use super::platform::PlatformKind;
use crate::consts::PLATFORM_MAX_WIDTH;
use crate::tuning::Tuning;

/// Where and what to spawn for one lane at one row height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub difficulty: f32,
    pub fade_duration: f32,
    pub kind: PlatformKind,
}

/// A lane platforms are placed along
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    pub lane_x: f32,
    pub jitter: f32,
    pub viable: bool,
    /// Fade hint handed to platforms spawned on this lane
    pub fade_time: f32,
    /// Climb after a split before this lane is merged away
    pub merge_threshold: f32,
    /// Platforms generated since the last forced Normal
    pub since_safe: u32,
}

impl Path {
    pub fn new(lane_x: f32, jitter: f32, fade_time: f32) -> Self {
        Self {
            lane_x,
            jitter,
            viable: true,
            fade_time,
            merge_threshold: f32::INFINITY,
            since_safe: 0,
        }
    }

    /// Jittered x inside the lane, kept on screen for a max-width platform
    pub fn next_x<R: Rng + ?Sized>(&self, world_width: f32, rng: &mut R) -> f32 {
        let min_x = (self.lane_x - self.jitter).max(0.0);
        let max_x = (self.lane_x + self.jitter).min(world_width - PLATFORM_MAX_WIDTH);
        if min_x > max_x {
            return world_width / 2.0;
        }
        rng.random_range(min_x..=max_x)
    }
}

/// Owns the lanes and the height-driven difficulty state
#[derive(Debug, Clone)]
pub struct PathManager {
    world_width: f32,
    tuning: Tuning,
    paths: Vec<Path>,
    current_height: f32,
    difficulty: f32,
    moving_chance: f32,
    /// Height at which the current split happened
    split_height: Option<f32>,
}

impl PathManager {
    pub fn new(world_width: f32, tuning: &Tuning) -> Self {
        let mut manager = Self {
            world_width,
            tuning: tuning.clone(),
            paths: Vec::new(),
            current_height: 0.0,
            difficulty: tuning.difficulty.levels[0],
            moving_chance: 0.0,
            split_height: None,
        };
        manager.initialize_path();
        manager
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    pub fn moving_chance(&self) -> f32 {
        self.moving_chance
    }

    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    pub fn zone(&self) -> Zone {
        Zone::from_height(self.current_height, &self.tuning.difficulty)
    }

    pub fn live_paths(&self) -> usize {
        self.paths.iter().filter(|p| p.viable).count()
    }

    fn center_path(&self, jitter: f32) -> Path {
        Path::new(self.world_width / 2.0, jitter, self.tuning.paths.fade_time)
    }

    /// Reset to a single centered lane
    pub fn initialize_path(&mut self) {
        self.paths = vec![self.center_path(self.tuning.paths.center_jitter)];
        self.split_height = None;
        self.current_height = 0.0;
        self.difficulty = self.tuning.difficulty.levels[0];
        self.moving_chance = 0.0;
    }

    pub fn update_difficulty(&mut self, height: f32) {
        self.current_height = height.abs();
        self.difficulty = difficulty_at(self.current_height, &self.tuning.difficulty);
        self.moving_chance =
            moving_chance_at(self.current_height, &self.tuning.difficulty, &self.tuning.paths);
    }

    pub fn should_split<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        if self.live_paths() != 1 || self.current_height <= self.tuning.paths.split_min_height {
            return false;
        }
        rng.random::<f32>() < self.tuning.paths.split_chance * self.difficulty
    }

    /// Replace the lanes with two parallel ones at the quarter marks
    pub fn split_paths<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cfg = &self.tuning.paths;
        let lanes = [self.world_width / 4.0, self.world_width * 3.0 / 4.0];
        self.paths = lanes
            .iter()
            .map(|&lane_x| {
                let mut path = Path::new(lane_x, cfg.split_jitter, cfg.fade_time);
                path.merge_threshold =
                    rng.random_range(cfg.merge_threshold_min..=cfg.merge_threshold_max);
                path
            })
            .collect();
        self.split_height = Some(self.current_height);
        log::info!(
            "Paths split at height {:.0} (difficulty {:.2})",
            self.current_height,
            self.difficulty
        );
    }

    /// Smallest merge threshold among the live lanes
    fn merge_threshold(&self) -> f32 {
        self.paths
            .iter()
            .filter(|p| p.viable)
            .map(|p| p.merge_threshold)
            .fold(f32::INFINITY, f32::min)
    }

    pub fn should_merge(&self) -> bool {
        if self.live_paths() <= 1 {
            return false;
        }
        let since_split = self.current_height - self.split_height.unwrap_or(self.current_height);
        since_split > self.merge_threshold()
    }

    /// Retire every lane and continue on a fresh centered one
    pub fn merge_paths(&mut self) {
        let retired_fade = self.tuning.paths.retired_fade_time;
        for path in &mut self.paths {
            path.viable = false;
            path.fade_time = retired_fade;
        }
        let merged = self.center_path(self.tuning.paths.merged_jitter);
        self.paths.push(merged);
        self.split_height = None;
        log::info!("Paths merged at height {:.0}", self.current_height);
    }

    fn moving_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> PlatformKind {
        self.zone()
            .moving_weights()
            .choose_weighted(rng, |&(_, weight)| weight)
            .map(|&(kind, _)| kind)
            .unwrap_or(PlatformKind::MovingSlow)
    }

    /// Roll the kind of the next platform on lane `index`
    pub fn platform_kind<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> PlatformKind {
        let safe_interval = self.tuning.paths.safe_interval.max(1);

        if self.moving_chance > 0.0 && rng.random::<f32>() < self.moving_chance {
            let kind = self.moving_kind(rng);
            if let Some(path) = self.paths.get_mut(index) {
                path.since_safe += 1;
            }
            return kind;
        }

        if let Some(path) = self.paths.get_mut(index) {
            if path.since_safe + 1 >= safe_interval {
                path.since_safe = 0;
                return PlatformKind::Normal;
            }
            path.since_safe += 1;
        }

        let cfg = &self.tuning.paths;
        let small_chance = cfg.small_base + (self.difficulty - 1.0) * cfg.small_per_difficulty;
        if rng.random::<f32>() < small_chance {
            PlatformKind::Small
        } else {
            PlatformKind::Normal
        }
    }

    /// Placements for one row at `height`, one per live lane
    pub fn platform_positions<R: Rng + ?Sized>(
        &mut self,
        height: f32,
        rng: &mut R,
    ) -> Vec<Placement> {
        self.platform_positions_at(height, height, rng)
    }

    /// Placements at world `row_y`, with the lane layout driven by `height`
    /// climbed rather than the raw coordinate
    pub fn platform_positions_at<R: Rng + ?Sized>(
        &mut self,
        row_y: f32,
        height: f32,
        rng: &mut R,
    ) -> Vec<Placement> {
        self.update_difficulty(height);

        if self.should_merge() {
            self.merge_paths();
        } else if self.should_split(rng) {
            self.split_paths(rng);
        }

        let mut placements = Vec::with_capacity(self.paths.len());
        for index in 0..self.paths.len() {
            if !self.paths[index].viable {
                continue;
            }
            let x = self.paths[index].next_x(self.world_width, rng);
            let fade_duration = self.paths[index].fade_time;
            let kind = self.platform_kind(index, rng);
            placements.push(Placement {
                x,
                y: row_y,
                difficulty: self.difficulty,
                fade_duration,
                kind,
            });
        }

        log::trace!(
            "Row at {:.0} (height {:.0}): {} placement(s), zone {}",
            row_y,
            height,
            placements.len(),
            self.zone().as_str()
        );
        placements
    }

    /// Drop retired lanes; there is always at least one lane afterwards
    pub fn cleanup(&mut self, min_visible_height: f32) {
        let before = self.paths.len();
        self.paths.retain(|p| p.viable);
        if self.paths.is_empty() {
            self.paths.push(self.center_path(self.tuning.paths.center_jitter));
            self.split_height = None;
        }
        if self.paths.len() != before {
            log::debug!(
                "Path cleanup below {:.0}: {} -> {} lane(s)",
                min_visible_height,
                before,
                self.paths.len()
            );
        }
    }

    /// Vertical gap to the next row, always reachable with one bounce
    pub fn row_spacing(&self) -> f32 {
        let cfg = &self.tuning.paths;
        let stretched = cfg.base_row_spacing * (0.8 + 0.2 * self.difficulty);
        stretched.min(self.tuning.physics.max_jump_height() * cfg.max_spacing_ratio)
    }

    /// Test hook: mark every lane as non-viable without creating a successor
    #[cfg(test)]
    pub(crate) fn retire_all(&mut self) {
        for path in &mut self.paths {
            path.viable = false;
        }
    }
}
