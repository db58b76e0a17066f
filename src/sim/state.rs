//! Game state and the objects it owns
//!
//! The state owns the live platforms, the path manager, the player, the
//! camera and the run's RNG. Nothing it owns points back at it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::path::PathManager;
use super::platform::{Platform, PlatformKind};
use super::player::Player;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Paused,
    /// Player fell out of view
    GameOver,
}

/// Things that happened during the last tick, for sound and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Bounce { platform_id: u32, kind: PlatformKind },
    /// A bounced platform finished fading
    PlatformExpired { platform_id: u32 },
    GameOver { score: u64 },
}

/// World dimensions the run is played in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub world: World,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub camera: Camera,
    /// Live platforms in spawn order
    pub platforms: Vec<Platform>,
    pub paths: PathManager,
    /// Max height climbed, whole units
    pub score: u64,
    /// Player y at spawn; score is measured from here
    pub start_y: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the last tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new run with the given seed
    pub fn new(seed: u64, world: World, tuning: &Tuning) -> Self {
        let start_y = world.height - 100.0;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            world,
            tuning: tuning.clone(),
            phase: GamePhase::Playing,
            player: Player::new(world.width / 2.0, start_y, world.width, &tuning.physics),
            camera: Camera::new(tuning.camera.lerp, tuning.camera.follow_ratio),
            platforms: Vec::new(),
            paths: PathManager::new(world.width, tuning),
            score: 0,
            start_y,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };
        state.spawn_initial_platforms();
        log::info!("New run (seed {seed}, {} platforms)", state.platforms.len());
        state
    }

    /// Start over in place, keeping world and tuning
    pub fn restart(&mut self, seed: u64) {
        let world = self.world;
        let tuning = self.tuning.clone();
        *self = Self::new(seed, world, &tuning);
        self.camera.reset(0.0);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// A wide starting deck under the player, then rows up to the top of the view
    fn spawn_initial_platforms(&mut self) {
        let id = self.next_entity_id();
        let start = Platform::new(
            id,
            self.world.width / 2.0 - PLATFORM_MAX_WIDTH / 2.0,
            self.world.height - 50.0,
            1.0,
            Some(PLATFORM_MAX_WIDTH),
            PlatformKind::Large,
            &mut self.rng,
        );
        self.platforms.push(start);

        self.paths.initialize_path();
        let mut row_y = self.world.height - 150.0;
        while row_y > 0.0 {
            self.spawn_row(row_y);
            row_y -= self.paths.row_spacing();
        }
    }

    /// Path height for a row: zero inside the opening view, then the climb
    /// above its top edge
    pub fn row_height(&self, row_y: f32) -> f32 {
        row_y.min(0.0)
    }

    /// Ask the path manager for a row at `row_y` and spawn it; returns how many
    pub fn spawn_row(&mut self, row_y: f32) -> usize {
        let height = self.row_height(row_y);
        let placements = self.paths.platform_positions_at(row_y, height, &mut self.rng);
        for placement in &placements {
            let id = self.next_entity_id();
            let platform = Platform::from_placement(id, placement, &mut self.rng);
            self.platforms.push(platform);
        }
        placements.len()
    }

    /// Smallest y among live platforms; None before any exist
    pub fn highest_platform_y(&self) -> Option<f32> {
        self.platforms
            .iter()
            .map(|p| p.pos.y)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Height climbed above the spawn point
    pub fn height_climbed(&self) -> f32 {
        (self.start_y - self.player.pos.y).max(0.0)
    }

    /// Player y on screen
    pub fn player_screen_y(&self) -> f32 {
        self.camera.apply_offset(self.player.pos.y)
    }
}
