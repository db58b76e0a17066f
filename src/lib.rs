//! Skyjump - a vertical platform-jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (path generation, platforms, physics, camera)
//! - `tuning`: Data-driven game balance
//! - `settings`: Runtime preferences and their JSON file
//! - `highscores`: Top-10 leaderboard
//! - `background`: Score-keyed background color ramp

pub mod background;
pub mod highscores;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default world (window) dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Platform size bounds
    pub const PLATFORM_MIN_WIDTH: f32 = 60.0;
    pub const PLATFORM_MAX_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Width lost per point of difficulty before jitter
    pub const PLATFORM_WIDTH_PER_DIFFICULTY: f32 = 15.0;

    /// Platforms are generated until the highest one is this far above the view
    pub const SPAWN_LOOKAHEAD: f32 = 100.0;
    /// Platforms this far below the view bottom are dropped
    pub const PRUNE_MARGIN: f32 = 200.0;
    /// Falling this far below the view bottom ends the run
    pub const DEATH_MARGIN: f32 = 100.0;
}

/// An RGB color as read by the renderer
pub type Rgb = [u8; 3];
