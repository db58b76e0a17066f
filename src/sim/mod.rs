//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, passed in explicitly
//! - Stable iteration order (platforms in spawn order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod difficulty;
pub mod path;
pub mod platform;
pub mod player;
pub mod rect;
pub mod state;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod tick;

pub use camera::Camera;
pub use collision::{check_platform_collision, lands_on};
pub use difficulty::{Zone, difficulty_at, moving_chance_at};
pub use path::{Path, PathManager, Placement};
pub use platform::{Motion, MotionProfile, Platform, PlatformKind};
pub use player::Player;
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState, World};
pub use tick::{TickInput, prune_below_view, spawn_rows_ahead, tick};
