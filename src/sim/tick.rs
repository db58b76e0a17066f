//! Fixed timestep simulation tick
//!
//! Core game loop that advances the climb deterministically.

use super::collision::check_platform_collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal steer: -1 left, 0 none, 1 right
    pub direction: i8,
    /// Pause toggle
    pub pause: bool,
    /// Throw the run away and start over with this seed
    pub restart: Option<u64>,
    /// Idle/demo mode - autopilot steers the player
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if let Some(seed) = input.restart {
        state.restart(seed);
        return;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    let direction = if input.idle_mode {
        autopilot_direction(state)
    } else {
        input.direction
    };

    spawn_rows_ahead(state);

    state.player.move_dir(direction);
    state.player.update();
    if let Some(index) = check_platform_collision(&mut state.player, &mut state.platforms) {
        let platform = &state.platforms[index];
        state.events.push(GameEvent::Bounce {
            platform_id: platform.id,
            kind: platform.kind,
        });
    }

    // Advance everything first, then drop what finished fading
    let mut expired = Vec::new();
    for platform in &mut state.platforms {
        platform.update(dt);
        if !platform.active {
            expired.push(platform.id);
        }
    }
    if !expired.is_empty() {
        state.platforms.retain(|p| p.active);
        state.events.extend(
            expired
                .into_iter()
                .map(|platform_id| GameEvent::PlatformExpired { platform_id }),
        );
    }

    state.camera.update(state.player.pos.y, state.world.height);

    let climbed = state.height_climbed() as u64;
    state.score = state.score.max(climbed);

    prune_below_view(state);

    if state.player_screen_y() > state.world.height + DEATH_MARGIN {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over at tick {} with score {} ({} zone)",
            state.time_ticks,
            state.score,
            state.paths.zone().as_str()
        );
    }
}

/// Generate rows until the highest platform clears the camera look-ahead
///
/// Returns the number of rows spawned. Nothing is generated while the
/// platform set is empty.
pub fn spawn_rows_ahead(state: &mut GameState) -> usize {
    let look_ahead = state.camera.offset - SPAWN_LOOKAHEAD;
    let mut rows = 0;
    while let Some(highest) = state.highest_platform_y() {
        if highest <= look_ahead {
            break;
        }
        let row_y = highest - state.paths.row_spacing();
        if state.spawn_row(row_y) == 0 {
            break;
        }
        rows += 1;
    }
    if rows > 0 {
        log::debug!(
            "Spawned {} row(s), difficulty {:.2}, {} live platform(s)",
            rows,
            state.paths.difficulty(),
            state.platforms.len()
        );
    }
    rows
}

/// Forget platforms that scrolled well below the view
pub fn prune_below_view(state: &mut GameState) {
    let min_visible = state.camera.offset + state.world.height + PRUNE_MARGIN;
    state.platforms.retain(|p| p.pos.y < min_visible);
    state.paths.cleanup(min_visible);
}

/// Steer toward the next platform up while rising, or the one below while falling
fn autopilot_direction(state: &GameState) -> i8 {
    let body = state.player.rect();
    let feet = body.bottom();
    let rising = state.player.vel.y < 0.0;

    let target = state
        .platforms
        .iter()
        .filter(|p| p.is_collidable())
        .filter(|p| if rising { p.pos.y < feet } else { p.pos.y >= feet })
        .min_by(|a, b| {
            // Nearest in height: lowest above when rising, highest below when falling
            let da = (a.pos.y - feet).abs();
            let db = (b.pos.y - feet).abs();
            da.total_cmp(&db)
        });

    let Some(target) = target else {
        return 0;
    };
    let dx = target.rect().center_x() - body.center_x();
    if dx.abs() < 4.0 {
        0
    } else if dx > 0.0 {
        1
    } else {
        -1
    }
}
