//! Player vs platform collision
//!
//! A landing only counts while falling, with the player's feet inside the
//! platform's vertical extent and the boxes overlapping horizontally. The
//! first platform in slice order wins and nothing else is checked that tick.

use super::platform::Platform;
use super::player::Player;

/// Does the player land on this platform right now?
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    if player.vel.y <= 0.0 || !platform.is_collidable() {
        return false;
    }
    let body = player.rect();
    let deck = platform.rect();
    deck.spans_y(body.bottom()) && body.overlaps_x(&deck)
}

/// Bounce the player off the first platform it lands on
///
/// Returns the index of that platform, which has started fading.
pub fn check_platform_collision(player: &mut Player, platforms: &mut [Platform]) -> Option<usize> {
    let index = platforms.iter().position(|p| lands_on(player, p))?;
    player.jump();
    platforms[index].on_collision();
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::platform::PlatformKind;
    use crate::tuning::PhysicsTuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn deck(id: u32, x: f32, y: f32) -> Platform {
        let mut rng = Pcg32::seed_from_u64(11);
        Platform::new(id, x, y, 1.0, Some(100.0), PlatformKind::Normal, &mut rng)
    }

    /// Player whose feet are at `feet_y`
    fn falling_player(x: f32, feet_y: f32, vy: f32) -> Player {
        let physics = PhysicsTuning::default();
        let mut player = Player::new(x, feet_y - physics.player_height, 800.0, &physics);
        player.vel.y = vy;
        player
    }

    #[test]
    fn test_landing_bounces_and_starts_fade() {
        let mut player = falling_player(400.0, 500.0, 2.0);
        let mut platforms = vec![deck(1, 380.0, 490.0)];

        let hit = check_platform_collision(&mut player, &mut platforms);
        assert_eq!(hit, Some(0));
        assert_eq!(player.vel.y, -15.0);
        assert!(platforms[0].fade_elapsed.is_some());
    }

    #[test]
    fn test_rising_player_passes_through() {
        let mut player = falling_player(400.0, 500.0, -3.0);
        let mut platforms = vec![deck(1, 380.0, 490.0)];
        assert_eq!(check_platform_collision(&mut player, &mut platforms), None);
        assert_eq!(player.vel.y, -3.0);
        assert!(platforms[0].fade_elapsed.is_none());
    }

    #[test]
    fn test_miss_keeps_falling() {
        let mut player = falling_player(100.0, 500.0, 4.0);
        let mut platforms = vec![deck(1, 380.0, 490.0)];
        assert_eq!(check_platform_collision(&mut player, &mut platforms), None);
        assert_eq!(player.vel.y, 4.0);
    }

    #[test]
    fn test_first_match_wins() {
        let mut player = falling_player(400.0, 500.0, 2.0);
        let mut platforms = vec![deck(1, 380.0, 490.0), deck(2, 390.0, 495.0)];
        assert_eq!(check_platform_collision(&mut player, &mut platforms), Some(0));
        assert!(platforms[1].fade_elapsed.is_none());
    }

    #[test]
    fn test_inactive_platform_is_ignored() {
        let mut player = falling_player(400.0, 500.0, 2.0);
        let mut platforms = vec![deck(1, 380.0, 490.0), deck(2, 380.0, 495.0)];
        platforms[0].active = false;
        assert_eq!(check_platform_collision(&mut player, &mut platforms), Some(1));
    }

    #[test]
    fn test_fading_platform_still_bounces() {
        let mut player = falling_player(400.0, 500.0, 2.0);
        let mut platforms = vec![deck(1, 380.0, 490.0)];
        platforms[0].on_collision();
        platforms[0].update(1.0);
        assert_eq!(check_platform_collision(&mut player, &mut platforms), Some(0));
        assert_eq!(platforms[0].fade_elapsed, Some(1.0));
    }
}
