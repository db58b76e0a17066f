//! Property-based invariant tests for the climb simulation.
//!
//! 1. Difficulty is monotone in height, capped, and continuous at zone edges
//! 2. Platform width stays in [60, 100] for any difficulty
//! 3. Fade law: alpha follows 255 * (1 - t / F) and deactivates at F
//! 4. At least one path survives any split/merge/cleanup sequence
//! 5. Every window of 5 kinds on one lane holds a Normal
//! 6. Camera converges on a fixed target without overshoot
//! 7. Moving platforms never leave their patrol range

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use skyjump::consts::{PLATFORM_MAX_WIDTH, PLATFORM_MIN_WIDTH, WORLD_WIDTH};
use skyjump::sim::{Camera, PathManager, Platform, PlatformKind, difficulty_at};
use skyjump::tuning::{DifficultyCurve, Tuning};

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum PathOp {
    Rows(f32),
    Split,
    Merge,
    Cleanup,
}

fn path_op_strategy() -> impl Strategy<Value = PathOp> {
    prop_oneof![
        (0.0f32..200_000.0).prop_map(PathOp::Rows),
        Just(PathOp::Split),
        Just(PathOp::Merge),
        Just(PathOp::Cleanup),
    ]
}

fn kind_strategy() -> impl Strategy<Value = PlatformKind> {
    prop::sample::select(PlatformKind::ALL.to_vec())
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Difficulty curve
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn difficulty_monotone_and_capped(a in 0.0f32..500_000.0, b in 0.0f32..500_000.0) {
        let curve = DifficultyCurve::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let d_lo = difficulty_at(lo, &curve);
        let d_hi = difficulty_at(hi, &curve);
        prop_assert!(d_lo <= d_hi + 1e-5);
        prop_assert!(d_hi <= curve.cap);
        prop_assert!(d_lo >= curve.levels[0]);
    }

    #[test]
    fn difficulty_symmetric_in_sign(h in 0.0f32..500_000.0) {
        let curve = DifficultyCurve::default();
        prop_assert_eq!(difficulty_at(h, &curve), difficulty_at(-h, &curve));
    }
}

#[test]
fn difficulty_continuous_at_zone_edges() {
    let curve = DifficultyCurve::default();
    for edge in [
        curve.intermediate_height,
        curve.advanced_height,
        curve.expert_height,
        curve.expert_height + curve.expert_ramp,
    ] {
        let below = difficulty_at(edge - 0.5, &curve);
        let at = difficulty_at(edge, &curve);
        assert!((at - below).abs() < 1e-3, "discontinuity at {edge}");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2-3. Platform width and fade
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn platform_width_in_bounds(
        seed in any::<u64>(),
        difficulty in 0.0f32..5.0,
        kind in kind_strategy(),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let p = Platform::new(1, 100.0, -400.0, difficulty, None, kind, &mut rng);
        prop_assert!(p.width >= PLATFORM_MIN_WIDTH && p.width <= PLATFORM_MAX_WIDTH);
    }

    #[test]
    fn fade_law(duration in 0.5f32..4.0, steps in 1usize..400) {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut p = Platform::new(1, 0.0, 0.0, 1.0, None, PlatformKind::Normal, &mut rng);
        p.fade_duration = duration;
        p.on_collision();

        let dt = 1.0 / 60.0;
        let mut last_alpha = p.alpha;
        for _ in 0..steps {
            p.update(dt);
            // Repeated collisions never restart the fade
            p.on_collision();
            let t = p.fade_elapsed.unwrap();
            if t >= duration {
                prop_assert!(!p.active);
                prop_assert_eq!(p.alpha, 0.0);
            } else {
                let expected = 255.0 * (1.0 - t / duration);
                prop_assert!((p.alpha - expected).abs() < 0.01);
                prop_assert!(p.active);
            }
            prop_assert!(p.alpha <= last_alpha);
            last_alpha = p.alpha;
        }
    }

    #[test]
    fn moving_platform_stays_in_range(
        seed in any::<u64>(),
        difficulty in 1.0f32..3.0,
        ticks in 1usize..2_000,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut p = Platform::new(1, 350.0, 0.0, difficulty, None, PlatformKind::MovingFast, &mut rng);
        let motion = p.motion.unwrap();
        for _ in 0..ticks {
            p.update(1.0 / 60.0);
            prop_assert!((p.pos.x - motion.origin_x).abs() <= motion.range + 1e-3);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4-5. Path manager
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn at_least_one_path_survives(
        seed in any::<u64>(),
        ops in prop::collection::vec(path_op_strategy(), 1..120),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut manager = PathManager::new(WORLD_WIDTH, &Tuning::default());
        for op in &ops {
            match op {
                PathOp::Rows(h) => {
                    let placements = manager.platform_positions(-*h, &mut rng);
                    prop_assert!(!placements.is_empty());
                    prop_assert_eq!(placements.len(), manager.live_paths());
                }
                PathOp::Split => manager.split_paths(&mut rng),
                PathOp::Merge => manager.merge_paths(),
                PathOp::Cleanup => manager.cleanup(0.0),
            }
            prop_assert!(!manager.paths().is_empty());
            prop_assert!(manager.live_paths() >= 1);
        }
    }

    #[test]
    fn every_window_of_five_has_a_normal(
        seed in any::<u64>(),
        height in 0.0f32..200_000.0,
        count in 5usize..200,
    ) {
        let mut tuning = Tuning::default();
        tuning.paths.moving_max_chance = 0.0;
        let mut manager = PathManager::new(WORLD_WIDTH, &tuning);
        manager.update_difficulty(-height);
        let mut rng = Pcg32::seed_from_u64(seed);

        let kinds: Vec<_> = (0..count).map(|_| manager.platform_kind(0, &mut rng)).collect();
        for window in kinds.windows(5) {
            prop_assert!(window.contains(&PlatformKind::Normal), "{:?}", window);
        }
    }

    #[test]
    fn placements_stay_on_screen(seed in any::<u64>(), rows in 1usize..200) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut manager = PathManager::new(WORLD_WIDTH, &Tuning::default());
        let mut y = 450.0;
        for _ in 0..rows {
            for placement in manager.platform_positions(y, &mut rng) {
                prop_assert!(placement.x >= 0.0);
                prop_assert!(placement.x <= WORLD_WIDTH - PLATFORM_MAX_WIDTH);
                prop_assert_eq!(placement.y, y);
            }
            y -= manager.row_spacing() * 40.0;
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Camera
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn camera_converges_without_overshoot(
        start in -50_000.0f32..50_000.0,
        player_y in -50_000.0f32..50_000.0,
        lerp in 0.01f32..0.99,
    ) {
        let mut camera = Camera::new(lerp, 0.6);
        camera.reset(start);
        camera.update(player_y, 600.0);
        let target = camera.target;
        let side = (target - start).signum();
        let mut last_gap = (target - start).abs();
        for _ in 0..2_000 {
            camera.update(player_y, 600.0);
            let gap = (target - camera.offset).abs();
            prop_assert!(gap <= last_gap + 1e-3);
            // Never crosses to the other side of the target
            prop_assert!((target - camera.offset) * side >= -1e-2);
            last_gap = gap;
        }
        prop_assert!(last_gap < 0.5);
    }
}
