//! Height-indexed difficulty: zones, the difficulty scalar and the
//! moving-platform ramp

use serde::{Deserialize, Serialize};

use super::platform::PlatformKind;
use crate::tuning::{DifficultyCurve, PathTuning};

/// Difficulty band keyed by absolute height climbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Zone {
    pub fn from_height(height: f32, curve: &DifficultyCurve) -> Self {
        if height >= curve.expert_height {
            Zone::Expert
        } else if height >= curve.advanced_height {
            Zone::Advanced
        } else if height >= curve.intermediate_height {
            Zone::Intermediate
        } else {
            Zone::Beginner
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Beginner => "Beginner",
            Zone::Intermediate => "Intermediate",
            Zone::Advanced => "Advanced",
            Zone::Expert => "Expert",
        }
    }

    /// Weighted moving subtypes for this zone
    pub fn moving_weights(&self) -> &'static [(PlatformKind, f32)] {
        match self {
            Zone::Beginner => &[(PlatformKind::MovingSlow, 1.0)],
            Zone::Intermediate => &[
                (PlatformKind::MovingSlow, 0.5),
                (PlatformKind::MovingMedium, 0.5),
            ],
            Zone::Advanced => &[
                (PlatformKind::MovingSlow, 0.4),
                (PlatformKind::MovingMedium, 0.4),
                (PlatformKind::MovingFast, 0.2),
            ],
            Zone::Expert => &[
                (PlatformKind::MovingSlow, 0.2),
                (PlatformKind::MovingMedium, 0.4),
                (PlatformKind::MovingFast, 0.4),
            ],
        }
    }
}

/// Difficulty scalar at an absolute height
///
/// Linear inside each zone between the zone's start level and the next
/// zone's start level, so every boundary is continuous. Expert ramps to the
/// cap over `expert_ramp` and stays there.
pub fn difficulty_at(height: f32, curve: &DifficultyCurve) -> f32 {
    let height = height.abs();
    let knots = [
        (0.0, curve.levels[0]),
        (curve.intermediate_height, curve.levels[1]),
        (curve.advanced_height, curve.levels[2]),
        (curve.expert_height, curve.levels[3]),
        (curve.expert_height + curve.expert_ramp, curve.cap),
    ];

    let mut value = curve.cap;
    for pair in knots.windows(2) {
        let (h0, d0) = pair[0];
        let (h1, d1) = pair[1];
        if height < h1 {
            let span = (h1 - h0).max(f32::EPSILON);
            value = d0 + (d1 - d0) * ((height - h0) / span);
            break;
        }
    }
    value.min(curve.cap)
}

/// Probability that the next platform is a moving one
pub fn moving_chance_at(height: f32, curve: &DifficultyCurve, paths: &PathTuning) -> f32 {
    let start = curve.intermediate_height * paths.moving_start_fraction;
    let height = height.abs();
    if height <= start {
        return 0.0;
    }
    ((height - start) * paths.moving_ramp).min(paths.moving_max_chance)
}
