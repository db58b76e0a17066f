//! Background color ramp keyed by score
//!
//! Each difficulty zone fades between two colors over its first stretch,
//! then holds until the next zone begins.

use crate::Rgb;

const PALE_GREEN: Rgb = [152, 251, 152];
const SKY_BLUE: Rgb = [0, 178, 238];
const MEDIUM_PURPLE: Rgb = [147, 112, 219];
const FIREBRICK: Rgb = [178, 34, 34];
const MIDNIGHT_BLUE: Rgb = [25, 25, 112];

/// (score, color) stops in ascending score order
const STOPS: [(u64, Rgb); 8] = [
    (0, PALE_GREEN),
    (5_000, SKY_BLUE),
    (10_000, SKY_BLUE),
    (25_000, MEDIUM_PURPLE),
    (40_000, MEDIUM_PURPLE),
    (60_000, FIREBRICK),
    (80_000, FIREBRICK),
    (100_000, MIDNIGHT_BLUE),
];

/// Linear blend, `t` in [0, 1]
pub fn lerp_color(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    [mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])]
}

pub fn background_color(score: u64) -> Rgb {
    for pair in STOPS.windows(2) {
        let (start, from) = pair[0];
        let (end, to) = pair[1];
        if score < end {
            let t = (score - start) as f32 / (end - start) as f32;
            return lerp_color(from, to, t);
        }
    }
    STOPS[STOPS.len() - 1].1
}
