//! Deterministic roll sources for tests
//!
//! `ScriptedRng` replays a fixed word forever, which pins every probability
//! roll to one outcome: `always_low` makes `random::<f32>() < p` succeed for
//! any `p > 0` and picks the low end of every range, `always_high` makes
//! every roll fail.

use rand::RngCore;

#[derive(Debug, Clone)]
pub struct ScriptedRng {
    word: u64,
}

impl ScriptedRng {
    pub fn always_low() -> Self {
        Self { word: 0 }
    }

    pub fn always_high() -> Self {
        Self { word: u64::MAX }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.word as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(self.word as u8);
    }
}
