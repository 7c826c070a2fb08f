//! Fire effect
//!
//! Every pixel independently picks a hue in the red-orange band and a random
//! brightness each frame. The sequence comes from a seeded `fastrand`
//! generator, so two effects with the same seed flicker identically.

use fastrand::Rng;

use super::{Effect, Knobs};
use crate::{color::Hsv, frame::FrameBuffer, math8::scale_percent};

/// Hue band of the flames, in degrees
pub const FIRE_HUE_MIN: u16 = 0;
pub const FIRE_HUE_MAX: u16 = 30;

/// Value band before the global brightness is applied, in percent
pub const FIRE_VALUE_MIN: u8 = 20;
pub const FIRE_VALUE_MAX: u8 = 100;

const DEFAULT_SEED: u64 = 0x5eed_f1ae;

/// Random flicker over a fixed orange-red hue band
#[derive(Debug, Clone)]
pub struct FireEffect {
    seed: u64,
    rng: Rng,
}

impl Default for FireEffect {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl FireEffect {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Rng::with_seed(seed),
        }
    }
}

impl Effect for FireEffect {
    const BASE_DELAY_MS: u64 = 100;
    const SPEED_FACTOR: u64 = 1;

    fn render<const N: usize, const LEN: usize>(
        &mut self,
        knobs: &Knobs,
        frame: &mut FrameBuffer<'_, N, LEN>,
    ) {
        for i in 0..N {
            let hue = self.rng.u16(FIRE_HUE_MIN..=FIRE_HUE_MAX);
            let value = self.rng.u8(FIRE_VALUE_MIN..=FIRE_VALUE_MAX);
            let value = scale_percent(value, knobs.brightness());
            frame.set_pixel_hsv(i, Hsv::new(hue, 100, value));
        }
    }

    fn reset(&mut self) {
        self.rng.seed(self.seed);
    }
}
