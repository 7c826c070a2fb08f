//! Twinkle slot
//!
//! Placeholder: holds one fixed pastel colour on every pixel. It does not
//! twinkle; the slot keeps its name so the effect order stays stable.

use super::{Effect, Knobs};
use crate::{color::Hsl, frame::FrameBuffer};

/// Magenta pastel shown by default
pub const DEFAULT_TWINKLE_COLOR: Hsl = Hsl::new(300, 100, 50);

/// Fixed pastel colour
#[derive(Debug, Clone)]
pub struct TwinkleEffect {
    color: Hsl,
}

impl Default for TwinkleEffect {
    fn default() -> Self {
        Self::new(DEFAULT_TWINKLE_COLOR)
    }
}

impl TwinkleEffect {
    pub const fn new(color: Hsl) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Hsl {
        self.color
    }
}

impl Effect for TwinkleEffect {
    const BASE_DELAY_MS: u64 = 100;
    const SPEED_FACTOR: u64 = 1;

    fn render<const N: usize, const LEN: usize>(
        &mut self,
        _knobs: &Knobs,
        frame: &mut FrameBuffer<'_, N, LEN>,
    ) {
        frame.set_all_hsl(self.color);
    }
}
