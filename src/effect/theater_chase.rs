//! Theater chase effect
//!
//! Lights every third pixel and shifts the pattern by one each frame, the
//! classic marquee look. Without a base colour the hue advances five degrees
//! per frame in the active colour space.

use super::{Effect, Knobs, Palette};
use crate::{
    color::{BLACK, Color, ColorSpace},
    frame::FrameBuffer,
    math8::advance_hue,
};

/// Pixels per marquee group
const SPACING: u8 = 3;
const HUE_STEP: u16 = 5;

/// Marquee chase over every third pixel
#[derive(Debug, Clone, Default)]
pub struct TheaterChaseEffect {
    hue: u16,
    frame: u8,
    color_space: ColorSpace,
    base_color: Option<Color>,
}

impl TheaterChaseEffect {
    pub const fn new(palette: Palette) -> Self {
        Self {
            hue: 0,
            frame: 0,
            color_space: palette.color_space,
            base_color: palette.base_color,
        }
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.color_space = palette.color_space;
        self.base_color = palette.base_color;
    }

    /// Offset (0-2) of the lit pixels in the next frame
    pub const fn frame(&self) -> u8 {
        self.frame
    }
}

impl Effect for TheaterChaseEffect {
    const BASE_DELAY_MS: u64 = 200;
    const SPEED_FACTOR: u64 = 2;

    fn render<const N: usize, const LEN: usize>(
        &mut self,
        knobs: &Knobs,
        frame: &mut FrameBuffer<'_, N, LEN>,
    ) {
        let lit = self
            .base_color
            .unwrap_or_else(|| self.color_space.from_hue(self.hue, knobs.brightness()))
            .to_rgb();
        let offset = usize::from(self.frame);
        let spacing = usize::from(SPACING);

        for i in 0..N {
            if i % spacing == offset {
                frame.set_pixel(i, lit);
            } else {
                frame.set_pixel(i, BLACK);
            }
        }

        self.frame = (self.frame + 1) % SPACING;
        self.hue = advance_hue(self.hue, HUE_STEP);
    }

    fn reset(&mut self) {
        self.hue = 0;
        self.frame = 0;
    }
}
