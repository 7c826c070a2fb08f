//! Static color fill effect
//!
//! Fills all LEDs with one colour. Without a base colour the hue creeps
//! forward one degree per frame, so the strip drifts slowly around the colour
//! wheel in the active colour space. A base colour is shown as is.

use super::{Effect, Knobs, Palette};
use crate::{
    color::{Color, ColorSpace},
    frame::FrameBuffer,
    math8::advance_hue,
};

const HUE_STEP: u16 = 1;

/// Static color effect - fills all LEDs with one color
#[derive(Debug, Clone, Default)]
pub struct StaticColorEffect {
    hue: u16,
    color_space: ColorSpace,
    base_color: Option<Color>,
}

impl StaticColorEffect {
    pub const fn new(palette: Palette) -> Self {
        Self {
            hue: 0,
            color_space: palette.color_space,
            base_color: palette.base_color,
        }
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.color_space = palette.color_space;
        self.base_color = palette.base_color;
    }

    /// Hue used for the next frame when no base colour is set
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Colour the next frame will show
    pub fn color(&self, knobs: &Knobs) -> Color {
        self.base_color
            .unwrap_or_else(|| self.color_space.from_hue(self.hue, knobs.brightness()))
    }
}

impl Effect for StaticColorEffect {
    const BASE_DELAY_MS: u64 = 100;
    const SPEED_FACTOR: u64 = 1;

    fn render<const N: usize, const LEN: usize>(
        &mut self,
        knobs: &Knobs,
        frame: &mut FrameBuffer<'_, N, LEN>,
    ) {
        frame.set_all(self.color(knobs).to_rgb());
        self.hue = advance_hue(self.hue, HUE_STEP);
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
