//! Breathing effect
//!
//! Ramps the intensity of a single colour up and down between 10% and 90% in
//! a triangle wave. The ramp replaces the HSV value or HSL lightness and
//! scales RGB channels, so the global brightness knob does not apply.
//! Without a base colour the hue drifts one degree per frame.

use super::{Effect, Knobs, Palette};
use crate::{
    color::{Color, ColorSpace},
    frame::FrameBuffer,
    math8::advance_hue,
};

pub const BREATHE_MIN: u8 = 10;
pub const BREATHE_MAX: u8 = 90;
const BREATHE_START: u8 = 50;
const HUE_STEP: u16 = 1;

/// Ramp direction of the breathing value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BreatheDirection {
    Rising,
    Falling,
}

/// Triangle-wave brightness pulse
#[derive(Debug, Clone)]
pub struct BreatheEffect {
    hue: u16,
    value: u8,
    direction: BreatheDirection,
    color_space: ColorSpace,
    base_color: Option<Color>,
}

impl Default for BreatheEffect {
    fn default() -> Self {
        Self::new(Palette::DEFAULT)
    }
}

impl BreatheEffect {
    pub const fn new(palette: Palette) -> Self {
        Self {
            hue: 0,
            value: BREATHE_START,
            direction: BreatheDirection::Rising,
            color_space: palette.color_space,
            base_color: palette.base_color,
        }
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.color_space = palette.color_space;
        self.base_color = palette.base_color;
    }

    /// Intensity in percent used for the next frame
    pub const fn value(&self) -> u8 {
        self.value
    }

    pub const fn direction(&self) -> BreatheDirection {
        self.direction
    }

    /// Step the ramp and flip direction once a bound is reached
    fn step(&mut self) {
        self.value = match self.direction {
            BreatheDirection::Rising => self.value.saturating_add(1),
            BreatheDirection::Falling => self.value.saturating_sub(1),
        };
        if self.value >= BREATHE_MAX {
            self.direction = BreatheDirection::Falling;
        } else if self.value <= BREATHE_MIN {
            self.direction = BreatheDirection::Rising;
        }
    }
}

impl Effect for BreatheEffect {
    const BASE_DELAY_MS: u64 = 150;
    const SPEED_FACTOR: u64 = 1;

    fn render<const N: usize, const LEN: usize>(
        &mut self,
        _knobs: &Knobs,
        frame: &mut FrameBuffer<'_, N, LEN>,
    ) {
        let base = self
            .base_color
            .unwrap_or_else(|| self.color_space.from_hue(self.hue, 100));
        frame.set_all(base.with_level(self.value).to_rgb());

        self.step();
        self.hue = advance_hue(self.hue, HUE_STEP);
    }

    fn reset(&mut self) {
        self.hue = 0;
        self.value = BREATHE_START;
        self.direction = BreatheDirection::Rising;
    }
}
