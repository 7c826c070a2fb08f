//! Rainbow chase effect
//!
//! Spreads hues along the strip and rolls them forward every frame. Three
//! styles are available:
//! - `Spread`: the full hue circle across the strip, +2° per frame. RGB mode
//!   uses the classic three-segment colour wheel.
//! - `Chase`: hues 30° apart, +3° per frame. RGB mode uses the six-segment
//!   [`hue_ramp`](crate::color::hue_ramp).
//! - `PastelWave`: the full circle at HSL saturation 60%, lightness 80%,
//!   +2° per frame, whatever the colour space.

use super::{Effect, Knobs, Palette};
use crate::{
    color::{ColorSpace, Hsl, wheel},
    frame::FrameBuffer,
    math8::{HUE_CIRCLE, advance_hue, wrap_hue},
};

const SPREAD_HUE_STEP: u16 = 2;
const CHASE_HUE_STEP: u16 = 3;

/// Hue distance between neighbouring pixels in the chase style
const CHASE_SPACING: usize = 30;

const PASTEL_SATURATION: u8 = 60;
const PASTEL_LIGHTNESS: u8 = 80;

/// Number of positions on the classic RGB wheel
const WHEEL_SIZE: usize = 255;

/// How the rainbow is laid out along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RainbowStyle {
    #[default]
    Spread,
    Chase,
    PastelWave,
}

/// Rainbow with a rolling base hue
#[derive(Debug, Clone, Default)]
pub struct RainbowChaseEffect {
    base_hue: u16,
    color_space: ColorSpace,
    style: RainbowStyle,
}

impl RainbowChaseEffect {
    pub const fn new(palette: Palette) -> Self {
        Self {
            base_hue: 0,
            color_space: palette.color_space,
            style: palette.rainbow_style,
        }
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.color_space = palette.color_space;
        self.style = palette.rainbow_style;
    }

    pub const fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    pub const fn style(&self) -> RainbowStyle {
        self.style
    }

    /// Base hue used for the next frame
    pub const fn base_hue(&self) -> u16 {
        self.base_hue
    }
}

impl Effect for RainbowChaseEffect {
    const BASE_DELAY_MS: u64 = 100;
    const SPEED_FACTOR: u64 = 1;

    #[allow(clippy::cast_possible_truncation)]
    fn render<const N: usize, const LEN: usize>(
        &mut self,
        knobs: &Knobs,
        frame: &mut FrameBuffer<'_, N, LEN>,
    ) {
        let base = usize::from(self.base_hue);
        let spread = |i: usize| wrap_hue((base + i * usize::from(HUE_CIRCLE) / N) as u16);

        for i in 0..N {
            let color = match (self.style, self.color_space) {
                (RainbowStyle::Spread, ColorSpace::Rgb) => {
                    wheel(((base + i * WHEEL_SIZE / N) % WHEEL_SIZE) as u8)
                }
                (RainbowStyle::Spread, space) => {
                    space.from_hue(spread(i), knobs.brightness()).to_rgb()
                }
                (RainbowStyle::Chase, space) => {
                    let hue = ((base + i * CHASE_SPACING) % usize::from(HUE_CIRCLE)) as u16;
                    space.from_hue(hue, knobs.brightness()).to_rgb()
                }
                (RainbowStyle::PastelWave, _) => {
                    Hsl::new(spread(i), PASTEL_SATURATION, PASTEL_LIGHTNESS).to_rgb()
                }
            };
            frame.set_pixel(i, color);
        }

        let step = match self.style {
            RainbowStyle::Chase => CHASE_HUE_STEP,
            RainbowStyle::Spread | RainbowStyle::PastelWave => SPREAD_HUE_STEP,
        };
        self.base_hue = advance_hue(self.base_hue, step);
    }

    fn reset(&mut self) {
        self.base_hue = 0;
    }
}
