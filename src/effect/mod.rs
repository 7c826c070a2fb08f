//! The six strip effects
//!
//! Effects live in a fixed enum, so switching never allocates. Each one
//! implements [`Effect`] and owns only the phase it needs for its next frame.

mod breathe;
mod fire;
mod rainbow;
mod static_color;
mod theater_chase;
mod twinkle;

use embassy_time::Duration;

pub use breathe::{BREATHE_MAX, BREATHE_MIN, BreatheDirection, BreatheEffect};
pub use fire::{FIRE_HUE_MAX, FIRE_HUE_MIN, FIRE_VALUE_MAX, FIRE_VALUE_MIN, FireEffect};
pub use rainbow::{RainbowChaseEffect, RainbowStyle};
pub use static_color::StaticColorEffect;
pub use theater_chase::TheaterChaseEffect;
pub use twinkle::{DEFAULT_TWINKLE_COLOR, TwinkleEffect};

use crate::color::{Color, ColorSpace};
use crate::frame::FrameBuffer;
use crate::math8::{PERCENT_MAX, clamp_percent};

/// Shortest delay between two frames
pub const MIN_FRAME_DELAY: Duration = Duration::from_millis(1);

pub const DEFAULT_BRIGHTNESS: u8 = 100;
pub const DEFAULT_SPEED: u8 = 50;
const MIN_SPEED: u8 = 1;

const EFFECT_NAME_STATIC_COLOR: &str = "static_color";
const EFFECT_NAME_RAINBOW_CHASE: &str = "rainbow_chase";
const EFFECT_NAME_FIRE: &str = "fire";
const EFFECT_NAME_BREATHE: &str = "breathe";
const EFFECT_NAME_THEATER_CHASE: &str = "theater_chase";
const EFFECT_NAME_TWINKLE: &str = "twinkle";

const EFFECT_ID_STATIC_COLOR: u8 = 0;
const EFFECT_ID_RAINBOW_CHASE: u8 = 1;
const EFFECT_ID_FIRE: u8 = 2;
const EFFECT_ID_BREATHE: u8 = 3;
const EFFECT_ID_THEATER_CHASE: u8 = 4;
const EFFECT_ID_TWINKLE: u8 = 5;

/// Brightness and speed shared by every effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Knobs {
    brightness: u8,
    speed: u8,
}

impl Knobs {
    /// Create knobs, clamping both values into range
    pub const fn new(brightness: u8, speed: u8) -> Self {
        Self {
            brightness: clamp_percent(brightness),
            speed: clamp_speed(speed),
        }
    }

    /// Overall brightness, 0-100%
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Animation speed, 1-100 (higher is faster)
    pub const fn speed(&self) -> u8 {
        self.speed
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = clamp_percent(brightness);
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = clamp_speed(speed);
    }
}

impl Default for Knobs {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS, DEFAULT_SPEED)
    }
}

const fn clamp_speed(speed: u8) -> u8 {
    if speed < MIN_SPEED {
        MIN_SPEED
    } else if speed > PERCENT_MAX {
        PERCENT_MAX
    } else {
        speed
    }
}

/// Colour settings for the effects that honour them
///
/// `color_space` applies to the static colour, rainbow, breathe and theater
/// chase effects. `base_color` replaces the rotating hue of the static colour,
/// breathe and theater chase effects. `rainbow_style` picks the rainbow
/// layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    pub color_space: ColorSpace,
    pub base_color: Option<Color>,
    pub rainbow_style: RainbowStyle,
}

impl Palette {
    /// Rotating HSV hue, spread rainbow
    pub const DEFAULT: Self = Self {
        color_space: ColorSpace::Hsv,
        base_color: None,
        rainbow_style: RainbowStyle::Spread,
    };
}

pub trait Effect {
    /// Frame delay at zero speed, in milliseconds
    const BASE_DELAY_MS: u64;

    /// Milliseconds removed from the delay per speed step
    const SPEED_FACTOR: u64;

    /// Write the next frame and advance the phase by one step
    fn render<const N: usize, const LEN: usize>(
        &mut self,
        knobs: &Knobs,
        frame: &mut FrameBuffer<'_, N, LEN>,
    );

    /// Reset effect phase
    fn reset(&mut self) {}

    /// Delay before the next frame: `BASE_DELAY_MS - SPEED_FACTOR·speed`,
    /// never shorter than [`MIN_FRAME_DELAY`]
    fn frame_delay(speed: u8) -> Duration {
        let reduction = Self::SPEED_FACTOR * u64::from(clamp_speed(speed));
        let delay = Duration::from_millis(Self::BASE_DELAY_MS.saturating_sub(reduction));
        delay.max(MIN_FRAME_DELAY)
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Solid colour slowly rotating through the hue circle
    StaticColor(StaticColorEffect),
    /// Hue spread evenly over the strip, rolling forward
    RainbowChase(RainbowChaseEffect),
    /// Random flicker over an orange-red band
    Fire(FireEffect),
    /// Single colour pulsing between 10% and 90% intensity
    Breathe(BreatheEffect),
    /// Every third pixel lit, marching along the strip
    TheaterChase(TheaterChaseEffect),
    /// Fixed pastel colour
    Twinkle(TwinkleEffect),
}

/// Known effect ids, in auto-cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EffectId {
    StaticColor = EFFECT_ID_STATIC_COLOR,
    RainbowChase = EFFECT_ID_RAINBOW_CHASE,
    Fire = EFFECT_ID_FIRE,
    Breathe = EFFECT_ID_BREATHE,
    TheaterChase = EFFECT_ID_THEATER_CHASE,
    Twinkle = EFFECT_ID_TWINKLE,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::RainbowChase(RainbowChaseEffect::default())
    }
}

impl EffectId {
    /// Every effect in auto-cycle order
    pub const ALL: [Self; 6] = [
        Self::StaticColor,
        Self::RainbowChase,
        Self::Fire,
        Self::Breathe,
        Self::TheaterChase,
        Self::Twinkle,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_STATIC_COLOR => Self::StaticColor,
            EFFECT_ID_RAINBOW_CHASE => Self::RainbowChase,
            EFFECT_ID_FIRE => Self::Fire,
            EFFECT_ID_BREATHE => Self::Breathe,
            EFFECT_ID_THEATER_CHASE => Self::TheaterChase,
            EFFECT_ID_TWINKLE => Self::Twinkle,
            _ => return None,
        })
    }

    /// Next effect in the cycle, wrapping from the last to the first
    pub const fn next(self) -> Self {
        match self {
            Self::StaticColor => Self::RainbowChase,
            Self::RainbowChase => Self::Fire,
            Self::Fire => Self::Breathe,
            Self::Breathe => Self::TheaterChase,
            Self::TheaterChase => Self::Twinkle,
            Self::Twinkle => Self::StaticColor,
        }
    }

    /// Build a fresh slot for this effect.
    ///
    /// `seed` only affects the fire; fire and twinkle ignore the palette.
    pub fn to_slot(self, palette: Palette, seed: u64) -> EffectSlot {
        match self {
            Self::StaticColor => EffectSlot::StaticColor(StaticColorEffect::new(palette)),
            Self::RainbowChase => EffectSlot::RainbowChase(RainbowChaseEffect::new(palette)),
            Self::Fire => EffectSlot::Fire(FireEffect::with_seed(seed)),
            Self::Breathe => EffectSlot::Breathe(BreatheEffect::new(palette)),
            Self::TheaterChase => EffectSlot::TheaterChase(TheaterChaseEffect::new(palette)),
            Self::Twinkle => EffectSlot::Twinkle(TwinkleEffect::default()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StaticColor => EFFECT_NAME_STATIC_COLOR,
            Self::RainbowChase => EFFECT_NAME_RAINBOW_CHASE,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::Breathe => EFFECT_NAME_BREATHE,
            Self::TheaterChase => EFFECT_NAME_THEATER_CHASE,
            Self::Twinkle => EFFECT_NAME_TWINKLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_STATIC_COLOR => Some(Self::StaticColor),
            EFFECT_NAME_RAINBOW_CHASE => Some(Self::RainbowChase),
            EFFECT_NAME_FIRE => Some(Self::Fire),
            EFFECT_NAME_BREATHE => Some(Self::Breathe),
            EFFECT_NAME_THEATER_CHASE => Some(Self::TheaterChase),
            EFFECT_NAME_TWINKLE => Some(Self::Twinkle),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Render one frame of the current effect
    pub fn render<const N: usize, const LEN: usize>(
        &mut self,
        knobs: &Knobs,
        frame: &mut FrameBuffer<'_, N, LEN>,
    ) {
        match self {
            Self::StaticColor(effect) => effect.render(knobs, frame),
            Self::RainbowChase(effect) => effect.render(knobs, frame),
            Self::Fire(effect) => effect.render(knobs, frame),
            Self::Breathe(effect) => effect.render(knobs, frame),
            Self::TheaterChase(effect) => effect.render(knobs, frame),
            Self::Twinkle(effect) => effect.render(knobs, frame),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::StaticColor(effect) => Effect::reset(effect),
            Self::RainbowChase(effect) => Effect::reset(effect),
            Self::Fire(effect) => Effect::reset(effect),
            Self::Breathe(effect) => Effect::reset(effect),
            Self::TheaterChase(effect) => Effect::reset(effect),
            Self::Twinkle(effect) => Effect::reset(effect),
        }
    }

    /// Delay to wait after the frame just rendered
    pub fn frame_delay(&self, speed: u8) -> Duration {
        match self {
            Self::StaticColor(_) => StaticColorEffect::frame_delay(speed),
            Self::RainbowChase(_) => RainbowChaseEffect::frame_delay(speed),
            Self::Fire(_) => FireEffect::frame_delay(speed),
            Self::Breathe(_) => BreatheEffect::frame_delay(speed),
            Self::TheaterChase(_) => TheaterChaseEffect::frame_delay(speed),
            Self::Twinkle(_) => TwinkleEffect::frame_delay(speed),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::StaticColor(_) => EffectId::StaticColor,
            Self::RainbowChase(_) => EffectId::RainbowChase,
            Self::Fire(_) => EffectId::Fire,
            Self::Breathe(_) => EffectId::Breathe,
            Self::TheaterChase(_) => EffectId::TheaterChase,
            Self::Twinkle(_) => EffectId::Twinkle,
        }
    }

    /// Apply new colour settings without resetting the effect phase
    pub fn set_palette(&mut self, palette: Palette) {
        match self {
            Self::StaticColor(effect) => effect.set_palette(palette),
            Self::RainbowChase(effect) => effect.set_palette(palette),
            Self::Breathe(effect) => effect.set_palette(palette),
            Self::TheaterChase(effect) => effect.set_palette(palette),
            Self::Fire(_) | Self::Twinkle(_) => {}
        }
    }
}
