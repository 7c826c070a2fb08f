mod convert;

use smart_leds::RGB8;

pub use convert::{hsl2rgb, hsv2rgb, hue_ramp, hue_to_channel, wheel};

use crate::math8::{clamp_percent, scale_percent};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Hue, saturation and value
///
/// Hue is in degrees and wraps at 360. Saturation and value are percentages
/// and are clamped to 100 before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub hue: u16,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    pub const fn new(hue: u16, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv2rgb(self)
    }
}

/// Hue, saturation and lightness
///
/// Same ranges as [`Hsv`], with lightness in place of value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsl {
    pub hue: u16,
    pub sat: u8,
    pub light: u8,
}

impl Hsl {
    pub const fn new(hue: u16, sat: u8, light: u8) -> Self {
        Self { hue, sat, light }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl2rgb(self)
    }
}

/// Colour model used by effects that can render in more than one space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorSpace {
    /// Vivid colours, value follows the global brightness
    #[default]
    Hsv,
    /// Softer colours at a fixed 50% lightness
    Hsl,
    /// Classic three-segment RGB colour wheel
    Rgb,
}

impl ColorSpace {
    /// Fully saturated colour at `hue` in this space.
    ///
    /// HSV uses `value` as its value, HSL a fixed 50% lightness, RGB the
    /// six-segment [`hue_ramp`] at full intensity.
    pub fn from_hue(self, hue: u16, value: u8) -> Color {
        match self {
            Self::Hsv => Color::Hsv(Hsv::new(hue, 100, value)),
            Self::Hsl => Color::Hsl(Hsl::new(hue, 100, 50)),
            Self::Rgb => Color::Rgb(hue_ramp(hue)),
        }
    }
}

/// A colour in any of the supported spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Hsv(Hsv),
    Hsl(Hsl),
    Rgb(Rgb),
}

impl Color {
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Hsv(color) => hsv2rgb(color),
            Self::Hsl(color) => hsl2rgb(color),
            Self::Rgb(color) => color,
        }
    }

    pub const fn space(self) -> ColorSpace {
        match self {
            Self::Hsv(_) => ColorSpace::Hsv,
            Self::Hsl(_) => ColorSpace::Hsl,
            Self::Rgb(_) => ColorSpace::Rgb,
        }
    }

    /// Same colour at `level` percent intensity.
    ///
    /// Replaces the HSV value or the HSL lightness; RGB channels are scaled.
    pub fn with_level(self, level: u8) -> Self {
        let level = clamp_percent(level);
        match self {
            Self::Hsv(color) => Self::Hsv(Hsv::new(color.hue, color.sat, level)),
            Self::Hsl(color) => Self::Hsl(Hsl::new(color.hue, color.sat, level)),
            Self::Rgb(color) => Self::Rgb(Rgb::new(
                scale_percent(color.r, level),
                scale_percent(color.g, level),
                scale_percent(color.b, level),
            )),
        }
    }
}

impl From<Hsv> for Color {
    fn from(color: Hsv) -> Self {
        Self::Hsv(color)
    }
}

impl From<Hsl> for Color {
    fn from(color: Hsl) -> Self {
        Self::Hsl(color)
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Self::Rgb(color)
    }
}
