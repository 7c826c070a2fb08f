//! Integer-only colour space conversion
//!
//! Both conversions are total: hue wraps modulo 360 and percentages clamp to
//! 100, so every input produces a colour.

use crate::{
    color::{Hsl, Hsv, Rgb},
    math8::{clamp_percent, percent_to_u8, wrap_hue},
};

/// Wheel positions (0-255 circle) of the HSL channel segments
const WHEEL_RISE_END: i32 = 43;
const WHEEL_PLATEAU_END: i32 = 128;
const WHEEL_FALL_END: i32 = 171;

/// Offsets of red and blue from green on the 0-255 wheel (+120°, +240°)
const WHEEL_RED_OFFSET: u8 = 85;
const WHEEL_BLUE_OFFSET: u8 = 171;

/// Convert HSV to RGB using the six-sector hexagonal cone.
///
/// The rising component of each sector is `t = V·f/255`, which keeps output
/// identical to the firmware this library drives.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv2rgb(color: Hsv) -> Rgb {
    let hue = wrap_hue(color.hue);
    let sat = clamp_percent(color.sat);
    let v = u16::from(percent_to_u8(color.val));

    if sat == 0 {
        let grey = v as u8;
        return Rgb::new(grey, grey, grey);
    }

    let s = u16::from(percent_to_u8(sat));
    let sector = hue / 60;
    let f = ((hue % 60) * 255) / 60;

    let p = (v * (255 - s)) / 255;
    let q = (v * (255 - f)) / 255;
    let t = (v * f) / 255;

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(r as u8, g as u8, b as u8)
}

/// Convert HSL to RGB.
///
/// Hue is mapped onto a 0-255 wheel and each channel is read from
/// [`hue_to_channel`] at its own wheel offset.
#[allow(clippy::cast_possible_truncation)]
pub fn hsl2rgb(color: Hsl) -> Rgb {
    let hue = wrap_hue(color.hue);
    let sat = clamp_percent(color.sat);
    let light = clamp_percent(color.light);

    if sat == 0 {
        let grey = percent_to_u8(light);
        return Rgb::new(grey, grey, grey);
    }

    let wheel_hue = ((u32::from(hue) * 255) / 360) as u8;
    let l = u32::from(percent_to_u8(light));
    let s = u32::from(percent_to_u8(sat));

    let (p, q) = if light < 50 {
        let q = (l * (255 + s)) / 255;
        let p = (2 * l * (255 - s)) / 255;
        (p, q)
    } else {
        let q = ((l + s) * 255 - l * s) / 255;
        let p = if 2 * l > 255 { 2 * l - q } else { 0 };
        (p, q)
    };
    let (p, q) = (p as u8, q as u8);

    Rgb::new(
        hue_to_channel(p, q, wheel_hue.wrapping_add(WHEEL_RED_OFFSET)),
        hue_to_channel(p, q, wheel_hue),
        hue_to_channel(p, q, wheel_hue.wrapping_add(WHEEL_BLUE_OFFSET)),
    )
}

/// Read one channel from the four-segment HSL wheel.
///
/// Rises from `p` to `q` below 43, holds `q` until 128, falls back to `p`
/// until 171 and holds `p` for the rest of the wheel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hue_to_channel(p: u8, q: u8, t: u8) -> u8 {
    let (p, q, t) = (i32::from(p), i32::from(q), i32::from(t));
    let value = if t < WHEEL_RISE_END {
        p + ((q - p) * t) / WHEEL_RISE_END
    } else if t < WHEEL_PLATEAU_END {
        q
    } else if t < WHEEL_FALL_END {
        p + ((q - p) * (WHEEL_FALL_END - t)) / WHEEL_RISE_END
    } else {
        p
    };
    value as u8
}

/// Classic RGB colour wheel over a 0-255 position
///
/// Red fades into blue, blue into green, green back into red.
pub const fn wheel(position: u8) -> Rgb {
    if position < 85 {
        let step = position * 3;
        Rgb {
            r: 255 - step,
            g: 0,
            b: step,
        }
    } else if position < 170 {
        let step = (position - 85) * 3;
        Rgb {
            r: 0,
            g: step,
            b: 255 - step,
        }
    } else {
        let step = (position - 170) * 3;
        Rgb {
            r: step,
            g: 255 - step,
            b: 0,
        }
    }
}

/// Six-segment RGB ramp over the hue circle
///
/// Each 60° segment moves one channel linearly between 0 and 255 while the
/// other two stay pinned, so every output has one channel at 255.
#[allow(clippy::cast_possible_truncation)]
pub fn hue_ramp(hue: u16) -> Rgb {
    let hue = u32::from(wrap_hue(hue));
    let step = |start: u32| ((hue - start) * 255 / 60) as u8;
    match hue {
        0..60 => Rgb::new(255, step(0), 0),
        60..120 => Rgb::new(255 - step(60), 255, 0),
        120..180 => Rgb::new(0, 255, step(120)),
        180..240 => Rgb::new(0, 255 - step(180), 255),
        240..300 => Rgb::new(step(240), 0, 255),
        _ => Rgb::new(255, 0, 255 - step(300)),
    }
}
