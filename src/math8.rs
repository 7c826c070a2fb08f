//! Integer helpers for degree and percentage inputs

/// Full hue circle in degrees
pub const HUE_CIRCLE: u16 = 360;

/// Upper bound of every percentage input
pub const PERCENT_MAX: u8 = 100;

/// Wrap a hue into `[0, 360)`
#[inline]
pub const fn wrap_hue(hue: u16) -> u16 {
    hue % HUE_CIRCLE
}

/// Clamp a percentage to `[0, 100]`
#[inline]
pub const fn clamp_percent(value: u8) -> u8 {
    if value > PERCENT_MAX {
        PERCENT_MAX
    } else {
        value
    }
}

/// Map a percentage onto the 8-bit channel range (`value·255/100`)
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn percent_to_u8(value: u8) -> u8 {
    ((clamp_percent(value) as u16 * 255) / PERCENT_MAX as u16) as u8
}

/// Scale an 8-bit value by a percentage (`value·percent/100`)
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn scale_percent(value: u8, percent: u8) -> u8 {
    ((value as u16 * clamp_percent(percent) as u16) / PERCENT_MAX as u16) as u8
}

/// Advance a hue by `step` degrees, wrapping at 360
#[inline]
pub const fn advance_hue(hue: u16, step: u16) -> u16 {
    wrap_hue(wrap_hue(hue) + wrap_hue(step))
}
