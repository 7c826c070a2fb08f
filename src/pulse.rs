//! One-wire pulse-width encoding
//!
//! Every bit on the wire is one timer period. The compare value (pulse code)
//! sets how long the line stays high inside that period: a long pulse is a
//! `1`, a short pulse is a `0`. Pixels go out as 24-bit GRB words, most
//! significant bit first, followed by a run of zero codes that holds the line
//! low long enough for the strip to latch.

use crate::color::Rgb;

/// Pulse codes per pixel
pub const BITS_PER_PIXEL: usize = 24;

/// Zero codes appended after the last pixel (62.5 µs at 800 kHz)
pub const DEFAULT_RESET_CODES: usize = 50;

/// Shortest reset run that still exceeds the 50 µs latch threshold
pub const MIN_RESET_CODES: usize = 40;

/// Code that keeps the line low for a whole bit period
pub const RESET_CODE: u16 = 0;

/// Nominal WS2812B bit rate (1.25 µs per bit)
pub const BIT_RATE_HZ: u32 = 800_000;

/// Timer period of a 72 MHz timer clock at [`BIT_RATE_HZ`]
pub const DEFAULT_PERIOD_TICKS: u16 = 90;

/// High time of a `1` bit, ~900 ns of 1.25 µs
const HIGH_DUTY_PERCENT: u32 = 64;

/// High time of a `0` bit, ~350 ns of 1.25 µs
const LOW_DUTY_PERCENT: u32 = 32;

/// Length of a pulse buffer for `pixels` LEDs with the default reset run
pub const fn pulse_buffer_len(pixels: usize) -> usize {
    pixels * BITS_PER_PIXEL + DEFAULT_RESET_CODES
}

/// Compare values for the two bit symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTiming {
    /// Timer ticks in one bit period
    pub period: u16,
    /// Code emitted for a `1` bit
    pub high: u16,
    /// Code emitted for a `0` bit
    pub low: u16,
}

impl PulseTiming {
    /// Timing of the reference 72 MHz timer: high = 58, low = 29
    pub const WS2812B: Self = Self::from_period(DEFAULT_PERIOD_TICKS);

    /// Derive both codes from the timer period, rounded to the nearest tick
    pub const fn from_period(period: u16) -> Self {
        Self {
            period,
            high: duty(period, HIGH_DUTY_PERCENT),
            low: duty(period, LOW_DUTY_PERCENT),
        }
    }

    /// Derive the timing from the timer input clock
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_timer_clock(clock_hz: u32) -> Self {
        let period = clock_hz / BIT_RATE_HZ;
        let period = if period > u16::MAX as u32 {
            u16::MAX
        } else {
            period as u16
        };
        Self::from_period(period)
    }

    /// Code for a single bit
    #[inline]
    pub const fn code(self, bit: bool) -> u16 {
        if bit { self.high } else { self.low }
    }
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self::WS2812B
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn duty(period: u16, percent: u32) -> u16 {
    ((period as u32 * percent + 50) / 100) as u16
}

/// Pack a colour into the wire word `(G << 16) | (R << 8) | B`
#[inline]
pub const fn grb_word(color: Rgb) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32
}

/// Encode one pixel into the first 24 entries of `out`, MSB first
pub fn encode_pixel(color: Rgb, timing: PulseTiming, out: &mut [u16]) {
    let word = grb_word(color);
    for (bit, code) in out.iter_mut().take(BITS_PER_PIXEL).enumerate() {
        let mask = 1 << (BITS_PER_PIXEL - 1 - bit);
        *code = timing.code(word & mask != 0);
    }
}

/// Encode a whole frame.
///
/// Overwrites the pixel region and zeroes everything after it, so stale codes
/// from an earlier, longer frame never leak into the reset run.
pub fn encode_frame(pixels: &[Rgb], timing: PulseTiming, out: &mut [u16]) {
    for (color, chunk) in pixels.iter().zip(out.chunks_mut(BITS_PER_PIXEL)) {
        encode_pixel(*color, timing, chunk);
    }
    clear_reset_region(pixels.len(), out);
}

/// Zero every code after the first `pixels` pixels
pub fn clear_reset_region(pixels: usize, out: &mut [u16]) {
    for code in out.iter_mut().skip(pixels * BITS_PER_PIXEL) {
        *code = RESET_CODE;
    }
}

/// Recover the GRB word from 24 pulse codes
///
/// Returns `None` if there are fewer than 24 codes or any code is neither the
/// high nor the low code.
pub fn decode_pixel(codes: &[u16], timing: PulseTiming) -> Option<u32> {
    if codes.len() < BITS_PER_PIXEL {
        return None;
    }
    codes
        .iter()
        .take(BITS_PER_PIXEL)
        .try_fold(0u32, |word, &code| {
            let bit = match code {
                c if c == timing.high => 1,
                c if c == timing.low => 0,
                _ => return None,
            };
            Some((word << 1) | bit)
        })
}
