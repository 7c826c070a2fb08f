//! Pixel array and its derived pulse buffer.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::Transport;
use crate::color::{BLACK, Hsl, Hsv, Rgb, hsl2rgb, hsv2rgb};
use crate::latch::TransmitLatch;
use crate::pulse::{
    BITS_PER_PIXEL, MIN_RESET_CODES, PulseTiming, clear_reset_region, encode_frame, encode_pixel,
};

/// Error returned by [`FrameBuffer::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommitError {
    /// The previous transmission has not completed yet. The frame is kept
    /// and goes out with the next successful commit.
    Busy,
}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "previous transmission still in flight"),
        }
    }
}

impl core::error::Error for CommitError {}

/// Fixed-size frame for a strip of `N` pixels.
///
/// `LEN` is the pulse buffer length: `24·N` pixel codes followed by the reset
/// run. Use [`pulse_buffer_len`](crate::pulse::pulse_buffer_len) for the
/// default layout.
///
/// The pulse buffer is derived from the pixel array. While a transmission is
/// in flight, setters only touch the pixel array and mark the frame dirty;
/// the first write or commit after the latch is released re-derives the whole
/// pulse buffer.
///
/// The pulse buffer is borrowed, not owned, so its address stays fixed for
/// `'a` however the frame (or the engine holding it) is moved. Hand it a
/// `&'static mut` buffer when the transport is DMA driven.
pub struct FrameBuffer<'a, const N: usize, const LEN: usize> {
    pixels: [Rgb; N],
    pulses: &'a mut [u16; LEN],
    timing: PulseTiming,
    latch: &'a TransmitLatch,
    dirty: bool,
}

impl<'a, const N: usize, const LEN: usize> FrameBuffer<'a, N, LEN> {
    /// Create a black frame with WS2812B timing
    pub fn new(latch: &'a TransmitLatch, pulses: &'a mut [u16; LEN]) -> Self {
        Self::with_timing(latch, pulses, PulseTiming::WS2812B)
    }

    /// Create a black frame with custom pulse timing.
    ///
    /// If the latch is held, the buffer is left alone until it is released.
    pub fn with_timing(
        latch: &'a TransmitLatch,
        pulses: &'a mut [u16; LEN],
        timing: PulseTiming,
    ) -> Self {
        const {
            assert!(
                LEN >= N * BITS_PER_PIXEL + MIN_RESET_CODES,
                "pulse buffer too short for pixels plus reset run"
            );
        };
        let mut frame = Self {
            pixels: [BLACK; N],
            pulses,
            timing,
            latch,
            dirty: true,
        };
        frame.sync();
        frame
    }

    /// Number of pixels on the strip
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Number of trailing reset codes
    pub const fn reset_len(&self) -> usize {
        LEN - N * BITS_PER_PIXEL
    }

    pub const fn timing(&self) -> PulseTiming {
        self.timing
    }

    /// Colour last written to a pixel
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    /// The pulse buffer as last encoded
    pub const fn pulses(&self) -> &[u16; LEN] {
        &*self.pulses
    }

    /// Check whether the pixel array has changes not yet encoded
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Check whether the pulse buffer is currently being shifted out
    pub fn is_in_flight(&self) -> bool {
        self.latch.is_busy()
    }

    /// Set one pixel. Out-of-range indices are ignored.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        let Some(pixel) = self.pixels.get_mut(index) else {
            return;
        };
        *pixel = color;

        if self.latch.is_busy() {
            self.dirty = true;
            return;
        }
        if self.dirty {
            self.sync();
            return;
        }
        let start = index * BITS_PER_PIXEL;
        encode_pixel(
            color,
            self.timing,
            &mut self.pulses[start..start + BITS_PER_PIXEL],
        );
    }

    /// Set every pixel to the same colour
    pub fn set_all(&mut self, color: Rgb) {
        self.pixels.fill(color);

        if self.latch.is_busy() {
            self.dirty = true;
            return;
        }
        for chunk in self.pulses.chunks_mut(BITS_PER_PIXEL).take(N) {
            encode_pixel(color, self.timing, chunk);
        }
        clear_reset_region(N, self.pulses.as_mut_slice());
        self.dirty = false;
    }

    pub fn set_pixel_hsv(&mut self, index: usize, color: Hsv) {
        self.set_pixel(index, hsv2rgb(color));
    }

    pub fn set_pixel_hsl(&mut self, index: usize, color: Hsl) {
        self.set_pixel(index, hsl2rgb(color));
    }

    pub fn set_all_hsv(&mut self, color: Hsv) {
        self.set_all(hsv2rgb(color));
    }

    pub fn set_all_hsl(&mut self, color: Hsl) {
        self.set_all(hsl2rgb(color));
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.set_all(BLACK);
    }

    /// Start transmitting the frame.
    ///
    /// Fails with [`CommitError::Busy`] without touching anything if the
    /// previous transmission is still in flight.
    pub fn commit<T: Transport>(&mut self, transport: &mut T) -> Result<(), CommitError> {
        if !self.latch.try_acquire() {
            #[cfg(feature = "esp32-log")]
            println!("[FrameBuffer.commit] transmission in flight, frame deferred");
            return Err(CommitError::Busy);
        }

        if self.dirty {
            encode_frame(&self.pixels, self.timing, self.pulses.as_mut_slice());
            self.dirty = false;
        }

        transport.start_transmit(self.pulses.as_slice());
        Ok(())
    }

    /// Clear the strip and transmit the black frame
    pub fn off<T: Transport>(&mut self, transport: &mut T) -> Result<(), CommitError> {
        self.clear();
        self.commit(transport)
    }

    /// Re-derive the whole pulse buffer from the pixels if the latch is free
    fn sync(&mut self) {
        if self.latch.is_busy() {
            return;
        }
        encode_frame(&self.pixels, self.timing, self.pulses.as_mut_slice());
        self.dirty = false;
    }
}
