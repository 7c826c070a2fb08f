#![allow(dead_code)]

use ws2812b_fx::pulse::{BITS_PER_PIXEL, PulseTiming, decode_pixel};
use ws2812b_fx::{TransmitLatch, Transport};

/// Transport double that records every buffer it is asked to send.
///
/// With a latch attached it completes each transmission immediately, like a
/// transfer-complete interrupt firing right away.
pub struct RecordingTransport<'a> {
    latch: Option<&'a TransmitLatch>,
    pub frames: Vec<Vec<u16>>,
    /// Start address of every buffer handed over
    pub addresses: Vec<*const u16>,
    pub stops: usize,
}

impl<'a> RecordingTransport<'a> {
    /// Transport whose transmissions stay in flight until completed by hand
    pub fn new() -> Self {
        Self {
            latch: None,
            frames: Vec::new(),
            addresses: Vec::new(),
            stops: 0,
        }
    }

    /// Transport that completes every transmission on the spot
    pub fn completing(latch: &'a TransmitLatch) -> Self {
        Self {
            latch: Some(latch),
            frames: Vec::new(),
            addresses: Vec::new(),
            stops: 0,
        }
    }

    pub fn last(&self) -> &[u16] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Transport for RecordingTransport<'_> {
    fn start_transmit(&mut self, pulses: &[u16]) {
        self.frames.push(pulses.to_vec());
        self.addresses.push(pulses.as_ptr());
        if let Some(latch) = self.latch {
            latch.release();
        }
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}

/// Decode every pixel of a transmitted buffer back into GRB words
pub fn decode_pixels(pulses: &[u16], pixels: usize) -> Vec<u32> {
    pulses
        .chunks(BITS_PER_PIXEL)
        .take(pixels)
        .map(|chunk| decode_pixel(chunk, PulseTiming::WS2812B).expect("valid pulse codes"))
        .collect()
}
