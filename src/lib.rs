#![no_std]

pub mod color;
pub mod command;
pub mod effect;
pub mod engine;
pub mod frame;
pub mod frame_scheduler;
pub mod latch;
pub mod math8;
pub mod pulse;

pub use command::{Command, CommandChannel, CommandReceiver, CommandSender};
pub use effect::{Effect, EffectId, EffectSlot, Knobs, Palette, RainbowStyle};
pub use engine::{EffectEngine, EngineConfig, FrameOutcome, TickResult};
pub use frame::{CommitError, FrameBuffer};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use latch::TransmitLatch;
pub use pulse::{PulseTiming, pulse_buffer_len};

pub use color::{Color, ColorSpace, Hsl, Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Hardware that shifts a pulse buffer out over the data line
///
/// Implement this trait on top of a timer PWM channel fed by DMA (or any
/// peripheral that can emit one compare value per bit period). The call must
/// return immediately; completion is reported by calling
/// [`TransmitLatch::complete`] from the transfer-complete interrupt.
///
/// `pulses` is always the buffer borrowed by [`FrameBuffer`]. Its address is
/// fixed for the frame's lifetime and nothing writes to it until the latch
/// is released, so a transport may keep reading from `pulses.as_ptr()` after
/// this call returns, as long as the buffer outlives the transfer (a
/// `&'static mut` buffer always does).
pub trait Transport {
    /// Begin an asynchronous transmission of `pulses`
    fn start_transmit(&mut self, pulses: &[u16]);

    /// Halt the output so the buffer is not repeated. Must be idempotent.
    fn stop(&mut self) {}
}
