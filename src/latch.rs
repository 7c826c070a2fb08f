//! In-flight flag shared with the transmission-complete interrupt.
//!
//! Built on `critical-section`, so it works on cores without atomic
//! compare-and-swap.

use core::cell::Cell;

use critical_section::Mutex;

use crate::Transport;

/// Marks the pulse buffer as owned by the transport.
///
/// [`FrameBuffer`](crate::frame::FrameBuffer) acquires the latch when it
/// starts a transmission. The completion handler releases it. While it is
/// held, the pulse buffer is never written.
///
/// ```ignore
/// static LATCH: TransmitLatch = TransmitLatch::new();
///
/// #[interrupt]
/// fn DMA1_CHANNEL6() {
///     LATCH.complete(&mut transport);
/// }
/// ```
pub struct TransmitLatch {
    in_flight: Mutex<Cell<bool>>,
}

impl TransmitLatch {
    /// Create a released latch.
    pub const fn new() -> Self {
        Self {
            in_flight: Mutex::new(Cell::new(false)),
        }
    }

    /// Take the latch if nothing is in flight.
    ///
    /// Returns `false` if a transmission is still running.
    pub fn try_acquire(&self) -> bool {
        critical_section::with(|cs| {
            let in_flight = self.in_flight.borrow(cs);
            if in_flight.get() {
                return false;
            }
            in_flight.set(true);
            true
        })
    }

    /// Release the latch. Idempotent.
    pub fn release(&self) {
        critical_section::with(|cs| self.in_flight.borrow(cs).set(false));
    }

    /// Completion handler: halt the transport so it does not repeat the
    /// buffer, then release the latch.
    pub fn complete<T: Transport>(&self, transport: &mut T) {
        transport.stop();
        self.release();
    }

    /// Check whether a transmission is in flight
    pub fn is_busy(&self) -> bool {
        critical_section::with(|cs| self.in_flight.borrow(cs).get())
    }
}

impl Default for TransmitLatch {
    fn default() -> Self {
        Self::new()
    }
}
