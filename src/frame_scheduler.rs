//! Frame pacing for the effect engine.
//!
//! Each effect picks its own frame delay from the speed knob; the scheduler
//! turns those delays into absolute deadlines. Sleeping until the deadline is
//! left to the caller.

use embassy_time::{Duration, Instant};

use crate::Transport;
use crate::command::CommandReceiver;
use crate::engine::{EffectEngine, FrameOutcome};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether the frame went out or was deferred.
    pub outcome: FrameOutcome,
}

/// Portable frame scheduler that drives the effect engine.
///
/// This scheduler:
/// - Drains pending commands into the engine
/// - Runs one engine tick against the transport
/// - Tracks the next deadline from the effect's own frame delay, with drift
///   correction
///
/// # Usage
///
/// ```ignore
/// const LEN: usize = pulse_buffer_len(8);
/// static LATCH: TransmitLatch = TransmitLatch::new();
/// static COMMANDS: CommandChannel<4> = CommandChannel::new();
/// static PULSES: ConstStaticCell<[u16; LEN]> = ConstStaticCell::new([0; LEN]);
///
/// let engine = EffectEngine::<8, LEN>::new(&LATCH, PULSES.take(), &EngineConfig::default());
/// let mut scheduler = FrameScheduler::new(engine, transport, COMMANDS.receiver());
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::at(result.next_deadline).await;
/// }
/// ```
pub struct FrameScheduler<
    'a,
    T: Transport,
    const N: usize,
    const LEN: usize,
    const COMMAND_QUEUE_SIZE: usize,
> {
    transport: T,
    engine: EffectEngine<'a, N, LEN>,
    commands: CommandReceiver<'a, COMMAND_QUEUE_SIZE>,
    next_frame: Instant,
}

impl<'a, T: Transport, const N: usize, const LEN: usize, const COMMAND_QUEUE_SIZE: usize>
    FrameScheduler<'a, T, N, LEN, COMMAND_QUEUE_SIZE>
{
    /// Create a new frame scheduler.
    pub fn new(
        engine: EffectEngine<'a, N, LEN>,
        transport: T,
        commands: CommandReceiver<'a, COMMAND_QUEUE_SIZE>,
    ) -> Self {
        Self {
            transport,
            engine,
            commands,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies every queued command
    /// 2. Runs one engine tick
    /// 3. Resets the schedule if we've fallen more than two frames behind
    /// 4. Returns the deadline for the next frame
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        while let Ok(command) = self.commands.try_receive() {
            self.engine.apply(command);
        }

        let result = self.engine.tick(now, &mut self.transport);

        // Drift correction: skip the backlog instead of bursting to catch up
        let max_drift = result.delay * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }
        self.next_frame += result.delay;

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: self.next_frame.saturating_duration_since(now),
            outcome: result.outcome,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &EffectEngine<'a, N, LEN> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut EffectEngine<'a, N, LEN> {
        &mut self.engine
    }

    /// Get a mutable reference to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
