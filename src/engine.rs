use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use fastrand::Rng;

use crate::Transport;
use crate::color::{Color, ColorSpace};
use crate::command::Command;
use crate::effect::{
    DEFAULT_BRIGHTNESS, DEFAULT_SPEED, EffectId, EffectSlot, Knobs, Palette, RainbowStyle,
};
use crate::frame::{CommitError, FrameBuffer};
use crate::latch::TransmitLatch;
use crate::pulse::PulseTiming;

/// Time spent on each effect while auto-cycling
pub const DEFAULT_CYCLE_DURATION: Duration = Duration::from_millis(5_000);

/// Delay before retrying a frame that could not be committed
pub const BUSY_RETRY_DELAY: Duration = Duration::from_millis(1);

const DEFAULT_SEED: u64 = 0x0ddc_0ffe;

/// Configuration for the effect engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub effect: EffectId,
    pub auto_cycle: bool,
    pub cycle_duration: Duration,
    pub brightness: u8,
    pub speed: u8,
    pub palette: Palette,
    /// Seed for the fire effect's random generator
    pub seed: u64,
    pub timing: PulseTiming,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            effect: EffectId::RainbowChase,
            auto_cycle: true,
            cycle_duration: DEFAULT_CYCLE_DURATION,
            brightness: DEFAULT_BRIGHTNESS,
            speed: DEFAULT_SPEED,
            palette: Palette::DEFAULT,
            seed: DEFAULT_SEED,
            timing: PulseTiming::WS2812B,
        }
    }
}

/// What happened to the frame of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameOutcome {
    /// Frame rendered and handed to the transport
    Committed,
    /// Previous transmission still in flight; nothing rendered
    Deferred,
}

/// Result of one engine tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickResult {
    /// Effect active after the tick
    pub effect: EffectId,
    pub outcome: FrameOutcome,
    /// How long to wait before the next tick
    pub delay: Duration,
}

/// Effect engine - advances the active effect one frame per tick
pub struct EffectEngine<'a, const N: usize, const LEN: usize> {
    frame: FrameBuffer<'a, N, LEN>,
    knobs: Knobs,

    current: EffectSlot,
    palette: Palette,
    auto_cycle: bool,
    cycle_duration: Duration,
    /// Start of the current auto-cycle window, set on the first tick
    last_transition: Option<Instant>,
    rng: Rng,
}

impl<'a, const N: usize, const LEN: usize> EffectEngine<'a, N, LEN> {
    /// Create an engine drawing into `pulses`
    pub fn new(
        latch: &'a TransmitLatch,
        pulses: &'a mut [u16; LEN],
        config: &EngineConfig,
    ) -> Self {
        let mut rng = Rng::with_seed(config.seed);
        let current = config.effect.to_slot(config.palette, rng.u64(..));
        Self {
            frame: FrameBuffer::with_timing(latch, pulses, config.timing),
            knobs: Knobs::new(config.brightness, config.speed),
            current,
            palette: config.palette,
            auto_cycle: config.auto_cycle,
            cycle_duration: config.cycle_duration,
            last_transition: None,
            rng,
        }
    }

    /// Run one animation step.
    ///
    /// Advances the auto-cycle if its window has elapsed, renders the active
    /// effect and commits the frame. If a transmission is still in flight the
    /// whole tick is skipped, so no effect phase is lost.
    pub fn tick<T: Transport>(&mut self, now: Instant, transport: &mut T) -> TickResult {
        if self.frame.is_in_flight() {
            return self.deferred();
        }

        self.advance_cycle(now);
        self.current.render(&self.knobs, &mut self.frame);

        match self.frame.commit(transport) {
            Ok(()) => TickResult {
                effect: self.current.id(),
                outcome: FrameOutcome::Committed,
                delay: self.current.frame_delay(self.knobs.speed()),
            },
            Err(CommitError::Busy) => self.deferred(),
        }
    }

    /// Switch to an effect immediately and stop auto-cycling
    pub fn set_effect(&mut self, effect: EffectId) {
        #[cfg(feature = "esp32-log")]
        println!("[EffectEngine.set_effect] switching to {}", effect.as_str());
        self.auto_cycle = false;
        self.switch_to(effect);
    }

    /// Apply a configuration command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetBrightness(brightness) => self.set_brightness(brightness),
            Command::SetSpeed(speed) => self.set_speed(speed),
            Command::SetEffect(effect) => self.set_effect(effect),
            Command::SetAutoCycle(enabled) => self.set_auto_cycle(enabled),
            Command::SetCycleDuration(duration) => self.cycle_duration = duration,
            Command::SetColorSpace(color_space) => self.set_color_space(color_space),
            Command::SetBaseColor(color) => self.set_base_color(color),
            Command::SetRainbowStyle(style) => self.set_rainbow_style(style),
        }
    }

    /// Set the global brightness, clamped to 0-100%
    pub fn set_brightness(&mut self, brightness: u8) {
        self.knobs.set_brightness(brightness);
    }

    /// Set the global speed, clamped to 1-100
    pub fn set_speed(&mut self, speed: u8) {
        self.knobs.set_speed(speed);
    }

    /// Enable or disable auto-cycling. Enabling starts a fresh window.
    pub fn set_auto_cycle(&mut self, enabled: bool) {
        if enabled && !self.auto_cycle {
            self.last_transition = None;
        }
        self.auto_cycle = enabled;
    }

    pub fn set_color_space(&mut self, color_space: ColorSpace) {
        self.set_palette(Palette {
            color_space,
            ..self.palette
        });
    }

    /// Show a fixed colour instead of the rotating hue, or go back to the
    /// rotating hue with `None`
    pub fn set_base_color(&mut self, base_color: Option<Color>) {
        self.set_palette(Palette {
            base_color,
            ..self.palette
        });
    }

    pub fn set_rainbow_style(&mut self, rainbow_style: RainbowStyle) {
        self.set_palette(Palette {
            rainbow_style,
            ..self.palette
        });
    }

    /// Replace the colour settings. The running effect keeps its phase.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.current.set_palette(palette);
    }

    pub fn effect(&self) -> EffectId {
        self.current.id()
    }

    /// The running effect and its phase
    pub const fn slot(&self) -> &EffectSlot {
        &self.current
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    pub const fn knobs(&self) -> &Knobs {
        &self.knobs
    }

    pub const fn is_auto_cycle(&self) -> bool {
        self.auto_cycle
    }

    pub const fn cycle_duration(&self) -> Duration {
        self.cycle_duration
    }

    pub const fn frame(&self) -> &FrameBuffer<'a, N, LEN> {
        &self.frame
    }

    /// Direct access to the frame, for drawing outside the effect loop
    pub fn frame_mut(&mut self) -> &mut FrameBuffer<'a, N, LEN> {
        &mut self.frame
    }

    /// Move to the next effect once the current window has elapsed.
    ///
    /// Windows are laid end to end so ticks do not accumulate drift. After a
    /// stall longer than a whole window the schedule restarts from `now`.
    fn advance_cycle(&mut self, now: Instant) {
        let start = *self.last_transition.get_or_insert(now);
        if !self.auto_cycle || now.saturating_duration_since(start) <= self.cycle_duration {
            return;
        }

        let next_start = start + self.cycle_duration;
        self.last_transition = if now.saturating_duration_since(next_start) > self.cycle_duration {
            Some(now)
        } else {
            Some(next_start)
        };

        let next = self.current.id().next();
        #[cfg(feature = "esp32-log")]
        println!("[EffectEngine.advance_cycle] auto-cycling to {}", next.as_str());
        self.switch_to(next);
    }

    fn switch_to(&mut self, effect: EffectId) {
        self.current = effect.to_slot(self.palette, self.rng.u64(..));
        self.frame.clear();
    }

    fn deferred(&self) -> TickResult {
        #[cfg(feature = "esp32-log")]
        println!("[EffectEngine.tick] frame deferred");
        TickResult {
            effect: self.current.id(),
            outcome: FrameOutcome::Deferred,
            delay: BUSY_RETRY_DELAY,
        }
    }
}
