//! Configuration commands from other tasks and interrupts
//!
//! The engine runs on one cooperative loop. Anything else that wants to
//! change brightness, speed or the active effect sends a [`Command`] through
//! a [`CommandChannel`]; the loop drains it before each frame, which
//! serializes every write to the shared knobs.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::Duration;

use crate::color::{Color, ColorSpace};
use crate::effect::{EffectId, RainbowStyle};

/// Changes that can be requested from the effect engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set global brightness (0-100%, clamped)
    SetBrightness(u8),
    /// Set global speed (1-100, clamped)
    SetSpeed(u8),
    /// Switch effect immediately and disable auto-cycling
    SetEffect(EffectId),
    /// Enable or disable auto-cycling
    SetAutoCycle(bool),
    /// Change how long each effect runs while auto-cycling
    SetCycleDuration(Duration),
    /// Change the colour space of the palette-aware effects
    SetColorSpace(ColorSpace),
    /// Fix the colour of the static, breathe and theater chase effects
    /// (`None` restores the rotating hue)
    SetBaseColor(Option<Color>),
    /// Change the rainbow layout
    SetRainbowStyle(RainbowStyle),
}

/// Type alias for command sender
pub type CommandSender<'a, const SIZE: usize> =
    Sender<'a, CriticalSectionRawMutex, Command, SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a, const SIZE: usize> =
    Receiver<'a, CriticalSectionRawMutex, Command, SIZE>;

/// Type alias for the command channel
pub type CommandChannel<const SIZE: usize> = Channel<CriticalSectionRawMutex, Command, SIZE>;
