//! Seams to the outside world. The interpreter never does I/O itself; it hands
//! frames to a `Renderer` and asks an `Input` for key states.

use crate::error::Result;
use crate::profile::ColorProfile;
use crate::state::{FrameBuffer, Keypad};

/// Paints a FrameBuffer.
pub trait Renderer {
    /// Fully repaints the display with `frame`, lit pixels in the profile's
    /// foreground color and the rest in its background color.
    fn render(&mut self, frame: &FrameBuffer, profile: &ColorProfile) -> Result<()>;
}

/// What an `Input` saw when polled
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub keypad: Keypad,
    pub quit: bool,
}

/// Reports which keys are held.
pub trait Input {
    /// Returns the current keypad and whether the host asked to quit.
    /// Must not block.
    fn poll(&mut self) -> Result<InputSnapshot>;
}
