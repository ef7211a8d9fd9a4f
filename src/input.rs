//! Action button edge detection
//!
//! Hosts report raw button transitions whenever their event loop sees them.
//! Once per tick the latch is sampled into a `TickInput`, so a press and
//! release that both land between two ticks still produce both edges.

use crate::sim::TickInput;

/// Collects button transitions between ticks
#[derive(Debug, Clone, Default)]
pub struct ButtonLatch {
    down: bool,
    pressed: bool,
    released: bool,
}

impl ButtonLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button went down (repeats while already down are ignored)
    pub fn press(&mut self) {
        if !self.down {
            self.down = true;
            self.pressed = true;
        }
    }

    /// Button went up
    pub fn release(&mut self) {
        if self.down {
            self.down = false;
            self.released = true;
        }
    }

    /// Report the current level, generating edges from the previous one
    pub fn set_down(&mut self, down: bool) {
        if down {
            self.press();
        } else {
            self.release();
        }
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Signals for this tick; clears the one-shot edges
    pub fn sample(&mut self) -> TickInput {
        let input = TickInput {
            pressed: self.pressed,
            held: self.down,
            released: self.released,
        };
        self.pressed = false;
        self.released = false;
        input
    }
}
