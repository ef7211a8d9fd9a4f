//! The horse and its charge-to-jump physics
//!
//! Holding the action button charges a jump; releasing it launches the horse
//! with a velocity interpolated between the base and maximum jump power.

use serde::{Deserialize, Serialize};

use super::tick::TickInput;
use crate::consts::*;

/// Launch velocity for a charge of `charge_ticks` (clamped to a full charge).
///
/// More negative means a higher jump, since y grows downward.
pub fn launch_velocity(charge_ticks: u32) -> f32 {
    let ratio = charge_ticks.min(MAX_CHARGE_TICKS) as f32 / MAX_CHARGE_TICKS as f32;
    JUMP_POWER_BASE + (JUMP_POWER_MAX - JUMP_POWER_BASE) * ratio
}

/// The player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Horse {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    /// In the air after a launch, until it lands again
    pub airborne: bool,
    /// Button held on the ground, building up a jump
    pub charging: bool,
    /// Ticks of charge accumulated so far (0..=MAX_CHARGE_TICKS)
    pub charge_ticks: u32,
    pub width: f32,
    pub height: f32,
}

impl Default for Horse {
    fn default() -> Self {
        Self::new()
    }
}

impl Horse {
    pub fn new() -> Self {
        Self {
            x: HORSE_X,
            y: GROUND_Y,
            vy: 0.0,
            airborne: false,
            charging: false,
            charge_ticks: 0,
            width: HORSE_WIDTH,
            height: HORSE_HEIGHT,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.y >= GROUND_Y
    }

    /// Fraction of a full charge currently stored (0.0 - 1.0)
    pub fn charge_ratio(&self) -> f32 {
        self.charge_ticks as f32 / MAX_CHARGE_TICKS as f32
    }

    /// Bottom edge of the bounding box
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Advance one tick. Returns true if the horse launched this tick.
    pub fn update(&mut self, input: &TickInput) -> bool {
        self.vy += GRAVITY;
        self.y += self.vy;

        if self.y >= GROUND_Y {
            self.y = GROUND_Y;
            self.vy = 0.0;
            self.airborne = false;
        }

        if input.pressed && !self.airborne && self.on_ground() {
            self.charging = true;
            self.charge_ticks = 0;
        }

        if input.held && self.charging && !self.airborne {
            self.charge_ticks = (self.charge_ticks + 1).min(MAX_CHARGE_TICKS);
        }

        if input.released && self.charging && !self.airborne {
            self.vy = launch_velocity(self.charge_ticks);
            self.airborne = true;
            self.charging = false;
            self.charge_ticks = 0;
            return true;
        }

        false
    }
}
