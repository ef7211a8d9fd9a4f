//! Demo mode: plays the game by itself
//!
//! Starts and retries on its own. For the nearest fence ahead it picks the
//! smallest charge whose clearance window covers the fence at the current
//! speed, then times the press so the window is centred on the fence.

use super::horse::{Horse, launch_velocity};
use super::obstacle::Obstacle;
use super::state::{GamePhase, GameState};
use super::tick::TickInput;
use crate::consts::*;

/// Extra clearance kept above the fence top
const CLEARANCE_MARGIN: f32 = 1.0;

/// A planned jump for one fence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpPlan {
    /// Charge ticks to hold before releasing
    pub charge: u32,
    /// First tick after launch with the horse above the fence
    pub clear_from: u32,
    /// Last tick after launch with the horse above the fence
    pub clear_until: u32,
}

impl JumpPlan {
    /// Ticks from the press until the middle of the clearance window
    pub fn lead_ticks(&self) -> u32 {
        // press tick, `charge - 1` held ticks, then the release tick
        self.charge + 1 + (self.clear_from + self.clear_until) / 2
    }
}

/// Window of ticks after launch during which a horse launched with `charge`
/// stays above a fence of `height`. None if it never clears.
pub fn clearance_window(charge: u32, height: u32) -> Option<(u32, u32)> {
    let ceiling = Obstacle::new(0, height).top() - CLEARANCE_MARGIN;
    let mut horse = Horse {
        vy: launch_velocity(charge),
        airborne: true,
        ..Horse::new()
    };

    let mut window: Option<(u32, u32)> = None;
    let mut n = 0;
    while horse.airborne {
        n += 1;
        horse.update(&TickInput::default());
        if horse.bottom() <= ceiling {
            window = Some(match window {
                Some((from, _)) => (from, n),
                None => (n, n),
            });
        }
    }
    window
}

/// Smallest charge that keeps the horse above `height` long enough for a
/// fence to pass underneath at `speed`.
pub fn plan_jump(height: u32, speed: i32) -> Option<JumpPlan> {
    let speed = speed.max(1) as u32;
    // Ticks the fence spends overlapping the horse horizontally, plus slack
    let needed = (HORSE_WIDTH as u32 + FENCE_WIDTH as u32).div_ceil(speed) + 2;

    (1..=MAX_CHARGE_TICKS).find_map(|charge| {
        let (clear_from, clear_until) = clearance_window(charge, height)?;
        (clear_until - clear_from >= needed).then_some(JumpPlan {
            charge,
            clear_from,
            clear_until,
        })
    })
}

/// Produces button input from the game state
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    down: bool,
    hold_ticks_left: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for the next tick of `state`
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        if self.down {
            if self.hold_ticks_left > 0 {
                self.hold_ticks_left -= 1;
                return TickInput {
                    held: true,
                    ..Default::default()
                };
            }
            self.down = false;
            return TickInput {
                released: true,
                ..Default::default()
            };
        }

        match state.phase {
            GamePhase::Ready | GamePhase::GameOver => self.press(0),
            GamePhase::Playing => match self.plan_for(state) {
                Some(plan) => self.press(plan.charge - 1),
                None => TickInput::default(),
            },
        }
    }

    fn press(&mut self, hold_ticks: u32) -> TickInput {
        self.down = true;
        self.hold_ticks_left = hold_ticks;
        TickInput {
            pressed: true,
            held: true,
            released: false,
        }
    }

    /// Plan to use if it is time to press now
    fn plan_for(&self, state: &GameState) -> Option<JumpPlan> {
        let horse = &state.horse;
        if horse.airborne || horse.charging || !horse.on_ground() {
            return None;
        }

        let fence = state
            .obstacles
            .iter()
            .find(|o| (o.x + o.width) as f32 > horse.x)?;
        let plan = plan_jump(fence.height, state.game_speed)?;

        // Fence x when it is centred over the horse
        let centred_x = horse.x + (horse.width - fence.width as f32) / 2.0;
        let ticks_to_centre = (fence.x as f32 - centred_x) / state.game_speed.max(1) as f32;
        (ticks_to_centre <= plan.lead_ticks() as f32).then_some(plan)
    }
}
