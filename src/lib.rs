//! Horse Jump - a charge-and-release arcade jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (jump physics, fences, collisions, phases)
//! - `game`: Session object exposing the per-frame `update`/`draw` pair
//! - `renderer`: Platform-neutral draw lists for each frame
//! - `audio`: Sound cue descriptions and sinks
//! - `input`: Edge detection for the single action button
//! - `settings`: Player preferences (audio, visuals)

pub mod audio;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 160;
    pub const SCREEN_HEIGHT: i32 = 144;

    /// Standing height of the horse (y grows downward)
    pub const GROUND_Y: f32 = 100.0;
    /// Fences rise from this far below the ground line
    pub const FENCE_BASE_OFFSET: f32 = 16.0;

    /// Horse defaults
    pub const HORSE_X: f32 = 50.0;
    pub const HORSE_WIDTH: f32 = 14.0;
    pub const HORSE_HEIGHT: f32 = 10.0;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Launch velocity with no charge
    pub const JUMP_POWER_BASE: f32 = -8.0;
    /// Launch velocity at full charge
    pub const JUMP_POWER_MAX: f32 = -14.0;
    /// Ticks of holding needed for a full charge
    pub const MAX_CHARGE_TICKS: u32 = 20;

    /// Fence defaults
    pub const FENCE_SPAWN_X: i32 = SCREEN_WIDTH;
    pub const FENCE_WIDTH: i32 = 12;

    /// Ticks between fence spawns
    pub const SPAWN_INTERVAL: u64 = 80;
    /// Ticks between speed increases
    pub const RAMP_INTERVAL: u64 = 300;
    /// Scroll speed at the start of a run (units/tick)
    pub const INITIAL_SPEED: i32 = 3;
}

/// Sine of an angle given in degrees
#[inline]
pub fn sin_deg(degrees: f32) -> f32 {
    degrees.to_radians().sin()
}
