//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per frame)
//! - Heights come from an injected `HeightSource`
//! - Fences are processed oldest first
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod horse;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use autopilot::{Autopilot, JumpPlan, plan_jump};
pub use collision::{check_collision, first_hit, horse_hits};
pub use horse::{Horse, launch_velocity};
pub use obstacle::{HeightBand, HeightSource, Obstacle, ObstacleStream, ScriptedHeights, SeededHeights};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
