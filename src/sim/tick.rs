//! Fixed timestep simulation tick
//!
//! Advances the game one frame: phase transitions on the action button,
//! then (while playing) horse physics, fence spawning, scrolling, the speed
//! ramp and collision.

use serde::{Deserialize, Serialize};

use super::collision::check_collision;
use super::obstacle::HeightSource;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Action button signals for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Button went down since the previous tick
    pub pressed: bool,
    /// Button is down
    pub held: bool,
    /// Button went up since the previous tick
    pub released: bool,
}

/// Advance the game state by one tick.
///
/// Cue points raised during the tick are appended to `events`.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    heights: &mut impl HeightSource,
    events: &mut Vec<GameEvent>,
) {
    match state.phase {
        GamePhase::Ready => {
            if input.pressed {
                state.start_run();
            }
        }
        GamePhase::Playing => play(state, input, heights, events),
        GamePhase::GameOver => {
            if input.pressed {
                state.return_to_ready();
            }
        }
    }
}

fn play(
    state: &mut GameState,
    input: &TickInput,
    heights: &mut impl HeightSource,
    events: &mut Vec<GameEvent>,
) {
    state.frame_count += 1;

    if state.horse.update(input) {
        events.push(GameEvent::Jump);
    }

    state
        .obstacles
        .maybe_spawn(state.frame_count, state.score, heights);

    for retired in state.obstacles.advance(state.game_speed) {
        state.score += 1;
        log::debug!("Fence cleared (height {}), score {}", retired.height, state.score);
        events.push(GameEvent::Score { score: state.score });
    }

    if state.frame_count.is_multiple_of(RAMP_INTERVAL) {
        state.game_speed += 1;
        log::debug!("Speed up to {} at frame {}", state.game_speed, state.frame_count);
    }

    if check_collision(&state.horse, &state.obstacles) {
        state.end_run();
        events.push(GameEvent::GameOver {
            score: state.score,
            high_score: state.high_score,
        });
    }
}
