//! Game session: the `update`/`draw` pair a host calls once per frame
//!
//! A `Game` owns its state, its height source and its settings. There are no
//! globals, so several sessions can run side by side (or headless in tests).

use crate::renderer::{Frame, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, HeightSource, SeededHeights, TickInput, tick};

/// One game session
#[derive(Debug, Clone)]
pub struct Game<H = SeededHeights> {
    state: GameState,
    heights: H,
    settings: Settings,
    events: Vec<GameEvent>,
}

impl Game<SeededHeights> {
    /// New session with fence heights drawn from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_heights(SeededHeights::new(seed))
    }
}

impl<H: HeightSource> Game<H> {
    pub fn with_heights(heights: H) -> Self {
        Self {
            state: GameState::new(),
            heights,
            settings: Settings::default(),
            events: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Advance one tick. Returns the cue points raised during it.
    pub fn update(&mut self, input: &TickInput) -> &[GameEvent] {
        self.events.clear();
        let phase = self.state.phase;

        tick(&mut self.state, input, &mut self.heights, &mut self.events);

        if self.state.phase != phase {
            self.log_transition(phase);
        }
        &self.events
    }

    /// Draw list for the current state. Never changes the session.
    pub fn draw(&self) -> Frame {
        draw_frame(&self.state, &self.settings)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Events raised by the most recent `update`
    pub fn last_events(&self) -> &[GameEvent] {
        &self.events
    }

    fn log_transition(&self, from: GamePhase) {
        let state = &self.state;
        match state.phase {
            GamePhase::Playing => log::info!("Run started"),
            GamePhase::GameOver => log::info!(
                "Game over at frame {}: score {} (high {})",
                state.frame_count,
                state.score,
                state.high_score
            ),
            GamePhase::Ready => log::info!("{} -> ready", from.as_str()),
        }
    }
}
