//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use super::horse::Horse;
use super::obstacle::ObstacleStream;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title panel, waiting for a press to start
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Horse hit a fence, waiting for a press to return to Ready
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "gameover",
        }
    }
}

/// Cue points raised during a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The horse launched
    Jump,
    /// A fence left the screen; carries the new score
    Score { score: u32 },
    /// The horse hit a fence
    GameOver { score: u32, high_score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub horse: Horse,
    /// Live fences (spawn order)
    pub obstacles: ObstacleStream,
    /// Fences cleared this run
    pub score: u32,
    /// Best score since the process started
    pub high_score: u32,
    /// Scroll speed (units/tick)
    pub game_speed: i32,
    /// Ticks elapsed in the current run
    pub frame_count: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Ready,
            horse: Horse::new(),
            obstacles: ObstacleStream::new(),
            score: 0,
            high_score: 0,
            game_speed: INITIAL_SPEED,
            frame_count: 0,
        }
    }

    /// Ready -> Playing: fresh run
    pub fn start_run(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.obstacles.clear();
        self.frame_count = 0;
        self.game_speed = INITIAL_SPEED;
        self.horse = Horse::new();
    }

    /// Playing -> GameOver
    pub fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        self.high_score = self.high_score.max(self.score);
    }

    /// GameOver -> Ready. Score, speed and frame count stay put until the
    /// next run starts.
    pub fn return_to_ready(&mut self) {
        self.phase = GamePhase::Ready;
        self.horse = Horse::new();
        self.obstacles.clear();
    }
}
