//! Scene composition: turns a game state into a frame's draw list
//!
//! Pure function of the state and settings, so drawing twice between two
//! updates yields the same frame.

use super::frame::Frame;
use super::palette::*;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Horse, Obstacle};
use crate::sin_deg;

/// Top of the ground strip
const GROUND_TOP: f32 = GROUND_Y + FENCE_BASE_OFFSET;
/// Horizontal distance at which the cloud loop wraps
const CLOUD_WRAP: f32 = 200.0;

/// Build the draw list for the current state
pub fn draw_frame(state: &GameState, settings: &Settings) -> Frame {
    let mut frame = Frame::new();
    // Scenery freezes on the first frame when animation is off
    let t = if settings.animate_scenery {
        state.frame_count
    } else {
        0
    };

    frame.clear(SKY);
    draw_clouds(&mut frame, t);
    draw_ground(&mut frame, t);

    for obstacle in &state.obstacles {
        draw_fence(&mut frame, obstacle);
    }
    draw_horse(&mut frame, &state.horse, settings.show_charge_meter);

    frame.text(4.0, 4.0, format!("Score: {}", state.score), BLACK);
    frame.text(4.0, 12.0, format!("High: {}", state.high_score), BLACK);

    match state.phase {
        GamePhase::Ready => {
            frame.rect(20.0, 45.0, 120.0, 50.0, BLACK);
            frame.rect_outline(20.0, 45.0, 120.0, 50.0, WHITE);
            frame.text(23.0, 55.0, "Hold & Release", WHITE);
            frame.text(30.0, 65.0, "to Jump High!", WHITE);
            frame.text(25.0, 80.0, "TOUCH to Start", WHITE);
        }
        GamePhase::GameOver => {
            frame.rect(20.0, 50.0, 120.0, 40.0, BLACK);
            frame.rect_outline(20.0, 50.0, 120.0, 40.0, WHITE);
            frame.text(45.0, 60.0, "GAME OVER!", RED);
            frame.text(25.0, 72.0, "TOUCH to Retry", WHITE);
        }
        GamePhase::Playing => {}
    }

    frame
}

fn draw_clouds(frame: &mut Frame, t: u64) {
    let offset = (t as f32 * 0.5) % CLOUD_WRAP;

    frame.rect(20.0 - offset, 20.0, 12.0, 6.0, WHITE);
    frame.rect(18.0 - offset, 22.0, 16.0, 6.0, WHITE);

    frame.rect(100.0 - offset, 30.0, 10.0, 5.0, WHITE);
    frame.rect(98.0 - offset, 32.0, 14.0, 5.0, WHITE);
}

fn draw_ground(frame: &mut Frame, t: u64) {
    frame.rect(
        0.0,
        GROUND_TOP,
        SCREEN_WIDTH as f32,
        (SCREEN_HEIGHT as f32) - GROUND_TOP,
        GREEN,
    );

    // Grass tufts sway by a couple of units
    for i in (0..SCREEN_WIDTH).step_by(8) {
        let sway = sin_deg(t as f32 * 0.1 + i as f32) * 2.0;
        frame.rect(i as f32, GROUND_TOP - 2.0 + sway, 2.0, 4.0, LIME);
    }
}

fn draw_fence(frame: &mut Frame, obstacle: &Obstacle) {
    let x = obstacle.x as f32;
    let h = obstacle.height as f32;
    let top = obstacle.top();

    // Posts reach the ground
    frame.rect(x, top, 3.0, h, BROWN);
    frame.rect(x + 9.0, top, 3.0, h, BROWN);
    // Rails
    frame.rect(x, top, obstacle.width as f32, 3.0, BROWN);
    if obstacle.height > 8 {
        frame.rect(x, top + 8.0, obstacle.width as f32, 3.0, BROWN);
    }
}

fn draw_horse(frame: &mut Frame, horse: &Horse, show_charge_meter: bool) {
    let (x, y) = (horse.x, horse.y);

    // Body
    frame.rect(x, y, horse.width, horse.height, ORANGE);
    // Head
    frame.rect(x + 12.0, y - 6.0, 8.0, 8.0, ORANGE);
    // Mane
    frame.rect(x + 12.0, y - 8.0, 6.0, 4.0, BROWN);
    // Legs
    frame.rect(x + 2.0, y + 10.0, 3.0, 6.0, ORANGE);
    frame.rect(x + 9.0, y + 10.0, 3.0, 6.0, ORANGE);
    // Eye
    frame.rect(x + 16.0, y - 4.0, 2.0, 2.0, BLACK);

    if show_charge_meter && horse.charging {
        let bar_width = (horse.charge_ratio() * horse.width).trunc();
        frame.rect(x, y - 4.0, horse.width, 2.0, BLACK);
        frame.rect(x, y - 4.0, bar_width, 2.0, YELLOW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;

    #[test]
    fn test_ready_panel() {
        let state = GameState::new();
        let frame = draw_frame(&state, &Settings::default());
        let texts: Vec<&str> = frame.texts().collect();
        assert_eq!(
            texts,
            vec![
                "Score: 0",
                "High: 0",
                "Hold & Release",
                "to Jump High!",
                "TOUCH to Start"
            ]
        );
        assert_eq!(frame.commands[0], DrawCommand::Clear { color: SKY });
    }

    #[test]
    fn test_gameover_panel() {
        let mut state = GameState::new();
        state.start_run();
        state.score = 6;
        state.end_run();
        let frame = draw_frame(&state, &Settings::default());
        let texts: Vec<&str> = frame.texts().collect();
        assert!(texts.contains(&"GAME OVER!"));
        assert!(texts.contains(&"TOUCH to Retry"));
        assert!(texts.contains(&"High: 6"));
    }

    #[test]
    fn test_playing_has_no_panel() {
        let mut state = GameState::new();
        state.start_run();
        let frame = draw_frame(&state, &Settings::default());
        assert_eq!(frame.texts().count(), 2);
    }

    #[test]
    fn test_fence_rails() {
        let mut state = GameState::new();
        state.start_run();
        let base = draw_frame(&state, &Settings::default()).len();

        state.obstacles.push(Obstacle::new(100, 20));
        assert_eq!(draw_frame(&state, &Settings::default()).len(), base + 4);

        state.obstacles.clear();
        state.obstacles.push(Obstacle::new(100, 8));
        assert_eq!(draw_frame(&state, &Settings::default()).len(), base + 3);
    }

    #[test]
    fn test_charge_meter() {
        let mut state = GameState::new();
        state.start_run();
        state.horse.charging = true;
        state.horse.charge_ticks = 10;

        let frame = draw_frame(&state, &Settings::default());
        let meter = DrawCommand::Rect {
            pos: glam::Vec2::new(HORSE_X, GROUND_Y - 4.0),
            size: glam::Vec2::new(7.0, 2.0),
            color: YELLOW,
        };
        assert!(frame.commands.contains(&meter));

        let hidden = Settings {
            show_charge_meter: false,
            ..Default::default()
        };
        assert!(!draw_frame(&state, &hidden).commands.contains(&meter));
    }

    #[test]
    fn test_static_scenery_ignores_frame_count() {
        let settings = Settings {
            animate_scenery: false,
            ..Default::default()
        };
        let mut a = GameState::new();
        a.start_run();
        let mut b = a.clone();
        b.frame_count = 977;
        assert_eq!(draw_frame(&a, &settings), draw_frame(&b, &settings));
        assert_ne!(
            draw_frame(&a, &Settings::default()),
            draw_frame(&b, &Settings::default())
        );
    }
}
