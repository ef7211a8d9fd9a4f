use horse_jump::Game;
use horse_jump::audio::SoundEffect;
use horse_jump::sim::{
    Autopilot, GameEvent, GamePhase, HeightBand, Horse, Obstacle, ScriptedHeights, TickInput,
};

const PRESS: TickInput = TickInput {
    pressed: true,
    held: true,
    released: false,
};
const HOLD: TickInput = TickInput {
    pressed: false,
    held: true,
    released: false,
};
const RELEASE: TickInput = TickInput {
    pressed: false,
    held: false,
    released: true,
};
const IDLE: TickInput = TickInput {
    pressed: false,
    held: false,
    released: false,
};

#[test]
fn full_lifecycle_ready_playing_gameover_ready() {
    let mut game = Game::with_heights(ScriptedHeights::new([20, 20, 20]));
    assert_eq!(game.phase(), GamePhase::Ready);

    game.update(&PRESS);
    game.update(&RELEASE);
    let state = game.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.game_speed, 3);
    assert!(state.obstacles.is_empty());

    // Standing still, the first fence runs into the horse
    let mut game_over = None;
    for _ in 0..200 {
        let events = game.update(&IDLE).to_vec();
        if let Some(event) = events
            .into_iter()
            .find(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            game_over = Some(event);
            break;
        }
    }
    assert_eq!(
        game_over,
        Some(GameEvent::GameOver {
            score: 0,
            high_score: 0
        })
    );
    assert_eq!(game.phase(), GamePhase::GameOver);
    // Fence spawned at frame 80 reaches x < 64 after 32 more ticks
    assert_eq!(game.state().frame_count, 112);

    game.update(&PRESS);
    assert_eq!(game.phase(), GamePhase::Ready);
    assert!(game.state().obstacles.is_empty());
    assert_eq!(game.state().horse, Horse::new());

    game.update(&RELEASE);
    game.update(&PRESS);
    assert_eq!(game.phase(), GamePhase::Playing);
}

#[test]
fn jumping_over_a_fence_scores() {
    let mut game = Game::with_heights(ScriptedHeights::new([20]));
    game.update(&PRESS);
    game.update(&RELEASE);

    // Wait until the fence is close, then take a minimum jump
    while game.state().obstacles.iter().next().is_none_or(|o| o.x > 100) {
        game.update(&IDLE);
    }
    game.update(&PRESS);
    assert_eq!(game.update(&RELEASE), &[GameEvent::Jump]);

    // Retired 36 ticks after launch, before the next fence arrives
    let mut scored = false;
    for _ in 0..45 {
        let events = game.update(&IDLE).to_vec();
        assert_eq!(game.phase(), GamePhase::Playing);
        if events.contains(&GameEvent::Score { score: 1 }) {
            scored = true;
        }
    }
    assert!(scored);
    assert_eq!(game.state().score, 1);
}

#[test]
fn held_charge_reaches_full_power() {
    let mut game = Game::with_heights(ScriptedHeights::default());
    game.update(&PRESS);
    game.update(&RELEASE);

    game.update(&PRESS);
    for _ in 0..30 {
        game.update(&HOLD);
    }
    assert_eq!(game.state().horse.charge_ticks, 20);
    game.update(&RELEASE);
    assert!((game.state().horse.vy - -14.0).abs() < 1e-6);
}

#[test]
fn high_score_survives_runs() {
    let mut game = Game::with_heights(ScriptedHeights::default());
    game.update(&PRESS);
    game.state_mut().score = 8;
    game.state_mut().obstacles.push(Obstacle::new(58, 30));
    game.update(&RELEASE);
    assert_eq!(game.state().high_score, 8);

    game.update(&PRESS);
    game.update(&RELEASE);
    game.update(&PRESS);
    assert_eq!(game.state().score, 0);
    game.state_mut().score = 2;
    game.state_mut().obstacles.push(Obstacle::new(58, 30));
    game.update(&IDLE);
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.state().high_score, 8);
}

#[test]
fn spawned_heights_follow_the_score_band() {
    let mut game = Game::new(2024);
    game.update(&PRESS);

    for score in [5, 12, 17, 25] {
        game.state_mut().score = score;
        game.state_mut().obstacles.clear();
        let band = HeightBand::for_score(score);
        // Step to the next spawn, keeping the horse out of reach
        loop {
            game.state_mut().horse.y = -1000.0;
            game.state_mut().horse.vy = 0.0;
            game.update(&IDLE);
            if let Some(fence) = game.state().obstacles.iter().last() {
                assert!(band.contains(fence.height), "{} not in {:?}", fence.height, band);
                break;
            }
        }
    }
}

#[test]
fn events_map_to_the_three_cues() {
    let mut game = Game::with_heights(ScriptedHeights::default());
    game.update(&PRESS);
    game.update(&PRESS);
    let cues: Vec<SoundEffect> = game
        .update(&RELEASE)
        .iter()
        .copied()
        .map(SoundEffect::from)
        .collect();
    assert_eq!(cues, vec![SoundEffect::Jump]);
}

#[test]
fn autopilot_clears_fences() {
    let mut game = Game::new(31337);
    let mut pilot = Autopilot::new();
    let mut best = 0;

    for _ in 0..900 {
        let input = pilot.next_input(game.state());
        for event in game.update(&input) {
            if let GameEvent::Score { score } = event {
                best = best.max(*score);
            }
        }
    }
    assert!(best >= 2, "autopilot only scored {best}");
}

#[test]
fn draw_does_not_change_the_session() {
    let mut game = Game::new(77);
    game.update(&PRESS);
    for _ in 0..150 {
        game.update(&IDLE);
    }
    let snapshot = game.state().clone();
    let frames: Vec<_> = (0..3).map(|_| game.draw()).collect();
    assert!(frames.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(game.state(), &snapshot);
}
