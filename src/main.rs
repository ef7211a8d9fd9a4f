//! Horse Jump entry point
//!
//! Native: runs the autopilot headlessly and prints a summary.
//! Web: drives the game from a canvas with mouse, touch or keyboard.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use horse_jump::audio::{AudioManager, AudioSink};
    use horse_jump::consts::*;
    use horse_jump::input::ButtonLatch;
    use horse_jump::renderer::{DrawCommand, Frame, palette};
    use horse_jump::sim::Autopilot;
    use horse_jump::{Game, Settings};

    /// Font size in screen units
    const TEXT_SIZE: f64 = 6.0;

    /// Game instance holding all host state
    struct Host {
        game: Game,
        ctx: CanvasRenderingContext2d,
        audio: AudioManager,
        latch: ButtonLatch,
        accumulator: f32,
        last_time: f64,
        // Demo mode: autopilot plays instead of the player
        autopilot: Option<Autopilot>,
    }

    impl Host {
        fn new(seed: u64, ctx: CanvasRenderingContext2d, settings: Settings) -> Self {
            Self {
                audio: AudioManager::new(&settings),
                game: Game::new(seed).with_settings(settings),
                ctx,
                latch: ButtonLatch::new(),
                accumulator: 0.0,
                last_time: 0.0,
                autopilot: None,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = match self.autopilot.as_mut() {
                    Some(pilot) => pilot.next_input(self.game.state()),
                    None => self.latch.sample(),
                };
                let events = self.game.update(&input);
                self.audio.play_events(events);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Render the current frame
        fn render(&self) {
            present(&self.ctx, &self.game.draw());
        }

        fn toggle_demo(&mut self) {
            self.autopilot = match self.autopilot {
                Some(_) => None,
                None => Some(Autopilot::new()),
            };
            log::info!("Demo mode: {}", self.autopilot.is_some());
        }
    }

    /// Replay a frame's draw list onto the 2D context
    fn present(ctx: &CanvasRenderingContext2d, frame: &Frame) {
        for command in &frame.commands {
            match command {
                DrawCommand::Clear { color } => {
                    ctx.set_fill_style_str(&palette::css(*color));
                    ctx.fill_rect(0.0, 0.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);
                }
                DrawCommand::Rect { pos, size, color } => {
                    ctx.set_fill_style_str(&palette::css(*color));
                    ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                DrawCommand::RectOutline { pos, size, color } => {
                    ctx.set_stroke_style_str(&palette::css(*color));
                    ctx.stroke_rect(
                        pos.x as f64 + 0.5,
                        pos.y as f64 + 0.5,
                        size.x as f64 - 1.0,
                        size.y as f64 - 1.0,
                    );
                }
                DrawCommand::Text { pos, text, color } => {
                    ctx.set_fill_style_str(&palette::css(*color));
                    let _ = ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Horse Jump starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Integer scale of the 160x144 screen
        let dpr = window.device_pixel_ratio();
        let scale = ((canvas.client_width() as f64 * dpr) / SCREEN_WIDTH as f64)
            .floor()
            .max(1.0);
        canvas.set_width((SCREEN_WIDTH as f64 * scale) as u32);
        canvas.set_height((SCREEN_HEIGHT as f64 * scale) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");
        let _ = ctx.scale(scale, scale);
        ctx.set_image_smoothing_enabled(false);
        ctx.set_text_baseline("top");
        ctx.set_font(&format!("{}px monospace", TEXT_SIZE));

        let settings = canvas
            .get_attribute("data-settings")
            .map(|json| {
                Settings::from_json(&json).unwrap_or_else(|e| {
                    log::warn!("{}; using defaults", e);
                    Settings::default()
                })
            })
            .unwrap_or_default();

        let seed = js_sys::Date::now() as u64;
        let host = Rc::new(RefCell::new(Host::new(seed, ctx, settings)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, host.clone());
        request_animation_frame(host);

        log::info!("Horse Jump running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) {
        // Mouse
        for (name, down) in [("mousedown", true), ("mouseup", false), ("mouseleave", false)] {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut h = host.borrow_mut();
                if down {
                    h.audio.resume();
                }
                h.latch.set_down(down);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        for (name, down) in [("touchstart", true), ("touchend", false), ("touchcancel", false)] {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                let mut h = host.borrow_mut();
                if down {
                    h.audio.resume();
                }
                h.latch.set_down(down);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        let window = web_sys::window().unwrap();
        for (name, down) in [("keydown", true), ("keyup", false)] {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut h = host.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" => {
                        event.prevent_default();
                        if down {
                            h.audio.resume();
                        }
                        h.latch.set_down(down);
                    }
                    "d" | "D" if down && !event.repeat() => h.toggle_demo(),
                    _ => {}
                }
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Losing focus lets go of the button
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                host.borrow_mut().latch.release();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        {
            let mut h = host.borrow_mut();

            // Calculate delta time
            let dt = if h.last_time > 0.0 {
                ((time - h.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            h.last_time = time;

            h.update(dt);
            h.render();
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use horse_jump::audio::{AudioSink, LogAudio};
    use horse_jump::sim::{Autopilot, GameEvent};
    use horse_jump::{Error, Game, Result, Settings};

    /// Command line options
    #[derive(Debug)]
    pub struct Options {
        pub seed: u64,
        pub ticks: u64,
        pub settings: Settings,
        pub json: bool,
    }

    impl Options {
        pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
            let mut options = Options {
                seed: rand::random(),
                ticks: 60 * 60,
                settings: Settings::default(),
                json: false,
            };

            let mut args = args.into_iter();
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--seed" => options.seed = parse_value("--seed", args.next())?,
                    "--ticks" => options.ticks = parse_value("--ticks", args.next())?,
                    "--settings" => {
                        let json = args.next().ok_or_else(|| missing("--settings"))?;
                        options.settings = Settings::from_json(&json)?;
                    }
                    "--json" => options.json = true,
                    other => {
                        return Err(Error::InvalidArgument {
                            name: "argument".to_string(),
                            value: other.to_string(),
                        });
                    }
                }
            }
            Ok(options)
        }
    }

    fn missing(name: &str) -> Error {
        Error::InvalidArgument {
            name: name.to_string(),
            value: String::new(),
        }
    }

    fn parse_value<T: std::str::FromStr>(name: &str, value: Option<String>) -> Result<T> {
        let value = value.ok_or_else(|| missing(name))?;
        value.parse().map_err(|_| Error::InvalidArgument {
            name: name.to_string(),
            value,
        })
    }

    /// What happened during a headless run
    #[derive(Debug, Default, Serialize)]
    pub struct Summary {
        pub seed: u64,
        pub ticks: u64,
        pub runs: u32,
        pub jumps: u32,
        pub best_score: u32,
        pub final_speed: i32,
        pub cues_played: u64,
    }

    pub fn run(options: &Options) -> Summary {
        let mut game = Game::new(options.seed).with_settings(options.settings.clone());
        let mut pilot = Autopilot::new();
        let mut audio = LogAudio::new(&options.settings);
        let mut summary = Summary {
            seed: options.seed,
            ticks: options.ticks,
            ..Default::default()
        };

        for _ in 0..options.ticks {
            let input = pilot.next_input(game.state());
            let events = game.update(&input);
            for event in events {
                match event {
                    GameEvent::Jump => summary.jumps += 1,
                    GameEvent::GameOver { .. } => summary.runs += 1,
                    GameEvent::Score { .. } => {}
                }
            }
            audio.play_events(events);
        }

        summary.best_score = game.state().high_score.max(game.state().score);
        summary.final_speed = game.state().game_speed;
        summary.cues_played = audio.played();
        summary
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let options = match headless::Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: horse-jump [--seed N] [--ticks N] [--settings JSON] [--json]");
            std::process::exit(2);
        }
    };

    log::info!("Horse Jump (headless) starting with seed {}", options.seed);
    let summary = headless::run(&options);

    if options.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to encode summary: {}", e),
        }
    } else {
        println!(
            "seed {}: {} ticks, {} runs ended, {} jumps, best score {}, final speed {}",
            summary.seed,
            summary.ticks,
            summary.runs,
            summary.jumps,
            summary.best_score,
            summary.final_speed
        );
    }
}
