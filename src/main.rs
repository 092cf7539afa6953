//! Elf Jump entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlCanvasElement, HtmlElement, HtmlImageElement, HtmlInputElement, KeyboardEvent, TouchEvent};

    use elf_jump::platform;
    use elf_jump::renderer::{AssetStatus, CanvasRenderer, ImageId, SceneOptions, build_scene};
    use elf_jump::sim::{GameState, PressOutcome, Viewport, press, tick};
    use elf_jump::{GameOverScreen, SessionBest, Settings};

    const CANVAS_ID: &str = "gameCanvas";
    const SPRITE_SRC: &str = "elf.png";
    const BACKGROUND_SRC: &str = "northpole-bg.jpg";
    const WALLET_FORM_ID: &str = "walletForm";
    const WALLET_SCORE_ID: &str = "score";
    const WALLET_CLOSE_ID: &str = "closeWalletForm";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        renderer: CanvasRenderer,
        assets: AssetStatus,
        best: SessionBest,
        /// Touch prompts and touch-start input
        touch: bool,
        /// A requestAnimationFrame chain is pending
        loop_active: bool,
    }

    impl Game {
        fn scene_options(&self) -> SceneOptions {
            SceneOptions {
                assets: self.assets,
                touch: self.touch,
                game_over_screen: self.settings.game_over_screen,
                best_score: if self.settings.show_best_score {
                    self.best.best()
                } else {
                    None
                },
            }
        }

        /// Render the current frame
        fn draw(&self) {
            let scene = build_scene(&self.state, &self.scene_options());
            if let Err(e) = self.renderer.render(&scene) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Run one simulation tick; returns true if the run just ended
        fn update(&mut self) -> bool {
            let report = tick(&mut self.state, &self.settings.tuning);
            if report.passed > 0 || report.captured > 0 {
                log::debug!(
                    "Frame {}: passed {}, caught {}, score {}",
                    self.state.frame,
                    report.passed,
                    report.captured,
                    self.state.score
                );
            }
            match report.ended {
                Some(cause) => {
                    log::info!(
                        "Game over ({:?}) at frame {} with score {}",
                        cause,
                        self.state.frame,
                        self.state.score
                    );
                    true
                }
                None => false,
            }
        }

        /// Record the run and hand the score to the wallet form
        fn finish_run(&mut self) {
            let score = self.state.score;
            if self.best.record(score) {
                log::info!("New session best {} after {} runs", score, self.best.runs());
            }
            if self.settings.game_over_screen == GameOverScreen::WalletForm {
                show_wallet_form(score);
            }
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.renderer.resize(width, height);
            self.state.resize(width as f32, height as f32);
            log::info!("Resized to {}x{}", width, height);
        }

        fn reset(&mut self) {
            self.state.reset();
            log::info!("Game reset");
        }
    }

    fn window_size(window: &web_sys::Window) -> (u32, u32) {
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    /// Show the wallet popup with the final score filled in
    fn show_wallet_form(score: u64) {
        let Some(document) = document() else { return };

        match document
            .get_element_by_id(WALLET_SCORE_ID)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            Some(input) => input.set_value(&score.to_string()),
            None => log::warn!("#{} input not found", WALLET_SCORE_ID),
        }

        match document
            .get_element_by_id(WALLET_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            Some(form) => {
                let _ = form.style().set_property("display", "block");
            }
            None => log::warn!("#{} not found", WALLET_FORM_ID),
        }
    }

    fn hide_wallet_form() {
        if let Some(form) = document()
            .and_then(|d| d.get_element_by_id(WALLET_FORM_ID))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = form.style().set_property("display", "none");
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Elf Jump starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no #gameCanvas"))?
            .dyn_into()?;

        let (width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let background = HtmlImageElement::new()?;
        let sprite = HtmlImageElement::new()?;
        let renderer = CanvasRenderer::new(canvas.clone(), background.clone(), sprite.clone())?;

        let settings = Settings::load();
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let touch = platform::touch_enabled(settings.touch_input, &user_agent);
        log::info!(
            "Game-over screen: {}, touch input: {}",
            settings.game_over_screen.as_str(),
            touch
        );

        let seed = js_sys::Date::now() as u64;
        let viewport = Viewport::new(width as f32, height as f32);
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, viewport, &settings.tuning),
            settings,
            renderer,
            assets: AssetStatus::default(),
            best: SessionBest::new(),
            touch,
            loop_active: false,
        }));

        log::info!("Game initialized with seed: {}", seed);

        load_image(game.clone(), background, BACKGROUND_SRC, ImageId::Background);
        load_image(game.clone(), sprite, SPRITE_SRC, ImageId::Sprite);

        setup_resize_handler(game.clone())?;
        setup_input_handlers(&canvas, game.clone())?;
        setup_wallet_form(game.clone());

        game.borrow().draw();

        log::info!("Elf Jump ready!");
        Ok(())
    }

    /// Start loading an image; redraw once it is ready
    fn load_image(game: Rc<RefCell<Game>>, image: HtmlImageElement, src: &'static str, id: ImageId) {
        image.set_src(src);
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(image.decode()).await {
                Ok(_) => {
                    log::info!("Loaded {}", src);
                    let mut g = game.borrow_mut();
                    match id {
                        ImageId::Background => g.assets.background = true,
                        ImageId::Sprite => g.assets.sprite = true,
                    }
                    // A running loop redraws on its own
                    if !g.loop_active {
                        g.draw();
                    }
                }
                Err(e) => log::warn!("Failed to load {}: {:?}; using a placeholder", src, e),
            }
        });
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else { return };
            let (width, height) = window_size(&window);
            let mut g = game.borrow_mut();
            g.resize(width, height);
            if !g.loop_active {
                g.draw();
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if platform::key_triggers_press(&event.code()) && handle_press(&game).consumes_event() {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start
        if game.borrow().touch {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                handle_press(&game);
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_wallet_form(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else { return };

        let Some(btn) = document.get_element_by_id(WALLET_CLOSE_ID) else {
            if game.borrow().settings.game_over_screen == GameOverScreen::WalletForm {
                log::warn!("#{} not found; the wallet form cannot restart the game", WALLET_CLOSE_ID);
            }
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            hide_wallet_form();
            let mut g = game.borrow_mut();
            if g.state.is_over() {
                g.reset();
                g.draw();
            }
        });
        if let Err(e) = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
            log::warn!("Could not wire #{}: {:?}", WALLET_CLOSE_ID, e);
        }
        closure.forget();
    }

    /// Keyboard or touch press
    fn handle_press(game: &Rc<RefCell<Game>>) -> PressOutcome {
        let outcome = {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            press(&mut g.state, &g.settings.tuning, g.settings.game_over_screen)
        };

        match outcome {
            PressOutcome::Started => {
                log::info!("Run started");
                start_loop(game.clone());
            }
            PressOutcome::Reset => {
                log::info!("Game reset");
                game.borrow().draw();
            }
            PressOutcome::Jumped | PressOutcome::Ignored => {}
        }
        outcome
    }

    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_active {
                return;
            }
            g.loop_active = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One display refresh: tick, draw, and reschedule while running
    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_going = {
            let mut g = game.borrow_mut();
            if g.update() {
                g.finish_run();
            }
            g.draw();

            let running = g.state.is_running();
            if !running {
                g.loop_active = false;
            }
            running
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Elf Jump failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Elf Jump (native) starting...");
    log::info!("The playable game is web-only - run with `trunk serve`; running headless autopilot");

    let best = autopilot::run_sessions(&[7, 42, 2024], 20_000);
    match best {
        Some(score) => println!("Best autopilot score: {}", score),
        None => println!("Autopilot never scored"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless play for the native binary
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use elf_jump::sim::{GameState, Viewport, press, tick};
    use elf_jump::{GameOverScreen, SessionBest, Tuning};

    /// Where the elf should hover: the middle of the next gap, or mid-screen
    fn target_y(state: &GameState) -> f32 {
        let band_left = state.viewport.center_x() - 25.0;
        state
            .obstacles
            .iter()
            .find(|o| o.right() > band_left)
            .map(|o| (o.top + o.bottom) / 2.0)
            .unwrap_or_else(|| state.viewport.center_y())
    }

    /// Play one run until it ends or `max_ticks` pass, returning the score
    pub fn play(seed: u64, max_ticks: u64) -> u64 {
        let tuning = Tuning::default();
        let mut state = GameState::new(seed, Viewport::new(800.0, 600.0), &tuning);
        press(&mut state, &tuning, GameOverScreen::Inline);

        for _ in 0..max_ticks {
            if state.player.y > target_y(&state) && state.player.velocity >= 0.0 {
                press(&mut state, &tuning, GameOverScreen::Inline);
            }
            let report = tick(&mut state, &tuning);
            if let Some(cause) = report.ended {
                log::info!("Seed {}: {:?} at frame {}, score {}", seed, cause, state.frame, state.score);
                return state.score;
            }
        }

        log::info!("Seed {}: survived {} frames, score {}", seed, state.frame, state.score);
        state.score
    }

    /// Play several seeds and return the best score
    pub fn run_sessions(seeds: &[u64], max_ticks: u64) -> Option<u64> {
        let mut best = SessionBest::new();
        for &seed in seeds {
            let score = play(seed, max_ticks);
            if best.record(score) {
                log::info!("Seed {} set a new best", seed);
            }
        }
        best.best()
    }
}
