//! Stomp Platformer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, Window};

    use stomp_platformer::Tuning;
    use stomp_platformer::consts::*;
    use stomp_platformer::renderer::{CanvasSurface, draw};
    use stomp_platformer::sim::{self, Button, GameState};

    const CONTROLS_CSS: &str = "
        #controls {
            position: fixed;
            bottom: 20px;
            left: 50%;
            transform: translateX(-50%);
            display: flex;
            gap: 10px;
            z-index: 10;
        }
        #controls button {
            padding: 15px 30px;
            font-size: 16px;
            background: #4CAF50;
            color: white;
            border: none;
            border-radius: 5px;
            cursor: pointer;
            width: 80px;
            height: 80px;
        }
    ";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        /// One fixed step followed by a redraw
        fn update(&mut self) {
            for event in sim::tick(&mut self.state) {
                event.log();
            }
            draw(&self.state, &mut self.surface);
        }

        /// Match the canvas to the window and refit the world
        fn resize(&mut self, width: u32, height: u32) {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.state.resize(width as f32, height as f32);
        }
    }

    /// Window inner size in CSS pixels
    fn viewport_size(window: &Window) -> (u32, u32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (width as u32, height as u32)
    }

    pub fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas element"))?
            .dyn_into()?;

        let surface = CanvasSurface::new(&canvas)?;
        let tuning = Tuning::load();

        let (width, height) = viewport_size(&window);
        let state = GameState::new(width as f32, height as f32, &tuning);
        let game = Rc::new(RefCell::new(Game {
            state,
            surface,
            canvas,
        }));
        game.borrow_mut().resize(width, height);
        log::info!("Game initialized at {}x{}", width, height);

        setup_resize_handler(&window, game.clone())?;
        setup_blur_handler(&window, game.clone())?;
        inject_controls_css(&document)?;
        create_controls(&document, game.clone())?;
        start_tick_timer(&window, game)?;

        log::info!("Stomp Platformer running!");
        Ok(())
    }

    fn setup_resize_handler(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = viewport_size(&window);
            game.borrow_mut().resize(width, height);
            log::info!("Resized to {}x{}", width, height);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Stop walking when the window loses focus; releases may never arrive
    fn setup_blur_handler(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            sim::release_all(&mut game.borrow_mut().state);
            log::info!("Movement released (window blur)");
        });
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn inject_controls_css(document: &Document) -> Result<(), JsValue> {
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("no <head>"))?;
        let style = document.create_element("style")?;
        style.set_text_content(Some(CONTROLS_CSS));
        head.append_child(&style)?;
        Ok(())
    }

    /// Build the Left / Jump / Right touch buttons and wire them to the game
    fn create_controls(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no <body>"))?;
        let controls = document.create_element("div")?;
        controls.set_id("controls");

        for button in Button::ALL {
            let element = document.create_element("button")?;
            element.set_id(button.element_id());
            element.set_text_content(Some(button.label()));

            // Mouse events mirror touch so the game is playable on desktop
            for event_name in ["touchstart", "mousedown"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    sim::press(&mut game.borrow_mut().state, button);
                });
                element.add_event_listener_with_callback(
                    event_name,
                    closure.as_ref().unchecked_ref(),
                )?;
                closure.forget();
            }

            // mouseleave covers a press that is dragged off the button
            for event_name in ["touchend", "mouseup", "mouseleave"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    sim::release(&mut game.borrow_mut().state, button);
                });
                element.add_event_listener_with_callback(
                    event_name,
                    closure.as_ref().unchecked_ref(),
                )?;
                closure.forget();
            }

            controls.append_child(&element)?;
        }

        body.append_child(&controls)?;
        Ok(())
    }

    /// Fixed-rate loop; runs until the page goes away
    fn start_tick_timer(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().update();
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS,
        )?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Stomp Platformer starting...");

    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Stomp Platformer (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the real game");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session: dodge right, then jump back over the enemy
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use stomp_platformer::Tuning;
    use stomp_platformer::sim::{self, Button, GameState};

    const DEMO_TICKS: u64 = 600;

    let tuning = Tuning::load();
    match tuning.to_json() {
        Ok(json) => log::debug!("Tuning: {}", json),
        Err(e) => log::warn!("Could not serialize tuning: {}", e),
    }
    let mut state = GameState::new(800.0, 600.0, &tuning);

    for t in 0..DEMO_TICKS {
        match t {
            0 => sim::press(&mut state, Button::Right),
            30 => sim::release(&mut state, Button::Right),
            200 => sim::press(&mut state, Button::Jump),
            210 => sim::press(&mut state, Button::Left),
            260 => sim::release(&mut state, Button::Left),
            _ => {}
        }

        for event in sim::tick(&mut state) {
            event.log();
        }
    }

    log::info!(
        "Demo finished after {} ticks: lives {}, enemy {:?}, phase {:?}",
        state.time_ticks,
        state.player.lives,
        state.enemy.status,
        state.phase
    );
    match serde_json::to_string(&state) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
}
