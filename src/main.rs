//! Puffer Reef entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use puffer_reef::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use puffer_reef::renderer::web::WebCanvas;
    use puffer_reef::{Game, Settings};

    /// Game plus the surface it draws on
    struct App {
        game: Game,
        canvas: WebCanvas,
        element: HtmlCanvasElement,
    }

    impl App {
        /// Convert client coordinates to field coordinates
        fn to_field(&self, client_x: f64, client_y: f64) -> (f32, f32) {
            let rect = self.element.get_bounding_client_rect();
            let sx = FIELD_WIDTH as f64 / rect.width().max(1.0);
            let sy = FIELD_HEIGHT as f64 / rect.height().max(1.0);
            (
                ((client_x - rect.left()) * sx) as f32,
                ((client_y - rect.top()) * sy) as f32,
            )
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Puffer Reef starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let element: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Back the logical field with device pixels
        let dpr = window.device_pixel_ratio();
        element.set_width((FIELD_WIDTH as f64 * dpr) as u32);
        element.set_height((FIELD_HEIGHT as f64 * dpr) as u32);

        let ctx: CanvasRenderingContext2d = element
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        // Write back so the stored copy carries every field of this version
        let settings = Settings::load();
        settings.save();
        let seed = settings
            .default_seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, settings),
            canvas: WebCanvas::new(ctx, dpr),
            element: element.clone(),
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&element, app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Puffer Reef running!");
        Ok(())
    }

    fn setup_input_handlers(element: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let (x, y) = a.to_field(event.client_x() as f64, event.client_y() as f64);
                a.game.push_tap(x, y);
            });
            let _ = element
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start; prevent_default stops the synthetic mousedown that
        // would otherwise register the same tap twice
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.changed_touches().get(0) {
                    let mut a = app.borrow_mut();
                    let (x, y) = a.to_field(touch.client_x() as f64, touch.client_y() as f64);
                    a.game.push_tap(x, y);
                }
            });
            let _ = element
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; frame loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let App { game, canvas, .. } = &mut *a;
            game.frame(time, canvas);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use puffer_reef::renderer::RecordingCanvas;
    use puffer_reef::sim::{Difficulty, GameEvent, menu_buttons};
    use puffer_reef::{Game, Settings};

    env_logger::init();
    log::info!("Puffer Reef (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    // puffer-reef [easy|normal|hard] [frames] [seed]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let difficulty = args
        .first()
        .map(|s| {
            Difficulty::from_str(s).unwrap_or_else(|| {
                log::warn!("Unknown difficulty '{}', using normal", s);
                Difficulty::Normal
            })
        })
        .unwrap_or(Difficulty::Normal);
    let frames: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3600);

    let settings = Settings::load();
    let seed = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .or(settings.default_seed)
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut game = Game::new(seed, settings);
    let mut canvas = RecordingCanvas::new();
    let frame_ms = 1000.0 / 60.0;

    // Pick the requested difficulty, then let the autopilot play
    let button = menu_buttons()
        .into_iter()
        .find(|b| b.difficulty == difficulty)
        .map(|b| b.center)
        .unwrap_or_default();
    game.push_tap(button.x, button.y);
    game.frame(0.0, &mut canvas);
    game.idle_mode = true;

    let mut runs = 0u32;
    let mut draw_calls = 0usize;
    for frame in 1..frames {
        canvas.clear();
        let events = game.frame(frame as f64 * frame_ms, &mut canvas);
        draw_calls += canvas.len();
        for event in events {
            if let GameEvent::Collided { score } = event {
                runs += 1;
                println!("Run {} ended with score {}", runs, score);
            }
        }
    }

    println!(
        "\n{} frames, seed {}, {} run(s), best score {}, {:.1} draw calls/frame",
        frames,
        seed,
        runs,
        game.state.best_score.max(game.state.score),
        draw_calls as f64 / frames.max(1) as f64
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
