//! Coastal Defense entry point
//!
//! Handles platform-specific initialization and drives the simulation clock.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, MouseEvent};

    use coastal_defense::Tuning;
    use coastal_defense::sim::{GameState, Point, Simulation};
    use coastal_defense::view::{hud_message, sprites};

    /// Game instance holding the session and the latest snapshot
    struct Game {
        sim: Simulation,
        state: GameState,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning, width: f64, height: f64) -> Self {
            let mut sim = Simulation::with_tuning(seed, tuning);
            let state = sim.start(width, height);
            Self { sim, state }
        }

        /// Move the game one step forward
        fn tick(&mut self) {
            self.state = self.sim.step(&self.state);
        }

        /// Swing the cannon toward the pointer
        fn aim(&mut self, x: f64, y: f64) {
            self.state = self.sim.rotate_cannon(&self.state, Point::new(x, y));
        }

        /// Fire toward the pointer
        fn fire(&mut self, x: f64, y: f64) {
            self.state = self.sim.fire_cannon(&self.state, Point::new(x, y));
        }

        /// Redraw sprites and the status line
        fn render(&self, document: &Document, root: &Element) {
            root.set_inner_html("");

            for sprite in sprites(&self.state) {
                let Ok(img) = document.create_element("img") else {
                    continue;
                };
                let style = format!(
                    "position: absolute; width: {}px; height: {}px; transform: {}",
                    sprite.width,
                    sprite.height,
                    sprite.css_transform()
                );
                let _ = img.set_attribute("src", sprite.asset);
                let _ = img.set_attribute("class", "Sprite");
                let _ = img.set_attribute("style", &style);
                let _ = root.append_child(&img);
            }

            if let Ok(message) = document.create_element("div") {
                let text = hud_message(&self.state, self.sim.tuning().ships_to_win);
                let _ = message.set_attribute("class", "Message");
                message.set_text_content(Some(&text));
                let _ = root.append_child(&message);
            }
        }
    }

    fn setup_pointer(root: &Element, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .aim(event.client_x() as f64, event.client_y() as f64);
            });
            let _ = root
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            game.borrow_mut()
                .fire(event.client_x() as f64, event.client_y() as f64);
        });
        let _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_timer(
        window: &web_sys::Window,
        document: Document,
        root: Element,
        game: Rc<RefCell<Game>>,
    ) {
        let interval = game.borrow().sim.tuning().tick_interval_ms as i32;
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = game.borrow_mut();
            g.tick();
            g.render(&document, &root);
        });
        if window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval,
            )
            .is_err()
        {
            log::error!("Failed to start game timer");
        }
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Coastal Defense starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let root = document.get_element_by_id("root").expect("no root element");

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        let _ = root.set_attribute(
            "style",
            &format!("position: relative; width: {}px; height: {}px", width, height),
        );

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, Tuning::load(), width, height)));
        game.borrow().render(&document, &root);

        setup_pointer(&root, game.clone());
        setup_timer(&window, document, root, game);

        log::info!("Game initialized with seed: {}", seed);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Upper bound on a headless game
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_TICKS: u32 = 50_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use coastal_defense::sim::{Autopilot, Simulation};
    use coastal_defense::{Tuning, platform, view};

    env_logger::init();
    log::info!("Coastal Defense (native) starting...");
    log::info!("Native mode plays a headless autopilot game - build for wasm32 to play in a browser");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| platform::now_ms() as u64);

    let tuning = Tuning::load();
    let ships_to_win = tuning.ships_to_win;
    let mut sim = Simulation::with_tuning(seed, tuning);
    let mut pilot = Autopilot::default();
    let mut state = sim.start(800.0, 600.0);

    let mut ticks = 0;
    while !state.is_over() && ticks < MAX_HEADLESS_TICKS {
        state = pilot.drive(&mut sim, &state);
        ticks += 1;
    }

    println!(
        "seed {} after {} ticks: {} ({} ships sunk, {} bodies on the board)",
        sim.seed(),
        ticks,
        view::hud_message(&state, ships_to_win),
        state.ships_sunk,
        state.bodies.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
