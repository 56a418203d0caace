//! Heart Hopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.
//! The simulation itself never reschedules or reads a clock; this file
//! owns the animation-frame loop and feeds timestamps in.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

    use heart_hopper::consts::*;
    use heart_hopper::render::draw_frame;
    use heart_hopper::sim::{GameState, InputState, Stage, tick};

    const GOAL_MESSAGE: &str = "ゴール！";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        ctx: CanvasRenderingContext2d,
        message: Element,
    }

    impl Game {
        fn new(stage: Stage, ctx: CanvasRenderingContext2d, message: Element) -> Self {
            Self {
                state: GameState::new(stage),
                input: InputState::default(),
                ctx,
                message,
            }
        }

        /// One animation-frame callback: tick once, react, draw
        fn frame(&mut self, time: f64) {
            let events = tick(&mut self.state, &mut self.input, time);

            if events.goal_reached {
                log::info!("Goal reached");
                self.message.set_text_content(Some(GOAL_MESSAGE));
                let _ = self.message.set_attribute("class", "");
            }
            if events.restarted {
                let _ = self.message.set_attribute("class", "hidden");
            }

            if let Err(e) = draw_frame(&self.ctx, &self.state) {
                log::warn!("Draw failed: {e:?}");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Heart Hopper starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no #game canvas")
            .dyn_into()
            .expect("#game is not a canvas");
        canvas.set_width(VIEWPORT_WIDTH as u32);
        canvas.set_height(VIEWPORT_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("context is not 2d");

        let message = document
            .get_element_by_id("goal-message")
            .expect("no #goal-message element");
        let _ = message.set_attribute("class", "hidden");

        let game = Rc::new(RefCell::new(Game::new(Stage::meadow(), ctx, message)));

        setup_key_handlers(game.clone());
        setup_message_ack(game.clone());

        request_animation_frame(game);

        log::info!("Heart Hopper running!");
    }

    fn setup_key_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Handlers only flip held flags; the next tick samples them once
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                set_action(&mut game.borrow_mut().input, &event.key(), true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                set_action(&mut game.borrow_mut().input, &event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn set_action(input: &mut heart_hopper::sim::InputState, key: &str, held: bool) {
        match key {
            "ArrowLeft" => input.left = held,
            "ArrowRight" => input.right = held,
            "ArrowUp" | " " => input.jump = held,
            _ => {}
        }
    }

    /// Clicking the goal message restarts immediately
    fn setup_message_ack(game: Rc<RefCell<Game>>) {
        let message = game.borrow().message.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            game.borrow_mut().input.acknowledge = true;
        });
        let _ = message.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        // Always exactly one follow-up request per tick
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use heart_hopper::sim::{GameState, InputState, Stage, tick};

    env_logger::init();
    log::info!("Heart Hopper (native) starting...");
    log::info!("Build for wasm32 to play in a browser; running a headless demo instead.");

    // Scripted run: hold right, hop whenever grounded on a cadence
    let mut state = GameState::new(Stage::meadow());
    let mut input = InputState {
        right: true,
        ..Default::default()
    };

    let frame_ms = 1000.0 / 60.0;
    for i in 0..10_000u32 {
        input.right = true;
        input.jump = state.body.grounded && i % 45 == 0;

        let events = tick(&mut state, &mut input, i as f64 * frame_ms);

        if i % 120 == 0 {
            log::info!(
                "tick {i}: x={:.0} y={:.0} grounded={}",
                state.body.pos.x,
                state.body.pos.y,
                state.body.grounded
            );
        }
        if events.goal_reached {
            log::info!("Goal reached at tick {i}");
        }
        if events.restarted {
            log::info!("Restarted at tick {i}");
            break;
        }
    }

    log::info!("Headless demo done.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
