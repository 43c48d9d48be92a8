//! JavaScript entry points. The page owns the canvas and buttons; it
//! forwards input here and redraws from `view()` whenever a call
//! returns `true`.

use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::config::ControllerConfig;
use crate::controller::Controller;
use crate::logging;

static CONTROLLER: Lazy<Mutex<Controller>> = Lazy::new(|| Mutex::new(Controller::default()));

fn with_controller<R>(f: impl FnOnce(&mut Controller) -> R) -> R {
    let mut controller = CONTROLLER.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut controller)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = with_controller(|c| c.config().level_filter());
    logging::init(level.unwrap_or(log::LevelFilter::Info));
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Applies host settings. Omitted fields keep their defaults.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config: ControllerConfig = if config.is_undefined() || config.is_null() {
        ControllerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    let level = config.level_filter().map_err(|e| JsValue::from_str(&e))?;

    with_controller(|c| c.set_config(config)).map_err(|e| JsValue::from_str(&e))?;
    logging::init(level);
    Ok(())
}

#[wasm_bindgen]
pub fn click(x: f64, y: f64) -> bool {
    with_controller(|c| c.click(x, y))
}

#[wasm_bindgen]
pub fn confirm_move() -> bool {
    with_controller(|c| c.confirm(Instant::now()))
}

#[wasm_bindgen]
pub fn restart_game() -> bool {
    with_controller(Controller::restart)
}

#[wasm_bindgen]
pub fn computer_first() -> bool {
    with_controller(|c| c.computer_first(Instant::now()))
}

#[wasm_bindgen]
pub fn key_down(key: &str) -> bool {
    with_controller(|c| c.key_down(key))
}

/// Call once per animation frame.
#[wasm_bindgen]
pub fn tick() -> bool {
    with_controller(|c| c.tick(Instant::now()))
}

#[wasm_bindgen]
pub fn view() -> Result<JsValue, JsValue> {
    let view = with_controller(|c| c.view());
    to_js(&view)
}

#[wasm_bindgen]
pub fn game_state() -> Result<JsValue, JsValue> {
    let state = with_controller(|c| c.game().to_game_state());
    to_js(&state)
}
