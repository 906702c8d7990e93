pub mod runner;

pub use runner::{OrreryRunner, RING_FLOATS};

use std::cell::RefCell;

use orrery_engine::{Catalogue, ClockCommand, PropagatorConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = RefCell::new(None);
}

/// Run `f` against the runner. `None` before `orrery_init` has succeeded.
fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn push(command: ClockCommand) {
    if with_runner(|r| r.push_command(command)).is_none() {
        log::warn!("orrery: command {command:?} before init, ignored");
    }
}

/// Build the propagator. Both arguments are optional JSON: a body catalogue
/// (the built-in one is used when absent) and a config overriding defaults.
#[wasm_bindgen]
pub fn orrery_init(catalogue_json: Option<String>, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let to_js = |e: &dyn std::fmt::Display| JsValue::from_str(&e.to_string());

    let config = match config_json {
        Some(json) => PropagatorConfig::from_json(&json).map_err(|e| to_js(&e))?,
        None => PropagatorConfig::default(),
    };
    let runner = match catalogue_json {
        Some(json) => {
            let catalogue = Catalogue::from_json(&json).map_err(|e| to_js(&e))?;
            OrreryRunner::new(&catalogue, config)
        }
        None => OrreryRunner::with_builtin(config),
    }
    .map_err(|e| to_js(&e))?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn orrery_tick(real_dt: f64) {
    with_runner(|r| r.tick(real_dt));
}

// ---- Time controls ----

#[wasm_bindgen]
pub fn orrery_toggle_pause() {
    push(ClockCommand::TogglePause);
}

#[wasm_bindgen]
pub fn orrery_set_rate(days_per_second: f64) {
    push(ClockCommand::SetRate(days_per_second));
}

#[wasm_bindgen]
pub fn orrery_speed_up() {
    push(ClockCommand::SpeedUp);
}

#[wasm_bindgen]
pub fn orrery_slow_down() {
    push(ClockCommand::SlowDown);
}

#[wasm_bindgen]
pub fn orrery_reset_rate() {
    push(ClockCommand::ResetRate);
}

#[wasm_bindgen]
pub fn orrery_set_time(julian_date: f64) {
    push(ClockCommand::SetTime(julian_date));
}

#[wasm_bindgen]
pub fn orrery_set_paths_visible(visible: bool) {
    with_runner(|r| r.set_paths_visible(visible));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_path_vertices_ptr() -> *const f32 {
    with_runner(|r| r.path_vertices_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_path_vertex_count() -> u32 {
    with_runner(|r| r.path_vertex_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_path_spans_ptr() -> *const u32 {
    with_runner(|r| r.path_spans_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_path_count() -> u32 {
    with_runner(|r| r.path_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_rings_ptr() -> *const f32 {
    with_runner(|r| r.rings_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_ring_count() -> u32 {
    with_runner(|r| r.ring_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_julian_date() -> f64 {
    with_runner(|r| r.julian_date()).unwrap_or(0.0)
}

/// Current simulated time as `YYYY-MM-DD HH:MM`.
#[wasm_bindgen]
pub fn get_date_string() -> String {
    with_runner(|r| r.date_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_rate() -> f64 {
    with_runner(|r| r.rate()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_is_paused() -> bool {
    with_runner(|r| r.is_paused()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn get_body_name(index: u32) -> Option<String> {
    with_runner(|r| r.body_name(index).map(str::to_owned)).flatten()
}
