//! Lore Path core crate.
//!
//! Walking the Lore Path: a side-scrolling browser trivia game. A badger runs
//! across parallax skies, stops at treasure chests, and answers timed
//! multiple-choice questions; clearing the whole session ends at the castle
//! with a score summary. The game rules live in [`game`] as plain Rust so the
//! host tests run natively; [`web`] binds them to canvas, DOM, and the two
//! browser timing channels.

use wasm_bindgen::prelude::*;

pub mod game;
pub mod web;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Host API
// -----------------------------------------------------------------------------

/// Boot the game with the shipped defaults: canvas, widgets, listeners, asset
/// loading, and both timing channels.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start_game(game::GameConfig::default())
}

/// Boot with a JSON config override, e.g.
/// `{"questionCount": 10, "countdownMs": 8000}`.
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config: game::GameConfig =
        serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    web::start_game(config)
}

/// Leave the start screen (the start button / Space key call this).
#[wasm_bindgen]
pub fn start() {
    web::with_engine(|engine| engine.start());
}

/// Run toggle: begin scrolling, or abandon a run already underway.
#[wasm_bindgen]
pub fn toggle_run() {
    web::with_engine(|engine| engine.toggle_run());
}

/// Answer the active question by displayed slot (0..=3). Ignored while
/// locked, before the reveal completes, or outside the question phase.
#[wasm_bindgen]
pub fn submit_answer(slot: u32) {
    web::with_engine(|engine| engine.submit_answer(slot as usize));
}

/// Reset the finished session and return to the start screen.
#[wasm_bindgen]
pub fn restart() {
    web::restart_game();
}

/// Current phase name: "loading", "start", "ready", "running", "question",
/// "victory", or "gameOver".
#[wasm_bindgen]
pub fn get_phase() -> String {
    web::with_engine(|engine| engine.phase().as_str().to_string())
        .unwrap_or_else(|| "loading".to_string())
}

/// Current tally as JSON: `{"correct": n, "incorrect": m}`.
#[wasm_bindgen]
pub fn get_score() -> String {
    web::with_engine(|engine| {
        serde_json::to_string(&engine.score()).unwrap_or_else(|_| "{}".to_string())
    })
    .unwrap_or_else(|| "{}".to_string())
}

/// Question counter as JSON: `{"current": n, "total": m, "percentage": p}`.
#[wasm_bindgen]
pub fn get_progress() -> String {
    web::with_engine(|engine| {
        serde_json::to_string(&engine.progress()).unwrap_or_else(|_| "{}".to_string())
    })
    .unwrap_or_else(|| "{}".to_string())
}
