//! Valentine Card core crate.
//!
//! A forward-only sequence of romantic screens (welcome, music, heart, reasons,
//! letter, question, flowers) driven by [`flow::FlowController`], with a
//! background-music overlay that persists once a soundtrack has been chosen.
//! The flow and every screen's interaction state are plain Rust and run on the
//! host; the DOM side only exists behind `start_card()`.

use wasm_bindgen::prelude::*;

mod card;
pub mod config;
mod decor;
mod dom;
pub mod error;
pub mod flow;
pub mod player;
pub mod screens;
pub mod tracks;

pub use config::CardConfig;
pub use decor::DecorRng;
pub use error::CardError;
pub use flow::{FlowController, Screen, Session, Transition};
pub use tracks::TrackId;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Mount the card with the stock content.
#[wasm_bindgen]
pub fn start_card() -> Result<(), JsValue> {
    card::start(CardConfig::default()).map_err(JsValue::from)
}

/// Mount the card with a JSON config; unspecified fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_card_with_config(json: &str) -> Result<(), JsValue> {
    let config = CardConfig::from_json(json)?;
    card::start(config).map_err(JsValue::from)
}

/// Name of the screen on display ("welcome" before the card starts).
#[wasm_bindgen]
pub fn current_screen() -> String {
    card::session()
        .map(|s| s.screen)
        .unwrap_or_default()
        .as_str()
        .to_string()
}

/// Id of the selected soundtrack, if any.
#[wasm_bindgen]
pub fn selected_track() -> Option<String> {
    card::session()
        .and_then(|s| s.track)
        .map(|t| t.as_str().to_string())
}
