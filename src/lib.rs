//! Kanji Trace core crate.
//!
//! A kanji chart (`/`) linking to a tracing page (`/trace/{glyph}`) that
//! overlays an animated stroke-order SVG on a freehand canvas. The host page
//! loads the wasm module and calls `start_app()`.
//!
//! Static datasets and the pure pieces (routing, reveal schedule, pen state
//! machine, page resolution) compile and test natively; the DOM glue only
//! runs in the browser.

use wasm_bindgen::prelude::*;

mod app;
mod dom;
mod styles;

pub mod chart_view;
pub mod config;
pub mod error;
pub mod feedback;
pub mod kanji;
pub mod route;
pub mod session;
pub mod stroke_guide;
pub mod surface;
pub mod tracing_view;

pub use error::TraceError;
pub use kanji::{CharacterRecord, KANJI_ASSETS, KANJI_CHART, KANJI_STROKE_ORDERS};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    app::start().map_err(JsValue::from)
}

/// Chart records as JSON, for host pages that want to render their own index.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn chart_json() -> Result<String, JsValue> {
    kanji::chart_json().map_err(JsValue::from)
}
