//! Interactive CFG Viewer WASM Module
//!
//! Turns control-flow-graph SVGs into clickable pages: every anchor element
//! gets a click handler that shows its decoded title in the infobox panel,
//! and raw SVGs can be wrapped into self-contained viewer pages.

pub mod api;
pub mod pagify;
pub mod titles;
pub mod viewer;

// Re-export the library-facing surface
pub use pagify::{pagify, PageOptions, PagifyError};
pub use viewer::{InfoBinder, ViewerError, INFOBOX_ID, TITLE_ATTR};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("CFG viewer WASM module initialized");
}
