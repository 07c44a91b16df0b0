//! Raffle Number Picker WASM Module
//!
//! This is the main WASM module for the raffle ticket page. It tracks
//! which grid numbers the user has selected and mirrors that state into
//! the page's counter and hidden form field.

pub mod api;
pub mod error;
pub mod models;
pub mod tracker;
pub mod view;

// Re-export commonly used types
pub use error::PickerError;
pub use models::bindings::PageBindings;
pub use models::selection::Selection;
pub use tracker::SelectionTracker;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Number picker WASM module initialized");
}
