//! Sequence Symmetry WASM Module
//!
//! Classification engine for movement sequences: given the beats of a
//! sequence, find which rotations, reflections, role swaps, motion
//! inversions, repeats and time reversals relate them, and produce one
//! canonical, human-readable label.

pub mod models;
pub mod transforms;
pub mod analysis;
pub mod labels;
pub mod config;
pub mod errors;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use analysis::{classify, classify_designation, ClassificationReport, PairingStrategy};
pub use config::{ClassifierPass, ClassifierSettings};
pub use errors::EngineError;
pub use labels::{format_designation, map_to_canonical_id, CanonicalId};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("logger already initialized: {}", e)));
        }
    }

    log::info!("Sequence symmetry WASM module initialized");
}
