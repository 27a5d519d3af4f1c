//! Voice Synthesis Editor WASM Module
//!
//! This is the main WASM module for the voice synthesis editor front end.
//! It provides the editor's model types and the pure utility routines the
//! GUI shell calls into: file-name templating, text-notation stripping,
//! and tuning-preserving reconciliation of accent phrases.

pub mod models;
pub mod text;
pub mod tuning;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::accent::{accent_phrases_text_differs, AccentPhrase, Mora};
pub use models::character::{
    filter_character_infos_by_style_type, format_character_style_name, CharacterInfo,
    CharacterMetas, StyleFilter, StyleInfo, StyleType,
};
pub use models::params::SliderParameter;
pub use models::toolbar::ToolbarButtonTag;
pub use tuning::transcription::TuningTranscription;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Voice editor WASM module initialized");
}
