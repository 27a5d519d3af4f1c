//! Text utility API
//!
//! JS-facing wrappers around file-name templating, notation stripping
//! and basename extraction.

use wasm_bindgen::prelude::*;

use super::helpers;
use crate::text::filename::{build_audio_file_name, current_date_string, sanitize_file_name, FileNameVariables};
use crate::text::notation::{extract_export_text, extract_yomi_text, ExtractOptions};
use crate::text::path::base_name_for_platform;

#[wasm_bindgen(js_name = sanitizeFileName)]
pub fn sanitize_file_name_js(file_name: &str) -> String {
    sanitize_file_name(file_name)
}

/// Expand the audio file-name template with the given variables
#[wasm_bindgen(js_name = buildAudioFileName)]
pub fn build_audio_file_name_js(pattern: &str, vars: JsValue) -> Result<String, JsValue> {
    let vars: FileNameVariables =
        helpers::deserialize(vars, "Failed to deserialize file name variables")?;
    Ok(build_audio_file_name(pattern, &vars))
}

#[wasm_bindgen(js_name = currentDateString)]
pub fn current_date_string_js() -> String {
    current_date_string()
}

/// Text for file export: memos dropped, ruby resolved to the base form
#[wasm_bindgen(js_name = extractExportText)]
pub fn extract_export_text_js(
    text: &str,
    enable_memo_notation: bool,
    enable_ruby_notation: bool,
) -> String {
    extract_export_text(
        text,
        ExtractOptions {
            enable_memo_notation,
            enable_ruby_notation,
        },
    )
}

/// Text for synthesis: memos dropped, ruby resolved to the reading form
#[wasm_bindgen(js_name = extractYomiText)]
pub fn extract_yomi_text_js(
    text: &str,
    enable_memo_notation: bool,
    enable_ruby_notation: bool,
) -> String {
    extract_yomi_text(
        text,
        ExtractOptions {
            enable_memo_notation,
            enable_ruby_notation,
        },
    )
}

/// Final component of a host path, honoring the host's path flavor
#[wasm_bindgen(js_name = getBaseName)]
pub fn get_base_name_js(file_path: &str) -> String {
    base_name_for_platform(file_path)
}
