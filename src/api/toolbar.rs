//! Toolbar metadata API

use wasm_bindgen::prelude::*;

use super::helpers;
use crate::models::params::SliderParameters;
use crate::models::toolbar::ToolbarButtonTag;
use crate::utils::keyboard::{is_command_or_ctrl_down, ModifierState};

fn parse_tag(tag: &str) -> Result<ToolbarButtonTag, JsValue> {
    tag.parse().map_err(helpers::validation_error)
}

/// Display name of a toolbar button tag (e.g. `PLAY` → 選択音声を再生)
#[wasm_bindgen(js_name = getToolbarButtonName)]
pub fn get_toolbar_button_name(tag: &str) -> Result<String, JsValue> {
    Ok(parse_tag(tag)?.name().to_string())
}

/// Icon identifier of a toolbar button tag
#[wasm_bindgen(js_name = getToolbarButtonIcon)]
pub fn get_toolbar_button_icon(tag: &str) -> Result<String, JsValue> {
    Ok(parse_tag(tag)?.icon().to_string())
}

/// Bounds and step sizes for the prosody parameter sliders
#[wasm_bindgen(js_name = sliderParameters)]
pub fn slider_parameters() -> Result<JsValue, JsValue> {
    helpers::serialize(&SliderParameters::default(), "Failed to serialize slider parameters")
}

/// Whether the platform's primary command modifier (Cmd on macOS, Ctrl
/// elsewhere) is down in the given event state
#[wasm_bindgen(js_name = isOnCommandOrCtrlKeyDown)]
pub fn is_on_command_or_ctrl_key_down(meta_key: bool, ctrl_key: bool) -> bool {
    is_command_or_ctrl_down(ModifierState { meta_key, ctrl_key })
}
