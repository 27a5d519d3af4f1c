//! Character and style API

use wasm_bindgen::prelude::*;

use super::helpers;
use crate::models::character::{
    filter_character_infos_by_style_type, format_character_style_name, CharacterInfo, StyleFilter,
};
use crate::utils::hash::generate_temp_unique_id;

/// Filter character infos by style type.
///
/// `style_type` is one of `talk`, `sing`, `singing_teacher`,
/// `frame_decode` or `singerLike`.
#[wasm_bindgen(js_name = filterCharacterInfosByStyleType)]
pub fn filter_character_infos_by_style_type_js(
    character_infos: JsValue,
    style_type: &str,
) -> Result<JsValue, JsValue> {
    let character_infos: Vec<CharacterInfo> =
        helpers::deserialize(character_infos, "Failed to deserialize character infos")?;
    let filter: StyleFilter = style_type.parse().map_err(helpers::validation_error)?;

    let filtered = filter_character_infos_by_style_type(&character_infos, filter);
    helpers::serialize(&filtered, "Failed to serialize character infos")
}

/// Display label for a character/style pair
#[wasm_bindgen(js_name = formatCharacterStyleName)]
pub fn format_character_style_name_js(character_name: &str, style_name: Option<String>) -> String {
    format_character_style_name(character_name, style_name.as_deref())
}

/// Session-scoped identifier derived from a value's content.
///
/// Not for persistence: the id only identifies the value within the
/// running session.
#[wasm_bindgen(js_name = generateTempUniqueId)]
pub fn generate_temp_unique_id_js(value: JsValue) -> Result<String, JsValue> {
    let value: serde_json::Value =
        helpers::deserialize(value, "Failed to deserialize value for unique id")?;
    generate_temp_unique_id(&value)
        .map_err(|e| helpers::validation_error(format!("Failed to generate unique id: {e}")))
}
