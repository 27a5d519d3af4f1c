//! Tuning reconciliation API

use wasm_bindgen::prelude::*;

use super::helpers;
use crate::models::accent::{accent_phrases_text_differs, AccentPhrase};
use crate::tuning::transcription::TuningTranscription;

/// Re-attach tuned per-mora parameters from `before` onto the structure
/// of `after` wherever the mora text is unchanged.
#[wasm_bindgen(js_name = applyTuningTranscription)]
pub fn apply_tuning_transcription(before: JsValue, after: JsValue) -> Result<JsValue, JsValue> {
    let before: Vec<AccentPhrase> =
        helpers::deserialize(before, "Failed to deserialize accent phrases (before)")?;
    let after: Vec<AccentPhrase> =
        helpers::deserialize(after, "Failed to deserialize accent phrases (after)")?;

    let result = TuningTranscription::new(&before, &after).transcribe();
    helpers::serialize(&result, "Failed to serialize transcribed accent phrases")
}

/// Whether two accent phrase lists differ in text content
#[wasm_bindgen(js_name = isAccentPhrasesTextDifferent)]
pub fn is_accent_phrases_text_different(before: JsValue, after: JsValue) -> Result<bool, JsValue> {
    let before: Vec<AccentPhrase> =
        helpers::deserialize(before, "Failed to deserialize accent phrases (before)")?;
    let after: Vec<AccentPhrase> =
        helpers::deserialize(after, "Failed to deserialize accent phrases (after)")?;

    Ok(accent_phrases_text_differs(&before, &after))
}
